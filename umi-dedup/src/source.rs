// Copyright 2024 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The collaborator boundary between raw input and the trie.

use fingerprint::Fingerprint;

/// One record produced by a fingerprint source.
///
/// `filtered` records still count toward [`crate::Counts::total`] but are
/// never inserted into the trie, since the source decided the fingerprint
/// isn't trustworthy (e.g. an unrecognised nucleotide), not the core.
#[derive(Debug, Clone)]
pub struct SourceRecord {
	/// Identifies this record in the source's own numbering (line number,
	/// FASTQ record index, ...). Carried through to clustering output.
	pub record_id: u64,
	pub fingerprint: Fingerprint,
	pub filtered: bool,
}

/// Produces a finite sequence of [`SourceRecord`]s. Any iterator over
/// `SourceRecord` qualifies; this trait exists to name the seam, the way
/// `kvdb::KeyValueDB` names the boundary between the teacher's core and its
/// storage backends.
pub trait FingerprintSource: Iterator<Item = SourceRecord> {}

impl<T: Iterator<Item = SourceRecord>> FingerprintSource for T {}
