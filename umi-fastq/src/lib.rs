// Copyright 2024 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fingerprint source reading paired FASTQ reads plus a UMI FASTQ file.
//!
//! Maps `{A,C,G,T}` to `{0,1,2,3}`; any other byte falls back to `G`'s
//! symbol and marks the record `filtered`, the same substitution
//! `examples/original_source/src/ngs.cc`'s `makeWord` performs.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use bio::io::fastq;
use fingerprint::{Error, Fingerprint, Result};
use log::warn;
use umi_dedup::SourceRecord;

fn nucleotide_symbol(byte: u8) -> (u8, bool) {
	match byte {
		b'A' => (0, false),
		b'C' => (1, false),
		b'G' => (2, false),
		b'T' => (3, false),
		_ => (2, true),
	}
}

/// Builds one fingerprint from the first `length` bases of each of `reads`,
/// concatenated in order. Returns whether any base had to be substituted.
fn make_word(reads: &[&[u8]], length: usize) -> (Fingerprint, bool) {
	let mut symbols = Vec::with_capacity(reads.len() * length);
	let mut filtered = false;
	for seq in reads {
		for i in 0..length {
			let (symbol, bad) = match seq.get(i) {
				Some(&byte) => nucleotide_symbol(byte),
				None => (2, true),
			};
			symbols.push(symbol);
			filtered |= bad;
		}
	}
	(Fingerprint::new(symbols), filtered)
}

/// A [`umi_dedup::FingerprintSource`] over three FASTQ files read in
/// lock-step: read 1, read 2, and the UMI. Stops as soon as any one of the
/// three is exhausted, discarding a ragged final record rather than
/// fabricating one (the same behaviour as the original reader, which
/// drops the last triple once any file hits EOF).
pub struct PairedFastqSource {
	read1: fastq::Records<BufReader<File>>,
	read2: fastq::Records<BufReader<File>>,
	umi: fastq::Records<BufReader<File>>,
	length: usize,
	next_id: u64,
	error: Option<Error>,
}

impl PairedFastqSource {
	/// Opens the three FASTQ files. `length` is the number of leading bases
	/// taken from each read when building a fingerprint.
	pub fn open(read1: &Path, read2: &Path, umi: &Path, length: usize) -> Result<Self> {
		Ok(PairedFastqSource {
			read1: fastq::Reader::from_file(read1)?.records(),
			read2: fastq::Reader::from_file(read2)?.records(),
			umi: fastq::Reader::from_file(umi)?.records(),
			length,
			next_id: 0,
			error: None,
		})
	}

	/// The I/O or parse error that stopped iteration early, if any.
	/// `None` after a clean end of file on all three readers.
	pub fn error(&self) -> Option<&Error> {
		self.error.as_ref()
	}
}

impl Iterator for PairedFastqSource {
	type Item = SourceRecord;

	fn next(&mut self) -> Option<SourceRecord> {
		if self.error.is_some() {
			return None;
		}

		let r1 = match self.read1.next()? {
			Ok(record) => record,
			Err(err) => {
				self.error = Some(Error::Fastq(err.to_string()));
				return None;
			}
		};
		let r2 = match self.read2.next() {
			Some(Ok(record)) => record,
			Some(Err(err)) => {
				self.error = Some(Error::Fastq(err.to_string()));
				return None;
			}
			None => return None,
		};
		let umi_record = match self.umi.next() {
			Some(Ok(record)) => record,
			Some(Err(err)) => {
				self.error = Some(Error::Fastq(err.to_string()));
				return None;
			}
			None => return None,
		};

		let (fingerprint, filtered) =
			make_word(&[r1.seq(), r2.seq(), umi_record.seq()], self.length);
		if filtered {
			warn!(target: "umi_fastq", "record {} contains a non-ACGT base, filtering", self.next_id);
		}

		let record_id = self.next_id;
		self.next_id += 1;
		Some(SourceRecord { record_id, fingerprint, filtered })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn make_word_maps_known_nucleotides() {
		let (fp, filtered) = make_word(&[b"ACGT"], 4);
		assert_eq!(fp.as_slice(), &[0, 1, 2, 3]);
		assert!(!filtered);
	}

	#[test]
	fn make_word_substitutes_unknown_bases_with_g_and_flags_filtered() {
		let (fp, filtered) = make_word(&[b"ACNT"], 4);
		assert_eq!(fp.as_slice(), &[0, 1, 2, 3]);
		assert!(filtered);
	}

	#[test]
	fn make_word_treats_short_reads_as_filtered() {
		let (fp, filtered) = make_word(&[b"AC"], 4);
		assert_eq!(fp.as_slice(), &[0, 1, 2, 2]);
		assert!(filtered);
	}

	#[test]
	fn make_word_concatenates_multiple_reads() {
		let (fp, _) = make_word(&[b"AC", b"GT"], 2);
		assert_eq!(fp.as_slice(), &[0, 1, 2, 3]);
	}
}
