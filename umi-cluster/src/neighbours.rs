// Copyright 2024 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Builds the neighbour graph over a trie's leaves.

use fingerprint::Fingerprint;
use log::debug;
use umi_trie::{Entry, Trie};

/// Connects every pair of leaves within Hamming `distance` of one another.
///
/// For each distinct fingerprint stored in `trie`, probes the trie for every
/// leaf within `distance` and links the two. [`Trie::connect`] is symmetric
/// and idempotent, so visiting both leaves of a pair (once while walking
/// each of them) records one edge, not two.
pub fn build(trie: &mut Trie, distance: usize) -> fingerprint::Result<()> {
	let walked: Vec<Entry> = trie.walk().collect();
	let mut edges = 0usize;
	for entry in &walked {
		let query = Fingerprint::new(entry.path.clone());
		let nearby: Vec<_> = trie.hamming(&query, distance)?.collect();
		for hit in nearby {
			if hit.leaf != entry.leaf {
				trie.connect(entry.leaf, hit.leaf);
				edges += 1;
			}
		}
	}
	debug!(target: "umi_cluster", "considered {} candidate edges over {} leaves", edges, walked.len());
	Ok(())
}
