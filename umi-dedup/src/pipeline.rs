// Copyright 2024 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The three phases: read and index, link neighbours, cluster.

use fingerprint::Result;
use log::info;
use trace_time::trace_time;
use umi_cluster::{Clusters, ClusterPolicy};
use umi_trie::Trie;

use crate::config::Config;
use crate::source::SourceRecord;

/// How many source records were seen and how many made it into the trie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
	pub total: usize,
	pub kept: usize,
}

/// Reads every record from `source` into a fresh trie. Filtered records are
/// skipped but still counted; every kept record is validated against `cfg`
/// by [`umi_trie::Trie::add`].
///
/// # Errors
///
/// Propagates [`fingerprint::Error::FingerprintLengthMismatch`] or
/// [`fingerprint::Error::SymbolOutOfRange`] from the first offending record.
pub fn build_index(source: impl Iterator<Item = SourceRecord>, cfg: &Config) -> Result<(Trie, Counts)> {
	trace_time!("build_index");
	info!(target: "umi_dedup", "reading data...");

	let mut trie = Trie::new(cfg.length, cfg.alphabet_size);
	let mut counts = Counts::default();
	for record in source {
		counts.total += 1;
		if record.filtered {
			continue;
		}
		trie.add(&record.fingerprint, record.record_id as usize)?;
		counts.kept += 1;
	}

	info!(
		target: "umi_dedup",
		"reading data... done ({} of {} records kept, {} distinct fingerprints)",
		counts.kept,
		counts.total,
		trie.leaf_count()
	);
	Ok((trie, counts))
}

/// Links every pair of leaves within `distance` of one another.
///
/// # Errors
///
/// Propagates errors from probing the trie (only possible if `distance`
/// does not match the trie's configured length, which callers should have
/// already validated via [`Config::new`](crate::Config::new)).
pub fn build_neighbours(trie: &mut Trie, distance: usize) -> Result<()> {
	trace_time!("build_neighbours");
	info!(target: "umi_dedup", "calculating neighbours...");
	umi_cluster::build_neighbours(trie, distance)?;
	info!(target: "umi_dedup", "calculating neighbours... done");
	Ok(())
}

/// Partitions every leaf in `trie` into clusters under `policy`.
pub fn cluster(trie: &mut Trie, policy: ClusterPolicy) -> Clusters {
	trace_time!("cluster");
	info!(target: "umi_dedup", "calculating clusters...");
	let clusters = umi_cluster::cluster(trie, policy);
	info!(target: "umi_dedup", "calculating clusters... done ({} clusters)", clusters.len());
	clusters
}
