// Copyright 2024 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use fingerprint::Fingerprint;
use umi_dedup::{build_index, build_neighbours, cluster, histogram, Config, ClusterPolicy, SourceRecord};

fn record(id: u64, symbols: &[u8], filtered: bool) -> SourceRecord {
	SourceRecord { record_id: id, fingerprint: Fingerprint::new(symbols.to_vec()), filtered }
}

#[test]
fn end_to_end_pipeline_clusters_near_duplicates() {
	let cfg = Config::new(4, 4, 1, ClusterPolicy::Adjacency).unwrap();
	let records = vec![
		record(0, &[0, 0, 0, 0], false),
		record(1, &[0, 0, 0, 0], false),
		record(2, &[0, 0, 0, 1], false), // one mismatch from the pair above
		record(3, &[3, 3, 3, 3], false), // unrelated, far away
		record(4, &[2, 2, 2, 2], true),  // filtered, should not be indexed
	];

	let (mut trie, counts) = build_index(records.into_iter(), &cfg).unwrap();
	assert_eq!(counts.total, 5);
	assert_eq!(counts.kept, 4);
	assert_eq!(trie.leaf_count(), 3);

	build_neighbours(&mut trie, cfg.distance).unwrap();
	let clusters = cluster(&mut trie, cfg.policy);

	// The two near-identical fingerprints plus their one-mismatch cousin
	// should land in one cluster; the unrelated fingerprint in another.
	assert_eq!(clusters.len(), 2);

	let hist = histogram(&clusters);
	assert_eq!(hist.values().sum::<usize>(), 2);
	assert!(hist.contains_key(&3)); // the merged cluster holds 3 records
	assert!(hist.contains_key(&1)); // the lone unrelated cluster holds 1
}

#[test]
fn filtered_records_never_reach_the_trie() {
	let cfg = Config::new(3, 4, 0, ClusterPolicy::Adjacency).unwrap();
	let records = vec![record(0, &[0, 0, 0], true), record(1, &[1, 1, 1], true)];
	let (trie, counts) = build_index(records.into_iter(), &cfg).unwrap();
	assert_eq!(counts.total, 2);
	assert_eq!(counts.kept, 0);
	assert_eq!(trie.leaf_count(), 0);
}
