// Copyright 2024 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Command-line driver: read paired FASTQ + UMI files, cluster near-duplicate
//! fingerprints, and report which cluster every kept record landed in.
//!
//! Mirrors `examples/original_source/src/dedup.cc`'s `dedup()` function:
//! read and index, link neighbours, cluster, then write `record cluster`
//! pairs.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{info, warn};
use umi_dedup::{build_index, build_neighbours, cluster, Config};
use umi_fastq::PairedFastqSource;

/// Cluster near-duplicate reads by UMI + read prefix.
#[derive(Parser, Debug)]
#[command(name = "umi-dedup", version, about)]
struct Args {
	/// FASTQ file for read 1.
	read1: PathBuf,
	/// FASTQ file for read 2.
	read2: PathBuf,
	/// FASTQ file for the UMI.
	umi: PathBuf,
	/// Number of leading bases taken from each read to build a fingerprint.
	length: usize,

	/// Maximum Hamming distance between fingerprints considered duplicates.
	#[arg(short = 'd', long, default_value_t = 1)]
	distance: usize,

	/// Where to write `record_id cluster_id` pairs. Defaults to stdout.
	#[arg(short = 'o', long)]
	output: Option<PathBuf>,

	/// Where to write log output. Defaults to stderr.
	#[arg(short = 'l', long)]
	log: Option<PathBuf>,
}

fn init_logging(log_path: Option<&PathBuf>) -> io::Result<()> {
	let mut builder = env_logger::Builder::from_default_env();
	builder.filter_level(log::LevelFilter::Info);
	if let Some(path) = log_path {
		let file = File::create(path)?;
		builder.target(env_logger::Target::Pipe(Box::new(file)));
	}
	builder.init();
	Ok(())
}

fn run(args: Args) -> fingerprint::Result<()> {
	let cfg = Config::new(args.length, 4, args.distance, Default::default())?;

	let mut source = PairedFastqSource::open(&args.read1, &args.read2, &args.umi, args.length)?;
	let (mut trie, counts) = build_index(&mut source, &cfg)?;
	if let Some(err) = source.error() {
		warn!(target: "umi_dedup_cli", "stopped reading early: {}", err);
	}

	build_neighbours(&mut trie, cfg.distance)?;
	let clusters = cluster(&mut trie, cfg.policy);

	let mut out: Box<dyn Write> = match &args.output {
		Some(path) => Box::new(BufWriter::new(File::create(path)?)),
		None => Box::new(BufWriter::new(io::stdout())),
	};
	for (leaf_id, leaf) in trie.leaves() {
		if let Some(cluster_id) = trie.cluster_of(leaf_id) {
			for &line in leaf.lines() {
				writeln!(out, "{} {}", line, cluster_id.0)?;
			}
		}
	}
	out.flush()?;

	info!(
		target: "umi_dedup_cli",
		"kept {} of {} records; {} distinct fingerprints formed {} clusters",
		counts.kept,
		counts.total,
		trie.leaf_count(),
		clusters.len()
	);
	Ok(())
}

fn main() -> ExitCode {
	let args = Args::parse();
	if let Err(err) = init_logging(args.log.as_ref()) {
		eprintln!("failed to open log file: {}", err);
		return ExitCode::FAILURE;
	}
	match run(args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			log::error!(target: "umi_dedup_cli", "{}", err);
			ExitCode::FAILURE
		}
	}
}
