// Copyright 2024 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pipeline configuration.

use fingerprint::{Error, Result};
use umi_cluster::ClusterPolicy;

/// Configuration shared by every phase of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
	/// Fingerprint length in symbols.
	pub length: usize,
	/// Alphabet size; symbols must lie in `[0, alphabet_size)`.
	pub alphabet_size: u8,
	/// Maximum Hamming distance considered when linking neighbours.
	pub distance: usize,
	/// Which clustering policy to apply.
	pub policy: ClusterPolicy,
}

impl Config {
	/// Builds a validated configuration.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidConfiguration`] if `length` is zero or
	/// `distance` exceeds `length`.
	pub fn new(length: usize, alphabet_size: u8, distance: usize, policy: ClusterPolicy) -> Result<Self> {
		if length == 0 {
			return Err(Error::InvalidConfiguration("length must be greater than zero".into()));
		}
		if distance > length {
			return Err(Error::InvalidConfiguration(format!(
				"distance {} exceeds fingerprint length {}",
				distance, length
			)));
		}
		Ok(Config { length, alphabet_size, distance, policy })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rejects_zero_length() {
		assert!(Config::new(0, 4, 0, ClusterPolicy::Adjacency).is_err());
	}

	#[test]
	fn rejects_distance_exceeding_length() {
		assert!(Config::new(3, 4, 4, ClusterPolicy::Adjacency).is_err());
	}

	#[test]
	fn accepts_distance_equal_to_length() {
		assert!(Config::new(3, 4, 3, ClusterPolicy::Adjacency).is_ok());
	}
}
