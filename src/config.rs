//! Page configuration carried in the URL query string.
//!
//! `?algorithm=erdos-renyi&n=12&p=0.3&seed=42` restores the same sliders and
//! draws the same graph, so a configuration can be shared as a link.

use crate::network::{Algorithm, Parameters};

/// Seed used when the query does not carry one.
pub const DEFAULT_SEED: u64 = 42;

/// Everything the sidebar controls.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
	/// Chosen generator.
	pub algorithm: Algorithm,
	/// Slider values for `algorithm`.
	pub params: Parameters,
	/// Seed for the random generators.
	pub seed: u64,
}

impl Default for Selection {
	fn default() -> Self {
		Self::new(Algorithm::default())
	}
}

impl Selection {
	/// Default sliders for `algorithm`, default seed.
	pub fn new(algorithm: Algorithm) -> Self {
		Self {
			algorithm,
			params: Parameters::defaults_for(algorithm),
			seed: DEFAULT_SEED,
		}
	}

	/// Reads a selection through `lookup`, a query-string getter.
	///
	/// Missing or malformed entries keep their defaults; out-of-range values
	/// are clamped the same way the sliders clamp them.
	pub fn from_query(lookup: impl Fn(&str) -> Option<String>) -> Self {
		let algorithm = lookup("algorithm")
			.and_then(|s| s.parse().ok())
			.unwrap_or_default();
		let mut selection = Self::new(algorithm);

		for spec in algorithm.params() {
			if let Some(value) = lookup(spec.key).and_then(|s| s.parse::<f64>().ok()) {
				selection.params.set(spec.key, value);
			}
		}
		if let Some(seed) = lookup("seed").and_then(|s| s.parse().ok()) {
			selection.seed = seed;
		}
		selection
	}

	/// Query string (without the leading `?`) that [`Selection::from_query`]
	/// reads back into an equal selection.
	pub fn to_query(&self) -> String {
		let mut query = format!("algorithm={}", self.algorithm);
		for (key, value) in self.params.iter() {
			query.push_str(&format!("&{key}={value}"));
		}
		query.push_str(&format!("&seed={}", self.seed));
		query
	}

	/// Switches generator, resetting the sliders to its defaults.
	pub fn switch_to(&mut self, algorithm: Algorithm) {
		if self.algorithm != algorithm {
			self.algorithm = algorithm;
			self.params = Parameters::defaults_for(algorithm);
		}
	}

	/// Moves one slider of the current generator.
	pub fn set_param(&mut self, key: &str, value: f64) {
		self.params.set(key, value);
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	fn query(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
		let map: HashMap<String, String> = pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		move |key| map.get(key).cloned()
	}

	#[test]
	fn empty_query_gives_defaults() {
		assert_eq!(Selection::from_query(query(&[])), Selection::default());
	}

	#[test]
	fn query_round_trip() {
		let mut selection = Selection::new(Algorithm::RandomLobster);
		selection.set_param("p2", 0.45);
		selection.seed = 9001;

		let text = selection.to_query();
		assert_eq!(text, "algorithm=random-lobster&n=10&p1=0.1&p2=0.45&seed=9001");

		let pairs: Vec<(&str, &str)> = text
			.split('&')
			.filter_map(|kv| kv.split_once('='))
			.collect();
		assert_eq!(Selection::from_query(query(&pairs)), selection);
	}

	#[test]
	fn malformed_values_fall_back() {
		let selection = Selection::from_query(query(&[
			("algorithm", "barabasi-albert"),
			("n", "lots"),
			("m", "50"),
			("seed", "-3"),
		]));
		assert_eq!(selection.algorithm, Algorithm::BarabasiAlbert);
		assert_eq!(selection.params.get("n"), 10.0);
		assert_eq!(selection.params.get("m"), 9.0);
		assert_eq!(selection.seed, DEFAULT_SEED);
	}

	#[test]
	fn unknown_algorithm_is_complete_graph() {
		let selection = Selection::from_query(query(&[("algorithm", "hypercube"), ("n", "4")]));
		assert_eq!(selection.algorithm, Algorithm::Complete);
		assert_eq!(selection.params.get("n"), 4.0);
	}

	#[test]
	fn switching_resets_sliders() {
		let mut selection = Selection::default();
		selection.set_param("n", 3.0);
		selection.switch_to(Algorithm::Complete);
		assert_eq!(selection.params.get("n"), 3.0);

		selection.switch_to(Algorithm::BinomialTree);
		assert_eq!(selection.params.get("order"), 2.0);
		assert_eq!(selection.params.get("n"), 0.0);
	}
}
