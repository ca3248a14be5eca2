//! The menu of generators offered on the page and their slider parameters.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use super::generators::{
	RegularConfig, balanced_tree, barabasi_albert_graph, binomial_tree, complete_graph,
	erdos_renyi_graph, newman_watts_strogatz_graph, random_lobster, random_regular_graph,
};
use super::{Network, NetworkError, Result};

/// Upper or lower end of a slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bound {
	/// A constant.
	Fixed(f64),
	/// Another parameter's current value plus an offset.
	Param { key: &'static str, offset: f64 },
}

impl Bound {
	/// Current value of the bound.
	pub fn resolve(self, params: &Parameters) -> f64 {
		match self {
			Bound::Fixed(v) => v,
			Bound::Param { key, offset } => params.get(key) + offset,
		}
	}
}

/// One slider: value range, step and the text shown next to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamSpec {
	/// Query-string and lookup key.
	pub key: &'static str,
	/// Text shown above the slider.
	pub label: &'static str,
	/// Optional hint shown under the slider.
	pub help: Option<&'static str>,
	/// Starting value.
	pub default: f64,
	/// Lowest value.
	pub min: f64,
	/// Highest value, possibly tied to another slider.
	pub max: Bound,
	/// Distance between selectable values.
	pub step: f64,
}

impl ParamSpec {
	const fn count(key: &'static str, label: &'static str, default: f64, min: f64, max: f64) -> Self {
		Self {
			key,
			label,
			help: None,
			default,
			min,
			max: Bound::Fixed(max),
			step: 1.0,
		}
	}

	const fn probability(key: &'static str, label: &'static str, default: f64) -> Self {
		Self {
			key,
			label,
			help: None,
			default,
			min: 0.0,
			max: Bound::Fixed(1.0),
			step: 0.05,
		}
	}

	const fn up_to(mut self, key: &'static str, offset: f64) -> Self {
		self.max = Bound::Param { key, offset };
		self
	}

	const fn with_help(mut self, help: &'static str) -> Self {
		self.help = Some(help);
		self
	}

	const fn with_step(mut self, step: f64) -> Self {
		self.step = step;
		self
	}

	/// Is this a probability rather than a count.
	pub fn is_fractional(&self) -> bool {
		self.step.fract() != 0.0
	}

	/// Snaps `value` onto the step grid within `[min, max]` for the current
	/// values of the parameters the bounds depend on.
	pub fn clamp(&self, value: f64, params: &Parameters) -> f64 {
		let max = self.max.resolve(params);
		let steps = ((max - self.min) / self.step + 1e-9).floor().max(0.0);
		let k = ((value - self.min) / self.step).round();
		let k = if k.is_nan() { 0.0 } else { k.clamp(0.0, steps) };
		let snapped = self.min + k * self.step;
		(snapped * 1e6).round() / 1e6
	}
}

const NODES: ParamSpec = ParamSpec::count("n", "Number of Nodes:", 10.0, 1.0, 20.0);

const COMPLETE: &[ParamSpec] =
	&[ParamSpec::count("n", "n", 10.0, 1.0, 20.0).with_help("Number of nodes")];
const ERDOS_RENYI: &[ParamSpec] = &[
	NODES,
	ParamSpec::probability("p", "Probability of Connection:", 0.5),
];
const BALANCED_TREE: &[ParamSpec] = &[
	ParamSpec::count("r", "Branching factor of the tree:", 5.0, 1.0, 8.0),
	ParamSpec::count("h", "Height of the tree:", 2.0, 1.0, 4.0),
];
const BINOMIAL_TREE: &[ParamSpec] = &[ParamSpec::count("order", "Order of the tree:", 2.0, 1.0, 8.0)];
const NEWMAN_WATTS_STROGATZ: &[ParamSpec] = &[
	NODES,
	ParamSpec::count("k", "Number of nearest neighbors:", 1.0, 1.0, 0.0).up_to("n", 0.0),
	ParamSpec::probability("p", "Probability of rewiring:", 0.1),
];
const BARABASI_ALBERT: &[ParamSpec] = &[
	NODES,
	ParamSpec::count("m", "Number of edges to attach from a new node:", 1.0, 1.0, 0.0)
		.up_to("n", -1.0),
];
const RANDOM_LOBSTER: &[ParamSpec] = &[
	ParamSpec::count("n", "The expected number of nodes in the backbone:", 10.0, 1.0, 20.0),
	ParamSpec::probability("p1", "Probability of adding an edge to the backbone:", 0.1),
	ParamSpec::probability(
		"p2",
		"Probability of adding an edge one level beyond backbone:",
		0.1,
	),
];
const RANDOM_REGULAR: &[ParamSpec] = &[
	ParamSpec::count(
		"n",
		"The number of nodes: The value of n x d must be even.",
		5.0,
		2.0,
		20.0,
	),
	ParamSpec::count("d", "The degree of each node:", 0.0, 0.0, 0.0)
		.up_to("n", -1.0)
		.with_step(2.0),
];

/// The graph families offered on the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
	/// Every pair of nodes connected.
	#[default]
	Complete,
	/// G(n, p) random graph.
	ErdosRenyi,
	/// Full r-ary tree of height h.
	BalancedTree,
	/// Binomial tree of a given order.
	BinomialTree,
	/// Ring lattice with random shortcuts.
	NewmanWattsStrogatz,
	/// Preferential attachment.
	BarabasiAlbert,
	/// Caterpillar backbone with random legs and leaves.
	RandomLobster,
	/// Random graph where every node has the same degree.
	RandomRegular,
}

impl Algorithm {
	/// Menu order.
	pub const ALL: [Algorithm; 8] = [
		Algorithm::Complete,
		Algorithm::ErdosRenyi,
		Algorithm::BalancedTree,
		Algorithm::BinomialTree,
		Algorithm::NewmanWattsStrogatz,
		Algorithm::BarabasiAlbert,
		Algorithm::RandomLobster,
		Algorithm::RandomRegular,
	];

	/// Name shown in the menu.
	pub fn label(self) -> &'static str {
		match self {
			Algorithm::Complete => "Complete Graph",
			Algorithm::ErdosRenyi => "Erdos-Renyi Graph",
			Algorithm::BalancedTree => "Balanced Tree",
			Algorithm::BinomialTree => "Binomial Tree",
			Algorithm::NewmanWattsStrogatz => "Newman–Watts–Strogatz small-world",
			Algorithm::BarabasiAlbert => "Barabasi-Albert Graph",
			Algorithm::RandomLobster => "Random Lobster Graph",
			Algorithm::RandomRegular => "Random Regular Graph",
		}
	}

	/// URL-safe name.
	pub fn slug(self) -> &'static str {
		match self {
			Algorithm::Complete => "complete",
			Algorithm::ErdosRenyi => "erdos-renyi",
			Algorithm::BalancedTree => "balanced-tree",
			Algorithm::BinomialTree => "binomial-tree",
			Algorithm::NewmanWattsStrogatz => "newman-watts-strogatz",
			Algorithm::BarabasiAlbert => "barabasi-albert",
			Algorithm::RandomLobster => "random-lobster",
			Algorithm::RandomRegular => "random-regular",
		}
	}

	/// Sliders in display order. Bounds only refer to earlier entries.
	pub fn params(self) -> &'static [ParamSpec] {
		match self {
			Algorithm::Complete => COMPLETE,
			Algorithm::ErdosRenyi => ERDOS_RENYI,
			Algorithm::BalancedTree => BALANCED_TREE,
			Algorithm::BinomialTree => BINOMIAL_TREE,
			Algorithm::NewmanWattsStrogatz => NEWMAN_WATTS_STROGATZ,
			Algorithm::BarabasiAlbert => BARABASI_ALBERT,
			Algorithm::RandomLobster => RANDOM_LOBSTER,
			Algorithm::RandomRegular => RANDOM_REGULAR,
		}
	}

	/// Whether the seed changes the drawn graph.
	pub fn is_random(self) -> bool {
		!matches!(
			self,
			Algorithm::Complete | Algorithm::BalancedTree | Algorithm::BinomialTree
		)
	}

	/// Typed build request from the current slider values.
	pub fn generator(self, params: &Parameters) -> Generator {
		let count = |key| params.get(key).round().max(0.0) as usize;
		match self {
			Algorithm::Complete => Generator::Complete { n: count("n") },
			Algorithm::ErdosRenyi => Generator::ErdosRenyi {
				n: count("n"),
				p: params.get("p"),
			},
			Algorithm::BalancedTree => Generator::BalancedTree {
				branching: count("r"),
				height: count("h"),
			},
			Algorithm::BinomialTree => Generator::BinomialTree {
				order: count("order"),
			},
			Algorithm::NewmanWattsStrogatz => Generator::NewmanWattsStrogatz {
				n: count("n"),
				k: count("k"),
				p: params.get("p"),
			},
			Algorithm::BarabasiAlbert => Generator::BarabasiAlbert {
				n: count("n"),
				m: count("m"),
			},
			Algorithm::RandomLobster => Generator::RandomLobster {
				n: count("n"),
				p1: params.get("p1"),
				p2: params.get("p2"),
			},
			Algorithm::RandomRegular => Generator::RandomRegular {
				n: count("n"),
				d: count("d"),
			},
		}
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.slug())
	}
}

impl FromStr for Algorithm {
	type Err = NetworkError;

	fn from_str(s: &str) -> Result<Self> {
		Algorithm::ALL
			.into_iter()
			.find(|a| a.slug() == s)
			.ok_or_else(|| NetworkError::InvalidParameter(format!("unknown algorithm `{s}`")))
	}
}

/// Current slider values for one algorithm, in [`Algorithm::params`] order.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameters {
	algorithm: Algorithm,
	values: Vec<(&'static str, f64)>,
}

impl Parameters {
	/// Every slider of `algorithm` at its default.
	pub fn defaults_for(algorithm: Algorithm) -> Self {
		let mut params = Self {
			algorithm,
			values: algorithm.params().iter().map(|p| (p.key, p.default)).collect(),
		};
		params.normalize();
		params
	}

	/// The algorithm these values belong to.
	pub fn algorithm(&self) -> Algorithm {
		self.algorithm
	}

	/// Value of `key`, `0.0` when the algorithm has no such parameter.
	pub fn get(&self, key: &str) -> f64 {
		self.values
			.iter()
			.find(|(k, _)| *k == key)
			.map_or(0.0, |&(_, v)| v)
	}

	/// `(key, value)` pairs in slider order.
	pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
		self.values.iter().copied()
	}

	/// Sets one value, then re-clamps every parameter so bounds that depend on
	/// it still hold. Unknown keys are ignored.
	pub fn set(&mut self, key: &str, value: f64) {
		if let Some(slot) = self.values.iter_mut().find(|(k, _)| *k == key) {
			slot.1 = value;
		}
		self.normalize();
	}

	fn normalize(&mut self) {
		for (i, spec) in self.algorithm.params().iter().enumerate() {
			let Some(&(_, value)) = self.values.get(i) else {
				break;
			};
			self.values[i].1 = spec.clamp(value, self);
		}
	}
}

/// A fully specified request for one of the generators.
///
/// Fields are the arguments of the matching function in
/// [`generators`](super::generators).
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum Generator {
	Complete { n: usize },
	ErdosRenyi { n: usize, p: f64 },
	BalancedTree { branching: usize, height: usize },
	BinomialTree { order: usize },
	NewmanWattsStrogatz { n: usize, k: usize, p: f64 },
	BarabasiAlbert { n: usize, m: usize },
	RandomLobster { n: usize, p1: f64, p2: f64 },
	RandomRegular { n: usize, d: usize },
}

impl Generator {
	/// Runs the generator, drawing randomness from `rng`.
	pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Network> {
		match *self {
			Generator::Complete { n } => Ok(complete_graph(n)),
			Generator::ErdosRenyi { n, p } => erdos_renyi_graph(n, p, rng),
			Generator::BalancedTree { branching, height } => balanced_tree(branching, height),
			Generator::BinomialTree { order } => binomial_tree(order),
			Generator::NewmanWattsStrogatz { n, k, p } => newman_watts_strogatz_graph(n, k, p, rng),
			Generator::BarabasiAlbert { n, m } => barabasi_albert_graph(n, m, rng),
			Generator::RandomLobster { n, p1, p2 } => random_lobster(n, p1, p2, rng),
			Generator::RandomRegular { n, d } => {
				random_regular_graph(d, n, RegularConfig::default(), rng)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	#[test]
	fn slugs_round_trip() {
		for algorithm in Algorithm::ALL {
			assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
		}
		assert!("star".parse::<Algorithm>().is_err());
	}

	#[test]
	fn defaults_build_for_every_algorithm() {
		let mut rng = StdRng::seed_from_u64(1);
		for algorithm in Algorithm::ALL {
			let params = Parameters::defaults_for(algorithm);
			let net = algorithm.generator(&params).build(&mut rng);
			assert!(net.is_ok(), "{algorithm}: {net:?}");
		}
	}

	#[test]
	fn dependent_bounds_follow_n() {
		let algorithm = Algorithm::NewmanWattsStrogatz;
		let mut params = Parameters::defaults_for(algorithm);
		params.set("k", 8.0);
		assert_eq!(params.get("k"), 8.0);

		params.set("n", 5.0);
		assert_eq!(params.get("k"), 5.0);
	}

	#[test]
	fn regular_degree_stays_even() {
		let algorithm = Algorithm::RandomRegular;
		let mut params = Parameters::defaults_for(algorithm);
		params.set("n", 6.0);
		params.set("d", 5.0);
		assert_eq!(params.get("d"), 4.0);

		params.set("d", 3.0);
		assert_eq!(params.get("d"), 4.0);
	}

	#[test]
	fn probabilities_snap_to_step() {
		let algorithm = Algorithm::ErdosRenyi;
		let mut params = Parameters::defaults_for(algorithm);
		params.set("p", 0.33);
		assert_eq!(params.get("p"), 0.35);
		params.set("p", 7.0);
		assert_eq!(params.get("p"), 1.0);
		params.set("p", f64::NAN);
		assert_eq!(params.get("p"), 0.0);
	}

	#[test]
	fn barabasi_albert_with_one_node_is_rejected() {
		let algorithm = Algorithm::BarabasiAlbert;
		let mut params = Parameters::defaults_for(algorithm);
		params.set("n", 1.0);
		assert_eq!(params.get("m"), 1.0);

		let mut rng = StdRng::seed_from_u64(1);
		assert!(matches!(
			algorithm.generator(&params).build(&mut rng),
			Err(NetworkError::InvalidParameter(_))
		));
	}

	#[test]
	fn parameters_only_accept_their_own_keys() {
		let mut params = Parameters::defaults_for(Algorithm::Complete);
		params.set("p", 0.5);
		assert_eq!(params.algorithm(), Algorithm::Complete);
		assert_eq!(params.get("p"), 0.0);
		assert_eq!(params.iter().collect::<Vec<_>>(), vec![("n", 10.0)]);

		params.set("n", 25.0);
		assert_eq!(params.get("n"), 20.0);
	}

	#[test]
	fn generator_carries_slider_values() {
		let algorithm = Algorithm::BalancedTree;
		let mut params = Parameters::defaults_for(algorithm);
		params.set("h", 3.0);
		assert_eq!(
			algorithm.generator(&params),
			Generator::BalancedTree {
				branching: 5,
				height: 3
			}
		);
	}
}
