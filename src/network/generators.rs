//! Deterministic and random graph constructions.
//!
//! Random generators take any [`Rng`] so callers decide on seeding; the page
//! uses a seeded `StdRng` so a configuration always draws the same graph.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use rand::Rng;
use rand::seq::SliceRandom;

use super::{Network, NetworkError, Result};

/// Configuration for [`random_regular_graph`].
#[derive(Debug, Clone, Copy)]
pub struct RegularConfig {
	/// Stub pairings tried before giving up with
	/// [`NetworkError::Construction`].
	pub max_attempts: usize,
}

impl Default for RegularConfig {
	fn default() -> Self {
		Self { max_attempts: 1000 }
	}
}

fn probability(name: &str, p: f64) -> Result<f64> {
	if p.is_nan() {
		return Err(NetworkError::InvalidParameter(format!("{name} must be a number")));
	}
	Ok(p.clamp(0.0, 1.0))
}

/// Every pair of the `n` nodes connected.
pub fn complete_graph(n: usize) -> Network {
	let mut net = Network::with_nodes(n);
	for a in 0..n {
		for b in a + 1..n {
			net.connect(a, b);
		}
	}
	net
}

/// G(n, p): each of the `n(n-1)/2` pairs is an edge with probability `p`.
pub fn erdos_renyi_graph<R: Rng + ?Sized>(n: usize, p: f64, rng: &mut R) -> Result<Network> {
	let p = probability("p", p)?;
	if p <= 0.0 {
		return Ok(Network::with_nodes(n));
	}
	if p >= 1.0 {
		return Ok(complete_graph(n));
	}

	let mut net = Network::with_nodes(n);
	for a in 0..n {
		for b in a + 1..n {
			if rng.gen_bool(p) {
				net.connect(a, b);
			}
		}
	}
	Ok(net)
}

/// Perfect `r`-ary tree of height `h`, nodes numbered breadth first.
pub fn balanced_tree(r: usize, h: usize) -> Result<Network> {
	let too_large = || NetworkError::InvalidParameter(format!("balanced tree r={r}, h={h} is too large"));
	let n = match r {
		0 => 1,
		1 => h.checked_add(1).ok_or_else(too_large)?,
		_ => {
			let exp = u32::try_from(h + 1).map_err(|_| too_large())?;
			let leaves = r.checked_pow(exp).ok_or_else(too_large)?;
			(leaves - 1) / (r - 1)
		}
	};

	let mut net = Network::with_nodes(n);
	for parent in 0..n {
		let first = r * parent + 1;
		if first >= n {
			break;
		}
		for child in first..(first + r).min(n) {
			net.connect(parent, child);
		}
	}
	Ok(net)
}

/// Binomial tree of the given order: `2^order` nodes.
///
/// The order-`k` tree is two order-`k-1` trees with their roots linked; the
/// copy is shifted by `2^(k-1)` ids.
pub fn binomial_tree(order: usize) -> Result<Network> {
	if order >= (usize::BITS - 1) as usize {
		return Err(NetworkError::InvalidParameter(format!(
			"binomial tree order {order} is too large"
		)));
	}

	let mut net = Network::with_nodes(1);
	let mut size = 1;
	for _ in 0..order {
		let copied: Vec<_> = net.edges().collect();
		for (a, b) in copied {
			net.connect(a + size, b + size);
		}
		net.connect(0, size);
		size *= 2;
	}
	Ok(net)
}

/// Newman–Watts–Strogatz small world: a ring lattice plus random shortcuts.
///
/// Each node is joined to its `k / 2` nearest neighbors on either side. Then,
/// for every lattice edge `(u, v)`, with probability `p` a shortcut `(u, w)` is
/// added to a uniformly drawn node `w` that is not `u` and not already a
/// neighbor. No lattice edge is ever removed.
pub fn newman_watts_strogatz_graph<R: Rng + ?Sized>(
	n: usize,
	k: usize,
	p: f64,
	rng: &mut R,
) -> Result<Network> {
	if k > n {
		return Err(NetworkError::InvalidParameter(format!(
			"k={k} > n={n}, choose smaller k or larger n"
		)));
	}
	if k == n {
		return Ok(complete_graph(n));
	}
	let p = probability("p", p)?;

	let mut net = Network::with_nodes(n);
	for offset in 1..=k / 2 {
		for u in 0..n {
			net.connect(u, (u + offset) % n);
		}
	}

	let lattice: Vec<_> = net.edges().collect();
	for (u, _) in lattice {
		if !rng.gen_bool(p) {
			continue;
		}
		if net.degree(u) >= n - 1 {
			continue;
		}
		let mut w = rng.gen_range(0..n);
		while w == u || net.has_edge(u, w) {
			w = rng.gen_range(0..n);
		}
		net.connect(u, w);
	}
	Ok(net)
}

/// Barabási–Albert preferential attachment.
///
/// Starts from a star on `m + 1` nodes; each following node attaches to `m`
/// distinct existing nodes drawn proportionally to their degree.
pub fn barabasi_albert_graph<R: Rng + ?Sized>(n: usize, m: usize, rng: &mut R) -> Result<Network> {
	if m < 1 || m >= n {
		return Err(NetworkError::InvalidParameter(format!(
			"Barabási–Albert network must have m >= 1 and m < n, m = {m}, n = {n}"
		)));
	}

	let mut net = Network::with_nodes(m + 1);
	for leaf in 1..=m {
		net.connect(0, leaf);
	}

	// every node appears once per unit of degree
	let mut repeated: Vec<usize> = std::iter::repeat_n(0, m).chain(1..=m).collect();

	for source in m + 1..n {
		let mut targets = BTreeSet::new();
		while targets.len() < m {
			targets.insert(repeated[rng.gen_range(0..repeated.len())]);
		}
		net.add_node();
		for &target in &targets {
			net.connect(source, target);
		}
		repeated.extend(targets);
		repeated.extend(std::iter::repeat_n(source, m));
	}
	Ok(net)
}

/// Random lobster: a caterpillar whose legs may carry one more level.
///
/// The backbone is a path of `floor(2 * U * n + 0.5)` nodes for uniform `U`.
/// Both probabilities must be below one, otherwise the growth never stops.
pub fn random_lobster<R: Rng + ?Sized>(n: usize, p1: f64, p2: f64, rng: &mut R) -> Result<Network> {
	let (p1, p2) = (p1.abs(), p2.abs());
	if p1.is_nan() || p2.is_nan() || p1 >= 1.0 || p2 >= 1.0 {
		return Err(NetworkError::InvalidParameter(
			"probability values for p1 and p2 must both be < 1".into(),
		));
	}

	let backbone = (2.0 * rng.gen_range(0.0..1.0) * n as f64 + 0.5) as usize;
	let mut net = Network::with_nodes(backbone);
	for node in 1..backbone {
		net.connect(node - 1, node);
	}

	for spine in 0..backbone {
		while rng.gen_bool(p1) {
			let leg = net.add_node();
			net.connect(spine, leg);
			while rng.gen_bool(p2) {
				let tip = net.add_node();
				net.connect(leg, tip);
			}
		}
	}
	Ok(net)
}

/// Uniformly drawn `d`-regular graph on `n` nodes.
///
/// Stubs (`d` per node) are shuffled and paired. Pairs that would form a loop
/// or a parallel edge are put back and reshuffled; when no valid pair can be
/// formed among the leftovers the whole attempt restarts, at most
/// `config.max_attempts` times.
pub fn random_regular_graph<R: Rng + ?Sized>(
	d: usize,
	n: usize,
	config: RegularConfig,
	rng: &mut R,
) -> Result<Network> {
	if (n * d) % 2 != 0 {
		return Err(NetworkError::InvalidParameter("n * d must be even".into()));
	}
	if d >= n {
		return Err(NetworkError::InvalidParameter(
			"the 0 <= d < n inequality must be satisfied".into(),
		));
	}
	if d == 0 {
		return Ok(Network::with_nodes(n));
	}

	for _ in 0..config.max_attempts {
		if let Some(edges) = try_regular_pairing(d, n, rng) {
			let mut net = Network::with_nodes(n);
			for (a, b) in edges {
				net.connect(a, b);
			}
			return Ok(net);
		}
	}
	Err(NetworkError::Construction(format!(
		"no {d}-regular graph on {n} nodes after {} attempts",
		config.max_attempts
	)))
}

fn try_regular_pairing<R: Rng + ?Sized>(d: usize, n: usize, rng: &mut R) -> Option<Vec<(usize, usize)>> {
	let mut edges = Vec::with_capacity(n * d / 2);
	let mut seen = HashSet::with_capacity(n * d / 2);
	let mut stubs: Vec<usize> = (0..n).flat_map(|node| std::iter::repeat_n(node, d)).collect();

	while !stubs.is_empty() {
		let mut leftover: BTreeMap<usize, usize> = BTreeMap::new();
		stubs.shuffle(rng);
		for pair in stubs.chunks_exact(2) {
			let (a, b) = (pair[0].min(pair[1]), pair[0].max(pair[1]));
			if a != b && seen.insert((a, b)) {
				edges.push((a, b));
			} else {
				*leftover.entry(a).or_default() += 1;
				*leftover.entry(b).or_default() += 1;
			}
		}

		if !pairing_can_progress(&seen, &leftover) {
			return None;
		}
		stubs = leftover
			.iter()
			.flat_map(|(&node, &count)| std::iter::repeat_n(node, count))
			.collect();
	}
	Some(edges)
}

/// True when some two distinct leftover nodes are still unconnected.
fn pairing_can_progress(seen: &HashSet<(usize, usize)>, leftover: &BTreeMap<usize, usize>) -> bool {
	if leftover.is_empty() {
		return true;
	}
	let nodes: Vec<usize> = leftover.keys().copied().collect();
	nodes
		.iter()
		.enumerate()
		.any(|(i, &a)| nodes[i + 1..].iter().any(|&b| !seen.contains(&(a, b))))
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn rng() -> StdRng {
		StdRng::seed_from_u64(7)
	}

	#[test]
	fn complete_graph_edge_count() {
		for n in 0..12 {
			let net = complete_graph(n);
			assert_eq!(net.node_count(), n);
			assert_eq!(net.edge_count(), n * n.saturating_sub(1) / 2);
		}
	}

	#[test]
	fn erdos_renyi_extremes() {
		let empty = erdos_renyi_graph(10, 0.0, &mut rng()).unwrap();
		assert_eq!(empty.node_count(), 10);
		assert_eq!(empty.edge_count(), 0);

		let full = erdos_renyi_graph(10, 1.0, &mut rng()).unwrap();
		assert_eq!(full.edge_count(), 45);

		assert!(erdos_renyi_graph(10, f64::NAN, &mut rng()).is_err());
	}

	#[test]
	fn erdos_renyi_is_reproducible_for_a_seed() {
		let a = erdos_renyi_graph(20, 0.3, &mut rng()).unwrap();
		let b = erdos_renyi_graph(20, 0.3, &mut rng()).unwrap();
		assert_eq!(a.edges().collect::<Vec<_>>(), b.edges().collect::<Vec<_>>());
	}

	#[test]
	fn balanced_tree_sizes() {
		let tree = balanced_tree(5, 2).unwrap();
		assert_eq!(tree.node_count(), 31);
		assert_eq!(tree.edge_count(), 30);
		assert_eq!(tree.degree(0), 5);
		assert!(tree.has_edge(1, 6));

		let path = balanced_tree(1, 4).unwrap();
		assert_eq!(path.node_count(), 5);
		assert_eq!(path.edge_count(), 4);

		assert_eq!(balanced_tree(8, 4).unwrap().node_count(), 4681);
		assert!(balanced_tree(usize::MAX, 3).is_err());
	}

	#[test]
	fn binomial_tree_sizes() {
		for order in 0..8 {
			let tree = binomial_tree(order).unwrap();
			assert_eq!(tree.node_count(), 1 << order);
			assert_eq!(tree.edge_count(), (1 << order) - 1);
			assert_eq!(tree.degree(0), order);
		}
		assert!(binomial_tree(200).is_err());
	}

	#[test]
	fn newman_watts_strogatz_keeps_the_lattice() {
		let net = newman_watts_strogatz_graph(10, 4, 0.5, &mut rng()).unwrap();
		assert_eq!(net.node_count(), 10);
		for u in 0..10 {
			assert!(net.has_edge(u, (u + 1) % 10));
			assert!(net.has_edge(u, (u + 2) % 10));
		}
		assert!(net.edge_count() >= 20);
	}

	#[test]
	fn newman_watts_strogatz_edge_cases() {
		assert_eq!(newman_watts_strogatz_graph(10, 1, 0.9, &mut rng()).unwrap().edge_count(), 0);
		assert_eq!(newman_watts_strogatz_graph(6, 6, 0.1, &mut rng()).unwrap().edge_count(), 15);
		assert!(newman_watts_strogatz_graph(5, 6, 0.1, &mut rng()).is_err());

		let saturated = newman_watts_strogatz_graph(5, 4, 1.0, &mut rng()).unwrap();
		assert_eq!(saturated.edge_count(), 10);
	}

	#[test]
	fn barabasi_albert_edge_count() {
		for (n, m) in [(10, 1), (10, 3), (20, 19), (2, 1)] {
			let net = barabasi_albert_graph(n, m, &mut rng()).unwrap();
			assert_eq!(net.node_count(), n);
			assert_eq!(net.edge_count(), m + m * (n - m - 1));
		}
		assert!(barabasi_albert_graph(1, 1, &mut rng()).is_err());
		assert!(barabasi_albert_graph(5, 0, &mut rng()).is_err());
	}

	#[test]
	fn random_lobster_is_a_tree() {
		let net = random_lobster(10, 0.5, 0.5, &mut rng()).unwrap();
		assert_eq!(net.edge_count(), net.node_count().saturating_sub(1));
		assert!(net.components().iter().all(|&c| c == 0));

		assert!(random_lobster(10, 1.0, 0.1, &mut rng()).is_err());
		assert!(random_lobster(10, 0.1, -1.0, &mut rng()).is_err());
	}

	#[test]
	fn random_regular_degrees() {
		for (d, n) in [(2, 5), (3, 10), (4, 9), (6, 12)] {
			let net = random_regular_graph(d, n, RegularConfig::default(), &mut rng()).unwrap();
			assert_eq!(net.node_count(), n);
			assert!((0..n).all(|v| net.degree(v) == d), "d={d} n={n}");
		}
		let empty = random_regular_graph(0, 7, RegularConfig::default(), &mut rng()).unwrap();
		assert_eq!(empty.edge_count(), 0);
	}

	#[test]
	fn random_regular_gives_up_after_max_attempts() {
		let config = RegularConfig { max_attempts: 0 };
		assert!(matches!(
			random_regular_graph(2, 5, config, &mut rng()),
			Err(NetworkError::Construction(_))
		));
	}

	#[test]
	fn random_regular_rejects_bad_parameters() {
		assert_eq!(
			random_regular_graph(3, 5, RegularConfig::default(), &mut rng()).unwrap_err(),
			NetworkError::InvalidParameter("n * d must be even".into())
		);
		assert!(random_regular_graph(6, 6, RegularConfig::default(), &mut rng()).is_err());
	}
}
