//! Degree, eigenvector and betweenness centrality.
//!
//! All measures return one score per node, indexed by node id.

use std::collections::VecDeque;

use super::{Network, NetworkError, Result};

/// Fraction of the other nodes each node is adjacent to.
///
/// Scores lie in `[0, 1]`. With one node or none every node scores `1.0`.
pub fn degree_centrality(net: &Network) -> Vec<f64> {
	let n = net.node_count();
	if n <= 1 {
		return vec![1.0; n];
	}
	let scale = 1.0 / (n - 1) as f64;
	(0..n).map(|v| net.degree(v) as f64 * scale).collect()
}

/// Configuration for eigenvector centrality.
#[derive(Debug, Clone, Copy)]
pub struct EigenvectorConfig {
	/// Iterations before giving up with [`NetworkError::NotConverged`].
	pub max_iterations: usize,
	/// Per-node tolerance; the L1 change must drop below `n * tolerance`.
	pub tolerance: f64,
}

impl Default for EigenvectorConfig {
	fn default() -> Self {
		Self {
			max_iterations: 100,
			tolerance: 1e-6,
		}
	}
}

/// Eigenvector centrality by power iteration.
///
/// Iterates with `A + I` rather than `A` so bipartite graphs (trees, even
/// cycles) do not oscillate; the dominant eigenvector is the same. Scores are
/// L2 normalized.
pub fn eigenvector_centrality(net: &Network, config: EigenvectorConfig) -> Result<Vec<f64>> {
	let n = net.node_count();
	if n == 0 {
		return Err(NetworkError::EmptyGraph);
	}

	let mut x = vec![1.0 / n as f64; n];
	for _ in 0..config.max_iterations {
		let last = x.clone();
		for (v, &score) in last.iter().enumerate() {
			for nbr in net.neighbors(v) {
				x[nbr] += score;
			}
		}

		let norm = x.iter().map(|s| s * s).sum::<f64>().sqrt();
		let norm = if norm > 0.0 { norm } else { 1.0 };
		for s in &mut x {
			*s /= norm;
		}

		let change: f64 = x.iter().zip(&last).map(|(a, b)| (a - b).abs()).sum();
		if change < n as f64 * config.tolerance {
			return Ok(x);
		}
	}
	Err(NetworkError::NotConverged(config.max_iterations))
}

/// Configuration for betweenness centrality.
#[derive(Debug, Clone, Copy)]
pub struct BetweennessConfig {
	/// Divide by the number of node pairs not involving the node.
	pub normalized: bool,
}

impl Default for BetweennessConfig {
	fn default() -> Self {
		Self { normalized: true }
	}
}

/// Betweenness centrality with Brandes' algorithm, `O(VE)`.
///
/// The raw sum visits every unordered pair twice. Normalized scores divide by
/// `(n-1)(n-2)`, which absorbs that factor; raw scores are halved instead.
pub fn betweenness_centrality(net: &Network, config: BetweennessConfig) -> Vec<f64> {
	let n = net.node_count();
	let mut betweenness = vec![0.0_f64; n];

	for source in 0..n {
		let (sigma, predecessors, order) = shortest_paths(net, source);
		let mut delta = vec![0.0_f64; n];
		for &w in order.iter().rev() {
			for &v in &predecessors[w] {
				delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
			}
			if w != source {
				betweenness[w] += delta[w];
			}
		}
	}

	let scale = if config.normalized {
		(n > 2).then(|| 1.0 / ((n - 1) * (n - 2)) as f64)
	} else {
		Some(0.5)
	};
	if let Some(scale) = scale {
		for b in &mut betweenness {
			*b *= scale;
		}
	}
	betweenness
}

/// BFS from `source`: path counts, shortest-path predecessors, visit order.
fn shortest_paths(net: &Network, source: usize) -> (Vec<f64>, Vec<Vec<usize>>, Vec<usize>) {
	let n = net.node_count();
	let mut sigma = vec![0.0_f64; n];
	let mut dist: Vec<Option<usize>> = vec![None; n];
	let mut predecessors = vec![Vec::new(); n];
	let mut order = Vec::with_capacity(n);

	sigma[source] = 1.0;
	dist[source] = Some(0);
	let mut queue = VecDeque::from([source]);

	while let Some(v) = queue.pop_front() {
		order.push(v);
		let next = dist[v].unwrap_or_default() + 1;
		for w in net.neighbors(v) {
			if dist[w].is_none() {
				dist[w] = Some(next);
				queue.push_back(w);
			}
			if dist[w] == Some(next) {
				sigma[w] += sigma[v];
				predecessors[w].push(v);
			}
		}
	}

	(sigma, predecessors, order)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::network::generators::{balanced_tree, complete_graph};

	fn star(leaves: usize) -> Network {
		let mut net = Network::with_nodes(leaves + 1);
		for leaf in 1..=leaves {
			net.connect(0, leaf);
		}
		net
	}

	fn path(n: usize) -> Network {
		let mut net = Network::with_nodes(n);
		for v in 1..n {
			net.connect(v - 1, v);
		}
		net
	}

	fn close(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-9
	}

	#[test]
	fn degree_in_unit_interval() {
		let scores = degree_centrality(&star(4));
		assert!(close(scores[0], 1.0));
		assert!(scores[1..].iter().all(|&s| close(s, 0.25)));

		let tree = balanced_tree(3, 3).unwrap();
		assert!(degree_centrality(&tree).iter().all(|s| (0.0..=1.0).contains(s)));
	}

	#[test]
	fn degree_of_trivial_graphs() {
		assert!(degree_centrality(&Network::default()).is_empty());
		assert_eq!(degree_centrality(&Network::with_nodes(1)), vec![1.0]);
	}

	#[test]
	fn eigenvector_uniform_on_complete_graph() {
		let scores = eigenvector_centrality(&complete_graph(6), EigenvectorConfig::default()).unwrap();
		let expected = 1.0 / 6.0_f64.sqrt();
		assert!(scores.iter().all(|&s| (s - expected).abs() < 1e-6), "{scores:?}");
	}

	#[test]
	fn eigenvector_hub_dominates_star() {
		let scores = eigenvector_centrality(&star(5), EigenvectorConfig::default()).unwrap();
		assert!(scores[1..].iter().all(|&leaf| scores[0] > leaf));
		let norm: f64 = scores.iter().map(|s| s * s).sum();
		assert!((norm - 1.0).abs() < 1e-9);
	}

	#[test]
	fn eigenvector_errors() {
		assert_eq!(
			eigenvector_centrality(&Network::default(), EigenvectorConfig::default()),
			Err(NetworkError::EmptyGraph)
		);

		let config = EigenvectorConfig {
			max_iterations: 1,
			tolerance: 1e-12,
		};
		assert_eq!(
			eigenvector_centrality(&path(6), config),
			Err(NetworkError::NotConverged(1))
		);
	}

	#[test]
	fn eigenvector_isolated_nodes_converge() {
		let scores = eigenvector_centrality(&Network::with_nodes(4), EigenvectorConfig::default()).unwrap();
		assert!(scores.iter().all(|&s| close(s, 0.5)));
	}

	#[test]
	fn betweenness_star_center() {
		let scores = betweenness_centrality(&star(4), BetweennessConfig::default());
		assert!(close(scores[0], 1.0));
		assert!(scores[1..].iter().all(|&s| close(s, 0.0)));
	}

	#[test]
	fn betweenness_path_raw_counts() {
		let scores = betweenness_centrality(&path(4), BetweennessConfig { normalized: false });
		assert_eq!(scores.len(), 4);
		assert!(close(scores[0], 0.0));
		assert!(close(scores[1], 2.0));
		assert!(close(scores[2], 2.0));
		assert!(close(scores[3], 0.0));
	}

	#[test]
	fn betweenness_splits_over_parallel_paths() {
		// 4-cycle: each pair of opposite nodes has two shortest paths
		let mut net = path(4);
		net.connect(3, 0);
		let scores = betweenness_centrality(&net, BetweennessConfig { normalized: false });
		assert!(scores.iter().all(|&s| close(s, 0.5)), "{scores:?}");
	}

	#[test]
	fn betweenness_small_graphs_unscaled() {
		assert_eq!(betweenness_centrality(&path(2), BetweennessConfig::default()), vec![0.0, 0.0]);
		assert!(betweenness_centrality(&Network::default(), BetweennessConfig::default()).is_empty());
	}
}
