//! Graph model, generators and centrality measures.
//!
//! Everything here is plain Rust over [`petgraph`] and has no dependency on the
//! browser, so it is unit tested natively.

pub mod algorithm;
pub mod centrality;
mod error;
pub mod generators;
pub mod table;

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::unionfind::UnionFind;

pub use algorithm::{Algorithm, Bound, Generator, ParamSpec, Parameters};
pub use error::{NetworkError, Result};
pub use table::{CentralityRow, CentralityTable, SortColumn};

/// A simple undirected graph whose node ids are `0..node_count()`.
///
/// Node identifiers are the petgraph node indices, so no weights are stored.
/// Self loops and parallel edges are never inserted.
#[derive(Clone, Debug, Default)]
pub struct Network {
	graph: UnGraph<(), ()>,
}

impl Network {
	/// A graph with `n` isolated nodes.
	pub fn with_nodes(n: usize) -> Self {
		let mut graph = UnGraph::with_capacity(n, 0);
		for _ in 0..n {
			graph.add_node(());
		}
		Self { graph }
	}

	/// Appends a new isolated node and returns its id.
	pub fn add_node(&mut self) -> usize {
		self.graph.add_node(()).index()
	}

	/// Connects `a` and `b`, growing the node set if either id is new.
	///
	/// Returns `false` for self loops and edges that already exist.
	pub fn connect(&mut self, a: usize, b: usize) -> bool {
		if a == b {
			return false;
		}
		while self.graph.node_count() <= a.max(b) {
			self.graph.add_node(());
		}
		let (a, b) = (NodeIndex::new(a), NodeIndex::new(b));
		if self.graph.find_edge(a, b).is_some() {
			return false;
		}
		self.graph.add_edge(a, b, ());
		true
	}

	/// Whether `a` and `b` are adjacent; unknown ids are never adjacent.
	pub fn has_edge(&self, a: usize, b: usize) -> bool {
		let n = self.graph.node_count();
		a < n && b < n && self.graph.find_edge(NodeIndex::new(a), NodeIndex::new(b)).is_some()
	}

	/// Number of nodes.
	pub fn node_count(&self) -> usize {
		self.graph.node_count()
	}

	/// Number of edges.
	pub fn edge_count(&self) -> usize {
		self.graph.edge_count()
	}

	/// Number of neighbors of `node`.
	pub fn degree(&self, node: usize) -> usize {
		self.graph.neighbors(NodeIndex::new(node)).count()
	}

	/// Neighbor ids of `node`, in petgraph's adjacency order.
	pub fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
		self.graph.neighbors(NodeIndex::new(node)).map(|n| n.index())
	}

	/// Every edge once, as `(lower id, higher id)`, in insertion order.
	pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
		self.graph.edge_indices().filter_map(|e| {
			let (a, b) = self.graph.edge_endpoints(e)?;
			let (a, b) = (a.index(), b.index());
			Some((a.min(b), a.max(b)))
		})
	}

	/// Connected component label per node, numbered by first appearance.
	pub fn components(&self) -> Vec<usize> {
		let n = self.node_count();
		let mut sets = UnionFind::<usize>::new(n);
		for (a, b) in self.edges() {
			sets.union(a, b);
		}

		let mut labels = vec![usize::MAX; n];
		let mut root_label = HashMap::new();
		for (node, label) in labels.iter_mut().enumerate() {
			let next = root_label.len();
			*label = *root_label.entry(sets.find(node)).or_insert(next);
		}
		labels
	}

	/// The underlying petgraph graph.
	pub fn graph(&self) -> &UnGraph<(), ()> {
		&self.graph
	}
}

/// Same node count and the same edges in the same insertion order.
impl PartialEq for Network {
	fn eq(&self, other: &Self) -> bool {
		self.node_count() == other.node_count() && self.edges().eq(other.edges())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn connect_rejects_loops_and_duplicates() {
		let mut net = Network::with_nodes(3);
		assert!(net.connect(0, 1));
		assert!(!net.connect(1, 0));
		assert!(!net.connect(2, 2));
		assert_eq!(net.edge_count(), 1);
		assert!(net.has_edge(1, 0));
	}

	#[test]
	fn connect_grows_node_set() {
		let mut net = Network::default();
		net.connect(0, 4);
		assert_eq!(net.node_count(), 5);
		assert_eq!(net.degree(4), 1);
		assert_eq!(net.degree(2), 0);
	}

	#[test]
	fn components_are_labelled_in_order() {
		let mut net = Network::with_nodes(5);
		net.connect(3, 4);
		net.connect(0, 1);
		assert_eq!(net.components(), vec![0, 0, 1, 2, 2]);
	}
}
