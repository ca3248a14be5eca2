//! Per-node centrality table shown in the second tab.

use std::cmp::Ordering;

use super::Network;
use super::Result;
use super::centrality::{
	BetweennessConfig, EigenvectorConfig, betweenness_centrality, degree_centrality,
	eigenvector_centrality,
};

/// Scores for one node.
#[derive(Clone, Debug, PartialEq)]
pub struct CentralityRow {
	/// Node id.
	pub node: usize,
	/// Normalized degree.
	pub degree: f64,
	/// Eigenvector centrality.
	pub eigenvector: f64,
	/// Normalized betweenness.
	pub betweenness: f64,
}

/// Column a [`CentralityTable`] can be ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortColumn {
	/// Node id.
	#[default]
	Node,
	/// [`CentralityRow::degree`].
	Degree,
	/// [`CentralityRow::eigenvector`].
	Eigenvector,
	/// [`CentralityRow::betweenness`].
	Betweenness,
}

impl SortColumn {
	/// Columns in display order.
	pub const ALL: [SortColumn; 4] = [
		SortColumn::Node,
		SortColumn::Degree,
		SortColumn::Eigenvector,
		SortColumn::Betweenness,
	];

	/// Header text, also used in the CSV header.
	pub fn label(self) -> &'static str {
		match self {
			SortColumn::Node => "Node",
			SortColumn::Degree => "Degree",
			SortColumn::Eigenvector => "Eigenvector",
			SortColumn::Betweenness => "Betweenness",
		}
	}

	fn compare(self, a: &CentralityRow, b: &CentralityRow) -> Ordering {
		let by_score = |x: f64, y: f64| x.total_cmp(&y);
		match self {
			SortColumn::Node => a.node.cmp(&b.node),
			SortColumn::Degree => by_score(a.degree, b.degree),
			SortColumn::Eigenvector => by_score(a.eigenvector, b.eigenvector),
			SortColumn::Betweenness => by_score(a.betweenness, b.betweenness),
		}
	}
}

/// The three centrality measures of a graph merged by node id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CentralityTable {
	rows: Vec<CentralityRow>,
}

impl CentralityTable {
	/// Measures every node of `net`; rows come out in node order.
	///
	/// Fails as a whole when any single measure fails.
	pub fn measure(net: &Network) -> Result<Self> {
		let degree = degree_centrality(net);
		let eigenvector = eigenvector_centrality(net, EigenvectorConfig::default())?;
		let betweenness = betweenness_centrality(net, BetweennessConfig::default());

		let rows = (0..net.node_count())
			.map(|node| CentralityRow {
				node,
				degree: degree[node],
				eigenvector: eigenvector[node],
				betweenness: betweenness[node],
			})
			.collect();
		Ok(Self { rows })
	}

	/// Rows in their current order.
	pub fn rows(&self) -> &[CentralityRow] {
		&self.rows
	}

	/// Number of rows.
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	/// True for a table without rows.
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Stable sort; ties keep node order.
	pub fn sort_by(&mut self, column: SortColumn, descending: bool) {
		self.rows.sort_by(|a, b| {
			let ord = column.compare(a, b);
			if descending { ord.reverse() } else { ord }
		});
	}

	/// Owned variant of [`CentralityTable::sort_by`].
	pub fn sorted(mut self, column: SortColumn, descending: bool) -> Self {
		self.sort_by(column, descending);
		self
	}

	/// Rows as CSV with a `Node,Degree,Eigenvector,Betweenness` header.
	pub fn to_csv(&self) -> String {
		let header: Vec<_> = SortColumn::ALL.iter().map(|c| c.label()).collect();
		let mut out = header.join(",");
		out.push('\n');
		for row in &self.rows {
			out.push_str(&format!(
				"{},{},{},{}\n",
				row.node, row.degree, row.eigenvector, row.betweenness
			));
		}
		out
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::network::NetworkError;
	use crate::network::generators::{balanced_tree, complete_graph};

	#[test]
	fn measure_merges_by_node() {
		let table = CentralityTable::measure(&balanced_tree(2, 2).unwrap()).unwrap();
		assert_eq!(table.len(), 7);
		assert!(table.rows().iter().enumerate().all(|(i, row)| row.node == i));

		let root = &table.rows()[0];
		let leaf = &table.rows()[6];
		assert!(root.betweenness > leaf.betweenness);
		assert_eq!(leaf.betweenness, 0.0);
	}

	#[test]
	fn measure_fails_on_null_graph() {
		assert_eq!(
			CentralityTable::measure(&Network::default()),
			Err(NetworkError::EmptyGraph)
		);
	}

	#[test]
	fn sorting_by_score() {
		let table = CentralityTable::measure(&balanced_tree(3, 2).unwrap())
			.unwrap()
			.sorted(SortColumn::Degree, true);
		// root has degree 3, its children 4
		assert_eq!(table.rows()[0].node, 1);
		assert_eq!(table.rows()[3].node, 0);

		let table = table.sorted(SortColumn::Node, false);
		assert_eq!(table.rows()[0].node, 0);
	}

	#[test]
	fn csv_export() {
		let csv = CentralityTable::measure(&complete_graph(2)).unwrap().to_csv();
		let lines: Vec<_> = csv.lines().collect();
		assert_eq!(lines[0], "Node,Degree,Eigenvector,Betweenness");
		assert_eq!(lines.len(), 3);
		assert!(lines[1].starts_with("0,1,"));
		assert!(lines[2].ends_with(",0"));
	}
}
