use crate::network::Network;
use crate::network::centrality::degree_centrality;

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: usize,
	pub label: String,
	/// Connected component, picks the palette color.
	pub group: usize,
	/// Degree centrality in `[0, 1]`, drives the radius.
	pub weight: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	pub source: usize,
	pub target: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

impl From<&Network> for GraphData {
	fn from(net: &Network) -> Self {
		let groups = net.components();
		let weights = degree_centrality(net);
		let nodes = (0..net.node_count())
			.map(|id| GraphNode {
				id,
				label: id.to_string(),
				group: groups[id],
				weight: weights[id],
			})
			.collect();
		let links = net
			.edges()
			.map(|(source, target)| GraphLink { source, target })
			.collect();
		Self { nodes, links }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::network::generators::balanced_tree;

	#[test]
	fn converts_network() {
		let mut net = balanced_tree(2, 1).unwrap();
		net.add_node();
		let data = GraphData::from(&net);

		assert_eq!(data.nodes.len(), 4);
		assert_eq!(data.links.len(), 2);
		assert_eq!(data.nodes[3].label, "3");
		assert_eq!(data.nodes[3].group, 1);
		assert_eq!(data.nodes[0].weight, 2.0 / 3.0);
		assert_eq!(data.links[0], GraphLink { source: 0, target: 1 });
	}
}
