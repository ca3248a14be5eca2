use leptos::error::Errors;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::components::centrality_table::CentralityTableView;
use crate::components::force_graph::{ForceGraphCanvas, GraphData};
use crate::components::sidebar::Sidebar;
use crate::components::tabs::{TabBar, TabPanel};
use crate::config::Selection;
use crate::network::{CentralityTable, Network, Result};

const TABS: &[&str] = &["Graph Visualization", "Centrality Measurements"];

fn build(selection: &Selection) -> Result<Network> {
	let generator = selection.algorithm.generator(&selection.params);
	let mut rng = StdRng::seed_from_u64(selection.seed);
	let result = generator.build(&mut rng);
	match &result {
		Ok(net) => debug!(
			"{generator:?} -> {} nodes, {} edges",
			net.node_count(),
			net.edge_count()
		),
		Err(err) => warn!("{generator:?} failed: {err}"),
	}
	result
}

fn summary(net: &Network) -> String {
	let (n, m) = (net.node_count(), net.edge_count());
	let density = if n > 1 {
		2.0 * m as f64 / (n * (n - 1)) as f64
	} else {
		0.0
	};
	format!("{n} nodes, {m} edges, density {density:.3}")
}

fn error_list(errors: ArcRwSignal<Errors>) -> impl IntoView {
	view! {
		<div class="error">
			<p>"Errors: "</p>
			<ul>
				{move || {
					errors
						.get()
						.into_iter()
						.map(|(_, e)| view! { <li>{e.to_string()}</li> })
						.collect_view()
				}}
			</ul>
		</div>
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let query = use_query_map();
	let selection = RwSignal::new(query.with_untracked(|q| Selection::from_query(|key| q.get(key))));

	// mirror the sidebar into the URL so the current graph can be shared
	let navigate = use_navigate();
	Effect::new(move |_| {
		let query = selection.with(Selection::to_query);
		navigate(
			&format!("/?{query}"),
			NavigateOptions {
				replace: true,
				scroll: false,
				..Default::default()
			},
		);
	});

	let network = Memo::new(move |_| selection.with(build));
	let graph_data = Memo::new(move |_| {
		network.with(|result| result.as_ref().map(GraphData::from).unwrap_or_default())
	});
	let table = Memo::new(move |_| {
		network.with(|result| match result {
			Ok(net) => CentralityTable::measure(net),
			Err(err) => Err(err.clone()),
		})
	});

	let active_tab = RwSignal::new(0);

	view! {
		<div class="layout">
			<Sidebar selection=selection />

			<main class="content">
				<h1>"Social Network Demo"</h1>
				<p class="author">
					"Author: " <a href="https://rklymentiev.com/" target="_blank" rel="noopener">
						"Ruslan Klymentiev"
					</a>
				</p>

				<TabBar labels=TABS active=active_tab />

				<TabPanel index=0 active=active_tab>
					<ErrorBoundary fallback=error_list>
						{move || {
							network
								.with(|result| result.as_ref().map(summary).map_err(Clone::clone))
								.map(|text| view! { <p class="summary">{text}</p> })
						}}
					</ErrorBoundary>
					<div class="graph-container">
						<ForceGraphCanvas data=graph_data height=600.0 />
						<p class="hint">
							"Drag nodes to pin them, double click to release. Scroll to zoom. Drag background to pan."
						</p>
					</div>
				</TabPanel>

				<TabPanel index=1 active=active_tab>
					<ErrorBoundary fallback=error_list>
						{move || table.get().map(|table| view! { <CentralityTableView table=table /> })}
					</ErrorBoundary>
				</TabPanel>
			</main>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::network::{Algorithm, NetworkError};

	#[test]
	fn build_is_deterministic_per_seed() {
		let selection = Selection::new(Algorithm::ErdosRenyi);
		assert_eq!(build(&selection), build(&selection));
	}

	#[test]
	fn build_reports_invalid_parameters() {
		let mut selection = Selection::new(Algorithm::RandomLobster);
		selection.set_param("p1", 1.0);
		assert!(matches!(build(&selection), Err(NetworkError::InvalidParameter(_))));
	}

	#[test]
	fn summary_text() {
		let net = crate::network::generators::complete_graph(4);
		assert_eq!(summary(&net), "4 nodes, 6 edges, density 1.000");
		assert_eq!(summary(&Network::default()), "0 nodes, 0 edges, density 0.000");
	}
}
