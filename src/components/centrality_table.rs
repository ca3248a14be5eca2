use leptos::prelude::*;

use crate::network::{CentralityRow, CentralityTable, SortColumn};

fn csv_href(table: &CentralityTable) -> String {
	let encoded: String = js_sys::encode_uri_component(&table.to_csv()).into();
	format!("data:text/csv;charset=utf-8,{encoded}")
}

/// Sortable per-node centrality scores with a CSV download link.
#[component]
pub fn CentralityTableView(table: CentralityTable) -> impl IntoView {
	let column = RwSignal::new(SortColumn::Node);
	let descending = RwSignal::new(false);
	let href = csv_href(&table);
	let rows = Memo::new(move |_| table.clone().sorted(column.get(), descending.get()));

	// clicking the active column flips direction; scores start highest first
	let sort_by = move |clicked: SortColumn| {
		if column.get_untracked() == clicked {
			descending.update(|d| *d = !*d);
		} else {
			column.set(clicked);
			descending.set(clicked != SortColumn::Node);
		}
	};

	let arrow = move |c: SortColumn| {
		if column.get() != c {
			""
		} else if descending.get() {
			" ▼"
		} else {
			" ▲"
		}
	};

	view! {
		<div class="centrality">
			<table class="centrality-table">
				<thead>
					<tr>
						{SortColumn::ALL
							.into_iter()
							.map(|c| {
								view! {
									<th on:click=move |_| sort_by(c)>{c.label()} {move || arrow(c)}</th>
								}
							})
							.collect_view()}
					</tr>
				</thead>
				<tbody>
					<For
						each=move || rows.with(|t| t.rows().to_vec())
						key=|row| row.node
						children=move |row: CentralityRow| {
							view! {
								<tr>
									<td>{row.node}</td>
									<td>{format!("{:.4}", row.degree)}</td>
									<td>{format!("{:.4}", row.eigenvector)}</td>
									<td>{format!("{:.4}", row.betweenness)}</td>
								</tr>
							}
						}
					/>
				</tbody>
			</table>
			<a class="download" download="centrality.csv" href=href>
				"Download CSV"
			</a>
		</div>
	}
}
