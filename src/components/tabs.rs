use leptos::prelude::*;

/// Row of tab buttons; `active` holds the selected index.
#[component]
pub fn TabBar(labels: &'static [&'static str], active: RwSignal<usize>) -> impl IntoView {
	view! {
		<nav class="tabs">
			{labels
				.iter()
				.enumerate()
				.map(|(i, label)| {
					view! {
						<button
							class="tab"
							class:active=move || active.get() == i
							on:click=move |_| active.set(i)
						>
							{*label}
						</button>
					}
				})
				.collect_view()}
		</nav>
	}
}

/// Keeps its children mounted and toggles visibility, so the canvas
/// animation loop survives tab switches.
#[component]
pub fn TabPanel(index: usize, active: RwSignal<usize>, children: Children) -> impl IntoView {
	view! {
		<section
			class="tab-panel"
			style:display=move || if active.get() == index { "block" } else { "none" }
		>
			{children()}
		</section>
	}
}
