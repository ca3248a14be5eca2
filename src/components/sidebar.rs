use leptos::prelude::*;
use log::{info, warn};
use rand::Rng;

use crate::config::Selection;
use crate::network::{Algorithm, ParamSpec};

/// Algorithm picker, one slider per parameter and the seed control.
#[component]
pub fn Sidebar(selection: RwSignal<Selection>) -> impl IntoView {
	let algorithm = Memo::new(move |_| selection.with(|s| s.algorithm));

	let on_algorithm = move |ev: web_sys::Event| match event_target_value(&ev).parse::<Algorithm>() {
		Ok(choice) => {
			info!("switching to {}", choice.label());
			selection.update(|s| s.switch_to(choice));
		}
		Err(err) => warn!("{err}"),
	};

	let on_reseed = move |_| {
		let seed = rand::thread_rng().gen_range(0..1_000_000);
		selection.update(|s| s.seed = seed);
	};

	view! {
		<aside class="sidebar">
			<label for="algorithm">"Select the Network Type:"</label>
			<select
				id="algorithm"
				on:change=on_algorithm
				prop:value=move || algorithm.get().slug()
			>
				{Algorithm::ALL
					.into_iter()
					.map(|choice| {
						view! {
							<option value=choice.slug() selected=move || algorithm.get() == choice>
								{choice.label()}
							</option>
						}
					})
					.collect_view()}
			</select>

			{move || {
				algorithm
					.get()
					.params()
					.iter()
					.map(|spec| view! { <ParamSlider spec=*spec selection=selection /> })
					.collect_view()
			}}

			<Show when=move || algorithm.get().is_random()>
				<div class="seed">
					<span>"Seed: " {move || selection.with(|s| s.seed)}</span>
					<button on:click=on_reseed>"New seed"</button>
				</div>
			</Show>
		</aside>
	}
}

#[component]
fn ParamSlider(spec: ParamSpec, selection: RwSignal<Selection>) -> impl IntoView {
	let value = move || selection.with(|s| s.params.get(spec.key));
	// an empty range (e.g. m with a single node) collapses onto min
	let max = move || selection.with(|s| spec.max.resolve(&s.params).max(spec.min));
	let shown = move || {
		let v = value();
		if spec.is_fractional() { format!("{v:.2}") } else { format!("{v:.0}") }
	};

	let on_input = move |ev: web_sys::Event| {
		if let Ok(v) = event_target_value(&ev).parse::<f64>() {
			selection.update(|s| s.set_param(spec.key, v));
		}
	};

	view! {
		<div class="param">
			<label>
				{spec.label} " " <span class="param-value">{shown}</span>
			</label>
			<input
				type="range"
				min=spec.min.to_string()
				max=move || max().to_string()
				step=spec.step.to_string()
				prop:value=move || value().to_string()
				on:input=on_input
			/>
			{spec.help.map(|help| view! { <small class="help">{help}</small> })}
		</div>
	}
}
