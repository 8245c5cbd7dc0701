use leptos::prelude::*;
use log::warn;

use super::state::ViewState;
use super::types::TypeFilter;

/// Zoom out / in / reset buttons plus the auto-refresh toggle.
#[component]
pub fn ZoomControls(state: RwSignal<ViewState>) -> impl IntoView {
	view! {
		<div class="zoom-controls">
			<button title="Zoom Out" on:click=move |_| state.update(|s| s.scale.zoom_out())>
				"−"
			</button>
			<button title="Zoom In" on:click=move |_| state.update(|s| s.scale.zoom_in())>
				"+"
			</button>
			<button title="Reset Zoom" on:click=move |_| state.update(|s| s.scale.reset())>
				"⤢"
			</button>
			<button
				title="Toggle Auto-Refresh"
				class:active=move || state.with(|s| s.auto_refresh)
				on:click=move |_| state.update(|s| s.auto_refresh = !s.auto_refresh)
			>
				"⟳"
			</button>
		</div>
	}
}

/// Search box, node-type select and the show-contradictions switch.
#[component]
pub fn FilterPanel(state: RwSignal<ViewState>) -> impl IntoView {
	view! {
		<div class="card filters">
			<h3>"Filters"</h3>
			<label class="field-label">"Search"</label>
			<input
				type="text"
				placeholder="Search nodes..."
				prop:value=move || state.with(|s| s.search.clone())
				on:input=move |ev| {
					let text = event_target_value(&ev);
					state.update(|s| s.search = text);
				}
			/>
			<label class="field-label">"Node Type"</label>
			<select
				prop:value=move || state.with(|s| s.type_filter.as_str())
				on:change=move |ev| {
					let value = event_target_value(&ev);
					state.update(|s| {
						if let Err(e) = s.select_type(&value) {
							warn!("{e}");
						}
					});
				}
			>
				{TypeFilter::OPTIONS
					.into_iter()
					.map(|f| view! { <option value=f.as_str()>{f.label()}</option> })
					.collect_view()}
			</select>
			<p class="field-label">"Display Options"</p>
			<label class="switch-row">
				"Show Contradictions"
				<input
					id="show-contradictions"
					type="checkbox"
					prop:checked=move || state.with(|s| s.show_contradictions)
					on:change=move |ev| {
						let checked = event_target_checked(&ev);
						state.update(|s| s.show_contradictions = checked);
					}
				/>
			</label>
		</div>
	}
}
