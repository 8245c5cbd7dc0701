use std::time::Duration;

use leptos::prelude::*;
use log::{debug, warn};

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5);

/// Run `on_tick` every `interval` while `enabled` is true.
///
/// Must be called inside a reactive owner. The interval is cleared when
/// `enabled` turns false and when the owner is cleaned up.
pub fn idle_refresh(enabled: Signal<bool>, interval: Duration, on_tick: impl Fn() + Clone + 'static) {
	Effect::new(move |_| {
		if !enabled.get() {
			return;
		}
		match set_interval_with_handle(on_tick.clone(), interval) {
			Ok(handle) => {
				debug!("Auto-refresh started ({interval:?})");
				on_cleanup(move || {
					handle.clear();
					debug!("Auto-refresh stopped");
				});
			}
			Err(e) => warn!("Could not start auto-refresh timer: {e:?}"),
		}
	});
}
