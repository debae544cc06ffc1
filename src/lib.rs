//! finale: a countdown widget that ends in canvas fireworks.
//!
//! This crate renders a live countdown to a fixed target date and, when it
//! reaches zero, reveals a full-viewport canvas running a particle
//! fireworks display. The simulation core is plain Rust with no browser
//! types, so it tests on the native host; the components wire it to the
//! DOM.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::countdown::{Countdown, Remaining};
pub use components::fireworks::{
	Firework, FireworksCanvas, FireworksConfig, FireworksState, Flight, Particle, PointerState,
};

/// Fallback countdown length when no usable target is embedded in the
/// host page, so the widget still does something on a bare page.
const DEMO_COUNTDOWN_MS: f64 = 60_000.0;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("finale: logging initialized");
}

/// Widget options embedded in the host page.
#[derive(Clone, Debug, Deserialize)]
pub struct WidgetConfig {
	/// Target instant as an ISO 8601 date string,
	/// e.g. `"2027-01-01T00:00:00-07:00"`.
	pub target: String,
}

/// Load widget options from a script element with id="countdown-config".
/// Expected format: JSON with { "target": "<ISO 8601 date>" }
fn load_widget_config() -> Option<WidgetConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("countdown-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<WidgetConfig>(&json_text) {
		Ok(config) => {
			info!("finale: counting down to {}", config.target);
			Some(config)
		}
		Err(e) => {
			warn!("finale: failed to parse widget config: {}", e);
			None
		}
	}
}

/// Resolve the countdown target in epoch milliseconds, falling back to a
/// short demo countdown when the page embeds nothing usable.
fn resolve_target_ms() -> f64 {
	match load_widget_config() {
		Some(config) => {
			let ms = js_sys::Date::new(&JsValue::from_str(&config.target)).get_time();
			if ms.is_finite() {
				ms
			} else {
				warn!(
					"finale: target date {:?} did not parse, using demo countdown",
					config.target
				);
				js_sys::Date::now() + DEMO_COUNTDOWN_MS
			}
		}
		None => js_sys::Date::now() + DEMO_COUNTDOWN_MS,
	}
}

/// Main application component.
/// Renders the countdown overlay above the hidden fireworks canvas and
/// wires the countdown's zero signal to the start of the display.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let target_ms = resolve_target_ms();
	let (celebrating, set_celebrating) = signal(false);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Countdown" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="finale">
			<FireworksCanvas active=celebrating />
			<div class="countdown-overlay">
				<Countdown target_ms=target_ms on_zero=move |_: ()| set_celebrating.set(true) />
			</div>
		</div>
	}
}
