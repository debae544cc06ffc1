//! Leptos component for the countdown clock.
//!
//! A one-second interval recomputes the remaining time against the wall
//! clock and updates the four number spans. When the countdown reaches
//! zero — or the skip button is pressed — the interval is cleared exactly
//! once and the `on_zero` callback fires.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use super::clock::Remaining;

/// Milliseconds between countdown updates.
const TICK_MS: i32 = 1_000;

/// Locale-formatted day count (grouping separators for large values).
fn format_days(days: i64) -> String {
	js_sys::Number::from(days as f64)
		.to_locale_string("en-US")
		.into()
}

/// Countdown clock that fires `on_zero` exactly once when it runs out.
///
/// If the target is already in the past at mount, the clock shows zeros
/// and finishes immediately instead of idling forever.
#[component]
pub fn Countdown(
	/// Target instant, in milliseconds since the Unix epoch.
	target_ms: f64,
	/// Fired exactly once when the countdown reaches zero (or is skipped).
	#[prop(into)]
	on_zero: Callback<()>,
) -> impl IntoView {
	let initial = Remaining::from_secs((target_ms - js_sys::Date::now()) / 1_000.0);
	let (days, set_days) = signal(format_days(initial.days));
	let (hours, set_hours) = signal(initial.hours);
	let (minutes, set_minutes) = signal(initial.minutes);
	let (seconds, set_seconds) = signal(initial.seconds);

	let interval: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
	let finished = Rc::new(Cell::new(false));
	let tick_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	// Shared single-shot finish path: natural expiry and the skip button
	// both land here, and only the first caller gets through.
	let finish = {
		let (interval, finished) = (interval.clone(), finished.clone());
		move || {
			if finished.replace(true) {
				return;
			}
			if let Some(handle) = interval.borrow_mut().take() {
				if let Some(window) = web_sys::window() {
					window.clear_interval_with_handle(handle);
				}
			}
			log::info!("finale: countdown finished");
			on_zero.run(());
		}
	};

	let update = {
		let finish = finish.clone();
		move || {
			let diff = (target_ms - js_sys::Date::now()) / 1_000.0;
			let left = Remaining::from_secs(diff);
			set_days.set(format_days(left.days));
			set_hours.set(left.hours);
			set_minutes.set(left.minutes);
			set_seconds.set(left.seconds);
			if left.is_zero() {
				finish();
			}
		}
	};

	let (interval_fx, finished_fx, tick_fx) = (interval.clone(), finished.clone(), tick_cb.clone());
	Effect::new(move |_| {
		if interval_fx.borrow().is_some() || finished_fx.get() {
			return;
		}
		// Initial paint; this may already end the countdown.
		update();
		if finished_fx.get() {
			return;
		}
		let window: Window = web_sys::window().unwrap();
		let update_tick = update.clone();
		*tick_fx.borrow_mut() = Some(Closure::new(move || update_tick()));
		if let Some(ref cb) = *tick_fx.borrow() {
			match window.set_interval_with_callback_and_timeout_and_arguments_0(
				cb.as_ref().unchecked_ref(),
				TICK_MS,
			) {
				Ok(handle) => *interval_fx.borrow_mut() = Some(handle),
				Err(err) => log::warn!("finale: could not start countdown timer: {err:?}"),
			}
		}
	});

	let finish_skip = finish.clone();
	view! {
		<div class="countdown">
			<div class="countdown-units">
				<div class="unit">
					<span class="value">{days}</span>
					<span class="label">"days"</span>
				</div>
				<div class="unit">
					<span class="value">{hours}</span>
					<span class="label">"hours"</span>
				</div>
				<div class="unit">
					<span class="value">{minutes}</span>
					<span class="label">"minutes"</span>
				</div>
				<div class="unit">
					<span class="value">{seconds}</span>
					<span class="label">"seconds"</span>
				</div>
			</div>
			<button class="countdown-skip" on:click=move |_| finish_skip()>
				"Celebrate now"
			</button>
		</div>
	}
}
