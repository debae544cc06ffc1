//! Leptos component hosting the fireworks canvas.
//!
//! The component creates the canvas element, wires pointer events into the
//! simulation state, and runs the animation loop via
//! `requestAnimationFrame` once the external trigger flips. Each frame
//! renders the current state and then steps it, and the loop re-registers
//! itself for the next display refresh.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, PointerEvent, Window};

use super::config::FireworksConfig;
use super::render;
use super::state::FireworksState;

/// Bundles the simulation state with its build-time configuration.
struct DisplayContext {
	state: FireworksState,
	config: FireworksConfig,
}

/// Full-viewport fireworks canvas, hidden until `active` first turns true.
///
/// The first `true` on `active` reveals the canvas and starts the display;
/// there is no way to stop it afterwards — the show runs for as long as the
/// page lives. Holding the pointer down streams shells toward it; otherwise
/// shells launch on their own to random points in the upper half.
///
/// The canvas is sized to the viewport once at mount and keeps that size;
/// it does not follow later window resizes.
#[component]
pub fn FireworksCanvas(
	/// Starts the display on its first `true`; later changes are ignored.
	#[prop(into)]
	active: Signal<bool>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<DisplayContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let context_init = context.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		if context_init.borrow().is_some() {
			return;
		}
		let window: Window = web_sys::window().unwrap();
		let (w, h) = (
			window.inner_width().unwrap().as_f64().unwrap(),
			window.inner_height().unwrap().as_f64().unwrap(),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let config = FireworksConfig::default();
		let seed = js_sys::Date::now() as u64;
		*context_init.borrow_mut() = Some(DisplayContext {
			state: FireworksState::new(w, h, seed, &config),
			config,
		});
	});

	let (context_start, animate_start) = (context.clone(), animate.clone());
	Effect::new(move |_| {
		if !active.get() {
			return;
		}
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		{
			let mut context = context_start.borrow_mut();
			let Some(ref mut c) = *context else {
				return;
			};
			if !c.state.start() {
				// Already running; the trigger is one-way.
				return;
			}
		}
		log::info!("finale: fireworks display started");

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let (context_anim, animate_inner) = (context_start.clone(), animate_start.clone());
		*animate_start.borrow_mut() = Some(Closure::new(move || {
			let mut resubmit = false;
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				// Draw the pre-step frame, then age it.
				render::render(&c.state, &ctx, &c.config);
				c.state.step(&c.config);
				resubmit = c.state.running;
			}
			if resubmit {
				if let Some(ref cb) = *animate_inner.borrow() {
					let _ = web_sys::window()
						.unwrap()
						.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate_start.borrow() {
			let _ = web_sys::window()
				.unwrap()
				.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_pm = context.clone();
	let on_pointermove = move |ev: PointerEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		if let Some(ref mut c) = *context_pm.borrow_mut() {
			c.state.pointer.x = ev.client_x() as f64 - rect.left();
			c.state.pointer.y = ev.client_y() as f64 - rect.top();
		}
	};

	let context_pd = context.clone();
	let on_pointerdown = move |ev: PointerEvent| {
		ev.prevent_default();
		if let Some(ref mut c) = *context_pd.borrow_mut() {
			c.state.pointer.down = true;
		}
	};

	let context_pu = context.clone();
	let on_pointerup = move |ev: PointerEvent| {
		ev.prevent_default();
		if let Some(ref mut c) = *context_pu.borrow_mut() {
			c.state.pointer.down = false;
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="fireworks-canvas"
			class:hidden=move || !active.get()
			on:pointermove=on_pointermove
			on:pointerdown=on_pointerdown
			on:pointerup=on_pointerup
		/>
	}
}
