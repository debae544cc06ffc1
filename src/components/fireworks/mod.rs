//! Fireworks display on an HTML canvas.
//!
//! Shells launch from the bottom center of the surface toward a target
//! point, drawing a short trail and pulsing an aiming reticle on the
//! target; on arrival each shell bursts into a batch of sparks that fly
//! apart, fall, and fade out. The simulation modules (`state`, `firework`,
//! `particle`, `math`, `config`) are free of browser types and advance in
//! fixed ticks, so they test on the native host; `component` and `render`
//! bind them to a canvas and a `requestAnimationFrame` loop.

mod component;
mod config;
mod firework;
mod math;
mod particle;
mod render;
mod state;

pub use component::FireworksCanvas;
pub use config::FireworksConfig;
pub use firework::{Firework, Flight};
pub use particle::Particle;
pub use state::{FireworksState, PointerState};
