//! Canvas drawing for the fireworks display.
//!
//! A read-only pass over the simulation state, run before the state is
//! stepped so every entity is drawn at its pre-step position. Old frames
//! are eroded rather than cleared, which is what turns the per-entity
//! trail windows into long fading streaks.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::config::FireworksConfig;
use super::firework::Firework;
use super::particle::Particle;
use super::state::FireworksState;

/// Draw one frame: fade the previous one, then stroke every shell and
/// every spark. Shells first, so fresh bursts layer over old trails.
pub fn render(state: &FireworksState, ctx: &CanvasRenderingContext2d, config: &FireworksConfig) {
	// Punch translucent black out of the existing pixels instead of
	// clearing them, then switch back to additive blending for the glow.
	let _ = ctx.set_global_composite_operation("destination-out");
	ctx.set_fill_style_str(&format!("rgba(0, 0, 0, {})", config.fade_alpha));
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	let _ = ctx.set_global_composite_operation("lighter");

	for shell in &state.fireworks {
		draw_firework(ctx, shell, state.hue);
	}
	for spark in &state.particles {
		draw_particle(ctx, spark);
	}
}

fn draw_firework(ctx: &CanvasRenderingContext2d, shell: &Firework, hue: f64) {
	let (ox, oy) = shell.trail.back().copied().unwrap_or((shell.x, shell.y));
	ctx.begin_path();
	ctx.move_to(ox, oy);
	ctx.line_to(shell.x, shell.y);
	ctx.set_stroke_style_str(&format!("hsl({}, 100%, {}%)", hue, shell.brightness));
	ctx.stroke();

	// Pulsing reticle on the target point, visible until arrival.
	ctx.begin_path();
	let _ = ctx.arc(shell.tx, shell.ty, shell.target_radius, 0.0, TAU);
	ctx.stroke();
}

fn draw_particle(ctx: &CanvasRenderingContext2d, spark: &Particle) {
	let (ox, oy) = spark.trail.back().copied().unwrap_or((spark.x, spark.y));
	ctx.begin_path();
	ctx.move_to(ox, oy);
	ctx.line_to(spark.x, spark.y);
	ctx.set_stroke_style_str(&format!(
		"hsla({}, 100%, {}%, {})",
		spark.hue, spark.brightness, spark.alpha
	));
	ctx.stroke();
}
