//! Tunables for the fireworks display.
//!
//! Everything here is fixed at build time; the widget exposes no runtime
//! knobs. Speeds and distances are in canvas pixels per tick, one tick per
//! animation frame.

/// Constants governing shell flight, burst sparks, and launch pacing.
#[derive(Clone, Debug)]
pub struct FireworksConfig {
	/// Trail window length for shells in flight.
	pub firework_trail_len: usize,
	/// Trail window length for burst sparks. Longer than the shell trail
	/// so the burst reads as streaks rather than dots.
	pub particle_trail_len: usize,
	/// Shell speed at launch.
	pub launch_speed: f64,
	/// Multiplicative shell speed gain per tick.
	pub acceleration: f64,
	/// Multiplicative spark speed loss per tick.
	pub friction: f64,
	/// Constant downward pull added to spark vertical motion each tick.
	pub gravity: f64,
	/// Lower bound of the spark speed sampled at burst.
	pub particle_speed_min: f64,
	/// Upper bound of the spark speed sampled at burst.
	pub particle_speed_max: f64,
	/// Sparks created per burst.
	pub burst_count: usize,
	/// Lower bound of the per-tick spark alpha loss, fixed per spark.
	pub decay_min: f64,
	/// Upper bound of the per-tick spark alpha loss, fixed per spark.
	pub decay_max: f64,
	/// Lower HSL lightness bound for shells, in percent.
	pub firework_brightness_min: f64,
	/// Upper HSL lightness bound for shells, in percent.
	pub firework_brightness_max: f64,
	/// Lower HSL lightness bound for sparks, in percent.
	pub particle_brightness_min: f64,
	/// Upper HSL lightness bound for sparks, in percent.
	pub particle_brightness_max: f64,
	/// Ambient hue at startup, in degrees.
	pub hue_start: f64,
	/// Ambient hue gain per tick. The hue grows without bound; `hsl()`
	/// accepts any angle, so it is never reduced mod 360.
	pub hue_increment: f64,
	/// Spark hue spread to either side of the ambient hue at burst.
	pub hue_spread: f64,
	/// Largest aiming-reticle radius before the pulse resets to 1.
	pub reticle_radius_max: f64,
	/// Reticle radius gain per tick.
	pub reticle_growth: f64,
	/// Ticks between automatic launches.
	pub auto_launch_ticks: u32,
	/// Ticks between launches while the pointer is held.
	pub pointer_launch_ticks: u32,
	/// Alpha of the per-frame fade fill that erodes old trails.
	pub fade_alpha: f64,
}

impl Default for FireworksConfig {
	fn default() -> Self {
		Self {
			firework_trail_len: 3,
			particle_trail_len: 5,
			launch_speed: 2.0,
			acceleration: 1.05,
			friction: 0.95,
			gravity: 1.0,
			particle_speed_min: 1.0,
			particle_speed_max: 10.0,
			burst_count: 30,
			decay_min: 0.015,
			decay_max: 0.03,
			firework_brightness_min: 70.0,
			firework_brightness_max: 100.0,
			particle_brightness_min: 60.0,
			particle_brightness_max: 90.0,
			hue_start: 120.0,
			hue_increment: 0.5,
			hue_spread: 20.0,
			reticle_radius_max: 8.0,
			reticle_growth: 0.3,
			auto_launch_ticks: 80,
			pointer_launch_ticks: 5,
			fade_alpha: 0.5,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_bounds_are_ordered() {
		let config = FireworksConfig::default();
		assert!(config.particle_speed_min < config.particle_speed_max);
		assert!(config.decay_min < config.decay_max);
		assert!(config.firework_brightness_min < config.firework_brightness_max);
		assert!(config.particle_brightness_min < config.particle_brightness_max);
		assert!(config.firework_trail_len > 0);
		assert!(config.particle_trail_len > 0);
	}

	#[test]
	fn spark_motion_decays() {
		let config = FireworksConfig::default();
		assert!(config.friction < 1.0);
		assert!(config.acceleration > 1.0);
		assert!(config.decay_min > 0.0);
	}
}
