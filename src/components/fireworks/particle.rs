//! A burst spark: one glowing fragment thrown out when a shell arrives.

use std::collections::VecDeque;
use std::f64::consts::TAU;

use rand::Rng;
use rand::rngs::SmallRng;

use super::config::FireworksConfig;

/// One spark from a firework burst.
///
/// Sparks fly on a fixed angle, slow under friction, sink under gravity,
/// and fade until their alpha can no longer survive one more decay step.
#[derive(Clone, Debug)]
pub struct Particle {
	/// Current horizontal position.
	pub x: f64,
	/// Current vertical position.
	pub y: f64,
	/// Recent positions, newest first. The window length never changes;
	/// the oldest entry is where the trail stroke reaches back to.
	pub trail: VecDeque<(f64, f64)>,
	/// Color hue, sampled around the ambient hue at creation.
	pub hue: f64,
	/// HSL lightness percentage.
	pub brightness: f64,
	/// Current opacity. Starts at 1 and only ever decreases.
	pub alpha: f64,
	/// Per-tick alpha loss, fixed at creation.
	pub decay: f64,
	/// Flight direction in radians, fixed at creation.
	pub angle: f64,
	/// Current scalar speed.
	pub speed: f64,
}

impl Particle {
	/// Create a spark at the burst point with randomized attributes.
	pub fn new(
		x: f64,
		y: f64,
		ambient_hue: f64,
		rng: &mut SmallRng,
		config: &FireworksConfig,
	) -> Self {
		Self {
			x,
			y,
			trail: std::iter::repeat((x, y))
				.take(config.particle_trail_len)
				.collect(),
			hue: rng.gen_range(ambient_hue - config.hue_spread..ambient_hue + config.hue_spread),
			brightness: rng
				.gen_range(config.particle_brightness_min..config.particle_brightness_max),
			alpha: 1.0,
			decay: rng.gen_range(config.decay_min..config.decay_max),
			angle: rng.gen_range(0.0..TAU),
			speed: rng.gen_range(config.particle_speed_min..config.particle_speed_max),
		}
	}

	/// Advance one tick. Returns `true` once the spark has expired and
	/// must be dropped from the live set.
	pub fn step(&mut self, config: &FireworksConfig) -> bool {
		self.trail.pop_back();
		self.trail.push_front((self.x, self.y));

		self.speed *= config.friction;
		self.x += self.angle.cos() * self.speed;
		self.y += self.angle.sin() * self.speed + config.gravity;
		self.alpha -= self.decay;

		// Expire one tick before alpha would cross zero.
		self.alpha <= self.decay
	}
}
