//! A launched shell: flies from its origin toward a target point, then
//! bursts into sparks.

use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::SmallRng;

use super::config::FireworksConfig;
use super::math::distance;

/// Outcome of stepping a shell one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flight {
	/// Still traveling toward the target.
	Cruising,
	/// Reached the target this tick. The shell must be removed and a
	/// burst spawned at its target point.
	Arrived,
}

/// A shell in flight.
///
/// Motion is fully determined by geometry: the launch angle is fixed at
/// creation and the speed grows by a constant factor each tick, so the
/// arrival tick is reproducible regardless of the RNG (which only picks
/// the brightness).
#[derive(Clone, Debug)]
pub struct Firework {
	/// Current horizontal position.
	pub x: f64,
	/// Current vertical position.
	pub y: f64,
	/// Horizontal target, where the burst will appear.
	pub tx: f64,
	/// Vertical target, where the burst will appear.
	pub ty: f64,
	/// Recent positions, newest first, seeded with the origin. The window
	/// length never changes.
	pub trail: VecDeque<(f64, f64)>,
	/// HSL lightness percentage, fixed at creation.
	pub brightness: f64,
	/// Radius of the pulsing aiming reticle drawn on the target.
	pub target_radius: f64,
	/// Distance covered so far, measured from the origin. Never decreases
	/// while the shell lives.
	pub distance_traveled: f64,
	sx: f64,
	sy: f64,
	distance_to_target: f64,
	angle: f64,
	speed: f64,
}

impl Firework {
	/// Launch a shell from `(sx, sy)` toward `(tx, ty)`.
	pub fn new(
		sx: f64,
		sy: f64,
		tx: f64,
		ty: f64,
		rng: &mut SmallRng,
		config: &FireworksConfig,
	) -> Self {
		Self {
			x: sx,
			y: sy,
			sx,
			sy,
			tx,
			ty,
			trail: std::iter::repeat((sx, sy))
				.take(config.firework_trail_len)
				.collect(),
			brightness: rng
				.gen_range(config.firework_brightness_min..config.firework_brightness_max),
			target_radius: 1.0,
			distance_traveled: 0.0,
			distance_to_target: distance(sx, sy, tx, ty),
			angle: (ty - sy).atan2(tx - sx),
			speed: config.launch_speed,
		}
	}

	/// Advance one tick.
	///
	/// The arrival check looks one move ahead: if applying this tick's
	/// velocity would carry the shell at least as far as the target, it is
	/// reported as arrived *without* moving. Arrivals land on a tick
	/// boundary instead of overshooting, at the cost of sometimes stopping
	/// a hair short of the literal target pixel.
	pub fn step(&mut self, config: &FireworksConfig) -> Flight {
		self.trail.pop_back();
		self.trail.push_front((self.x, self.y));

		// Pulse the aiming reticle.
		if self.target_radius < config.reticle_radius_max {
			self.target_radius += config.reticle_growth;
		} else {
			self.target_radius = 1.0;
		}

		self.speed *= config.acceleration;
		let vx = self.angle.cos() * self.speed;
		let vy = self.angle.sin() * self.speed;

		self.distance_traveled = distance(self.sx, self.sy, self.x + vx, self.y + vy);
		if self.distance_traveled >= self.distance_to_target {
			Flight::Arrived
		} else {
			self.x += vx;
			self.y += vy;
			Flight::Cruising
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	fn shell(seed: u64, config: &FireworksConfig) -> Firework {
		let mut rng = SmallRng::seed_from_u64(seed);
		Firework::new(400.0, 600.0, 100.0, 150.0, &mut rng, config)
	}

	fn ticks_to_arrival(fw: &mut Firework, config: &FireworksConfig) -> u32 {
		let mut ticks = 0;
		loop {
			ticks += 1;
			assert!(ticks < 10_000, "shell never arrived");
			if fw.step(config) == Flight::Arrived {
				return ticks;
			}
		}
	}

	#[test]
	fn trail_starts_filled_with_origin() {
		let config = FireworksConfig::default();
		let fw = shell(1, &config);
		assert_eq!(fw.trail.len(), config.firework_trail_len);
		assert!(fw.trail.iter().all(|&pos| pos == (400.0, 600.0)));
	}

	#[test]
	fn trail_window_shifts_by_one() {
		let config = FireworksConfig::default();
		let mut fw = shell(1, &config);
		let before = (fw.x, fw.y);
		fw.step(&config);
		assert_eq!(fw.trail.len(), config.firework_trail_len);
		assert_eq!(*fw.trail.front().unwrap(), before);
		let second = (fw.x, fw.y);
		fw.step(&config);
		assert_eq!(fw.trail.len(), config.firework_trail_len);
		assert_eq!(*fw.trail.front().unwrap(), second);
		assert_eq!(fw.trail[1], before);
	}

	#[test]
	fn distance_traveled_never_decreases() {
		let config = FireworksConfig::default();
		let mut fw = shell(9, &config);
		let mut prev = fw.distance_traveled;
		while fw.step(&config) == Flight::Cruising {
			assert!(fw.distance_traveled >= prev);
			prev = fw.distance_traveled;
		}
	}

	#[test]
	fn arrival_tick_is_seed_independent() {
		// The RNG only picks brightness; motion is pure geometry.
		let config = FireworksConfig::default();
		let mut a = shell(1, &config);
		let mut b = shell(987_654, &config);
		assert_ne!(a.brightness, b.brightness);
		assert_eq!(
			ticks_to_arrival(&mut a, &config),
			ticks_to_arrival(&mut b, &config)
		);
	}

	#[test]
	fn arrival_does_not_move_the_shell() {
		let config = FireworksConfig::default();
		let mut fw = shell(4, &config);
		loop {
			let before = (fw.x, fw.y);
			if fw.step(&config) == Flight::Arrived {
				assert_eq!((fw.x, fw.y), before);
				break;
			}
		}
	}

	#[test]
	fn reticle_pulses_and_resets() {
		let config = FireworksConfig::default();
		let mut fw = shell(2, &config);
		// Force a long flight so the reticle has time to cycle.
		fw.distance_to_target = f64::INFINITY;

		let mut seen_reset = false;
		let mut prev = fw.target_radius;
		for _ in 0..100 {
			fw.step(&config);
			if fw.target_radius < prev {
				assert_eq!(fw.target_radius, 1.0);
				assert!(prev >= config.reticle_radius_max);
				seen_reset = true;
			} else {
				assert!((fw.target_radius - prev - config.reticle_growth).abs() < 1e-9);
			}
			prev = fw.target_radius;
		}
		assert!(seen_reset, "reticle never cycled back to 1");
	}
}
