//! Mutable simulation state for the fireworks display.
//!
//! Everything the display mutates frame to frame lives in one aggregate
//! owned by the canvas component: the live shell and spark sets, the
//! ambient hue, the launch pacing counters, the pointer state, and the RNG.
//! It is touched only from the frame closure and the pointer handlers, both
//! on the same thread.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::config::FireworksConfig;
use super::firework::{Firework, Flight};
use super::particle::Particle;

/// Last known pointer position and held flag, written by the canvas event
/// handlers and read by the launch logic.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
	/// Last known canvas-local horizontal position.
	pub x: f64,
	/// Last known canvas-local vertical position.
	pub y: f64,
	/// Whether the pointer is currently held down.
	pub down: bool,
}

/// The whole simulation: live entities, pacing counters, and pointer input.
pub struct FireworksState {
	/// Shells currently in flight. Removal order is irrelevant; only the
	/// visual layering of overlapping trails depends on it.
	pub fireworks: Vec<Firework>,
	/// Sparks currently burning.
	pub particles: Vec<Particle>,
	/// Ambient hue in degrees. Grows without bound; see
	/// [`FireworksConfig::hue_increment`].
	pub hue: f64,
	/// Pointer input, written by the component's event handlers.
	pub pointer: PointerState,
	/// Drawing surface width, fixed at startup.
	pub width: f64,
	/// Drawing surface height, fixed at startup.
	pub height: f64,
	/// Whether the display has been started. One-way: nothing ever sets
	/// this back to false, but the frame loop still checks it before
	/// rescheduling itself.
	pub running: bool,
	auto_tick: u32,
	pointer_tick: u32,
	rng: SmallRng,
}

impl FireworksState {
	/// Create an idle display for a surface of the given size.
	pub fn new(width: f64, height: f64, seed: u64, config: &FireworksConfig) -> Self {
		Self {
			fireworks: Vec::new(),
			particles: Vec::new(),
			hue: config.hue_start,
			pointer: PointerState::default(),
			width,
			height,
			running: false,
			auto_tick: 0,
			pointer_tick: 0,
			rng: SmallRng::seed_from_u64(seed),
		}
	}

	/// Idle→running transition. Returns `true` only on the call that
	/// actually started the display, so the caller schedules exactly one
	/// frame loop no matter how often the trigger fires.
	pub fn start(&mut self) -> bool {
		if self.running {
			return false;
		}
		self.running = true;
		true
	}

	/// Launch a shell from the bottom center of the surface toward
	/// `(tx, ty)`.
	pub fn launch(&mut self, tx: f64, ty: f64, config: &FireworksConfig) {
		let shell = Firework::new(self.width / 2.0, self.height, tx, ty, &mut self.rng, config);
		self.fireworks.push(shell);
	}

	fn spawn_burst(&mut self, x: f64, y: f64, config: &FireworksConfig) {
		for _ in 0..config.burst_count {
			let spark = Particle::new(x, y, self.hue, &mut self.rng, config);
			self.particles.push(spark);
		}
	}

	/// One simulation tick: advance the hue, age every shell and spark
	/// (shells strictly first), burst arrived shells, and run the two
	/// launch counters.
	pub fn step(&mut self, config: &FireworksConfig) {
		self.hue += config.hue_increment;

		// Collect burst points while retaining survivors; spawning waits
		// until after so the RNG is free to be borrowed again.
		let mut bursts = Vec::new();
		self.fireworks.retain_mut(|shell| match shell.step(config) {
			Flight::Cruising => true,
			Flight::Arrived => {
				bursts.push((shell.tx, shell.ty));
				false
			}
		});
		for (x, y) in bursts {
			self.spawn_burst(x, y, config);
		}

		self.particles.retain_mut(|spark| !spark.step(config));

		// Automatic launches pause while the pointer is held; a counter
		// past its threshold stays primed and fires on release.
		if self.auto_tick >= config.auto_launch_ticks {
			if !self.pointer.down {
				let tx = self.rng.gen_range(0.0..self.width);
				let ty = self.rng.gen_range(0.0..self.height / 2.0);
				self.launch(tx, ty, config);
				self.auto_tick = 0;
			}
		} else {
			self.auto_tick += 1;
		}

		// Pointer launches are the mirror image: they only fire while the
		// pointer is held, aimed at its last known position.
		if self.pointer_tick >= config.pointer_launch_ticks {
			if self.pointer.down {
				let (tx, ty) = (self.pointer.x, self.pointer.y);
				self.launch(tx, ty, config);
				self.pointer_tick = 0;
			}
		} else {
			self.pointer_tick += 1;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn idle_state(config: &FireworksConfig) -> FireworksState {
		FireworksState::new(800.0, 600.0, 42, config)
	}

	#[test]
	fn start_is_one_way_and_idempotent() {
		let config = FireworksConfig::default();
		let mut state = idle_state(&config);
		assert!(!state.running);
		assert!(state.start());
		assert!(state.running);
		assert!(!state.start());
		assert!(state.running);
	}

	#[test]
	fn hue_advances_every_tick() {
		let config = FireworksConfig::default();
		let mut state = idle_state(&config);
		let start = state.hue;
		for _ in 0..10 {
			state.step(&config);
		}
		assert!((state.hue - start - 10.0 * config.hue_increment).abs() < 1e-9);
	}

	#[test]
	fn auto_launch_fires_after_threshold() {
		let config = FireworksConfig::default();
		let mut state = idle_state(&config);
		// The counter climbs to the threshold, then the next tick fires.
		for _ in 0..config.auto_launch_ticks {
			state.step(&config);
		}
		assert!(state.fireworks.is_empty());
		state.step(&config);
		assert_eq!(state.fireworks.len(), 1);
	}

	#[test]
	fn auto_launch_targets_upper_half() {
		let config = FireworksConfig::default();
		let mut state = idle_state(&config);
		for _ in 0..=config.auto_launch_ticks {
			state.step(&config);
		}
		let shell = &state.fireworks[0];
		assert!(shell.tx >= 0.0 && shell.tx < state.width);
		assert!(shell.ty >= 0.0 && shell.ty < state.height / 2.0);
	}

	#[test]
	fn held_pointer_suppresses_auto_launch_and_keeps_it_primed() {
		let config = FireworksConfig::default();
		let mut state = idle_state(&config);
		state.pointer.down = true;
		state.pointer.x = 10.0;
		state.pointer.y = 10.0;

		// Run well past the auto threshold with the pointer held: every
		// launch in that window must be a pointer launch at (10, 10).
		for _ in 0..(config.auto_launch_ticks * 2) {
			state.step(&config);
		}
		assert!(state.fireworks.iter().all(|s| s.tx == 10.0 && s.ty == 10.0));

		// Releasing lets the primed auto counter fire on the next tick:
		// exactly one shell aimed somewhere other than the pointer.
		state.pointer.down = false;
		state.step(&config);
		let autos = state
			.fireworks
			.iter()
			.filter(|s| s.tx != 10.0 || s.ty != 10.0)
			.count();
		assert_eq!(autos, 1);
	}

	#[test]
	fn at_most_one_launch_per_tick() {
		// With both thresholds at zero, both counters are permanently
		// primed; the pointer flag must still pick exactly one of them.
		let config = FireworksConfig {
			auto_launch_ticks: 0,
			pointer_launch_ticks: 0,
			..FireworksConfig::default()
		};
		let mut state = idle_state(&config);

		state.step(&config);
		assert_eq!(state.fireworks.len(), 1, "pointer up: auto only");

		state.pointer.down = true;
		state.pointer.x = 400.0;
		state.pointer.y = 100.0;
		state.step(&config);
		assert_eq!(state.fireworks.len(), 2, "pointer down: pointer only");
		assert_eq!((state.fireworks[1].tx, state.fireworks[1].ty), (400.0, 100.0));
	}

	#[test]
	fn pointer_launch_waits_for_its_threshold() {
		let config = FireworksConfig::default();
		let mut state = idle_state(&config);
		state.pointer.down = true;
		for _ in 0..config.pointer_launch_ticks {
			state.step(&config);
		}
		assert!(state.fireworks.is_empty());
		state.step(&config);
		assert_eq!(state.fireworks.len(), 1);
	}
}
