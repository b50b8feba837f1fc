#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic locomotion system that drives the walking character.
//!
//! The world owns the walk path and progress; this system owns the movement
//! policy. Each frame it folds the elapsed simulated time out of the event
//! stream and, while a walk is active, asks the world to carry the character
//! the corresponding distance along its path. The world resolves segment
//! crossings, arrival, and deferred section switches on its own.

use std::time::Duration;

use monument_core::{Command, Event};

/// Walking pace in world units per second of simulated time.
pub const DEFAULT_WALK_SPEED: f32 = 1.6;

/// Configuration parameters required to construct the locomotion system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    speed: f32,
}

impl Config {
    /// Creates a new configuration using the provided walking pace.
    #[must_use]
    pub const fn new(speed: f32) -> Self {
        Self { speed }
    }
}

/// Pure system that converts elapsed time into walk-advance commands.
#[derive(Debug)]
pub struct Locomotion {
    speed: f32,
}

impl Locomotion {
    /// Creates a new locomotion system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            speed: config.speed,
        }
    }

    /// Consumes events and the walking flag to emit advance commands.
    pub fn handle(&self, events: &[Event], walking: bool, out: &mut Vec<Command>) {
        if !walking || self.speed <= 0.0 {
            return;
        }

        let mut accumulated = Duration::ZERO;
        for event in events {
            if let Event::TimeAdvanced { dt } = event {
                accumulated = accumulated.saturating_add(*dt);
            }
        }
        if accumulated.is_zero() {
            return;
        }

        let travel = self.speed * accumulated.as_secs_f32();
        if travel > 0.0 {
            out.push(Command::AdvanceWalk { travel });
        }
    }
}

impl Default for Locomotion {
    fn default() -> Self {
        Self::new(Config::new(DEFAULT_WALK_SPEED))
    }
}
