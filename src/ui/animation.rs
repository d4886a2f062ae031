// SPDX-License-Identifier: MPL-2.0
//! Tick-driven animation primitives for overlay transitions.
//!
//! Overlays never animate through ad hoc timers: every moving value is
//! driven by one of two primitives advanced from the application's `Tick`
//! message:
//!
//! - [`Timeline`] interpolates between two scalars over a fixed duration
//!   with a configurable easing curve.
//! - [`Spring`] settles a scalar toward a target with damped second-order
//!   motion, used for cancelled drags.
//!
//! Both guarantee at-most-once completion per start and can be cancelled
//! without completing, which is what lets sheet unmount suppress a pending
//! close notification.

use crate::config::{SPRING_DAMPING, SPRING_REST_DISTANCE, SPRING_REST_VELOCITY, SPRING_STIFFNESS};
use std::time::Duration;

/// Easing curve applied to a timeline's raw progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Cubic ease-out (decelerating), used for entrances.
    #[default]
    EaseOutCubic,
    /// Cubic ease-in (accelerating), used for exits.
    EaseInCubic,
    /// Cubic S-curve.
    EaseInOutCubic,
}

impl Easing {
    /// Applies the curve to a progress value, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::EaseInCubic => t * t * t,
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}

/// A duration-bounded interpolation between two scalar values.
///
/// A timeline starts running the moment it is constructed. `tick` returns
/// `true` exactly once, on the tick that completes it; after completion (or
/// [`Timeline::stop`]) further ticks are no-ops. A zero-duration timeline
/// completes on its first tick.
#[derive(Debug, Clone)]
pub struct Timeline {
    from: f32,
    to: f32,
    duration: Duration,
    easing: Easing,
    elapsed: Duration,
    running: bool,
}

impl Timeline {
    /// Creates a timeline from `from` to `to` over `duration`.
    #[must_use]
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            elapsed: Duration::ZERO,
            running: true,
        }
    }

    /// Advances the timeline by `delta`.
    ///
    /// Returns `true` on the tick that completes the timeline, and never
    /// again afterwards.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed += delta;
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.running = false;
            return true;
        }
        false
    }

    /// Current interpolated value.
    #[must_use]
    pub fn value(&self) -> f32 {
        let eased = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }

    /// Raw (un-eased) progress in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return if self.running { 0.0 } else { 1.0 };
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Whether the timeline is still advancing.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Cancels the timeline in place. The value freezes where it is and
    /// `tick` will never report completion.
    pub fn stop(&mut self) {
        self.running = false;
    }
}

/// Damped spring settling a value toward a target.
///
/// Units are logical pixels and pixels per second. Integration is
/// semi-implicit Euler, which is stable for the stiffness/damping pair in
/// `config` at tick deltas up to the capped maximum.
#[derive(Debug, Clone)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    settled: bool,
}

impl Spring {
    /// Creates a spring at `value` moving with `velocity` toward `target`.
    #[must_use]
    pub fn new(value: f32, velocity: f32, target: f32) -> Self {
        Self {
            value,
            velocity,
            target,
            settled: false,
        }
    }

    /// Advances the spring by `delta`.
    ///
    /// Returns `true` on the tick that settles it; the value snaps to the
    /// target at that point.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if self.settled {
            return false;
        }
        let dt = delta.as_secs_f32();
        let displacement = self.value - self.target;
        let acceleration = -SPRING_STIFFNESS * displacement - SPRING_DAMPING * self.velocity;
        self.velocity += acceleration * dt;
        self.value += self.velocity * dt;

        if (self.value - self.target).abs() < SPRING_REST_DISTANCE
            && self.velocity.abs() < SPRING_REST_VELOCITY
        {
            self.value = self.target;
            self.velocity = 0.0;
            self.settled = true;
            return true;
        }
        false
    }

    /// Current spring value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Whether the spring has reached its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn easing_endpoints_are_exact() {
        for easing in [
            Easing::Linear,
            Easing::EaseOutCubic,
            Easing::EaseInCubic,
            Easing::EaseInOutCubic,
        ] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn easing_clamps_input() {
        assert_eq!(Easing::Linear.apply(-0.5), 0.0);
        assert_eq!(Easing::Linear.apply(1.5), 1.0);
    }

    #[test]
    fn ease_out_leads_linear_and_ease_in_trails() {
        let linear = Easing::Linear.apply(0.5);
        assert!(Easing::EaseOutCubic.apply(0.5) > linear);
        assert!(Easing::EaseInCubic.apply(0.5) < linear);
    }

    #[test]
    fn timeline_completes_exactly_once() {
        let mut timeline = Timeline::new(100.0, 0.0, Duration::from_millis(100), Easing::Linear);
        assert!(!timeline.tick(Duration::from_millis(60)));
        assert!(timeline.tick(Duration::from_millis(60)));
        assert!(!timeline.tick(Duration::from_millis(60)));
        assert_eq!(timeline.value(), 0.0);
    }

    #[test]
    fn timeline_interpolates_between_endpoints() {
        let mut timeline = Timeline::new(200.0, 0.0, Duration::from_millis(100), Easing::Linear);
        timeline.tick(Duration::from_millis(50));
        assert!((timeline.value() - 100.0).abs() < 1.0);
    }

    #[test]
    fn zero_duration_timeline_completes_on_first_tick() {
        let mut timeline = Timeline::new(1.0, 0.0, Duration::ZERO, Easing::Linear);
        assert!(timeline.tick(Duration::ZERO));
        assert_eq!(timeline.value(), 0.0);
    }

    #[test]
    fn stopped_timeline_never_completes() {
        let mut timeline = Timeline::new(1.0, 0.0, Duration::from_millis(100), Easing::Linear);
        timeline.stop();
        assert!(!timeline.tick(Duration::from_secs(1)));
        assert!(!timeline.is_running());
    }

    #[test]
    fn spring_settles_at_target() {
        let mut spring = Spring::new(120.0, 0.0, 0.0);
        let mut settled_events = 0;
        for _ in 0..500 {
            if spring.tick(FRAME) {
                settled_events += 1;
            }
        }
        assert_eq!(settled_events, 1);
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 0.0);
    }

    #[test]
    fn spring_with_initial_velocity_still_settles() {
        // A downward release velocity carries the sheet further before the
        // spring pulls it back.
        let mut spring = Spring::new(40.0, 600.0, 0.0);
        let mut peak = spring.value();
        for _ in 0..500 {
            spring.tick(FRAME);
            peak = peak.max(spring.value());
        }
        assert!(peak > 40.0);
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 0.0);
    }

    #[test]
    fn settled_spring_ticks_are_noops() {
        let mut spring = Spring::new(1.0, 0.0, 0.0);
        while !spring.tick(FRAME) {}
        assert!(!spring.tick(FRAME));
        assert_eq!(spring.value(), 0.0);
    }
}
