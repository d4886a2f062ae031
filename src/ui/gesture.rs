// SPDX-License-Identifier: MPL-2.0
//! Pointer gesture capture for overlay surfaces.
//!
//! [`DragTracker`] turns raw pointer samples into a cumulative drag vector
//! and a velocity estimate. [`ClaimGate`] decides whether the enclosing
//! surface owns an in-progress touch: a gesture is only claimed once its
//! cumulative movement clears a noise threshold in the direction the policy
//! allows, so taps aimed at buttons inside a sheet are never stolen.

use crate::config::GESTURE_NOISE_THRESHOLD;
use iced::{Point, Vector};
use std::time::Instant;

/// Exponential smoothing weight applied to each new velocity sample.
const VELOCITY_SMOOTHING: f32 = 0.6;

/// Accumulates pointer samples for one drag and estimates velocity.
///
/// Velocity is expressed in logical pixels per millisecond, the unit the
/// dismissal thresholds are specified in.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    origin: Option<(Point, Instant)>,
    last: Option<(Point, Instant)>,
    velocity: Vector,
}

impl DragTracker {
    /// Starts tracking a new drag at `position`.
    pub fn begin(&mut self, position: Point, at: Instant) {
        self.origin = Some((position, at));
        self.last = Some((position, at));
        self.velocity = Vector::new(0.0, 0.0);
    }

    /// Records a movement sample and returns the cumulative delta from the
    /// drag origin. Returns `None` if no drag is active.
    pub fn sample(&mut self, position: Point, at: Instant) -> Option<Vector> {
        let (origin, _) = self.origin?;
        if let Some((last_position, last_at)) = self.last {
            let dt_ms = at.duration_since(last_at).as_secs_f32() * 1000.0;
            if dt_ms > 0.0 {
                let instantaneous = Vector::new(
                    (position.x - last_position.x) / dt_ms,
                    (position.y - last_position.y) / dt_ms,
                );
                self.velocity = Vector::new(
                    instantaneous.x * VELOCITY_SMOOTHING
                        + self.velocity.x * (1.0 - VELOCITY_SMOOTHING),
                    instantaneous.y * VELOCITY_SMOOTHING
                        + self.velocity.y * (1.0 - VELOCITY_SMOOTHING),
                );
            }
        }
        self.last = Some((position, at));
        Some(Vector::new(position.x - origin.x, position.y - origin.y))
    }

    /// Cumulative delta from the drag origin, or zero if inactive.
    #[must_use]
    pub fn delta(&self) -> Vector {
        match (self.origin, self.last) {
            (Some((origin, _)), Some((last, _))) => {
                Vector::new(last.x - origin.x, last.y - origin.y)
            }
            _ => Vector::new(0.0, 0.0),
        }
    }

    /// Smoothed velocity estimate in px/ms.
    #[must_use]
    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    /// Whether a drag is currently being tracked.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// Ends the drag and clears all samples.
    pub fn end(&mut self) {
        self.origin = None;
        self.last = None;
        self.velocity = Vector::new(0.0, 0.0);
    }
}

/// Direction rule a gesture must satisfy before it can be claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimPolicy {
    /// Only downward, predominantly vertical movement claims (sheets).
    VerticalDown,
    /// Movement in any direction claims once past the threshold (toasts).
    AnyDirection,
}

/// Explicit claim state machine for one touch sequence.
///
/// `observe` feeds cumulative deltas; once claimed the gate stays claimed
/// until [`ClaimGate::reset`], so a drag that wanders back under the
/// threshold is not released mid-gesture.
#[derive(Debug, Clone)]
pub struct ClaimGate {
    policy: ClaimPolicy,
    threshold: f32,
    claimed: bool,
}

impl ClaimGate {
    /// Creates a gate with the default noise threshold.
    #[must_use]
    pub fn new(policy: ClaimPolicy) -> Self {
        Self::with_threshold(policy, GESTURE_NOISE_THRESHOLD)
    }

    /// Creates a gate with an explicit threshold, for tests.
    #[must_use]
    pub fn with_threshold(policy: ClaimPolicy, threshold: f32) -> Self {
        Self {
            policy,
            threshold,
            claimed: false,
        }
    }

    /// Pure claim predicate over a cumulative delta.
    #[must_use]
    pub fn can_claim(&self, dx: f32, dy: f32) -> bool {
        match self.policy {
            ClaimPolicy::VerticalDown => dy > self.threshold && dy.abs() >= dx.abs(),
            ClaimPolicy::AnyDirection => (dx * dx + dy * dy).sqrt() > self.threshold,
        }
    }

    /// Feeds a cumulative delta; returns whether the gesture is claimed
    /// after this movement.
    pub fn observe(&mut self, delta: Vector) -> bool {
        if !self.claimed && self.can_claim(delta.x, delta.y) {
            self.claimed = true;
        }
        self.claimed
    }

    /// Whether the current touch is claimed.
    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    /// Releases the claim for the next touch sequence.
    pub fn reset(&mut self) {
        self.claimed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn tracker_reports_cumulative_delta() {
        let base = Instant::now();
        let mut tracker = DragTracker::default();
        tracker.begin(Point::new(10.0, 20.0), base);
        tracker.sample(Point::new(14.0, 50.0), at(base, 16));
        let delta = tracker.delta();
        assert_eq!(delta.x, 4.0);
        assert_eq!(delta.y, 30.0);
    }

    #[test]
    fn tracker_estimates_velocity_in_px_per_ms() {
        let base = Instant::now();
        let mut tracker = DragTracker::default();
        tracker.begin(Point::new(0.0, 0.0), base);
        // 32 px over 16 ms = 2 px/ms, smoothed from zero.
        tracker.sample(Point::new(0.0, 32.0), at(base, 16));
        let vy = tracker.velocity().y;
        assert!(vy > 1.0 && vy <= 2.0, "vy = {vy}");
    }

    #[test]
    fn tracker_zero_dt_sample_keeps_previous_velocity() {
        let base = Instant::now();
        let mut tracker = DragTracker::default();
        tracker.begin(Point::new(0.0, 0.0), base);
        tracker.sample(Point::new(0.0, 16.0), at(base, 16));
        let before = tracker.velocity().y;
        tracker.sample(Point::new(0.0, 40.0), at(base, 16));
        assert_eq!(tracker.velocity().y, before);
    }

    #[test]
    fn tracker_end_clears_state() {
        let base = Instant::now();
        let mut tracker = DragTracker::default();
        tracker.begin(Point::new(0.0, 0.0), base);
        tracker.end();
        assert!(!tracker.is_active());
        assert_eq!(tracker.delta().y, 0.0);
    }

    #[test]
    fn vertical_gate_ignores_noise_and_upward_movement() {
        let gate = ClaimGate::new(ClaimPolicy::VerticalDown);
        assert!(!gate.can_claim(0.0, 4.0)); // under threshold
        assert!(!gate.can_claim(0.0, -40.0)); // upward
        assert!(gate.can_claim(0.0, 6.0));
    }

    #[test]
    fn vertical_gate_rejects_predominantly_horizontal_movement() {
        let gate = ClaimGate::new(ClaimPolicy::VerticalDown);
        assert!(!gate.can_claim(30.0, 8.0));
        assert!(gate.can_claim(6.0, 8.0));
    }

    #[test]
    fn any_direction_gate_claims_past_threshold() {
        let gate = ClaimGate::new(ClaimPolicy::AnyDirection);
        assert!(!gate.can_claim(3.0, 3.0));
        assert!(gate.can_claim(-6.0, 0.0));
        assert!(gate.can_claim(0.0, -6.0));
    }

    #[test]
    fn claim_is_sticky_until_reset() {
        let mut gate = ClaimGate::new(ClaimPolicy::VerticalDown);
        assert!(gate.observe(Vector::new(0.0, 12.0)));
        // Wandering back under the threshold keeps the claim.
        assert!(gate.observe(Vector::new(0.0, 1.0)));
        gate.reset();
        assert!(!gate.is_claimed());
    }
}
