// SPDX-License-Identifier: MPL-2.0
//! Sheet lifecycle state machine.
//!
//! Phases move strictly forward through
//! `Closed → Entering → Open → Closing → Closed`, with two exceptions out
//! of `Dragging`: a cancelled drag springs back to `Open`, a committed
//! dismiss moves to `Closing`. A close is committed when the release
//! distance OR velocity clears its threshold, so a slow long drag and a
//! short flick both dismiss while a brief jostle does not.
//!
//! The host observes exactly one [`Event::Closed`] per close cycle;
//! [`Controller::abort`] (unmount) cancels in-flight animation and
//! suppresses the event entirely.

use crate::config::{
    SHEET_DEFAULT_HEIGHT, SHEET_DISMISS_DISTANCE, SHEET_DISMISS_VELOCITY, SHEET_ENTER_MS,
    SHEET_EXIT_MS,
};
use crate::ui::animation::{Easing, Spring, Timeline};
use crate::ui::gesture::{ClaimGate, ClaimPolicy, DragTracker};
use iced::Point;
use std::time::{Duration, Instant};

/// Discrete lifecycle state of a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    Entering,
    Open,
    Dragging,
    Closing,
}

/// Events surfaced to the host from [`Controller::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The exit animation finished. Emitted at most once per close cycle.
    Closed,
}

/// Presentation options every host passes when mounting a sheet.
#[derive(Debug, Clone)]
pub struct Props {
    pub height: f32,
    pub show_drag_handle: bool,
    pub dismiss_on_backdrop: bool,
    pub keyboard_avoiding: bool,
    pub reduce_motion: bool,
}

impl Default for Props {
    fn default() -> Self {
        Self {
            height: SHEET_DEFAULT_HEIGHT,
            show_drag_handle: true,
            dismiss_on_backdrop: true,
            keyboard_avoiding: false,
            reduce_motion: false,
        }
    }
}

impl Props {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn height(mut self, height: f32) -> Self {
        self.height = height.max(1.0);
        self
    }

    #[must_use]
    pub fn show_drag_handle(mut self, show: bool) -> Self {
        self.show_drag_handle = show;
        self
    }

    #[must_use]
    pub fn dismiss_on_backdrop(mut self, dismiss: bool) -> Self {
        self.dismiss_on_backdrop = dismiss;
        self
    }

    #[must_use]
    pub fn keyboard_avoiding(mut self, avoid: bool) -> Self {
        self.keyboard_avoiding = avoid;
        self
    }

    #[must_use]
    pub fn reduce_motion(mut self, reduce: bool) -> Self {
        self.reduce_motion = reduce;
        self
    }
}

/// One sheet instance's lifecycle controller.
#[derive(Debug)]
pub struct Controller {
    props: Props,
    phase: Phase,
    /// Vertical translation in px; 0 = fully open, `props.height` = off-screen.
    offset: f32,
    /// Offset captured when the current drag claimed the gesture.
    drag_origin: f32,
    entry: Option<Timeline>,
    exit: Option<Timeline>,
    spring: Option<Spring>,
    close_notified: bool,
    pressed: bool,
    tracker: DragTracker,
    gate: ClaimGate,
}

impl Controller {
    #[must_use]
    pub fn new(props: Props) -> Self {
        let offset = props.height;
        Self {
            props,
            phase: Phase::Closed,
            offset,
            drag_origin: 0.0,
            entry: None,
            exit: None,
            spring: None,
            close_notified: false,
            pressed: false,
            tracker: DragTracker::default(),
            gate: ClaimGate::new(ClaimPolicy::VerticalDown),
        }
    }

    #[must_use]
    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn set_reduce_motion(&mut self, reduce: bool) {
        self.props.reduce_motion = reduce;
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase != Phase::Closed
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.entry.as_ref().is_some_and(Timeline::is_running)
            || self.exit.as_ref().is_some_and(Timeline::is_running)
            || self.spring.is_some()
    }

    /// Backdrop dim as a fraction of its full strength: fades out as the
    /// sheet is dragged away.
    #[must_use]
    pub fn backdrop_fraction(&self) -> f32 {
        if self.phase == Phase::Closed {
            return 0.0;
        }
        (1.0 - self.offset / self.props.height).clamp(0.0, 1.0)
    }

    fn duration(&self, ms: u64) -> Duration {
        if self.props.reduce_motion {
            Duration::ZERO
        } else {
            Duration::from_millis(ms)
        }
    }

    /// Begins the entrance animation from off-screen, or reverses an
    /// in-flight exit from its current offset. No-op while already
    /// entering, open, or dragging.
    pub fn open(&mut self) {
        let from = match self.phase {
            Phase::Closed => self.props.height,
            Phase::Closing => self.offset,
            Phase::Entering | Phase::Open | Phase::Dragging => return,
        };
        self.phase = Phase::Entering;
        self.offset = from;
        self.close_notified = false;
        self.exit = None;
        self.spring = None;
        self.entry = Some(Timeline::new(
            from,
            0.0,
            self.duration(SHEET_ENTER_MS),
            Easing::EaseOutCubic,
        ));
    }

    /// Transitions to Closing from any live phase.
    ///
    /// Idempotent: a redundant dismiss signal (backdrop tap racing a drag
    /// commit, close button racing a timer) is a silent no-op.
    pub fn request_close(&mut self) {
        match self.phase {
            Phase::Entering | Phase::Open | Phase::Dragging => {
                self.phase = Phase::Closing;
                self.entry = None;
                self.spring = None;
                self.pressed = false;
                self.tracker.end();
                self.gate.reset();
                self.exit = Some(Timeline::new(
                    self.offset,
                    self.props.height,
                    self.duration(SHEET_EXIT_MS),
                    Easing::EaseInCubic,
                ));
            }
            Phase::Closing | Phase::Closed => {}
        }
    }

    /// Tracks a claimed downward drag with 1:1 offset, no animation curve.
    ///
    /// `dy` is relative to the gesture start; the offset captured when the
    /// drag claimed (`drag_origin`) anchors it, so a drag that begins
    /// mid-spring-back tracks from where the sheet actually is. Valid only
    /// while Open or already Dragging; upward deltas clamp to the open
    /// position rather than overshooting.
    pub fn gesture_move(&mut self, dy: f32) {
        match self.phase {
            Phase::Open => {
                if dy <= 0.0 {
                    return;
                }
                self.drag_origin = self.offset;
                self.spring = None;
                self.phase = Phase::Dragging;
                self.offset = (self.drag_origin + dy).min(self.props.height);
            }
            Phase::Dragging => {
                self.offset = (self.drag_origin + dy).clamp(0.0, self.props.height);
            }
            _ => {}
        }
    }

    /// Resolves a drag release. Valid only while Dragging.
    ///
    /// `velocity` is the downward release velocity in px/ms.
    pub fn gesture_release(&mut self, dy: f32, velocity: f32) {
        if self.phase != Phase::Dragging {
            return;
        }
        if dy > SHEET_DISMISS_DISTANCE || velocity > SHEET_DISMISS_VELOCITY {
            self.request_close();
        } else {
            self.phase = Phase::Open;
            // px/ms → px/s for the spring integrator.
            self.spring = Some(Spring::new(self.offset, velocity * 1000.0, 0.0));
        }
    }

    /// Advances animations by `delta` and reports at most one close event.
    pub fn tick(&mut self, delta: Duration) -> Option<Event> {
        match self.phase {
            Phase::Entering => {
                if let Some(entry) = &mut self.entry {
                    let finished = entry.tick(delta);
                    self.offset = entry.value();
                    if finished {
                        self.entry = None;
                        self.offset = 0.0;
                        self.phase = Phase::Open;
                    }
                }
            }
            Phase::Open => {
                if let Some(spring) = &mut self.spring {
                    let settled = spring.tick(delta);
                    self.offset = spring.value();
                    if settled {
                        self.spring = None;
                        self.offset = 0.0;
                    }
                }
            }
            Phase::Closing => {
                if let Some(exit) = &mut self.exit {
                    let finished = exit.tick(delta);
                    self.offset = exit.value();
                    if finished {
                        self.exit = None;
                        self.offset = self.props.height;
                        self.phase = Phase::Closed;
                        if !self.close_notified {
                            self.close_notified = true;
                            return Some(Event::Closed);
                        }
                    }
                }
            }
            Phase::Dragging | Phase::Closed => {}
        }
        None
    }

    /// Cancels everything on unmount. No close event is ever emitted after
    /// this.
    pub fn abort(&mut self) {
        self.entry = None;
        self.exit = None;
        self.spring = None;
        self.pressed = false;
        self.tracker.end();
        self.gate.reset();
        self.phase = Phase::Closed;
        self.offset = self.props.height;
        self.close_notified = true;
    }

    // --- Pointer plumbing -------------------------------------------------
    //
    // The view feeds raw pointer interactions here; the claim gate decides
    // whether the sheet owns the touch before any offset tracking starts,
    // so taps on interactive content inside the sheet pass through. The
    // widget layer reports presses without a position, so tracking starts
    // on the first movement sample after a press.

    pub fn pointer_pressed(&mut self) {
        if matches!(self.phase, Phase::Open | Phase::Dragging) {
            self.pressed = true;
            self.gate.reset();
        }
    }

    pub fn pointer_moved(&mut self, position: Point, at: Instant) {
        if !self.pressed {
            return;
        }
        if !self.tracker.is_active() {
            self.tracker.begin(position, at);
            return;
        }
        if let Some(delta) = self.tracker.sample(position, at) {
            if self.gate.observe(delta) {
                self.gesture_move(delta.y);
            }
        }
    }

    pub fn pointer_released(&mut self) {
        if self.tracker.is_active() && self.gate.is_claimed() {
            let delta = self.tracker.delta();
            let velocity = self.tracker.velocity();
            self.gesture_release(delta.y, velocity.y);
        }
        self.pressed = false;
        self.tracker.end();
        self.gate.reset();
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(Props::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);
    const LONG: Duration = Duration::from_secs(2);

    fn open_sheet() -> Controller {
        let mut controller = Controller::new(Props::default());
        controller.open();
        controller.tick(LONG);
        assert_eq!(controller.phase(), Phase::Open);
        controller
    }

    #[test]
    fn open_animates_from_off_screen_to_zero() {
        let mut controller = Controller::new(Props::new().height(400.0));
        controller.open();
        assert_eq!(controller.phase(), Phase::Entering);
        assert_eq!(controller.offset(), 400.0);

        controller.tick(FRAME);
        assert!(controller.offset() < 400.0);

        controller.tick(LONG);
        assert_eq!(controller.phase(), Phase::Open);
        assert_eq!(controller.offset(), 0.0);
    }

    #[test]
    fn slow_long_drag_commits_dismissal_by_distance() {
        let mut controller = open_sheet();
        controller.gesture_move(200.0);
        assert_eq!(controller.phase(), Phase::Dragging);
        controller.gesture_release(200.0, 0.1);
        assert_eq!(controller.phase(), Phase::Closing);

        let event = controller.tick(LONG);
        assert_eq!(event, Some(Event::Closed));
        assert_eq!(controller.phase(), Phase::Closed);
    }

    #[test]
    fn fast_flick_commits_dismissal_by_velocity() {
        let mut controller = open_sheet();
        controller.gesture_move(30.0);
        controller.gesture_release(30.0, 1.2);
        assert_eq!(controller.phase(), Phase::Closing);
    }

    #[test]
    fn gentle_drag_springs_back_to_open() {
        let mut controller = open_sheet();
        controller.gesture_move(40.0);
        controller.gesture_release(40.0, 0.2);
        assert_eq!(controller.phase(), Phase::Open);

        for _ in 0..500 {
            controller.tick(FRAME);
        }
        assert_eq!(controller.offset(), 0.0);
        assert!(!controller.is_animating());
    }

    #[test]
    fn upward_drag_is_ignored() {
        let mut controller = open_sheet();
        controller.gesture_move(-30.0);
        assert_eq!(controller.phase(), Phase::Open);
        assert_eq!(controller.offset(), 0.0);
    }

    #[test]
    fn drag_tracks_offset_one_to_one() {
        let mut controller = open_sheet();
        controller.gesture_move(72.5);
        assert_eq!(controller.offset(), 72.5);
        controller.gesture_move(10.0);
        assert_eq!(controller.offset(), 10.0);
    }

    #[test]
    fn closed_event_fires_exactly_once() {
        let mut controller = open_sheet();
        controller.request_close();
        let mut events = 0;
        for _ in 0..300 {
            if controller.tick(FRAME).is_some() {
                events += 1;
            }
        }
        assert_eq!(events, 1);
    }

    #[test]
    fn request_close_while_closing_is_noop() {
        let mut controller = open_sheet();
        controller.request_close();
        controller.tick(FRAME);
        let offset_before = controller.offset();
        controller.request_close();
        assert_eq!(controller.phase(), Phase::Closing);
        assert_eq!(controller.offset(), offset_before);
    }

    #[test]
    fn open_then_immediate_close_runs_exit_to_completion() {
        let mut controller = Controller::new(Props::default());
        controller.open();
        controller.request_close();
        assert_eq!(controller.phase(), Phase::Closing);
        assert_eq!(controller.tick(LONG), Some(Event::Closed));
    }

    #[test]
    fn abort_suppresses_close_event() {
        let mut controller = open_sheet();
        controller.request_close();
        controller.abort();
        assert_eq!(controller.phase(), Phase::Closed);
        for _ in 0..300 {
            assert_eq!(controller.tick(FRAME), None);
        }
    }

    #[test]
    fn reopen_after_close_fires_event_again() {
        let mut controller = open_sheet();
        controller.request_close();
        assert_eq!(controller.tick(LONG), Some(Event::Closed));

        controller.open();
        controller.tick(LONG);
        controller.request_close();
        assert_eq!(controller.tick(LONG), Some(Event::Closed));
    }

    #[test]
    fn reopen_during_closing_reverses_exit() {
        let mut controller = open_sheet();
        controller.request_close();
        controller.tick(FRAME);
        let mid_offset = controller.offset();
        assert!(mid_offset > 0.0);

        controller.open();
        assert_eq!(controller.phase(), Phase::Entering);
        // The entrance resumes from where the exit left off, and the
        // abandoned exit never reports a close.
        assert_eq!(controller.offset(), mid_offset);
        let mut closed_events = 0;
        for _ in 0..300 {
            if controller.tick(FRAME).is_some() {
                closed_events += 1;
            }
        }
        assert_eq!(closed_events, 0);
        assert_eq!(controller.phase(), Phase::Open);
    }

    #[test]
    fn backdrop_fades_as_sheet_is_dragged_away() {
        let mut controller = open_sheet();
        assert_eq!(controller.backdrop_fraction(), 1.0);
        controller.gesture_move(controller.props().height / 2.0);
        let halfway = controller.backdrop_fraction();
        assert!(halfway > 0.4 && halfway < 0.6, "fraction = {halfway}");
    }

    #[test]
    fn gesture_move_before_open_is_ignored() {
        let mut controller = Controller::new(Props::default());
        controller.gesture_move(100.0);
        assert_eq!(controller.phase(), Phase::Closed);
        controller.open();
        controller.gesture_move(100.0);
        assert_eq!(controller.phase(), Phase::Entering);
    }

    #[test]
    fn release_without_drag_is_ignored() {
        let mut controller = open_sheet();
        controller.gesture_release(500.0, 5.0);
        assert_eq!(controller.phase(), Phase::Open);
    }

    #[test]
    fn reduce_motion_completes_transitions_on_first_tick() {
        let mut controller = Controller::new(Props::new().reduce_motion(true));
        controller.open();
        controller.tick(Duration::ZERO);
        assert_eq!(controller.phase(), Phase::Open);
        controller.request_close();
        assert_eq!(controller.tick(Duration::ZERO), Some(Event::Closed));
    }

    #[test]
    fn pointer_flow_claims_only_past_noise_threshold() {
        let base = Instant::now();
        let mut controller = open_sheet();

        controller.pointer_pressed();
        controller.pointer_moved(Point::new(100.0, 300.0), base);
        // 3 px of downward travel: under the noise gate, nothing claimed.
        controller.pointer_moved(Point::new(100.0, 303.0), base + FRAME);
        assert_eq!(controller.phase(), Phase::Open);

        // Past the gate: the sheet claims and tracks. The slow sample keeps
        // the release velocity well under the dismissal threshold.
        controller.pointer_moved(Point::new(100.0, 330.0), base + Duration::from_millis(200));
        assert_eq!(controller.phase(), Phase::Dragging);
        assert_eq!(controller.offset(), 30.0);

        controller.pointer_released();
        // 30 px at low velocity: spring back.
        assert_eq!(controller.phase(), Phase::Open);
    }
}
