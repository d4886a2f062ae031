// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The [`Stack`] owns the ordered list of live toasts and everything that
//! can end one: the countdown, a swipe, a dismiss button, and capacity
//! eviction. All of those converge on the idempotent [`Stack::dismiss`], so
//! the countdown racing a swipe can never double-remove a card. Countdowns
//! and animations are advanced by [`Stack::tick`] from the application's
//! animation clock; a card that is dropped takes its timer with it, so no
//! callback can fire after disposal.

use super::notification::{Kind, Notification, NotificationId};
use crate::config::{
    TOAST_DURATION_MS, TOAST_ENTER_MS, TOAST_EXIT_MS, TOAST_FADE_DISTANCE, TOAST_GAP,
    TOAST_MAX_VISIBLE, TOAST_SWIPE_UP_DISTANCE, TOAST_SWIPE_UP_VELOCITY, TOAST_SWIPE_X_DISTANCE,
    TOAST_SWIPE_X_VELOCITY, TOAST_TOP_INSET,
};
use crate::diagnostics::DiagnosticsHandle;
use crate::ui::animation::{Easing, Timeline};
use crate::ui::design_tokens::sizing;
use crate::ui::gesture::{ClaimGate, ClaimPolicy, DragTracker};
use iced::{Point, Vector};
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// A press began on a toast card.
    SwipePressed(NotificationId),
    /// The pointer moved over a pressed toast card.
    SwipeMoved(NotificationId, Point),
    /// The press on a toast card ended.
    SwipeReleased(NotificationId),
}

/// Animation phase of one rendered toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardPhase {
    Entering,
    Shown,
    Exiting,
}

/// A live toast with its runtime animation state.
#[derive(Debug)]
pub struct Card {
    notification: Notification,
    phase: CardPhase,
    enter: Timeline,
    remaining: Duration,
    exit: Option<Timeline>,
    pressed: bool,
    tracker: DragTracker,
    gate: ClaimGate,
    swipe_offset: Vector,
}

impl Card {
    fn new(notification: Notification) -> Self {
        Self {
            notification,
            phase: CardPhase::Entering,
            enter: Timeline::new(
                0.0,
                1.0,
                Duration::from_millis(TOAST_ENTER_MS),
                Easing::EaseOutCubic,
            ),
            remaining: Duration::from_millis(TOAST_DURATION_MS),
            exit: None,
            pressed: false,
            tracker: DragTracker::default(),
            gate: ClaimGate::new(ClaimPolicy::AnyDirection),
            swipe_offset: Vector::new(0.0, 0.0),
        }
    }

    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    /// Countdown progress from full (1.0) to empty (0.0), linear.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.remaining.as_secs_f32() / Duration::from_millis(TOAST_DURATION_MS).as_secs_f32()
    }

    /// Current swipe displacement in px.
    #[must_use]
    pub fn swipe_offset(&self) -> Vector {
        self.swipe_offset
    }

    /// Composite opacity: entrance/exit fade multiplied by the horizontal
    /// drag fade, which anticipates the dismissal threshold while the
    /// finger is still down.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        let animation = match self.phase {
            CardPhase::Entering => self.enter.value(),
            CardPhase::Shown => 1.0,
            CardPhase::Exiting => self.exit.as_ref().map_or(0.0, Timeline::value),
        };
        let drag_fade = 1.0 - (self.swipe_offset.x.abs() / TOAST_FADE_DISTANCE).clamp(0.0, 0.8);
        animation * drag_fade
    }

    /// Vertical entrance/exit slide, applied on top of the stacking offset.
    #[must_use]
    pub fn slide(&self) -> f32 {
        let progress = match self.phase {
            CardPhase::Entering => self.enter.value(),
            CardPhase::Shown => 1.0,
            CardPhase::Exiting => self.exit.as_ref().map_or(0.0, Timeline::value),
        };
        -(1.0 - progress) * sizing::TOAST_HEIGHT * 0.25
    }

    fn is_exiting(&self) -> bool {
        self.phase == CardPhase::Exiting
    }
}

/// Pure release decision for a toast swipe: a firm upward flick or a firm
/// sideways flick dismisses; anything else springs back.
#[must_use]
pub fn swipe_commits(dx: f32, dy: f32, vx: f32, vy: f32) -> bool {
    dy < -TOAST_SWIPE_UP_DISTANCE
        || vy < -TOAST_SWIPE_UP_VELOCITY
        || dx.abs() > TOAST_SWIPE_X_DISTANCE
        || vx.abs() > TOAST_SWIPE_X_VELOCITY
}

/// Manages the ordered toast list and all paths that remove from it.
#[derive(Debug, Default)]
pub struct Stack {
    cards: Vec<Card>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Stack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the diagnostics handle error toasts are mirrored into.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Enqueues a notification. Fire-and-forget.
    ///
    /// If the stack is at capacity the oldest surviving toast is evicted
    /// outright, skipping its exit animation, before the new one is
    /// appended at the bottom stacking slot.
    pub fn show(&mut self, notification: Notification) {
        if let (Some(handle), Kind::Error) = (&self.diagnostics, notification.kind()) {
            handle.log_error(notification.message_key());
        }

        if self.cards.len() >= TOAST_MAX_VISIBLE {
            if let Some(oldest) = self
                .cards
                .iter()
                .enumerate()
                .min_by_key(|(_, card)| card.notification.id())
                .map(|(index, _)| index)
            {
                self.cards.remove(oldest);
            }
        }
        self.cards.push(Card::new(notification));
    }

    /// Convenience wrapper for the add-to-cart success message.
    pub fn show_cart_added(&mut self, item_name: &str) {
        self.show(Notification::success("toast-cart-added").with_arg("name", item_name));
    }

    /// Starts the exit animation for a toast.
    ///
    /// Idempotent: unknown ids and already-exiting cards are silent no-ops,
    /// which is what lets the countdown and a swipe race safely.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        match self
            .cards
            .iter_mut()
            .find(|card| card.notification.id() == id)
        {
            Some(card) if !card.is_exiting() => {
                card.phase = CardPhase::Exiting;
                card.exit = Some(Timeline::new(
                    1.0,
                    0.0,
                    Duration::from_millis(TOAST_EXIT_MS),
                    Easing::EaseInCubic,
                ));
                // An exit animation abandons any in-progress swipe.
                card.pressed = false;
                card.tracker.end();
                card.gate.reset();
                true
            }
            _ => false,
        }
    }

    /// Advances entrances, countdowns, and exits; drops finished cards.
    pub fn tick(&mut self, delta: Duration) {
        let mut expired: Vec<NotificationId> = Vec::new();
        for card in &mut self.cards {
            match card.phase {
                CardPhase::Entering => {
                    if card.enter.tick(delta) {
                        card.phase = CardPhase::Shown;
                    }
                }
                CardPhase::Shown => {
                    card.remaining = card.remaining.saturating_sub(delta);
                    if card.remaining.is_zero() {
                        expired.push(card.notification.id());
                    }
                }
                CardPhase::Exiting => {
                    if let Some(exit) = &mut card.exit {
                        exit.tick(delta);
                    }
                }
            }
        }

        for id in expired {
            self.dismiss(id);
        }

        self.cards.retain(|card| match (&card.phase, &card.exit) {
            (CardPhase::Exiting, Some(exit)) => exit.is_running(),
            (CardPhase::Exiting, None) => false,
            _ => true,
        });
    }

    /// Vertical screen offset of the toast at `index`, so removing an
    /// earlier toast slides the rest up on the next layout.
    #[must_use]
    pub fn offset_for(index: usize) -> f32 {
        TOAST_TOP_INSET + index as f32 * (sizing::TOAST_HEIGHT + TOAST_GAP)
    }

    /// Visible cards in stacking order (oldest first).
    pub fn visible(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn visible_ids(&self) -> Vec<NotificationId> {
        self.cards.iter().map(|card| card.notification.id()).collect()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears all toasts and their timers (app teardown).
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::SwipePressed(id) => self.swipe_pressed(*id),
            Message::SwipeMoved(id, position) => self.swipe_moved(*id, *position, now),
            Message::SwipeReleased(id) => self.swipe_released(*id),
        }
    }

    fn card_mut(&mut self, id: NotificationId) -> Option<&mut Card> {
        self.cards
            .iter_mut()
            .find(|card| card.notification.id() == id)
    }

    fn swipe_pressed(&mut self, id: NotificationId) {
        if let Some(card) = self.card_mut(id) {
            if !card.is_exiting() {
                card.pressed = true;
                card.gate.reset();
            }
        }
    }

    fn swipe_moved(&mut self, id: NotificationId, position: Point, now: Instant) {
        if let Some(card) = self.card_mut(id) {
            if !card.pressed || card.is_exiting() {
                return;
            }
            if !card.tracker.is_active() {
                card.tracker.begin(position, now);
                return;
            }
            if let Some(delta) = card.tracker.sample(position, now) {
                if card.gate.observe(delta) {
                    card.swipe_offset = delta;
                }
            }
        }
    }

    fn swipe_released(&mut self, id: NotificationId) {
        let Some(card) = self.card_mut(id) else {
            return;
        };
        let claimed = card.tracker.is_active() && card.gate.is_claimed();
        let delta = card.tracker.delta();
        let velocity = card.tracker.velocity();
        card.pressed = false;
        card.tracker.end();
        card.gate.reset();
        card.swipe_offset = Vector::new(0.0, 0.0);

        if claimed && swipe_commits(delta.x, delta.y, velocity.x, velocity.y) {
            self.dismiss(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);
    const LONG: Duration = Duration::from_secs(10);

    fn drain_exit(stack: &mut Stack) {
        for _ in 0..60 {
            stack.tick(FRAME);
        }
    }

    #[test]
    fn new_stack_is_empty() {
        let stack = Stack::new();
        assert_eq!(stack.visible_count(), 0);
        assert!(stack.is_idle());
    }

    #[test]
    fn show_appends_at_bottom_slot() {
        let mut stack = Stack::new();
        let first = Notification::success("one");
        let second = Notification::info("two");
        let second_id = second.id();
        stack.show(first);
        stack.show(second);

        let ids = stack.visible_ids();
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[1], second_id);
    }

    #[test]
    fn capacity_overflow_evicts_smallest_id() {
        let mut stack = Stack::new();
        let mut ids = Vec::new();
        for i in 0..TOAST_MAX_VISIBLE {
            let n = Notification::success(format!("item-added-{i}"));
            ids.push(n.id());
            stack.show(n);
        }
        let error = Notification::error("load-failed");
        let error_id = error.id();
        stack.show(error);

        assert_eq!(stack.visible_count(), TOAST_MAX_VISIBLE);
        let visible = stack.visible_ids();
        assert!(!visible.contains(&ids[0]), "oldest toast must be evicted");
        assert_eq!(*visible.last().unwrap(), error_id);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut stack = Stack::new();
        let n = Notification::success("saved");
        let id = n.id();
        stack.show(n);

        assert!(stack.dismiss(id));
        assert!(!stack.dismiss(id));
        drain_exit(&mut stack);
        assert!(!stack.dismiss(id));
        assert_eq!(stack.visible_count(), 0);
    }

    #[test]
    fn dismiss_unknown_id_is_noop() {
        let mut stack = Stack::new();
        let orphan = Notification::info("never-shown");
        assert!(!stack.dismiss(orphan.id()));
    }

    #[test]
    fn countdown_expiry_removes_toast() {
        let mut stack = Stack::new();
        stack.show(Notification::success("done"));
        // Entrance, then the full countdown, then the exit animation.
        stack.tick(LONG);
        stack.tick(LONG);
        drain_exit(&mut stack);
        assert_eq!(stack.visible_count(), 0);
    }

    #[test]
    fn countdown_does_not_run_during_entrance() {
        let mut stack = Stack::new();
        stack.show(Notification::success("done"));
        stack.tick(FRAME);
        let card = stack.visible().next().unwrap();
        assert!((card.progress() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn progress_decreases_linearly_once_shown() {
        let mut stack = Stack::new();
        stack.show(Notification::success("done"));
        stack.tick(Duration::from_millis(TOAST_ENTER_MS));
        stack.tick(Duration::from_millis(TOAST_DURATION_MS / 2));
        let card = stack.visible().next().unwrap();
        assert!((card.progress() - 0.5).abs() < 0.01);
    }

    #[test]
    fn swipe_commit_thresholds_match_contract() {
        // Firm upward flick by distance, then by velocity.
        assert!(swipe_commits(0.0, -41.0, 0.0, 0.0));
        assert!(swipe_commits(0.0, -10.0, 0.0, -0.6));
        // Firm sideways flick by distance, then by velocity.
        assert!(swipe_commits(101.0, 0.0, 0.0, 0.0));
        assert!(swipe_commits(-101.0, 0.0, 0.0, 0.0));
        assert!(swipe_commits(20.0, 0.0, 0.6, 0.0));
        // A brief jostle does not qualify.
        assert!(!swipe_commits(30.0, -20.0, 0.2, -0.2));
        // Downward movement never qualifies.
        assert!(!swipe_commits(0.0, 200.0, 0.0, 2.0));
    }

    #[test]
    fn swipe_release_past_threshold_dismisses() {
        let base = Instant::now();
        let mut stack = Stack::new();
        let n = Notification::success("saved");
        let id = n.id();
        stack.show(n);
        stack.tick(LONG); // settle into Shown

        stack.handle_message(&Message::SwipePressed(id), base);
        stack.handle_message(&Message::SwipeMoved(id, Point::new(0.0, 0.0)), base);
        stack.handle_message(
            &Message::SwipeMoved(id, Point::new(120.0, 0.0)),
            base + Duration::from_millis(400),
        );
        stack.handle_message(&Message::SwipeReleased(id), base + Duration::from_millis(400));

        drain_exit(&mut stack);
        assert_eq!(stack.visible_count(), 0);
    }

    #[test]
    fn gentle_swipe_release_keeps_toast() {
        let base = Instant::now();
        let mut stack = Stack::new();
        let n = Notification::success("saved");
        let id = n.id();
        stack.show(n);
        stack.tick(LONG);

        stack.handle_message(&Message::SwipePressed(id), base);
        stack.handle_message(&Message::SwipeMoved(id, Point::new(0.0, 0.0)), base);
        stack.handle_message(
            &Message::SwipeMoved(id, Point::new(20.0, -10.0)),
            base + Duration::from_millis(400),
        );
        stack.handle_message(&Message::SwipeReleased(id), base + Duration::from_millis(400));

        assert_eq!(stack.visible_count(), 1);
        let card = stack.visible().next().unwrap();
        assert_eq!(card.swipe_offset().x, 0.0);
    }

    #[test]
    fn horizontal_drag_reduces_opacity_proportionally() {
        let base = Instant::now();
        let mut stack = Stack::new();
        let n = Notification::success("saved");
        let id = n.id();
        stack.show(n);
        stack.tick(LONG);

        stack.handle_message(&Message::SwipePressed(id), base);
        stack.handle_message(&Message::SwipeMoved(id, Point::new(0.0, 0.0)), base);
        stack.handle_message(
            &Message::SwipeMoved(id, Point::new(60.0, 0.0)),
            base + Duration::from_millis(200),
        );

        let card = stack.visible().next().unwrap();
        assert!(card.opacity() < 1.0);
        assert!(card.opacity() > 0.2);
    }

    #[test]
    fn countdown_firing_mid_swipe_wins_and_does_not_crash() {
        let base = Instant::now();
        let mut stack = Stack::new();
        let n = Notification::success("saved");
        let id = n.id();
        stack.show(n);
        stack.tick(LONG);

        stack.handle_message(&Message::SwipePressed(id), base);
        stack.handle_message(&Message::SwipeMoved(id, Point::new(0.0, 0.0)), base);
        // The countdown expires while the finger is still down.
        stack.tick(LONG);
        // The late release targets a card that is already exiting.
        stack.handle_message(&Message::SwipeReleased(id), base + Duration::from_secs(11));

        drain_exit(&mut stack);
        assert_eq!(stack.visible_count(), 0);
    }

    #[test]
    fn rapid_shows_then_error_scenario() {
        let mut stack = Stack::new();
        let mut item_ids = Vec::new();
        for _ in 0..3 {
            let n = Notification::success("toast-cart-added").with_arg("name", "Vitamin D3");
            item_ids.push(n.id());
            stack.show(n);
        }
        let error = Notification::error("load-failed");
        let error_id = error.id();
        stack.show(error);

        assert_eq!(stack.visible_count(), 3);
        let visible = stack.visible_ids();
        assert!(!visible.contains(&item_ids[0]));
        assert!(visible.contains(&item_ids[1]));
        assert!(visible.contains(&item_ids[2]));
        assert_eq!(*visible.last().unwrap(), error_id);
    }

    #[test]
    fn stacking_offsets_follow_index() {
        let expected_step = sizing::TOAST_HEIGHT + TOAST_GAP;
        assert_eq!(Stack::offset_for(0), TOAST_TOP_INSET);
        assert_eq!(Stack::offset_for(1), TOAST_TOP_INSET + expected_step);
        assert_eq!(Stack::offset_for(2), TOAST_TOP_INSET + 2.0 * expected_step);
    }

    #[test]
    fn error_toasts_are_mirrored_to_diagnostics() {
        let handle = DiagnosticsHandle::new();
        let mut stack = Stack::new();
        stack.set_diagnostics(handle.clone());
        stack.show(Notification::error("sync-failed"));
        stack.show(Notification::success("saved"));

        let events = handle.snapshot();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].message, "sync-failed");
    }

    #[test]
    fn clear_drops_all_cards_and_timers() {
        let mut stack = Stack::new();
        for _ in 0..3 {
            stack.show(Notification::info("hello"));
        }
        stack.clear();
        assert!(stack.is_idle());
        // Ticking after teardown touches nothing.
        stack.tick(LONG);
        assert_eq!(stack.visible_count(), 0);
    }
}
