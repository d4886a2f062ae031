// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module is the single source of truth for the tuning constants of
//! the overlay system. Constants are organized by category.
//!
//! # Categories
//!
//! - **Sheet**: bottom sheet animation timing and dismissal thresholds
//! - **Toast**: notification stack capacity, timing, and swipe thresholds
//! - **Modal**: registry grace window
//! - **Spring**: damped spring tuning for cancelled drags
//! - **Tick**: animation clock
//! - **Diagnostics**: event buffer bounds

// ==========================================================================
// Sheet Defaults
// ==========================================================================

/// Duration of the sheet entrance animation (ease-out).
pub const SHEET_ENTER_MS: u64 = 300;

/// Duration of the sheet exit animation (ease-in, deliberately shorter).
pub const SHEET_EXIT_MS: u64 = 220;

/// Drag distance past which a release commits dismissal, in logical px.
pub const SHEET_DISMISS_DISTANCE: f32 = 150.0;

/// Release velocity past which a release commits dismissal, in px/ms.
///
/// Distance OR velocity qualifies: a slow long drag and a short flick are
/// both intentional, a brief jostle is neither.
pub const SHEET_DISMISS_VELOCITY: f32 = 0.8;

/// Cumulative movement below which a touch is never claimed, in px.
pub const GESTURE_NOISE_THRESHOLD: f32 = 5.0;

/// Default sheet height when the host does not override it.
pub const SHEET_DEFAULT_HEIGHT: f32 = 420.0;

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Maximum number of toasts visible at once; older ones are evicted.
pub const TOAST_MAX_VISIBLE: usize = 3;

/// Countdown before a toast auto-dismisses.
pub const TOAST_DURATION_MS: u64 = 3500;

/// Duration of the toast entrance animation.
pub const TOAST_ENTER_MS: u64 = 300;

/// Duration of the toast exit animation.
pub const TOAST_EXIT_MS: u64 = 220;

/// Distance from the top of the window to the first toast, in px.
pub const TOAST_TOP_INSET: f32 = 16.0;

/// Vertical gap between stacked toasts, in px.
pub const TOAST_GAP: f32 = 8.0;

/// Upward drag distance that commits a swipe dismissal, in px.
pub const TOAST_SWIPE_UP_DISTANCE: f32 = 40.0;

/// Upward release velocity that commits a swipe dismissal, in px/ms.
pub const TOAST_SWIPE_UP_VELOCITY: f32 = 0.5;

/// Horizontal drag distance that commits a swipe dismissal, in px.
pub const TOAST_SWIPE_X_DISTANCE: f32 = 100.0;

/// Horizontal release velocity that commits a swipe dismissal, in px/ms.
pub const TOAST_SWIPE_X_VELOCITY: f32 = 0.5;

/// Horizontal distance over which a dragged toast fades to its minimum
/// opacity, in px.
pub const TOAST_FADE_DISTANCE: f32 = 125.0;

// ==========================================================================
// Modal Defaults
// ==========================================================================

/// How long a closed modal's payload stays readable so its exit animation
/// can keep rendering it.
pub const MODAL_PAYLOAD_GRACE_MS: u64 = 500;

// ==========================================================================
// Spring Defaults
// ==========================================================================

/// Spring stiffness in 1/s².
pub const SPRING_STIFFNESS: f32 = 170.0;

/// Spring damping in 1/s.
pub const SPRING_DAMPING: f32 = 26.0;

/// Displacement below which a spring may settle, in px.
pub const SPRING_REST_DISTANCE: f32 = 0.5;

/// Velocity below which a spring may settle, in px/s.
pub const SPRING_REST_VELOCITY: f32 = 20.0;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Interval of the animation tick subscription.
pub const TICK_INTERVAL_MS: u64 = 16;

/// Cap on a single tick delta, so a stalled subscription resuming does not
/// teleport animations.
pub const MAX_TICK_DELTA_MS: u64 = 50;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Capacity of the in-memory diagnostic event buffer.
pub const DIAGNOSTIC_BUFFER_CAPACITY: usize = 256;
