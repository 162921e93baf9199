// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default delay before an auto-closing toast is removed (in seconds).
pub const DEFAULT_CLOSE_IN_SECS: f32 = 3.0;

/// Minimum configurable auto-close delay (in seconds).
pub const MIN_CLOSE_IN_SECS: f32 = 0.5;

/// Maximum configurable auto-close delay (in seconds).
pub const MAX_CLOSE_IN_SECS: f32 = 60.0;

/// Whether new toasts close automatically unless told otherwise.
pub const DEFAULT_AUTO_CLOSE: bool = true;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Default interval between expiry/animation ticks (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Minimum tick interval (one frame at 60 Hz).
pub const MIN_TICK_INTERVAL_MS: u64 = 16;

/// Maximum tick interval (in milliseconds).
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_CLOSE_IN_SECS > 0.0);
    assert!(MAX_CLOSE_IN_SECS >= MIN_CLOSE_IN_SECS);
    assert!(DEFAULT_CLOSE_IN_SECS >= MIN_CLOSE_IN_SECS);
    assert!(DEFAULT_CLOSE_IN_SECS <= MAX_CLOSE_IN_SECS);

    assert!(MIN_TICK_INTERVAL_MS > 0);
    assert!(MAX_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);
};
