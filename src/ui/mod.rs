// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! # Modules
//!
//! - [`notifications`] - Toast manager, handle and overlay widgets
//! - [`widgets`] - Custom Iced widgets (loading spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and toast colors
//! - [`icons`] - SVG icon loading and rendering

pub mod design_tokens;
pub mod icons;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod widgets;
