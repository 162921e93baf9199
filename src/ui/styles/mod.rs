// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the demo control panel.

pub mod button;
pub mod container;
