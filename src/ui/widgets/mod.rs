// SPDX-License-Identifier: MPL-2.0
//! Custom widgets that the stock iced set does not cover.

pub mod animated_spinner;

pub use animated_spinner::AnimatedSpinner;
