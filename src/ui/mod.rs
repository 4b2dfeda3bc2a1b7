// SPDX-License-Identifier: MPL-2.0
//! User interface modules.
//!
//! Everything here follows the Elm shape: state flows down through view
//! context structs, messages bubble up and are mapped to events the app
//! shell consumes.
//!
//! The full screens are [`settings`], [`help`] and [`about`]. The editor
//! screen itself is assembled from components: [`navbar`], [`step_list`],
//! [`step_editor`], [`metadata_form`] and the [`progress_overlay`] shown
//! while the image worker runs.
//!
//! Shared infrastructure: [`design_tokens`] and [`theme`] for the visual
//! constants, [`theming`] for the light/dark/system mode, [`styles`] for
//! widget style functions, [`icons`] and [`action_icons`] for the icon
//! layers, [`notifications`] for toasts and [`widgets`] for the custom
//! spinner.

pub mod about;
pub mod action_icons;
pub mod design_tokens;
pub mod help;
pub mod icons;
pub mod metadata_form;
pub mod navbar;
pub mod notifications;
pub mod progress_overlay;
pub mod settings;
pub mod step_editor;
pub mod step_list;
pub mod styles;
pub mod theme;
pub mod theming;
pub mod widgets;
