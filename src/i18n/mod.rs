// SPDX-License-Identifier: MPL-2.0
//! Localization via Fluent.
//!
//! Bundles are loaded from the embedded `.ftl` files, the startup locale
//! comes from the CLI flag, the saved config or the system locale, and the
//! user can switch languages at runtime from the settings screen.

pub mod fluent;
