// SPDX-License-Identifier: MPL-2.0
//! `stepdoc` assembles ordered, illustrated work instructions and exports
//! them as formatted Word documents.
//!
//! The crate is organized around an Iced application shell ([`app`]), the
//! project model with undo history ([`project`]), image loading and the
//! background preparation worker ([`media`]), the .docx writer ([`export`])
//! and the Fluent-based UI ([`ui`], [`i18n`]).

#![doc(html_root_url = "https://docs.rs/stepdoc/0.3.0")]

pub mod app;
pub mod error;
pub mod export;
pub mod i18n;
pub mod icon;
pub mod media;
pub mod project;
pub mod ui;
