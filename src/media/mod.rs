// SPDX-License-Identifier: MPL-2.0
//! Image handling: loading, budget-fitting and background batch preparation.

pub mod image;
pub mod resize;
pub mod worker;

// Re-export commonly used types
pub use image::{load_encoded, EncodedImage, SUPPORTED_EXTENSIONS};
pub use resize::{prepare_from_path, PreparedImage, SIZE_BUDGET_BYTES};
pub use worker::{prepare_batch, BatchEvent, BatchOutcome};
