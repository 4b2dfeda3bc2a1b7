// SPDX-License-Identifier: MPL-2.0
//! Raw icon primitives.
//!
//! Every icon is a PNG rasterized by the build script from the SVG sources
//! in `assets/icons/svg/` and embedded with `include_bytes!`. PNG avoids the
//! SVG rendering differences we saw between platforms. Each icon exists in
//! two variants: the dark (black) default for light surfaces, and a white
//! copy under [`light`] for the dark toolbar strips.
//!
//! Names describe the drawing, not the action (`trash`, not `delete_step`).
//! The semantic mapping lives in [`action_icons`](super::action_icons);
//! components should normally go through that module.

use iced::widget::image::{Handle, Image};
use iced::Length;
use std::sync::OnceLock;

/// Declares a `fn $name() -> Image<Handle>` backed by a lazily created,
/// process-wide cached handle. `$variant` selects the build output folder.
macro_rules! icon {
    ($name:ident, $variant:literal, $file:literal, $doc:literal) => {
        #[doc = $doc]
        #[must_use]
        pub fn $name() -> Image<Handle> {
            static CACHED: OnceLock<Handle> = OnceLock::new();
            let handle = CACHED.get_or_init(|| {
                Handle::from_bytes(
                    include_bytes!(concat!(env!("OUT_DIR"), "/icons/", $variant, "/", $file))
                        .as_slice(),
                )
            });
            Image::new(handle.clone())
        }
    };
}

// Step list
icon!(plus, "dark", "plus.png", "Plus sign.");
icon!(trash, "dark", "trash.png", "Garbage bin.");
icon!(arrow_up, "dark", "arrow_up.png", "Straight arrow pointing up.");
icon!(
    arrow_down,
    "dark",
    "arrow_down.png",
    "Straight arrow pointing down."
);
icon!(
    image,
    "dark",
    "image.png",
    "Picture frame with a mountain silhouette."
);

// Project files
icon!(file, "dark", "file.png", "Blank document outline.");
icon!(folder_open, "dark", "folder_open.png", "Open folder.");
icon!(floppy, "dark", "floppy.png", "Classic save diskette.");
icon!(
    file_arrow_down,
    "dark",
    "file_arrow_down.png",
    "Document with a downward arrow."
);
icon!(box_icon, "dark", "box.png", "Closed archive box with lid.");

// Undo and redo
icon!(
    arrow_hook_left,
    "dark",
    "arrow_hook_left.png",
    "Curved arrow hooking back to the left."
);
icon!(
    arrow_hook_right,
    "dark",
    "arrow_hook_right.png",
    "Curved arrow hooking back to the right."
);

// Status and feedback
icon!(
    warning,
    "dark",
    "warning.png",
    "Triangle with an exclamation mark."
);
icon!(checkmark, "dark", "checkmark.png", "Check mark.");
icon!(cross, "dark", "cross.png", "X mark.");

// Navigation and sections
icon!(help, "dark", "help.png", "Question mark in a circle.");
icon!(info, "dark", "info.png", "Letter i in a circle.");
icon!(globe, "dark", "globe.png", "World globe.");
icon!(cog, "dark", "cog.png", "Gear.");

/// White variants for the dark toolbar and navbar strips.
pub mod light {
    use super::{Handle, Image, OnceLock};

    icon!(plus, "light", "plus.png", "Plus sign, white.");
    icon!(trash, "light", "trash.png", "Garbage bin, white.");
    icon!(arrow_up, "light", "arrow_up.png", "Arrow up, white.");
    icon!(arrow_down, "light", "arrow_down.png", "Arrow down, white.");
    icon!(image, "light", "image.png", "Picture frame, white.");
    icon!(folder_open, "light", "folder_open.png", "Open folder, white.");
    icon!(floppy, "light", "floppy.png", "Save diskette, white.");
    icon!(
        file_arrow_down,
        "light",
        "file_arrow_down.png",
        "Document with arrow, white."
    );
    icon!(
        arrow_hook_left,
        "light",
        "arrow_hook_left.png",
        "Undo hook, white."
    );
    icon!(
        arrow_hook_right,
        "light",
        "arrow_hook_right.png",
        "Redo hook, white."
    );
    icon!(hamburger, "light", "hamburger.png", "Three horizontal lines, white.");
}

/// Applies a fixed square size to an icon.
pub fn sized(icon: Image<Handle>, size: f32) -> Image<Handle> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
