// SPDX-License-Identifier: MPL-2.0
//! Action-to-icon mapping.
//!
//! Components ask for icons by the action they trigger (`steps::delete`)
//! rather than by drawing (`trash`), so swapping a glyph is a one-line
//! change here instead of a hunt through every call site. Modules are
//! grouped by domain; each `toolbar` submodule serves the white variants
//! for the dark strips.

use super::icons;

/// Declares a semantic wrapper around one visual icon constructor.
macro_rules! action {
    ($name:ident, $visual:path, $doc:literal) => {
        #[doc = $doc]
        #[must_use]
        pub fn $name() -> Image<Handle> {
            $visual()
        }
    };
}

/// Step list actions.
pub mod steps {
    use crate::ui::icons;
    use iced::widget::image::{Handle, Image};

    action!(add, icons::plus, "Add a new step.");
    action!(delete, icons::trash, "Delete the selected step.");
    action!(move_up, icons::arrow_up, "Move the selected step up.");
    action!(move_down, icons::arrow_down, "Move the selected step down.");
    action!(replace_image, icons::image, "Swap the selected step's image.");

    /// White variants for the step toolbar.
    pub mod toolbar {
        use crate::ui::icons;
        use iced::widget::image::{Handle, Image};

        action!(add, icons::light::plus, "Add a new step.");
        action!(delete, icons::light::trash, "Delete the selected step.");
        action!(move_up, icons::light::arrow_up, "Move the selected step up.");
        action!(
            move_down,
            icons::light::arrow_down,
            "Move the selected step down."
        );
        action!(
            replace_image,
            icons::light::image,
            "Swap the selected step's image."
        );
    }
}

/// Project file actions.
pub mod project {
    use crate::ui::icons;
    use iced::widget::image::{Handle, Image};

    action!(new, icons::file, "Start a fresh project.");
    action!(open, icons::folder_open, "Open a project file.");
    action!(save, icons::floppy, "Save the current project.");
    action!(export, icons::file_arrow_down, "Export as a document.");
    action!(backup, icons::box_icon, "Export a backup archive.");

    /// White variants for the navbar strip.
    pub mod toolbar {
        use crate::ui::icons;
        use iced::widget::image::{Handle, Image};

        action!(open, icons::light::folder_open, "Open a project file.");
        action!(save, icons::light::floppy, "Save the current project.");
        action!(export, icons::light::file_arrow_down, "Export as a document.");
    }
}

/// Undo and redo.
pub mod edit {
    use crate::ui::icons;
    use iced::widget::image::{Handle, Image};

    action!(undo, icons::arrow_hook_left, "Undo the last change.");
    action!(redo, icons::arrow_hook_right, "Redo the last undone change.");

    /// White variants for the navbar strip.
    pub mod toolbar {
        use crate::ui::icons;
        use iced::widget::image::{Handle, Image};

        action!(undo, icons::light::arrow_hook_left, "Undo the last change.");
        action!(
            redo,
            icons::light::arrow_hook_right,
            "Redo the last undone change."
        );
    }
}

/// App navigation.
pub mod navigation {
    use crate::ui::icons;
    use iced::widget::image::{Handle, Image};

    action!(menu, icons::light::hamburger, "Open the navbar dropdown.");
    action!(settings, icons::cog, "Open the settings screen.");
    action!(help, icons::help, "Open the help screen.");
    action!(about, icons::info, "Open the about screen.");
    action!(close, icons::cross, "Close or dismiss.");
}

/// Toast severities.
pub mod notification {
    use crate::ui::icons;
    use iced::widget::image::{Handle, Image};

    action!(success, icons::checkmark, "Success toast.");
    action!(warning, icons::warning, "Warning toast.");
    action!(error, icons::warning, "Error toast.");
    action!(info, icons::info, "Info toast.");
}

/// Section headers on the settings and help screens.
pub mod sections {
    use crate::ui::icons;
    use iced::widget::image::{Handle, Image};

    action!(general, icons::globe, "General settings section.");
    action!(document, icons::file, "Document defaults section.");
    action!(editor, icons::floppy, "Editor behavior section.");
    action!(step_editing, icons::image, "Step editing help section.");
}

/// Re-export of [`icons::sized`] for convenience.
pub use icons::sized;
