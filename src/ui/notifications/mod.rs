// SPDX-License-Identifier: MPL-2.0
//! Toast notifications layered over the editor.
//!
//! Feedback that must not interrupt editing (save confirmations, skipped
//! images, export failures) appears as toasts in the bottom-right corner.
//! Success and info toasts expire on their own, warnings linger a little
//! longer, and errors stay until dismissed. At most three toasts are
//! visible; the rest queue behind them.
//!
//! ```ignore
//! manager.push(Notification::success("notification-export-success"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
