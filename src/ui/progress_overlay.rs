// SPDX-License-Identifier: MPL-2.0
//! Modal progress overlay.
//!
//! Shown on top of the editor while a blocking operation runs: preparing an
//! image batch or exporting the document. The overlay darkens the screen and
//! swallows all input, so the project cannot change mid-operation.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::theme;
use crate::ui::widgets::AnimatedSpinner;
use iced::{
    widget::{container, opaque, progress_bar, Column, Container, Text},
    Background, Element, Length,
};

const CARD_WIDTH: f32 = 360.0;

/// What the overlay is reporting on.
#[derive(Debug, Clone)]
pub enum Activity {
    /// Images being resized and encoded, with batch progress.
    PreparingImages {
        current: usize,
        total: usize,
        file_name: String,
    },
    /// Document being assembled and written.
    Exporting,
}

/// Contextual data needed to render the overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub activity: &'a Activity,
    /// Spinner rotation in radians, driven by the app tick.
    pub spinner_rotation: f32,
}

/// Render the progress overlay layer.
///
/// The result is meant to be stacked on top of the editor view; it fills the
/// whole window and captures every event while visible.
pub fn view<'a, Message: 'a + 'static>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let card = build_card(&ctx);

    let backdrop = Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(theme::progress_backdrop_color())),
            ..Default::default()
        });

    opaque(backdrop)
}

/// Build the centered card with spinner, label and progress details.
fn build_card<'a, Message: 'a + 'static>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let spinner = AnimatedSpinner::new(palette::PRIMARY_500, ctx.spinner_rotation)
        .into_element::<Message>();

    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(iced::alignment::Horizontal::Center)
        .push(spinner);

    match ctx.activity {
        Activity::PreparingImages {
            current,
            total,
            file_name,
        } => {
            content = content
                .push(Text::new(ctx.i18n.tr("progress-preparing-images")).size(typography::BODY_LG))
                .push(
                    #[allow(clippy::cast_precision_loss)]
                    progress_bar(0.0..=*total as f32, *current as f32).girth(spacing::SM),
                )
                .push(
                    Text::new(ctx.i18n.tr_args(
                        "progress-counter",
                        &[
                            ("current", current.to_string()),
                            ("total", total.to_string()),
                        ],
                    ))
                    .size(typography::BODY),
                )
                .push(
                    Text::new(file_name.clone())
                        .size(typography::BODY_SM)
                        .color(theme::muted_text_color()),
                );
        }
        Activity::Exporting => {
            content = content
                .push(Text::new(ctx.i18n.tr("progress-exporting")).size(typography::BODY_LG));
        }
    }

    Container::new(content)
        .width(Length::Fixed(CARD_WIDTH))
        .padding(spacing::LG)
        .style(theme::progress_card_style)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn overlay_renders_batch_progress() {
        let i18n = I18n::default();
        let activity = Activity::PreparingImages {
            current: 2,
            total: 5,
            file_name: "bracket.png".into(),
        };
        let _element: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            activity: &activity,
            spinner_rotation: 0.5,
        });
    }

    #[test]
    fn overlay_renders_export_progress() {
        let i18n = I18n::default();
        let activity = Activity::Exporting;
        let _element: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            activity: &activity,
            spinner_rotation: 0.0,
        });
    }
}
