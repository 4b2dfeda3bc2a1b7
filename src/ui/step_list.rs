// SPDX-License-Identifier: MPL-2.0
//! Step list sidebar for the editor screen.
//!
//! The left panel shows the ordered steps with a thumbnail and a numbered
//! name, plus a toolbar with the step actions (add, delete, move up/down,
//! replace image). Selection is owned by the project, so this module holds
//! no state of its own: `update` maps messages straight to events.

use crate::i18n::fluent::I18n;
use crate::project::Step;
use crate::ui::action_icons;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::image::{Handle, Image};
use iced::{
    alignment::Vertical,
    widget::{button, scrollable, tooltip, Column, Container, Row, Text},
    Background, Border, ContentFit, Element, Length, Theme,
};

/// Contextual data needed to render the step list.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub steps: &'a [Step],
    pub selected: Option<usize>,
    /// Whether a background batch is running (step actions are disabled).
    pub busy: bool,
}

/// Messages emitted by the step list.
#[derive(Debug, Clone)]
pub enum Message {
    Select(usize),
    Add,
    Delete,
    MoveUp,
    MoveDown,
    ReplaceImage,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Select(usize),
    Add,
    Delete,
    MoveUp,
    MoveDown,
    ReplaceImage,
}

/// Process a step list message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Select(index) => Event::Select(index),
        Message::Add => Event::Add,
        Message::Delete => Event::Delete,
        Message::MoveUp => Event::MoveUp,
        Message::MoveDown => Event::MoveDown,
        Message::ReplaceImage => Event::ReplaceImage,
    }
}

/// Render the step list sidebar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let toolbar = build_toolbar(&ctx);

    let list: Element<'a, Message> = if ctx.steps.is_empty() {
        build_empty_hint(&ctx)
    } else {
        build_rows(&ctx)
    };

    let content = Column::new()
        .width(Length::Fill)
        .push(toolbar)
        .push(list);

    Container::new(content)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(theme::step_list_panel_style)
        .into()
}

/// Build the step action toolbar.
fn build_toolbar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let has_selection = ctx.selected.is_some();
    let can_move_up = ctx.selected.is_some_and(|index| index > 0);
    let can_move_down = ctx
        .selected
        .is_some_and(|index| index + 1 < ctx.steps.len());

    let add_button = toolbar_button(
        action_icons::steps::toolbar::add(),
        ctx.i18n.tr("step-add"),
        (!ctx.busy).then_some(Message::Add),
    );
    let delete_button = styled_toolbar_button(
        action_icons::steps::toolbar::delete(),
        ctx.i18n.tr("step-delete"),
        (has_selection && !ctx.busy).then_some(Message::Delete),
        styles::button::toolbar_destructive,
    );
    let up_button = toolbar_button(
        action_icons::steps::toolbar::move_up(),
        ctx.i18n.tr("step-move-up"),
        (can_move_up && !ctx.busy).then_some(Message::MoveUp),
    );
    let down_button = toolbar_button(
        action_icons::steps::toolbar::move_down(),
        ctx.i18n.tr("step-move-down"),
        (can_move_down && !ctx.busy).then_some(Message::MoveDown),
    );
    let replace_button = toolbar_button(
        action_icons::steps::toolbar::replace_image(),
        ctx.i18n.tr("step-replace-image"),
        (has_selection && !ctx.busy).then_some(Message::ReplaceImage),
    );

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(add_button)
        .push(delete_button)
        .push(up_button)
        .push(down_button)
        .push(replace_button);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::toolbar)
        .into()
}

/// Build a single icon button for the dark step toolbar.
fn toolbar_button<'a>(
    icon: Image<Handle>,
    tip: String,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    styled_toolbar_button(icon, tip, on_press, styles::button::toolbar)
}

fn styled_toolbar_button<'a>(
    icon: Image<Handle>,
    tip: String,
    on_press: Option<Message>,
    style: fn(&Theme, button::Status) -> button::Style,
) -> Element<'a, Message> {
    let mut btn = button(icons::sized(icon, sizing::ICON_MD))
        .padding(spacing::XS)
        .style(style);
    if let Some(message) = on_press {
        btn = btn.on_press(message);
    }
    styles::tooltip::styled(btn, tip, tooltip::Position::Bottom).into()
}

/// Build the scrollable list of step rows.
fn build_rows<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut list = Column::new().spacing(spacing::XXS).padding(spacing::XS);

    for (index, step) in ctx.steps.iter().enumerate() {
        let is_selected = ctx.selected == Some(index);
        list = list.push(build_row(index, step, is_selected));
    }

    scrollable(list)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Build one step row with thumbnail and numbered name.
fn build_row<'a>(index: usize, step: &'a Step, is_selected: bool) -> Element<'a, Message> {
    let thumbnail = Image::new(step.image.handle())
        .width(Length::Fixed(sizing::STEP_THUMBNAIL))
        .height(Length::Fixed(sizing::STEP_THUMBNAIL))
        .content_fit(ContentFit::Contain);

    let label = Text::new(format!("{}. {}", index + 1, step.name)).size(typography::BODY);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(thumbnail)
        .push(label);

    button(row)
        .on_press(Message::Select(index))
        .padding(spacing::XS)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::STEP_ROW_HEIGHT))
        .style(step_row_style(is_selected))
        .into()
}

/// Hint shown when the project has no steps yet.
fn build_empty_hint<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let hint = Text::new(ctx.i18n.tr("step-list-empty"))
        .size(typography::BODY_SM)
        .color(theme::muted_text_color());

    Container::new(hint)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .padding(spacing::MD)
        .into()
}

/// Style function for a step row, highlighting selection and hover.
fn step_row_style(is_selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |iced_theme, status| {
        let palette = iced_theme.extended_palette();
        let is_dark = palette.is_dark;

        let background = if is_selected {
            Some(Background::Color(theme::selected_step_background(is_dark)))
        } else if matches!(status, button::Status::Hovered) {
            Some(Background::Color(theme::hovered_step_background(is_dark)))
        } else {
            None
        };

        button::Style {
            background,
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;
    use crate::media::{EncodedImage, PreparedImage};
    use std::io::Cursor;

    fn test_step(stem: &str) -> Step {
        let mut bytes = Vec::new();
        image_rs::RgbaImage::from_pixel(2, 2, image_rs::Rgba([10, 20, 30, 255]))
            .write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
            .expect("encode png");
        let prepared = PreparedImage {
            file_name: format!("{stem}.png"),
            stem: stem.to_string(),
            image: EncodedImage::from_bytes(bytes).expect("wrap"),
        };
        Step::from_prepared(prepared, "desc")
    }

    #[test]
    fn messages_map_to_events() {
        assert!(matches!(update(Message::Select(3)), Event::Select(3)));
        assert!(matches!(update(Message::Add), Event::Add));
        assert!(matches!(update(Message::Delete), Event::Delete));
        assert!(matches!(update(Message::MoveUp), Event::MoveUp));
        assert!(matches!(update(Message::MoveDown), Event::MoveDown));
        assert!(matches!(update(Message::ReplaceImage), Event::ReplaceImage));
    }

    #[test]
    fn view_renders_without_steps() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            steps: &[],
            selected: None,
            busy: false,
        });
    }

    #[test]
    fn view_renders_with_steps_and_selection() {
        let i18n = I18n::default();
        let steps = vec![test_step("first"), test_step("second")];
        let _element = view(ViewContext {
            i18n: &i18n,
            steps: &steps,
            selected: Some(1),
            busy: false,
        });
    }

    #[test]
    fn view_renders_while_busy() {
        let i18n = I18n::default();
        let steps = vec![test_step("only")];
        let _element = view(ViewContext {
            i18n: &i18n,
            steps: &steps,
            selected: Some(0),
            busy: true,
        });
    }
}
