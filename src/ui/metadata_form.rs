// SPDX-License-Identifier: MPL-2.0
//! Document metadata form.
//!
//! A compact form for the fields printed in the document header table: code,
//! title, date and author. Like the step name field, edits flow to the parent
//! as they are typed and Enter confirms the pending edit.

use crate::i18n::fluent::I18n;
use crate::project::DocumentMeta;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theme;
use iced::{
    widget::{text_input, Column, Text},
    Element, Length,
};

/// Which metadata field an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Code,
    Title,
    Date,
    Author,
}

/// Contextual data needed to render the metadata form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub meta: &'a DocumentMeta,
    /// Whether a background batch is running (fields are read-only).
    pub busy: bool,
}

/// Messages emitted by the metadata form.
#[derive(Debug, Clone)]
pub enum Message {
    Edited(Field, String),
    Submitted,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    /// A metadata field changed to the given value.
    Edited(Field, String),
    /// The user confirmed the pending text edit.
    Commit,
}

/// Process a metadata form message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Edited(field, value) => Event::Edited(field, value),
        Message::Submitted => Event::Commit,
    }
}

/// Render the metadata form.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let code = build_field(&ctx, "metadata-code", Field::Code, &ctx.meta.code);
    let title = build_field(&ctx, "metadata-title", Field::Title, &ctx.meta.title);
    let date = build_field(&ctx, "metadata-date", Field::Date, &ctx.meta.date);
    let author = build_field(&ctx, "metadata-author", Field::Author, &ctx.meta.author);

    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(code)
        .push(title)
        .push(date)
        .push(author)
        .into()
}

/// Build a labelled single-line input for one metadata field.
fn build_field<'a>(
    ctx: &ViewContext<'a>,
    label_key: &str,
    field: Field,
    value: &'a str,
) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr(label_key))
        .size(typography::CAPTION)
        .color(theme::muted_text_color());

    let mut input = text_input("", value)
        .padding(spacing::XS)
        .size(typography::BODY);
    if !ctx.busy {
        input = input
            .on_input(move |text| Message::Edited(field, text))
            .on_submit(Message::Submitted);
    }

    Column::new()
        .spacing(spacing::XXS)
        .push(label)
        .push(input)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn edits_carry_field_and_value() {
        let event = update(Message::Edited(Field::Title, "Assembly manual".into()));
        assert!(
            matches!(event, Event::Edited(Field::Title, value) if value == "Assembly manual")
        );
    }

    #[test]
    fn submit_emits_commit() {
        let event = update(Message::Submitted);
        assert!(matches!(event, Event::Commit));
    }

    #[test]
    fn view_renders_all_fields() {
        let i18n = I18n::default();
        let meta = DocumentMeta {
            code: "PRJ-001".into(),
            title: "Assembly manual".into(),
            date: "2026-08-06".into(),
            author: "QA".into(),
        };
        let _element = view(ViewContext {
            i18n: &i18n,
            meta: &meta,
            busy: false,
        });
    }

    #[test]
    fn view_renders_while_busy() {
        let i18n = I18n::default();
        let meta = DocumentMeta::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            meta: &meta,
            busy: true,
        });
    }
}
