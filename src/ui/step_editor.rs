// SPDX-License-Identifier: MPL-2.0
//! Editor pane for the selected step.
//!
//! Shows a large preview of the step image plus the name and description
//! fields. Text edits flow to the parent as they are typed so the project
//! stays current; the parent decides when an edit becomes an undo snapshot.
//!
//! The description uses a `text_editor` widget, whose buffer lives in
//! [`State`]. The buffer must be resynced with [`State::sync`] whenever the
//! selection changes or the project is replaced wholesale (open, undo, redo).

use crate::i18n::fluent::I18n;
use crate::project::Step;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theme;
use iced::widget::image::Image;
use iced::{
    widget::{text_editor, text_input, Column, Container, Text},
    ContentFit, Element, Length,
};

/// Widget state owned by the editor pane.
pub struct State {
    description: text_editor::Content,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            description: text_editor::Content::new(),
        }
    }

    /// Replace the description buffer with the given step's text.
    ///
    /// Call this whenever the selected step changes from outside the editor,
    /// otherwise the buffer keeps showing the previous step's description.
    pub fn sync(&mut self, step: Option<&Step>) {
        let text = step.map_or("", |step| step.description.as_str());
        self.description = text_editor::Content::with_text(text);
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// Contextual data needed to render the editor pane.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub step: Option<&'a Step>,
    /// Whether a background batch is running (fields are read-only).
    pub busy: bool,
}

/// Messages emitted by the editor pane.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    NameSubmitted,
    DescriptionAction(text_editor::Action),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The step name changed to the given value.
    NameEdited(String),
    /// The step description changed to the given value.
    DescriptionEdited(String),
    /// The user confirmed the pending text edit (Enter in the name field).
    Commit,
}

/// Process an editor message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::NameChanged(name) => Event::NameEdited(name),
        Message::NameSubmitted => Event::Commit,
        Message::DescriptionAction(action) => {
            let was_edit = action.is_edit();
            state.description.perform(action);
            if was_edit {
                // The editor buffer always reports a trailing newline.
                let text = state.description.text();
                let text = text.strip_suffix('\n').unwrap_or(&text).to_string();
                Event::DescriptionEdited(text)
            } else {
                Event::None
            }
        }
    }
}

/// Render the editor pane for the selected step.
pub fn view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let Some(step) = ctx.step else {
        return build_empty_hint(&ctx);
    };

    let preview = build_preview(step);
    let name_field = build_name_field(&ctx, step);
    let description_field = build_description_field(&ctx, state);

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(preview)
        .push(name_field)
        .push(description_field)
        .into()
}

/// Build the large image preview above the text fields.
fn build_preview<'a>(step: &'a Step) -> Element<'a, Message> {
    let image = Image::new(step.image.handle())
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(image)
        .width(Length::Fill)
        .height(Length::FillPortion(3))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// Build the step name input with its label.
fn build_name_field<'a>(ctx: &ViewContext<'a>, step: &'a Step) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr("editor-step-name"))
        .size(typography::CAPTION)
        .color(theme::muted_text_color());

    let mut input = text_input("", &step.name)
        .padding(spacing::XS)
        .size(typography::BODY);
    if !ctx.busy {
        input = input
            .on_input(Message::NameChanged)
            .on_submit(Message::NameSubmitted);
    }

    Column::new()
        .spacing(spacing::XXS)
        .push(label)
        .push(input)
        .into()
}

/// Build the multi-line description editor with its label.
fn build_description_field<'a>(ctx: &ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr("editor-step-description"))
        .size(typography::CAPTION)
        .color(theme::muted_text_color());

    let mut editor = text_editor(&state.description)
        .padding(spacing::XS)
        .size(typography::BODY)
        .height(Length::Fill);
    if !ctx.busy {
        editor = editor.on_action(Message::DescriptionAction);
    }

    Column::new()
        .spacing(spacing::XXS)
        .height(Length::FillPortion(2))
        .push(label)
        .push(editor)
        .into()
}

/// Hint shown when no step is selected.
fn build_empty_hint<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let hint = Text::new(ctx.i18n.tr("editor-no-selection"))
        .size(typography::BODY)
        .color(theme::muted_text_color());

    Container::new(hint)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;
    use crate::media::{EncodedImage, PreparedImage};
    use iced::widget::text_editor::{Action, Edit, Motion};
    use std::io::Cursor;

    fn test_step(description: &str) -> Step {
        let mut bytes = Vec::new();
        image_rs::RgbaImage::from_pixel(2, 2, image_rs::Rgba([7, 8, 9, 255]))
            .write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
            .expect("encode png");
        let prepared = PreparedImage {
            file_name: "step.png".into(),
            stem: "step".into(),
            image: EncodedImage::from_bytes(bytes).expect("wrap"),
        };
        Step::from_prepared(prepared, description)
    }

    #[test]
    fn sync_fills_description_buffer() {
        let step = test_step("first line\nsecond line");
        let mut state = State::new();

        state.sync(Some(&step));
        assert_eq!(state.description.text(), "first line\nsecond line\n");

        state.sync(None);
        assert_eq!(state.description.text(), "\n");
    }

    #[test]
    fn name_change_emits_edit_event() {
        let mut state = State::new();
        let event = update(&mut state, Message::NameChanged("Fit bracket".into()));
        assert!(matches!(event, Event::NameEdited(name) if name == "Fit bracket"));
    }

    #[test]
    fn name_submit_emits_commit() {
        let mut state = State::new();
        let event = update(&mut state, Message::NameSubmitted);
        assert!(matches!(event, Event::Commit));
    }

    #[test]
    fn description_edit_emits_updated_text() {
        let mut state = State::new();

        let event = update(
            &mut state,
            Message::DescriptionAction(Action::Edit(Edit::Insert('a'))),
        );
        assert!(matches!(event, Event::DescriptionEdited(text) if text == "a"));
    }

    #[test]
    fn cursor_motion_is_not_an_edit() {
        let mut state = State::new();
        state.sync(Some(&test_step("text")));

        let event = update(&mut state, Message::DescriptionAction(Action::Move(Motion::Left)));
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn view_renders_with_and_without_step() {
        let i18n = I18n::default();
        let state = State::new();

        let _empty = view(
            ViewContext {
                i18n: &i18n,
                step: None,
                busy: false,
            },
            &state,
        );

        let step = test_step("desc");
        let _with_step = view(
            ViewContext {
                i18n: &i18n,
                step: Some(&step),
                busy: true,
            },
            &state,
        );
    }
}
