// SPDX-License-Identifier: MPL-2.0
//! Settings screen.
//!
//! Lets the user adjust interface preferences (language, theme), the defaults
//! applied to new documents (layout, image width, font, document language)
//! and editor behavior (autosave). Every change is propagated to the parent
//! as an event; the parent owns the [`Config`] and persists it.

use crate::app::config::{
    Config, DEFAULT_AUTOSAVE_ENABLED, FONT_FAMILY_PRESETS, IMAGE_WIDTH_STEP_CM,
    MAX_FONT_SIZE_PT, MIN_FONT_SIZE_PT,
};
use crate::i18n::fluent::I18n;
use crate::project::settings::{DocumentLanguage, Layout, MAX_IMAGE_WIDTH_CM, MIN_IMAGE_WIDTH_CM};
use crate::ui::action_icons;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theme;
use crate::ui::theming::ThemeMode;
use iced::widget::image::{Handle, Image};
use iced::{
    alignment::Vertical,
    font::Weight,
    widget::{button, pick_list, scrollable, slider, text, toggler, Column, Container, Row, Text},
    Element, Font, Length, Theme,
};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    Back,
    UiLanguageSelected(LanguageIdentifier),
    ThemeSelected(ThemeMode),
    LayoutSelected(Layout),
    ImageWidthChanged(f32),
    FontFamilySelected(String),
    FontSizeChanged(u16),
    DocLanguageSelected(DocumentLanguage),
    AutosaveToggled(bool),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Back,
    UiLanguageSelected(LanguageIdentifier),
    ThemeSelected(ThemeMode),
    LayoutSelected(Layout),
    ImageWidthChanged(f32),
    FontFamilySelected(String),
    FontSizeChanged(u16),
    DocLanguageSelected(DocumentLanguage),
    AutosaveToggled(bool),
}

/// Process a settings message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Back => Event::Back,
        Message::UiLanguageSelected(locale) => Event::UiLanguageSelected(locale),
        Message::ThemeSelected(mode) => Event::ThemeSelected(mode),
        Message::LayoutSelected(layout) => Event::LayoutSelected(layout),
        Message::ImageWidthChanged(width) => Event::ImageWidthChanged(width),
        Message::FontFamilySelected(family) => Event::FontFamilySelected(family),
        Message::FontSizeChanged(size) => Event::FontSizeChanged(size),
        Message::DocLanguageSelected(language) => Event::DocLanguageSelected(language),
        Message::AutosaveToggled(enabled) => Event::AutosaveToggled(enabled),
    }
}

/// Render the settings screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("settings-back-button"))).size(typography::BODY),
    )
    .on_press(Message::Back);

    let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

    let sections = Column::new()
        .spacing(spacing::LG)
        .push(build_general_section(&ctx))
        .push(build_document_section(&ctx))
        .push(build_editor_section(&ctx));

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .max_width(640)
        .push(back_button)
        .push(title)
        .push(sections);

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .center_x(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}

/// Interface preferences: UI language and theme mode.
fn build_general_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let language_group = toggle_group(
        &ctx.i18n.available_locales,
        ctx.i18n.current_locale(),
        |locale| locale_display_name(locale),
        Message::UiLanguageSelected,
    );

    let theme_group = toggle_group(
        &ThemeMode::ALL,
        &ctx.config.general.theme_mode,
        |mode| ctx.i18n.tr(mode.i18n_key()),
        Message::ThemeSelected,
    );

    build_section(
        action_icons::sections::general(),
        ctx.i18n.tr("settings-section-general"),
        Column::new()
            .spacing(spacing::SM)
            .push(labeled(ctx, "settings-ui-language", language_group))
            .push(labeled(ctx, "settings-theme", theme_group))
            .into(),
    )
}

/// Defaults applied to newly created documents.
fn build_document_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let current = ctx.config.document.document_settings();

    let layout_group = toggle_group(
        &Layout::ALL,
        &current.layout,
        |layout| ctx.i18n.tr(layout.i18n_key()),
        Message::LayoutSelected,
    );

    let width_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            slider(
                MIN_IMAGE_WIDTH_CM..=MAX_IMAGE_WIDTH_CM,
                current.image_width_cm,
                Message::ImageWidthChanged,
            )
            .step(IMAGE_WIDTH_STEP_CM)
            .width(Length::Fill),
        )
        .push(Text::new(format!("{:.1} cm", current.image_width_cm)).size(typography::BODY));

    let selected_family = FONT_FAMILY_PRESETS
        .iter()
        .copied()
        .find(|family| *family == current.font_family);
    let family_list = pick_list(FONT_FAMILY_PRESETS, selected_family, |family| {
        Message::FontFamilySelected(family.to_string())
    })
    .padding(spacing::XS)
    .text_size(typography::BODY);

    let size_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            slider(
                MIN_FONT_SIZE_PT..=MAX_FONT_SIZE_PT,
                current.font_size,
                Message::FontSizeChanged,
            )
            .width(Length::Fill),
        )
        .push(Text::new(format!("{} pt", current.font_size)).size(typography::BODY));

    let doc_language_group = toggle_group(
        &DocumentLanguage::ALL,
        &current.language,
        |language| ctx.i18n.tr(language.i18n_key()),
        Message::DocLanguageSelected,
    );

    build_section(
        action_icons::sections::document(),
        ctx.i18n.tr("settings-section-document"),
        Column::new()
            .spacing(spacing::SM)
            .push(labeled(ctx, "settings-layout", layout_group))
            .push(labeled(ctx, "settings-image-width", width_row.into()))
            .push(labeled(ctx, "settings-font-family", family_list.into()))
            .push(labeled(ctx, "settings-font-size", size_row.into()))
            .push(labeled(ctx, "settings-doc-language", doc_language_group))
            .into(),
    )
}

/// Editor behavior: autosave.
fn build_editor_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let autosave_enabled = ctx
        .config
        .editor
        .autosave_enabled
        .unwrap_or(DEFAULT_AUTOSAVE_ENABLED);

    let autosave_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("settings-autosave")).size(typography::BODY))
        .push(
            toggler(autosave_enabled)
                .on_toggle(Message::AutosaveToggled)
                .size(sizing::ICON_MD),
        );

    build_section(
        action_icons::sections::editor(),
        ctx.i18n.tr("settings-section-editor"),
        autosave_row.into(),
    )
}

/// Build one settings section: icon header plus its controls on a panel.
fn build_section<'a>(
    icon: Image<Handle>,
    title: String,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(icons::sized(icon, sizing::ICON_MD))
        .push(Text::new(title).size(typography::TITLE_SM).font(Font {
            weight: Weight::Bold,
            ..Font::default()
        }));

    let body = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(content);

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

/// A caption label above a control.
fn labeled<'a>(
    ctx: &ViewContext<'a>,
    label_key: &str,
    control: Element<'a, Message>,
) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr(label_key))
        .size(typography::CAPTION)
        .color(theme::muted_text_color());

    Column::new()
        .spacing(spacing::XXS)
        .push(label)
        .push(control)
        .into()
}

/// A row of mutually exclusive buttons, one per option.
fn toggle_group<'a, T: Clone + PartialEq>(
    options: &[T],
    selected: &T,
    label: impl Fn(&T) -> String,
    message: impl Fn(T) -> Message,
) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);

    for option in options {
        let style: fn(&Theme, button::Status) -> button::Style = if option == selected {
            styles::button::selected
        } else {
            styles::button::unselected
        };

        row = row.push(
            button(Text::new(label(option)).size(typography::BODY))
                .padding([spacing::XS, spacing::SM])
                .style(style)
                .on_press(message(option.clone())),
        );
    }

    row.into()
}

/// Native display name for a UI locale, so users can always find their own
/// language in the list.
fn locale_display_name(locale: &LanguageIdentifier) -> String {
    match locale.to_string().as_str() {
        "en-US" => "English".to_string(),
        "pl" => "Polski".to_string(),
        other => other.to_string(),
    }
}
