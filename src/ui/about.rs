// SPDX-License-Identifier: MPL-2.0
//! About screen: version, license notice, dependency credits and links.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::icons;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, rule, scrollable, text, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const REPOSITORY_URL: &str = "https://codeberg.org/Bawycle/stepdoc";
const ISSUES_URL: &str = "https://codeberg.org/Bawycle/stepdoc/issues";
const DEPENDENCIES_URL: &str = "https://codeberg.org/Bawycle/stepdoc/src/branch/master/Cargo.toml";

/// Fluent keys of the highlighted dependency credits, in display order.
const CREDIT_KEYS: [&str; 4] = [
    "about-credits-iced",
    "about-credits-docx",
    "about-credits-image",
    "about-credits-fluent",
];

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    BackToEditor,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    BackToEditor,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BackToEditor => Event::BackToEditor,
    }
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("about-back-button"))).size(typography::BODY),
    )
    .on_press(Message::BackToEditor);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(back_button)
        .push(Text::new(ctx.i18n.tr("about-title")).size(typography::TITLE_LG))
        .push(app_section(&ctx))
        .push(license_section(&ctx))
        .push(credits_section(&ctx))
        .push(links_section(&ctx));

    scrollable(content).into()
}

fn app_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let heading = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("about-app-name")).size(typography::TITLE_MD))
        .push(Text::new(format!("v{APP_VERSION}")).size(typography::BODY));

    let content = Column::new()
        .spacing(spacing::XS)
        .push(heading)
        .push(Text::new(ctx.i18n.tr("about-app-description")).size(typography::BODY));

    section(icons::info(), ctx.i18n.tr("about-section-app"), content.into())
}

fn license_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("about-license-name")).size(typography::BODY_LG))
        .push(Text::new(ctx.i18n.tr("about-license-summary")).size(typography::BODY));

    section(
        icons::globe(),
        ctx.i18n.tr("about-section-license"),
        content.into(),
    )
}

fn credits_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().spacing(spacing::XS);
    for key in CREDIT_KEYS {
        content = content.push(
            Text::new(format!("• {}", ctx.i18n.tr(key))).size(typography::BODY),
        );
    }
    content = content.push(link_row(
        &ctx.i18n.tr("about-credits-full-list"),
        DEPENDENCIES_URL,
    ));

    section(
        icons::cog(),
        ctx.i18n.tr("about-section-credits"),
        content.into(),
    )
}

fn links_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .push(link_row(&ctx.i18n.tr("about-link-repository"), REPOSITORY_URL))
        .push(link_row(&ctx.i18n.tr("about-link-issues"), ISSUES_URL));

    section(
        icons::globe(),
        ctx.i18n.tr("about-section-links"),
        content.into(),
    )
}

fn link_row<'a>(label: &str, url: &'a str) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .push(Text::new(format!("{label}:")).size(typography::BODY))
        .push(Text::new(url).size(typography::BODY))
        .into()
}

/// Icon-and-title card, same visual pattern as the settings and help screens.
fn section(
    icon: iced::widget::Image<iced::widget::image::Handle>,
    title: String,
    content: Element<'_, Message>,
) -> Element<'_, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(icons::sized(icon, sizing::ICON_MD))
        .push(Text::new(title).size(typography::TITLE_SM));

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(rule::horizontal(1))
            .push(content),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(|theme: &Theme| container::Style {
        background: Some(theme.extended_palette().background.weak.color.into()),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn about_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
    }

    #[test]
    fn back_message_maps_to_back_event() {
        assert!(matches!(update(&Message::BackToEditor), Event::BackToEditor));
    }

    #[test]
    fn credit_keys_resolve_in_english() {
        let i18n = I18n::default();
        for key in CREDIT_KEYS {
            assert!(!i18n.tr(key).starts_with("MISSING"), "missing key {key}");
        }
    }
}
