// SPDX-License-Identifier: MPL-2.0
//! In-app help, organized as collapsible sections per feature area.

use crate::i18n::fluent::I18n;
use crate::ui::action_icons;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::image::{Handle, Image};
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{button, container, scrollable, text, Column, Container, Row, Text},
    Border, Element, Font, Length, Theme,
};
use std::collections::HashSet;

/// Inline icon size inside help text rows.
const HELP_ICON_SIZE: f32 = 18.0;

/// Keyboard shortcuts listed under the editing section.
const SHORTCUTS: [(&str, &str); 4] = [
    ("Ctrl+Z", "help-editing-key-undo"),
    ("Ctrl+Y", "help-editing-key-redo"),
    ("Ctrl+S", "help-editing-key-save"),
    ("Enter", "help-editing-key-commit"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelpSection {
    Project,
    Steps,
    Editing,
    Export,
}

impl HelpSection {
    /// Display order on the help screen.
    pub const ALL: [HelpSection; 4] = [
        HelpSection::Project,
        HelpSection::Steps,
        HelpSection::Editing,
        HelpSection::Export,
    ];

    fn title_key(self) -> &'static str {
        match self {
            HelpSection::Project => "help-section-project",
            HelpSection::Steps => "help-section-steps",
            HelpSection::Editing => "help-section-editing",
            HelpSection::Export => "help-section-export",
        }
    }

    fn icon(self) -> Image<Handle> {
        match self {
            HelpSection::Project => action_icons::project::open(),
            HelpSection::Steps => action_icons::sections::step_editing(),
            HelpSection::Editing => action_icons::edit::undo(),
            HelpSection::Export => action_icons::project::export(),
        }
    }
}

/// Which sections are currently expanded. Everything starts collapsed.
#[derive(Debug, Clone, Default)]
pub struct State {
    expanded: HashSet<HelpSection>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_expanded(&self, section: HelpSection) -> bool {
        self.expanded.contains(&section)
    }

    pub fn toggle(&mut self, section: HelpSection) {
        if !self.expanded.remove(&section) {
            self.expanded.insert(section);
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

#[derive(Debug, Clone)]
pub enum Message {
    BackToEditor,
    ToggleSection(HelpSection),
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    BackToEditor,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::BackToEditor => Event::BackToEditor,
        Message::ToggleSection(section) => {
            state.toggle(section);
            Event::None
        }
    }
}

#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("help-back-button"))).size(typography::BODY),
    )
    .on_press(Message::BackToEditor);

    let mut content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::SM)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(back_button)
        .push(Text::new(ctx.i18n.tr("help-title")).size(typography::TITLE_LG));

    for section in HelpSection::ALL {
        content = content.push(collapsible(&ctx, section));
    }

    scrollable(content).into()
}

/// Section header button plus, when expanded, the section body in a card.
fn collapsible<'a>(ctx: &ViewContext<'a>, section: HelpSection) -> Element<'a, Message> {
    let expanded = ctx.state.is_expanded(section);
    let chevron = Text::new(if expanded { "▼" } else { "▶" }).size(typography::BODY);

    let header = button(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(chevron)
            .push(icons::sized(section.icon(), sizing::ICON_MD))
            .push(Text::new(ctx.i18n.tr(section.title_key())).size(typography::TITLE_SM)),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(header_style)
    .on_press(Message::ToggleSection(section));

    let mut column = Column::new().spacing(spacing::XS).push(header);
    if expanded {
        column = column.push(
            Container::new(body(ctx, section))
                .padding(spacing::MD)
                .width(Length::Fill)
                .style(card_style),
        );
    }
    column.into()
}

fn header_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette.background.strong.color,
        _ => palette.background.weak.color,
    };

    button::Style {
        background: Some(background.into()),
        text_color: palette.background.base.text,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn card_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().background.weak.color.into()),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn body<'a>(ctx: &ViewContext<'a>, section: HelpSection) -> Element<'a, Message> {
    match section {
        HelpSection::Project => project_body(ctx),
        HelpSection::Steps => steps_body(ctx),
        HelpSection::Editing => editing_body(ctx),
        HelpSection::Export => export_body(ctx),
    }
}

fn project_body<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(paragraph(ctx.i18n.tr("help-project-role")))
        .push(subsection(ctx.i18n.tr("help-tools-title")))
        .push(tool_list(
            ctx,
            vec![
                (Some(action_icons::project::new()), "help-project-tool-new"),
                (Some(action_icons::project::open()), "help-project-tool-open"),
                (Some(action_icons::project::save()), "help-project-tool-save"),
                (
                    Some(action_icons::project::backup()),
                    "help-project-tool-backup",
                ),
            ],
        ))
        .push(paragraph(ctx.i18n.tr("help-project-autosave")))
        .into()
}

fn steps_body<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(paragraph(ctx.i18n.tr("help-steps-role")))
        .push(subsection(ctx.i18n.tr("help-tools-title")))
        .push(tool_list(
            ctx,
            vec![
                (Some(action_icons::steps::add()), "help-steps-tool-add"),
                (Some(action_icons::steps::delete()), "help-steps-tool-delete"),
                (
                    Some(action_icons::steps::move_up()),
                    "help-steps-tool-reorder",
                ),
                (
                    Some(action_icons::steps::replace_image()),
                    "help-steps-tool-replace",
                ),
            ],
        ))
        .push(subsection(ctx.i18n.tr("help-usage-title")))
        .push(numbered_list(
            ctx,
            ["help-steps-step1", "help-steps-step2", "help-steps-step3"],
        ))
        .push(paragraph(ctx.i18n.tr("help-steps-image-note")))
        .into()
}

fn editing_body<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut shortcuts = Column::new().spacing(spacing::XXS);
    for (key, description_key) in SHORTCUTS {
        shortcuts = shortcuts.push(shortcut_row(key, ctx.i18n.tr(description_key)));
    }

    Column::new()
        .spacing(spacing::SM)
        .push(paragraph(ctx.i18n.tr("help-editing-role")))
        .push(subsection(ctx.i18n.tr("help-tools-title")))
        .push(tool_list(
            ctx,
            vec![
                (Some(action_icons::edit::undo()), "help-editing-tool-undo"),
                (Some(action_icons::edit::redo()), "help-editing-tool-redo"),
                (None, "help-editing-tool-metadata"),
            ],
        ))
        .push(subsection(ctx.i18n.tr("help-shortcuts-title")))
        .push(shortcuts)
        .into()
}

fn export_body<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(paragraph(ctx.i18n.tr("help-export-role")))
        .push(subsection(ctx.i18n.tr("help-usage-title")))
        .push(numbered_list(
            ctx,
            [
                "help-export-step1",
                "help-export-step2",
                "help-export-step3",
            ],
        ))
        .push(paragraph(ctx.i18n.tr("help-export-validation")))
        .push(paragraph(ctx.i18n.tr("help-export-backup")))
        .into()
}

fn paragraph<'a>(content: String) -> Element<'a, Message> {
    Text::new(content).size(typography::BODY).into()
}

fn subsection<'a>(title: String) -> Element<'a, Message> {
    Text::new(title)
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        })
        .into()
}

/// Bulleted tool rows. The description lives under `{key}-desc`.
fn tool_list<'a>(
    ctx: &ViewContext<'a>,
    entries: Vec<(Option<Image<Handle>>, &'static str)>,
) -> Element<'a, Message> {
    let mut list = Column::new().spacing(spacing::XS);
    for (icon, key) in entries {
        let mut row = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(Text::new("•").size(typography::BODY));
        if let Some(icon) = icon {
            row = row.push(icons::sized(icon, HELP_ICON_SIZE));
        }
        list = list.push(
            row.push(
                Text::new(format!("{}:", ctx.i18n.tr(key)))
                    .size(typography::BODY)
                    .font(Font {
                        weight: Weight::Bold,
                        ..Font::default()
                    }),
            )
            .push(Text::new(ctx.i18n.tr(&format!("{key}-desc"))).size(typography::BODY)),
        );
    }
    list.into()
}

fn numbered_list<'a>(ctx: &ViewContext<'a>, keys: [&'static str; 3]) -> Element<'a, Message> {
    let mut list = Column::new().spacing(spacing::XXS);
    for (index, key) in keys.into_iter().enumerate() {
        let badge = Container::new(Text::new((index + 1).to_string()).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(|theme: &Theme| container::Style {
                background: Some(theme.extended_palette().primary.base.color.into()),
                border: Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                text_color: Some(theme.extended_palette().primary.base.text),
                ..Default::default()
            });

        list = list.push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(badge)
                .push(Text::new(ctx.i18n.tr(key)).size(typography::BODY)),
        );
    }
    list.into()
}

fn shortcut_row<'a>(key: &'a str, description: String) -> Element<'a, Message> {
    let badge = Container::new(Text::new(key).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.strong.color.into()),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Container::new(badge).width(Length::Fixed(70.0)))
        .push(Text::new(description).size(typography::BODY))
        .into()
}
