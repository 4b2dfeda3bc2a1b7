// SPDX-License-Identifier: MPL-2.0
//! Builds the final Word document from a project.
//!
//! Page geometry is fixed to the default letter page with one-inch margins,
//! which leaves 6.5 inches of content width. Every measurement below is
//! derived from that: table grids in twentieths of a point (dxa), image
//! sizes in EMU.

use crate::error::{Error, Result};
use crate::export::text::{classify, LineKind};
use crate::export::DocLabels;
use crate::media::EncodedImage;
use crate::project::{Layout, Project, Step};
use chrono::Local;
use docx_rs::{
    AbstractNumbering, AlignmentType, BreakType, Docx, FieldCharType, Footer, Header, IndentLevel,
    InstrText, Level, LevelJc, LevelText, NumberFormat, Numbering, NumberingId, Paragraph, Pic,
    Run, RunFonts, Start, Style, StyleType, Table, TableCell, TableLayoutType, TableRow,
    VAlignType, WidthType,
};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// English Metric Units per inch, the unit `docx` uses for image extents.
const EMU_PER_INCH: f32 = 914_400.0;

/// Twentieths of a point per inch, the unit used for table widths.
const DXA_PER_INCH: f32 = 1440.0;

/// Usable content width between the page margins, in dxa.
const CONTENT_WIDTH_DXA: usize = 9360;

/// Narrowest the description column may get in the side-by-side layout.
const MIN_TEXT_COLUMN_DXA: usize = 2160;

/// Left indent applied to bullet lines, in dxa.
const BULLET_INDENT_DXA: i32 = 720;

/// Numbering id used by the step list on the contents page.
const TOC_NUMBERING: usize = 1;

/// Generates the document and writes it at `path`.
///
/// Callers are expected to have run [`Project::validate_for_export`] first;
/// an incomplete project still produces a document, just a sparse one.
pub fn export_to_path(project: &Project, path: &Path) -> Result<()> {
    let bytes = build_document(project)?;
    fs::write(path, bytes).map_err(|e| Error::Export(e.to_string()))?;
    Ok(())
}

/// Builds the document in memory and returns the `.docx` container bytes.
pub fn build_document(project: &Project) -> Result<Vec<u8>> {
    let labels = DocLabels::for_language(project.settings.language);
    let base_size = usize::from(project.settings.font_size) * 2;
    let font = project.settings.font_family.as_str();

    let mut docx = Docx::new()
        .default_fonts(RunFonts::new().ascii(font).hi_ansi(font))
        .default_size(base_size)
        .add_style(
            Style::new("DocTitle", StyleType::Paragraph)
                .name("Title")
                .size(base_size + 16)
                .bold(),
        )
        .add_style(
            Style::new("Heading1", StyleType::Paragraph)
                .name("Heading 1")
                .size(base_size + 8)
                .bold(),
        )
        .add_style(
            Style::new("Heading2", StyleType::Paragraph)
                .name("Heading 2")
                .size(base_size + 4)
                .bold(),
        )
        .add_abstract_numbering(AbstractNumbering::new(TOC_NUMBERING).add_level(Level::new(
            0,
            Start::new(1),
            NumberFormat::new("decimal"),
            LevelText::new("%1."),
            LevelJc::new("left"),
        )))
        .add_numbering(Numbering::new(TOC_NUMBERING, TOC_NUMBERING))
        .header(Header::new().add_table(header_table(project, labels)))
        .footer(Footer::new().add_paragraph(footer_paragraph(labels)));

    for paragraph in cover_paragraphs(project, labels) {
        docx = docx.add_paragraph(paragraph);
    }
    docx = docx.add_paragraph(page_break());

    for paragraph in toc_paragraphs(project, labels) {
        docx = docx.add_paragraph(paragraph);
    }
    docx = docx.add_paragraph(page_break());

    docx = docx.add_paragraph(
        Paragraph::new()
            .style("Heading1")
            .add_run(Run::new().add_text(labels.procedure_heading)),
    );

    let width_in = project.settings.image_width_in();
    for (index, step) in project.steps.iter().enumerate() {
        let number = index + 1;
        docx = docx.add_paragraph(Paragraph::new().style("Heading2").add_run(
            Run::new().add_text(format!("{} {}: {}", labels.step, number, step.name)),
        ));

        match project.settings.layout {
            Layout::ImageLeft => {
                docx = docx.add_table(side_by_side_table(step, number, width_in, labels));
            }
            Layout::ImageTop => {
                docx = docx.add_paragraph(image_paragraph(step, number, width_in, labels));
                for paragraph in description_paragraphs(&step.description, labels) {
                    docx = docx.add_paragraph(paragraph);
                }
            }
            Layout::ImageBottom => {
                for paragraph in description_paragraphs(&step.description, labels) {
                    docx = docx.add_paragraph(paragraph);
                }
                docx = docx.add_paragraph(image_paragraph(step, number, width_in, labels));
            }
        }
        docx = docx.add_paragraph(Paragraph::new());
    }

    docx = docx.add_paragraph(page_break());
    docx = docx.add_paragraph(
        Paragraph::new()
            .style("Heading1")
            .align(AlignmentType::Center)
            .add_run(Run::new().add_text(labels.end_heading)),
    );
    docx = docx.add_paragraph(
        Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(Run::new().add_text(labels.generated_note).italic()),
    );
    docx = docx.add_paragraph(
        Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(Run::new().add_text(format!(
                "{}: {}",
                labels.generated_date,
                Local::now().format("%Y-%m-%d")
            ))),
    );

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| Error::Export(e.to_string()))?;
    Ok(buffer.into_inner())
}

/// The running header: code, title and date on the first row, the author
/// spanning the second.
fn header_table(project: &Project, labels: &DocLabels) -> Table {
    let meta = &project.meta;
    let author = if meta.author.trim().is_empty() {
        labels.author_missing.to_string()
    } else {
        meta.author.clone()
    };

    Table::new(vec![
        TableRow::new(vec![
            TableCell::new()
                .width(2340, WidthType::Dxa)
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text(&meta.code).bold())),
            TableCell::new()
                .width(4680, WidthType::Dxa)
                .grid_span(2)
                .add_paragraph(
                    Paragraph::new()
                        .align(AlignmentType::Center)
                        .add_run(Run::new().add_text(&meta.title).bold()),
                ),
            TableCell::new()
                .width(2340, WidthType::Dxa)
                .add_paragraph(
                    Paragraph::new()
                        .align(AlignmentType::Right)
                        .add_run(Run::new().add_text(&meta.date).bold()),
                ),
        ]),
        TableRow::new(vec![TableCell::new()
            .width(CONTENT_WIDTH_DXA, WidthType::Dxa)
            .grid_span(4)
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text(author).italic()))]),
    ])
    .set_grid(vec![2340, 2340, 2340, 2340])
    .layout(TableLayoutType::Fixed)
    .width(CONTENT_WIDTH_DXA, WidthType::Dxa)
}

/// Centered `Page X of Y` line built from PAGE / NUMPAGES fields so the
/// numbers stay correct when the document is edited afterwards.
fn footer_paragraph(labels: &DocLabels) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Center)
        .add_run(Run::new().add_text(format!("{} ", labels.page)))
        .add_run(page_field("PAGE"))
        .add_run(Run::new().add_text(format!(" {} ", labels.page_of)))
        .add_run(page_field("NUMPAGES"))
}

fn page_field(instruction: &str) -> Run {
    Run::new()
        .add_field_char(FieldCharType::Begin, false)
        .add_instr_text(InstrText::Unsupported(instruction.to_string()))
        .add_field_char(FieldCharType::End, false)
}

fn cover_paragraphs(project: &Project, labels: &DocLabels) -> Vec<Paragraph> {
    let meta = &project.meta;
    let mut paragraphs = vec![
        Paragraph::new()
            .style("DocTitle")
            .align(AlignmentType::Center)
            .add_run(Run::new().add_text(&meta.title)),
        cover_line(labels.code, &meta.code),
        cover_line(labels.title, &meta.title),
        cover_line(labels.date, &meta.date),
    ];
    if !meta.author.trim().is_empty() {
        paragraphs.push(cover_line(labels.author, &meta.author));
    }
    paragraphs.push(cover_line(
        labels.step_count,
        &project.steps.len().to_string(),
    ));
    paragraphs
}

fn cover_line(label: &str, value: &str) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Center)
        .add_run(Run::new().add_text(format!("{label}: ")).bold())
        .add_run(Run::new().add_text(value))
}

fn toc_paragraphs(project: &Project, labels: &DocLabels) -> Vec<Paragraph> {
    let mut paragraphs = vec![Paragraph::new()
        .style("Heading1")
        .add_run(Run::new().add_text(labels.toc_heading))];
    for (index, step) in project.steps.iter().enumerate() {
        paragraphs.push(
            Paragraph::new()
                .numbering(NumberingId::new(TOC_NUMBERING), IndentLevel::new(0))
                .add_run(Run::new().add_text(format!(
                    "{} {}: {}",
                    labels.step,
                    index + 1,
                    step.name
                ))),
        );
    }
    paragraphs
}

/// Side-by-side layout: one fixed table row, image on the left, lead-in
/// plus description on the right.
fn side_by_side_table(step: &Step, number: usize, width_in: f32, labels: &DocLabels) -> Table {
    let image_dxa = ((width_in * DXA_PER_INCH) as usize).min(CONTENT_WIDTH_DXA / 2 + 1440);
    let text_dxa = CONTENT_WIDTH_DXA
        .saturating_sub(image_dxa)
        .max(MIN_TEXT_COLUMN_DXA);

    let mut text_cell = TableCell::new()
        .width(text_dxa, WidthType::Dxa)
        .vertical_align(VAlignType::Center)
        .add_paragraph(
            Paragraph::new().add_run(Run::new().add_text(labels.instruction).bold()),
        );
    for paragraph in description_paragraphs(&step.description, labels) {
        text_cell = text_cell.add_paragraph(paragraph);
    }

    Table::new(vec![TableRow::new(vec![
        TableCell::new()
            .width(image_dxa, WidthType::Dxa)
            .vertical_align(VAlignType::Center)
            .add_paragraph(image_paragraph(step, number, width_in, labels)),
        text_cell,
    ])])
    .set_grid(vec![image_dxa, text_dxa])
    .layout(TableLayoutType::Fixed)
    .width(image_dxa + text_dxa, WidthType::Dxa)
}

/// Centered paragraph holding the step image, or a placeholder line when the
/// step carries no usable payload.
fn image_paragraph(step: &Step, number: usize, width_in: f32, labels: &DocLabels) -> Paragraph {
    let image = &step.image.image;
    if image.bytes.is_empty() || image.width == 0 || image.height == 0 {
        return Paragraph::new().align(AlignmentType::Center).add_run(
            Run::new()
                .add_text(format!("[{} {}]", labels.no_image, number))
                .italic(),
        );
    }

    let (width_emu, height_emu) = scaled_emu(image, width_in);
    let pic = Pic::new(image.bytes.as_slice()).size(width_emu, height_emu);
    Paragraph::new()
        .align(AlignmentType::Center)
        .add_run(Run::new().add_image(pic))
}

/// Scales an image to the configured width, preserving aspect ratio.
fn scaled_emu(image: &EncodedImage, width_in: f32) -> (u32, u32) {
    let width_emu = (width_in * EMU_PER_INCH) as u64;
    let height_emu = width_emu * u64::from(image.height) / u64::from(image.width);
    (width_emu as u32, height_emu as u32)
}

/// Renders a description with the formatting rules from [`crate::export::text`].
fn description_paragraphs(description: &str, labels: &DocLabels) -> Vec<Paragraph> {
    classify(description, labels.machine_prefix)
        .into_iter()
        .map(|(kind, line)| match kind {
            LineKind::Blank => Paragraph::new(),
            LineKind::Machine | LineKind::Numbered => {
                Paragraph::new().add_run(Run::new().add_text(line).bold())
            }
            LineKind::Bullet => Paragraph::new()
                .indent(Some(BULLET_INDENT_DXA), None, None, None)
                .add_run(Run::new().add_text(line)),
            LineKind::Plain => Paragraph::new().add_run(Run::new().add_text(line)),
        })
        .collect()
}

fn page_break() -> Paragraph {
    Paragraph::new().add_run(Run::new().add_break(BreakType::Page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::EncodedImage;
    use crate::project::test_support::project_with_steps;
    use crate::project::{DocumentLanguage, Layout};
    use std::sync::Arc;
    use tempfile::tempdir;

    fn assert_is_docx(bytes: &[u8]) {
        // A .docx file is a zip container
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn every_layout_produces_a_docx_container() {
        for layout in Layout::ALL {
            let mut project = project_with_steps(&["align", "fasten"]);
            project.settings.layout = layout;
            let bytes = build_document(&project).expect("build");
            assert_is_docx(&bytes);
        }
    }

    #[test]
    fn export_writes_the_file_at_the_requested_path() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("manual.docx");
        let project = project_with_steps(&["only"]);

        export_to_path(&project, &path).expect("export");

        let bytes = std::fs::read(&path).expect("read back");
        assert_is_docx(&bytes);
    }

    #[test]
    fn formatted_descriptions_do_not_break_the_build() {
        let mut project = project_with_steps(&["mix"]);
        project.steps[0].description =
            "Maszyna: prasa P-200\n\n1. Włóż sworzeń\n• dokręć\nzwykły tekst".into();
        let bytes = build_document(&project).expect("build");
        assert_is_docx(&bytes);
    }

    #[test]
    fn english_document_builds_with_english_labels() {
        let mut project = project_with_steps(&["one"]);
        project.settings.language = DocumentLanguage::En;
        let bytes = build_document(&project).expect("build");
        assert_is_docx(&bytes);
    }

    #[test]
    fn step_without_image_payload_gets_a_placeholder() {
        let mut project = project_with_steps(&["ghost"]);
        project.steps[0].image.image = EncodedImage {
            bytes: Arc::new(Vec::new()),
            width: 0,
            height: 0,
        };
        let bytes = build_document(&project).expect("build");
        assert_is_docx(&bytes);
    }

    #[test]
    fn empty_project_still_builds_a_document() {
        let project = Project::default();
        let bytes = build_document(&project).expect("build");
        assert_is_docx(&bytes);
    }

    #[test]
    fn scaled_emu_preserves_aspect_ratio() {
        let image = EncodedImage {
            bytes: Arc::new(vec![0]),
            width: 400,
            height: 200,
        };
        let (w, h) = scaled_emu(&image, 2.0);
        assert_eq!(w, 1_828_800);
        assert_eq!(h, 914_400);
    }

    #[test]
    fn widest_configurable_image_still_builds_a_side_by_side_document() {
        let mut project = project_with_steps(&["wide"]);
        project.settings.layout = Layout::ImageLeft;
        // 14 cm is the maximum configurable width; the text column must
        // survive the clamp.
        project.settings.image_width_cm = 14.0;
        let bytes = build_document(&project).expect("build");
        assert_is_docx(&bytes);

        let image_dxa =
            (((14.0 / 2.54) * DXA_PER_INCH) as usize).min(CONTENT_WIDTH_DXA / 2 + 1440);
        let text_dxa = CONTENT_WIDTH_DXA
            .saturating_sub(image_dxa)
            .max(MIN_TEXT_COLUMN_DXA);
        assert!(text_dxa >= MIN_TEXT_COLUMN_DXA);
    }
}
