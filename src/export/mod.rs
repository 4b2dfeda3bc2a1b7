// SPDX-License-Identifier: MPL-2.0
//! Word document generation.
//!
//! The document language is a project setting, independent of the interface
//! language, so the labels used inside the generated file come from a static
//! table here rather than from the Fluent bundles.

pub mod docx;
pub mod text;

pub use docx::export_to_path;
pub use text::{classify, classify_line, LineKind};

use crate::project::DocumentLanguage;

/// Fixed strings rendered inside the generated document.
#[derive(Debug, Clone, Copy)]
pub struct DocLabels {
    /// Step heading prefix (`Krok 3: ...`).
    pub step: &'static str,
    /// Lead-in above the description in the side-by-side layout.
    pub instruction: &'static str,
    /// Prefix that marks a machine callout line in descriptions.
    pub machine_prefix: &'static str,
    pub toc_heading: &'static str,
    pub procedure_heading: &'static str,
    pub end_heading: &'static str,
    pub generated_note: &'static str,
    pub generated_date: &'static str,
    pub code: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub author: &'static str,
    pub step_count: &'static str,
    pub author_missing: &'static str,
    /// Footer text around the PAGE / NUMPAGES fields (`{page} 1 {of} 3`).
    pub page: &'static str,
    pub page_of: &'static str,
    /// Placeholder paragraph when a step has no image payload.
    pub no_image: &'static str,
}

const PL: DocLabels = DocLabels {
    step: "Krok",
    instruction: "Instrukcja:",
    machine_prefix: "Maszyna:",
    toc_heading: "Spis kroków",
    procedure_heading: "Przebieg montażu",
    end_heading: "Koniec instrukcji",
    generated_note: "Dokument wygenerowany automatycznie.",
    generated_date: "Data wygenerowania",
    code: "Kod",
    title: "Tytuł",
    date: "Data",
    author: "Autor",
    step_count: "Liczba kroków",
    author_missing: "Nie podano",
    page: "Strona",
    page_of: "z",
    no_image: "Brak obrazu dla kroku",
};

const EN: DocLabels = DocLabels {
    step: "Step",
    instruction: "Instruction:",
    machine_prefix: "Machine:",
    toc_heading: "List of steps",
    procedure_heading: "Assembly procedure",
    end_heading: "End of instructions",
    generated_note: "This document was generated automatically.",
    generated_date: "Generation date",
    code: "Code",
    title: "Title",
    date: "Date",
    author: "Author",
    step_count: "Number of steps",
    author_missing: "Not provided",
    page: "Page",
    page_of: "of",
    no_image: "No image for step",
};

impl DocLabels {
    /// Returns the label set for a document language.
    pub fn for_language(language: DocumentLanguage) -> &'static DocLabels {
        match language {
            DocumentLanguage::Pl => &PL,
            DocumentLanguage::En => &EN,
        }
    }
}
