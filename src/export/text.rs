// SPDX-License-Identifier: MPL-2.0
//! Description-text formatting rules.
//!
//! Step descriptions are free text, but a few line shapes get special
//! treatment in the generated document. The classifier is pure so the rules
//! stay testable away from the docx object model.

/// How a single description line is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty line, rendered as an empty paragraph to keep spacing.
    Blank,
    /// Machine callout (`Maszyna:` / `Machine:`), rendered bold.
    Machine,
    /// Numbered instruction (`1.`, `12.` ...), rendered bold.
    Numbered,
    /// Bullet line (`•` ...), rendered indented.
    Bullet,
    /// Anything else, rendered as a plain paragraph.
    Plain,
}

/// Classifies one line of description text.
///
/// Classification happens on the trimmed line; leading indentation in the
/// source text carries no meaning.
pub fn classify_line(line: &str, machine_prefix: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if trimmed.starts_with(machine_prefix) {
        return LineKind::Machine;
    }
    if starts_with_number_dot(trimmed) {
        return LineKind::Numbered;
    }
    if trimmed.starts_with('•') {
        return LineKind::Bullet;
    }
    LineKind::Plain
}

/// Splits a description into trimmed lines with their classification.
pub fn classify(description: &str, machine_prefix: &str) -> Vec<(LineKind, String)> {
    description
        .lines()
        .map(|line| {
            (
                classify_line(line, machine_prefix),
                line.trim().to_string(),
            )
        })
        .collect()
}

fn starts_with_number_dot(line: &str) -> bool {
    let digits: usize = line.chars().take_while(char::is_ascii_digit).count();
    digits > 0 && line[digits..].starts_with('.')
}
