use crate::Misspelling;
use colored::*;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    file: String,
    total_errors: usize,
    errors: &'a [Misspelling],
}

const HEADERS: [&str; 6] = [
    "(index)",
    "word",
    "suggestions",
    "context",
    "lineNumber",
    "columnNumber",
];

// Columns holding numbers are right-aligned.
const NUMERIC: [bool; 6] = [true, false, false, false, true, true];

pub fn write_report<W: Write>(
    out: &mut W,
    file_path: &Path,
    errors: &[Misspelling],
    colored_output: bool,
    format: &OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_table(out, errors, colored_output),
        OutputFormat::Json => write_json(out, file_path, errors),
    }
}

/// Tabular report, one row per misspelling.
fn write_table<W: Write>(
    out: &mut W,
    errors: &[Misspelling],
    colored_output: bool,
) -> io::Result<()> {
    if errors.is_empty() {
        return Ok(());
    }

    let rows: Vec<[String; 6]> = errors
        .iter()
        .enumerate()
        .map(|(index, error)| {
            [
                index.to_string(),
                error.word.clone(),
                error.suggestions.join(", "),
                error.context.clone(),
                error.line_number.to_string(),
                error.column_number.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| {
            let cell = pad(h, w, false);
            if colored_output {
                cell.bold().to_string()
            } else {
                cell
            }
        })
        .collect();
    writeln!(out, "{}", header.join(" | "))?;

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "{}", rule.join("-+-"))?;

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(column, cell)| {
                let cell = pad(cell, widths[column], NUMERIC[column]);
                if !colored_output {
                    return cell;
                }
                match column {
                    0 | 4 | 5 => cell.blue().to_string(),
                    1 => cell.red().bold().to_string(),
                    2 => cell.green().to_string(),
                    _ => cell,
                }
            })
            .collect();
        writeln!(out, "{}", cells.join(" | ").trim_end())?;
    }

    Ok(())
}

fn write_json<W: Write>(out: &mut W, file_path: &Path, errors: &[Misspelling]) -> io::Result<()> {
    let output = JsonOutput {
        file: file_path.display().to_string(),
        total_errors: errors.len(),
        errors,
    };

    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)
}

fn pad(text: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{:>width$}", text, width = width)
    } else {
        format!("{:<width$}", text, width = width)
    }
}

pub fn write_summary<W: Write>(
    out: &mut W,
    total_errors: usize,
    file_path: &Path,
    colored: bool,
) -> io::Result<()> {
    writeln!(out)?;
    if total_errors == 0 {
        if colored {
            writeln!(out, "{}", "✓ No spelling errors found!".green().bold())
        } else {
            writeln!(out, "✓ No spelling errors found!")
        }
    } else {
        let error_word = if total_errors == 1 {
            "misspelling"
        } else {
            "misspellings"
        };
        if colored {
            writeln!(
                out,
                "{} {} {} found in {}",
                "✗".red().bold(),
                total_errors.to_string().red().bold(),
                error_word,
                file_path.display()
            )
        } else {
            writeln!(
                out,
                "✗ {} {} found in {}",
                total_errors,
                error_word,
                file_path.display()
            )
        }
    }
}
