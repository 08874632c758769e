use crate::{CheckStatus, Dictionary, Token};
use anyhow::Result;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
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

/// A word the dictionary does not accept, located for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Misspelling {
    pub word: String,
    pub line: usize,
    pub column: usize,
    pub start: usize,
    pub end: usize,
    pub status: CheckStatus,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    file: String,
    total_errors: usize,
    errors: &'a [Misspelling],
}

/// Keep the tokens that are not correct and attach suggestions to them.
pub fn collect(
    buffer: &str,
    tokens: &[Token],
    dictionary: &Dictionary,
    max_suggestions: usize,
) -> Vec<Misspelling> {
    tokens
        .iter()
        .filter(|token| !token.is_correct())
        .map(|token| {
            let (line, column) = line_column(buffer, token.byte_start);
            let mut suggestions = dictionary.suggest(&token.text);
            suggestions.truncate(max_suggestions);

            Misspelling {
                word: token.text.clone(),
                line,
                column,
                start: token.start,
                end: token.end,
                status: token.status,
                suggestions,
            }
        })
        .collect()
}

/// 1-indexed line and character column of a byte offset.
pub fn line_column(buffer: &str, byte_offset: usize) -> (usize, usize) {
    let before = &buffer[..byte_offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

pub fn print_report(
    file_path: &Path,
    misspellings: &[Misspelling],
    colored_output: bool,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print_text_report(file_path, misspellings, colored_output);
            Ok(())
        }
        OutputFormat::Json => print_json_report(file_path, misspellings),
    }
}

fn print_text_report(file_path: &Path, misspellings: &[Misspelling], colored_output: bool) {
    if misspellings.is_empty() {
        return;
    }

    let file_name = file_path.display().to_string();

    if colored_output {
        println!("\n{}", file_name.bold().underline());
    } else {
        println!("\n{}", file_name);
    }

    for error in misspellings {
        let line_info = format!("{}:{}", error.line, error.column);

        if colored_output {
            println!("  {} {}", line_info.blue().bold(), error.word.red().bold());

            if !error.suggestions.is_empty() {
                let suggestions = error
                    .suggestions
                    .iter()
                    .map(|s| s.green().to_string())
                    .collect::<Vec<_>>()
                    .join(&", ".dimmed().to_string());
                println!("    {} {}", "→".dimmed(), suggestions);
            }
        } else {
            println!("  {} {}", line_info, error.word);

            if !error.suggestions.is_empty() {
                println!("    → {}", error.suggestions.join(", "));
            }
        }
    }
}

fn print_json_report(file_path: &Path, misspellings: &[Misspelling]) -> Result<()> {
    let report = JsonReport {
        file: file_path.display().to_string(),
        total_errors: misspellings.len(),
        errors: misspellings,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub fn print_check_summary(total_errors: usize, files: &[impl AsRef<Path>], colored: bool) {
    println!();
    if total_errors == 0 {
        if colored {
            println!("{}", "✓ No unknown words found!".green().bold());
        } else {
            println!("✓ No unknown words found!");
        }
    } else {
        let error_word = if total_errors == 1 { "word" } else { "words" };
        let file_word = if files.len() == 1 { "file" } else { "files" };
        if colored {
            println!(
                "{} {} unknown {} found in {} {}",
                "✗".red().bold(),
                total_errors.to_string().red().bold(),
                error_word,
                files.len(),
                file_word
            );
        } else {
            println!(
                "✗ {} unknown {} found in {} {}",
                total_errors,
                error_word,
                files.len(),
                file_word
            );
        }
    }
}
