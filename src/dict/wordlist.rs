use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a word list: one entry per line, `#` starts a comment line.
///
/// Entries keep their `!` prefix and case so they classify the same way
/// when passed to [`crate::Dictionary::add`]. A leading `\` is dropped, which
/// lets an entry start with `#`; [`format`] writes entries that way.
pub fn read(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list: {}", path.display()))?;

    Ok(parse(&content))
}

pub fn parse(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.strip_prefix('\\').unwrap_or(line).to_string())
        .collect()
}

/// Write entries one per line, escaping those [`parse`] would otherwise
/// treat as comments or escapes.
pub fn format<I, S>(entries: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut content = String::new();

    for entry in entries {
        let entry = entry.as_ref();
        if entry.starts_with('#') || entry.starts_with('\\') {
            content.push('\\');
        }
        content.push_str(entry);
        content.push('\n');
    }

    content
}
