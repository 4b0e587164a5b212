use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Pad to `width` display columns rather than chars, so non-ASCII author
/// names still align in tables.
pub fn pad(s: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(s);
    let mut out = String::with_capacity(s.len() + width.saturating_sub(current));
    out.push_str(s);
    for _ in current..width {
        out.push(' ');
    }
    out
}

/// Max display width over a set of labels, with a minimum of `min`.
pub fn max_width<'a>(labels: impl Iterator<Item = &'a str>, min: usize) -> usize {
    labels
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(min)
        .max(min)
}

/// Print a horizontal separator of box-drawing chars.
pub fn separator(width: usize) -> String {
    "\u{2500}".repeat(width)
}

/// Serialize to pretty JSON and print to stdout.
pub fn print_json_stdout(value: &impl Serialize) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
#[path = "report_helpers_test.rs"]
mod tests;
