/// Function boundary detection and decision-point counting.
///
/// Brace-scoped languages (C family, Rust, Go, ...) are tracked by brace
/// depth; indent-scoped languages (Python, Ruby) by indentation level.
/// String and char literals are masked before any counting so keywords
/// inside literals never register.
use crate::util::mask_literals;

use super::markers::Language;

/// One detected function: 1-based line span plus its cyclomatic complexity.
#[derive(Debug, Clone)]
pub struct FunctionSpan {
    pub name: String,
    pub start_line: usize,
    pub end_line: usize,
    pub complexity: usize,
}

/// Control-flow keywords that must not be mistaken for declarations by the
/// call-like heuristic.
const CONTROL_KEYWORDS: &[&str] = &[
    "if", "for", "while", "switch", "else", "do", "catch", "return", "case",
];

/// Detect function spans in a file's lines (index 0 = line 1).
pub fn detect_functions(lines: &[&str], lang: &Language) -> Vec<FunctionSpan> {
    let code_lines: Vec<(usize, &str)> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_code_line(line, lang))
        .map(|(i, line)| (i, *line))
        .collect();

    if code_lines.is_empty() {
        return Vec::new();
    }

    if lang.brace_scoped {
        detect_brace_scoped(&code_lines, lang)
    } else {
        detect_indent_scoped(lines, &code_lines, lang)
    }
}

/// Blank and comment-only lines carry no decision points and never open a
/// function, so they are dropped before detection.
fn is_code_line(line: &str, lang: &Language) -> bool {
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return false;
    }
    !lang.line_comments.iter().any(|c| trimmed.starts_with(c))
}

fn detect_brace_scoped(code_lines: &[(usize, &str)], lang: &Language) -> Vec<FunctionSpan> {
    let mut functions = Vec::new();
    let mut i = 0;

    while i < code_lines.len() {
        let (line_idx, line) = code_lines[i];
        let trimmed = line.trim();

        if !is_declaration(trimmed, lang) {
            i += 1;
            continue;
        }

        let (body, end) = body_by_braces(code_lines, i, lang);
        functions.push(FunctionSpan {
            name: declaration_name(trimmed, lang),
            start_line: line_idx + 1,
            end_line: code_lines[end].0 + 1,
            complexity: complexity_of(&body, lang),
        });
        i = end + 1;
    }

    functions
}

fn detect_indent_scoped(
    all_lines: &[&str],
    code_lines: &[(usize, &str)],
    lang: &Language,
) -> Vec<FunctionSpan> {
    let mut functions = Vec::new();
    let mut i = 0;

    while i < code_lines.len() {
        let (line_idx, line) = code_lines[i];
        let trimmed = line.trim();

        let is_def = lang
            .function_markers
            .iter()
            .any(|marker| trimmed.starts_with(marker));
        if !is_def {
            i += 1;
            continue;
        }

        let base_indent = indent_width(line);
        let mut body = vec![line];
        let mut end_idx = line_idx;
        let mut j = i + 1;

        while j < code_lines.len() {
            let (jidx, jline) = code_lines[j];
            if indent_width(all_lines[jidx]) <= base_indent {
                break;
            }
            body.push(jline);
            end_idx = jidx;
            j += 1;
        }

        functions.push(FunctionSpan {
            name: declaration_name(trimmed, lang),
            start_line: line_idx + 1,
            end_line: end_idx + 1,
            complexity: complexity_of(&body, lang),
        });
        i = j;
    }

    functions
}

/// A declaration is a line containing a function marker. Languages without
/// markers use the call-like heuristic instead: a line ending in `{` or `)`
/// whose first word is not a control keyword.
///
/// Known limitations, accepted for a line scanner: multiline declarations
/// with `{` on its own line, function pointers, and function-like macros.
fn is_declaration(trimmed: &str, lang: &Language) -> bool {
    if !lang.function_markers.is_empty() {
        return lang.function_markers.iter().any(|m| trimmed.contains(m));
    }

    if !trimmed.contains('(') {
        return false;
    }
    if !(trimmed.ends_with('{') || trimmed.ends_with(')')) {
        return false;
    }

    let first = trimmed
        .split_whitespace()
        .next()
        .unwrap_or("")
        .trim_start_matches('*');
    !CONTROL_KEYWORDS.contains(&first)
}

/// Extract the declared name: the identifier after the marker, or the last
/// token before the first `(` for marker-less languages.
fn declaration_name(trimmed: &str, lang: &Language) -> String {
    for marker in lang.function_markers {
        if let Some(pos) = trimmed.find(marker) {
            let after = &trimmed[pos + marker.len()..];
            let name: String = after
                .chars()
                .take_while(|c| c.is_alphanumeric() || *c == '_')
                .collect();
            if !name.is_empty() {
                return name;
            }
        }
    }

    if let Some(paren) = trimmed.find('(') {
        let before = trimmed[..paren].trim();
        if let Some(token) = before.split_whitespace().next_back() {
            let token = token.trim_start_matches('*');
            if !token.is_empty() {
                return token.to_string();
            }
        }
    }

    "<anonymous>".to_string()
}

/// Collect body lines from `code_lines[start]` by brace depth. Returns the
/// body and the index of the closing-brace line (clamped to the last line
/// when no brace ever closes).
fn body_by_braces<'a>(
    code_lines: &[(usize, &'a str)],
    start: usize,
    lang: &Language,
) -> (Vec<&'a str>, usize) {
    let mut depth: isize = 0;
    let mut opened = false;
    let mut body: Vec<&str> = Vec::new();
    let mut j = start;

    while j < code_lines.len() {
        let (_, line) = code_lines[j];
        body.push(line);

        let masked = mask_literals(line, lang.line_comments);
        for b in masked.bytes() {
            match b {
                b'{' => {
                    depth += 1;
                    opened = true;
                }
                b'}' => depth -= 1,
                _ => {}
            }
        }

        if opened && depth == 0 {
            break;
        }
        j += 1;
    }

    (body, j.min(code_lines.len() - 1))
}

/// Indentation width in spaces; a tab counts as 4.
fn indent_width(line: &str) -> usize {
    let mut width = 0;
    for ch in line.chars() {
        match ch {
            ' ' => width += 1,
            '\t' => width += 4,
            _ => break,
        }
    }
    width
}

/// Cyclomatic complexity of a body: 1 for the function itself plus one per
/// decision point.
fn complexity_of(body: &[&str], lang: &Language) -> usize {
    1 + body
        .iter()
        .map(|line| decision_points(line.trim(), lang))
        .sum::<usize>()
}

/// Count decision points in one line: multi-word keywords first (`else if`),
/// blanking their matches so the single-word pass cannot count them again,
/// then single-word keywords, then boolean operators.
fn decision_points(line: &str, lang: &Language) -> usize {
    let masked = mask_literals(line, lang.line_comments);
    let mut count = 0;

    let mut remainder = masked;
    for kw in lang.keywords.iter().filter(|k| k.contains(' ')) {
        count += count_word(&remainder, kw);
        remainder = remainder.replace(kw, &" ".repeat(kw.len()));
    }
    for kw in lang.keywords.iter().filter(|k| !k.contains(' ')) {
        count += count_word(&remainder, kw);
    }
    for op in lang.operators {
        count += remainder.matches(op).count();
    }

    count
}

/// Whole-word occurrences: the bytes around a match must not be identifier
/// characters, so `notify` never matches `if`.
fn count_word(line: &str, word: &str) -> usize {
    let bytes = line.as_bytes();
    let w = word.as_bytes();
    if w.is_empty() || bytes.len() < w.len() {
        return 0;
    }

    let mut count = 0;
    let mut i = 0;
    while i + w.len() <= bytes.len() {
        let boundary_before = i == 0 || !is_word_byte(bytes[i - 1]);
        let boundary_after = i + w.len() == bytes.len() || !is_word_byte(bytes[i + w.len()]);
        if &bytes[i..i + w.len()] == w && boundary_before && boundary_after {
            count += 1;
            i += w.len();
        } else {
            i += 1;
        }
    }
    count
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[cfg(test)]
#[path = "detection_test.rs"]
mod tests;
