/// Replace the contents of string and char literals with spaces and blank
/// everything from the first line-comment marker onward, so that keywords,
/// braces, and operators inside literals or trailing comments are not
/// counted by the function scanner.
pub fn mask_literals(line: &str, line_comments: &[&str]) -> String {
    let bytes = line.as_bytes();
    let len = bytes.len();
    let mut result = bytes.to_vec();
    let mut i = 0;

    while i < len {
        let ch = bytes[i];
        if ch == b'"' || ch == b'\'' {
            let quote = ch;
            i += 1; // opening quote kept
            while i < len {
                if bytes[i] == b'\\' {
                    // escape: mask both chars
                    result[i] = b' ';
                    i += 1;
                    if i < len {
                        result[i] = b' ';
                        i += 1;
                    }
                } else if bytes[i] == quote {
                    i += 1; // closing quote kept
                    break;
                } else {
                    result[i] = b' ';
                    i += 1;
                }
            }
        } else {
            i += 1;
        }
    }

    // Comment markers inside literals were blanked above, so the first
    // surviving marker starts a real comment.
    for marker in line_comments {
        if let Some(pos) = find_subslice(&result, marker.as_bytes()) {
            for b in result.iter_mut().skip(pos) {
                *b = b' ';
            }
            break;
        }
    }

    // SAFETY: only ASCII bytes were replaced with ASCII spaces
    String::from_utf8(result).unwrap_or_else(|_| line.to_string())
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    (0..=haystack.len() - needle.len()).find(|&i| &haystack[i..i + needle.len()] == needle)
}

/// Round to `dp` decimal places for presentation. Internal accumulation
/// always uses unrounded values.
pub fn round_dp(value: f64, dp: i32) -> f64 {
    let factor = 10f64.powi(dp);
    (value * factor).round() / factor
}

#[cfg(test)]
#[path = "util_test.rs"]
mod tests;
