//! Leading description heuristics
//!
//! Rule files usually open with a one-paragraph summary. The summary is shown in
//! the card header, so it is looked up here and stripped from the body that gets
//! rendered below it.

use crate::constants::{DESCRIPTION_MATCH_PREFIX_CHARS, MIN_DESCRIPTION_CHARS};

/// First substantial line of the body, trimmed, or an empty string
///
/// Blank lines, headings and horizontal rules are skipped.
pub fn extract_description(body: &str) -> String {
    body.lines()
        .map(str::trim)
        .filter(|line| !is_skippable(line))
        .find(|line| is_substantial(line))
        .map(str::to_string)
        .unwrap_or_default()
}

/// Remove the description line from the top of the body
///
/// Everything up to and including the matching line is dropped, along with the
/// blank lines right after it. When a substantial line that does not match shows up
/// first, the body is returned untouched.
pub fn remove_leading_description(body: &str, description: &str) -> String {
    let description = description.trim();
    if description.is_empty() {
        return body.to_string();
    }

    let lines: Vec<&str> = body.lines().collect();
    for (index, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if is_skippable(trimmed) {
            continue;
        }
        if matches_description(trimmed, description) {
            return lines[index + 1..]
                .iter()
                .skip_while(|l| l.trim().is_empty())
                .copied()
                .collect::<Vec<_>>()
                .join("\n");
        }
        if is_substantial(trimmed) {
            break;
        }
    }

    body.to_string()
}

fn is_skippable(trimmed: &str) -> bool {
    trimmed.is_empty() || trimmed.starts_with('#') || is_horizontal_rule(trimmed)
}

fn is_substantial(trimmed: &str) -> bool {
    trimmed.chars().count() >= MIN_DESCRIPTION_CHARS
}

/// `---`, `***`, `___` and spaced variants such as `- - -`
fn is_horizontal_rule(trimmed: &str) -> bool {
    let mut marker = None;
    let mut count = 0;
    for c in trimmed.chars() {
        match c {
            ' ' | '\t' => {}
            '-' | '*' | '_' => {
                if marker.is_some_and(|m| m != c) {
                    return false;
                }
                marker = Some(c);
                count += 1;
            }
            _ => return false,
        }
    }
    count >= 3
}

fn matches_description(trimmed: &str, description: &str) -> bool {
    if trimmed == description {
        return true;
    }
    // Prefix matching on short lines would hit almost any description.
    is_substantial(trimmed) && description.contains(char_prefix(trimmed))
}

fn char_prefix(text: &str) -> &str {
    match text.char_indices().nth(DESCRIPTION_MATCH_PREFIX_CHARS) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
