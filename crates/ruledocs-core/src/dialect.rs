//! Markdown dialect rewriting
//!
//! ESLint rule docs use container blocks (`::: correct` / `::: incorrect`) and
//! option-annotated code fences (`` ```ts option='...' ``) that plain markdown
//! renderers do not understand. [`transform`] rewrites them into HTML containers
//! wrapping ordinary markdown.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// One line of block content; never a line opening with `:::`
const BLOCK_LINE: &str = r"[ \t]*(?:[^ \t:\n][^\n]*|:(?:[^:\n][^\n]*)?|::(?:[^:\n][^\n]*)?)?\n";

static INCORRECT_BLOCK: LazyLock<Regex> = LazyLock::new(|| example_block_regex("incorrect"));

static CORRECT_BLOCK: LazyLock<Regex> = LazyLock::new(|| example_block_regex("correct"));

static STRAY_BLOCK_OPENER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*::: (?:incorrect|correct)\b[^\n]*$").expect("Invalid regex")
});

static STRAY_BLOCK_CLOSER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*:::[ \t]*\r?$").expect("Invalid regex"));

static OPTION_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^```([\w+-]+)[ \t]+option='([^']+)'(?:[ \t]+showPlaygroundButton)?[ \t]*\r?\n((?:[^\n]*\n)*?)```[ \t]*\r?$",
    )
    .expect("Invalid regex")
});

/// Rewrite dialect blocks into renderable markup
///
/// Rules run in order, each over the output of the previous one:
/// incorrect blocks, correct blocks, stray markers, option fences.
/// Running it again on its own output changes nothing.
pub fn transform(body: &str) -> String {
    let text = INCORRECT_BLOCK.replace_all(body, |caps: &Captures| {
        example_block("incorrect", &caps[1])
    });
    let text = CORRECT_BLOCK.replace_all(&text, |caps: &Captures| {
        example_block("correct", &caps[1])
    });
    let text = STRAY_BLOCK_OPENER.replace_all(&text, "");
    let text = STRAY_BLOCK_CLOSER.replace_all(&text, "");
    let text = OPTION_FENCE.replace_all(&text, |caps: &Captures| {
        option_code_block(&caps[1], &caps[2], &caps[3])
    });

    text.into_owned()
}

/// `::: <kind>` opener, at least one content line, bare `:::` closer
fn example_block_regex(kind: &str) -> Regex {
    Regex::new(&format!(
        r"(?m)^[ \t]*::: {kind}\b[^\n]*\n((?:{BLOCK_LINE})+?)[ \t]*:::[ \t]*\r?$"
    ))
    .expect("Invalid regex")
}

fn example_block(kind: &str, content: &str) -> String {
    format!(
        "<div class=\"eslint-block {kind}\">\n\n{}\n\n</div>",
        trim_blank_lines(content)
    )
}

fn option_code_block(language: &str, option: &str, code: &str) -> String {
    format!(
        "<div class=\"code-block-with-option\">\n<div class=\"code-option\">{}</div>\n\n```{language}\n{}\n```\n</div>",
        escape_html(option),
        trim_blank_lines(code)
    )
}

/// Strip leading blank lines and trailing whitespace, keeping first-line indentation
fn trim_blank_lines(text: &str) -> &str {
    let start = text
        .find(|c: char| !c.is_whitespace())
        .map_or(text.len(), |first| {
            text[..first].rfind('\n').map_or(0, |newline| newline + 1)
        });
    text[start..].trim_end()
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
