//! Tests for markdown dialect rewriting

use ruledocs_core::transform;

const RULE_BODY: &str = r#"## Rule Details

Examples of **incorrect** code for this rule:

::: incorrect

```js
if (x == 42) { }
```

:::

Examples of **correct** code for this rule:

::: correct { "sourceType": "script" }

```js
if (x === 42) { }
```

:::

## Options

```ts option='{ "allow": ["warn"] }' showPlaygroundButton

console.log('ok');
```
"#;

#[test]
fn test_incorrect_block_becomes_container() {
    let output = transform("::: incorrect\n\n```js\nif (a == b) {}\n```\n\n:::\n");

    assert_eq!(
        output,
        "<div class=\"eslint-block incorrect\">\n\n```js\nif (a == b) {}\n```\n\n</div>\n"
    );
}

#[test]
fn test_correct_block_becomes_container() {
    let output = transform("Intro\n\n::: correct\nlet x = 1;\n:::\n\nOutro");

    assert_eq!(
        output,
        "Intro\n\n<div class=\"eslint-block correct\">\n\nlet x = 1;\n\n</div>\n\nOutro"
    );
}

#[test]
fn test_block_header_with_parser_options() {
    let output = transform("::: incorrect { \"sourceType\": \"commonjs\" }\n\nvar x;\n\n:::");

    assert_eq!(
        output,
        "<div class=\"eslint-block incorrect\">\n\nvar x;\n\n</div>"
    );
}

#[test]
fn test_block_content_keeps_indentation() {
    let output = transform("::: correct\n\n    indented();\n:::");

    assert_eq!(
        output,
        "<div class=\"eslint-block correct\">\n\n    indented();\n\n</div>"
    );
}

#[test]
fn test_stray_markers_are_removed() {
    assert_eq!(transform("Intro\n::: correct\n"), "Intro\n\n");
    assert_eq!(transform("before\n:::\nafter"), "before\n\nafter");
    assert_eq!(transform("::: incorrect\n:::"), "\n");
}

#[test]
fn test_empty_block_does_not_swallow_next_block() {
    let output = transform("::: incorrect\n:::\n\n::: correct\n\nfoo === bar;\n\n:::\n");

    assert_eq!(
        output,
        "\n\n\n<div class=\"eslint-block correct\">\n\nfoo === bar;\n\n</div>\n"
    );
}

#[test]
fn test_block_content_never_spans_markers() {
    let output = transform("::: incorrect\nA\n::: correct\nB\n:::\n");

    assert_eq!(
        output,
        "\nA\n<div class=\"eslint-block correct\">\n\nB\n\n</div>\n"
    );
}

#[test]
fn test_option_fence_with_empty_code() {
    let output = transform("```ts option='a'\n```\n\nText\n\n```ts option='b'\nx\n```\n");

    assert_eq!(
        output,
        "<div class=\"code-block-with-option\">\n<div class=\"code-option\">a</div>\n\n```ts\n\n```\n</div>\n\nText\n\n<div class=\"code-block-with-option\">\n<div class=\"code-option\">b</div>\n\n```ts\nx\n```\n</div>\n"
    );
}

#[test]
fn test_option_fence_with_playground_flag() {
    let output = transform(
        "```ts option='{ \"allow\": [\"warn\"] }' showPlaygroundButton\nconsole.log('x');\n```",
    );

    assert_eq!(
        output,
        "<div class=\"code-block-with-option\">\n<div class=\"code-option\">{ \"allow\": [\"warn\"] }</div>\n\n```ts\nconsole.log('x');\n```\n</div>"
    );
}

#[test]
fn test_option_fence_without_playground_flag() {
    let output = transform("```js option='\"always\"'\n\nfoo();\n\n```");

    assert_eq!(
        output,
        "<div class=\"code-block-with-option\">\n<div class=\"code-option\">\"always\"</div>\n\n```js\nfoo();\n```\n</div>"
    );
}

#[test]
fn test_option_value_is_html_escaped() {
    let output = transform("```ts option='Array<string> & more'\nlet a: string[];\n```");

    assert!(output.contains("<div class=\"code-option\">Array&lt;string&gt; &amp; more</div>"));
}

#[test]
fn test_plain_markdown_is_untouched() {
    let body = "# Title\n\nSome `code` and a table:\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n```js\nlet x;\n```\n";

    assert_eq!(transform(body), body);
}

#[test]
fn test_full_document() {
    let output = transform(RULE_BODY);

    assert!(output.contains("<div class=\"eslint-block incorrect\">\n\n```js\nif (x == 42) { }\n```\n\n</div>"));
    assert!(output.contains("<div class=\"eslint-block correct\">\n\n```js\nif (x === 42) { }\n```\n\n</div>"));
    assert!(output.contains("<div class=\"code-option\">{ \"allow\": [\"warn\"] }</div>"));
    assert!(!output.contains(":::"));
    assert!(!output.contains("option='"));
}

#[test]
fn test_transform_is_idempotent() {
    let inputs = [
        RULE_BODY,
        "::: incorrect\nA\n::: correct\nB\n:::\n",
        "Intro\n::: correct\n",
        "nothing to do here",
        "```ts option='x'\ncode\n```\n\n::: incorrect\n\n```ts option='y'\nmore\n```\n\n:::",
        "```ts option='a'\n```\n\nText\n\n```ts option='b'\nx\n```\n",
        "::: incorrect\n:::\n\n::: correct\n\nfoo === bar;\n\n:::\n",
    ];

    for input in inputs {
        let once = transform(input);
        assert_eq!(transform(&once), once, "not idempotent for {input:?}");
    }
}
