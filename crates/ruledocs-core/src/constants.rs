//! Pipeline constants

// ============================================================================
// RULE FILES
// ============================================================================

/// Extension of rule documentation files
pub const RULE_FILE_EXTENSION: &str = "md";

/// Separator between plugin token and rule name segments in a file stem
pub const PLUGIN_SEPARATOR: char = '_';

/// Separator used to rejoin rule name segments
pub const RULE_NAME_SEPARATOR: &str = "/";

/// Frontmatter delimiter line
pub const FRONTMATTER_DELIMITER: &str = "---";

// ============================================================================
// IDENTITY
// ============================================================================

/// Display name for rules that ship with ESLint itself
pub const BUILT_IN_PLUGIN: &str = "Built-in";

/// Documentation link used when no template exists for a plugin
pub const FALLBACK_DOCUMENTATION_URL: &str = "#";

/// Replacement for characters not allowed in an id
pub const ID_REPLACEMENT: char = '-';

/// Plugin token to display name
pub const PLUGIN_DISPLAY_NAMES: &[(&str, &str)] = &[
    ("import", "eslint-plugin-import"),
    ("typescript-eslint", "@typescript-eslint"),
    ("react", "eslint-plugin-react"),
    ("react-hooks", "eslint-plugin-react-hooks"),
    ("jsx-a11y", "eslint-plugin-jsx-a11y"),
    ("unicorn", "eslint-plugin-unicorn"),
];

/// Documentation URL template for built-in rules (`{rule}` is substituted)
pub const BUILT_IN_DOCUMENTATION_TEMPLATE: &str = "https://eslint.org/docs/latest/rules/{rule}";

/// Plugin token to documentation URL template (`{rule}` is substituted)
pub const PLUGIN_DOCUMENTATION_TEMPLATES: &[(&str, &str)] = &[
    (
        "import",
        "https://github.com/import-js/eslint-plugin-import/blob/main/docs/rules/{rule}.md",
    ),
    (
        "typescript-eslint",
        "https://typescript-eslint.io/rules/{rule}",
    ),
    (
        "react",
        "https://github.com/jsx-eslint/eslint-plugin-react/blob/master/docs/rules/{rule}.md",
    ),
    (
        "jsx-a11y",
        "https://github.com/jsx-eslint/eslint-plugin-jsx-a11y/blob/main/docs/rules/{rule}.md",
    ),
    (
        "unicorn",
        "https://github.com/sindresorhus/eslint-plugin-unicorn/blob/main/docs/rules/{rule}.md",
    ),
];

// ============================================================================
// ORDERING
// ============================================================================

/// Plugin display names in presentation order
pub const PLUGIN_PRIORITY: &[&str] = &[
    BUILT_IN_PLUGIN,
    "eslint-plugin-import",
    "@typescript-eslint",
    "eslint-plugin-react",
    "eslint-plugin-react-hooks",
    "eslint-plugin-jsx-a11y",
    "eslint-plugin-unicorn",
];

// ============================================================================
// DESCRIPTION HEURISTICS
// ============================================================================

/// Minimum trimmed length (in characters) of a line taken as a description
pub const MIN_DESCRIPTION_CHARS: usize = 20;

/// Number of leading characters compared when matching a fuzzy description
pub const DESCRIPTION_MATCH_PREFIX_CHARS: usize = 50;

// ============================================================================
// PREVIEW LIMITS
// ============================================================================

/// Number of records kept by the `minimal` preview
pub const MINIMAL_PREVIEW_COUNT: usize = 2;
