use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static PLAIN_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("plain word pattern is valid")
});

/// Keywords reserved by at least one of the preset dialects, lowercase.
static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "all", "alter", "and", "as", "asc", "between", "by", "case", "check", "column", "constraint", "create",
        "cross", "default", "delete", "desc", "distinct", "drop", "else", "end", "exists", "false", "foreign",
        "from", "full", "grant", "group", "having", "in", "index", "inner", "insert", "into", "is", "join", "key",
        "left", "like", "limit", "natural", "not", "null", "offset", "on", "or", "order", "outer", "primary",
        "references", "right", "select", "set", "table", "then", "to", "true", "union", "unique", "update", "user",
        "using", "values", "when", "where", "with",
    ]
    .into_iter()
    .collect()
});

fn is_reserved(name: &str) -> bool {
    RESERVED.contains(name.to_ascii_lowercase().as_str())
}

/// How a bound value's placeholder is spelled in the rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceholderStyle {
    /// `?` for every value
    #[default]
    Question,
    /// `$1`, `$2`, ... numbered by bind position
    Numbered,
}

/// When identifiers are wrapped in the dialect's quote character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuotePolicy {
    /// Render names verbatim.
    #[default]
    Never,
    /// Quote every name.
    Always,
    /// Quote names that are not plain `[A-Za-z_][A-Za-z0-9_]*` words, and
    /// reserved keywords.
    WhenNeeded,
}

/// Dialect settings consulted while serializing.
///
/// - `placeholder` controls how bound values appear in the text.
/// - `quote` is the character wrapped around quoted identifiers.
/// - `quote_policy` decides which identifiers get quoted.
#[derive(Debug, Clone, PartialEq)]
pub struct DialectConfig {
    /// Placeholder spelling
    pub placeholder: PlaceholderStyle,
    /// Identifier quote character
    pub quote: char,
    /// Identifier quoting rule
    pub quote_policy: QuotePolicy,
}

impl Default for DialectConfig {
    fn default() -> Self {
        Self {
            placeholder: Default::default(),
            quote: '"',
            quote_policy: Default::default(),
        }
    }
}

impl DialectConfig {
    /// Create default configuration: `?` placeholders, names verbatim.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with every setting explicit.
    pub fn from(placeholder: PlaceholderStyle, quote: char, quote_policy: QuotePolicy) -> Self {
        Self {
            placeholder,
            quote,
            quote_policy,
        }
    }

    /// Convenience: SQLite style, `?` placeholders and `"` quotes when needed.
    pub fn sqlite() -> Self {
        Self::from(PlaceholderStyle::Question, '"', QuotePolicy::WhenNeeded)
    }

    /// Convenience: PostgreSQL style, `$n` placeholders and `"` quotes when needed.
    pub fn postgres() -> Self {
        Self::from(PlaceholderStyle::Numbered, '"', QuotePolicy::WhenNeeded)
    }

    /// Convenience: MySQL style, `?` placeholders and backtick quotes when needed.
    pub fn mysql() -> Self {
        Self::from(PlaceholderStyle::Question, '`', QuotePolicy::WhenNeeded)
    }

    /// Placeholder text for the bind at 1-based `position`.
    pub fn placeholder(&self, position: usize) -> String {
        match self.placeholder {
            PlaceholderStyle::Question => "?".to_string(),
            PlaceholderStyle::Numbered => format!("${}", position),
        }
    }

    /// Applies the quote policy to a name, doubling embedded quote characters.
    pub fn quote_identifier(&self, name: &str) -> String {
        let quoted = match self.quote_policy {
            QuotePolicy::Never => false,
            QuotePolicy::Always => true,
            QuotePolicy::WhenNeeded => !PLAIN_WORD.is_match(name) || is_reserved(name),
        };

        if !quoted {
            return name.to_string();
        }

        let escaped = name.replace(self.quote, &format!("{}{}", self.quote, self.quote));
        format!("{}{}{}", self.quote, escaped, self.quote)
    }
}
