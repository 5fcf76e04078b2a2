//! Classified token spans
//!
//! Defines the token classification set, the raw token shape reported by
//! the editor's tokenizer, and the line-stamped [`Token`] value the
//! middleware dispatches.

use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

/// Token classifications known to the middleware
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    String,
    Number,
    Boolean,
    /// Built-in constants such as `null`
    Atom,
    Keyword,
    Variable,
    Property,
    /// A definition site (function or variable name being declared)
    Def,
    Comment,
    Operator,
    Punctuation,
    Tag,
    Attribute,
    Meta,
}

/// Token kinds eligible for click-to-select
pub const LITERAL_KINDS: [TokenKind; 3] = [TokenKind::String, TokenKind::Number, TokenKind::Boolean];

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Boolean => "boolean",
            TokenKind::Atom => "atom",
            TokenKind::Keyword => "keyword",
            TokenKind::Variable => "variable",
            TokenKind::Property => "property",
            TokenKind::Def => "def",
            TokenKind::Comment => "comment",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Tag => "tag",
            TokenKind::Attribute => "attribute",
            TokenKind::Meta => "meta",
        }
    }

    /// Whether this kind belongs to the literal set
    pub fn is_literal(self) -> bool {
        LITERAL_KINDS.contains(&self)
    }

    /// Classify a native token type name.
    ///
    /// Native names may list several styles separated by whitespace
    /// (`"string property"`) and each style may be hierarchical
    /// (`"string.special"`). The first style that resolves wins; an empty or
    /// unrecognised name is unclassified.
    pub fn classify(native: &str) -> Option<TokenKind> {
        native.split_whitespace().find_map(|style| {
            // Try exact match first, then progressively shorter parents
            let mut current = style;
            loop {
                if let Ok(kind) = current.parse() {
                    return Some(kind);
                }
                let dot_pos = current.rfind('.')?;
                current = &current[..dot_pos];
            }
        })
    }
}

impl FromStr for TokenKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(TokenKind::String),
            "number" => Ok(TokenKind::Number),
            "boolean" => Ok(TokenKind::Boolean),
            "atom" => Ok(TokenKind::Atom),
            "keyword" => Ok(TokenKind::Keyword),
            "variable" => Ok(TokenKind::Variable),
            "property" => Ok(TokenKind::Property),
            "def" => Ok(TokenKind::Def),
            "comment" => Ok(TokenKind::Comment),
            "operator" => Ok(TokenKind::Operator),
            "punctuation" => Ok(TokenKind::Punctuation),
            "tag" => Ok(TokenKind::Tag),
            "attribute" => Ok(TokenKind::Attribute),
            "meta" => Ok(TokenKind::Meta),
            _ => Err(()),
        }
    }
}

/// A token as reported by the editor's tokenizer, before line stamping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NativeToken {
    /// Start character (0-indexed, inclusive)
    pub start: usize,
    /// End character (exclusive)
    pub end: usize,
    /// Source text of the token
    pub string: String,
    /// Style name, `None` for unstyled text such as whitespace
    pub kind: Option<String>,
}

impl NativeToken {
    /// An unstyled, zero-width token at `ch`
    pub fn empty(ch: usize) -> Self {
        Self {
            start: ch,
            end: ch,
            string: String::new(),
            kind: None,
        }
    }
}

/// A classified span of editor content at resolution time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// `None` means "no classification", serialized as an empty `type`
    #[serde(rename = "type", serialize_with = "serialize_kind")]
    pub kind: Option<TokenKind>,
    pub text: String,
    pub line: usize,
    pub start_char: usize,
    pub end_char: usize,
}

impl Token {
    /// Build a token from a tokenizer result found on `line`
    pub fn from_native(native: &NativeToken, line: usize) -> Self {
        Self {
            kind: native.kind.as_deref().and_then(TokenKind::classify),
            text: native.string.clone(),
            line,
            start_char: native.start,
            end_char: native.end.max(native.start),
        }
    }

    /// Whether the token has a classification at all
    pub fn is_classified(&self) -> bool {
        self.kind.is_some()
    }

    /// Whether the token can be selected by a modifier-click
    pub fn is_literal(&self) -> bool {
        self.kind.is_some_and(TokenKind::is_literal)
    }

    pub fn len_chars(&self) -> usize {
        self.end_char - self.start_char
    }
}

fn serialize_kind<S>(kind: &Option<TokenKind>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(kind.map_or("", TokenKind::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn native(kind: Option<&str>, string: &str, start: usize, end: usize) -> NativeToken {
        NativeToken {
            start,
            end,
            string: string.to_string(),
            kind: kind.map(str::to_string),
        }
    }

    #[test]
    fn test_classify_plain_names() {
        assert_eq!(TokenKind::classify("string"), Some(TokenKind::String));
        assert_eq!(TokenKind::classify("number"), Some(TokenKind::Number));
        assert_eq!(TokenKind::classify("boolean"), Some(TokenKind::Boolean));
        assert_eq!(TokenKind::classify("keyword"), Some(TokenKind::Keyword));
    }

    #[test]
    fn test_classify_compound_and_hierarchical_names() {
        assert_eq!(TokenKind::classify("string property"), Some(TokenKind::String));
        assert_eq!(TokenKind::classify("string.special"), Some(TokenKind::String));
        assert_eq!(TokenKind::classify("bracket number"), Some(TokenKind::Number));
    }

    #[test]
    fn test_classify_unknown_or_empty() {
        assert_eq!(TokenKind::classify(""), None);
        assert_eq!(TokenKind::classify("   "), None);
        assert_eq!(TokenKind::classify("bracket"), None);
    }

    #[test]
    fn test_literal_set() {
        assert!(TokenKind::String.is_literal());
        assert!(TokenKind::Number.is_literal());
        assert!(TokenKind::Boolean.is_literal());
        assert!(!TokenKind::Atom.is_literal());
        assert!(!TokenKind::Variable.is_literal());
    }

    #[test]
    fn test_from_native_stamps_line() {
        let token = Token::from_native(&native(Some("number"), "42", 4, 6), 9);
        assert_eq!(
            token,
            Token {
                kind: Some(TokenKind::Number),
                text: "42".to_string(),
                line: 9,
                start_char: 4,
                end_char: 6,
            }
        );
        assert!(token.is_literal());
        assert_eq!(token.len_chars(), 2);
    }

    #[test]
    fn test_from_native_unstyled() {
        let token = Token::from_native(&native(None, "  ", 2, 4), 0);
        assert!(!token.is_classified());
        assert!(!token.is_literal());
    }

    #[test]
    fn test_from_native_keeps_start_le_end() {
        let token = Token::from_native(&native(Some("string"), "", 5, 3), 0);
        assert!(token.start_char <= token.end_char);
    }
}
