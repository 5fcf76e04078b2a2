//! Line tokenizer for the reference buffer
//!
//! A small logos lexer for C-family source lines. It only needs to be good
//! enough to tell literals apart from everything else.

use logos::Logos;

/// Raw lexemes recognised on a single line
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme {
    #[regex(r#""([^"\\]|\\.)*""#)]
    #[regex(r"'([^'\\]|\\.)*'")]
    #[regex(r"`([^`\\]|\\.)*`")]
    Str,

    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    #[regex(r"0[xX][0-9a-fA-F]+")]
    Number,

    #[token("true")]
    #[token("false")]
    Boolean,

    #[token("null")]
    #[token("undefined")]
    #[token("NaN")]
    #[token("Infinity")]
    Atom,

    #[token("const")]
    #[token("let")]
    #[token("var")]
    #[token("function")]
    #[token("return")]
    #[token("if")]
    #[token("else")]
    #[token("for")]
    #[token("while")]
    #[token("import")]
    #[token("export")]
    #[token("from")]
    #[token("new")]
    #[token("class")]
    #[token("extends")]
    Keyword,

    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Identifier,

    #[regex(r"//[^\n]*")]
    Comment,

    #[regex(r"[-+*%=<>!&|^~?:]+")]
    #[token("/")]
    Operator,

    #[regex(r"[{}()\[\];,.]")]
    Punctuation,

    #[regex(r"[ \t]+")]
    Whitespace,

    /// Runs of non-ASCII text outside strings and comments
    #[regex(r"[^\x00-\x7F]+")]
    Other,
}

impl Lexeme {
    /// Native style name reported to middleware, `None` for unstyled text
    pub fn style(self) -> Option<&'static str> {
        match self {
            Lexeme::Str => Some("string"),
            Lexeme::Number => Some("number"),
            Lexeme::Boolean => Some("boolean"),
            Lexeme::Atom => Some("atom"),
            Lexeme::Keyword => Some("keyword"),
            Lexeme::Identifier => Some("variable"),
            Lexeme::Comment => Some("comment"),
            Lexeme::Operator => Some("operator"),
            Lexeme::Punctuation => Some("punctuation"),
            Lexeme::Whitespace | Lexeme::Other => None,
        }
    }
}

/// A styled span of one line, in character offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan<'a> {
    /// Start character (inclusive)
    pub start: usize,
    /// End character (exclusive)
    pub end: usize,
    pub text: &'a str,
    pub style: Option<&'static str>,
}

/// Split a line (without its line ending) into contiguous styled spans.
///
/// Text the lexer rejects, such as an unterminated string, becomes an
/// unstyled span. Identifiers right after a `.` are styled as properties.
pub fn lex_line(line: &str) -> Vec<LineSpan<'_>> {
    let mut lexer = Lexeme::lexer(line);
    let mut spans: Vec<LineSpan<'_>> = Vec::new();
    let mut byte_cursor = 0;
    let mut char_cursor = 0;

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        char_cursor += line[byte_cursor..range.start].chars().count();
        let text = &line[range.clone()];
        let start = char_cursor;
        char_cursor += text.chars().count();
        byte_cursor = range.end;

        let style = match result {
            Ok(Lexeme::Identifier) if spans.last().is_some_and(|prev| prev.text == ".") => {
                Some("property")
            }
            Ok(lexeme) => lexeme.style(),
            Err(()) => None,
        };

        spans.push(LineSpan {
            start,
            end: char_cursor,
            text,
            style,
        });
    }

    spans
}
