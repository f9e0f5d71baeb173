//! Token model: a type tag paired with the bytes it matched.
//!
//! # Invariants
//!
//! - Every token other than [`TokenType::EndOfInput`] has a non-empty value.
//! - The `EndOfInput` token has an empty value.
//! - A token owns its bytes; it stays valid after the buffer it was carved
//!   from is dropped.
//!
//! # Serialized forms
//!
//! Tokens serialize as `{"type": <name>, "value": <bytes>}` through serde,
//! and as `<token type="Name">value</token>` through [`Token::to_markup`].

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Type tag of a [`Token`].
///
/// The base tags come from single-byte classification. Composed tokenizers
/// produce `Word` and `Element`; reclassification produces the structural
/// tags. Callers may introduce their own tags with [`TokenType::Named`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenType {
    // Base tags
    Letter,
    Numeral,
    Punctuation,
    Space,
    EndOfInput,

    // Composed tags
    Word,
    Element,

    // Structural single-character tags
    OpenCurlyBracket,
    CloseCurlyBracket,
    CurlyBracket,
    OpenSquareBracket,
    CloseSquareBracket,
    SquareBracket,
    OpenAngleBracket,
    CloseAngleBracket,
    AngleBracket,
    AtSign,
    EqualSign,
    DoubleQuote,
    SingleQuote,
    Comma,

    /// Caller-defined tag.
    Named(Cow<'static, str>),
}

/// Every built-in tag, in declaration order. Used for name lookup.
const BUILTIN: [TokenType; 21] = [
    TokenType::Letter,
    TokenType::Numeral,
    TokenType::Punctuation,
    TokenType::Space,
    TokenType::EndOfInput,
    TokenType::Word,
    TokenType::Element,
    TokenType::OpenCurlyBracket,
    TokenType::CloseCurlyBracket,
    TokenType::CurlyBracket,
    TokenType::OpenSquareBracket,
    TokenType::CloseSquareBracket,
    TokenType::SquareBracket,
    TokenType::OpenAngleBracket,
    TokenType::CloseAngleBracket,
    TokenType::AngleBracket,
    TokenType::AtSign,
    TokenType::EqualSign,
    TokenType::DoubleQuote,
    TokenType::SingleQuote,
    TokenType::Comma,
];

impl TokenType {
    /// Build a caller-defined tag from a static name.
    ///
    /// Usable in `const` context, e.g. for reclassification rules.
    pub const fn named(name: &'static str) -> Self {
        TokenType::Named(Cow::Borrowed(name))
    }

    /// Human-readable name, used by every serialized form.
    pub fn as_str(&self) -> &str {
        match self {
            TokenType::Letter => "Letter",
            TokenType::Numeral => "Numeral",
            TokenType::Punctuation => "Punctuation",
            TokenType::Space => "Space",
            TokenType::EndOfInput => "EndOfInput",
            TokenType::Word => "Word",
            TokenType::Element => "Element",
            TokenType::OpenCurlyBracket => "OpenCurlyBracket",
            TokenType::CloseCurlyBracket => "CloseCurlyBracket",
            TokenType::CurlyBracket => "CurlyBracket",
            TokenType::OpenSquareBracket => "OpenSquareBracket",
            TokenType::CloseSquareBracket => "CloseSquareBracket",
            TokenType::SquareBracket => "SquareBracket",
            TokenType::OpenAngleBracket => "OpenAngleBracket",
            TokenType::CloseAngleBracket => "CloseAngleBracket",
            TokenType::AngleBracket => "AngleBracket",
            TokenType::AtSign => "AtSign",
            TokenType::EqualSign => "EqualSign",
            TokenType::DoubleQuote => "DoubleQuote",
            TokenType::SingleQuote => "SingleQuote",
            TokenType::Comma => "Comma",
            TokenType::Named(name) => &**name,
        }
    }

    /// Returns `true` for the four tags a single byte can classify as.
    pub fn is_base(&self) -> bool {
        matches!(
            self,
            TokenType::Letter | TokenType::Numeral | TokenType::Punctuation | TokenType::Space
        )
    }

    fn builtin(name: &str) -> Option<TokenType> {
        BUILTIN.iter().find(|t| t.as_str() == name).cloned()
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TokenType {
    fn from(name: &str) -> Self {
        TokenType::builtin(name).unwrap_or_else(|| TokenType::Named(Cow::Owned(name.to_owned())))
    }
}

impl From<String> for TokenType {
    fn from(name: String) -> Self {
        TokenType::builtin(&name).unwrap_or(TokenType::Named(Cow::Owned(name)))
    }
}

/// Parsing never fails: unknown names become [`TokenType::Named`].
impl FromStr for TokenType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TokenType::from(s))
    }
}

impl Serialize for TokenType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TokenType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(TokenType::from)
    }
}

/// A type tag and the raw bytes it matched.
///
/// The tokenizers in this crate only produce tokens that satisfy the module
/// invariants. Both fields are public and neither [`Token::new`] nor
/// deserialization checks them, so callers building tokens by hand must keep
/// `value` non-empty for every type except `EndOfInput`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenType,
    pub value: Vec<u8>,
}

impl Token {
    /// Pair `kind` with `value` as given. No invariant is checked.
    pub fn new(kind: TokenType, value: impl Into<Vec<u8>>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// The end-of-input sentinel: `EndOfInput` with an empty value.
    pub fn end_of_input() -> Self {
        Self {
            kind: TokenType::EndOfInput,
            value: Vec::new(),
        }
    }

    #[inline]
    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenType::EndOfInput
    }

    /// Returns `true` if this token has type `kind`.
    #[inline]
    pub fn is(&self, kind: &TokenType) -> bool {
        self.kind == *kind
    }

    /// Returns the value as UTF-8 text, if it is valid UTF-8.
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.value).ok()
    }

    /// Render as `<token type="Name">value</token>`.
    ///
    /// `&`, `<`, `>` and `"` are escaped as entities; bytes outside
    /// printable ASCII (other than tab, CR and LF) are written as numeric
    /// character references so the output is always ASCII.
    pub fn to_markup(&self) -> String {
        let mut out = String::with_capacity(self.value.len() + 32);
        out.push_str("<token type=\"");
        push_escaped(&mut out, self.kind.as_str().as_bytes());
        out.push_str("\">");
        push_escaped(&mut out, &self.value);
        out.push_str("</token>");
        out
    }
}

fn push_escaped(out: &mut String, bytes: &[u8]) {
    use fmt::Write;

    for &b in bytes {
        match b {
            b'&' => out.push_str("&amp;"),
            b'<' => out.push_str("&lt;"),
            b'>' => out.push_str("&gt;"),
            b'"' => out.push_str("&quot;"),
            b'\t' | b'\n' | b'\r' | 0x20..=0x7E => out.push(char::from(b)),
            // Writing into a String cannot fail.
            _ => {
                let _ = write!(out, "&#x{b:02X};");
            }
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}> = \"{}\"", self.kind, self.value.escape_ascii())
    }
}
