// Whitespace-delimited text tokens

/// A run of non-whitespace characters in a text.
///
/// Tokens carry their raw text, punctuation included. Positions and lengths
/// are measured in characters, not bytes, so they can be mapped back onto an
/// editor's cursor offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The text content of this token.
    pub text: String,

    /// Length of the token in characters.
    pub token_len: usize,

    /// Position of this token within the text (character offset).
    pub pos: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(text: impl Into<String>, pos: usize) -> Self {
        let text = text.into();
        let token_len = text.chars().count();
        Self {
            text,
            token_len,
            pos,
        }
    }

    /// Character offset one past the last character of this token.
    pub fn end(&self) -> usize {
        self.pos + self.token_len
    }
}
