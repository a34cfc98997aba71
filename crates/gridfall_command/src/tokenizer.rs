//! Input line tokenization.
//!
//! Converts one raw line of player input into a sequence of word tokens.

/// Tokenizes a raw input line.
///
/// A token is either a maximal run of word characters and hyphens, or a
/// double-quoted span whose quotes are stripped and whose internal
/// whitespace survives. An unterminated quote runs to the end of the line.
/// Tokens keep their case; normalization happens at lookup sites. This is
/// a pure function: the same line always yields the same tokens.
#[must_use]
pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars();

    while let Some(ch) = chars.next() {
        if ch == '"' {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            let mut quoted = String::new();
            for c in chars.by_ref() {
                if c == '"' {
                    break;
                }
                quoted.push(c);
            }
            tokens.push(quoted);
        } else if ch.is_alphanumeric() || ch == '_' || ch == '-' {
            current.push(ch);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
