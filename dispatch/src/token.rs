//! Raw token splitting.
//!
//! Separates a flat argument list into named flags and ordered positionals
//! before any schema is consulted. The split is a single linear pass with
//! one token of lookahead and never fails: malformed input produces a
//! best-effort split for the command parser to validate.

use std::collections::HashMap;

/// Raw tokens split into flags and positional arguments.
///
/// Flag values are unparsed strings (empty for presence-only flags);
/// positionals preserve their relative order. No type validation or schema
/// matching has happened yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTokenSplit {
    /// Flag tokens mapped to their raw value (empty string if none).
    pub flags: HashMap<String, String>,
    /// Positional tokens in input order.
    pub positionals: Vec<String>,
}

/// Returns `true` if the token would be classified as a flag.
///
/// A flag token is longer than two characters and begins with two dashes;
/// everything else (including a bare `--`) is positional.
pub fn is_flag_token(token: &str) -> bool {
    token.len() > 2 && token.starts_with("--")
}

/// Splits raw tokens into flags and positionals.
///
/// Scans left to right. A flag token tentatively records an empty value;
/// when the next token exists and is not itself a flag, it is consumed as
/// the value. A flag that is the last token, or is followed by another
/// flag, stays presence-only. Duplicate flag tokens overwrite: the last
/// occurrence wins. There is no `--flag=value`, no `-x` short form, and no
/// `--` separator handling.
///
/// # Examples
///
/// ```
/// use cli_engine_dispatch::split_tokens;
///
/// let tokens = ["song.mp3", "--volume", "7", "--loop"].map(String::from);
/// let split = split_tokens(&tokens);
///
/// assert_eq!(split.positionals, vec!["song.mp3"]);
/// assert_eq!(split.flags["--volume"], "7");
/// assert_eq!(split.flags["--loop"], "");
/// ```
pub fn split_tokens(tokens: &[String]) -> RawTokenSplit {
    let mut split = RawTokenSplit::default();

    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if !is_flag_token(token) {
            split.positionals.push(token.clone());
            i += 1;
            continue;
        }

        // Presence-only until a value token proves otherwise.
        split.flags.insert(token.clone(), String::new());
        if let Some(next) = tokens.get(i + 1) {
            if !is_flag_token(next) {
                split.flags.insert(token.clone(), next.clone());
                i += 1;
            }
        }
        i += 1;
    }

    split
}
