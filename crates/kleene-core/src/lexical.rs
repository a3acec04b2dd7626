//! Lexical rules for state and transition-symbol tokens.
//!
//! Pure, stateless predicates. The builder applies them while resolving a
//! description; external parsers may call them directly for early feedback.

/// Check whether a token is a valid state name: non-empty, ASCII letters and
/// digits only.
pub fn is_valid_state_name(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Check whether a token is a valid transition symbol: non-empty, ASCII
/// letters, digits, and underscore only.
pub fn is_valid_symbol(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
