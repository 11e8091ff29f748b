//! # Token Display Info

use crate::types::TokenType;
use compact_str::CompactString;
use serde::Serialize;

/// One ``(id, token)`` entry, flagged when it is a special token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(bound(serialize = "T: TokenType"))]
pub struct TokenInfo<T: TokenType> {
    /// The token id.
    pub id: T,

    /// The token string.
    pub token: CompactString,

    /// Whether the token is a special token.
    pub is_special: bool,
}

impl<T: TokenType> TokenInfo<T> {
    /// Create a new token info.
    pub fn new<S: Into<CompactString>>(
        id: T,
        token: S,
        is_special: bool,
    ) -> Self {
        Self {
            id,
            token: token.into(),
            is_special,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize() {
        let info = TokenInfo::<u32>::new(5, "cat", false);
        assert_eq!(
            serde_json::to_string(&info).unwrap(),
            r#"{"id":5,"token":"cat","is_special":false}"#
        );
    }
}
