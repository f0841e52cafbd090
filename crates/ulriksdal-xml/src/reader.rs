#![forbid(unsafe_code)]

//! The raw token reader trait and a replayable token buffer.

use crate::token::Token;
use ulriksdal_core::Result;

/// A source of raw XML tokens in document order.
///
/// `None` marks the end of the stream. Errors from the underlying parser
/// surface verbatim and terminate the stream.
pub trait RawTokenReader {
    fn next_token(&mut self) -> Result<Option<Token>>;
}

impl<R: RawTokenReader + ?Sized> RawTokenReader for &mut R {
    fn next_token(&mut self) -> Result<Option<Token>> {
        (**self).next_token()
    }
}

/// An in-memory token sequence behind the reader interface.
///
/// Lets a captured subtree be canonicalized through the same interface a
/// live parser exposes.
#[derive(Debug, Clone, Default)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenBuffer {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Reset the cursor so the sequence replays from the start.
    pub fn rewind(&mut self) {
        self.pos = 0;
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<Vec<Token>> for TokenBuffer {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

impl RawTokenReader for TokenBuffer {
    fn next_token(&mut self) -> Result<Option<Token>> {
        match self.tokens.get(self.pos) {
            Some(token) => {
                self.pos += 1;
                Ok(Some(token.clone()))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::QName;

    #[test]
    fn buffer_yields_tokens_in_order_then_none() {
        let mut buf = TokenBuffer::new(vec![
            Token::CharData("a".into()),
            Token::EndElement(QName::new("", "root")),
        ]);
        assert_eq!(buf.next_token().unwrap(), Some(Token::CharData("a".into())));
        assert_eq!(
            buf.next_token().unwrap(),
            Some(Token::EndElement(QName::new("", "root")))
        );
        assert_eq!(buf.next_token().unwrap(), None);
        assert_eq!(buf.next_token().unwrap(), None);
    }

    #[test]
    fn buffer_rewinds() {
        let mut buf = TokenBuffer::new(vec![Token::Comment("c".into())]);
        assert!(buf.next_token().unwrap().is_some());
        assert!(buf.next_token().unwrap().is_none());
        buf.rewind();
        assert_eq!(buf.next_token().unwrap(), Some(Token::Comment("c".into())));
    }
}
