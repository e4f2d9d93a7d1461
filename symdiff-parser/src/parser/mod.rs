pub mod ast;
pub mod error;
pub mod token;

use error::{Error, kind};
use super::tokenizer::{tokenize_complete, Token};
use std::ops::Range;

/// The name of the only variable that expressions can refer to.
pub const VARIABLE: &str = "x";

/// The maximum number of applications that can be nested inside each other.
///
/// Every stage after parsing walks the expression recursively, so the nesting depth is limited to
/// keep those stages from overflowing the stack.
pub const MAX_NESTING: usize = 256;

/// A high-level parser for prefix expressions. This is the type to use to parse an arbitrary
/// piece of source into an abstract syntax tree.
///
/// The parser walks an owned array of tokens with a cursor. After a successful
/// [`Parser::try_parse`], the tokens from the cursor onwards are the ones that remain unparsed
/// (see [`Parser::remaining`]).
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The number of applications the cursor is currently inside of.
    depth: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
            depth: 0,
        }
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the index of the next token to be parsed.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns the next non-whitespace token without moving the cursor.
    pub fn peek_token(&self) -> Option<&Token<'source>> {
        self.tokens[self.cursor..]
            .iter()
            .find(|token| !token.is_whitespace())
    }

    /// Returns the non-whitespace tokens that have not been parsed yet.
    pub fn remaining(&self) -> Vec<&Token<'source>> {
        self.tokens[self.cursor..]
            .iter()
            .filter(|token| !token.is_whitespace())
            .collect()
    }

    /// Records that the parser entered the application opened at `opening`.
    ///
    /// Returns an error if this exceeds [`MAX_NESTING`].
    pub(crate) fn enter_application(&mut self, opening: Range<usize>) -> Result<(), Error> {
        if self.depth >= MAX_NESTING {
            return Err(Error::new(vec![opening], kind::NestingTooDeep { max: MAX_NESTING }));
        }
        self.depth += 1;
        Ok(())
    }

    /// Records that the parser left the innermost application.
    pub(crate) fn exit_application(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Advances the cursor past any whitespace tokens.
    pub fn skip_whitespace(&mut self) {
        while self.current_token().is_some_and(Token::is_whitespace) {
            self.cursor += 1;
        }
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        self.skip_whitespace();
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                // cloning is cheap: only Range<_> is cloned
                Ok(token.clone())
            },
            None => Err(Error::new(vec![self.eof_span()], kind::UnexpectedEof)),
        }
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value. This function can be used in the [`Parse::parse`]
    /// implementation of a type with the given [`Parser`], as it will automatically backtrack the
    /// cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        let (start, depth) = (self.cursor, self.depth);
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                self.depth = depth;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        self.skip_whitespace();
        match self.current_token() {
            None => Ok(value),
            Some(token) => {
                let span = token.span.start..self.eof_span().end;
                Err(Error::new(vec![span], kind::ExpectedEof))
            },
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by consumers of the library.
    fn parse(input: &mut Parser<'_>) -> Result<Self, Error>;
}
