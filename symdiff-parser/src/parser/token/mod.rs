pub mod op;

use crate::{
    parser::{error::{kind, Error}, Parser, Parse},
    tokenizer::TokenKind,
};
use std::ops::Range;

/// Generates a unit struct for each token kind, as well as a simple [`Parse`] implementation for
/// each token kind. This enables the parser to use and request token kinds as a type, which is
/// much more ergonomic than using a string.
macro_rules! token_kinds {
    ($($name:ident)*) => {
        $(
            #[derive(Clone, Debug, PartialEq)]
            pub(crate) struct $name {
                pub(crate) span: Range<usize>,
            }

            impl Parse for $name {
                fn parse(input: &mut Parser<'_>) -> Result<Self, Error> {
                    let token = input.next_token()?;

                    if token.kind == TokenKind::$name {
                        Ok(Self { span: token.span })
                    } else {
                        Err(Error::new(vec![token.span], kind::UnexpectedToken {
                            expected: &[TokenKind::$name],
                            found: token.kind,
                        }))
                    }
                }
            }
        )*
    };
}

token_kinds!(
    OpenParen
    CloseParen
);

impl CloseParen {
    /// Parses the parenthesis that closes the application opened at `opening`.
    ///
    /// Running out of input is reported as an [`kind::UnclosedParenthesis`] pointing at the
    /// opening parenthesis.
    pub(crate) fn parse_closing(input: &mut Parser<'_>, opening: Range<usize>) -> Result<Self, Error> {
        if input.peek_token().is_none() {
            return Err(Error::new(vec![opening], kind::UnclosedParenthesis));
        }

        input.try_parse::<Self>()
    }
}
