pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows us
/// to backtrack in case of an error.
///
/// Input that the tokenizer cannot classify is kept as [`TokenKind::Atom`] tokens, so that the
/// parser can point at it.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind: result.unwrap_or(TokenKind::Atom),
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn glued_parens() {
        compare_tokens(
            "(* 2 x)",
            [
                (TokenKind::OpenParen, "("),
                (TokenKind::Mul, "*"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "2"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "x"),
                (TokenKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn nested_functions() {
        compare_tokens(
            "(sin (ln x))",
            [
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "sin"),
                (TokenKind::Whitespace, " "),
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "ln"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "x"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn negative_int_and_sub() {
        compare_tokens(
            "(- -12 x)",
            [
                (TokenKind::OpenParen, "("),
                (TokenKind::Sub, "-"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "-12"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "x"),
                (TokenKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn unknown_symbol() {
        compare_tokens(
            "(@ x 1)",
            [
                (TokenKind::OpenParen, "("),
                (TokenKind::Atom, "@"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "x"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "1"),
                (TokenKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn glued_literals_stay_whole() {
        compare_tokens(
            "(+ 2x x-1 1.5)",
            [
                (TokenKind::OpenParen, "("),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Atom, "2x"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Atom, "x-1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Atom, "1.5"),
                (TokenKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn operator_glued_to_operand() {
        compare_tokens(
            "(+x -x)",
            [
                (TokenKind::OpenParen, "("),
                (TokenKind::Atom, "+x"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Atom, "-x"),
                (TokenKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn complete_keeps_every_byte() {
        let input = "(^ x  2)\n";
        let tokens = tokenize_complete(input);
        let rebuilt = tokens.iter().map(|token| token.lexeme).collect::<String>();
        assert_eq!(rebuilt, input);
        assert_eq!(tokens.last().map(|token| token.span.clone()), Some(8..9));
    }
}
