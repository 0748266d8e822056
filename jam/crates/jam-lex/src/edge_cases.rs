//! Edge case tests for jam-lex

#[cfg(test)]
mod tests {
    use std::io::{self, BufReader, Read};

    use crate::{Keyword, LexError, LexErrorKind, Lexer, Op, Position, Punct, Token};

    fn lex_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::from_source(source);
        let mut tokens = Vec::new();
        while let Some(token) = lexer.read_token().unwrap() {
            tokens.push(token);
        }
        tokens
    }

    fn first_error(source: &str) -> LexError {
        let mut lexer = Lexer::from_source(source);
        loop {
            match lexer.read_token() {
                Ok(Some(_)) => continue,
                Ok(None) => panic!("no error in {:?}", source),
                Err(err) => return err,
            }
        }
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].to_string(), "x");
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("let {} := 1", name));
        assert_eq!(t[1].to_string(), name);
    }

    #[test]
    fn test_edge_keywords_not_idents() {
        let t = lex_all("if then else");
        assert_eq!(t[0], Token::Keyword(Keyword::If));
        assert_eq!(t[1], Token::Keyword(Keyword::Then));
        assert_eq!(t[2], Token::Keyword(Keyword::Else));
    }

    #[test]
    fn test_edge_keyword_prefix_is_ident() {
        let t = lex_all("iffy lets consed null??");
        assert!(t.iter().all(|token| token.kind() == crate::TokenKind::Identifier));
    }

    #[test]
    fn test_edge_keywords_are_case_sensitive() {
        let t = lex_all("If NULL True");
        assert!(t.iter().all(|token| token.kind() == crate::TokenKind::Identifier));
    }

    #[test]
    fn test_edge_comment_at_eof_without_newline() {
        assert_eq!(lex_all("1 // trailing"), vec![Token::IntConstant(1)]);
    }

    #[test]
    fn test_edge_comment_hides_illegal_chars() {
        assert_eq!(lex_all("// # $ @ !\n2"), vec![Token::IntConstant(2)]);
    }

    #[test]
    fn test_edge_single_slash_is_divide() {
        assert_eq!(
            lex_all("4 / 2"),
            vec![
                Token::IntConstant(4),
                Token::Operator(Op::Divide),
                Token::IntConstant(2)
            ]
        );
    }

    #[test]
    fn test_edge_control_chars_are_whitespace() {
        assert_eq!(lex_all("\0\x01\r\n\t\x1f7"), vec![Token::IntConstant(7)]);
    }

    #[test]
    fn test_edge_crlf_lines() {
        let mut lexer = Lexer::from_source("a\r\nb");
        lexer.read_token().unwrap();
        lexer.read_token().unwrap();
        assert_eq!(lexer.token_position(), Position { line: 2, column: 1 });
    }

    #[test]
    fn test_edge_number_then_word() {
        let t = lex_all("12abc");
        assert_eq!(t[0], Token::IntConstant(12));
        assert_eq!(t[1].to_string(), "abc");
    }

    #[test]
    fn test_edge_no_exponent() {
        let t = lex_all("1e5");
        assert_eq!(t[0], Token::IntConstant(1));
        assert_eq!(t[1].to_string(), "e5");
    }

    #[test]
    fn test_edge_negative_literal_is_minus() {
        assert_eq!(
            lex_all("-5"),
            vec![Token::Operator(Op::Minus), Token::IntConstant(5)]
        );
    }

    #[test]
    fn test_edge_nested_brackets() {
        let t = lex_all("[[()]]");
        assert_eq!(t.len(), 6);
        assert_eq!(t[0], Token::Punct(Punct::LeftBrack));
        assert_eq!(t[5], Token::Punct(Punct::RightBrack));
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_error_lone_dot() {
        let err = first_error("x . y");
        assert!(matches!(err, LexError::IllegalCharacter { ch: '.', .. }));
    }

    #[test]
    fn test_error_string_quote() {
        assert_eq!(
            first_error("\"text\"").kind(),
            LexErrorKind::IllegalCharacter
        );
    }

    #[test]
    fn test_error_position_on_later_line() {
        let err = first_error("let x := 1;\n  in x @ 2");
        assert_eq!(err.position(), Some(Position { line: 2, column: 8 }));
    }

    #[test]
    fn test_error_overflow_after_tokens() {
        let err = first_error("x + 99999999999");
        assert_eq!(err.kind(), LexErrorKind::NumericOverflow);
        assert_eq!(err.position(), Some(Position { line: 1, column: 5 }));
    }

    #[test]
    fn test_edge_left_arrow_is_two_operators() {
        let t = lex_all("x <- 1");
        assert_eq!(t[1], Token::Operator(Op::LessThan));
        assert_eq!(t[2], Token::Operator(Op::Minus));
    }

    #[test]
    fn test_error_bang_before_paren() {
        let err = first_error("!(x)");
        assert_eq!(err.kind(), LexErrorKind::IllegalOperatorSequence);
        assert!(err.to_string().starts_with("!("));
    }

    #[test]
    fn test_error_invalid_utf8() {
        let bytes: &[u8] = &[b'x', b' ', 0xff, 0xfe];
        let mut lexer = Lexer::new(bytes);
        let err = lexer.read_token().unwrap_err();
        assert_eq!(err.kind(), LexErrorKind::Input);
    }

    struct Failing;

    impl Read for Failing {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device gone"))
        }
    }

    #[test]
    fn test_error_reader_failure() {
        let mut lexer = Lexer::new(BufReader::new(Failing));
        let err = lexer.read_token().unwrap_err();
        assert_eq!(err.kind(), LexErrorKind::Input);
        assert!(err.to_string().contains("device gone"));
    }

    #[test]
    fn test_error_recovery_loop() {
        let mut lexer = Lexer::from_source("a # b\nc ! d\ne");
        let mut tokens = Vec::new();
        let mut errors = 0;
        loop {
            match lexer.read_token() {
                Ok(Some(token)) => tokens.push(token.to_string()),
                Ok(None) => break,
                Err(_) => {
                    errors += 1;
                    lexer.flush().unwrap();
                },
            }
        }
        assert_eq!(errors, 2);
        assert_eq!(tokens, vec!["a", "c", "e"]);
    }
}
