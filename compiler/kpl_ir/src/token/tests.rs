use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_keyword_lookup() {
    assert_eq!(TokenKind::keyword("program"), Some(TokenKind::Program));
    assert_eq!(TokenKind::keyword("procedure"), Some(TokenKind::Procedure));
    assert_eq!(TokenKind::keyword("to"), Some(TokenKind::To));
    assert_eq!(TokenKind::keyword("x"), None);
}

#[test]
fn test_keyword_lookup_ignores_case() {
    assert_eq!(TokenKind::keyword("BEGIN"), Some(TokenKind::Begin));
    assert_eq!(TokenKind::keyword("While"), Some(TokenKind::While));
}

#[test]
fn test_keyword_spelling_matches_display_name() {
    for (spelling, kind) in TokenKind::KEYWORDS {
        assert_eq!(kind.display_name(), spelling);
        assert!(kind.is_keyword());
    }
    assert!(!TokenKind::Ident.is_keyword());
    assert!(!TokenKind::Assign.is_keyword());
}

#[test]
fn test_kind_display_quotes_fixed_spellings() {
    assert_eq!(TokenKind::Assign.to_string(), "`:=`");
    assert_eq!(TokenKind::End.to_string(), "`end`");
    assert_eq!(TokenKind::Ident.to_string(), "identifier");
    assert_eq!(TokenKind::Eof.to_string(), "end of file");
}

#[test]
fn test_token_display_echo_format() {
    assert_eq!(
        Token::new(TokenKind::Program, Position::new(1, 1)).to_string(),
        "1-1:program"
    );
    assert_eq!(
        Token::ident("p", Position::new(1, 9)).to_string(),
        "1-9:identifier(p)"
    );
    assert_eq!(
        Token::number(42, Position::new(2, 5)).to_string(),
        "2-5:number(42)"
    );
    assert_eq!(
        Token::char_lit('a', Position::new(3, 1)).to_string(),
        "3-1:char literal('a')"
    );
}

#[test]
fn test_token_debug() {
    let tok = Token::ident("count", Position::new(7, 3));
    assert_eq!(format!("{tok:?}"), "Ident(count) @ 7:3");
    let tok = Token::eof(Position::new(9, 1));
    assert_eq!(format!("{tok:?}"), "Eof @ 9:1");
}

#[test]
fn test_constructors_set_kind_and_lexeme() {
    let tok = Token::number(7, Position::DUMMY);
    assert_eq!(tok.kind, TokenKind::Number);
    assert_eq!(tok.lexeme, Some(Lexeme::Number(7)));
    assert!(Token::eof(Position::DUMMY).is_eof());
    assert!(!tok.is_eof());
}
