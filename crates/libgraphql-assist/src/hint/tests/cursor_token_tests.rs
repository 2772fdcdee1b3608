use crate::hint::CursorToken;

#[test]
fn whitespace_token_replaces_at_its_end() {
    let token = CursorToken::new("  ", 2, 4);

    assert!(token.is_whitespace());
    assert_eq!(token.partial_text(), "");
    assert_eq!(token.replace_from(), 4);
}

#[test]
fn empty_token_replaces_at_its_end() {
    let token = CursorToken::new("", 7, 7);

    assert_eq!(token.replace_from(), 7);
}

#[test]
fn word_token_replaces_from_its_start() {
    let token = CursorToken::new("hasAr", 10, 15);

    assert_eq!(token.partial_text(), "hasAr");
    assert_eq!(token.replace_from(), 10);
}

#[test]
fn underscore_is_a_word_char() {
    let token = CursorToken::new("__typ", 3, 8);

    assert_eq!(token.replace_from(), 3);
}

#[test]
fn punctuation_prefix_is_kept() {
    assert_eq!(CursorToken::new("@sk", 10, 13).replace_from(), 11);
    assert_eq!(CursorToken::new("$id", 4, 7).replace_from(), 5);
}

#[test]
fn deserializes_from_json() {
    let token: CursorToken = serde_json::from_str(
        r#"{"text": "tes", "start": 2, "end": 5}"#,
    ).expect("token deserializes");

    assert_eq!(token, CursorToken::new("tes", 2, 5));
}
