use super::*;
use crate::byte_set::ByteSet;
use crate::step::{step, step_with};
use pretty_assertions::assert_eq;

/// Helper: run `refine` through `step_with` until end of input.
fn run(mut buf: &[u8], refine: fn(Token, &[u8]) -> (Token, &[u8])) -> Vec<Token> {
    let mut tokens = Vec::new();
    loop {
        let (token, rest) = step_with(buf, refine);
        if token.is_end_of_input() {
            return tokens;
        }
        tokens.push(token);
        buf = rest;
    }
}

fn tok(kind: TokenType, value: &str) -> Token {
    Token::new(kind, value)
}

// === merge_words ===

#[test]
fn word_stops_before_space() {
    let (token, rest) = step_with(b"abc 1", merge_words);
    assert_eq!(token, tok(TokenType::Word, "abc"));
    assert_eq!(rest, b" 1");
}

#[test]
fn single_letter_stays_letter() {
    let (token, rest) = step_with(b"a.", merge_words);
    assert_eq!(token, tok(TokenType::Letter, "a"));
    assert_eq!(rest, b".");
}

#[test]
fn word_at_end_of_input() {
    let (token, rest) = step_with(b"hello", merge_words);
    assert_eq!(token, tok(TokenType::Word, "hello"));
    assert!(rest.is_empty());
}

#[test]
fn non_letters_pass_through() {
    let (token, rest) = step_with(b"1ab", merge_words);
    assert_eq!(token, tok(TokenType::Numeral, "1"));
    assert_eq!(rest, b"ab");

    let (token, rest) = merge_words(tok(TokenType::Space, " "), b"ab");
    assert_eq!(token, tok(TokenType::Space, " "));
    assert_eq!(rest, b"ab");
}

#[test]
fn existing_word_keeps_growing() {
    let (token, rest) = merge_words(tok(TokenType::Word, "ab"), b"cd!");
    assert_eq!(token, tok(TokenType::Word, "abcd"));
    assert_eq!(rest, b"!");
}

#[test]
fn word_stream() {
    let tokens = run(b"one 22 three.", merge_words);
    use TokenType::{Numeral as N, Punctuation as P, Space as S, Word as W};
    assert_eq!(
        tokens,
        vec![
            tok(W, "one"),
            tok(S, " "),
            tok(N, "2"),
            tok(N, "2"),
            tok(S, " "),
            tok(W, "three"),
            tok(P, "."),
        ]
    );
}

#[test]
fn long_run_does_not_recurse() {
    let input = vec![b'x'; 1 << 20];
    let (token, rest) = step_with(&input, merge_words);
    assert_eq!(token.kind, TokenType::Word);
    assert_eq!(token.value.len(), input.len());
    assert!(rest.is_empty());
}

#[test]
fn non_ascii_bytes_join_words() {
    let (token, rest) = step_with("héllo wörld".as_bytes(), merge_words);
    assert_eq!(token.text(), Some("héllo"));
    assert_eq!(rest, " wörld".as_bytes());
}

#[test]
fn custom_classifier_words() {
    // Treat '-' as a letter by removing it from punctuation.
    let c = Classifier::STANDARD.with_punctuation(ByteSet::new(b".,"));
    let (token, rest) = c.step_with(b"well-known.", |t, b| c.merge_words(t, b));
    assert_eq!(token, tok(TokenType::Word, "well-known"));
    assert_eq!(rest, b".");
}

// === merge_element ===

#[test]
fn element_absorbs_letters() {
    let (token, rest) = step_with(b"@article{key,", merge_element);
    assert_eq!(token, tok(TokenType::Element, "@article"));
    assert_eq!(rest, b"{key,");
}

#[test]
fn lone_at_sign_is_reclassified() {
    let (token, rest) = step_with(b"@ x", merge_element);
    assert_eq!(token, tok(TokenType::AtSign, "@"));
    assert_eq!(rest, b" x");

    let (token, _) = step_with(b"@", merge_element);
    assert_eq!(token, tok(TokenType::AtSign, "@"));
}

#[test]
fn at_sign_token_starts_element() {
    let (token, rest) = merge_element(tok(TokenType::AtSign, "@"), b"book}");
    assert_eq!(token, tok(TokenType::Element, "@book"));
    assert_eq!(rest, b"}");
}

#[test]
fn element_in_progress_keeps_growing() {
    let (token, rest) = merge_element(tok(TokenType::Element, "@bo"), b"ok{");
    assert_eq!(token, tok(TokenType::Element, "@book"));
    assert_eq!(rest, b"{");

    let (token, rest) = merge_element(tok(TokenType::Element, "@book"), b"{");
    assert_eq!(token, tok(TokenType::Element, "@book"));
    assert_eq!(rest, b"{");
}

#[test]
fn element_words_fall_back_to_word_merge() {
    let (token, rest) = step_with(b"title = ", merge_element);
    assert_eq!(token, tok(TokenType::Word, "title"));
    assert_eq!(rest, b" = ");
}

#[test]
fn element_structural_characters() {
    let tokens = run(b"@misc{k, t = \"x\"}", merge_element);
    use TokenType::{
        CloseCurlyBracket, Comma, DoubleQuote, Element, EqualSign, Letter, OpenCurlyBracket, Space,
    };
    assert_eq!(
        tokens,
        vec![
            tok(Element, "@misc"),
            tok(OpenCurlyBracket, "{"),
            tok(Letter, "k"),
            tok(Comma, ","),
            tok(Space, " "),
            tok(Letter, "t"),
            tok(Space, " "),
            tok(EqualSign, "="),
            tok(Space, " "),
            tok(DoubleQuote, "\""),
            tok(Letter, "x"),
            tok(DoubleQuote, "\""),
            tok(CloseCurlyBracket, "}"),
        ]
    );
}

#[test]
fn unknown_punctuation_unchanged() {
    let (token, _) = step_with(b";", merge_element);
    assert_eq!(token, tok(TokenType::Punctuation, ";"));
}

#[test]
fn merges_reconstruct_input() {
    let input: &[u8] = b"@inproceedings{doe2016,\n  author = {Jane Doe},\n}\n";
    for refine in [merge_words as fn(Token, &[u8]) -> (Token, &[u8]), merge_element] {
        let joined: Vec<u8> = run(input, refine)
            .into_iter()
            .flat_map(|t| t.value)
            .collect();
        assert_eq!(joined, input);
    }
    assert_eq!(step(b"").0, Token::end_of_input());
}
