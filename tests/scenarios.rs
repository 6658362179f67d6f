//! End-to-end scenarios with literal inputs and expected shapes.

use std::time::Instant;

use rosettes::{highlight, tokenize, TokenCategory};

#[test]
fn python_keyword_classification() {
    let source = "def hello(): pass";
    let tokens = tokenize(source, "python").unwrap();

    let kinds: Vec<(TokenCategory, &str)> = tokens.iter().map(|t| (t.category, t.text)).collect();
    assert!(kinds.contains(&(TokenCategory::KeywordDeclaration, "def")));
    assert!(kinds.contains(&(TokenCategory::NameFunction, "hello")));
    assert!(kinds.contains(&(TokenCategory::Punctuation, "(")));
    assert!(kinds.contains(&(TokenCategory::Punctuation, ")")));
    assert!(kinds.contains(&(TokenCategory::Punctuation, ":")));
    assert!(kinds.contains(&(TokenCategory::Whitespace, " ")));
    assert!(kinds.contains(&(TokenCategory::Keyword, "pass")));

    let joined: String = tokens.iter().map(|t| t.text).collect();
    assert_eq!(joined, source);
}

#[test]
fn javascript_string_inside_string() {
    let source = "`hello ${name}`";
    let tokens = tokenize(source, "javascript").unwrap();

    let kinds: Vec<(TokenCategory, &str)> = tokens.iter().map(|t| (t.category, t.text)).collect();
    assert_eq!(
        kinds,
        vec![
            (TokenCategory::StringBacktick, "`"),
            (TokenCategory::String, "hello "),
            (TokenCategory::StringInterpol, "${"),
            (TokenCategory::Name, "name"),
            (TokenCategory::StringInterpol, "}"),
            (TokenCategory::StringBacktick, "`"),
        ]
    );

    let joined: String = tokens.iter().map(|t| t.text).collect();
    assert_eq!(joined, source);
}

#[test]
fn line_counting_across_blank_lines() {
    let tokens = tokenize("a\nb\n\nc", "plaintext").unwrap();

    let position_of = |text: &str| {
        tokens
            .iter()
            .find(|t| t.text == text)
            .map(|t| (t.line, t.column))
            .unwrap()
    };
    assert_eq!(position_of("a"), (1, 1));
    assert_eq!(position_of("b"), (2, 1));
    assert_eq!(position_of("c"), (4, 1));
}

#[test]
fn unterminated_block_comment_is_one_token() {
    let source = "/* incomplete";
    let tokens = tokenize(source, "c").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].category, TokenCategory::CommentMultiline);
    assert_eq!(tokens[0].text, source);
    assert!(tokens.iter().all(|t| t.category != TokenCategory::Error));
}

#[test]
fn adversarial_input_stays_near_linear() {
    // The classic catastrophic-backtracking shape: long runs of nested
    // quantifier fodder with a non-matching tail. A scanner with any
    // super-linear behavior blows up on the larger size; a linear one
    // scales with the input.
    fn pathological(n: usize) -> String {
        let mut s = String::with_capacity(n * 2 + 16);
        for _ in 0..n {
            s.push_str("a(");
        }
        s.push_str("\"never closed");
        s
    }

    let small = pathological(1_000);
    let large = pathological(100_000);

    // Warm up lexer singletons and caches.
    let _ = tokenize(&small, "javascript").unwrap();

    let t0 = Instant::now();
    let small_tokens = tokenize(&small, "javascript").unwrap();
    let small_time = t0.elapsed();

    let t1 = Instant::now();
    let large_tokens = tokenize(&large, "javascript").unwrap();
    let large_time = t1.elapsed();

    assert_eq!(small_tokens.len(), 2_001);
    assert_eq!(large_tokens.len(), 200_001);

    // 100x the input should cost on the order of 100x the time. The
    // bound is deliberately loose (timer noise, cold caches); quadratic
    // behavior would overshoot it by orders of magnitude.
    let ratio = large_time.as_nanos().max(1) / small_time.as_nanos().max(1);
    assert!(
        ratio < 2_000,
        "tokenization scaled super-linearly: {small_time:?} -> {large_time:?}"
    );
}

#[test]
fn html_escaping_of_specials() {
    let out = highlight("\"<&>\"", "python").unwrap();
    assert!(out.contains("&lt;"));
    assert!(out.contains("&amp;"));
    assert!(out.contains("&gt;"));
    assert!(!out.contains("\"<&>\""));
}

#[test]
fn unknown_language_falls_back_to_plaintext_by_caller_choice() {
    // The library reports the lookup error; the documented recovery is
    // the always-present plaintext lexer.
    let err = highlight("body", "klingon").unwrap_err();
    assert_eq!(err.to_string(), "unknown language: \"klingon\"");
    let out = highlight("body", "plaintext").unwrap();
    assert!(out.contains("body"));
}
