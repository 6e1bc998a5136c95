use std::path::Path;

use super::*;
use crate::comment::{CommentClusterer, CommentLine};

fn cluster_of(lines: &[(usize, &str)]) -> Cluster {
    let mut clusterer = CommentClusterer::new();
    for (position, text) in lines {
        assert!(clusterer.push(CommentLine::new(*position, *text)).is_none());
    }
    clusterer.finish().unwrap()
}

fn audit(lines: &[(usize, &str)]) -> Vec<(usize, DiagnosticKind)> {
    let mut sink: Vec<Diagnostic> = Vec::new();
    BlockAuditor::new()
        .audit(&cluster_of(lines), Path::new("file"), &mut sink)
        .unwrap();
    sink.into_iter().map(|d| (d.line, d.kind)).collect()
}

#[test]
fn punctuated_single_line_is_clean() {
    assert!(audit(&[(1, "// All good.")]).is_empty());
}

#[test]
fn each_terminal_character_is_accepted() {
    for text in [
        "// Done.",
        "// Done!",
        "// Done?",
        "// (like in this case)",
        "// see [docs]",
        "// map{}",
    ] {
        assert!(audit(&[(1, text)]).is_empty(), "{text} should be accepted");
    }
}

#[test]
fn missing_punctuation_on_single_line() {
    assert_eq!(
        audit(&[(4, "// no period here")]),
        vec![(4, DiagnosticKind::MissingPunctuation)]
    );
}

#[test]
fn punctuation_followed_by_letter_is_missing() {
    assert_eq!(
        audit(&[(14, "// This comment has a typo after punctuation!s")]),
        vec![(14, DiagnosticKind::MissingPunctuation)]
    );
}

#[test]
fn bare_marker_is_missing_punctuation() {
    assert_eq!(
        audit(&[(1, "//")]),
        vec![(1, DiagnosticKind::MissingPunctuation)]
    );
}

#[test]
fn only_last_line_is_checked_for_punctuation() {
    let result = audit(&[
        (23, "// This comment is a multi-line comment with missing punctuation"),
        (24, "// so the first line should not trigger a warning, only the last"),
        (25, "// one should"),
    ]);
    assert_eq!(result, vec![(25, DiagnosticKind::MissingPunctuation)]);
}

#[test]
fn intermediate_lines_without_punctuation_are_fine() {
    assert!(audit(&[(1, "// first"), (2, "// second.")]).is_empty());
}

#[test]
fn double_space_on_every_offending_line() {
    let result = audit(&[
        (20, "// This comment is a multi-line comment with  space typos in"),
        (21, "// it. It does not have any  punctuation issues though."),
    ]);
    assert_eq!(
        result,
        vec![
            (20, DiagnosticKind::DoubleSpace),
            (21, DiagnosticKind::DoubleSpace)
        ]
    );
}

#[test]
fn multiple_double_spaces_on_one_line_report_once() {
    assert_eq!(
        audit(&[(8, "// This   comment   has    multiple   ones.")]),
        vec![(8, DiagnosticKind::DoubleSpace)]
    );
}

#[test]
fn last_line_reports_punctuation_before_double_space() {
    assert_eq!(
        audit(&[(3, "// This is a non-excluded  comment with issues")]),
        vec![
            (3, DiagnosticKind::MissingPunctuation),
            (3, DiagnosticKind::DoubleSpace)
        ]
    );
}

#[test]
fn diagnostics_follow_line_order() {
    let result = audit(&[(1, "// a  b"), (2, "// c"), (3, "// d  e")]);
    assert_eq!(
        result,
        vec![
            (1, DiagnosticKind::DoubleSpace),
            (3, DiagnosticKind::MissingPunctuation),
            (3, DiagnosticKind::DoubleSpace)
        ]
    );
}

#[test]
fn full_width_punctuation_is_not_recognized() {
    assert_eq!(
        audit(&[(1, "// 私はカモメが好きです！")]),
        vec![(1, DiagnosticKind::MissingPunctuation)]
    );
}

#[test]
fn ascii_terminal_after_non_latin_text_is_accepted() {
    assert!(audit(&[(1, "// 日本語!")]).is_empty());
}

#[test]
fn audit_returns_emitted_count() {
    let mut sink: Vec<Diagnostic> = Vec::new();
    let count = BlockAuditor::new()
        .audit(&cluster_of(&[(1, "// a  b")]), Path::new("x"), &mut sink)
        .unwrap();
    assert_eq!(count, 2);
    assert_eq!(sink.len(), 2);
}

#[test]
fn helper_predicates() {
    assert!(has_double_space("a  b"));
    assert!(!has_double_space("a b c"));
    assert!(!has_double_space("a\t\tb"));
    assert!(is_punctuated("end."));
    assert!(!is_punctuated("end"));
    assert!(!is_punctuated(""));
}
