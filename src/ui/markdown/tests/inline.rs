use crate::ui::markdown::{format_inline, InlineSpan};

fn text(s: &str) -> InlineSpan {
    InlineSpan::Text(s.to_string())
}

#[test]
fn all_four_span_kinds_format_together() {
    let spans = format_inline("**a** *b* `c` http://x.com");
    assert_eq!(
        spans,
        vec![
            InlineSpan::Strong("a".to_string()),
            text(" "),
            InlineSpan::Emphasis("b".to_string()),
            text(" "),
            InlineSpan::Code("c".to_string()),
            text(" "),
            InlineSpan::Link("http://x.com".to_string()),
        ]
    );
}

#[test]
fn markup_free_text_passes_through_unchanged() {
    let spans = format_inline("just ordinary prose.");
    assert_eq!(spans, vec![text("just ordinary prose.")]);
}

#[test]
fn empty_input_produces_no_spans() {
    assert!(format_inline("").is_empty());
}

#[test]
fn inline_code_shields_its_contents_from_later_rules() {
    let spans = format_inline("`**not bold**`");
    assert_eq!(spans, vec![InlineSpan::Code("**not bold**".to_string())]);
}

#[test]
fn bold_runs_before_italic() {
    let spans = format_inline("***x***");
    assert_eq!(
        spans,
        vec![text("*"), InlineSpan::Strong("x".to_string()), text("*")]
    );
}

#[test]
fn urls_are_contiguous_nonwhitespace_runs() {
    let spans = format_inline("see https://example.com/a?b=1 and http://x.org");
    assert_eq!(
        spans,
        vec![
            text("see "),
            InlineSpan::Link("https://example.com/a?b=1".to_string()),
            text(" and "),
            InlineSpan::Link("http://x.org".to_string()),
        ]
    );
}

#[test]
fn unpaired_delimiters_stay_literal_text() {
    assert_eq!(format_inline("a ** b"), vec![text("a ** b")]);
    assert_eq!(format_inline("lone ` backtick"), vec![text("lone ` backtick")]);
}

#[test]
fn source_forms_round_trip_to_the_original_input() {
    let inputs = [
        "**a** *b* `c` http://x.com",
        "plain text with no markup",
        "***x***",
        "code `let x = 1` then **bold** and *italic*",
        "https://example.com/path?q=1 trailing words",
        "",
    ];
    for input in inputs {
        let reconstructed: String = format_inline(input)
            .iter()
            .map(InlineSpan::source)
            .collect();
        assert_eq!(reconstructed, input, "round trip failed for {input:?}");
    }
}
