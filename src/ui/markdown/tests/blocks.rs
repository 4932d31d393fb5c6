use crate::ui::markdown::{latest_code_block, parse_blocks, strip_list_marker, Block, Language};

#[test]
fn plain_text_becomes_one_paragraph_with_collapsed_line_breaks() {
    let blocks = parse_blocks("line one\nline two\nline three");
    assert_eq!(
        blocks,
        vec![Block::Paragraph {
            content: "line one line two line three".to_string()
        }]
    );
}

#[test]
fn blank_line_runs_separate_exactly_two_paragraphs() {
    let blocks = parse_blocks("first\n\n\n\n\nsecond");
    assert_eq!(
        blocks,
        vec![
            Block::Paragraph {
                content: "first".to_string()
            },
            Block::Paragraph {
                content: "second".to_string()
            },
        ]
    );
}

#[test]
fn empty_input_produces_no_blocks() {
    assert!(parse_blocks("").is_empty());
    assert!(parse_blocks("\n   \n\t\n").is_empty());
}

#[test]
fn heading_levels_one_and_two_are_distinguished() {
    let blocks = parse_blocks("# Title\n## Subtitle");
    assert_eq!(
        blocks,
        vec![
            Block::Heading {
                level: 1,
                content: "Title".to_string()
            },
            Block::Heading {
                level: 2,
                content: "Subtitle".to_string()
            },
        ]
    );
}

#[test]
fn deeper_heading_markers_fall_through_to_paragraph_text() {
    let blocks = parse_blocks("### not a heading");
    assert_eq!(
        blocks,
        vec![Block::Paragraph {
            content: "### not a heading".to_string()
        }]
    );
}

#[test]
fn heading_flushes_a_pending_paragraph() {
    let blocks = parse_blocks("intro text\n# Title");
    assert_eq!(
        blocks,
        vec![
            Block::Paragraph {
                content: "intro text".to_string()
            },
            Block::Heading {
                level: 1,
                content: "Title".to_string()
            },
        ]
    );
}

#[test]
fn fence_language_hints_are_ignored_in_favor_of_detection() {
    let blocks = parse_blocks("```python\nSELECT id FROM users\n```");
    assert_eq!(
        blocks,
        vec![Block::Code {
            content: "SELECT id FROM users".to_string(),
            language: Language::Sql,
        }]
    );
}

#[test]
fn fence_lines_never_appear_in_content() {
    let blocks = parse_blocks("```\nprint(1)\n```");
    assert_eq!(
        blocks,
        vec![Block::Code {
            content: "print(1)".to_string(),
            language: Language::Python,
        }]
    );
}

#[test]
fn unterminated_fence_consumes_the_rest_of_the_input() {
    let blocks = parse_blocks("```\nprint(1)\nprint(2)");
    assert_eq!(
        blocks,
        vec![Block::Code {
            content: "print(1)\nprint(2)".to_string(),
            language: Language::Python,
        }]
    );
}

#[test]
fn code_blocks_keep_interior_blank_lines_and_indentation() {
    let blocks = parse_blocks("```\ndef f():\n    return 1\n\nprint(f())\n```");
    assert_eq!(
        blocks,
        vec![Block::Code {
            content: "def f():\n    return 1\n\nprint(f())".to_string(),
            language: Language::Python,
        }]
    );
}

#[test]
fn list_items_keep_their_markers_until_render_time() {
    let blocks = parse_blocks("- item one\n* item two\n• item three\n1. item four");
    assert_eq!(
        blocks,
        vec![
            Block::ListItem {
                content: "- item one".to_string()
            },
            Block::ListItem {
                content: "* item two".to_string()
            },
            Block::ListItem {
                content: "• item three".to_string()
            },
            Block::ListItem {
                content: "1. item four".to_string()
            },
        ]
    );
}

#[test]
fn plain_line_after_a_list_starts_a_new_paragraph() {
    let blocks = parse_blocks("- item\nfollow-up text");
    assert_eq!(
        blocks,
        vec![
            Block::ListItem {
                content: "- item".to_string()
            },
            Block::Paragraph {
                content: "follow-up text".to_string()
            },
        ]
    );
}

#[test]
fn list_after_a_paragraph_flushes_the_paragraph_first() {
    let blocks = parse_blocks("intro\n- item");
    assert_eq!(
        blocks,
        vec![
            Block::Paragraph {
                content: "intro".to_string()
            },
            Block::ListItem {
                content: "- item".to_string()
            },
        ]
    );
}

#[test]
fn asterisk_without_trailing_whitespace_is_not_a_list_item() {
    let blocks = parse_blocks("*emphasis* only");
    assert_eq!(
        blocks,
        vec![Block::Paragraph {
            content: "*emphasis* only".to_string()
        }]
    );
}

#[test]
fn full_response_parses_to_the_expected_block_sequence() {
    let text = "# Title\n\nSome *text*.\n\n- item one\n- item two\n\n```\nprint(1)\n```";
    let blocks = parse_blocks(text);
    assert_eq!(
        blocks,
        vec![
            Block::Heading {
                level: 1,
                content: "Title".to_string()
            },
            Block::Paragraph {
                content: "Some *text*.".to_string()
            },
            Block::ListItem {
                content: "- item one".to_string()
            },
            Block::ListItem {
                content: "- item two".to_string()
            },
            Block::Code {
                content: "print(1)".to_string(),
                language: Language::Python,
            },
        ]
    );
}

#[test]
fn strip_list_marker_handles_every_marker_form() {
    assert_eq!(strip_list_marker("- item"), "item");
    assert_eq!(strip_list_marker("* item"), "item");
    assert_eq!(strip_list_marker("• item"), "item");
    assert_eq!(strip_list_marker("12. item"), "item");
    // Not actually markers: left untouched.
    assert_eq!(strip_list_marker("*emphasis*"), "*emphasis*");
    assert_eq!(strip_list_marker("3.14 is pi"), "3.14 is pi");
}

#[test]
fn latest_code_block_returns_the_last_fence() {
    let text = "```\nprint(1)\n```\n\ntext\n\n```\nprint(2)\n```";
    assert_eq!(latest_code_block(text).as_deref(), Some("print(2)"));
    assert_eq!(latest_code_block("no code here"), None);
}
