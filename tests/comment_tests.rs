//! Integration tests for documentation comments.

mod common;

use cindex::prelude::*;
use common::{find_cursor, parse_source};

/// Pre-order search of a comment tree.
fn find_comment<'tu>(comment: Comment<'tu>, kind: CommentKind) -> Option<Comment<'tu>> {
    if comment.kind() == Some(kind) {
        return Some(comment);
    }
    comment
        .children()
        .into_iter()
        .find_map(|child| find_comment(child, kind))
}

#[test]
fn test_inline_command() {
    let source = "/**\n  * Brief docs with \\c monospaced\n */\nint f(void);";
    let unit = parse_source(source, Language::C, &["-fparse-all-comments"]);
    let f = find_cursor(&unit, CursorKind::FunctionDecl, "f");

    let comment = f.parsed_comment().expect("Missing parsed comment");
    assert_eq!(comment.kind(), Some(CommentKind::FullComment));
    let command = find_comment(comment, CommentKind::InlineCommand).expect("Missing inline command");
    assert_eq!(command.inline_command_name(), "c");
    assert_eq!(command.inline_command_arguments(), vec!["monospaced"]);
    assert_eq!(
        command.inline_command_render_kind(),
        Some(CommentInlineCommandRenderKind::Monospaced)
    );

    let html = comment.to_html().expect("Missing HTML rendering");
    assert!(html.contains("monospaced"));
    assert!(comment.to_xml().is_some_and(|xml| xml.contains("<Name>f</Name>")));
}

#[test]
fn test_raw_and_brief_comment() {
    let source = "/// Adds two numbers.\n///\n/// Longer description.\nint add(int a, int b);\nint bare(void);";
    let unit = parse_source(source, Language::C, &[]);
    let add = find_cursor(&unit, CursorKind::FunctionDecl, "add");
    assert!(add.raw_comment().is_some_and(|text| text.starts_with("/// Adds")));
    assert_eq!(add.brief_comment().as_deref(), Some("Adds two numbers."));
    let range = add.comment_range().expect("Missing comment range");
    assert_eq!(range.start().file_location().line, 1);
    assert_eq!(range.end().file_location().line, 3);

    let bare = find_cursor(&unit, CursorKind::FunctionDecl, "bare");
    assert_eq!(bare.raw_comment(), None);
    assert!(bare.parsed_comment().is_none());
    assert!(bare.comment_range().is_none());
}

#[test]
fn test_param_commands() {
    let source = "/**\n * Copies a value.\n * \\param source the input\n * \\param[out] target the output\n */\nvoid copy(int source, int *target);";
    let unit = parse_source(source, Language::C, &[]);
    let copy = find_cursor(&unit, CursorKind::FunctionDecl, "copy");
    let comment = copy.parsed_comment().expect("Missing parsed comment");
    let params: Vec<Comment<'_>> = comment
        .children()
        .into_iter()
        .filter(|child| child.kind() == Some(CommentKind::ParamCommand))
        .collect();
    assert_eq!(params.len(), 2);

    assert_eq!(params[0].param_name(), "source");
    assert_eq!(params[0].param_index(), Some(0));
    assert!(!params[0].is_param_direction_explicit());
    assert_eq!(params[0].param_direction(), Some(CommentParamPassDirection::In));

    assert_eq!(params[1].param_name(), "target");
    assert_eq!(params[1].param_index(), Some(1));
    assert!(params[1].is_param_direction_explicit());
    assert_eq!(params[1].param_direction(), Some(CommentParamPassDirection::Out));

    let paragraph = params[1].block_command_paragraph().expect("Missing paragraph");
    let text = find_comment(paragraph, CommentKind::Text).expect("Missing text");
    assert!(text.text().contains("the output"));
}

#[test]
fn test_block_command_and_html() {
    let source = "/**\n * \\brief Short.\n * Uses <b>bold</b> text.\n */\nvoid g(void);";
    let unit = parse_source(source, Language::C, &[]);
    let g = find_cursor(&unit, CursorKind::FunctionDecl, "g");
    let comment = g.parsed_comment().expect("Missing parsed comment");

    let brief = find_comment(comment, CommentKind::BlockCommand).expect("Missing block command");
    assert_eq!(brief.block_command_name(), "brief");
    assert!(brief.block_command_arguments().is_empty());

    let tag = find_comment(comment, CommentKind::HtmlStartTag).expect("Missing HTML tag");
    assert_eq!(tag.html_tag_name(), "b");
    assert!(!tag.is_html_self_closing());
    assert!(tag.html_attributes().is_empty());
    assert_eq!(tag.html_string(), "<b>");
}
