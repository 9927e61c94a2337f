//! Fixture tests for the tokenizer.
//!
//! Fixtures (.tex) live in `fixtures/`; expectations are written out here.

use pretty_assertions::assert_eq;

use crate::parsing::{
    ParseError,
    blocks::{BlockKind, RawNode, kinds::Environment},
    parse_document,
};

fn load_fixture(name: &str) -> String {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(format!("{fixtures_dir}/{name}.tex")).unwrap()
}

fn text(s: &str) -> RawNode {
    RawNode::Text(s.to_string())
}

fn command(s: &str) -> RawNode {
    RawNode::OneLineCommand(s.to_string())
}

#[test]
fn fixture_short_paper() {
    let doc = parse_document(&load_fixture("short_paper")).unwrap();

    let expected = vec![
        command(r"\documentclass[sigconf]{acmart}"),
        command(r"\usepackage{graphicx}"),
        RawNode::Empty,
        RawNode::Title("Evaluating AI-based Games through Retellings".to_string()),
        RawNode::Subtitle("A Case Study".to_string()),
        RawNode::Empty,
        RawNode::MultilineBlock {
            kind: BlockKind::Command {
                name: "author".to_string(),
            },
            lines: vec![r"\author{".to_string(), "  Max Kreminski".to_string()],
        },
        RawNode::Empty,
        command(r"\begin{abstract}"),
        text("Games are fun."),
        command(r"\end{abstract}"),
        RawNode::Empty,
        command(r"\maketitle"),
        RawNode::Empty,
        RawNode::SectionHeader {
            depth: 1,
            text: "Introduction".to_string(),
            label: Some("sec:intro".to_string()),
        },
        text(r"Many games~\cite{ryan2015} use AI. "),
        text("This line continues the paragraph."),
        RawNode::Empty,
        RawNode::MultilineBlock {
            kind: BlockKind::Environment {
                env: Environment::Itemize,
                starred: false,
            },
            lines: vec![r"\item First point.".to_string(), r"\item Second point.".to_string()],
        },
        RawNode::Empty,
        RawNode::Empty,
        RawNode::MultilineBlock {
            kind: BlockKind::Environment {
                env: Environment::CcsXml,
                starred: false,
            },
            lines: vec!["<ccs2012>".to_string(), "</ccs2012>".to_string()],
        },
        RawNode::Empty,
        RawNode::SectionHeader {
            depth: 2,
            text: "Method".to_string(),
            label: None,
        },
        text(r"We follow \emph{Ryan}."),
    ];

    assert_eq!(doc.nodes, expected);
}

/// Node order follows line order.
#[test]
fn nodes_follow_source_order() {
    let doc = parse_document("b\n\n\\section{A}\n\na").unwrap();
    assert_eq!(
        doc.nodes,
        vec![
            text("b"),
            RawNode::Empty,
            RawNode::SectionHeader {
                depth: 1,
                text: "A".to_string(),
                label: None,
            },
            RawNode::Empty,
            text("a"),
        ]
    );
}

#[test]
fn structural_mismatch_reports_line_number() {
    let err = parse_document("ok\n\n\\subsection[short").unwrap_err();
    assert_eq!(err.line(), 3);
    assert!(matches!(err, ParseError::MissingArgument { command: "subsection", .. }));
}

#[test]
fn malformed_lines_inside_blocks_are_content() {
    let doc = parse_document("\\begin{verbatim}\n\\section[oops\n\\end{verbatim}").unwrap();
    assert_eq!(doc.nodes.len(), 1);
}

#[test]
fn empty_input_has_no_nodes() {
    assert!(parse_document("").unwrap().nodes.is_empty());
}
