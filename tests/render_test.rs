//! Integration tests for the generator and the built-in formats.

use docmark::model::{List, TableRow, TextRun};
use docmark::render::TagRule;
use docmark::{
    convert, render, Document, Error, FormatRegistry, Generator, Manifest, ManifestFile, Node,
    NodeKind, NodeTree, Paragraph, RuleTable, Table, TableCell,
};

fn md(doc: &Document) -> String {
    convert("md", doc, &Manifest::new()).unwrap()
}

fn html(doc: &Document) -> String {
    convert("html", doc, &Manifest::new()).unwrap()
}

fn txt(doc: &Document) -> String {
    convert("txt", doc, &Manifest::new()).unwrap()
}

fn single(paragraph: Paragraph) -> Document {
    let mut doc = Document::new();
    doc.add_paragraph(paragraph);
    doc
}

fn nested_bullets() -> Document {
    let mut doc = Document::new();
    doc.add_list("B1", List::bulleted());
    doc.add_paragraph(Paragraph::bullet("B1", 0, "a\n"));
    doc.add_paragraph(Paragraph::bullet("B1", 1, "b\n"));
    doc.add_paragraph(Paragraph::bullet("B1", 0, "c\n"));
    doc
}

// ==================== Document Rendering Tests ====================

#[test]
fn test_heading_level_two() {
    let mut tree = NodeTree::new();
    let root = tree.root();
    let heading = tree.append(root, Node::new(NodeKind::Heading).with_repeat_level(2));
    tree.append(heading, Node::plain("Hello"));

    let manifest = Manifest::new();
    assert_eq!(render("md", &tree, &manifest).unwrap(), "## Hello\n");

    // Rendered on its own, the heading carries its trailing newline.
    let rules = FormatRegistry::global().unwrap().get("md").unwrap();
    let generator = Generator::new(rules, &tree, &manifest);
    assert_eq!(generator.render(heading).unwrap(), "## Hello\n");
}

#[test]
fn test_bold_italic_nesting() {
    let doc = single(Paragraph::new().with_run(TextRun::bold("Hi").with_italic()));
    assert_eq!(md(&doc), "**_Hi_**\n");
    assert_eq!(html(&doc), "<p><b><i>Hi</i></b></p>\n");
}

#[test]
fn test_numbering_across_interleaved_paragraph() {
    let mut doc = Document::new();
    doc.add_list("L1", List::numbered());
    doc.add_paragraph(Paragraph::bullet("L1", 0, "one\n"));
    doc.add_paragraph(Paragraph::with_text("between\n"));
    doc.add_paragraph(Paragraph::bullet("L1", 0, "two\n"));

    assert_eq!(md(&doc), "1. one\n\nbetween\n\n2. two\n");
    assert_eq!(
        html(&doc),
        "<ol>\n<li value=\"1\">one</li>\n</ol>\n<p>between</p>\n<ol>\n<li value=\"2\">two</li>\n</ol>\n"
    );
}

#[test]
fn test_unresolved_image_renders_empty() {
    let mut tree = NodeTree::new();
    let root = tree.root();
    tree.append(root, Node::new(NodeKind::Image).with_object_id("img1"));

    for format in ["md", "html", "txt"] {
        assert_eq!(render(format, &tree, &Manifest::new()).unwrap(), "");
    }
}

#[test]
fn test_heading_inside_table_cell() {
    let mut doc = Document::new();
    doc.add_table(
        Table::new().with_row(TableRow::new(vec![TableCell::with_paragraph(
            Paragraph::heading("T\n", 1),
        )])),
    );

    assert_eq!(md(&doc), "<table><tr><td># T</td></tr></table>\n");
    assert_eq!(
        html(&doc),
        "<table>\n<tr><td><h1>T</h1></td></tr>\n</table>\n"
    );
}

// ==================== Escaping and Empty Content Tests ====================

#[test]
fn test_heading_marker_matches_level() {
    for level in 1..=6u8 {
        let doc = single(Paragraph::heading("Title\n", level));
        let marker = "#".repeat(level as usize);
        assert_eq!(md(&doc), format!("{} Title\n", marker));
        assert_eq!(html(&doc), format!("<h{0}>Title</h{0}>\n", level));
    }
}

#[test]
fn test_empty_blocks_render_nothing() {
    let mut doc = Document::new();
    doc.add_paragraph(Paragraph::new());
    doc.add_paragraph(Paragraph::new().with_run(TextRun::bold("   ")));
    doc.add_paragraph(Paragraph::heading("", 2));

    assert_eq!(md(&doc), "");
    assert_eq!(html(&doc), "");
    assert_eq!(txt(&doc), "");
}

#[test]
fn test_empty_bold_between_text_emits_no_markers() {
    let doc = single(
        Paragraph::with_text("a ")
            .with_run(TextRun::bold(" "))
            .with_run(TextRun::new("b\n")),
    );
    assert_eq!(md(&doc), "a b\n");
}

#[test]
fn test_markdown_escapes_inline_markup() {
    let doc = single(Paragraph::with_text("\\ ` * _ [ ] < > &\n"));
    assert_eq!(md(&doc), "\\\\ \\` \\* \\_ \\[ \\] &lt; &gt; &amp;\n");
}

#[test]
fn test_html_escapes_entities() {
    let doc = single(Paragraph::with_text("<a href=\"x\">Tom & Jerry's</a>\n"));
    assert_eq!(
        html(&doc),
        "<p>&lt;a href=&#34;x&#34;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;</p>\n"
    );
}

#[test]
fn test_markdown_escapes_block_lookalikes() {
    let mut doc = Document::new();
    doc.add_paragraph(Paragraph::with_text("#1 fan\n"));
    doc.add_paragraph(Paragraph::with_text("1999. A good year\n"));
    assert_eq!(md(&doc), "\\#1 fan\n\n1999\\. A good year\n");
}

#[test]
fn test_text_is_escaped_once() {
    let doc = single(Paragraph::new().with_run(
        TextRun::bold("Q&A")
            .with_italic()
            .with_link("https://x.io/?a=1&b=2"),
    ));
    assert_eq!(
        html(&doc),
        "<p><b><i><a href=\"https://x.io/?a=1&amp;b=2\">Q&amp;A</a></i></b></p>\n"
    );
}

#[test]
fn test_code_is_never_escaped_in_markdown() {
    let mut doc = Document::new();
    doc.add_paragraph(Paragraph::new().with_run(TextRun::in_font("let snake_case = *p;\n", "Consolas")));
    doc.add_paragraph(Paragraph::new().with_run(TextRun::in_font("a < b\n", "Consolas")));

    assert_eq!(md(&doc), "```\nlet snake_case = *p;\na < b\n```\n");
    assert_eq!(
        html(&doc),
        "<pre><code>let snake_case = *p;\na &lt; b</code></pre>\n"
    );
    assert_eq!(txt(&doc), "let snake_case = *p;\na < b\n");
}

#[test]
fn test_code_without_newline_is_inline() {
    let mut tree = NodeTree::new();
    let root = tree.root();
    let para = tree.append(root, Node::new(NodeKind::Paragraph));
    tree.append(para, Node::plain("run"));
    tree.append(para, Node::new(NodeKind::Code).with_content("ls -la"));

    assert_eq!(render("md", &tree, &Manifest::new()).unwrap(), "run`ls -la`\n");
    assert_eq!(
        render("html", &tree, &Manifest::new()).unwrap(),
        "<p>run<code>ls -la</code></p>\n"
    );
}

#[test]
fn test_rendering_is_repeatable() {
    let doc = nested_bullets();
    let tree = docmark::parse(&doc).unwrap();
    for format in ["md", "html", "txt"] {
        let first = render(format, &tree, &Manifest::new()).unwrap();
        let second = render(format, &tree, &Manifest::new()).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_concurrent_rendering_of_one_tree() {
    let tree = docmark::parse(&nested_bullets()).unwrap();
    let manifest = Manifest::new();
    let expected = render("md", &tree, &manifest).unwrap();

    let outputs: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| render("md", &tree, &manifest).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(outputs.iter().all(|out| *out == expected));
}

// ==================== Output Format Tests ====================

#[test]
fn test_left_pad_between_runs() {
    let doc = single(
        Paragraph::with_text("Hello")
            .with_run(TextRun::bold("world"))
            .with_run(TextRun::new(" again\n")),
    );
    assert_eq!(md(&doc), "Hello **world** again\n");
    assert_eq!(html(&doc), "<p>Hello <b>world</b> again</p>\n");
    assert_eq!(txt(&doc), "Hello world again\n");
}

#[test]
fn test_links() {
    let doc = single(
        Paragraph::with_text("See ")
            .with_run(TextRun::new("docs").with_link("https://x.io"))
            .with_run(TextRun::new("\n")),
    );
    assert_eq!(md(&doc), "See [docs](https://x.io)\n");
    assert_eq!(html(&doc), "<p>See <a href=\"https://x.io\">docs</a></p>\n");
    assert_eq!(txt(&doc), "See docs <https://x.io>\n");
}

#[test]
fn test_link_text_is_trimmed() {
    let doc = single(
        Paragraph::with_text("See")
            .with_run(TextRun::new("docs ").with_link("u"))
            .with_run(TextRun::new("now\n")),
    );
    assert_eq!(md(&doc), "See [docs](u) now\n");
}

#[test]
fn test_document_opening_with_nested_items_keeps_indent() {
    let mut doc = Document::new();
    doc.add_list("L", List::bulleted());
    doc.add_paragraph(Paragraph::bullet("L", 1, "deep\n"));
    doc.add_paragraph(Paragraph::bullet("L", 1, "deep2\n"));

    assert_eq!(md(&doc), "  * deep\n  * deep2\n");
    assert_eq!(txt(&doc), "  - deep\n  - deep2\n");
}

#[test]
fn test_nested_unordered_list() {
    let doc = nested_bullets();
    assert_eq!(md(&doc), "* a\n  * b\n* c\n");
    assert_eq!(
        html(&doc),
        "<ul>\n<li>a</li>\n<ul>\n<li>b</li>\n</ul>\n<li>c</li>\n</ul>\n"
    );
    assert_eq!(txt(&doc), "- a\n  - b\n- c\n");
}

#[test]
fn test_nested_ordered_list() {
    let mut doc = Document::new();
    doc.add_list("L1", List::numbered());
    doc.add_paragraph(Paragraph::bullet("L1", 0, "a\n"));
    doc.add_paragraph(Paragraph::bullet("L1", 1, "b\n"));
    doc.add_paragraph(Paragraph::bullet("L1", 0, "c\n"));

    assert_eq!(md(&doc), "1. a\n   1. b\n2. c\n");
    assert_eq!(txt(&doc), "1. a\n  1. b\n2. c\n");
}

#[test]
fn test_list_followed_by_paragraph() {
    let mut doc = Document::new();
    doc.add_list("B1", List::bulleted());
    doc.add_paragraph(Paragraph::bullet("B1", 0, "item\n"));
    doc.add_paragraph(Paragraph::with_text("after\n"));

    assert_eq!(md(&doc), "* item\n\nafter\n");
}

#[test]
fn test_resolved_image() {
    let mut para = Paragraph::with_text("See ");
    para.add_inline_object("kix.1");
    let doc = single(para);
    let manifest = Manifest::new().with_file("kix.1", ManifestFile::new("kix.1.png", 640, 480));

    assert_eq!(
        convert("md", &doc, &manifest).unwrap(),
        "See <img src=\"kix.1.png\" height=480 width=640 />\n"
    );
    assert_eq!(
        convert("txt", &doc, &manifest).unwrap(),
        "See [image: kix.1.png]\n"
    );
}

#[test]
fn test_text_document() {
    let mut doc = Document::new();
    doc.add_paragraph(Paragraph::heading("Title\n", 1));
    doc.add_paragraph(Paragraph::with_text("Body\n"));
    doc.add_table(Table::new().with_row(TableRow::from_strings(["a", "b"])));

    assert_eq!(txt(&doc), "Title\n\nBody\n\na\tb\n");
}

#[test]
fn test_format_aliases() {
    let doc = single(Paragraph::with_text("x\n"));
    assert_eq!(
        convert("markdown", &doc, &Manifest::new()).unwrap(),
        md(&doc)
    );
    assert_eq!(convert("TEXT", &doc, &Manifest::new()).unwrap(), txt(&doc));
}

// ==================== Error Tests ====================

#[test]
fn test_unknown_format() {
    let tree = NodeTree::new();
    match render("pdf", &tree, &Manifest::new()) {
        Err(Error::UnknownFormat(key)) => assert_eq!(key, "pdf"),
        other => panic!("expected UnknownFormat, got {:?}", other),
    }
}

#[test]
fn test_custom_table_missing_kind() {
    let rules = RuleTable::new("tiny")
        .with_rule(NodeKind::Document, TagRule::new())
        .with_rule(NodeKind::Paragraph, TagRule::new());
    let tree = docmark::parse(&single(Paragraph::with_text("x"))).unwrap();

    let err = docmark::render::render(&rules, &tree, &Manifest::new()).unwrap_err();
    assert!(matches!(
        err,
        Error::RenderIntegrity {
            kind: NodeKind::Plain,
            ..
        }
    ));
}
