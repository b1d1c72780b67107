//! Round-trip tests for the fragment renderer.
//!
//! Each case parses a document, selects a node with XPath, renders it,
//! and compares against the expected canonical text.

use sxd_adapter::{compile, parse, SxdNavigator};
use xml_nav_traits::QueryValue;

/// Parse `xml`, select `expression`, and render every match
fn render_matches(xml: &str, expression: &str) -> Vec<String> {
    let package = parse(xml).expect("test document must parse");
    let document = package.as_document();
    let nav = SxdNavigator::new(document);

    let query = compile(expression).expect("test expression must compile");
    match query.evaluate(&nav).expect("evaluation must succeed") {
        QueryValue::Nodes(nodes) => nodes
            .iter()
            .map(|node| {
                let mut out = String::new();
                xq_render::render(&nav, node, &mut out);
                out
            })
            .collect(),
        other => panic!("expected a node-set, got {:?}", other),
    }
}

/// Render the document element of `xml`
fn render_root(xml: &str) -> String {
    let matches = render_matches(xml, "/*");
    assert_eq!(matches.len(), 1, "expected exactly one root match");
    matches.into_iter().next().unwrap()
}

#[test]
fn renders_empty_element_self_closed() {
    assert_eq!(render_root("<testing />"), "<testing />");
    assert_eq!(render_root("<testing></testing>"), "<testing />");
}

#[test]
fn renders_attributes_in_document_order() {
    assert_eq!(render_root(r#"<testing id="one" />"#), r#"<testing id="one" />"#);
    assert_eq!(
        render_root(r#"<testing id="one" name="two" />"#),
        r#"<testing id="one" name="two" />"#
    );
}

#[test]
fn child_forces_open_close_form() {
    assert_eq!(
        render_root("<testing>plain text</testing>"),
        "<testing>plain text</testing>"
    );
    assert_eq!(
        render_root("<testing><child /></testing>"),
        "<testing><child /></testing>"
    );
    assert_eq!(
        render_root(r#"<testing id="parent"><child /></testing>"#),
        r#"<testing id="parent"><child /></testing>"#
    );
}

#[test]
fn renders_siblings_in_document_order() {
    assert_eq!(
        render_root(r#"<testing><child id="1" /><child id="2" /></testing>"#),
        r#"<testing><child id="1" /><child id="2" /></testing>"#
    );
    assert_eq!(
        render_root(r#"<testing name="test"><child id="1" /><child id="2" /></testing>"#),
        r#"<testing name="test"><child id="1" /><child id="2" /></testing>"#
    );
}

#[test]
fn round_trips_nested_structure() {
    let books = "<books><book><name lang=\"en\">first</name>\
                 <title lang=\"en\">the title</title></book></books>";
    assert_eq!(render_root(books), books);

    let two_books = "<books><book><name lang=\"en\">first</name>\
                     <title lang=\"en\">the title</title></book>\
                     <book><name lang=\"en\">second</name>\
                     <title lang=\"en\">different</title></book></books>";
    assert_eq!(render_root(two_books), two_books);
}

#[test]
fn trims_and_escapes_text_nodes() {
    assert_eq!(
        render_matches("<testing>  plain text  </testing>", "/testing/text()"),
        vec!["plain text"]
    );
    assert_eq!(
        render_matches("<testing>a &amp; b</testing>", "/testing/text()"),
        vec!["a &amp; b"]
    );
}

#[test]
fn escapes_text_inside_elements() {
    assert_eq!(
        render_root("<testing>a &amp; b</testing>"),
        "<testing>a &amp; b</testing>"
    );
    assert_eq!(
        render_root("<testing>1 &lt; 2</testing>"),
        "<testing>1 &lt; 2</testing>"
    );
}

#[test]
fn renders_standalone_attributes_as_synthetic_elements() {
    let books = r#"<books><book id="1" type="short"/><book id="2" type="short"/></books>"#;
    assert_eq!(
        render_matches(books, "//book/@id"),
        vec!["<id>1</id>", "<id>2</id>"]
    );
    assert_eq!(
        render_matches(books, "//book/@type"),
        vec!["<type>short</type>", "<type>short</type>"]
    );
}

#[test]
fn whitespace_only_text_child_keeps_open_close_form() {
    assert_eq!(render_root("<testing>\n</testing>"), "<testing></testing>");
}

#[test]
fn comment_only_element_self_closes() {
    assert_eq!(
        render_root("<testing><!-- note --></testing>"),
        "<testing />"
    );
}

#[test]
fn renders_deeply_nested_documents() {
    let depth = 2_000;
    let mut xml = String::new();
    for _ in 0..depth {
        xml.push_str("<d>");
    }
    for _ in 0..depth {
        xml.push_str("</d>");
    }
    let rendered = render_root(&xml);
    assert!(rendered.starts_with("<d><d>"));
    assert!(rendered.ends_with("</d></d>"));
}
