//! Canonical XML fragment rendering for XPath results.
//!
//! Re-renders an arbitrary matched node (element, attribute, or text)
//! as well-formed XML, recursively reconstructing descendant structure.
//! Formatting rules:
//!
//! - elements without element or text children self-close (`<name />`),
//!   regardless of attribute count; any child forces open/close form
//! - attributes and children appear in navigator (document) order,
//!   never sorted
//! - text content is trimmed and escaped; attribute values are written
//!   as the navigator returns them
//! - a standalone attribute match renders as the synthetic element
//!   `<name>value</name>`
//!
//! Rendering walks an explicit work stack rather than recursing, so
//! deeply nested documents cannot overflow the call stack.

use xml_nav_traits::{NodeType, XmlNavigator};

enum Frame<N> {
    Node(N),
    CloseTag(String),
}

/// Append the canonical XML text of `node` and its subtree to `out`.
///
/// Rendering a well-formed tree cannot fail; a navigator positioned on
/// an unreachable node is a precondition violation, not a runtime error.
pub fn render<T: XmlNavigator>(nav: &T, node: &T::Node, out: &mut String) {
    let mut stack = vec![Frame::Node(node.clone())];
    while let Some(frame) = stack.pop() {
        match frame {
            Frame::CloseTag(name) => {
                out.push_str("</");
                out.push_str(&name);
                out.push('>');
            }
            Frame::Node(node) => render_node(nav, &node, out, &mut stack),
        }
    }
}

fn render_node<T: XmlNavigator>(
    nav: &T,
    node: &T::Node,
    out: &mut String,
    stack: &mut Vec<Frame<T::Node>>,
) {
    match nav.node_type(node) {
        NodeType::Text => {
            escape_text(nav.string_value(node).trim(), out);
        }
        NodeType::Attribute => {
            // A standalone attribute match renders as a synthetic
            // element wrapping its value, distinct from the name="value"
            // form used when nested under the owning element.
            let name = nav.local_name(node).unwrap_or_default();
            out.push('<');
            out.push_str(&name);
            out.push('>');
            out.push_str(&nav.string_value(node));
            out.push_str("</");
            out.push_str(&name);
            out.push('>');
        }
        NodeType::Document => {
            // A matched document node renders its children with no
            // wrapper tag.
            for child in renderable_children(nav, node).into_iter().rev() {
                stack.push(Frame::Node(child));
            }
        }
        NodeType::Element => {
            let name = nav.local_name(node).unwrap_or_default();
            out.push('<');
            out.push_str(&name);

            for (attr_name, attr_value) in nav.attributes(node) {
                out.push(' ');
                out.push_str(&attr_name);
                out.push_str("=\"");
                out.push_str(&attr_value);
                out.push('"');
            }

            let children = renderable_children(nav, node);
            if children.is_empty() {
                out.push_str(" />");
                return;
            }

            out.push('>');
            stack.push(Frame::CloseTag(name));
            for child in children.into_iter().rev() {
                stack.push(Frame::Node(child));
            }
        }
        // Comments, processing instructions, and namespace nodes are
        // outside the reconstructed fragment subset.
        NodeType::Comment | NodeType::ProcessingInstruction | NodeType::Namespace => {}
    }
}

/// Element and text children of a node, in document order.
///
/// Other node kinds render nothing and do not count toward the
/// self-closing decision.
fn renderable_children<T: XmlNavigator>(nav: &T, node: &T::Node) -> Vec<T::Node> {
    nav.children(node)
        .into_iter()
        .filter(|child| {
            matches!(
                nav.node_type(child),
                NodeType::Element | NodeType::Text
            )
        })
        .collect()
}

/// Escape the five XML-reserved characters into `out`
pub fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::escape_text;

    fn escaped(text: &str) -> String {
        let mut out = String::new();
        escape_text(text, &mut out);
        out
    }

    #[test]
    fn escapes_reserved_characters() {
        assert_eq!(escaped("a & b"), "a &amp; b");
        assert_eq!(escaped("<tag>"), "&lt;tag&gt;");
        assert_eq!(escaped(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escaped("it's"), "it&apos;s");
    }

    #[test]
    fn passes_plain_text_through() {
        assert_eq!(escaped("plain text"), "plain text");
        assert_eq!(escaped(""), "");
    }
}
