//! XmlNavigator implementation for sxd-document

use sxd_document::dom::{self, ChildOfElement, ChildOfRoot, Document, ParentOfChild};
use sxd_document::{parser, Package};
use sxd_xpath::nodeset::Node;
use xml_nav_traits::{
    error::{Error, Result},
    navigator::{NodeType, XmlNavigator},
};

/// Parse an XML document into a package.
///
/// The package owns the tree storage; build a [`SxdNavigator`] from
/// `package.as_document()` to navigate it.
pub fn parse(xml: &str) -> Result<Package> {
    parser::parse(xml).map_err(|e| Error::xml_parse(format!("{:?}", e)))
}

/// Navigator over a parsed sxd-document tree
#[derive(Debug, Clone, Copy)]
pub struct SxdNavigator<'d> {
    document: Document<'d>,
}

impl<'d> SxdNavigator<'d> {
    /// Create a navigator for a parsed document
    pub fn new(document: Document<'d>) -> Self {
        Self { document }
    }

    /// Get the underlying document
    pub fn document(&self) -> Document<'d> {
        self.document
    }

    /// Get the document (root) node
    pub fn root_node(&self) -> Node<'d> {
        Node::Root(self.document.root())
    }

    /// Get the document element (root element), if the document has one
    pub fn document_element(&self) -> Result<Node<'d>> {
        self.document
            .root()
            .children()
            .into_iter()
            .find_map(|child| match child {
                ChildOfRoot::Element(element) => Some(Node::Element(element)),
                _ => None,
            })
            .ok_or_else(|| Error::NodeAccess("Document has no root element".to_string()))
    }
}

fn root_child<'d>(child: ChildOfRoot<'d>) -> Node<'d> {
    match child {
        ChildOfRoot::Element(element) => Node::Element(element),
        ChildOfRoot::Comment(comment) => Node::Comment(comment),
        ChildOfRoot::ProcessingInstruction(pi) => Node::ProcessingInstruction(pi),
    }
}

fn element_child<'d>(child: ChildOfElement<'d>) -> Node<'d> {
    match child {
        ChildOfElement::Element(element) => Node::Element(element),
        ChildOfElement::Text(text) => Node::Text(text),
        ChildOfElement::Comment(comment) => Node::Comment(comment),
        ChildOfElement::ProcessingInstruction(pi) => Node::ProcessingInstruction(pi),
    }
}

fn parent_node<'d>(parent: ParentOfChild<'d>) -> Node<'d> {
    match parent {
        ParentOfChild::Root(root) => Node::Root(root),
        ParentOfChild::Element(element) => Node::Element(element),
    }
}

/// Children of a node, in document order. Empty for node kinds that
/// cannot carry children.
///
/// The parser splits character data around decoded entity references
/// into separate text nodes; a run of adjacent text siblings is
/// collapsed to its head node here, and the head's string value covers
/// the whole run.
pub(crate) fn node_children<'d>(node: Node<'d>) -> Vec<Node<'d>> {
    let raw: Vec<Node<'d>> = match node {
        Node::Root(root) => root.children().into_iter().map(root_child).collect(),
        Node::Element(element) => element.children().into_iter().map(element_child).collect(),
        _ => return Vec::new(),
    };

    let mut children = Vec::with_capacity(raw.len());
    let mut last_was_text = false;
    for child in raw {
        let is_text = matches!(child, Node::Text(_));
        if !(is_text && last_was_text) {
            children.push(child);
        }
        last_was_text = is_text;
    }
    children
}

/// The run of adjacent text siblings containing `text`, as
/// (run head, concatenated value)
pub(crate) fn text_run<'d>(text: dom::Text<'d>) -> (dom::Text<'d>, String) {
    let parent = match text.parent() {
        Some(parent) => parent,
        None => {
            let value = text.text().to_string();
            return (text, value);
        }
    };
    let siblings = parent.children();
    let position = siblings
        .iter()
        .position(|child| matches!(child, ChildOfElement::Text(t) if *t == text));
    let position = match position {
        Some(position) => position,
        None => {
            let value = text.text().to_string();
            return (text, value);
        }
    };

    let mut start = position;
    while start > 0 && matches!(siblings[start - 1], ChildOfElement::Text(_)) {
        start -= 1;
    }

    let mut head = text;
    let mut value = String::new();
    for (offset, sibling) in siblings[start..].iter().enumerate() {
        match sibling {
            ChildOfElement::Text(t) => {
                if offset == 0 {
                    head = t.clone();
                }
                value.push_str(t.text());
            }
            _ => break,
        }
    }
    (head, value)
}

impl<'d> XmlNavigator for SxdNavigator<'d> {
    type Node = Node<'d>;

    fn node_type(&self, node: &Self::Node) -> NodeType {
        match node {
            Node::Root(_) => NodeType::Document,
            Node::Element(_) => NodeType::Element,
            Node::Attribute(_) => NodeType::Attribute,
            Node::Text(_) => NodeType::Text,
            Node::Comment(_) => NodeType::Comment,
            Node::ProcessingInstruction(_) => NodeType::ProcessingInstruction,
            Node::Namespace(_) => NodeType::Namespace,
        }
    }

    fn local_name(&self, node: &Self::Node) -> Option<String> {
        match node {
            Node::Element(element) => Some(element.name().local_part().to_string()),
            Node::Attribute(attribute) => Some(attribute.name().local_part().to_string()),
            Node::ProcessingInstruction(pi) => Some(pi.target().to_string()),
            _ => None,
        }
    }

    fn string_value(&self, node: &Self::Node) -> String {
        match node {
            Node::Root(_) | Node::Element(_) => {
                // XPath string-value of an element: concatenated
                // descendant text, in document order.
                let mut value = String::new();
                let mut stack: Vec<Node<'d>> = self.children(node);
                stack.reverse();
                while let Some(current) = stack.pop() {
                    match current {
                        Node::Text(text) => value.push_str(&text_run(text).1),
                        Node::Element(element) => {
                            let children = node_children(Node::Element(element));
                            for child in children.into_iter().rev() {
                                stack.push(child);
                            }
                        }
                        _ => {}
                    }
                }
                value
            }
            Node::Attribute(attribute) => attribute.value().to_string(),
            Node::Text(text) => text_run(text.clone()).1,
            Node::Comment(comment) => comment.text().to_string(),
            Node::ProcessingInstruction(pi) => pi.value().unwrap_or("").to_string(),
            Node::Namespace(namespace) => namespace.uri().to_string(),
        }
    }

    fn parent(&self, node: &Self::Node) -> Option<Self::Node> {
        match node {
            Node::Root(_) | Node::Namespace(_) => None,
            Node::Element(element) => element.parent().map(parent_node),
            Node::Attribute(attribute) => attribute.parent().map(Node::Element),
            Node::Text(text) => text.parent().map(Node::Element),
            Node::Comment(comment) => comment.parent().map(parent_node),
            Node::ProcessingInstruction(pi) => pi.parent().map(parent_node),
        }
    }

    fn children(&self, node: &Self::Node) -> Vec<Self::Node> {
        node_children(node.clone())
    }

    fn attributes(&self, node: &Self::Node) -> Vec<(String, String)> {
        match node {
            Node::Element(element) => element
                .attributes()
                .into_iter()
                .map(|attribute| {
                    (
                        attribute.name().local_part().to_string(),
                        attribute.value().to_string(),
                    )
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}
