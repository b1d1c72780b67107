//! XML node navigation trait

use std::fmt::Debug;

/// Type of XML node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// Document (root) node
    Document,
    /// Element node
    Element,
    /// Attribute node
    Attribute,
    /// Text node
    Text,
    /// Comment node
    Comment,
    /// Processing instruction node
    ProcessingInstruction,
    /// Namespace node
    Namespace,
}

/// Trait for navigating a parsed XML tree.
///
/// This trait abstracts over different XML tree representations so the
/// fragment renderer can walk any backend's query results. Nodes are
/// immutable handles; `children` and `attributes` yield their sequences
/// in document order, which backends must preserve.
///
/// Note: this trait does not require Send + Sync as XML libraries
/// commonly keep non-thread-safe internal references; rendering is
/// single-threaded by design.
pub trait XmlNavigator {
    /// Type representing a node handle in this tree
    type Node: Clone + PartialEq + Debug;

    /// Get the type of a node
    fn node_type(&self, node: &Self::Node) -> NodeType;

    /// Get the local name of a node (without namespace prefix), if it has one
    fn local_name(&self, node: &Self::Node) -> Option<String>;

    /// Get the string value of a node (as defined by XPath)
    fn string_value(&self, node: &Self::Node) -> String;

    /// Get the parent of a node, if it has one
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Get all children of a node, in document order.
    ///
    /// Adjacent text siblings (as produced by parsers that split text
    /// around entity references) are presented as a single text node
    /// whose string value is the concatenated run.
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Get all attributes of an element node as (name, value) pairs,
    /// in document order
    fn attributes(&self, node: &Self::Node) -> Vec<(String, String)>;
}
