//! XPath compilation and evaluation for sxd-document trees

use std::collections::HashMap;

use sxd_xpath::nodeset::{Node, Nodeset};
use sxd_xpath::{Context, Factory, Value, XPath};
use xml_nav_traits::{
    error::{Error, Result},
    value::QueryValue,
};

use crate::tree::SxdNavigator;

/// A compiled XPath expression.
///
/// Compilation is independent of any document, so expression errors are
/// caught before input is read or parsed.
pub struct CompiledXPath {
    xpath: XPath,
}

/// Compile an XPath expression
pub fn compile(expression: &str) -> Result<CompiledXPath> {
    let factory = Factory::new();
    let xpath = factory
        .build(expression)
        .map_err(|e| Error::xpath_compile(format!("{:?}", e)))?
        .ok_or_else(|| Error::xpath_compile("empty xpath expression".to_string()))?;
    Ok(CompiledXPath { xpath })
}

impl CompiledXPath {
    /// Evaluate the expression against the navigator's document.
    ///
    /// Node-set results are returned in document order regardless of the
    /// engine's internal set ordering.
    pub fn evaluate<'d>(&self, nav: &SxdNavigator<'d>) -> Result<QueryValue<Node<'d>>> {
        let context = Context::new();
        let value = self
            .xpath
            .evaluate(&context, nav.document().root())
            .map_err(|e| Error::xpath_eval(format!("{:?}", e)))?;

        Ok(match value {
            Value::Nodeset(nodeset) => QueryValue::Nodes(document_order(nav, &nodeset)),
            Value::Boolean(b) => QueryValue::Boolean(b),
            Value::Number(n) => QueryValue::Number(n),
            Value::String(s) => QueryValue::String(s),
        })
    }
}

/// Sort a node-set into document order.
///
/// sxd-xpath node-sets are hash-backed and iterate in arbitrary order.
/// One pass over the document assigns each node a position, attributes
/// directly after their owning element in source order; matches are then
/// sorted by position. Nodes outside the walk (namespace nodes) sort last.
fn document_order<'d>(nav: &SxdNavigator<'d>, nodeset: &Nodeset<'d>) -> Vec<Node<'d>> {
    let mut positions: HashMap<Node<'d>, usize> = HashMap::new();
    let mut next = 0usize;
    let mut stack: Vec<Node<'d>> = vec![nav.root_node()];
    while let Some(node) = stack.pop() {
        let mut children = crate::tree::node_children(node.clone());
        children.reverse();

        let attributes: Vec<Node<'d>> = match &node {
            Node::Element(element) => element
                .attributes()
                .into_iter()
                .map(Node::Attribute)
                .collect(),
            _ => Vec::new(),
        };

        positions.insert(node, next);
        next += 1;
        for attribute in attributes {
            positions.insert(attribute, next);
            next += 1;
        }
        stack.extend(children);
    }

    // A matched text node stands for its whole run of adjacent text
    // siblings; map each to the run head and drop the duplicates that
    // leaves behind.
    let mut nodes: Vec<Node<'d>> = nodeset
        .iter()
        .map(|node| match node {
            Node::Text(text) => Node::Text(crate::tree::text_run(text).0),
            other => other,
        })
        .collect();
    nodes.sort_by_key(|node| positions.get(node).copied().unwrap_or(usize::MAX));
    nodes.dedup();
    nodes
}
