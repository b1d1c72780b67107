//! XmlNavigator and XPath evaluation over sxd-document trees.
//!
//! This crate adapts the `sxd-document` DOM and the `sxd-xpath` engine
//! to the navigation abstraction in `xml-nav-traits`: parsed documents
//! are exposed through [`SxdNavigator`], and compiled XPath expressions
//! evaluate to a [`xml_nav_traits::QueryValue`] whose node-sets are
//! normalized into document order.

pub mod tree;
pub mod xpath;

pub use tree::{parse, SxdNavigator};
pub use xpath::{compile, CompiledXPath};

// Re-exported so consumers can hold the parsed package without naming
// the engine crate directly.
pub use sxd_document::Package;
