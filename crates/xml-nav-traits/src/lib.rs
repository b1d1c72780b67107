//! Node navigation abstraction for XPath result rendering.
//!
//! This crate defines the navigator trait an XML backend must implement
//! for its query results to be re-rendered as XML fragments, along with
//! the result value enum produced by XPath evaluation.

pub mod error;
pub mod navigator;
pub mod value;

pub use error::Error;
pub use navigator::{NodeType, XmlNavigator};
pub use value::QueryValue;
