//! Error types for XML navigation and XPath evaluation

/// Result type for XML navigation and XPath operations
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for all boundary operations (parse, compile, evaluate)
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// XML parsing failed
    #[error("XML parsing error: {0}")]
    XmlParse(String),

    /// XPath compilation failed
    #[error("XPath compilation error: {0}")]
    XPathCompile(String),

    /// XPath evaluation failed
    #[error("XPath evaluation error: {0}")]
    XPathEval(String),

    /// Node access error
    #[error("Node access error: {0}")]
    NodeAccess(String),
}

impl Error {
    /// Create a new XML parsing error
    pub fn xml_parse<S: Into<String>>(msg: S) -> Self {
        Error::XmlParse(msg.into())
    }

    /// Create a new XPath compilation error
    pub fn xpath_compile<S: Into<String>>(msg: S) -> Self {
        Error::XPathCompile(msg.into())
    }

    /// Create a new XPath evaluation error
    pub fn xpath_eval<S: Into<String>>(msg: S) -> Self {
        Error::XPathEval(msg.into())
    }

    /// The inner detail message, without the variant prefix.
    ///
    /// Consumers that present errors to end users apply their own
    /// prefixes and want the engine's message alone.
    pub fn message(&self) -> String {
        match self {
            Error::XmlParse(msg)
            | Error::XPathCompile(msg)
            | Error::XPathEval(msg)
            | Error::NodeAccess(msg) => msg.clone(),
        }
    }
}
