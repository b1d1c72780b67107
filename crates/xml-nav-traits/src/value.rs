//! Query result values

/// The result of evaluating an XPath expression: either a set of matched
/// nodes or a single scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue<N> {
    /// A node-set, in document order
    Nodes(Vec<N>),
    /// A boolean scalar
    Boolean(bool),
    /// A numeric scalar
    Number(f64),
    /// A string scalar
    String(String),
}

impl<N> QueryValue<N> {
    /// Whether this value is a node-set
    pub fn is_nodes(&self) -> bool {
        matches!(self, QueryValue::Nodes(_))
    }

    /// The printable form of a scalar value, or `None` for a node-set.
    ///
    /// Numbers follow XPath string conversion: integral values print
    /// without a fractional part, the specials as `NaN` / `Infinity` /
    /// `-Infinity`.
    pub fn scalar_string(&self) -> Option<String> {
        match self {
            QueryValue::Nodes(_) => None,
            QueryValue::Boolean(b) => Some(b.to_string()),
            QueryValue::Number(n) => Some(format_number(*n)),
            QueryValue::String(s) => Some(s.clone()),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::QueryValue;

    #[test]
    fn scalar_number_formatting() {
        let value: QueryValue<()> = QueryValue::Number(4.0);
        assert_eq!(value.scalar_string(), Some("4".to_string()));

        let value: QueryValue<()> = QueryValue::Number(4.5);
        assert_eq!(value.scalar_string(), Some("4.5".to_string()));

        let value: QueryValue<()> = QueryValue::Number(f64::NAN);
        assert_eq!(value.scalar_string(), Some("NaN".to_string()));

        let value: QueryValue<()> = QueryValue::Number(f64::INFINITY);
        assert_eq!(value.scalar_string(), Some("Infinity".to_string()));

        let value: QueryValue<()> = QueryValue::Number(f64::NEG_INFINITY);
        assert_eq!(value.scalar_string(), Some("-Infinity".to_string()));
    }

    #[test]
    fn scalar_boolean_and_string() {
        let value: QueryValue<()> = QueryValue::Boolean(true);
        assert_eq!(value.scalar_string(), Some("true".to_string()));

        let value: QueryValue<()> = QueryValue::String("hello".to_string());
        assert_eq!(value.scalar_string(), Some("hello".to_string()));
    }

    #[test]
    fn nodeset_has_no_scalar_form() {
        let value: QueryValue<u32> = QueryValue::Nodes(vec![1, 2, 3]);
        assert!(value.is_nodes());
        assert_eq!(value.scalar_string(), None);
    }
}
