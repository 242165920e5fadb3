//! Typed access errors for rows

/// Returned by the typed getters on [`Row`](crate::model::Row).
///
/// A field holding `null` is not an error; the getters return `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("row has no field '{0}'")]
    Missing(String),

    #[error("field '{field}' is {actual}, expected {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl FieldError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing(field.into())
    }

    pub fn type_mismatch(field: impl Into<String>, expected: &'static str, actual: &'static str) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// The field the getter was asked for.
    pub fn field(&self) -> &str {
        match self {
            Self::Missing(field) | Self::TypeMismatch { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(FieldError::missing("coins").to_string(), "row has no field 'coins'");
        let err = FieldError::type_mismatch("coins", "int", "string");
        assert_eq!(err.to_string(), "field 'coins' is string, expected int");
        assert_eq!(err.field(), "coins");
    }
}
