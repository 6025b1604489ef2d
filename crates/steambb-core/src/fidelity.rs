//! Fidelity tracking - know what was lost in conversion.

/// Result of a conversion operation, including fidelity warnings.
#[derive(Debug)]
pub struct ConversionResult<T> {
    /// The conversion output.
    pub value: T,
    /// Warnings about information that was lost or transformed.
    pub warnings: Vec<FidelityWarning>,
}

impl<T> ConversionResult<T> {
    /// Create a result with warnings.
    pub fn with_warnings(value: T, warnings: Vec<FidelityWarning>) -> Self {
        Self { value, warnings }
    }

    /// Check if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// A warning about fidelity loss during conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FidelityWarning {
    /// What kind of issue?
    pub kind: WarningKind,
    /// Human-readable message.
    pub message: String,
}

impl FidelityWarning {
    /// Create a new warning.
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Kind of fidelity issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// Node kind not supported, using fallback.
    UnsupportedNode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_has_no_warnings() {
        let result = ConversionResult::with_warnings("out", Vec::new());
        assert!(!result.has_warnings());
    }

    #[test]
    fn test_unsupported_node_warning() {
        let result = ConversionResult::with_warnings(
            (),
            vec![FidelityWarning::new(
                WarningKind::UnsupportedNode("table".to_string()),
                "Unhandled node type: table",
            )],
        );
        assert!(result.has_warnings());
        assert_eq!(
            result.warnings[0].kind,
            WarningKind::UnsupportedNode("table".to_string())
        );
    }
}
