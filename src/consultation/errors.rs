//! Consultation Rendering Error Types
//!
//! Defines error types for the consultation rendering system.
//! Uses `thiserror` for ergonomic error handling with source context.

use thiserror::Error;

// ============================================================================
// Render Errors
// ============================================================================

/// Errors produced by consultation rendering operations.
///
/// Unresolved placeholders are deliberately NOT an error: they surface as
/// inline missing-value markers in the rendered text and as validation
/// warnings (see `validation::validate_template`).
#[derive(Error, Debug)]
pub enum RenderError {
    /// No template exists for the requested consultation type.
    #[error("consultation template not found for type '{consultation_type}'")]
    TemplateNotFound {
        /// The consultation-type key that had no template.
        consultation_type: String,
    },

    /// A consultation-type key could not be parsed.
    #[error("unknown consultation type '{value}'")]
    UnknownConsultationType {
        /// The unrecognized key.
        value: String,
    },

    /// The JSON exchange form of a template set failed to deserialize.
    #[error("template set parse error: {message}")]
    TemplateSetParse {
        /// Description of the parse failure.
        message: String,
        /// Underlying serde error.
        #[source]
        source: Option<serde_json::Error>,
    },
}

impl RenderError {
    /// Create a new TemplateNotFound error.
    pub fn template_not_found(consultation_type: impl Into<String>) -> Self {
        Self::TemplateNotFound {
            consultation_type: consultation_type.into(),
        }
    }

    /// Create a new UnknownConsultationType error.
    pub fn unknown_consultation_type(value: impl Into<String>) -> Self {
        Self::UnknownConsultationType {
            value: value.into(),
        }
    }

    /// Create a new TemplateSetParse error from a serde failure.
    pub fn template_set_parse(source: serde_json::Error) -> Self {
        Self::TemplateSetParse {
            message: source.to_string(),
            source: Some(source),
        }
    }
}

/// Result type alias for consultation rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;

// ============================================================================
// Tests
// ============================================================================
