//! Consultation Module
//!
//! Template-based rendering of product consultation answers for
//! Vietnamese e-commerce chat:
//! - Merging one template with per-product field data
//! - Vietnamese-aware value formatting and punctuation cleanup
//! - Authoring-time template validation
//! - Batch rendering, diacritic-insensitive search, and summary stats
//!
//! ## Architecture
//!
//! ```text
//! RenderContext ──► renderer::render ──► RenderedResult
//!       ├── templates::TemplateSet (per-category, builtin defaults)
//!       └── types::ConsultationData (open field map)
//!
//! validate_template ──► TemplateValidation   (authoring UI, live feedback)
//! render_all / stats                         (batch + dashboard utilities)
//! search ──► text::vietnamese                (diacritic-insensitive match)
//! ```
//!
//! Everything here is synchronous, pure-data, and safe to call from any
//! number of threads: no shared mutable state, each call allocates its own
//! result.

/// Error types for consultation rendering operations.
pub mod errors;

/// Core data models: consultation types, languages, contexts, results.
pub mod types;

/// Template sets and the built-in Vietnamese defaults.
pub mod templates;

/// The rendering engine: placeholder substitution and post-processing.
pub mod renderer;

/// Authoring-time template validation.
pub mod validation;

/// Diacritic-insensitive search over rendered results.
pub mod search;

/// Summary statistics over rendered results.
pub mod stats;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use errors::{RenderError, Result};
pub use renderer::{extract_placeholders, generate_preview, render, render_all};
pub use search::{highlight_content, search_consultation_content};
pub use stats::{generate_stats, ConsultationStats};
pub use templates::TemplateSet;
pub use types::{
    ConsultationData, ConsultationType, Language, RenderContext, RenderContextBuilder,
    RenderMetadata, RenderedResult,
};
pub use validation::{validate_template, TemplateValidation};

// =============================================================================
// Tests
// =============================================================================
