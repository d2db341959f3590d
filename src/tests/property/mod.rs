//! Property-based tests for the consultation rendering engine.
//!
//! This module contains property-based tests using the proptest framework.
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Running Property Tests
//!
//! Run all property tests:
//! ```sh
//! cargo test property --release
//! ```
//!
//! ## Test Modules
//!
//! - `renderer_props`: Tests for placeholder resolution
//!   - Fully-resolvable templates render with no brace remnants or markers
//!   - Missing fields always surface as markers naming the field
//!   - Placeholder extraction is duplicate-free
//!   - Rendered content is deterministic for fixed inputs
//!
//! - `vietnamese_props`: Tests for diacritic folding
//!   - `normalize` is idempotent and produces no marks, đ, or uppercase
//!   - `matches` is reflexive
//!   - `highlight` with an empty marker reproduces its input exactly
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```

mod renderer_props;
mod vietnamese_props;
