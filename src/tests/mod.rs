//! Internal test suites.
//!
//! Module-level unit tests live next to the code they cover; this tree holds
//! the cross-cutting property-based suites.

mod property;
