//! Browser-environment helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeping web-sys glue out of pages and components leaves them
//! renderable (and testable) without a browser.

pub mod theme;
