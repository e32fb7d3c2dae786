//! Utility modules.

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;

/// Serde helpers for the registrar's loosely typed scalar fields.
pub mod lenient;
