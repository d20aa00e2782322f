//! External text hooks: placeholder substitution and identity marking.
//!
//! Both hooks are opaque collaborators. A hook fault never aborts delivery:
//! callers catch the error at the boundary, log it, and keep the original
//! text.

use thiserror::Error;

use crate::RecipientId;

/// A hook implementation fault.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct HookError(pub String);

/// Placeholder substitution applied before color rendering.
pub trait Placeholders: Send + Sync {
    /// Expand placeholders in `text` for the given recipient, if any.
    fn substitute(&self, recipient: Option<RecipientId>, text: &str) -> Result<String, HookError>;
}

/// Identity marking applied to chat lines before segment parsing.
pub trait IdentityMarker: Send + Sync {
    /// Mark `text` as originating from `recipient`.
    fn mark(&self, recipient: RecipientId, text: &str) -> Result<String, HookError>;
}

/// Identity implementation of both hooks.
pub struct NoHooks;

impl Placeholders for NoHooks {
    fn substitute(&self, _recipient: Option<RecipientId>, text: &str) -> Result<String, HookError> {
        Ok(text.to_string())
    }
}

impl IdentityMarker for NoHooks {
    fn mark(&self, _recipient: RecipientId, text: &str) -> Result<String, HookError> {
        Ok(text.to_string())
    }
}
