//! JSON Patch (RFC 6902) application to the villa update view.

use json_patch::Patch;

use crate::models::VillaUpdateDto;

/// Why a patch document could not be applied.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchError {
    /// An operation failed (missing path, failed `test`, bad pointer)
    Apply(String),
    /// The patched document no longer has the villa shape
    Shape(String),
}

impl std::fmt::Display for PatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatchError::Apply(msg) => write!(f, "Patch could not be applied: {}", msg),
            PatchError::Shape(msg) => write!(f, "Patched villa is malformed: {}", msg),
        }
    }
}

impl std::error::Error for PatchError {}

/// Apply `operations` to a copy of `target`. The target is left untouched.
pub fn apply_patch(operations: &Patch, target: &VillaUpdateDto) -> Result<VillaUpdateDto, PatchError> {
    let mut doc = serde_json::to_value(target).map_err(|e| PatchError::Shape(e.to_string()))?;

    json_patch::patch(&mut doc, &operations.0).map_err(|e| PatchError::Apply(e.to_string()))?;

    serde_json::from_value(doc).map_err(|e| PatchError::Shape(e.to_string()))
}
