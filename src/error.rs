//! Error handling for quadgen
//!
//! Construction errors are surfaced to the immediate caller. A failed
//! face insert simply does not happen; the mesh is left unchanged and
//! the caller decides whether to retry with corrected indices.

use thiserror::Error;

/// Main error type for quadgen
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenError {
    /// A face-construction call referenced a vertex index outside the
    /// current valid range.
    #[error("vertex index {index} out of range (vertex count {vertex_count})")]
    InvalidIndex { index: u32, vertex_count: usize },

    /// The four corners of a quad face must reference distinct vertices.
    #[error("degenerate quad face: indices {indices:?} are not distinct")]
    DegenerateFace { indices: [u32; 4] },

    /// The flattened face sequence and the lookup map diverged. This is
    /// an implementation bug, not a user input error.
    #[error("face lookup inconsistent: {faces} flattened faces, {lookup} lookup entries")]
    InconsistentFaceCount { faces: usize, lookup: usize },

    /// A generator parameter was rejected before any work started.
    #[error("invalid config: {field} ({reason})")]
    InvalidConfig { field: String, reason: String },
}

/// Type alias for Results in quadgen
pub type GenResult<T> = Result<T, GenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GenError::InvalidIndex {
            index: 24,
            vertex_count: 24,
        };
        assert_eq!(
            err.to_string(),
            "vertex index 24 out of range (vertex count 24)"
        );
    }

    #[test]
    fn test_inconsistent_count_display() {
        let err = GenError::InconsistentFaceCount { faces: 6, lookup: 5 };
        assert_eq!(
            err.to_string(),
            "face lookup inconsistent: 6 flattened faces, 5 lookup entries"
        );
    }
}
