//! Error handling for Cubeforge
//!
//! Provides error types for all layers of the engine:
//! - Placement errors (dropping a module where no room exists)
//! - Assembly errors (operations addressing unknown modules or groups)
//! - Mesh errors (geometry import and availability)
//!
//! All error types use `thiserror` for ergonomic error handling. None of
//! these conditions is fatal: the worst outcome anywhere in the engine is a
//! refused mutation or a placeholder geometry.

use thiserror::Error;

/// Placement error type
///
/// Raised when a drop intent cannot be satisfied. Reported to the user as an
/// informational condition; the assembly is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The quantized drop cell and all 26 neighboring offsets are occupied
    #[error("No available position near the drop point")]
    NoRoomNearby,
}

/// Assembly error type
///
/// Represents misuse of the engine surface: an operation addressed a module
/// or group that does not exist in the current state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    /// No module with the given id exists
    #[error("Unknown module id {id}")]
    UnknownModule {
        /// The id that failed to resolve.
        id: u64,
    },

    /// No group with the given id exists in the current grouping
    #[error("Unknown group id {id}")]
    UnknownGroup {
        /// The id that failed to resolve.
        id: usize,
    },
}

/// Mesh error type
///
/// Errors from loading or resolving named STL geometries. A missing geometry
/// during rendering is *not* routed through this type; the renderer degrades
/// to a placeholder shape instead.
#[derive(Error, Debug)]
pub enum MeshError {
    /// Failed to read a geometry file
    #[error("Failed to read geometry file {path}: {source}")]
    Io {
        /// The path that failed.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse STL data
    #[error("Failed to parse STL data for '{name}': {reason}")]
    Parse {
        /// The geometry name being loaded.
        name: String,
        /// What went wrong.
        reason: String,
    },

    /// A named geometry was requested before any load completed
    #[error("Geometry '{name}' is not loaded")]
    NotLoaded {
        /// The requested geometry name.
        name: String,
    },
}

/// Top-level error type encompassing all engine errors
#[derive(Error, Debug)]
pub enum Error {
    /// Placement error
    #[error(transparent)]
    Placement(#[from] PlacementError),

    /// Assembly error
    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    /// Mesh error
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Convenience result type using the top-level [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
