#![forbid(unsafe_code)]
//! Core data structures for polycube dissection solving: the packed bit
//! matrix, column metadata, cube orientations, the static piece catalogue,
//! and the `Problem` input record.
//!
//! This crate has no notion of search — it is the storage and static-data
//! layer `polycube-solver` builds its matrices and runs Algorithm X on.

pub mod bitmatrix;
pub mod cover_matrix;
pub mod error;
pub mod orientation;
pub mod piece;
pub mod problem;

pub use crate::bitmatrix::BitMatrix;
pub use crate::cover_matrix::CoverMatrix;
pub use crate::error::CoreError;
pub use crate::orientation::{Orientation, Rotation, all_orientations, orientation};
pub use crate::piece::Piece;
pub use crate::problem::Problem;
