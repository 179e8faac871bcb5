use thiserror::Error;

/// Errors raised by the bit-matrix engine and the static piece catalogue.
///
/// Every variant here corresponds to a caller precondition violation (bad
/// index, unknown name, malformed placement): the solver's own dead ends and
/// "no solution" outcomes are not errors and never produce a `CoreError`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("row index {i} out of range for matrix with {m} rows")]
    RowOutOfRange { i: usize, m: usize },

    #[error("column index {j} out of range for matrix with {n} columns")]
    ColOutOfRange { j: usize, n: usize },

    #[error("row insert index {i} out of range (must be 0..={m})")]
    RowInsertOutOfRange { i: usize, m: usize },

    #[error("column insert index {j} out of range (must be 0..={n})")]
    ColInsertOutOfRange { j: usize, n: usize },

    #[error("unknown piece name {0:?}")]
    UnknownPiece(String),

    #[error("duplicate piece name {0:?} in piece library")]
    DuplicatePiece(&'static str),

    #[error("orientation index {0} out of range (must be 1..=24)")]
    OrientationOutOfRange(u8),

    #[error(
        "placement of piece {piece:?} orientation {orientation} puts cube at ({x}, {y}, {z}), outside box {w}x{h}x{d}"
    )]
    PlacementOutsideBox {
        piece: String,
        orientation: u8,
        x: i32,
        y: i32,
        z: i32,
        w: u32,
        h: u32,
        d: u32,
    },

    #[error("box dimensions must all be at least 1, got {w}x{h}x{d}")]
    InvalidBoxDimensions { w: u32, h: u32, d: u32 },
}
