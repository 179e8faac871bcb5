use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("placement of piece {piece:?} orientation {orientation} puts cube at ({x}, {y}, {z}), outside box {w}x{h}x{d}")]
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

    #[error(transparent)]
    Core(#[from] polycube_core::CoreError),
}
