//! The `Problem` input record: box dimensions, the pieces to place, and the
//! optional symmetry-breaking flags `MatrixBuilder` consults per piece.

use crate::error::CoreError;
use crate::piece;

/// A polycube dissection problem: a box to fill and the pieces to fill it
/// with.
///
/// `pieces` is an ordered multiset — each entry becomes its own matrix
/// column, so two occurrences of the same piece name are two distinct
/// columns (see the "exact fit, multiple positions" scenario: the core
/// treats repeated pieces as distinguishable placements, not as one
/// column with multiplicity).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub pieces: Vec<String>,
    constrain_x: Option<String>,
    constrain_y: Option<String>,
    constrain_z: Option<String>,
    lock: Option<String>,
    lockcount: u8,
}

impl Problem {
    /// Builds a problem, validating box dimensions and that every named
    /// piece exists in the static catalogue.
    pub fn new(
        width: u32,
        height: u32,
        depth: u32,
        pieces: Vec<String>,
    ) -> Result<Self, CoreError> {
        if width == 0 || height == 0 || depth == 0 {
            return Err(CoreError::InvalidBoxDimensions {
                w: width,
                h: height,
                d: depth,
            });
        }
        for name in &pieces {
            piece::lookup(name)?;
        }
        Ok(Self {
            width,
            height,
            depth,
            pieces,
            constrain_x: None,
            constrain_y: None,
            constrain_z: None,
            lock: None,
            lockcount: 1,
        })
    }

    /// Sets `constrain_x`/`constrain_y`/`constrain_z` together for the named
    /// piece (the `constrain` shorthand field of the problem file format).
    pub fn constrain_all(mut self, name: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        piece::lookup(&name)?;
        self.constrain_x = Some(name.clone());
        self.constrain_y = Some(name.clone());
        self.constrain_z = Some(name);
        Ok(self)
    }

    pub fn constrain_x(mut self, name: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        piece::lookup(&name)?;
        self.constrain_x = Some(name);
        Ok(self)
    }

    pub fn constrain_y(mut self, name: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        piece::lookup(&name)?;
        self.constrain_y = Some(name);
        Ok(self)
    }

    pub fn constrain_z(mut self, name: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        piece::lookup(&name)?;
        self.constrain_z = Some(name);
        Ok(self)
    }

    /// Restricts `name` to the first `lockcount` of the 24 orientations.
    pub fn lock(mut self, name: impl Into<String>, lockcount: u8) -> Result<Self, CoreError> {
        let name = name.into();
        piece::lookup(&name)?;
        if lockcount == 0 {
            return Err(CoreError::OrientationOutOfRange(lockcount));
        }
        self.lock = Some(name);
        self.lockcount = lockcount.min(24);
        Ok(self)
    }

    /// Whether a piece named `name`'s translational range should be halved
    /// along the x/y/z axis respectively.
    pub fn axis_constraints(&self, name: &str) -> (bool, bool, bool) {
        (
            self.constrain_x.as_deref() == Some(name),
            self.constrain_y.as_deref() == Some(name),
            self.constrain_z.as_deref() == Some(name),
        )
    }

    /// The orientation budget (1..=24) for a piece named `name`: `lockcount`
    /// if it's the locked piece, 24 otherwise.
    pub fn orientation_limit(&self, name: &str) -> u8 {
        if self.lock.as_deref() == Some(name) {
            self.lockcount
        } else {
            24
        }
    }

    /// Whether `pieces[index]` is the *first* occurrence of its name in the
    /// piece list. Symmetry-breaking flags (`constrain_*`, `lock`) name a
    /// piece, but when that name occurs more than once in `pieces` (e.g.
    /// eight `1_` monocubes filling a cube), only the anchor occurrence is
    /// restricted — restricting every occurrence identically would pin them
    /// all to the same handful of cells and make the problem unsolvable.
    /// The other occurrences of the same name remain free to break the
    /// box's global symmetry without over-constraining the placement.
    pub fn occurrence_is_anchor(&self, index: usize) -> bool {
        match self.pieces.get(index) {
            Some(name) => self.pieces.iter().position(|n| n == name) == Some(index),
            None => false,
        }
    }

    /// Number of box-cell columns: `width * height * depth`.
    pub fn box_columns(&self) -> usize {
        self.width as usize * self.height as usize * self.depth as usize
    }

    /// Maps a 0-based box cell to its column index, Z-major with X varying
    /// fastest: `z*H*W + y*W + x`.
    pub fn xyz_to_j(&self, x: u32, y: u32, z: u32) -> Result<usize, CoreError> {
        if x >= self.width || y >= self.height || z >= self.depth {
            return Err(CoreError::PlacementOutsideBox {
                piece: String::new(),
                orientation: 0,
                x: x as i32,
                y: y as i32,
                z: z as i32,
                w: self.width,
                h: self.height,
                d: self.depth,
            });
        }
        let (w, h) = (self.width as usize, self.height as usize);
        Ok(z as usize * h * w + y as usize * w + x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimension() {
        assert!(Problem::new(0, 1, 1, vec!["1_".into()]).is_err());
    }

    #[test]
    fn rejects_unknown_piece() {
        assert!(Problem::new(1, 1, 1, vec!["nope".into()]).is_err());
    }

    #[test]
    fn xyz_to_j_is_z_major_x_fastest() {
        let p = Problem::new(2, 2, 2, vec![]).unwrap();
        assert_eq!(p.xyz_to_j(0, 0, 0).unwrap(), 0);
        assert_eq!(p.xyz_to_j(1, 0, 0).unwrap(), 1);
        assert_eq!(p.xyz_to_j(0, 1, 0).unwrap(), 2);
        assert_eq!(p.xyz_to_j(0, 0, 1).unwrap(), 4);
        assert_eq!(p.box_columns(), 8);
    }

    #[test]
    fn xyz_to_j_out_of_bounds_errors() {
        let p = Problem::new(2, 2, 2, vec![]).unwrap();
        assert!(p.xyz_to_j(2, 0, 0).is_err());
    }

    #[test]
    fn constrain_all_sets_every_axis() {
        let p = Problem::new(2, 2, 2, vec!["1_".into()])
            .unwrap()
            .constrain_all("1_")
            .unwrap();
        assert_eq!(p.axis_constraints("1_"), (true, true, true));
        assert_eq!(p.axis_constraints("2_"), (false, false, false));
    }

    #[test]
    fn occurrence_is_anchor_only_for_first_matching_index() {
        let p = Problem::new(2, 1, 1, vec!["1_".into(), "1_".into(), "2_".into()]).unwrap();
        assert!(p.occurrence_is_anchor(0));
        assert!(!p.occurrence_is_anchor(1));
        assert!(p.occurrence_is_anchor(2));
    }

    #[test]
    fn lock_sets_orientation_limit_only_for_named_piece() {
        let p = Problem::new(1, 1, 1, vec!["1_".into()])
            .unwrap()
            .lock("1_", 1)
            .unwrap();
        assert_eq!(p.orientation_limit("1_"), 1);
        assert_eq!(p.orientation_limit("2_"), 24);
    }
}
