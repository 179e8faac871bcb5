//! The 24 proper rotations of the cube, expressed as integer coordinate
//! permutations with signs.
//!
//! Orientation index `1..=24`, identity at index 1. Enumeration order is
//! fixed and observable (an `orientation_limit` on a piece refers to a
//! prefix of this exact sequence): six "up" axes, in order +z, +y, +x, -z,
//! -y, -x, each followed by its four rotations about that axis.

use std::sync::OnceLock;

/// A proper rotation of the cube as a signed coordinate permutation:
/// `apply((x, y, z)) = (row0 . (x,y,z), row1 . (x,y,z), row2 . (x,y,z))`
/// where each row has exactly one nonzero entry, `+1` or `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    rows: [[i32; 3]; 3],
}

impl Rotation {
    const IDENTITY: Rotation = Rotation {
        rows: [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
    };

    /// Rotation about the X axis by `k` quarter turns.
    const fn about_x(k: u8) -> Rotation {
        match k % 4 {
            0 => Rotation::IDENTITY,
            1 => Rotation {
                rows: [[1, 0, 0], [0, 0, -1], [0, 1, 0]],
            },
            2 => Rotation {
                rows: [[1, 0, 0], [0, -1, 0], [0, 0, -1]],
            },
            _ => Rotation {
                rows: [[1, 0, 0], [0, 0, 1], [0, -1, 0]],
            },
        }
    }

    /// Rotation about the Y axis by `k` quarter turns.
    const fn about_y(k: u8) -> Rotation {
        match k % 4 {
            0 => Rotation::IDENTITY,
            1 => Rotation {
                rows: [[0, 0, 1], [0, 1, 0], [-1, 0, 0]],
            },
            2 => Rotation {
                rows: [[-1, 0, 0], [0, 1, 0], [0, 0, -1]],
            },
            _ => Rotation {
                rows: [[0, 0, -1], [0, 1, 0], [1, 0, 0]],
            },
        }
    }

    /// Rotation about the Z axis by `k` quarter turns.
    const fn about_z(k: u8) -> Rotation {
        match k % 4 {
            0 => Rotation::IDENTITY,
            1 => Rotation {
                rows: [[0, -1, 0], [1, 0, 0], [0, 0, 1]],
            },
            2 => Rotation {
                rows: [[-1, 0, 0], [0, -1, 0], [0, 0, 1]],
            },
            _ => Rotation {
                rows: [[0, 1, 0], [-1, 0, 0], [0, 0, 1]],
            },
        }
    }

    /// Composes `self` with `first`: applying the result is equivalent to
    /// applying `first` and then `self`.
    fn compose(&self, first: &Rotation) -> Rotation {
        let mut rows = [[0i32; 3]; 3];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.rows[r][k] * first.rows[k][c]).sum();
            }
        }
        Rotation { rows }
    }

    /// Applies this rotation to an integer coordinate.
    pub fn apply(&self, (x, y, z): (i32, i32, i32)) -> (i32, i32, i32) {
        let v = [x, y, z];
        let r = |row: [i32; 3]| row[0] * v[0] + row[1] * v[1] + row[2] * v[2];
        (r(self.rows[0]), r(self.rows[1]), r(self.rows[2]))
    }
}

/// One of the 24 proper rotations of the cube, indexed `1..=24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orientation {
    index: u8,
    rotation: Rotation,
}

impl Orientation {
    pub fn index(&self) -> u8 {
        self.index
    }

    /// Rotates `(x, y, z)` under this orientation.
    pub fn apply(&self, p: (i32, i32, i32)) -> (i32, i32, i32) {
        self.rotation.apply(p)
    }
}

fn build_table() -> [Orientation; 24] {
    // One base rotation per "up" axis (where a piece-local +z axis ends up
    // pointing), followed by the axis to spin around once it's there.
    let bases: [(Rotation, fn(u8) -> Rotation); 6] = [
        (Rotation::IDENTITY, Rotation::about_z as fn(u8) -> Rotation), // +z up
        (Rotation::about_x(3), Rotation::about_y as fn(u8) -> Rotation), // +y up
        (Rotation::about_y(1), Rotation::about_x as fn(u8) -> Rotation), // +x up
        (Rotation::about_x(2), Rotation::about_z as fn(u8) -> Rotation), // -z up
        (Rotation::about_x(1), Rotation::about_y as fn(u8) -> Rotation), // -y up
        (Rotation::about_y(3), Rotation::about_x as fn(u8) -> Rotation), // -x up
    ];

    let mut out = Vec::with_capacity(24);
    let mut index = 1u8;
    for (base, spin) in bases {
        for k in 0..4u8 {
            let rotation = spin(k).compose(&base);
            out.push(Orientation { index, rotation });
            index += 1;
        }
    }
    out.try_into().expect("exactly 24 orientations")
}

/// Returns the orientation with the given 1-based index (`1..=24`).
pub fn orientation(index: u8) -> Option<Orientation> {
    static TABLE: OnceLock<[Orientation; 24]> = OnceLock::new();
    TABLE
        .get_or_init(build_table)
        .get(usize::from(index).checked_sub(1)?)
        .copied()
}

/// Returns all 24 orientations in canonical enumeration order.
pub fn all_orientations() -> &'static [Orientation; 24] {
    static TABLE: OnceLock<[Orientation; 24]> = OnceLock::new();
    TABLE.get_or_init(build_table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identity_is_index_one() {
        let o = orientation(1).unwrap();
        assert_eq!(o.apply((1, 2, 3)), (1, 2, 3));
    }

    #[test]
    fn all_24_are_distinct_proper_rotations() {
        let table = all_orientations();
        assert_eq!(table.len(), 24);

        let corners = [
            (1, 0, 0),
            (0, 1, 0),
            (0, 0, 1),
            (1, 1, 0),
            (1, 0, 1),
            (0, 1, 1),
            (1, 1, 1),
        ];
        let mut seen = HashSet::new();
        for o in table {
            let image: Vec<_> = corners.iter().map(|&c| o.apply(c)).collect();
            assert!(seen.insert(image), "orientation {} duplicates another", o.index());
        }
    }

    #[test]
    fn every_orientation_is_a_permutation_with_unit_determinant() {
        for o in all_orientations() {
            let ex = o.apply((1, 0, 0));
            let ey = o.apply((0, 1, 0));
            let ez = o.apply((0, 0, 1));
            // Each axis image must be a signed unit vector.
            for v in [ex, ey, ez] {
                let nonzero = [v.0, v.1, v.2].iter().filter(|&&c| c != 0).count();
                assert_eq!(nonzero, 1);
            }
            let det = ex.0 * (ey.1 * ez.2 - ey.2 * ez.1) - ex.1 * (ey.0 * ez.2 - ey.2 * ez.0)
                + ex.2 * (ey.0 * ez.1 - ey.1 * ez.0);
            assert_eq!(det, 1, "orientation {} is not a proper rotation", o.index());
        }
    }

    #[test]
    fn out_of_range_index_is_none() {
        assert!(orientation(0).is_none());
        assert!(orientation(25).is_none());
    }
}
