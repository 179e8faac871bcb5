//! The static catalogue of named polycube pieces, and the `Piece` type
//! `MatrixBuilder` places into a box.

use smallvec::SmallVec;

use crate::error::CoreError;

/// A named polycube: a non-empty set of integer unit-cube offsets.
///
/// Offsets are given relative to an arbitrary local origin; `MatrixBuilder`
/// re-normalizes them per orientation by the rotated shape's minimum extent
/// before translating into the box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub name: &'static str,
    pub cubes: SmallVec<[(i32, i32, i32); 8]>,
}

impl Piece {
    /// The piece's axis-aligned bounding box as `(min, max)` per axis,
    /// computed from its unrotated offsets.
    pub fn bounding_box(&self) -> ((i32, i32, i32), (i32, i32, i32)) {
        let mut min = self.cubes[0];
        let mut max = self.cubes[0];
        for &(x, y, z) in &self.cubes[1..] {
            min = (min.0.min(x), min.1.min(y), min.2.min(z));
            max = (max.0.max(x), max.1.max(y), max.2.max(z));
        }
        (min, max)
    }
}

macro_rules! piece {
    ($name:expr, [$(($x:expr, $y:expr, $z:expr)),+ $(,)?]) => {
        ($name, &[$(($x, $y, $z)),+] as &'static [(i32, i32, i32)])
    };
}

/// The closed set of piece definitions, keyed by name. Lookup is a linear
/// scan — the library has on the order of 40 entries, and is never on a hot
/// path (it's consulted once per `Problem::pieces` entry while constructing
/// the matrix, not during search).
static LIBRARY: &[(&str, &[(i32, i32, i32)])] = &[
    piece!("1_", [(0, 0, 0)]),
    piece!("2_", [(0, 0, 0), (1, 0, 0)]),
    piece!("3I", [(0, 0, 0), (1, 0, 0), (2, 0, 0)]),
    piece!("3L", [(0, 0, 0), (1, 0, 0), (1, 1, 0)]),
    piece!("4I", [(0, 0, 0), (1, 0, 0), (2, 0, 0), (3, 0, 0)]),
    piece!("4O", [(0, 0, 0), (1, 0, 0), (0, 1, 0), (1, 1, 0)]),
    piece!("4L", [(0, 0, 0), (1, 0, 0), (2, 0, 0), (2, 1, 0)]),
    piece!("4S", [(0, 0, 0), (1, 0, 0), (1, 1, 0), (2, 1, 0)]),
    piece!("4T", [(0, 0, 0), (1, 0, 0), (2, 0, 0), (1, 1, 0)]),
    piece!("4^", [(0, 0, 0), (1, 0, 0), (0, 1, 0), (0, 0, 1)]),
    piece!("4<", [(0, 0, 0), (1, 0, 0), (2, 0, 0), (0, 1, 0)]),
    piece!("4>", [(0, 1, 0), (1, 1, 0), (2, 1, 0), (2, 0, 0)]),
    // Pentominoes (planar, z = 0).
    piece!("F_", [(1, 0, 0), (2, 0, 0), (0, 1, 0), (1, 1, 0), (1, 2, 0)]),
    piece!("I_", [(0, 0, 0), (1, 0, 0), (2, 0, 0), (3, 0, 0), (4, 0, 0)]),
    piece!("L_", [(0, 0, 0), (0, 1, 0), (0, 2, 0), (0, 3, 0), (1, 3, 0)]),
    piece!("N_", [(0, 0, 0), (0, 1, 0), (1, 1, 0), (1, 2, 0), (1, 3, 0)]),
    piece!("P_", [(0, 0, 0), (1, 0, 0), (0, 1, 0), (1, 1, 0), (0, 2, 0)]),
    piece!("T_", [(0, 0, 0), (1, 0, 0), (2, 0, 0), (1, 1, 0), (1, 2, 0)]),
    piece!("U_", [(0, 0, 0), (0, 1, 0), (1, 1, 0), (2, 1, 0), (2, 0, 0)]),
    piece!("V_", [(0, 0, 0), (0, 1, 0), (0, 2, 0), (1, 2, 0), (2, 2, 0)]),
    piece!("W_", [(0, 0, 0), (0, 1, 0), (1, 1, 0), (1, 2, 0), (2, 2, 0)]),
    piece!("X_", [(1, 0, 0), (0, 1, 0), (1, 1, 0), (2, 1, 0), (1, 2, 0)]),
    piece!("Y_", [(0, 0, 0), (0, 1, 0), (0, 2, 0), (0, 3, 0), (1, 1, 0)]),
    piece!("Z_", [(0, 0, 0), (1, 0, 0), (1, 1, 0), (1, 2, 0), (2, 2, 0)]),
    // Non-planar (3D) achiral pentacubes.
    piece!("Q_", [(0, 0, 0), (1, 0, 0), (0, 1, 0), (1, 1, 0), (0, 0, 1)]),
    piece!("A_", [(0, 0, 0), (1, 0, 0), (1, 1, 0), (1, 0, 1), (2, 0, 0)]),
    piece!("T1", [(0, 0, 0), (1, 0, 0), (2, 0, 0), (1, 1, 0), (1, 0, 1)]),
    piece!("T2", [(0, 0, 0), (1, 0, 0), (1, 1, 0), (1, 0, 1), (1, -1, 0)]),
    piece!("L3", [(0, 0, 0), (1, 0, 0), (2, 0, 0), (2, 0, 1), (2, 0, 2)]),
    // Chiral pairs: each pair is two separate pieces, true mirror images of
    // one another across the X axis (x -> -x).
    piece!("L1", [(0, 0, 0), (0, 1, 0), (0, 2, 0), (0, 3, 0), (1, 0, 1)]),
    piece!("J1", [(0, 0, 0), (0, 1, 0), (0, 2, 0), (0, 3, 0), (-1, 0, 1)]),
    piece!("L2", [(0, 0, 0), (0, 1, 0), (0, 2, 0), (1, 0, 1), (1, 1, 1)]),
    piece!("J2", [(0, 0, 0), (0, 1, 0), (0, 2, 0), (-1, 0, 1), (-1, 1, 1)]),
    piece!("L4", [(0, 0, 0), (1, 0, 0), (2, 0, 0), (2, 1, 0), (2, 1, 1)]),
    piece!("J4", [(0, 0, 0), (-1, 0, 0), (-2, 0, 0), (-2, 1, 0), (-2, 1, 1)]),
    piece!("N1", [(0, 0, 0), (1, 0, 0), (1, 1, 0), (1, 1, 1), (2, 1, 1)]),
    piece!("S1", [(0, 0, 0), (-1, 0, 0), (-1, 1, 0), (-1, 1, 1), (-2, 1, 1)]),
    piece!("N2", [(0, 0, 0), (1, 0, 0), (1, 0, 1), (2, 0, 1), (2, 1, 1)]),
    piece!("S2", [(0, 0, 0), (-1, 0, 0), (-1, 0, 1), (-2, 0, 1), (-2, 1, 1)]),
    piece!("V1", [(0, 0, 0), (1, 0, 0), (1, 1, 0), (1, 1, 1), (1, 0, 1)]),
    piece!("V2", [(0, 0, 0), (-1, 0, 0), (-1, 1, 0), (-1, 1, 1), (-1, 0, 1)]),
];

/// Looks up a piece by name in the static catalogue.
pub fn lookup(name: &str) -> Result<Piece, CoreError> {
    LIBRARY
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(n, cubes)| Piece {
            name: n,
            cubes: cubes.iter().copied().collect(),
        })
        .ok_or_else(|| CoreError::UnknownPiece(name.to_string()))
}

/// The list of every name in the static catalogue, in declaration order.
pub fn names() -> impl Iterator<Item = &'static str> {
    LIBRARY.iter().map(|(n, _)| *n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn library_has_no_duplicate_names() {
        let mut seen = HashSet::new();
        for name in names() {
            assert!(seen.insert(name), "duplicate piece name {name:?}");
        }
    }

    #[test]
    fn library_has_about_forty_entries() {
        assert_eq!(names().count(), 41);
    }

    #[test]
    fn lookup_unknown_name_errors() {
        assert!(lookup("??").is_err());
    }

    #[test]
    fn lookup_known_name_round_trips_cube_count() {
        let p = lookup("4T").unwrap();
        assert_eq!(p.cubes.len(), 4);
        let pentomino = lookup("P_").unwrap();
        assert_eq!(pentomino.cubes.len(), 5);
    }

    #[test]
    fn chiral_pairs_are_true_mirror_images() {
        for (a, b) in [
            ("L1", "J1"),
            ("L2", "J2"),
            ("L4", "J4"),
            ("N1", "S1"),
            ("N2", "S2"),
            ("V1", "V2"),
        ] {
            let pa = lookup(a).unwrap();
            let pb = lookup(b).unwrap();
            let mut mirrored: Vec<_> = pa.cubes.iter().map(|&(x, y, z)| (-x, y, z)).collect();
            mirrored.sort();
            let mut actual: Vec<_> = pb.cubes.iter().copied().collect();
            actual.sort();
            assert_eq!(mirrored, actual, "{a}/{b} are not true mirror images");
        }
    }

    #[test]
    fn every_piece_is_orthogonally_connected() {
        for name in names() {
            let p = lookup(name).unwrap();
            assert!(is_connected(&p.cubes), "{name} is not connected");
        }
    }

    fn is_connected(cubes: &[(i32, i32, i32)]) -> bool {
        use std::collections::HashSet;
        let set: HashSet<_> = cubes.iter().copied().collect();
        let mut stack = vec![cubes[0]];
        let mut visited = HashSet::new();
        visited.insert(cubes[0]);
        while let Some((x, y, z)) = stack.pop() {
            for d in [
                (1, 0, 0),
                (-1, 0, 0),
                (0, 1, 0),
                (0, -1, 0),
                (0, 0, 1),
                (0, 0, -1),
            ] {
                let n = (x + d.0, y + d.1, z + d.2);
                if set.contains(&n) && visited.insert(n) {
                    stack.push(n);
                }
            }
        }
        visited.len() == cubes.len()
    }
}
