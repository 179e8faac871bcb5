//! `add_piece`: expands one named piece into every legal placement row and
//! appends them (deduplicated) to a `CoverMatrix` under construction.

use polycube_core::{CoverMatrix, Problem, piece};

use crate::error::SolveError;

/// Builds the initial matrix for `problem`: one column per box cell (Z-major,
/// X fastest), followed by one column per piece occurrence, then every
/// legal placement row for every piece in order.
pub fn build_matrix(problem: &Problem) -> Result<CoverMatrix, SolveError> {
    let mut mat = CoverMatrix::new(box_cell_names(problem));
    for (index, name) in problem.pieces.iter().enumerate() {
        add_piece(&mut mat, problem, index, name)?;
    }
    Ok(mat)
}

fn box_cell_names(problem: &Problem) -> Vec<String> {
    let mut names = Vec::with_capacity(problem.box_columns());
    for z in 0..problem.depth {
        for y in 0..problem.height {
            for x in 0..problem.width {
                names.push(format!("{x},{y},{z}"));
            }
        }
    }
    names
}

/// Appends one column for this piece occurrence, then every legal
/// orientation/translation placement row, deduplicated against earlier rows
/// added for the same occurrence.
///
/// `index` is this occurrence's position in `problem.pieces`: symmetry
/// constraints and the orientation lock only apply to the first occurrence
/// of a given name (see `Problem::occurrence_is_anchor`).
pub fn add_piece(
    mat: &mut CoverMatrix,
    problem: &Problem,
    index: usize,
    name: &str,
) -> Result<(), SolveError> {
    let p = piece::lookup(name)?;
    let col = mat.cols_len();
    mat.push_col(name)?;

    let (bb_min, bb_max) = p.bounding_box();
    let anchor = problem.occurrence_is_anchor(index);
    let (constrain_x, constrain_y, constrain_z) = if anchor {
        problem.axis_constraints(name)
    } else {
        (false, false, false)
    };
    let limit = if anchor {
        problem.orientation_limit(name).min(24)
    } else {
        24
    };
    let first_row = mat.rows_len();

    for o in 1..=limit {
        let orientation = polycube_core::orientation(o).expect("1..=24 is always valid");
        let (rmin, rmax) = canonicalize(orientation.apply(bb_min), orientation.apply(bb_max));

        let xp = problem.width as i32 - (rmax.0 - rmin.0);
        let yp = problem.height as i32 - (rmax.1 - rmin.1);
        let zp = problem.depth as i32 - (rmax.2 - rmin.2);
        if xp <= 0 || yp <= 0 || zp <= 0 {
            continue;
        }
        let xp = if constrain_x { xp.div_ceil(2) } else { xp };
        let yp = if constrain_y { yp.div_ceil(2) } else { yp };
        let zp = if constrain_z { zp.div_ceil(2) } else { zp };

        for xo in 0..xp {
            for yo in 0..yp {
                for zo in 0..zp {
                    place_one(
                        mat,
                        problem,
                        &p,
                        name,
                        o,
                        &orientation,
                        (xo - rmin.0, yo - rmin.1, zo - rmin.2),
                        col,
                        first_row,
                    )?;
                }
            }
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn place_one(
    mat: &mut CoverMatrix,
    problem: &Problem,
    p: &piece::Piece,
    name: &str,
    orientation_index: u8,
    orientation: &polycube_core::Orientation,
    translate: (i32, i32, i32),
    piece_col: usize,
    first_row: usize,
) -> Result<(), SolveError> {
    let row = mat.rows_len();
    mat.insert_row(row)?;
    mat.set_one(row, piece_col)?;

    for &cube in &p.cubes {
        let (rx, ry, rz) = orientation.apply(cube);
        let (x, y, z) = (rx + translate.0, ry + translate.1, rz + translate.2);
        if x < 0
            || y < 0
            || z < 0
            || x >= problem.width as i32
            || y >= problem.height as i32
            || z >= problem.depth as i32
        {
            return Err(SolveError::PlacementOutsideBox {
                piece: name.to_string(),
                orientation: orientation_index,
                x,
                y,
                z,
                w: problem.width,
                h: problem.height,
                d: problem.depth,
            });
        }
        let j = problem.xyz_to_j(x as u32, y as u32, z as u32)?;
        mat.set_one(row, j)?;
    }

    let new_words = mat.row_words(row)?.to_vec();
    let duplicate = (first_row..row).any(|r| mat.row_words(r).is_ok_and(|w| w == new_words));
    if duplicate {
        mat.remove_row(row)?;
    }
    Ok(())
}

/// Recanonicalizes two rotated bounding-box corners into `(min, max)` per
/// axis (a signed-permutation rotation can send the original min corner
/// past the original max corner on any axis).
fn canonicalize(
    a: (i32, i32, i32),
    b: (i32, i32, i32),
) -> ((i32, i32, i32), (i32, i32, i32)) {
    (
        (a.0.min(b.0), a.1.min(b.1), a.2.min(b.2)),
        (a.0.max(b.0), a.1.max(b.1), a.2.max(b.2)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cube_in_unit_box_yields_one_row() {
        let problem = Problem::new(1, 1, 1, vec!["1_".into()]).unwrap();
        let mat = build_matrix(&problem).unwrap();
        assert_eq!(mat.cols_len(), 1 + 1);
        assert_eq!(mat.rows_len(), 1);
        assert!(mat.get(0, 0).unwrap());
        assert!(mat.get(0, 1).unwrap());
    }

    #[test]
    fn every_row_has_cube_count_plus_one_ones() {
        let problem = Problem::new(5, 2, 1, vec!["L_".into(), "P_".into()]).unwrap();
        let mat = build_matrix(&problem).unwrap();
        for i in 0..mat.rows_len() {
            let ones = (0..mat.cols_len())
                .filter(|&j| mat.get(i, j).unwrap())
                .count();
            assert_eq!(ones, 6, "row {i} should have 5 cube bits + 1 piece bit");
        }
    }

    #[test]
    fn duplicate_placements_are_not_added_twice() {
        // A 1x1x1 piece in a 1x1x1 box has only one legal placement across
        // all 24 orientations (they're all the identity on a single cube).
        let problem = Problem::new(1, 1, 1, vec!["1_".into()]).unwrap();
        let mat = build_matrix(&problem).unwrap();
        assert_eq!(mat.rows_len(), 1);
    }

    #[test]
    fn constrain_halves_translation_range() {
        let unconstrained = Problem::new(2, 1, 1, vec!["1_".into()]).unwrap();
        let constrained = unconstrained
            .clone()
            .constrain_x("1_")
            .unwrap();
        let m1 = build_matrix(&unconstrained).unwrap();
        let m2 = build_matrix(&constrained).unwrap();
        assert_eq!(m1.rows_len(), 2);
        assert_eq!(m2.rows_len(), 1);
    }

    #[test]
    fn orientation_lock_restricts_row_count_for_asymmetric_piece() {
        let problem = Problem::new(4, 1, 1, vec!["4I".into()]).unwrap();
        let all = build_matrix(&problem).unwrap();
        let locked = problem.lock("4I", 1).unwrap();
        let one = build_matrix(&locked).unwrap();
        assert!(one.rows_len() <= all.rows_len());
    }
}
