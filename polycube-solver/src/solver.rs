//! Knuth's Algorithm X over a [`polycube_core::CoverMatrix`]: pick the
//! column of minimum count, branch on every row covering it, reduce, clone,
//! recurse, restore state implicitly on unwind via the clone.
//!
//! Feature flags:
//! - `tracing`: enables `tracing::trace!` at each branch point (no
//!   subscriber required by this library).

use polycube_core::{CoverMatrix, Problem};

#[cfg(feature = "tracing")]
use tracing::{instrument, trace};

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($tt:tt)*) => {};
}

use crate::builder::build_matrix;
use crate::error::SolveError;

/// Search statistics, collected alongside the callback.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolveStats {
    pub nodes_visited: u64,
    pub branches: u64,
    pub max_depth: u32,
}

/// Enumerates every exact cover of `problem`, calling `on_solution` for
/// each, in depth-first order under the deterministic smallest-count
/// column rule and ascending row-choice order. Stops early once `limit`
/// solutions have been produced (`0` means unlimited).
#[cfg_attr(feature = "tracing", instrument(skip(problem, on_solution)))]
pub fn solve(
    problem: &Problem,
    limit: usize,
    mut on_solution: impl FnMut(&CoverMatrix),
) -> Result<SolveStats, SolveError> {
    let mat = build_matrix(problem)?;
    let sol = CoverMatrix::new(header_names(problem));
    let mut stats = SolveStats::default();
    let mut found = 0usize;
    search(&mat, &sol, limit, &mut found, &mut on_solution, &mut stats, 0)?;
    Ok(stats)
}

/// Counts exact covers up to `limit` without materializing them.
pub fn count(problem: &Problem, limit: usize) -> Result<usize, SolveError> {
    let mut n = 0usize;
    solve(problem, limit, |_| n += 1)?;
    Ok(n)
}

fn header_names(problem: &Problem) -> Vec<String> {
    let mut names = Vec::with_capacity(problem.box_columns() + problem.pieces.len());
    for z in 0..problem.depth {
        for y in 0..problem.height {
            for x in 0..problem.width {
                names.push(format!("{x},{y},{z}"));
            }
        }
    }
    names.extend(problem.pieces.iter().cloned());
    names
}

#[allow(clippy::too_many_arguments)]
fn search(
    mat: &CoverMatrix,
    sol: &CoverMatrix,
    limit: usize,
    found: &mut usize,
    on_solution: &mut impl FnMut(&CoverMatrix),
    stats: &mut SolveStats,
    depth: u32,
) -> Result<(), SolveError> {
    if limit != 0 && *found >= limit {
        return Ok(());
    }
    stats.nodes_visited += 1;
    stats.max_depth = stats.max_depth.max(depth);

    if mat.cols_len() == 0 {
        *found += 1;
        trace!(depth, "solution");
        on_solution(sol);
        return Ok(());
    }

    let c = (0..mat.cols_len())
        .min_by_key(|&j| mat.count(j).expect("j < cols_len by construction"))
        .expect("cols_len() > 0 checked above");
    if mat.count(c)? == 0 {
        return Ok(());
    }

    let rows_covering_c: Vec<usize> = (0..mat.rows_len())
        .filter(|&i| mat.get(i, c).unwrap_or(false))
        .collect();

    for r in rows_covering_c {
        if limit != 0 && *found >= limit {
            break;
        }
        stats.branches += 1;
        trace!(row = r, column = c, depth, "branch");

        let mut mat2 = mat.clone();
        let mut sol2 = sol.clone();
        record_choice(mat, r, &mut sol2)?;
        reduce(mat, &mut mat2, r)?;

        search(&mat2, &sol2, limit, found, on_solution, stats, depth + 1)?;
    }

    Ok(())
}

/// Appends a row to `sol`, marking every column the chosen row `r` (read
/// from `mat`, which may already have lost columns to earlier reductions)
/// covers, addressed by `orig_col` rather than by name — `mat`'s columns
/// are not uniquely named when a piece occurs more than once, but `sol` is
/// built once with the full, never-reduced column set, so `orig_col` always
/// lands on the one column that was truly this row's.
fn record_choice(mat: &CoverMatrix, r: usize, sol: &mut CoverMatrix) -> Result<(), SolveError> {
    let row_i = sol.rows_len();
    sol.insert_row(row_i)?;
    for j in 0..mat.cols_len() {
        if mat.get(r, j)? {
            let sol_j = mat.orig_col(j)?;
            sol.set_one(row_i, sol_j)?;
        }
    }
    Ok(())
}

/// Removes from `mat2` every row conflicting with `r` and every column `r`
/// (read from the unmodified `mat`) covers, columns processed from highest
/// index down so earlier removals never invalidate a later column index.
fn reduce(mat: &CoverMatrix, mat2: &mut CoverMatrix, r: usize) -> Result<(), SolveError> {
    let covered_cols: Vec<usize> = (0..mat.cols_len())
        .rev()
        .filter(|&j| mat.get(r, j).unwrap_or(false))
        .collect();
    for j in covered_cols {
        let conflicting_rows: Vec<usize> = (0..mat2.rows_len())
            .filter(|&i| mat2.get(i, j).unwrap_or(false))
            .collect();
        for i in conflicting_rows.into_iter().rev() {
            mat2.remove_row(i)?;
        }
        mat2.remove_col(j)?;
    }
    Ok(())
}
