//! Renders a solved `CoverMatrix` as an ASCII grid, one block per Z-layer.

use polycube_core::{CoverMatrix, Problem};

/// Formats one solution as a per-layer ASCII grid, each cell showing the
/// name of the piece occupying it.
pub fn format_solution(problem: &Problem, solution: &CoverMatrix) -> String {
    let box_cols = problem.box_columns();
    let mut grid: Vec<Option<&str>> = vec![None; box_cols];

    for i in 0..solution.rows_len() {
        let cells: Vec<usize> = (0..box_cols)
            .filter(|&j| solution.get(i, j).unwrap_or(false))
            .collect();
        let piece_name = (box_cols..solution.cols_len())
            .find(|&j| solution.get(i, j).unwrap_or(false))
            .and_then(|j| solution.name(j).ok());
        for j in cells {
            grid[j] = piece_name;
        }
    }

    let mut out = String::new();
    for z in 0..problem.depth {
        out.push_str(&format!("z={z}\n"));
        for y in 0..problem.height {
            for x in 0..problem.width {
                let j = problem
                    .xyz_to_j(x, y, z)
                    .expect("x, y, z are within problem bounds by construction");
                let label = grid[j].unwrap_or("??");
                out.push_str(&format!("{label:>3} "));
            }
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use polycube_solver::solve;

    #[test]
    fn renders_one_cell_per_layer_for_the_trivial_tile() {
        let problem = Problem::new(1, 1, 1, vec!["1_".into()]).unwrap();
        let mut rendered = None;
        solve(&problem, 1, |sol| {
            rendered = Some(format_solution(&problem, sol));
        })
        .unwrap();
        let text = rendered.unwrap();
        assert!(text.contains("1_"));
        assert!(text.contains("z=0"));
    }
}
