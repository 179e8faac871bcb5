//! Parses a TOML problem file into a `polycube_core::Problem`, mirroring
//! the parse-then-validate shape: deserialize into this crate's own
//! intermediate representation, then hand off to `Problem`'s own
//! validating constructors.

use std::path::Path;

use polycube_core::Problem;
use serde::Deserialize;

use crate::error::IoError;

#[derive(Debug, Deserialize)]
pub struct ProblemFile {
    #[serde(rename = "box")]
    pub dimensions: (u32, u32, u32),
    pub pieces: Vec<String>,
    pub constrain: Option<String>,
    pub constrain_x: Option<String>,
    pub constrain_y: Option<String>,
    pub constrain_z: Option<String>,
    pub lock: Option<String>,
    pub lockcount: Option<u32>,
}

impl ProblemFile {
    /// Converts the parsed file into a validated `Problem`.
    pub fn into_problem(self) -> Result<Problem, IoError> {
        let (w, h, d) = self.dimensions;
        let mut problem = Problem::new(w, h, d, self.pieces)?;
        if let Some(name) = self.constrain {
            problem = problem.constrain_all(name)?;
        }
        if let Some(name) = self.constrain_x {
            problem = problem.constrain_x(name)?;
        }
        if let Some(name) = self.constrain_y {
            problem = problem.constrain_y(name)?;
        }
        if let Some(name) = self.constrain_z {
            problem = problem.constrain_z(name)?;
        }
        if let Some(name) = self.lock {
            let lockcount = self.lockcount.unwrap_or(1);
            if lockcount == 0 {
                return Err(IoError::InvalidLockcount(lockcount));
            }
            problem = problem.lock(name, lockcount.min(24) as u8)?;
        }
        Ok(problem)
    }
}

/// Reads and parses a problem file at `path`, returning a validated
/// `Problem`.
pub fn load_problem(path: &Path) -> Result<Problem, IoError> {
    let text = std::fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file: ProblemFile = toml::from_str(&text).map_err(|source| IoError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    file.into_problem()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_problem() {
        let toml = r#"
            box = [5, 2, 1]
            pieces = ["L_", "P_"]
        "#;
        let file: ProblemFile = toml::from_str(toml).unwrap();
        let problem = file.into_problem().unwrap();
        assert_eq!(problem.width, 5);
        assert_eq!(problem.height, 2);
        assert_eq!(problem.depth, 1);
        assert_eq!(problem.pieces, vec!["L_", "P_"]);
    }

    #[test]
    fn parses_constrain_and_lock_fields() {
        let toml = r#"
            box = [2, 2, 2]
            pieces = ["1_", "1_"]
            constrain = "1_"
            lock = "1_"
            lockcount = 4
        "#;
        let file: ProblemFile = toml::from_str(toml).unwrap();
        let problem = file.into_problem().unwrap();
        assert_eq!(problem.axis_constraints("1_"), (true, true, true));
        assert_eq!(problem.orientation_limit("1_"), 4);
    }

    #[test]
    fn rejects_unknown_piece_name() {
        let toml = r#"
            box = [1, 1, 1]
            pieces = ["nope"]
        "#;
        let file: ProblemFile = toml::from_str(toml).unwrap();
        assert!(file.into_problem().is_err());
    }

    #[test]
    fn rejects_zero_lockcount() {
        let toml = r#"
            box = [1, 1, 1]
            pieces = ["1_"]
            lock = "1_"
            lockcount = 0
        "#;
        let file: ProblemFile = toml::from_str(toml).unwrap();
        assert!(file.into_problem().is_err());
    }
}
