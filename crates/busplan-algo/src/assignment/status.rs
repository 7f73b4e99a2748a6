//! Solve outcomes

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Outcome category of a solve, one per user-visible diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    Optimal,
    /// Solver stopped or was not run to completion
    Abnormal,
    Infeasible,
    Unbounded,
    ModelInvalid,
    /// Any other solver error
    Other,
}

impl SolveStatus {
    /// The line printed for this outcome.
    pub fn diagnostic(&self) -> &'static str {
        match self {
            SolveStatus::Optimal => "Optimal solution found!",
            SolveStatus::Abnormal => "Solver did not find an optimal solution.",
            SolveStatus::Infeasible => "No feasible solution found. Check constraints.",
            SolveStatus::Unbounded => "The problem is unbounded.",
            SolveStatus::ModelInvalid => "The model is invalid.",
            SolveStatus::Other => "Other error occurred.",
        }
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveStatus::Optimal => write!(f, "optimal"),
            SolveStatus::Abnormal => write!(f, "abnormal"),
            SolveStatus::Infeasible => write!(f, "infeasible"),
            SolveStatus::Unbounded => write!(f, "unbounded"),
            SolveStatus::ModelInvalid => write!(f, "model_invalid"),
            SolveStatus::Other => write!(f, "other"),
        }
    }
}

/// Everything that stops a solve from producing a plan.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssignmentError {
    /// The requested backend is unknown or was not compiled in
    #[error("solver '{requested}' is not available (available: {available})")]
    SolverUnavailable { requested: String, available: String },

    #[error("model is invalid: {0}")]
    ModelInvalid(String),

    #[error("problem is infeasible: {0}")]
    Infeasible(String),

    #[error("problem is unbounded")]
    Unbounded,

    /// Solver returned without an optimal solution
    #[error("solver stopped without an optimal solution: {0}")]
    NotSolved(String),

    #[error("solver error: {0}")]
    Solver(String),
}

impl AssignmentError {
    /// Status for this failure. `None` for an unavailable solver, which
    /// aborts the run before any solve is attempted.
    pub fn status(&self) -> Option<SolveStatus> {
        match self {
            AssignmentError::SolverUnavailable { .. } => None,
            AssignmentError::ModelInvalid(_) => Some(SolveStatus::ModelInvalid),
            AssignmentError::Infeasible(_) => Some(SolveStatus::Infeasible),
            AssignmentError::Unbounded => Some(SolveStatus::Unbounded),
            AssignmentError::NotSolved(_) => Some(SolveStatus::Abnormal),
            AssignmentError::Solver(_) => Some(SolveStatus::Other),
        }
    }
}

impl From<good_lp::ResolutionError> for AssignmentError {
    fn from(err: good_lp::ResolutionError) -> Self {
        use good_lp::ResolutionError;
        match err {
            ResolutionError::Infeasible => {
                AssignmentError::Infeasible("reported by solver".to_string())
            }
            ResolutionError::Unbounded => AssignmentError::Unbounded,
            ResolutionError::Other(msg) => AssignmentError::NotSolved(msg.to_string()),
            ResolutionError::Str(msg) => AssignmentError::Solver(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use good_lp::ResolutionError;

    #[test]
    fn test_each_status_has_distinct_diagnostic() {
        let all = [
            SolveStatus::Optimal,
            SolveStatus::Abnormal,
            SolveStatus::Infeasible,
            SolveStatus::Unbounded,
            SolveStatus::ModelInvalid,
            SolveStatus::Other,
        ];
        let mut lines: Vec<&str> = all.iter().map(|s| s.diagnostic()).collect();
        lines.sort();
        lines.dedup();
        assert_eq!(lines.len(), all.len());
    }

    #[test]
    fn test_resolution_error_mapping() {
        let cases = [
            (ResolutionError::Infeasible, SolveStatus::Infeasible),
            (ResolutionError::Unbounded, SolveStatus::Unbounded),
            (ResolutionError::Other("time limit"), SolveStatus::Abnormal),
            (ResolutionError::Str("numerical trouble".into()), SolveStatus::Other),
        ];
        for (err, expected) in cases {
            let mapped = AssignmentError::from(err);
            assert_eq!(mapped.status(), Some(expected), "{mapped}");
        }
    }

    #[test]
    fn test_unavailable_solver_has_no_status() {
        let err = AssignmentError::SolverUnavailable {
            requested: "gurobi".into(),
            available: "microlp".into(),
        };
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("gurobi"));
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&SolveStatus::ModelInvalid).unwrap();
        assert_eq!(json, "\"model_invalid\"");
    }
}
