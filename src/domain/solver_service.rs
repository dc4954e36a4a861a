// Domain service interface for solving MILP models
// Defines the contract that any solver backend must follow

use super::models::{MilpProblem, Solution};

/// Error types for the solver service
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("Invalid problem: {0}")]
    InvalidProblem(String),

    #[error("Solver execution failed: {0}")]
    ExecutionFailed(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;

/// Contract for MILP solver backends.
///
/// Infeasible, unbounded and undefined outcomes are reported through the
/// solution's status, never as an `Err`; errors are reserved for structurally
/// broken models and backend faults.
pub trait SolverService: Send + Sync {
    /// Solve a MILP model
    fn solve(&self, problem: &MilpProblem) -> Result<Solution>;

    /// Check the model's shape without solving it.
    ///
    /// Only structural consistency is verified (coefficient-vector lengths,
    /// bound ordering). Business values are never judged here: a negative
    /// capacity bound is a legitimate, merely infeasible, model.
    fn validate(&self, problem: &MilpProblem) -> Result<()> {
        let mut errors = Vec::new();
        let num_vars = problem.num_variables();

        if num_vars == 0 {
            errors.push("Objective must have at least one coefficient".to_string());
        }

        if !problem.variables.is_empty() && problem.variables.len() != num_vars {
            errors.push(format!(
                "Number of variables ({}) doesn't match objective coefficients ({})",
                problem.variables.len(),
                num_vars
            ));
        }

        for (i, constraint) in problem.constraints.iter().enumerate() {
            if constraint.num_variables() != num_vars {
                errors.push(format!(
                    "Constraint {} '{}' has {} coefficients but problem has {} variables",
                    i,
                    constraint.name,
                    constraint.num_variables(),
                    num_vars
                ));
            }
        }

        for (i, var) in problem.variables.iter().enumerate() {
            if let Some(upper) = var.upper_bound {
                if var.lower_bound > upper {
                    errors.push(format!(
                        "Variable {} '{}' has lower bound ({}) > upper bound ({})",
                        i, var.name, var.lower_bound, upper
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SolverError::InvalidProblem(errors.join("; ")))
        }
    }

    /// Name of this solver backend
    fn name(&self) -> &str;

    /// Whether this backend supports mixed-integer programming
    fn supports_mip(&self) -> bool;
}
