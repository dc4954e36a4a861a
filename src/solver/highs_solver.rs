// HiGHS solver adapter: translates the domain MILP onto the HiGHS API and
// collapses HiGHS statuses onto the five-way domain status.

use crate::domain::{
    models::{MilpProblem, Solution, SolverStatistics},
    solver_service::{Result, SolverError, SolverService},
    value_objects::{ConstraintType, OptimizationType, SolutionStatus, VariableType},
};
use highs::{HighsModelStatus, RowProblem, Sense};
use std::time::Instant;

pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for HighsSolver {
    fn solve(&self, problem: &MilpProblem) -> Result<Solution> {
        self.validate(problem)?;

        let start_time = Instant::now();
        let num_vars = problem.num_variables();

        let num_integer = problem
            .variables
            .iter()
            .filter(|v| matches!(v.variable_type, VariableType::Integer))
            .count() as u32;
        let num_binary = problem
            .variables
            .iter()
            .filter(|v| matches!(v.variable_type, VariableType::Binary))
            .count() as u32;

        let mut pb = RowProblem::default();
        let mut columns = Vec::with_capacity(num_vars);

        for (i, var_def) in problem.variables.iter().enumerate() {
            let lower = var_def.lower_bound;
            let upper = var_def.upper_bound.unwrap_or(f64::INFINITY);
            let obj_coeff = problem.objective.coefficients.get(i).copied().unwrap_or(0.0);

            let col = match var_def.variable_type {
                VariableType::Integer | VariableType::Binary => {
                    pb.add_integer_column(obj_coeff, lower..upper)
                }
                VariableType::Continuous => pb.add_column(obj_coeff, lower..upper),
            };
            columns.push(col);
        }

        // Models that never declared variables get non-negative continuous
        // defaults, one per objective coefficient.
        if problem.variables.is_empty() {
            for &coeff in problem.objective.coefficients.iter() {
                columns.push(pb.add_column(coeff, 0.0..f64::INFINITY));
            }
        }

        for constraint in &problem.constraints {
            let mut terms = Vec::new();
            for (i, &coeff) in constraint.coefficients.iter().enumerate() {
                if coeff != 0.0 && i < columns.len() {
                    terms.push((columns[i], coeff));
                }
            }

            match constraint.constraint_type {
                ConstraintType::LessThanOrEqual => {
                    pb.add_row(..=constraint.bound, &terms);
                }
                ConstraintType::Equal => {
                    pb.add_row(constraint.bound..=constraint.bound, &terms);
                }
                ConstraintType::GreaterThanOrEqual => {
                    pb.add_row(constraint.bound.., &terms);
                }
            }
        }

        let sense = match problem.objective.optimization_type {
            OptimizationType::Maximize => Sense::Maximise,
            OptimizationType::Minimize => Sense::Minimise,
        };

        let solved = pb.optimise(sense).solve();

        let statistics = SolverStatistics {
            solve_time_ms: start_time.elapsed().as_secs_f64() * 1000.0,
            num_variables: num_vars as u32,
            num_constraints: problem.constraints.len() as u32,
            num_integer_vars: num_integer,
            num_binary_vars: num_binary,
        };

        match solved.status() {
            HighsModelStatus::Optimal => {
                let variable_values = solved.get_solution().columns().to_vec();

                let mut objective_value = 0.0;
                for (i, &val) in variable_values.iter().enumerate() {
                    if let Some(&coeff) = problem.objective.coefficients.get(i) {
                        objective_value += coeff * val;
                    }
                }

                let mut solution = Solution::optimal(objective_value, variable_values);
                solution.message = format!("Optimal solution found for '{}'", problem.name);
                Ok(solution.with_statistics(statistics))
            }
            HighsModelStatus::Infeasible => Ok(Solution::terminal(
                SolutionStatus::Infeasible,
                "Problem is infeasible: no assignment satisfies all constraints",
            )
            .with_statistics(statistics)),
            HighsModelStatus::Unbounded | HighsModelStatus::UnboundedOrInfeasible => {
                Ok(Solution::terminal(
                    SolutionStatus::Unbounded,
                    "Problem is unbounded: objective can be improved without limit",
                )
                .with_statistics(statistics))
            }
            HighsModelStatus::NotSet => Ok(Solution::terminal(
                SolutionStatus::NotSolved,
                "Solver terminated without attempting the model",
            )
            .with_statistics(statistics)),
            status @ (HighsModelStatus::LoadError
            | HighsModelStatus::ModelError
            | HighsModelStatus::PresolveError
            | HighsModelStatus::SolveError
            | HighsModelStatus::PostsolveError) => Err(SolverError::ExecutionFailed(format!(
                "HiGHS internal failure: {:?}",
                status
            ))),
            status => Ok(Solution::terminal(
                SolutionStatus::Undefined,
                format!("HiGHS returned unmapped status {:?}", status),
            )
            .with_statistics(statistics)),
        }
    }

    fn name(&self) -> &str {
        "HiGHS"
    }

    fn supports_mip(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Constraint, ObjectiveFunction, Variable};

    #[test]
    fn solves_a_small_integer_program() {
        // max 40a + 30b  s.t.  2a + b <= 100, a + 2b <= 80
        let problem = MilpProblem::new(ObjectiveFunction::new(
            OptimizationType::Maximize,
            vec![40.0, 30.0],
        ))
        .with_name("two_products")
        .with_variables(vec![Variable::integer("a"), Variable::integer("b")])
        .add_constraint(Constraint::less_than_or_equal(vec![2.0, 1.0], 100.0).with_name("labor"))
        .add_constraint(
            Constraint::less_than_or_equal(vec![1.0, 2.0], 80.0).with_name("material"),
        );

        let solution = HighsSolver::new().solve(&problem).unwrap();

        assert_eq!(solution.status, SolutionStatus::Optimal);
        // optimum at a=40, b=20
        assert!((solution.objective_value.unwrap() - 2200.0).abs() < 1e-6);
        assert!((solution.variable_values[0] - 40.0).abs() < 1e-6);
        assert!((solution.variable_values[1] - 20.0).abs() < 1e-6);
        assert_eq!(solution.statistics.num_integer_vars, 2);
    }

    #[test]
    fn reports_infeasible_as_a_status_not_an_error() {
        // x >= 0 and x <= -1 cannot both hold
        let problem = MilpProblem::new(ObjectiveFunction::new(
            OptimizationType::Maximize,
            vec![1.0],
        ))
        .with_variables(vec![Variable::integer("x")])
        .add_constraint(Constraint::less_than_or_equal(vec![1.0], -1.0).with_name("impossible"));

        let solution = HighsSolver::new().solve(&problem).unwrap();
        assert_eq!(solution.status, SolutionStatus::Infeasible);
        assert!(solution.objective_value.is_none());
    }

    #[test]
    fn binary_column_stays_within_the_unit_interval() {
        // max 10g + 3u  with  u <= 5g  and  u <= 4: g caps at 1, u at 4
        let problem = MilpProblem::new(ObjectiveFunction::new(
            OptimizationType::Maximize,
            vec![10.0, 3.0],
        ))
        .with_variables(vec![Variable::binary("g"), Variable::integer("u")])
        .add_constraint(Constraint::less_than_or_equal(vec![-5.0, 1.0], 0.0).with_name("gate"))
        .add_constraint(Constraint::less_than_or_equal(vec![0.0, 1.0], 4.0).with_name("cap"));

        let solution = HighsSolver::new().solve(&problem).unwrap();
        assert_eq!(solution.status, SolutionStatus::Optimal);
        assert!((solution.variable_values[0] - 1.0).abs() < 1e-6);
        assert!((solution.variable_values[1] - 4.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_structurally_broken_models() {
        let problem = MilpProblem::new(ObjectiveFunction::new(
            OptimizationType::Maximize,
            vec![1.0, 1.0],
        ))
        .with_variables(vec![Variable::integer("x"), Variable::integer("y")])
        .add_constraint(Constraint::less_than_or_equal(vec![1.0], 5.0));

        assert!(matches!(
            HighsSolver::new().solve(&problem),
            Err(SolverError::InvalidProblem(_))
        ));
    }
}
