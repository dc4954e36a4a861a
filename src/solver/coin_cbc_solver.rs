// COIN-OR CBC adapter via good_lp. good_lp's model API minimises, so a
// maximisation objective is negated on the way in and the objective value is
// recomputed from the original coefficients on the way out.

use crate::domain::{
    models::{MilpProblem, Solution, SolverStatistics},
    solver_service::{Result, SolverService},
    value_objects::{ConstraintType, OptimizationType, SolutionStatus, VariableType},
};
use good_lp::{
    solvers::coin_cbc, variable, variables, Expression, ResolutionError,
    Solution as GoodLpSolutionTrait, SolverModel, Variable as GoodLpVariable,
};
use std::time::Instant;

pub struct CoinCbcSolver;

impl CoinCbcSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CoinCbcSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for CoinCbcSolver {
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

        let mut vars = variables!();
        let mut lp_variables: Vec<GoodLpVariable> = Vec::with_capacity(num_vars);

        for var_def in problem.variables.iter() {
            let lower = var_def.lower_bound;
            let upper = var_def.upper_bound.unwrap_or(f64::INFINITY);

            let var = match var_def.variable_type {
                VariableType::Binary | VariableType::Integer => {
                    vars.add(variable().integer().min(lower).max(upper))
                }
                VariableType::Continuous => vars.add(variable().min(lower).max(upper)),
            };
            lp_variables.push(var);
        }

        if problem.variables.is_empty() {
            for _ in 0..num_vars {
                lp_variables.push(vars.add(variable().min(0.0)));
            }
        }

        let is_maximize = problem.objective.optimization_type == OptimizationType::Maximize;
        let mut obj_expr: Expression = 0.into();
        for (i, &coeff) in problem.objective.coefficients.iter().enumerate() {
            if coeff != 0.0 {
                let c = if is_maximize { -coeff } else { coeff };
                obj_expr += c * lp_variables[i];
            }
        }

        let mut lp_model = vars.minimise(obj_expr).using(coin_cbc::coin_cbc);

        for constraint in &problem.constraints {
            let mut lhs: Expression = 0.into();
            for (i, &coeff) in constraint.coefficients.iter().enumerate() {
                if coeff != 0.0 {
                    lhs += coeff * lp_variables[i];
                }
            }

            match constraint.constraint_type {
                ConstraintType::LessThanOrEqual => {
                    lp_model = lp_model.with(lhs.leq(constraint.bound));
                }
                ConstraintType::Equal => {
                    lp_model = lp_model.with(lhs.eq(constraint.bound));
                }
                ConstraintType::GreaterThanOrEqual => {
                    lp_model = lp_model.with(lhs.geq(constraint.bound));
                }
            }
        }

        let solve_outcome = lp_model.solve();

        let statistics = SolverStatistics {
            solve_time_ms: start_time.elapsed().as_secs_f64() * 1000.0,
            num_variables: num_vars as u32,
            num_constraints: problem.constraints.len() as u32,
            num_integer_vars: num_integer,
            num_binary_vars: num_binary,
        };

        match solve_outcome {
            Ok(sol) => {
                let variable_values: Vec<f64> =
                    lp_variables.iter().map(|&var| sol.value(var)).collect();

                let mut objective_value = 0.0;
                for (i, &coeff) in problem.objective.coefficients.iter().enumerate() {
                    objective_value += coeff * variable_values[i];
                }

                let mut solution = Solution::optimal(objective_value, variable_values);
                solution.message = format!("Optimal solution found for '{}'", problem.name);
                Ok(solution.with_statistics(statistics))
            }
            Err(ResolutionError::Infeasible) => Ok(Solution::terminal(
                SolutionStatus::Infeasible,
                "Problem is infeasible: no assignment satisfies all constraints",
            )
            .with_statistics(statistics)),
            Err(ResolutionError::Unbounded) => Ok(Solution::terminal(
                SolutionStatus::Unbounded,
                "Problem is unbounded: objective can be improved without limit",
            )
            .with_statistics(statistics)),
            // CBC has no five-way counterpart for its other terminations
            Err(e) => Ok(Solution::terminal(
                SolutionStatus::Undefined,
                format!("CBC returned unmapped outcome: {:?}", e),
            )
            .with_statistics(statistics)),
        }
    }

    fn name(&self) -> &str {
        "COIN-OR CBC"
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

        let solution = CoinCbcSolver::new().solve(&problem).unwrap();

        assert_eq!(solution.status, SolutionStatus::Optimal);
        assert!((solution.objective_value.unwrap() - 2200.0).abs() < 1e-6);
    }

    #[test]
    fn reports_infeasible_as_a_status_not_an_error() {
        let problem = MilpProblem::new(ObjectiveFunction::new(
            OptimizationType::Maximize,
            vec![1.0],
        ))
        .with_variables(vec![Variable::integer("x")])
        .add_constraint(Constraint::less_than_or_equal(vec![1.0], -1.0).with_name("impossible"));

        let solution = CoinCbcSolver::new().solve(&problem).unwrap();
        assert_eq!(solution.status, SolutionStatus::Infeasible);
    }
}
