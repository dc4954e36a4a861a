// Application service: one-shot build -> solve -> map orchestration.

use std::sync::Arc;

use crate::domain::business::{BusinessParameters, OptimizationResult};
use crate::domain::solver_service::{Result, SolverService};
use crate::solver::SolverFactory;

use super::model_builder::build;
use super::result_mapper::map_solution;

/// Runs one optimization per call against a pluggable solver backend.
///
/// Each call is independent: a fresh model is built from the parameters,
/// handed to the solver, and mapped back. Infeasible, unbounded and undefined
/// outcomes come back as values in the result; only backend faults are `Err`.
pub struct PlanningService {
    solver: Arc<dyn SolverService>,
}

impl PlanningService {
    pub fn new(solver: Arc<dyn SolverService>) -> Self {
        Self { solver }
    }

    pub fn with_default_solver() -> Self {
        Self::new(SolverFactory::default_solver())
    }

    pub fn solver_name(&self) -> &str {
        self.solver.name()
    }

    pub fn optimize(&self, params: &BusinessParameters) -> Result<OptimizationResult> {
        let model = build(params);
        let solution = self.solver.solve(&model.problem)?;
        Ok(map_solution(&model, &solution))
    }
}
