use crate::domain::{solver_service::SolverService, value_objects::SolverBackend};
#[cfg(feature = "cbc")]
use crate::solver::CoinCbcSolver;
use crate::solver::HighsSolver;
use std::sync::Arc;

/// Factory resolving a backend choice to a solver instance
pub struct SolverFactory;

impl SolverFactory {
    pub fn create(backend: SolverBackend) -> Arc<dyn SolverService> {
        match backend {
            SolverBackend::Auto | SolverBackend::Highs => Arc::new(HighsSolver::new()),
            #[cfg(feature = "cbc")]
            SolverBackend::CoinCbc => Arc::new(CoinCbcSolver::new()),
        }
    }

    /// Default backend (HiGHS)
    pub fn default_solver() -> Arc<dyn SolverService> {
        Arc::new(HighsSolver::new())
    }
}
