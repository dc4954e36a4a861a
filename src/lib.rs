// Domain layer: business parameters, MILP model types, solver contract
pub mod domain;

// Planning layer: model building, result mapping, orchestration
pub mod planning;

// Reporting layer: text presentation over the result structure
pub mod report;

// Solver adapters: concrete implementations of SolverService
pub mod solver;

// Re-export commonly used types
pub use domain::{
    BusinessParameters, Constraint, ConstraintType, MilpProblem, NewProductCandidate,
    ObjectiveFunction, OptimizationResult, OptimizationType, Product, ProductionQuantity,
    ResourceCapacity, Solution, SolutionStatus, SolverBackend, SolverError, SolverService,
    SolverStatistics, Variable, VariableType, BUDGET, DESIGN_HOURS, WOOD_HOURS,
};

pub use planning::{build, map_solution, PlanningModel, PlanningService};

pub use report::{render_text, TextReport};

#[cfg(feature = "cbc")]
pub use solver::CoinCbcSolver;
pub use solver::{HighsSolver, SolverFactory};
