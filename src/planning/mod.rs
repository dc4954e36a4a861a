// Planning module: model building, result mapping, orchestration

pub mod model_builder;
pub mod result_mapper;
pub mod service;

pub use model_builder::{build, PlanningModel};
pub use result_mapper::map_solution;
pub use service::PlanningService;
