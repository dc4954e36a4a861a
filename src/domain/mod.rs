// Domain module: business parameters, MILP model types, solver contract

pub mod business;
pub mod models;
pub mod solver_service;
pub mod value_objects;

pub use business::*;
pub use models::*;
pub use solver_service::*;
pub use value_objects::*;
