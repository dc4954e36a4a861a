// Business-side types: what the workshop gives us, and what it gets back

use super::value_objects::SolutionStatus;

/// Resource names the model builder knows how to charge products against.
/// Capacities under other names still yield (degenerate) constraints.
pub const WOOD_HOURS: &str = "wood_hours";
pub const DESIGN_HOURS: &str = "design_hours";
pub const BUDGET: &str = "budget";

/// Upper bound on one shared resource
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceCapacity {
    pub resource: String,
    pub limit: f64,
}

impl ResourceCapacity {
    pub fn new(resource: impl Into<String>, limit: f64) -> Self {
        Self {
            resource: resource.into(),
            limit,
        }
    }
}

/// One product in the existing catalog, with its per-unit economics
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub profit_per_unit: f64,
    pub wood_hours_per_unit: f64,
    pub material_cost_per_unit: f64,
    pub design_complexity_per_unit: f64,
}

/// Candidate new product gated by a one-time go/no-go design decision.
///
/// `one_time_design_cost` is charged exactly once when the decision is made,
/// independent of how many units are produced; `material_cost_per_unit`
/// scales with quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProductCandidate {
    pub design_hours_required: f64,
    pub one_time_design_cost: f64,
    pub estimated_profit_per_unit: f64,
    pub wood_hours_per_unit: f64,
    pub material_cost_per_unit: f64,
    pub max_units_if_approved: f64,
}

/// Immutable input for one optimization run.
///
/// Values are trusted as given: a negative capacity is not rejected here, it
/// simply makes the model infeasible.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessParameters {
    pub capacities: Vec<ResourceCapacity>,
    pub products: Vec<Product>,
    pub candidate_new_product: NewProductCandidate,
}

impl BusinessParameters {
    pub fn new(
        capacities: Vec<ResourceCapacity>,
        products: Vec<Product>,
        candidate_new_product: NewProductCandidate,
    ) -> Self {
        Self {
            capacities,
            products,
            candidate_new_product,
        }
    }
}

/// Units to produce of one catalog product
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionQuantity {
    pub product: String,
    pub units: u32,
}

/// Decision plan derived from one solver run
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationResult {
    pub status: SolutionStatus,
    /// Only populated when `status` is `Optimal`
    pub total_profit: Option<f64>,
    /// One entry per catalog product, in catalog order; all zero unless optimal
    pub production_plan: Vec<ProductionQuantity>,
    pub new_product_approved: bool,
    /// Always 0 when `new_product_approved` is false
    pub new_product_units: u32,
}

impl OptimizationResult {
    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }

    pub fn units_for(&self, product: &str) -> Option<u32> {
        self.production_plan
            .iter()
            .find(|q| q.product == product)
            .map(|q| q.units)
    }
}
