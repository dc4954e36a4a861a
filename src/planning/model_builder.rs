// Model builder: translates business parameters into a solver-ready MILP.
//
// Variable layout is fixed: one integer production variable per catalog
// product (catalog order), then the binary new-product approval, then the
// integer new-product quantity. Everything downstream relies on this order.

use crate::domain::{
    business::{BusinessParameters, BUDGET, DESIGN_HOURS, WOOD_HOURS},
    models::{Constraint, MilpProblem, ObjectiveFunction, Variable},
    value_objects::OptimizationType,
};

/// A built MILP together with the variable layout needed to read a solution
/// back into business terms.
#[derive(Debug, Clone)]
pub struct PlanningModel {
    pub problem: MilpProblem,
    product_ids: Vec<String>,
}

impl PlanningModel {
    pub fn product_ids(&self) -> &[String] {
        &self.product_ids
    }

    pub fn num_products(&self) -> usize {
        self.product_ids.len()
    }

    /// Column of the production variable for the i-th catalog product
    pub fn production_index(&self, product: usize) -> usize {
        product
    }

    /// Column of the binary go/no-go approval variable
    pub fn approval_index(&self) -> usize {
        self.product_ids.len()
    }

    /// Column of the new-product quantity variable
    pub fn units_index(&self) -> usize {
        self.product_ids.len() + 1
    }
}

/// Build the production-mix MILP for one set of business parameters.
///
/// Inputs are taken as given: out-of-range values (a negative capacity, say)
/// are not rejected, they surface through the solver as infeasibility.
pub fn build(params: &BusinessParameters) -> PlanningModel {
    let candidate = &params.candidate_new_product;
    let num_products = params.products.len();
    let num_vars = num_products + 2;
    let approval = num_products;
    let units = num_products + 1;

    let mut variables = Vec::with_capacity(num_vars);
    let mut profit = Vec::with_capacity(num_vars);
    for product in &params.products {
        variables.push(Variable::integer(format!("produce_{}", product.id)));
        profit.push(product.profit_per_unit);
    }
    variables.push(Variable::binary("approve_new_product"));
    variables.push(Variable::integer("new_product_units"));

    // The design cost is incurred once, on the approval indicator, not per
    // unit; the per-unit estimate rides on the quantity variable.
    profit.push(-candidate.one_time_design_cost);
    profit.push(candidate.estimated_profit_per_unit);

    let mut problem = MilpProblem::new(ObjectiveFunction::new(OptimizationType::Maximize, profit))
        .with_name("production_mix")
        .with_variables(variables);

    for capacity in &params.capacities {
        let mut usage = vec![0.0; num_vars];
        match capacity.resource.as_str() {
            WOOD_HOURS => {
                for (i, product) in params.products.iter().enumerate() {
                    usage[i] = product.wood_hours_per_unit;
                }
                usage[units] = candidate.wood_hours_per_unit;
            }
            DESIGN_HOURS => {
                for (i, product) in params.products.iter().enumerate() {
                    usage[i] = product.design_complexity_per_unit;
                }
                // Evaluating the candidate consumes design hours once,
                // gated by the approval, like the design cost in the
                // objective.
                usage[approval] = candidate.design_hours_required;
            }
            BUDGET => {
                for (i, product) in params.products.iter().enumerate() {
                    usage[i] = product.material_cost_per_unit;
                }
                // The budget reserves the one-time design spend as well as
                // the recurring material spend; the objective only nets the
                // former against profit.
                usage[approval] = candidate.one_time_design_cost;
                usage[units] = candidate.material_cost_per_unit;
            }
            // A resource nothing draws on still gets its 0 <= bound row.
            _ => {}
        }
        problem = problem.add_constraint(
            Constraint::less_than_or_equal(usage, capacity.limit)
                .with_name(format!("{}_capacity", capacity.resource)),
        );
    }

    // new_product_units <= max_units_if_approved * approve_new_product
    let mut gate = vec![0.0; num_vars];
    gate[approval] = -candidate.max_units_if_approved;
    gate[units] = 1.0;
    problem = problem.add_constraint(
        Constraint::less_than_or_equal(gate, 0.0).with_name("new_product_gate"),
    );

    PlanningModel {
        problem,
        product_ids: params.products.iter().map(|p| p.id.clone()).collect(),
    }
}
