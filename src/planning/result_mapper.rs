// Result mapper: raw solver output back into a business decision plan.

use crate::domain::business::{OptimizationResult, ProductionQuantity};
use crate::domain::models::Solution;

use super::model_builder::PlanningModel;

/// A relaxed binary above this is treated as "on".
const BINARY_THRESHOLD: f64 = 0.5;

/// Map one solver outcome onto the model that produced it.
///
/// Quantities are zeroed unless the run was optimal; missing or non-finite
/// values are zeroed as well, so solver garbage never reaches the plan. The
/// new-product quantity is clamped to 0 whenever the approval is off,
/// restating the gating invariant at the output boundary.
pub fn map_solution(model: &PlanningModel, solution: &Solution) -> OptimizationResult {
    let optimal = solution.is_optimal();
    let value_at = |index: usize| -> f64 {
        if !optimal {
            return 0.0;
        }
        match solution.variable_values.get(index) {
            Some(v) if v.is_finite() => *v,
            _ => 0.0,
        }
    };

    let production_plan = model
        .product_ids()
        .iter()
        .enumerate()
        .map(|(i, id)| ProductionQuantity {
            product: id.clone(),
            units: round_units(value_at(model.production_index(i))),
        })
        .collect();

    let new_product_approved = value_at(model.approval_index()) > BINARY_THRESHOLD;
    let new_product_units = if new_product_approved {
        round_units(value_at(model.units_index()))
    } else {
        0
    };

    OptimizationResult {
        status: solution.status,
        total_profit: if optimal { solution.objective_value } else { None },
        production_plan,
        new_product_approved,
        new_product_units,
    }
}

/// Floating backends return near-integers for integer columns; round to the
/// nearest unit rather than truncating.
fn round_units(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::business::{
        BusinessParameters, NewProductCandidate, Product, ResourceCapacity, BUDGET, WOOD_HOURS,
    };
    use crate::domain::models::Solution;
    use crate::domain::value_objects::SolutionStatus;
    use crate::planning::model_builder::build;

    fn one_product_model() -> PlanningModel {
        build(&BusinessParameters::new(
            vec![
                ResourceCapacity::new(WOOD_HOURS, 100.0),
                ResourceCapacity::new(BUDGET, 5000.0),
            ],
            vec![Product {
                id: "bench".to_string(),
                profit_per_unit: 120.0,
                wood_hours_per_unit: 3.0,
                material_cost_per_unit: 90.0,
                design_complexity_per_unit: 4.0,
            }],
            NewProductCandidate {
                design_hours_required: 20.0,
                one_time_design_cost: 800.0,
                estimated_profit_per_unit: 150.0,
                wood_hours_per_unit: 2.0,
                material_cost_per_unit: 60.0,
                max_units_if_approved: 10.0,
            },
        ))
    }

    #[test]
    fn near_integer_values_round_to_nearest_unit() {
        let model = one_product_model();
        // values: produce, approve, units
        let solution = Solution::optimal(1234.0, vec![2.9999999, 0.9999999, 4.0000001]);

        let result = map_solution(&model, &solution);
        assert_eq!(result.units_for("bench"), Some(3));
        assert!(result.new_product_approved);
        assert_eq!(result.new_product_units, 4);
        assert_eq!(result.total_profit, Some(1234.0));
    }

    #[test]
    fn non_optimal_runs_zero_every_quantity() {
        let model = one_product_model();
        let solution = Solution::terminal(SolutionStatus::Infeasible, "no feasible point");

        let result = map_solution(&model, &solution);
        assert_eq!(result.status, SolutionStatus::Infeasible);
        assert_eq!(result.total_profit, None);
        assert_eq!(result.units_for("bench"), Some(0));
        assert!(!result.new_product_approved);
        assert_eq!(result.new_product_units, 0);
    }

    #[test]
    fn non_finite_values_are_zeroed_not_propagated() {
        let model = one_product_model();
        let solution = Solution::optimal(0.0, vec![f64::NAN, f64::INFINITY, f64::NEG_INFINITY]);

        let result = map_solution(&model, &solution);
        assert_eq!(result.units_for("bench"), Some(0));
        assert!(!result.new_product_approved);
        assert_eq!(result.new_product_units, 0);
    }

    #[test]
    fn units_are_clamped_when_approval_is_off() {
        let model = one_product_model();
        // numerical slack: tiny nonzero units with the binary at 0
        let solution = Solution::optimal(360.0, vec![3.0, 0.0000004, 0.6]);

        let result = map_solution(&model, &solution);
        assert!(!result.new_product_approved);
        assert_eq!(result.new_product_units, 0);
        assert_eq!(result.units_for("bench"), Some(3));
    }

    #[test]
    fn missing_values_are_zeroed() {
        let model = one_product_model();
        let solution = Solution::optimal(0.0, vec![1.0]);

        let result = map_solution(&model, &solution);
        assert_eq!(result.units_for("bench"), Some(1));
        assert!(!result.new_product_approved);
        assert_eq!(result.new_product_units, 0);
    }

    #[test]
    fn negative_noise_rounds_to_zero_units() {
        let model = one_product_model();
        let solution = Solution::optimal(0.0, vec![-0.0000002, 0.0, 0.0]);

        let result = map_solution(&model, &solution);
        assert_eq!(result.units_for("bench"), Some(0));
    }
}
