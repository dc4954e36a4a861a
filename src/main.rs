use craftplan::{
    render_text, BusinessParameters, NewProductCandidate, PlanningService, Product,
    ResourceCapacity, BUDGET, DESIGN_HOURS, WOOD_HOURS,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = furniture_workshop();
    let service = PlanningService::with_default_solver();

    println!("Solving production mix with {}", service.solver_name());
    let result = service.optimize(&params)?;
    print!("{}", render_text(&result));

    Ok(())
}

/// Default furniture-workshop scenario: three catalog products sharing
/// woodworking hours, design hours and a materials budget, plus one candidate
/// product awaiting a go/no-go design decision.
fn furniture_workshop() -> BusinessParameters {
    BusinessParameters::new(
        vec![
            ResourceCapacity::new(WOOD_HOURS, 1200.0),
            ResourceCapacity::new(DESIGN_HOURS, 400.0),
            ResourceCapacity::new(BUDGET, 150_000.0),
        ],
        vec![
            Product {
                id: "dining_table".to_string(),
                profit_per_unit: 350.0,
                wood_hours_per_unit: 8.0,
                material_cost_per_unit: 250.0,
                design_complexity_per_unit: 15.0,
            },
            Product {
                id: "bookshelf".to_string(),
                profit_per_unit: 250.0,
                wood_hours_per_unit: 6.0,
                material_cost_per_unit: 180.0,
                design_complexity_per_unit: 10.0,
            },
            Product {
                id: "office_chair".to_string(),
                profit_per_unit: 200.0,
                wood_hours_per_unit: 4.0,
                material_cost_per_unit: 150.0,
                design_complexity_per_unit: 8.0,
            },
        ],
        NewProductCandidate {
            design_hours_required: 100.0,
            one_time_design_cost: 5000.0,
            estimated_profit_per_unit: 275.0,
            wood_hours_per_unit: 5.0,
            material_cost_per_unit: 200.0,
            max_units_if_approved: 50.0,
        },
    )
}
