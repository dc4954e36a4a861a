// Reporting module: plain-text presentation of an optimization result.
// Consumes only the result structure; the core has no other coupling to it.

use std::fmt;

use crate::domain::business::OptimizationResult;

/// Displayable plain-text report over a borrowed result
pub struct TextReport<'a>(&'a OptimizationResult);

impl<'a> TextReport<'a> {
    pub fn new(result: &'a OptimizationResult) -> Self {
        Self(result)
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;

        writeln!(f, "--- Production Plan Optimization Results ---")?;
        writeln!(f, "Status: {}", result.status)?;
        if let Some(profit) = result.total_profit {
            writeln!(f, "Total projected profit: ${:.2}", profit)?;
        }

        writeln!(f)?;
        writeln!(f, "Production plan:")?;
        for quantity in &result.production_plan {
            writeln!(
                f,
                "  {}: {} units",
                title_case(&quantity.product),
                quantity.units
            )?;
        }

        writeln!(f)?;
        writeln!(f, "New product:")?;
        writeln!(
            f,
            "  Design approved: {}",
            if result.new_product_approved {
                "yes"
            } else {
                "no"
            }
        )?;
        writeln!(f, "  Units: {}", result.new_product_units)
    }
}

pub fn render_text(result: &OptimizationResult) -> String {
    TextReport::new(result).to_string()
}

/// "dining_table" -> "Dining Table"
fn title_case(id: &str) -> String {
    id.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
