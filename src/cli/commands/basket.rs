use crate::cli::parser::Commands;
use crate::cli::render::{dataset_unavailable, records_table};
use crate::core::basket::Basket;
use crate::core::catalog::Catalog;
use crate::errors::{AppError, AppResult};
use crate::models::NumericField;
use crate::session::Session;
use crate::ui::messages::{header, metric, success, warning};
use crate::utils::fmt_kg;
use crate::utils::formatting::{bar, bold};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, session: &mut Session) -> AppResult<()> {
    if let Commands::Basket { add, category } = cmd {
        let label = session.source_label();
        let Some(dataset) = session.dataset()? else {
            dataset_unavailable(&label);
            return Ok(());
        };
        let catalog = Catalog::new(dataset);

        let mut basket = Basket::new();
        for food in add {
            let matches = catalog.find_food(food, category.as_deref());
            if matches.is_empty() {
                return Err(AppError::UnknownProduct(food.clone()));
            }
            basket.extend(matches);
            success(format!("Added {food} to your basket!"));
        }

        print_basket(&basket);
    }
    Ok(())
}

fn print_basket(basket: &Basket) {
    header("Your basket");
    if basket.is_empty() {
        warning("Your basket is empty. Add products with --add <FOOD>.");
        return;
    }

    let mut table = records_table(basket.entries());
    let mut total_row = vec!["Total".to_string(), String::new()];
    total_row.extend(basket.totals().into_iter().map(|(_, v)| format!("{v:.2}")));
    table.add_row(total_row);
    print!("{}", table.render());

    header("Basket dashboard");
    metric(
        "Total CO2 emissions (kg CO2e)",
        format!("{:.2}", basket.total(NumericField::Co2e)),
    );
    metric("Total items in basket", basket.distinct_items());
    metric(
        "Average CO2 emissions (kg CO2e per item)",
        fmt_kg(basket.mean(NumericField::Co2e)),
    );

    if let Some(worst) = basket.most_polluting() {
        header("Most polluting item");
        println!(
            "{} from category {} with {} kg CO2e.",
            bold(&worst.food_name),
            bold(&worst.category),
            fmt_kg(worst.co2e_per_kg)
        );
    }

    header("Emission breakdown by category");
    let mut groups = basket.group_by_category_sum(NumericField::Co2e);
    groups.sort_by(|a, b| b.total.total_cmp(&a.total));
    let max = groups.first().map(|g| g.total).unwrap_or(0.0);

    let mut breakdown = Table::new(vec![
        Column::left("Category"),
        Column::right("CO2e pr kg"),
        Column::left(""),
    ]);
    for g in groups {
        let total = format!("{:.2}", g.total);
        breakdown.add_row(vec![g.category, total, bar(g.total, max, 30)]);
    }
    print!("{}", breakdown.render());
}
