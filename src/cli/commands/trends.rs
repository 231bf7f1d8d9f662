use crate::cli::parser::{Commands, DashboardArgs, TrendsAction, View};
use crate::cli::render::{dataset_unavailable, history_table};
use crate::config::Config;
use crate::core::history::{HistoryGenerator, load_history_csv};
use crate::core::trends::TrendMetrics;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::models::HistoryEntry;
use crate::session::Session;
use crate::ui::messages::{header, metric, success, warning};
use crate::utils::date::parse_date;
use crate::utils::formatting::{bar, fmt_delta};
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};
use crate::utils::{fmt_kg, fmt_pct};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn handle(cmd: &Commands, cfg: &Config, session: &mut Session) -> AppResult<()> {
    if let Commands::Trends { action } = cmd {
        match action {
            TrendsAction::Generate {
                start,
                end,
                baskets,
                max_items,
                seed,
                dashboard,
                export,
            } => {
                let generator =
                    HistoryGenerator::new(parse_date(start)?, parse_date(end)?, *baskets, *max_items);
                if let Err(AppError::InvalidDateRange { .. }) = generator.days_in_range() {
                    warning("Start date is after end date. Try again.");
                    return Ok(());
                }

                let label = session.source_label();
                let Some(dataset) = session.dataset()? else {
                    dataset_unavailable(&label);
                    return Ok(());
                };

                let mut rng = match seed {
                    Some(s) => StdRng::seed_from_u64(*s),
                    None => StdRng::from_entropy(),
                };
                let history = generator.generate(&dataset.records, &mut rng)?;
                success("Successfully generated data.");

                if let Some(out) = &export.out {
                    ExportLogic::export(&history, export.format, &expand_tilde(out), export.force)?;
                }

                print_dashboard(&history, dashboard, cfg);
            }
            TrendsAction::Upload { file, dashboard } => {
                let history = load_history_csv(file)?;
                success(format!(
                    "Loaded {} purchases from {}",
                    history.len(),
                    file.display()
                ));
                print_dashboard(&history, dashboard, cfg);
            }
        }
    }
    Ok(())
}

fn print_dashboard(history: &[HistoryEntry], args: &DashboardArgs, cfg: &Config) {
    let trends = TrendMetrics::new(history);
    if trends.is_empty() {
        warning("The purchase history is empty.");
        return;
    }

    let baskets = trends.basket_wise_metrics();

    match args.view {
        View::All => {
            header("All purchases");
            print!("{}", history_table(history).render());
        }
        View::Basket => {
            header("Baskets");
            let mut table = Table::new(vec![
                Column::left("Date of Purchase"),
                Column::right("Items"),
                Column::right("Avg CO2e"),
                Column::right("Total CO2e"),
            ]);
            for b in &baskets {
                table.add_row(vec![
                    b.date.format("%Y-%m-%d").to_string(),
                    b.item_count.to_string(),
                    fmt_kg(b.mean_co2e),
                    format!("{:.2}", b.total_co2e),
                ]);
            }
            print!("{}", table.render());
        }
    }

    header("Dashboard");
    if let (Some(latest), Some(average)) =
        (trends.latest_basket_total(), trends.average_basket_total())
    {
        metric(
            "Total CO2e (kg) of latest basket",
            format!("{latest:.2} ({} vs. average)", fmt_delta(average - latest)),
        );
        metric("Average total CO2e (kg) across all baskets", format!("{average:.2}"));
    }

    header("Total CO2e contribution by category");
    let mut shares = trends.category_percentage_breakdown();
    shares.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    let mut table = Table::new(vec![
        Column::left("Category"),
        Column::right("Share"),
        Column::right("CO2e"),
        Column::left(""),
    ]);
    for s in shares {
        let pct = fmt_pct(s.percentage);
        let total = format!("{:.2}", s.total_co2e);
        table.add_row(vec![s.category, pct, total, bar(s.percentage, 100.0, 30)]);
    }
    print!("{}", table.render());

    let n = args.top_products.unwrap_or(cfg.top_products);
    header(format!("Top {n} most polluting products"));
    let mut table = Table::new(vec![
        Column::left("Product"),
        Column::right("Total CO2e"),
        Column::right("Frequency"),
    ]);
    for p in trends.top_n_products(n) {
        let total = format!("{:.2}", p.total_co2e);
        table.add_row(vec![p.product, total, p.frequency.to_string()]);
    }
    print!("{}", table.render());

    header("Lifecycle emissions breakdown");
    let stages = trends.lifecycle_breakdown();
    let max = stages.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let mut table = Table::new(vec![
        Column::left("Stage"),
        Column::right("Emissions"),
        Column::left(""),
    ]);
    for (stage, value) in stages {
        table.add_row(vec![
            stage.header().to_string(),
            format!("{value:.2}"),
            bar(value, max, 30),
        ]);
    }
    print!("{}", table.render());
}
