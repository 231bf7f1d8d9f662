use crate::cli::parser::Commands;
use crate::cli::render::{dataset_unavailable, records_table};
use crate::config::Config;
use crate::core::catalog::Catalog;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::session::Session;
use crate::ui::messages::{header, info, warning};
use crate::utils::fmt_kg;
use crate::utils::formatting::bar;
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config, session: &mut Session) -> AppResult<()> {
    if let Commands::Dataset {
        categories,
        means,
        top,
        least,
        export,
    } = cmd
    {
        let label = session.source_label();
        let Some(dataset) = session.dataset()? else {
            dataset_unavailable(&label);
            return Ok(());
        };
        let full = Catalog::new(dataset);

        let restricted;
        let view = if categories.is_empty() {
            dataset
        } else {
            restricted = full.restrict_to(categories);
            &restricted
        };

        if view.is_empty() {
            warning("No products match the selected categories.");
            info(format!("Available categories: {}", full.categories().join(", ")));
            return Ok(());
        }
        let catalog = Catalog::new(view);

        if *means {
            print_category_means(&catalog);
        }

        if let Some(n) = top {
            let n = n.unwrap_or(cfg.dataset_limit);
            let (word, ranked) = if *least {
                ("least", catalog.least_polluting(n))
            } else {
                ("most", catalog.most_polluting(n))
            };
            header(format!("The {n} {word} polluting products in the database"));
            print!("{}", records_table(ranked).render());
        }

        if !*means && top.is_none() {
            header(format!("{} products from {label}", view.len()));
            print!("{}", records_table(&view.records).render());
        }

        if let Some(out) = &export.out {
            ExportLogic::export(&view.records, export.format, &expand_tilde(out), export.force)?;
        }
    }
    Ok(())
}

fn print_category_means(catalog: &Catalog<'_>) {
    header("Average CO2e per kg by category");

    let means = catalog.category_means();
    let max = means
        .iter()
        .filter_map(|m| m.mean_co2e)
        .fold(0.0_f64, f64::max);

    let mut table = Table::new(vec![
        Column::left("Category"),
        Column::right("CO2e pr kg"),
        Column::left(""),
    ]);
    for m in means {
        table.add_row(vec![
            m.category,
            fmt_kg(m.mean_co2e),
            bar(m.mean_co2e.unwrap_or(0.0), max, 30),
        ]);
    }
    print!("{}", table.render());
}
