//! Text of the `about` command.

use crate::config::DEFAULT_SOURCE_URL;

const PARAGRAPHS: &[(&str, &str)] = &[
    (
        "About the climate database",
        "Figures come from Den Store Klimadatabase, published by CONCITO (Denmark's green \
         think tank) together with 2.-0 LCA Consultants. It holds lifecycle assessments for \
         more than 500 common food items, expressed in kg CO2-equivalents per kg of product \
         (net weight). CO2, methane and nitrous oxide are included, as is indirect land use \
         change (ILUC) caused by food production.",
    ),
    (
        "What this tool does",
        "`basket` totals the emissions of the products you bought. `dataset` lists the \
         database, the average per category and the most or least emitting products. \
         `trends` summarises a purchase history over time, either uploaded as CSV or \
         generated at random from the database.",
    ),
    (
        "Limitations",
        "Values are averages and do not reflect variation between brands or origins. They \
         are not meant for climate labelling, marketing or taxation of individual products, \
         and they say nothing about social or economic sustainability or about nutrition.",
    ),
];

/// Wrap the introduction to `width` columns.
pub fn render(width: usize) -> String {
    let mut out = String::new();
    for (title, body) in PARAGRAPHS {
        out.push_str(&format!("## {title}\n"));
        for line in textwrap::wrap(body, width) {
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
    }
    out.push_str(&format!("Source: {DEFAULT_SOURCE_URL}\n"));
    out
}
