//! Per-day and per-category aggregates over a purchase history.

use crate::models::{HistoryEntry, LifecycleStage};
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct BasketMetrics {
    pub date: NaiveDate,
    pub item_count: usize,
    pub mean_co2e: Option<f64>,
    pub total_co2e: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub total_co2e: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductTotal {
    pub product: String,
    pub total_co2e: f64,
    pub frequency: usize,
}

pub struct TrendMetrics<'a> {
    history: &'a [HistoryEntry],
}

impl<'a> TrendMetrics<'a> {
    pub fn new(history: &'a [HistoryEntry]) -> Self {
        Self { history }
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// One row per purchase date, oldest first.
    pub fn basket_wise_metrics(&self) -> Vec<BasketMetrics> {
        // (items, known values, sum of known values)
        let mut by_date: BTreeMap<NaiveDate, (usize, usize, f64)> = BTreeMap::new();
        for e in self.history {
            let slot = by_date.entry(e.purchase_date).or_default();
            slot.0 += 1;
            if let Some(v) = e.co2e_per_kg {
                slot.1 += 1;
                slot.2 += v;
            }
        }

        by_date
            .into_iter()
            .map(|(date, (items, known, sum))| BasketMetrics {
                date,
                item_count: items,
                mean_co2e: (known > 0).then(|| sum / known as f64),
                total_co2e: sum,
            })
            .collect()
    }

    /// Total CO2e of the most recent basket.
    pub fn latest_basket_total(&self) -> Option<f64> {
        let latest = self.history.iter().map(|e| e.purchase_date).max()?;
        Some(
            self.history
                .iter()
                .filter(|e| e.purchase_date == latest)
                .filter_map(|e| e.co2e_per_kg)
                .fold(0.0, |acc, v| acc + v),
        )
    }

    /// Mean of the per-basket totals.
    pub fn average_basket_total(&self) -> Option<f64> {
        let baskets = self.basket_wise_metrics();
        if baskets.is_empty() {
            return None;
        }
        let sum = baskets.iter().fold(0.0, |acc, b| acc + b.total_co2e);
        Some(sum / baskets.len() as f64)
    }

    /// Share of the grand total per category, in category-name order.
    /// A zero grand total gives every category 0%.
    pub fn category_percentage_breakdown(&self) -> Vec<CategoryShare> {
        let mut by_category: BTreeMap<&str, f64> = BTreeMap::new();
        for e in self.history {
            *by_category.entry(e.category.as_str()).or_default() += e.co2e_per_kg.unwrap_or(0.0);
        }

        let grand_total = by_category.values().fold(0.0_f64, |acc, v| acc + *v);
        by_category
            .into_iter()
            .map(|(category, total)| CategoryShare {
                category: category.to_string(),
                total_co2e: total,
                percentage: if grand_total == 0.0 {
                    0.0
                } else {
                    total / grand_total * 100.0
                },
            })
            .collect()
    }

    /// The `n` products with the largest summed CO2e; ties keep first-seen order.
    pub fn top_n_products(&self, n: usize) -> Vec<ProductTotal> {
        let mut products: Vec<ProductTotal> = Vec::new();
        for e in self.history {
            let value = e.co2e_per_kg.unwrap_or(0.0);
            match products.iter_mut().find(|p| p.product == e.product) {
                Some(p) => {
                    p.total_co2e += value;
                    p.frequency += 1;
                }
                None => products.push(ProductTotal {
                    product: e.product.clone(),
                    total_co2e: value,
                    frequency: 1,
                }),
            }
        }

        // stable sort keeps first-seen order among equal totals
        products.sort_by(|a, b| b.total_co2e.total_cmp(&a.total_co2e));
        products.truncate(n);
        products
    }

    /// Sum of every lifecycle stage across the whole history.
    pub fn lifecycle_breakdown(&self) -> Vec<(LifecycleStage, f64)> {
        LifecycleStage::ALL
            .iter()
            .map(|stage| {
                let sum = self
                    .history
                    .iter()
                    .filter_map(|e| e.stage(*stage))
                    .fold(0.0, |acc, v| acc + v);
                (*stage, sum)
            })
            .collect()
    }
}
