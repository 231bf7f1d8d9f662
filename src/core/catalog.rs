//! Browsing queries over the reference dataset.

use crate::models::{Dataset, EmissionRecord};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMean {
    pub category: String,
    pub mean_co2e: Option<f64>,
}

pub struct Catalog<'a> {
    dataset: &'a Dataset,
}

impl<'a> Catalog<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&'a str> {
        let mut out: Vec<&str> = Vec::new();
        for r in &self.dataset.records {
            if !out.contains(&r.category.as_str()) {
                out.push(&r.category);
            }
        }
        out
    }

    /// Distinct food names of one category in first-seen order.
    pub fn foods_in_category(&self, category: &str) -> Vec<&'a str> {
        let mut out: Vec<&str> = Vec::new();
        for r in &self.dataset.records {
            if r.category.eq_ignore_ascii_case(category) && !out.contains(&r.food_name.as_str()) {
                out.push(&r.food_name);
            }
        }
        out
    }

    /// A dataset holding only the records of `categories`, for queries that
    /// should ignore the rest of the table.
    pub fn restrict_to(&self, categories: &[String]) -> Dataset {
        Dataset::new(
            self.filter_categories(categories).into_iter().cloned().collect(),
            self.dataset.numeric_columns.clone(),
        )
    }

    pub fn filter_categories(&self, categories: &[String]) -> Vec<&'a EmissionRecord> {
        self.dataset
            .records
            .iter()
            .filter(|r| categories.iter().any(|c| c.eq_ignore_ascii_case(&r.category)))
            .collect()
    }

    /// Every record named `food`, optionally restricted to one category.
    pub fn find_food(&self, food: &str, category: Option<&str>) -> Vec<&'a EmissionRecord> {
        self.dataset
            .records
            .iter()
            .filter(|r| r.food_name.eq_ignore_ascii_case(food.trim()))
            .filter(|r| category.is_none_or(|c| r.category.eq_ignore_ascii_case(c.trim())))
            .collect()
    }

    /// Mean CO2e per kg of every category, highest first.
    pub fn category_means(&self) -> Vec<CategoryMean> {
        let mut out: Vec<CategoryMean> = self
            .categories()
            .into_iter()
            .map(|category| {
                let values: Vec<f64> = self
                    .dataset
                    .records
                    .iter()
                    .filter(|r| r.category == category)
                    .filter_map(|r| r.co2e_per_kg)
                    .collect();
                let mean_co2e = if values.is_empty() {
                    None
                } else {
                    Some(values.iter().sum::<f64>() / values.len() as f64)
                };
                CategoryMean {
                    category: category.to_string(),
                    mean_co2e,
                }
            })
            .collect();

        out.sort_by(|a, b| cmp_desc_nulls_last(a.mean_co2e, b.mean_co2e));
        out
    }

    pub fn most_polluting(&self, n: usize) -> Vec<&'a EmissionRecord> {
        let mut sorted: Vec<&EmissionRecord> = self.dataset.records.iter().collect();
        sorted.sort_by(|a, b| cmp_desc_nulls_last(a.co2e_per_kg, b.co2e_per_kg));
        sorted.truncate(n);
        sorted
    }

    pub fn least_polluting(&self, n: usize) -> Vec<&'a EmissionRecord> {
        let mut sorted: Vec<&EmissionRecord> = self.dataset.records.iter().collect();
        sorted.sort_by(|a, b| cmp_asc_nulls_last(a.co2e_per_kg, b.co2e_per_kg));
        sorted.truncate(n);
        sorted
    }
}

fn cmp_desc_nulls_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn cmp_asc_nulls_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
