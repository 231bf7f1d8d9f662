use super::emission_record::EmissionRecord;
use super::field::{LifecycleStage, NumericField};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One purchase event of a history table.
///
/// Field names follow the CSV layout the dashboard has always written,
/// including the `C02e pr kg` spelling of the total column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "Date of Purchase")]
    pub purchase_date: NaiveDate,
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(
        rename = "C02e pr kg",
        alias = "CO2e pr kg",
        deserialize_with = "csv::invalid_option"
    )]
    pub co2e_per_kg: Option<f64>,
    #[serde(rename = "Agriculture", deserialize_with = "csv::invalid_option")]
    pub agriculture: Option<f64>,
    #[serde(rename = "ILUC", deserialize_with = "csv::invalid_option")]
    pub iluc: Option<f64>,
    #[serde(rename = "Processing", deserialize_with = "csv::invalid_option")]
    pub processing: Option<f64>,
    #[serde(rename = "Packaging", deserialize_with = "csv::invalid_option")]
    pub packaging: Option<f64>,
    #[serde(rename = "Transport", deserialize_with = "csv::invalid_option")]
    pub transport: Option<f64>,
    #[serde(rename = "Retail", deserialize_with = "csv::invalid_option")]
    pub retail: Option<f64>,
}

impl HistoryEntry {
    /// Record a purchase of `record` on `date`.
    pub fn purchase(date: NaiveDate, record: &EmissionRecord) -> Self {
        Self {
            purchase_date: date,
            product: record.food_name.clone(),
            category: record.category.clone(),
            co2e_per_kg: record.co2e_per_kg,
            agriculture: record.agriculture,
            iluc: record.iluc,
            processing: record.processing,
            packaging: record.packaging,
            transport: record.transport,
            retail: record.retail,
        }
    }

    pub fn value(&self, field: NumericField) -> Option<f64> {
        match field {
            NumericField::Co2e => self.co2e_per_kg,
            NumericField::Stage(stage) => self.stage(stage),
        }
    }

    pub fn stage(&self, stage: LifecycleStage) -> Option<f64> {
        match stage {
            LifecycleStage::Agriculture => self.agriculture,
            LifecycleStage::Iluc => self.iluc,
            LifecycleStage::Processing => self.processing,
            LifecycleStage::Packaging => self.packaging,
            LifecycleStage::Transport => self.transport,
            LifecycleStage::Retail => self.retail,
        }
    }

    pub fn date_str(&self) -> String {
        self.purchase_date.format("%Y-%m-%d").to_string()
    }
}
