use super::field::{LifecycleStage, NumericField};
use serde::Serialize;

/// One row of the reference dataset.
///
/// Numeric values are `None` when the source cell was missing or could not be
/// parsed, so "unknown" stays distinct from "zero emissions".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmissionRecord {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Food")]
    pub food_name: String,
    #[serde(rename = "CO2e pr kg")]
    pub co2e_per_kg: Option<f64>,
    #[serde(rename = "Agriculture")]
    pub agriculture: Option<f64>,
    #[serde(rename = "ILUC")]
    pub iluc: Option<f64>,
    #[serde(rename = "Processing")]
    pub processing: Option<f64>,
    #[serde(rename = "Packaging")]
    pub packaging: Option<f64>,
    #[serde(rename = "Transport")]
    pub transport: Option<f64>,
    #[serde(rename = "Retail")]
    pub retail: Option<f64>,
}

impl EmissionRecord {
    pub fn new(category: &str, food_name: &str, co2e_per_kg: Option<f64>) -> Self {
        Self {
            category: category.to_string(),
            food_name: food_name.to_string(),
            co2e_per_kg,
            ..Default::default()
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

    pub fn set_value(&mut self, field: NumericField, value: Option<f64>) {
        let slot = match field {
            NumericField::Co2e => &mut self.co2e_per_kg,
            NumericField::Stage(LifecycleStage::Agriculture) => &mut self.agriculture,
            NumericField::Stage(LifecycleStage::Iluc) => &mut self.iluc,
            NumericField::Stage(LifecycleStage::Processing) => &mut self.processing,
            NumericField::Stage(LifecycleStage::Packaging) => &mut self.packaging,
            NumericField::Stage(LifecycleStage::Transport) => &mut self.transport,
            NumericField::Stage(LifecycleStage::Retail) => &mut self.retail,
        };
        *slot = value;
    }
}
