use serde::Serialize;

/// One of the six production phases whose emissions sum to the per-kg total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum LifecycleStage {
    Agriculture,
    Iluc,
    Processing,
    Packaging,
    Transport,
    Retail,
}

impl LifecycleStage {
    pub const ALL: [LifecycleStage; 6] = [
        LifecycleStage::Agriculture,
        LifecycleStage::Iluc,
        LifecycleStage::Processing,
        LifecycleStage::Packaging,
        LifecycleStage::Transport,
        LifecycleStage::Retail,
    ];

    /// Column header used by the source table and the history files
    pub fn header(&self) -> &'static str {
        match self {
            LifecycleStage::Agriculture => "Agriculture",
            LifecycleStage::Iluc => "ILUC",
            LifecycleStage::Processing => "Processing",
            LifecycleStage::Packaging => "Packaging",
            LifecycleStage::Transport => "Transport",
            LifecycleStage::Retail => "Retail",
        }
    }
}

/// The seven numeric columns of the reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum NumericField {
    Co2e,
    Stage(LifecycleStage),
}

impl NumericField {
    pub const ALL: [NumericField; 7] = [
        NumericField::Co2e,
        NumericField::Stage(LifecycleStage::Agriculture),
        NumericField::Stage(LifecycleStage::Iluc),
        NumericField::Stage(LifecycleStage::Processing),
        NumericField::Stage(LifecycleStage::Packaging),
        NumericField::Stage(LifecycleStage::Transport),
        NumericField::Stage(LifecycleStage::Retail),
    ];

    pub fn header(&self) -> &'static str {
        match self {
            NumericField::Co2e => "CO2e pr kg",
            NumericField::Stage(stage) => stage.header(),
        }
    }

    /// Case-insensitive match against a source header.
    /// `C02e pr kg` (with a zero) is what history files carry for the total.
    pub fn matches_header(&self, header: &str) -> bool {
        let h = header.trim();
        match self {
            NumericField::Co2e => {
                h.eq_ignore_ascii_case("CO2e pr kg") || h.eq_ignore_ascii_case("C02e pr kg")
            }
            NumericField::Stage(stage) => h.eq_ignore_ascii_case(stage.header()),
        }
    }
}
