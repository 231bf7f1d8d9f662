pub mod dataset;
pub mod emission_record;
pub mod field;
pub mod history_entry;

pub use dataset::Dataset;
pub use emission_record::EmissionRecord;
pub use field::{LifecycleStage, NumericField};
pub use history_entry::HistoryEntry;
