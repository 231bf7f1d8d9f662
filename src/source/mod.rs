pub mod cache;
pub mod fetch;
pub mod table;

pub use cache::{CachePolicy, DatasetCache};
pub use fetch::{FileSource, HttpSource, TableSource, source_for};
pub use table::{RawTable, TableSignature};
