//! Data layer: core types, loading, filtering, and aggregation.
//!
//! Architecture:
//! ```text
//!  .csv / .json
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse + validate file → Dataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  Dataset  │  Vec<Record>, per-attribute value inventories
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  apply FilterCriteria → Subset (borrowed view)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ aggregate │  distribution / cross-tab / group stats
//!   └──────────┘
//! ```
//!
//! Every aggregate is a pure function of (dataset, criteria): the dataset is
//! immutable after loading and the operations keep no state, so recomputing
//! with identical inputs yields identical outputs.

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;

pub use aggregate::{
    location_stats, remote_ratio_distribution, top_job_titles_by_size, LocationStat,
    TitleSizeRow, TitleSizeTable, DEFAULT_TOP_TITLES,
};
pub use error::DataError;
pub use filter::{FilterCriteria, Subset};
pub use loader::load_file;
pub use model::{Dataset, Record};
