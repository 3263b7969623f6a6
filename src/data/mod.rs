//! Data layer: row model, loading, and the trend pipeline.
//!
//! Architecture:
//! ```text
//!   overdose_rates.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse CSV → RowSet (bad rows dropped)
//!   └──────────┘
//!        │
//!        ├──────────────► index   → CategoryDomain  (once)
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  Selection → matching rows
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ aggregate  │  (year, month) → mean, chronological
//!   └───────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  window   │  trailing 36 / 12 months
//!   └──────────┘
//! ```

pub mod aggregate;
pub mod filter;
pub mod index;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod stats;
pub mod window;
