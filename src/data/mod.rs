/// Data layer: core types, loading, and the fact queries.
///
/// Architecture:
/// ```text
///  .json / .csv / .parquet        embedded sample
///        │                              │
///        ▼                              ▼
///   ┌──────────┐                  ┌──────────┐
///   │  loader  │                  │  sample  │
///   └──────────┘                  └──────────┘
///        │                              │
///        └──────────────┬───────────────┘
///                       ▼
///              ┌──────────────────┐
///              │ DinosaurCatalog  │  Vec<DinosaurRecord>, period index
///              └──────────────────┘
///                       │
///                       ▼
///                 ┌──────────┐
///                 │  query   │  tallest / description / alive-at
///                 └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod query;
pub mod sample;
pub mod writer;
