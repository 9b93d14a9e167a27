/// Data layer: core types, loading, filtering, stats, and export.
///
/// Architecture:
/// ```text
///      .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + coerce numerics → RankingTable (cached by mtime)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ RankingTable  │  Vec<ProgramRow>, header-ordered columns
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐      ┌──────────┐      ┌──────────┐
///   │  filter   │ ───▶ │  stats    │      │  export   │
///   └──────────┘      └──────────┘      └──────────┘
///    cascade of         ranking sort,      CSV bytes for
///    equality filters   stats row,         download (memoized)
///                       QS metrics
/// ```
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
