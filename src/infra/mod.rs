// ============================================================
// Layer 6: Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to any one layer.
//
//   config.rs  - StudyConfig, the pipeline sizes (how many
//                sentences, terms and questions to produce,
//                and the input-size cap). Loaded from and saved
//                to pretty-printed JSON.

/// Pipeline configuration and its JSON store
pub mod config;
