//! # Core types for cvtracks
//!
//! Shared building blocks for converting ClinVar VCF records into genome-browser
//! tracks: the accepted chromosome/significance/review-status vocabularies, the
//! record and row models, and small gz-aware reading helpers.
//!
pub mod consts;
pub mod errors;
pub mod models;
pub mod utils;

// re-export for cleaner imports
pub use errors::{CoreError, Result};
pub use models::{
    ChromSize, NormalizedVariantRow, ReviewStatus, Significance, VariantInfo, VariantRecord,
};
pub use utils::{chromosome_key, is_accepted_chromosome};
