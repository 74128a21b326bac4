//! # ClinVar track preparation
//!
//! Turns a ClinVar VCF into the two files the genome browser tracks read:
//!
//! - a 14 column BED-like interval file, one line per admitted variant
//! - an HDF5 multivec file with a per-position, per-significance density
//!   matrix for every chromosome of the chrom sizes table
//!
//! The VCF is read once. Each record goes through [`filter::admit`]; admitted
//! records are projected into a [`NormalizedVariantRow`](cvtracks_core::NormalizedVariantRow),
//! written out, and counted into the catalog. The archive is written after
//! the last record.
//!
//! ```no_run
//! use cvtracks_prep::{NoopObserver, PrepConfig, run_prep};
//!
//! let config = PrepConfig::new(
//!     "clinvar.vcf.gz",
//!     "clinvar.bed",
//!     "clinvar.multires.mv5",
//!     "hg38.chrom.sizes",
//! );
//! let summary = run_prep(&config, &mut NoopObserver).unwrap();
//! println!("{} variants admitted", summary.admitted);
//! ```

pub mod error;
pub mod filter;
pub mod observer;
pub mod pipeline;
pub mod projector;
pub mod scoring;
pub mod writer;

// re-expose the main entry points
pub use error::{PrepError, Result};
pub use filter::{AdmittedVariant, Rejection, admit};
pub use observer::{NoopObserver, PrepObserver};
pub use pipeline::{
    DEFAULT_SEED, PrepConfig, PrepSummary, RejectionCounts, convert_records, run_prep,
};
pub use projector::project;
pub use scoring::gold_stars;
pub use writer::{IntervalSink, IntervalWriter};
