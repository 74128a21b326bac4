//! # Variant density matrices
//!
//! One dense `length x 9` counter matrix per accepted chromosome, holding how
//! many admitted variants of each clinical significance sit at every position.
//! Matrices are allocated up front from a chrom sizes table, filled while the
//! variants stream past, and written once at the end as chunked, deflate
//! compressed datasets of a single HDF5 ("multivec") file.
//!
//! ```no_run
//! use cvtracks_core::Significance;
//! use cvtracks_density::{ChromosomeCatalog, DensityArchiveWriter};
//!
//! let mut catalog = ChromosomeCatalog::from_chrom_sizes_file("hg38.chrom.sizes").unwrap();
//! catalog.count_variant("1", 500, Significance::Pathogenic).unwrap();
//!
//! DensityArchiveWriter::default()
//!     .write(&catalog, "clinvar.multires.mv5", |_| {})
//!     .unwrap();
//! ```

pub mod accumulator;
pub mod catalog;
pub mod consts;
pub mod error;
pub mod matrix;
pub mod writing;

pub use catalog::ChromosomeCatalog;
pub use error::{DensityError, Result};
pub use matrix::DensityMatrix;
pub use writing::DensityArchiveWriter;
