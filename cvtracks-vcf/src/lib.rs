//! # Streaming ClinVar VCF reader
//!
//! Reads a VCF file (plain text or gzipped/bgzf) one line at a time and yields
//! [`VariantRecord`](cvtracks_core::VariantRecord)s. Only the columns the track
//! conversion needs are kept: CHROM, POS, REF, ALT and INFO.

pub mod error;
pub mod vcf;

pub use error::{Result, VcfError};
pub use vcf::{VcfReader, open_vcf, parse_info, parse_record_line};
