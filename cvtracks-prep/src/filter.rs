use std::fmt::{self, Display};

use cvtracks_core::consts::{INFO_REVIEW_STATUS, INFO_SIGNIFICANCE};
use cvtracks_core::{
    ReviewStatus, Significance, VariantRecord, chromosome_key, is_accepted_chromosome,
};

///
/// Why a record was left out of both outputs.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub enum Rejection {
    /// Not one of 1-22, X, Y.
    UnacceptedChromosome,
    MissingSignificance,
    UnacceptedSignificance,
    MissingReviewStatus,
    UnacceptedReviewStatus,
}

impl Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rejection::UnacceptedChromosome => "chromosome not accepted",
            Rejection::MissingSignificance => "no CLNSIG",
            Rejection::UnacceptedSignificance => "CLNSIG not accepted",
            Rejection::MissingReviewStatus => "no CLNREVSTAT",
            Rejection::UnacceptedReviewStatus => "CLNREVSTAT not accepted",
        };
        write!(f, "{}", reason)
    }
}

///
/// A record that passed admission, with the pieces the filter already
/// resolved.
///
#[derive(Debug, Clone)]
pub struct AdmittedVariant<'a> {
    pub record: &'a VariantRecord,
    /// Chromosome without `chr`.
    pub chrom_key: &'a str,
    pub significance: Significance,
    pub review_status: ReviewStatus,
}

///
/// Decide whether a record makes it into the tracks.
///
/// A record is admitted when its chromosome is accepted, its first `CLNSIG`
/// value is an accepted significance, and its `CLNREVSTAT` values joined with
/// commas form an accepted review status (see [`ReviewStatus::is_accepted`]).
///
/// The chrom sizes table plays no part here: an admitted record on a
/// chromosome the table lacks fails the run when it is counted.
///
pub fn admit(record: &VariantRecord) -> Result<AdmittedVariant<'_>, Rejection> {
    if !is_accepted_chromosome(&record.chrom) {
        return Err(Rejection::UnacceptedChromosome);
    }

    let significance = record
        .info
        .first(INFO_SIGNIFICANCE)
        .ok_or(Rejection::MissingSignificance)?;
    let significance =
        Significance::parse(significance).ok_or(Rejection::UnacceptedSignificance)?;

    let review_status = record
        .info
        .joined(INFO_REVIEW_STATUS)
        .ok_or(Rejection::MissingReviewStatus)?;
    let review_status = ReviewStatus::parse(&review_status)
        .filter(|status| status.is_accepted())
        .ok_or(Rejection::UnacceptedReviewStatus)?;

    Ok(AdmittedVariant {
        record,
        chrom_key: chromosome_key(&record.chrom),
        significance,
        review_status,
    })
}
