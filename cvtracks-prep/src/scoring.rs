use cvtracks_core::ReviewStatus;

///
/// ClinVar gold stars for a `CLNREVSTAT` value (all values joined by commas).
///
/// Total over every string: anything that is not a known review status scores 0.
///
pub fn gold_stars(review_status: &str) -> u8 {
    ReviewStatus::parse(review_status)
        .map(|status| status.gold_stars())
        .unwrap_or(0)
}
