use rand::Rng;

use cvtracks_core::NormalizedVariantRow;
use cvtracks_core::consts::{
    CHR_PREFIX, INFO_DISEASE_NAME, INFO_HGVS, INFO_MOLECULAR_CONSEQUENCE, INFO_ORIGIN,
    INFO_SIGNIFICANCE_CONF, INFO_VARIANT_TYPE, MISSING_VALUE,
};

use crate::filter::AdmittedVariant;
use crate::scoring::gold_stars;

const DISEASE_NOT_PROVIDED: &str = "not_provided";
const ENCODED_EQUALS: &str = "%3D";

fn or_missing(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => MISSING_VALUE.to_string(),
    }
}

///
/// Build the interval row of an admitted variant.
///
/// Draws exactly one `f64` from `rng` for the importance jitter, so the rows
/// of a run only reproduce when records are projected in admission order
/// from one generator.
///
/// # Arguments
/// - admitted: the output of [`admit`](crate::filter::admit)
/// - rng: the run's random source
///
pub fn project<R: Rng + ?Sized>(admitted: &AdmittedVariant, rng: &mut R) -> NormalizedVariantRow {
    let record = admitted.record;
    let info = &record.info;

    let stars = gold_stars(admitted.review_status.as_str());
    let jitter: f64 = rng.random();

    let alt_allele = or_missing(record.alt_alleles.first().map(String::as_str));

    let disease_name = match info.first(INFO_DISEASE_NAME) {
        Some(DISEASE_NOT_PROVIDED) => MISSING_VALUE.to_string(),
        other => or_missing(other),
    };

    let hgvs = or_missing(info.first(INFO_HGVS)).replace(ENCODED_EQUALS, "=");

    NormalizedVariantRow {
        chr: format!("{}{}", CHR_PREFIX, admitted.chrom_key),
        start: record.pos,
        end: record.pos + 1,
        ref_allele: record.ref_allele.clone(),
        alt_allele,
        importance: stars as f64 + jitter,
        gold_stars: stars,
        significance: admitted.significance,
        significance_conf: or_missing(info.joined(INFO_SIGNIFICANCE_CONF).as_deref()),
        variant_type: or_missing(info.joined(INFO_VARIANT_TYPE).as_deref()),
        origin: or_missing(info.first(INFO_ORIGIN)),
        molecular_consequence: or_missing(info.first(INFO_MOLECULAR_CONSEQUENCE)),
        disease_name,
        hgvs,
    }
}
