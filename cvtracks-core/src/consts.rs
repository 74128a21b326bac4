pub const CHR_PREFIX: &str = "chr";

/// Placeholder written for any absent field.
pub const MISSING_VALUE: &str = ".";

pub const ACCEPTED_CHROMOSOMES: &[&str] = &[
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16",
    "17", "18", "19", "20", "21", "22", "X", "Y",
];

// INFO keys of a ClinVar VCF
pub const INFO_SIGNIFICANCE: &str = "CLNSIG";
pub const INFO_REVIEW_STATUS: &str = "CLNREVSTAT";
pub const INFO_DISEASE_NAME: &str = "CLNDN";
pub const INFO_SIGNIFICANCE_CONF: &str = "CLNSIGCONF";
pub const INFO_VARIANT_TYPE: &str = "CLNVC";
pub const INFO_ORIGIN: &str = "ORIGIN";
pub const INFO_MOLECULAR_CONSEQUENCE: &str = "MC";
pub const INFO_HGVS: &str = "CLNHGVS";
