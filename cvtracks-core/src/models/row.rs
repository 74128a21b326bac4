use std::fmt::{self, Display};

use crate::models::Significance;

///
/// One line of the interval (BED) output. Fields are serialized in
/// declaration order.
///
#[derive(PartialEq, Debug, Clone)]
pub struct NormalizedVariantRow {
    pub chr: String,
    pub start: u64,
    pub end: u64,
    pub ref_allele: String,
    pub alt_allele: String,
    pub importance: f64,
    pub gold_stars: u8,
    pub significance: Significance,
    pub significance_conf: String,
    pub variant_type: String,
    pub origin: String,
    pub molecular_consequence: String,
    pub disease_name: String,
    pub hgvs: String,
}

impl NormalizedVariantRow {
    /// Number of tab-separated columns produced by [`as_string`](Self::as_string).
    pub const NUM_FIELDS: usize = 14;

    ///
    /// Get file string of the row, without a trailing newline
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.chr,
            self.start,
            self.end,
            self.ref_allele,
            self.alt_allele,
            self.importance,
            self.gold_stars,
            self.significance,
            self.significance_conf,
            self.variant_type,
            self.origin,
            self.molecular_consequence,
            self.disease_name,
            self.hgvs,
        )
    }
}

impl Display for NormalizedVariantRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_as_string_keeps_column_order() {
        let row = NormalizedVariantRow {
            chr: "chr7".to_string(),
            start: 117559590,
            end: 117559591,
            ref_allele: "ATCT".to_string(),
            alt_allele: "A".to_string(),
            importance: 4.25,
            gold_stars: 4,
            significance: Significance::Pathogenic,
            significance_conf: ".".to_string(),
            variant_type: "Deletion".to_string(),
            origin: "1".to_string(),
            molecular_consequence: "SO:0001822|inframe_deletion".to_string(),
            disease_name: "Cystic_fibrosis".to_string(),
            hgvs: "NC_000007.14:g.117559592_117559594del".to_string(),
        };

        let line = row.as_string();
        let fields: Vec<&str> = line.split('\t').collect();

        assert_eq!(fields.len(), NormalizedVariantRow::NUM_FIELDS);
        assert_eq!(
            fields,
            vec![
                "chr7",
                "117559590",
                "117559591",
                "ATCT",
                "A",
                "4.25",
                "4",
                "Pathogenic",
                ".",
                "Deletion",
                "1",
                "SO:0001822|inframe_deletion",
                "Cystic_fibrosis",
                "NC_000007.14:g.117559592_117559594del",
            ]
        );
        assert_eq!(row.to_string(), line);
    }
}
