use cvtracks_core::Significance;

use crate::catalog::ChromosomeCatalog;
use crate::error::{DensityError, Result};

impl ChromosomeCatalog {
    ///
    /// Count one admitted variant: add one at `(position, significance)` in the
    /// matrix of `chrom`.
    ///
    /// # Arguments
    /// - chrom: chromosome name, with or without `chr`
    /// - position: 1-based VCF position, used directly as the row index
    /// - significance: selects the column
    ///
    pub fn count_variant(
        &mut self,
        chrom: &str,
        position: u64,
        significance: Significance,
    ) -> Result<()> {
        let matrix = self
            .get_mut(chrom)
            .ok_or_else(|| DensityError::UnknownChromosome(chrom.to_string()))?;
        matrix.increment(position, significance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use cvtracks_core::ChromSize;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn catalog() -> ChromosomeCatalog {
        ChromosomeCatalog::from_chrom_sizes(vec![
            ChromSize::new("chr1", 1000),
            ChromSize::new("chrX", 200),
        ])
        .unwrap()
    }

    #[rstest]
    fn test_count_variant_matches_admitted_records(mut catalog: ChromosomeCatalog) {
        let admitted = [
            ("1", 500, Significance::Pathogenic),
            ("chr1", 500, Significance::Pathogenic),
            ("1", 500, Significance::UncertainSignificance),
            ("X", 17, Significance::ConflictingInterpretations),
        ];
        for (chrom, position, significance) in admitted {
            catalog.count_variant(chrom, position, significance).unwrap();
        }

        let chr1 = catalog.get("1").unwrap();
        assert_eq!(chr1.get(500, Significance::Pathogenic), Some(2));
        assert_eq!(chr1.get(500, Significance::UncertainSignificance), Some(1));
        assert_eq!(chr1.total(), 3);

        let chrx = catalog.get("X").unwrap();
        assert_eq!(chrx.counts()[[17, 8]], 1);
        assert_eq!(chrx.total(), 1);
    }

    #[rstest]
    fn test_count_variant_unknown_chromosome(mut catalog: ChromosomeCatalog) {
        let result = catalog.count_variant("chrY", 10, Significance::Benign);
        assert!(matches!(result, Err(DensityError::UnknownChromosome(_))));
    }

    #[rstest]
    fn test_count_variant_out_of_bounds(mut catalog: ChromosomeCatalog) {
        let result = catalog.count_variant("X", 200, Significance::Benign);
        assert!(matches!(
            result,
            Err(DensityError::PositionOutOfBounds { position: 200, length: 200, .. })
        ));
    }
}
