use ndarray::Array2;

use cvtracks_core::Significance;
use cvtracks_core::consts::CHR_PREFIX;

use crate::error::{DensityError, Result};

///
/// Dense `length x Significance::COUNT` counter matrix for one chromosome.
///
/// Rows are indexed by the VCF position as is. Row 0 only counts `POS=0`
/// records, which VCF reserves for telomeres. Cells are `u8` and saturate at
/// 255 instead of wrapping.
///
#[derive(Debug, Clone)]
pub struct DensityMatrix {
    chrom: String,
    counts: Array2<u8>,
    saturated: u64,
}

impl DensityMatrix {
    ///
    /// Allocate a zeroed matrix.
    ///
    /// # Arguments
    /// - chrom: the chromosome key, without `chr`
    /// - length: number of rows
    ///
    pub fn new(chrom: impl Into<String>, length: usize) -> Self {
        DensityMatrix {
            chrom: chrom.into(),
            counts: Array2::zeros((length, Significance::COUNT)),
            saturated: 0,
        }
    }

    /// The chromosome key, e.g. `1` or `X`.
    pub fn chrom(&self) -> &str {
        &self.chrom
    }

    /// `chr` + key, the name of this matrix's dataset in the archive.
    pub fn dataset_name(&self) -> String {
        format!("{}{}", CHR_PREFIX, self.chrom)
    }

    pub fn length(&self) -> usize {
        self.counts.nrows()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.counts.dim()
    }

    pub fn counts(&self) -> &Array2<u8> {
        &self.counts
    }

    pub fn get(&self, position: usize, significance: Significance) -> Option<u8> {
        self.counts.get((position, significance.index())).copied()
    }

    /// Increments that were dropped because their cell was already at 255.
    pub fn saturated(&self) -> u64 {
        self.saturated
    }

    /// Sum over every cell.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    ///
    /// Add one to the cell at `(position, significance)`.
    ///
    /// A position at or past the chromosome length is an error and leaves the
    /// matrix untouched.
    ///
    pub fn increment(&mut self, position: u64, significance: Significance) -> Result<()> {
        let length = self.length();
        let row = usize::try_from(position)
            .ok()
            .filter(|&row| row < length)
            .ok_or_else(|| DensityError::PositionOutOfBounds {
                chrom: self.chrom.clone(),
                position,
                length,
            })?;

        let cell = &mut self.counts[[row, significance.index()]];
        match cell.checked_add(1) {
            Some(value) => *cell = value,
            None => self.saturated += 1,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_new_matrix_is_zeroed() {
        let matrix = DensityMatrix::new("X", 1000);

        assert_eq!(matrix.shape(), (1000, 9));
        assert_eq!(matrix.dataset_name(), "chrX");
        assert_eq!(matrix.total(), 0);
    }

    #[rstest]
    fn test_increment_hits_one_cell() {
        let mut matrix = DensityMatrix::new("1", 1000);
        matrix.increment(500, Significance::Pathogenic).unwrap();
        matrix.increment(500, Significance::Pathogenic).unwrap();
        matrix.increment(500, Significance::Benign).unwrap();

        assert_eq!(matrix.get(500, Significance::Pathogenic), Some(2));
        assert_eq!(matrix.get(500, Significance::Benign), Some(1));
        assert_eq!(matrix.get(501, Significance::Pathogenic), Some(0));
        assert_eq!(matrix.counts()[[500, 6]], 2);
        assert_eq!(matrix.total(), 3);
    }

    #[rstest]
    #[case(0, true)]
    #[case(999, true)]
    #[case(1000, false)]
    #[case(u64::MAX, false)]
    fn test_increment_bounds(#[case] position: u64, #[case] in_bounds: bool) {
        let mut matrix = DensityMatrix::new("2", 1000);
        let result = matrix.increment(position, Significance::RiskFactor);

        assert_eq!(result.is_ok(), in_bounds);
        if in_bounds {
            assert_eq!(
                matrix.get(position as usize, Significance::RiskFactor),
                Some(1)
            );
            assert_eq!(matrix.total(), 1);
        } else {
            assert!(matches!(
                result,
                Err(DensityError::PositionOutOfBounds { length: 1000, .. })
            ));
            assert_eq!(matrix.total(), 0);
        }
    }

    #[rstest]
    fn test_increment_saturates() {
        let mut matrix = DensityMatrix::new("3", 10);
        for _ in 0..300 {
            matrix.increment(4, Significance::LikelyBenign).unwrap();
        }

        assert_eq!(matrix.get(4, Significance::LikelyBenign), Some(u8::MAX));
        assert_eq!(matrix.saturated(), 300 - u8::MAX as u64);
    }
}
