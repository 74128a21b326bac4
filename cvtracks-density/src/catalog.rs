use std::path::Path;

use fxhash::FxHashMap;

use cvtracks_core::utils::read_chrom_sizes;
use cvtracks_core::{ChromSize, chromosome_key, is_accepted_chromosome};

use crate::error::{DensityError, Result};
use crate::matrix::DensityMatrix;

///
/// Owner of every density matrix of a run, keyed by chromosome key (`1`, `X`,
/// ...). Only accepted chromosomes present in the chrom sizes table get a
/// matrix. Iteration follows the order of the table.
///
#[derive(Debug, Clone, Default)]
pub struct ChromosomeCatalog {
    matrices: Vec<DensityMatrix>,
    index: FxHashMap<String, usize>,
}

impl ChromosomeCatalog {
    ///
    /// Build the catalog from chrom sizes. Chromosomes outside 1-22, X and Y
    /// are skipped; the same chromosome listed twice (`1` and `chr1`, say) is
    /// an error.
    ///
    pub fn from_chrom_sizes<I>(chrom_sizes: I) -> Result<Self>
    where
        I: IntoIterator<Item = ChromSize>,
    {
        let mut catalog = ChromosomeCatalog::default();

        for chrom_size in chrom_sizes {
            if !is_accepted_chromosome(&chrom_size.name) {
                continue;
            }

            let key = chromosome_key(&chrom_size.name).to_string();
            if catalog.index.contains_key(&key) {
                return Err(DensityError::DuplicateChromosome(chrom_size.name));
            }

            catalog.index.insert(key.clone(), catalog.matrices.len());
            catalog
                .matrices
                .push(DensityMatrix::new(key, chrom_size.length as usize));
        }

        log::info!(
            "Allocated {} density matrices ({:.1} MB)",
            catalog.len(),
            catalog.allocated_bytes() as f64 / 1_048_576.0
        );

        Ok(catalog)
    }

    ///
    /// Read a chrom sizes file and build the catalog from it.
    ///
    /// # Arguments
    /// - path: path to a two column, tab separated chrom sizes file
    ///
    pub fn from_chrom_sizes_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let chrom_sizes = read_chrom_sizes(path)?;
        Self::from_chrom_sizes(chrom_sizes)
    }

    /// Look up a matrix by chromosome name, with or without `chr`.
    pub fn get(&self, chrom: &str) -> Option<&DensityMatrix> {
        self.index
            .get(chromosome_key(chrom))
            .map(|&i| &self.matrices[i])
    }

    pub fn get_mut(&mut self, chrom: &str) -> Option<&mut DensityMatrix> {
        match self.index.get(chromosome_key(chrom)) {
            Some(&i) => Some(&mut self.matrices[i]),
            None => None,
        }
    }

    pub fn contains(&self, chrom: &str) -> bool {
        self.index.contains_key(chromosome_key(chrom))
    }

    pub fn iter(&self) -> impl Iterator<Item = &DensityMatrix> {
        self.matrices.iter()
    }

    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    /// Bytes held by all matrices together.
    pub fn allocated_bytes(&self) -> usize {
        self.matrices
            .iter()
            .map(|m| {
                let (rows, cols) = m.shape();
                rows * cols
            })
            .sum()
    }

    /// Increments dropped on saturated cells, over all matrices.
    pub fn saturated(&self) -> u64 {
        self.matrices.iter().map(|m| m.saturated()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn chrom_sizes() -> Vec<ChromSize> {
        vec![
            ChromSize::new("chr2", 2000),
            ChromSize::new("chrM", 16569),
            ChromSize::new("chr1", 1000),
            ChromSize::new("chrUn_GL000220v1", 161802),
            ChromSize::new("X", 500),
        ]
    }

    #[rstest]
    fn test_catalog_keeps_accepted_chromosomes_in_order(chrom_sizes: Vec<ChromSize>) {
        let catalog = ChromosomeCatalog::from_chrom_sizes(chrom_sizes).unwrap();

        let keys: Vec<&str> = catalog.iter().map(|m| m.chrom()).collect();
        assert_eq!(keys, vec!["2", "1", "X"]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.allocated_bytes(), (2000 + 1000 + 500) * 9);
    }

    #[rstest]
    fn test_catalog_lookup_ignores_prefix(chrom_sizes: Vec<ChromSize>) {
        let catalog = ChromosomeCatalog::from_chrom_sizes(chrom_sizes).unwrap();

        assert_eq!(catalog.get("chrX").unwrap().length(), 500);
        assert_eq!(catalog.get("1").unwrap().shape(), (1000, 9));
        assert!(catalog.contains("chr2"));
        assert!(!catalog.contains("chrY"));
        assert!(!catalog.contains("M"));
        assert!(catalog.iter().all(|m| m.total() == 0));
    }

    #[rstest]
    fn test_catalog_rejects_duplicates() {
        let result = ChromosomeCatalog::from_chrom_sizes(vec![
            ChromSize::new("1", 100),
            ChromSize::new("chr1", 100),
        ]);

        assert!(matches!(
            result,
            Err(DensityError::DuplicateChromosome(name)) if name == "chr1"
        ));
    }

    #[rstest]
    fn test_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "chr21\t46709").unwrap();
        writeln!(file, "chr22_KI270731v1_random\t150754").unwrap();
        writeln!(file, "chrY\t57227").unwrap();

        let catalog = ChromosomeCatalog::from_chrom_sizes_file(file.path()).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("21").unwrap().length(), 46709);
    }

    #[rstest]
    fn test_catalog_from_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "chr1\tnot_a_number").unwrap();

        let result = ChromosomeCatalog::from_chrom_sizes_file(file.path());
        assert!(matches!(result, Err(DensityError::ChromSizes(_))));
    }
}
