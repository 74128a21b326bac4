use std::fs::create_dir_all;
use std::path::Path;

use crate::catalog::ChromosomeCatalog;
use crate::consts::{DEFAULT_CHUNK_ROWS, DEFAULT_DEFLATE_LEVEL};
use crate::error::{DensityError, Result};
use crate::matrix::DensityMatrix;

///
/// Writes every matrix of a catalog as one dataset of an HDF5 file.
///
/// Datasets are named `chr<key>`, hold `u8` cells of shape `(length, 9)` and
/// are stored chunked along the position axis and deflate compressed, so a
/// reader can pull a genomic range without inflating the whole chromosome.
///
#[derive(Debug, Clone, Copy)]
pub struct DensityArchiveWriter {
    pub chunk_rows: usize,
    pub deflate_level: u8,
}

impl Default for DensityArchiveWriter {
    fn default() -> Self {
        DensityArchiveWriter {
            chunk_rows: DEFAULT_CHUNK_ROWS,
            deflate_level: DEFAULT_DEFLATE_LEVEL,
        }
    }
}

impl DensityArchiveWriter {
    pub fn new(chunk_rows: usize, deflate_level: u8) -> Self {
        DensityArchiveWriter {
            chunk_rows: chunk_rows.max(1),
            deflate_level,
        }
    }

    ///
    /// Write the archive in one pass, replacing any file at `path`.
    ///
    /// # Arguments
    /// - catalog: the matrices to persist, all of them, empty or not
    /// - path: destination of the HDF5 file
    /// - on_dataset: called after each dataset is written
    ///
    pub fn write<P, F>(
        &self,
        catalog: &ChromosomeCatalog,
        path: P,
        mut on_dataset: F,
    ) -> Result<()>
    where
        P: AsRef<Path>,
        F: FnMut(&DensityMatrix),
    {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_dir_all(parent)?;
        }

        let file = hdf5::File::create(path)?;

        for matrix in catalog.iter() {
            self.write_dataset(&file, matrix)?;
            on_dataset(matrix);
        }

        file.flush()?;
        log::info!("Wrote {} datasets to {:?}", catalog.len(), path);

        Ok(())
    }

    fn write_dataset(&self, file: &hdf5::File, matrix: &DensityMatrix) -> Result<()> {
        let name = matrix.dataset_name();
        let (rows, cols) = matrix.shape();

        // chunk dims may not exceed the fixed dataset dims
        let chunk_rows = rows.min(self.chunk_rows);

        let dataset = file
            .new_dataset::<u8>()
            .chunk((chunk_rows, cols))
            .deflate(self.deflate_level)
            .shape((rows, cols))
            .create(name.as_str())?;

        let data = matrix
            .counts()
            .as_slice()
            .ok_or_else(|| DensityError::NonContiguousMatrix(matrix.chrom().to_string()))?;
        dataset.write_raw(data)?;

        log::debug!(
            "Wrote dataset {} ({} x {}, {} counts)",
            name,
            rows,
            cols,
            matrix.total()
        );

        Ok(())
    }
}
