use thiserror::Error;

use cvtracks_core::CoreError;

#[derive(Error, Debug)]
pub enum DensityError {
    #[error("Chromosome {0} appears more than once in the chrom sizes table")]
    DuplicateChromosome(String),

    #[error("Chromosome {0} is not in the chrom sizes table")]
    UnknownChromosome(String),

    #[error("Position {position} is out of bounds for chr{chrom} of length {length}")]
    PositionOutOfBounds {
        chrom: String,
        position: u64,
        length: usize,
    },

    #[error("Density matrix for chr{0} is not laid out contiguously")]
    NonContiguousMatrix(String),

    #[error(transparent)]
    ChromSizes(#[from] CoreError),

    #[error("HDF5 error: {0}")]
    Hdf5(#[from] hdf5::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DensityError>;
