use std::io;

use thiserror::Error;

use cvtracks_density::DensityError;
use cvtracks_vcf::VcfError;

/// Fatal errors of a conversion run. Rejected records are not errors.
#[derive(Error, Debug)]
pub enum PrepError {
    #[error("Failed to read variants: {0}")]
    Vcf(#[from] VcfError),

    #[error("Density matrices: {0}")]
    Density(#[from] DensityError),

    #[error("Failed to write intervals: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, PrepError>;
