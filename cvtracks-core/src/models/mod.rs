pub mod chrom_size;
pub mod clinical;
pub mod row;
pub mod variant;

// re-export for cleaner imports
pub use self::chrom_size::ChromSize;
pub use self::clinical::{ReviewStatus, Significance};
pub use self::row::NormalizedVariantRow;
pub use self::variant::{VariantInfo, VariantRecord};
