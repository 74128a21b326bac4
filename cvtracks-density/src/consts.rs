/// Rows per HDF5 chunk. 65536 x 9 u8 cells keeps each chunk just under 600KB.
pub const DEFAULT_CHUNK_ROWS: usize = 65_536;

/// gzip level, same as h5py's default for `compression="gzip"`.
pub const DEFAULT_DEFLATE_LEVEL: u8 = 4;
