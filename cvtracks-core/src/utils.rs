use std::ffi::OsStr;
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::consts::{ACCEPTED_CHROMOSOMES, CHR_PREFIX};
use crate::errors::{CoreError, Result};
use crate::models::ChromSize;

/// 256KB buffer, ClinVar VCFs run into the gigabytes once decompressed
const READ_BUFFER_CAPACITY: usize = 256 * 1024;

///
/// Get a reader for either a gzip'd (or bgzip'd) or plain file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = matches!(
        path.extension().and_then(OsStr::to_str),
        Some("gz") | Some("bgz")
    );
    let file = File::open(path).map_err(|source| CoreError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::with_capacity(READ_BUFFER_CAPACITY, file))
}

///
/// Strip the `chr` prefix off a chromosome name: `chr1` and `1` share the key `1`.
///
pub fn chromosome_key(name: &str) -> &str {
    name.strip_prefix(CHR_PREFIX).unwrap_or(name)
}

///
/// Whether a chromosome, prefixed or not, is one of 1-22, X or Y.
///
pub fn is_accepted_chromosome(name: &str) -> bool {
    ACCEPTED_CHROMOSOMES.contains(&chromosome_key(name))
}

///
/// Read a two column, tab separated chrom sizes table. Every chromosome is
/// returned, accepted or not, in file order.
///
/// # Arguments
///
/// - path: path to the chrom sizes file
///
pub fn read_chrom_sizes<T: AsRef<Path>>(path: T) -> Result<Vec<ChromSize>> {
    let reader = get_dynamic_reader(path.as_ref())?;
    parse_chrom_sizes(reader)
}

///
/// Parse chrom sizes from any buffered reader. Blank lines are skipped; a line
/// without exactly two fields or with a length that is not a positive integer
/// is an error.
///
pub fn parse_chrom_sizes<R: BufRead>(reader: R) -> Result<Vec<ChromSize>> {
    let mut chrom_sizes = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = idx + 1;
        let line = line.trim_end_matches('\r');

        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 2 {
            return Err(CoreError::MalformedChromSizes {
                line: line_number,
                reason: format!("expected 2 tab separated fields, found {}", fields.len()),
            });
        }

        let name = fields[0].trim();
        if name.is_empty() {
            return Err(CoreError::MalformedChromSizes {
                line: line_number,
                reason: "empty chromosome name".to_string(),
            });
        }

        let length = fields[1].trim().parse::<u32>().map_err(|e| {
            CoreError::MalformedChromSizes {
                line: line_number,
                reason: format!("invalid length '{}': {}", fields[1].trim(), e),
            }
        })?;
        if length == 0 {
            return Err(CoreError::MalformedChromSizes {
                line: line_number,
                reason: format!("length of {} must be positive", name),
            });
        }

        chrom_sizes.push(ChromSize::new(name, length));
    }

    Ok(chrom_sizes)
}
