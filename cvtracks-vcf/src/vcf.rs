//! Line based VCF parsing.
//!
//! Header lines are skipped, data lines are split on tabs and the first eight
//! columns are read. Nothing is buffered beyond the current line, so memory use
//! does not depend on the size of the input.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use cvtracks_core::consts::MISSING_VALUE;
use cvtracks_core::utils::get_dynamic_reader;
use cvtracks_core::{VariantInfo, VariantRecord};

use crate::error::{Result, VcfError};

/// CHROM POS ID REF ALT QUAL FILTER INFO
const MANDATORY_COLUMNS: usize = 8;

///
/// Streaming reader over the data lines of a VCF.
///
pub struct VcfReader<R: BufRead> {
    reader: R,
    line_buf: String,
    line_number: usize,
}

impl<R: BufRead> VcfReader<R> {
    pub fn new(reader: R) -> Self {
        VcfReader {
            reader,
            line_buf: String::new(),
            line_number: 0,
        }
    }

    /// Number of lines consumed so far, header lines included.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    ///
    /// Read the next data record. Returns `Ok(None)` at the end of the input.
    ///
    pub fn read_record(&mut self) -> Result<Option<VariantRecord>> {
        loop {
            self.line_buf.clear();
            if self.reader.read_line(&mut self.line_buf)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let line = self.line_buf.trim_end_matches('\n').trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            return parse_record_line(line, self.line_number).map(Some);
        }
    }
}

impl<R: BufRead> Iterator for VcfReader<R> {
    type Item = Result<VariantRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}

///
/// Open a VCF file, auto-detecting gzip/bgzf compression from the extension.
///
pub fn open_vcf<P: AsRef<Path>>(path: P) -> Result<VcfReader<BufReader<Box<dyn Read>>>> {
    let reader = get_dynamic_reader(path.as_ref())?;
    log::debug!("Reading variants from {:?}", path.as_ref());
    Ok(VcfReader::new(reader))
}

///
/// Parse one tab-separated data line.
///
/// # Arguments
///
/// - line: the line, without its line terminator
/// - line_number: 1-based line number, used in error messages
///
pub fn parse_record_line(line: &str, line_number: usize) -> Result<VariantRecord> {
    let fields: Vec<&str> = line.splitn(MANDATORY_COLUMNS + 1, '\t').collect();
    if fields.len() < MANDATORY_COLUMNS {
        return Err(VcfError::MalformedRecord {
            line: line_number,
            reason: format!(
                "expected at least {} columns, found {}",
                MANDATORY_COLUMNS,
                fields.len()
            ),
        });
    }

    let chrom = fields[0];
    if chrom.is_empty() {
        return Err(VcfError::MalformedRecord {
            line: line_number,
            reason: "empty CHROM".to_string(),
        });
    }

    let pos = fields[1]
        .parse::<u64>()
        .map_err(|e| VcfError::MalformedRecord {
            line: line_number,
            reason: format!("invalid POS '{}': {}", fields[1], e),
        })?;

    let alt_alleles = match fields[4] {
        MISSING_VALUE | "" => Vec::new(),
        alt => alt.split(',').map(str::to_string).collect(),
    };

    Ok(VariantRecord {
        chrom: chrom.to_string(),
        pos,
        ref_allele: fields[3].to_string(),
        alt_alleles,
        info: parse_info(fields[7]),
    })
}

///
/// Parse an INFO column into key -> values. Values are split on commas; a key
/// without `=` is a flag and gets no values.
///
pub fn parse_info(info: &str) -> VariantInfo {
    let mut parsed = VariantInfo::new();
    if info == MISSING_VALUE {
        return parsed;
    }

    for entry in info.split(';').filter(|e| !e.is_empty()) {
        match entry.split_once('=') {
            Some((key, value)) => {
                parsed.insert(key, value.split(',').map(str::to_string).collect());
            }
            None => parsed.insert(entry, Vec::new()),
        }
    }

    parsed
}
