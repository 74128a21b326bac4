use std::io::Write;
use std::path::PathBuf;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use cvtracks_core::VariantRecord;
use cvtracks_density::{ChromosomeCatalog, DensityArchiveWriter};
use cvtracks_vcf::open_vcf;

use crate::error::Result;
use crate::filter::{Rejection, admit};
use crate::observer::PrepObserver;
use crate::projector::project;
use crate::writer::IntervalWriter;

/// Seed of the importance jitter when none is given.
pub const DEFAULT_SEED: u64 = 1;

///
/// Everything a conversion run needs to know.
///
#[derive(Debug, Clone, PartialEq)]
pub struct PrepConfig {
    pub input_variants: PathBuf,
    pub output_intervals: PathBuf,
    pub output_density: PathBuf,
    pub input_chromosome_sizes: PathBuf,
    pub seed: u64,
}

impl PrepConfig {
    pub fn new(
        input_variants: impl Into<PathBuf>,
        output_intervals: impl Into<PathBuf>,
        output_density: impl Into<PathBuf>,
        input_chromosome_sizes: impl Into<PathBuf>,
    ) -> Self {
        PrepConfig {
            input_variants: input_variants.into(),
            output_intervals: output_intervals.into(),
            output_density: output_density.into(),
            input_chromosome_sizes: input_chromosome_sizes.into(),
            seed: DEFAULT_SEED,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Records left out, by reason.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RejectionCounts {
    pub unaccepted_chromosome: u64,
    pub missing_significance: u64,
    pub unaccepted_significance: u64,
    pub missing_review_status: u64,
    pub unaccepted_review_status: u64,
}

impl RejectionCounts {
    pub fn record(&mut self, rejection: Rejection) {
        let counter = match rejection {
            Rejection::UnacceptedChromosome => &mut self.unaccepted_chromosome,
            Rejection::MissingSignificance => &mut self.missing_significance,
            Rejection::UnacceptedSignificance => &mut self.unaccepted_significance,
            Rejection::MissingReviewStatus => &mut self.missing_review_status,
            Rejection::UnacceptedReviewStatus => &mut self.unaccepted_review_status,
        };
        *counter += 1;
    }

    pub fn total(&self) -> u64 {
        self.unaccepted_chromosome
            + self.missing_significance
            + self.unaccepted_significance
            + self.missing_review_status
            + self.unaccepted_review_status
    }
}

///
/// What a run did.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PrepSummary {
    pub records_read: u64,
    /// Equal to the number of interval rows written.
    pub admitted: u64,
    pub rejected: RejectionCounts,
    /// Increments dropped because a cell was already at 255.
    pub saturated: u64,
    pub datasets_written: usize,
}

///
/// Run the single pass over `records`: admit, project, write and count each
/// one in turn.
///
/// Stops at the first read error, at an admitted record whose chromosome has
/// no matrix in `catalog`, and at an out of bounds position. The archive is
/// not touched here, and `saturated`/`datasets_written` of the returned
/// summary are left at zero.
///
pub fn convert_records<I, W, R, O>(
    records: I,
    catalog: &mut ChromosomeCatalog,
    writer: &mut IntervalWriter<W>,
    rng: &mut R,
    observer: &mut O,
) -> Result<PrepSummary>
where
    I: IntoIterator<Item = cvtracks_vcf::Result<VariantRecord>>,
    W: Write,
    R: Rng + ?Sized,
    O: PrepObserver + ?Sized,
{
    let mut summary = PrepSummary::default();

    for record in records {
        let record = record?;
        summary.records_read += 1;

        let admitted = match admit(&record) {
            Ok(admitted) => admitted,
            Err(rejection) => {
                summary.rejected.record(rejection);
                observer.on_record(&record, false);
                continue;
            }
        };

        let row = project(&admitted, rng);
        // counted before written, so an unsized chromosome leaves no row behind
        catalog.count_variant(admitted.chrom_key, record.pos, admitted.significance)?;
        writer.write_row(&row)?;

        summary.admitted += 1;
        observer.on_record(&record, true);
    }

    Ok(summary)
}

///
/// Convert a ClinVar VCF into the interval file and the density archive.
///
/// The catalog is built from the chrom sizes first, so a bad table fails the
/// run before any output is created. The interval file is complete and
/// flushed before the archive is written.
///
pub fn run_prep<O>(config: &PrepConfig, observer: &mut O) -> Result<PrepSummary>
where
    O: PrepObserver + ?Sized,
{
    let mut catalog = ChromosomeCatalog::from_chrom_sizes_file(&config.input_chromosome_sizes)?;
    let records = open_vcf(&config.input_variants)?;

    let mut writer = IntervalWriter::create(&config.output_intervals)?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    debug!("Importance jitter seeded with {}", config.seed);

    let mut summary = convert_records(records, &mut catalog, &mut writer, &mut rng, observer)?;
    let rows = writer.close()?;
    info!(
        "Wrote {} intervals to {:?} ({} of {} records rejected)",
        rows,
        config.output_intervals,
        summary.rejected.total(),
        summary.records_read
    );
    observer.on_records_done(summary.records_read, summary.admitted);

    summary.saturated = catalog.saturated();
    if summary.saturated > 0 {
        warn!(
            "{} increments hit a count of 255 and were dropped",
            summary.saturated
        );
    }

    observer.on_datasets_start(catalog.len());
    DensityArchiveWriter::default().write(&catalog, &config.output_density, |matrix| {
        observer.on_dataset(matrix)
    })?;
    observer.on_datasets_done();
    summary.datasets_written = catalog.len();

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use cvtracks_core::{ChromSize, Significance};
    use cvtracks_vcf::VcfReader;
    use pretty_assertions::assert_eq;
    use rstest::*;

    const VCF: &str = "\
##fileformat=VCFv4.1
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO
1\t500\t1\tA\tG\t.\t.\tCLNSIG=Pathogenic;CLNREVSTAT=reviewed_by_expert_panel
1\t600\t2\tC\tT\t.\t.\tCLNSIG=Benign;CLNREVSTAT=no_assertion_provided
MT\t700\t3\tG\tA\t.\t.\tCLNSIG=Pathogenic;CLNREVSTAT=practice_guideline
1\t500\t5\tA\tC\t.\t.\tCLNSIG=Pathogenic;CLNREVSTAT=criteria_provided,_single_submitter
1\t800\t6\tG\tGA\t.\t.\tCLNSIG=drug_response;CLNREVSTAT=practice_guideline
";

    #[fixture]
    fn catalog() -> ChromosomeCatalog {
        ChromosomeCatalog::from_chrom_sizes(vec![ChromSize::new("chr1", 1000)]).unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        seen: Vec<(u64, bool)>,
    }

    impl PrepObserver for Recorder {
        fn on_record(&mut self, record: &VariantRecord, admitted: bool) {
            self.seen.push((record.pos, admitted));
        }
    }

    #[rstest]
    fn test_convert_records(mut catalog: ChromosomeCatalog) {
        let records = VcfReader::new(Cursor::new(VCF));
        let mut writer = IntervalWriter::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
        let mut observer = Recorder::default();

        let summary =
            convert_records(records, &mut catalog, &mut writer, &mut rng, &mut observer).unwrap();

        assert_eq!(summary.records_read, 5);
        assert_eq!(summary.admitted, 2);
        assert_eq!(summary.rejected.unaccepted_review_status, 1);
        assert_eq!(summary.rejected.unaccepted_chromosome, 1);
        assert_eq!(summary.rejected.unaccepted_significance, 1);
        assert_eq!(summary.rejected.total(), 3);
        assert_eq!(writer.rows_written(), summary.admitted);

        assert_eq!(
            observer.seen,
            vec![
                (500, true),
                (600, false),
                (700, false),
                (500, true),
                (800, false),
            ]
        );

        let chr1 = catalog.get("chr1").unwrap();
        assert_eq!(chr1.get(500, Significance::Pathogenic), Some(2));
        assert_eq!(chr1.total(), 2);

        let text = String::from_utf8(writer.finish().unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("chr1\t500\t501\tA\tG\t3."));
        assert!(lines[1].starts_with("chr1\t500\t501\tA\tC\t1."));
    }

    #[rstest]
    fn test_convert_records_out_of_bounds_is_fatal(mut catalog: ChromosomeCatalog) {
        let vcf = "1\t1000\t.\tA\tG\t.\t.\tCLNSIG=Benign;CLNREVSTAT=practice_guideline\n";
        let mut writer = IntervalWriter::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);

        let result = convert_records(
            VcfReader::new(Cursor::new(vcf)),
            &mut catalog,
            &mut writer,
            &mut rng,
            &mut crate::observer::NoopObserver,
        );

        assert!(matches!(
            result,
            Err(crate::error::PrepError::Density(
                cvtracks_density::DensityError::PositionOutOfBounds { .. }
            ))
        ));
    }

    #[rstest]
    fn test_convert_records_chromosome_without_size_is_fatal(mut catalog: ChromosomeCatalog) {
        let vcf = "\
1\t500\t.\tA\tG\t.\t.\tCLNSIG=Benign;CLNREVSTAT=practice_guideline
Y\t10\t.\tT\tC\t.\t.\tCLNSIG=Pathogenic;CLNREVSTAT=practice_guideline
1\t600\t.\tA\tG\t.\t.\tCLNSIG=Benign;CLNREVSTAT=practice_guideline
";
        let mut writer = IntervalWriter::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);

        let result = convert_records(
            VcfReader::new(Cursor::new(vcf)),
            &mut catalog,
            &mut writer,
            &mut rng,
            &mut crate::observer::NoopObserver,
        );

        assert!(matches!(
            result,
            Err(crate::error::PrepError::Density(
                cvtracks_density::DensityError::UnknownChromosome(ref chrom)
            )) if chrom == "Y"
        ));
        // the chrY row never reached the writer
        assert_eq!(writer.rows_written(), 1);
    }

    #[rstest]
    fn test_convert_records_stops_on_malformed_line(mut catalog: ChromosomeCatalog) {
        let vcf = "1\tnot_a_position\t.\tA\tG\t.\t.\tCLNSIG=Benign\n";
        let mut writer = IntervalWriter::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);

        let result = convert_records(
            VcfReader::new(Cursor::new(vcf)),
            &mut catalog,
            &mut writer,
            &mut rng,
            &mut crate::observer::NoopObserver,
        );

        assert!(matches!(result, Err(crate::error::PrepError::Vcf(_))));
    }

    #[rstest]
    fn test_rejection_counts() {
        let mut counts = RejectionCounts::default();
        counts.record(Rejection::MissingSignificance);
        counts.record(Rejection::MissingSignificance);
        counts.record(Rejection::MissingReviewStatus);

        assert_eq!(counts.missing_significance, 2);
        assert_eq!(counts.missing_review_status, 1);
        assert_eq!(counts.total(), 3);
    }

    #[rstest]
    fn test_config_defaults_to_seed_one() {
        let config = PrepConfig::new("in.vcf", "out.bed", "out.mv5", "chrom.sizes");
        assert_eq!(config.seed, 1);
        assert_eq!(config.with_seed(9).seed, 9);
    }
}
