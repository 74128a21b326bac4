use cvtracks_core::VariantRecord;
use cvtracks_density::DensityMatrix;

///
/// Hooks into the progress of a conversion run. Every method defaults to a
/// no-op, implement only what you need.
///
/// The pipeline calls these after the fact: the record has already been
/// admitted (or not) and the dataset has already been written. Observers
/// never influence the outputs.
///
pub trait PrepObserver {
    /// Once per VCF record, in file order.
    fn on_record(&mut self, _record: &VariantRecord, _admitted: bool) {}

    /// After the last record, before the archive is written.
    fn on_records_done(&mut self, _records_read: u64, _admitted: u64) {}

    /// Before the first dataset is written.
    fn on_datasets_start(&mut self, _datasets: usize) {}

    /// Once per dataset, in catalog order.
    fn on_dataset(&mut self, _matrix: &DensityMatrix) {}

    fn on_datasets_done(&mut self) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl PrepObserver for NoopObserver {}
