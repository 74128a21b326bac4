use indicatif::{ProgressBar, ProgressStyle};

use cvtracks_core::VariantRecord;
use cvtracks_density::DensityMatrix;
use cvtracks_prep::PrepObserver;

// redraw the record spinner every this many records
const RECORD_TICK: u64 = 10_000;

///
/// Draws a spinner while records stream in, then a bar over the datasets.
///
pub struct ProgressObserver {
    records: ProgressBar,
    datasets: Option<ProgressBar>,
    seen: u64,
}

impl ProgressObserver {
    pub fn new() -> Self {
        let records = ProgressBar::new_spinner();
        records.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] {msg} ({pos} records)",
            )
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        records.set_message("Reading variants");

        ProgressObserver {
            records,
            datasets: None,
            seen: 0,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl PrepObserver for ProgressObserver {
    fn on_record(&mut self, _record: &VariantRecord, _admitted: bool) {
        self.seen += 1;
        if self.seen % RECORD_TICK == 0 {
            self.records.set_position(self.seen);
        }
    }

    fn on_records_done(&mut self, records_read: u64, admitted: u64) {
        self.records.set_position(records_read);
        self.records
            .finish_with_message(format!("Admitted {} variants", admitted));
    }

    fn on_datasets_start(&mut self, datasets: usize) {
        let bar = ProgressBar::new(datasets as u64);
        bar.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_message("Writing density datasets");
        self.datasets = Some(bar);
    }

    fn on_dataset(&mut self, matrix: &DensityMatrix) {
        if let Some(bar) = &self.datasets {
            bar.set_message(matrix.dataset_name());
            bar.inc(1);
        }
    }

    fn on_datasets_done(&mut self) {
        if let Some(bar) = self.datasets.take() {
            bar.finish_with_message("done");
        }
    }
}
