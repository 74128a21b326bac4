use std::fs::{File, create_dir_all};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;

use cvtracks_core::NormalizedVariantRow;

///
/// Destination file of the interval output. Paths ending in `.gz` are gzip
/// compressed, everything else is plain text.
///
pub enum IntervalSink {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl IntervalSink {
    ///
    /// Create (or truncate) the file at `path`, making missing parent
    /// directories on the way.
    ///
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_dir_all(parent)?;
        }

        let file = BufWriter::new(File::create(path)?);
        let is_gzipped = path.extension().is_some_and(|ext| ext == "gz");

        Ok(if is_gzipped {
            IntervalSink::Gzip(GzEncoder::new(file, Compression::default()))
        } else {
            IntervalSink::Plain(file)
        })
    }

    /// Flush everything, writing the gzip trailer when compressed.
    pub fn finish(self) -> io::Result<()> {
        match self {
            IntervalSink::Plain(mut file) => file.flush(),
            IntervalSink::Gzip(encoder) => encoder.finish()?.flush(),
        }
    }
}

impl Write for IntervalSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            IntervalSink::Plain(file) => file.write(buf),
            IntervalSink::Gzip(encoder) => encoder.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            IntervalSink::Plain(file) => file.flush(),
            IntervalSink::Gzip(encoder) => encoder.flush(),
        }
    }
}

///
/// Streams rows as tab separated lines, in the order they are given, without
/// a header.
///
pub struct IntervalWriter<W: Write> {
    inner: W,
    rows_written: u64,
}

impl<W: Write> IntervalWriter<W> {
    pub fn new(inner: W) -> Self {
        IntervalWriter {
            inner,
            rows_written: 0,
        }
    }

    pub fn write_row(&mut self, row: &NormalizedVariantRow) -> io::Result<()> {
        writeln!(self.inner, "{}", row.as_string())?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl IntervalWriter<IntervalSink> {
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(IntervalWriter::new(IntervalSink::create(path)?))
    }

    /// Flush and close the destination file.
    pub fn close(self) -> io::Result<u64> {
        let rows = self.rows_written;
        self.finish()?.finish()?;
        Ok(rows)
    }
}
