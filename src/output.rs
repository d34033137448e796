use crate::curve::Curve;
use anyhow::anyhow;
use csv::WriterBuilder;
use formatx::formatx;
use std::fmt::Debug;
use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, info};

pub trait Output: Debug {
    fn writer_for_location_key(&self, location_key: &str) -> anyhow::Result<impl Write>;
    /// Whether something has already been written for this location key.
    fn contains(&self, _location_key: &str) -> bool {
        false
    }
    /// Whether this output can be considered a no-op and therefore that any code that only writes to the output can be skipped.
    fn is_noop(&self) -> bool {
        false
    }
}

#[derive(Debug)]
pub struct FileOutput {
    directory_path: PathBuf,
    file_template: String,
}

impl FileOutput {
    /// Arguments:
    /// * `directory_path` - directory the files are written to
    /// * `file_template` - file name, with `{}` standing in for the location key
    pub fn new(directory_path: PathBuf, file_template: String) -> Self {
        Self {
            directory_path,
            file_template,
        }
    }

    /// Writes each curve to `<key>.csv` in the given directory.
    pub fn csv_in(directory_path: PathBuf) -> Self {
        Self::new(directory_path, "{}.csv".to_string())
    }

    fn path_for_location_key(&self, location_key: &str) -> anyhow::Result<PathBuf> {
        let file_name = formatx!(&self.file_template, location_key).map_err(|e| {
            anyhow!(
                "Could not build file name from template {}: {e:?}",
                self.file_template
            )
        })?;
        Ok(self.directory_path.join(file_name))
    }
}

impl Output for FileOutput {
    fn writer_for_location_key(&self, location_key: &str) -> anyhow::Result<impl Write> {
        Ok(BufWriter::new(File::create(
            self.path_for_location_key(location_key)?,
        )?))
    }

    fn contains(&self, location_key: &str) -> bool {
        self.path_for_location_key(location_key)
            .map(|path| path.exists())
            .unwrap_or(false)
    }
}

impl Output for &FileOutput {
    fn writer_for_location_key(&self, location_key: &str) -> anyhow::Result<impl Write> {
        <FileOutput as Output>::writer_for_location_key(self, location_key)
    }

    fn contains(&self, location_key: &str) -> bool {
        <FileOutput as Output>::contains(self, location_key)
    }
}

/// An output that goes to nowhere/ a "sink"/ /dev/null.
#[derive(Debug, Default)]
pub struct SinkOutput;

impl Output for SinkOutput {
    fn writer_for_location_key(&self, _location_key: &str) -> anyhow::Result<impl Write> {
        Ok(io::sink())
    }

    fn is_noop(&self) -> bool {
        true
    }
}

/// Writes a curve as one value per line, without a header.
pub fn write_curve(output: &impl Output, curve: &Curve) -> anyhow::Result<()> {
    let writer = output.writer_for_location_key(curve.key())?;
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    for value in curve.data() {
        writer.write_record([value.to_string()])?;
    }
    writer.flush()?;

    Ok(())
}

/// Writes curves to the output. Curves that were written before are kept as they are unless
/// `overwrite` is set. Returns the number of curves written.
pub fn export_curves<'a>(
    output: &impl Output,
    curves: impl IntoIterator<Item = &'a Curve>,
    overwrite: bool,
) -> anyhow::Result<usize> {
    if output.is_noop() {
        return Ok(0);
    }

    let mut written = 0;
    for curve in curves {
        if !overwrite && output.contains(curve.key()) {
            debug!("Curve {} already exported, skipping", curve.key());
            continue;
        }
        write_curve(output, curve)?;
        written += 1;
    }
    info!("Exported {written} curve(s)");

    Ok(written)
}
