use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::{Component, Path, PathBuf};

use cardsmith_core::constants::VCF_EXTENSION;
use cardsmith_rfc::rfc::vcard::serialize;

use super::Sink;
use crate::error::{SinkError, SinkResult};

/// File-backed sink.
///
/// Destination `name` maps to `<directory>/<name>.<extension>`, with the name
/// used exactly as given. Names may contain subdirectories (`out/contacts`)
/// but must stay below the sink directory.
#[derive(Debug, Clone)]
pub struct FileSink {
    directory: PathBuf,
    extension: String,
}

impl FileSink {
    /// Creates a sink writing `.vcf` files into `directory`.
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            extension: VCF_EXTENSION.to_string(),
        }
    }

    /// Overrides the file extension (without the dot).
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// ## Summary
    /// Returns the file path backing `destination`.
    ///
    /// ## Errors
    /// Returns [`SinkError::InvalidDestination`] for an empty name, an
    /// absolute path, or a name with `.` or `..` components.
    pub fn path_for(&self, destination: &str) -> SinkResult<PathBuf> {
        let relative = Path::new(destination);

        let stays_inside = !destination.is_empty()
            && !destination.ends_with(['/', '\\'])
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));

        if !stays_inside {
            return Err(SinkError::InvalidDestination(destination.to_string()));
        }

        Ok(self
            .directory
            .join(format!("{destination}.{}", self.extension)))
    }

    /// ## Summary
    /// Removes the file backing `destination` so the next append starts a
    /// fresh stream. Missing files are fine.
    ///
    /// ## Errors
    /// Returns [`SinkError::InvalidDestination`] for a rejected name and
    /// [`SinkError::Io`] if an existing file cannot be removed.
    #[tracing::instrument(skip(self))]
    pub fn reset(&self, destination: &str) -> SinkResult<()> {
        let path = self.path_for(destination)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "Removed existing destination");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(io_error(destination, source)),
        }
    }

    fn open_for_append(path: &Path) -> std::io::Result<fs::File> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        OpenOptions::new().create(true).append(true).open(path)
    }
}

impl Sink for FileSink {
    #[tracing::instrument(skip(self, lines), fields(lines = lines.len()))]
    fn append(&mut self, destination: &str, lines: &[String]) -> SinkResult<()> {
        let path = self.path_for(destination)?;

        let mut file = Self::open_for_append(&path).map_err(|e| io_error(destination, e))?;
        file.write_all(serialize(lines).as_bytes())
            .map_err(|e| io_error(destination, e))?;

        tracing::debug!(path = %path.display(), "Appended record");
        Ok(())
    }
}

fn io_error(destination: &str, source: std::io::Error) -> SinkError {
    SinkError::Io {
        destination: destination.to_string(),
        source,
    }
}
