use crate::adif::EncodedLine;
use crate::errors::AppError;
use log::warn;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::{AsyncWrite, AsyncWriteExt};

pub const HEADER: [&str; 3] = ["N1MM2ADIF export", "<ADIF_VER:5>3.1.5", "<EOH>"];

/// Append-only ADIF files, one per station callsign, under `dir`.
#[derive(Clone, Debug)]
pub struct AdifLog {
    dir: PathBuf,
}

impl AdifLog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, station_callsign: &str) -> PathBuf {
        self.dir.join(format!("{}_adif_export.adi", station_callsign))
    }

    /// Writes the header if this call creates the file. An existing file is left alone.
    async fn ensure_header(path: &Path) -> Result<(), AppError> {
        match OpenOptions::new().write(true).create_new(true).open(path).await {
            Ok(file) => Self::fill_header(path, file).await,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(AppError::IO(format!("create '{}': {}", path.display(), e))),
        }
    }

    /// A file left with a partial header is removed, so the next append starts over.
    async fn fill_header<W: AsyncWrite + Unpin>(path: &Path, mut out: W) -> Result<(), AppError> {
        let header: String = HEADER.iter().map(|l| format!("{}\n", l)).collect();
        let mut written = out.write_all(header.as_bytes()).await;
        if written.is_ok() {
            written = out.flush().await;
        }
        drop(out);

        if let Err(e) = written {
            if let Err(rm) = fs::remove_file(path).await {
                warn!("could not remove partial '{}': {}", path.display(), rm);
            }
            return Err(AppError::IO(format!("write header '{}': {}", path.display(), e)));
        }
        Ok(())
    }

    pub async fn append(&self, station_callsign: &str, line: &EncodedLine) -> Result<PathBuf, AppError> {
        let path = self.path_for(station_callsign);
        Self::ensure_header(&path).await?;

        let mut file = OpenOptions::new()
            .append(true)
            .open(&path)
            .await
            .map_err(|e| AppError::IO(format!("open '{}': {}", path.display(), e)))?;
        file.write_all(format!("{}\n", line).as_bytes())
            .await
            .map_err(|e| AppError::IO(format!("append '{}': {}", path.display(), e)))?;
        file.flush()
            .await
            .map_err(|e| AppError::IO(format!("flush '{}': {}", path.display(), e)))?;
        Ok(path)
    }
}
