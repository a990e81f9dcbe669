//! Writes rendered pages to the output directory.

use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::render::RenderedPage;

/// Errors that can occur while publishing pages.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The destination could not be written (missing directory, permissions, disk full).
    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Writes both pages into `out_dir` under their locale filenames.
///
/// Existing files are replaced unconditionally. The two writes are
/// independent: if the second fails, the first stays published.
///
/// # Returns
///
/// The paths of the default and alternate pages, in that order.
///
/// # Errors
///
/// Returns [`PublishError::Write`] for the first page that could not be written.
/// The output directory is not created.
pub fn publish(
    default_page: &RenderedPage,
    alternate_page: &RenderedPage,
    out_dir: &Path,
) -> Result<(PathBuf, PathBuf), PublishError> {
    let default_path = write_page(default_page, out_dir)?;
    let alternate_path = write_page(alternate_page, out_dir)?;
    Ok((default_path, alternate_path))
}

fn write_page(page: &RenderedPage, out_dir: &Path) -> Result<PathBuf, PublishError> {
    let path = out_dir.join(page.filename());
    atomic_write(&path, page.html().as_bytes()).map_err(|source| PublishError::Write {
        path: path.clone(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        locale = page.locale().code(),
        bytes = page.html().len(),
        "Published page"
    );
    Ok(path)
}

/// Writes `contents` to `dst` using the write-to-temp-then-rename pattern,
/// so readers never see a half-written page.
fn atomic_write(dst: &Path, contents: &[u8]) -> std::io::Result<()> {
    let temp_path = dst.with_extension(format!("tmp.{}", std::process::id()));

    let result = (|| {
        let mut temp_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;
        temp_file.write_all(contents)?;
        temp_file.sync_all()?;
        drop(temp_file);

        // On Windows, rename fails if destination exists, so remove it first
        #[cfg(windows)]
        if dst.exists() {
            std::fs::remove_file(dst)?;
        }

        std::fs::rename(&temp_path, dst)
    })();

    if result.is_err() {
        let _ = std::fs::remove_file(&temp_path);
    }
    result
}
