use crate::error::PublishError;
use crate::site::Site;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishOptions {
    /// Create the output directory (and its parents) when missing
    pub create_dir: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishResult {
    /// Written files, in page order
    pub files: Vec<PathBuf>,
}

/// Write every page of `site` into `dir`.
///
/// Stops at the first failure; pages already written are left in place.
pub fn publish(
    site: &Site,
    dir: impl AsRef<Path>,
    options: &PublishOptions,
) -> Result<PublishResult, PublishError> {
    let dir = dir.as_ref();
    prepare_dir(dir, options)?;

    let mut files = Vec::with_capacity(site.pages.len());
    for page in &site.pages {
        let path = dir.join(&page.file_name);
        write_to_path(&path, page.contents.as_bytes())?;
        debug!(path = %path.display(), "wrote page");
        files.push(path);
    }

    info!(dir = %dir.display(), files = files.len(), "site published");
    Ok(PublishResult { files })
}

fn prepare_dir(dir: &Path, options: &PublishOptions) -> Result<(), PublishError> {
    if dir.is_dir() {
        return Ok(());
    }
    if dir.exists() {
        return Err(PublishError::NotADirectory(dir.to_path_buf()));
    }
    if !options.create_dir {
        return Err(PublishError::MissingDirectory(dir.to_path_buf()));
    }
    fs::create_dir_all(dir).map_err(|source| PublishError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

fn write_to_path(path: &Path, bytes: &[u8]) -> Result<(), PublishError> {
    fs::write(path, bytes).map_err(|source| PublishError::Io {
        path: path.to_path_buf(),
        source,
    })
}
