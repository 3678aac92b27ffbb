use std::path::{Path, PathBuf};

use futures::TryStreamExt;

use crate::{error::ExportError, formatter::ExportFormat, utils};

/// Writes rendered playlists into an export directory without overwriting
/// earlier exports of the same playlist.
pub struct ExportManager {
    dir: PathBuf,
}

impl ExportManager {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Stores `contents` as `<playlist name>.<ext>`, or `<name>(n).<ext>` when
    /// earlier exports exist, and returns the written path.
    pub async fn persist(
        &self,
        playlist_name: &str,
        format: ExportFormat,
        contents: &[u8],
    ) -> Result<PathBuf, ExportError> {
        async_fs::create_dir_all(&self.dir).await?;

        let path = self.next_path(playlist_name, format).await?;
        async_fs::write(&path, contents).await?;
        Ok(path)
    }

    /// Path the next export of `playlist_name` would be written to.
    pub async fn next_path(
        &self,
        playlist_name: &str,
        format: ExportFormat,
    ) -> Result<PathBuf, ExportError> {
        let name = utils::sanitize_file_name(playlist_name);
        let existing = self.existing_files().await?;
        let file_name = utils::next_available_name(&existing, &name, format.extension());
        Ok(self.dir.join(file_name))
    }

    async fn existing_files(&self) -> Result<Vec<String>, ExportError> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let entries: Vec<async_fs::DirEntry> = async_fs::read_dir(&self.dir)
            .await?
            .try_collect()
            .await?;

        Ok(entries
            .iter()
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect())
    }
}
