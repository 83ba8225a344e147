//! File-backed hazard feeds.

use std::path::{Path, PathBuf};

use serde_json::Value;

use hz_store::{BoundarySource, FeedName, HazardFeed, StoreError, StoreResult};

/// Serves `sachet.json` and `landslide.json` from a directory, re-reading
/// them on every fetch so edits show up on the next refresh.
pub struct FileFeed {
    dir: PathBuf,
}

impl FileFeed {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    async fn read(&self, feed: FeedName, file: &str) -> StoreResult<Vec<Value>> {
        let text = tokio::fs::read_to_string(self.dir.join(file))
            .await
            .map_err(|e| StoreError::fetch(feed, format!("{file}: {e}")))?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl HazardFeed for FileFeed {
    async fn fetch_disasters(&self) -> StoreResult<Vec<Value>> {
        self.read(FeedName::Disasters, "sachet.json").await
    }

    async fn fetch_landslides(&self) -> StoreResult<Vec<Value>> {
        self.read(FeedName::Landslides, "landslide.json").await
    }
}

pub struct FileBoundaries {
    path: PathBuf,
}

impl FileBoundaries {
    pub fn new(path: &Path) -> Self {
        Self { path: path.to_path_buf() }
    }
}

impl BoundarySource for FileBoundaries {
    async fn fetch_boundaries(&self) -> StoreResult<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| StoreError::fetch(FeedName::Boundaries, format!("{}: {e}", self.path.display())))
    }
}
