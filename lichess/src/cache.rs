use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::debug;
use serde_json::Value;

use crate::PageKey;

/// Key addressed store of raw API pages.
pub trait PageCache {
    /// Returns the stored page, or `None` when it is absent or unreadable.
    fn load(&self, key: &PageKey) -> Option<Value>;

    fn store(&self, key: &PageKey, page: &Value) -> Result<()>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CacheMode {
    /// Serve pages from the cache and store every fetched page.
    #[default]
    ReadWrite,
    /// Always fetch, then overwrite the stored pages.
    Refresh,
    /// Neither read from nor write to the cache.
    Disabled,
}

impl CacheMode {
    pub fn reads(self) -> bool {
        matches!(self, CacheMode::ReadWrite)
    }

    pub fn writes(self) -> bool {
        matches!(self, CacheMode::ReadWrite | CacheMode::Refresh)
    }
}

/// A cache that never holds anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCache;

impl PageCache for NoCache {
    fn load(&self, _key: &PageKey) -> Option<Value> {
        None
    }

    fn store(&self, _key: &PageKey, _page: &Value) -> Result<()> {
        Ok(())
    }
}

/// Stores each page as gzipped JSON in a directory.
pub struct DirCache {
    dir: PathBuf,
}

impl DirCache {
    pub fn new(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create cache directory {:?}", dir))?;

        Ok(Self { dir })
    }

    pub fn file_path(&self, key: &PageKey) -> PathBuf {
        self.dir.join(format!("{}.json.gz", key.file_stem()))
    }

    fn read(path: &Path) -> Result<Value> {
        let file = File::open(path)?;
        let content = GzDecoder::new(BufReader::new(file));
        let page = serde_json::from_reader(content)?;
        Ok(page)
    }
}

impl PageCache for DirCache {
    fn load(&self, key: &PageKey) -> Option<Value> {
        let path = self.file_path(key);
        match Self::read(&path) {
            Ok(page) => {
                debug!("Cache hit {:?}", path);
                Some(page)
            }
            Err(err) => {
                debug!("Cache miss {:?}: {}", path, err);
                None
            }
        }
    }

    fn store(&self, key: &PageKey, page: &Value) -> Result<()> {
        let path = self.file_path(key);
        debug!("Writing cache file {:?}", path);

        let file = File::create(&path)
            .with_context(|| format!("Failed to create cache file {:?}", path))?;
        let mut compressor = GzEncoder::new(BufWriter::new(file), Compression::default());
        serde_json::to_writer(&mut compressor, page)?;
        compressor.finish()?.flush()?;

        Ok(())
    }
}
