//! Container writer.

use flate2::write::GzEncoder;
use flate2::Compression;
use prost::Message;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::format::GeoSiteList;
use crate::container::Container;
use crate::Result;

/// Serializes a [`Container`] into the GeoSite wire format.
pub struct ContainerWriter {
    buffer: Vec<u8>,
}

impl ContainerWriter {
    /// Create a new writer.
    pub fn new() -> Self {
        Self {
            buffer: Vec::with_capacity(1024 * 1024), // 1MB initial
        }
    }

    /// Encode the whole container. Output depends only on the container.
    pub fn write(&mut self, container: &Container) -> Result<Vec<u8>> {
        self.buffer.clear();

        let message = GeoSiteList::from(container);
        self.buffer.reserve(message.encoded_len());
        message.encode(&mut self.buffer)?;

        log::debug!(
            "Encoded {} groups into {} bytes",
            message.entry.len(),
            self.buffer.len()
        );

        Ok(std::mem::take(&mut self.buffer))
    }

    /// Encode the container and gzip the result.
    pub fn write_gzip(&mut self, container: &Container) -> Result<Vec<u8>> {
        let data = self.write(container)?;
        let mut encoder = GzEncoder::new(Vec::with_capacity(data.len() / 2), Compression::best());
        encoder.write_all(&data)?;
        Ok(encoder.finish()?)
    }
}

impl Default for ContainerWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase hex SHA-256 of `data`.
pub fn checksum(data: &[u8]) -> String {
    Sha256::digest(data)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Path of the checksum sidecar for `path`.
pub fn checksum_path(path: &Path) -> PathBuf {
    append_extension(path, ".sha256sum")
}

/// Write `data` to `path` through a temporary file and an atomic rename.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let temp_path = append_extension(path, ".tmp");
    fs::write(&temp_path, data)?;
    fs::rename(&temp_path, path)?;
    log::info!("Wrote {:?} ({} bytes)", path, data.len());
    Ok(())
}

fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut s = path.as_os_str().to_owned();
    s.push(ext);
    PathBuf::from(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::SiteGroup;
    use crate::matcher::Matcher;

    #[test]
    fn test_write_empty_container() {
        let mut writer = ContainerWriter::new();
        let data = writer.write(&Container::default()).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn test_writer_is_reusable() {
        let container = Container::new(vec![SiteGroup::new(
            "A",
            vec![Matcher::Plain("a.com".into())],
        )]);
        let mut writer = ContainerWriter::new();

        let first = writer.write(&container).unwrap();
        let second = writer.write(&container).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_checksum_known_value() {
        assert_eq!(
            checksum(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sidecar_paths() {
        assert_eq!(
            checksum_path(Path::new("/out/dlc.dat")),
            PathBuf::from("/out/dlc.dat.sha256sum")
        );
    }

    #[test]
    fn test_write_atomic_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dlc.dat");
        fs::write(&path, b"old").unwrap();

        write_atomic(&path, b"new").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"new");
        assert!(!dir.path().join("dlc.dat.tmp").exists());
    }
}
