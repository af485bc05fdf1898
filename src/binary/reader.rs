//! Container reader with memory-mapping support.

use flate2::read::GzDecoder;
use memmap2::Mmap;
use prost::Message;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::format::{is_gzip, GeoSiteList};
use crate::container::Container;
use crate::Result;

/// Decodes GeoSite containers, plain or gzip compressed.
pub struct ContainerReader {
    container: Container,
    /// Size of the encoded (uncompressed) container
    encoded_len: usize,
}

impl ContainerReader {
    /// Open a container file.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        if file.metadata()?.len() == 0 {
            return Self::from_bytes(&[]);
        }

        let mmap = unsafe { Mmap::map(&file)? };
        let reader = Self::from_bytes(&mmap)?;
        log::debug!("Opened {:?}: {} groups", path, reader.container.len());
        Ok(reader)
    }

    /// Decode a container from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if is_gzip(data) {
            let mut decoder = GzDecoder::new(data);
            let mut decompressed = Vec::new();
            decoder.read_to_end(&mut decompressed)?;
            log::debug!(
                "Decompressed {} bytes -> {} bytes",
                data.len(),
                decompressed.len()
            );
            return Self::decode(&decompressed);
        }

        Self::decode(data)
    }

    fn decode(data: &[u8]) -> Result<Self> {
        let list = GeoSiteList::decode(data)?;
        Ok(Self {
            container: Container::try_from(list)?,
            encoded_len: data.len(),
        })
    }

    /// Get the decoded container.
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Take the decoded container.
    pub fn into_container(self) -> Container {
        self.container
    }

    /// Size of the encoded container in bytes.
    pub fn encoded_len(&self) -> usize {
        self.encoded_len
    }
}

/// Decode a container from bytes.
pub fn decode(data: &[u8]) -> Result<Container> {
    ContainerReader::from_bytes(data).map(ContainerReader::into_container)
}
