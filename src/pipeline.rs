//! End-to-end build: data directory in, container file out.

use std::path::PathBuf;

use crate::binary::{checksum, checksum_path, write_atomic, ContainerWriter};
use crate::config::BuildConfig;
use crate::container::Container;
use crate::registry::Registry;
use crate::Result;

/// Outcome of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub output: PathBuf,
    pub group_count: usize,
    pub matcher_count: usize,
    pub bytes_written: usize,
    /// SHA-256 of the written file, when a sidecar was requested
    pub checksum: Option<String>,
}

/// Load, resolve, classify and write in one go.
///
/// Nothing is written unless every list resolves and classifies.
pub fn run(config: &BuildConfig) -> Result<BuildSummary> {
    let data_dir = config.resolve_data_dir()?;
    let registry = Registry::load_dir(&data_dir)?;
    let container = Container::build(&registry)?;

    let mut writer = ContainerWriter::new();
    let data = if config.gzip {
        writer.write_gzip(&container)?
    } else {
        writer.write(&container)?
    };

    write_atomic(&config.output, &data)?;

    let digest = if config.checksum {
        let digest = checksum(&data);
        let sidecar = checksum_path(&config.output);
        let file_name = config
            .output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        write_atomic(&sidecar, format!("{}  {}\n", digest, file_name).as_bytes())?;
        Some(digest)
    } else {
        None
    };

    Ok(BuildSummary {
        output: config.output.clone(),
        group_count: container.len(),
        matcher_count: container.matcher_count(),
        bytes_written: data.len(),
        checksum: digest,
    })
}
