use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

pub const VERSION_FILE: &str = "version.yaml";

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct VersionInfo {
    pub commit: String,
    pub source: String,
    pub version: String,
}

#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Couldn't read version file. {0}")]
    Read(#[from] std::io::Error),

    #[error("Couldn't parse YAML from version file. {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub fn read_version(handle: &str) -> Result<VersionInfo, VersionError> {
    let f = fs::File::open(handle)?;
    Ok(serde_yaml::from_reader(f)?)
}

pub fn write_version(handle: &str, data: &VersionInfo) -> Result<(), VersionError> {
    let f = fs::File::create(handle)?;
    serde_yaml::to_writer(f, data)?;
    Ok(())
}
