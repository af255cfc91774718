use lib::version::{write_version, VersionInfo, VERSION_FILE};
use std::io::{Error, ErrorKind};
use std::process::Command;
use std::str;

fn git(args: &[&str]) -> std::io::Result<String> {
    let out = Command::new("git").args(args).output()?;
    let text = str::from_utf8(&out.stdout).map_err(|e| Error::new(ErrorKind::InvalidData, e))?;
    Ok(text.trim().to_string())
}

fn write_version_file(handle: &str) -> std::io::Result<()> {
    let version_data = VersionInfo {
        source: env!("CARGO_PKG_NAME").to_string(),
        commit: git(&["rev-parse", "--short", "HEAD"])?,
        version: git(&["describe", "--tags"])?,
    };
    write_version(handle, &version_data).map_err(|e| Error::new(ErrorKind::Other, e))
}

fn main() -> std::io::Result<()> {
    write_version_file(VERSION_FILE)
}
