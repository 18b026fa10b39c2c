//! I/O helpers for fetching and unpacking the Warodai source archive.
//!
//! # Examples
//!
//! ```
//! use warodai_edict::utils::io_utils::archive_file_name;
//!
//! # fn main() -> warodai_edict::Result<()> {
//! let name = archive_file_name("https://www.warodai.ru/download/warodai_txt.zip")?;
//! assert_eq!(name, "warodai_txt.zip");
//! # Ok(())
//! # }
//! ```

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use log::info;
use url::Url;

use crate::{ConvertError, Result};

/// Returns the last path segment of a URL.
pub fn archive_file_name(url: &str) -> Result<String> {
    let parsed_url = Url::parse(url)?;
    let path = parsed_url.path();
    let file_name = &path[path.rfind('/').map_or(0, |pos| pos + 1)..];
    if file_name.is_empty() {
        return Err(ConvertError::invalid_parameter(format!("No file name in url: {}", url)));
    }
    Ok(file_name.to_string())
}

/// Downloads `url` into `local_file` unless that file already exists.
#[cfg(feature = "download")]
pub fn download_file_if_not_exists<P: AsRef<Path>>(url: &str, local_file: P) -> Result<()> {
    let local_file = local_file.as_ref();
    if local_file.is_file() {
        info!("{} already exists.", local_file.display());
        return Ok(());
    }

    info!("Downloading {} ...", url);
    let response = reqwest::blocking::get(url)?;
    if !response.status().is_success() {
        return Err(ConvertError::download_failed(url, response.status().as_u16()));
    }
    let content = response.bytes()?;
    fs::write(local_file, &content)?;
    info!("Downloaded {} bytes to {}", content.len(), local_file.display());
    Ok(())
}

/// Extracts every entry of a zip archive into `target_dir`.
pub fn extract_archive<P: AsRef<Path>, Q: AsRef<Path>>(archive_file: P, target_dir: Q) -> Result<()> {
    info!("Extracting {} ...", archive_file.as_ref().display());
    let file = File::open(archive_file.as_ref())?;
    let mut archive = zip::ZipArchive::new(BufReader::new(file))?;
    fs::create_dir_all(target_dir.as_ref())?;
    archive.extract(target_dir.as_ref())?;
    info!("Extracted {} entries", archive.len());
    Ok(())
}
