use std::fs;
use std::path::{Path, PathBuf};

use crate::buffer::ImageData;
use crate::error::{Error, Result};

/// Extensions offered by the open dialog. Decoding itself accepts anything
/// the image crate recognizes.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "bmp", "jpg", "jpeg"];

/// A decoded image together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub image: ImageData,
    pub path: PathBuf,
    pub file_size: u64,
}

pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let decoded = image::open(path).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let file_size = fs::metadata(path)?.len();
    Ok(LoadedImage {
        image: ImageData::from_dynamic(&decoded),
        path: path.to_path_buf(),
        file_size,
    })
}
