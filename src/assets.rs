use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};

use crate::error::{DeckError, Result};
use crate::slide::AssetRef;

/// Image bytes as read from disk, before any decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAsset {
    pub bytes: Vec<u8>,
    /// Lowercase, without the dot.
    pub extension: String,
    /// EXIF orientation tag, 1 when absent.
    pub orientation: u16,
}

pub trait AssetLoader {
    fn load(&mut self, asset: &AssetRef) -> Result<ResolvedAsset>;
}

/// Resolves assets relative to a directory.
pub struct FsAssetLoader {
    root: PathBuf,
}

impl FsAssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetLoader for FsAssetLoader {
    fn load(&mut self, asset: &AssetRef) -> Result<ResolvedAsset> {
        let path = self.root.join(asset.name());
        tracing::debug!("Loading asset {:?}", path);

        let bytes = fs::read(&path).map_err(|source| DeckError::AssetResolution {
            asset: asset.name().to_string(),
            source,
        })?;

        let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
        let orientation = if extension == "jpg" || extension == "jpeg" {
            read_orientation(&path, &bytes)
        } else {
            1
        };

        Ok(ResolvedAsset { bytes, extension, orientation })
    }
}

// EXIF is only reliable for JPEG; anything unreadable falls back to "no rotation".
fn read_orientation(path: &Path, bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            tracing::warn!("Could not read EXIF data for {:?}: {}", path.file_name().unwrap_or(path.as_os_str()), e);
            1
        }
    }
}
