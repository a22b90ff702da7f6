use std::collections::HashMap;

use anyhow::{Result, anyhow};
use raylib::prelude::*;

use crate::assets::ResolvedAsset;
use crate::deck::Deck;
use crate::slide::AssetRef;

// --- Decode Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture(rl: &mut RaylibHandle, thread: &RaylibThread, asset: &ResolvedAsset) -> Result<Texture2D> {
    // Extension hint for loading from memory
    let mut image = Image::load_image_from_mem(&format!(".{}", asset.extension), &asset.bytes)
        .map_err(|e| anyhow!("Failed to decode image data: {}", e))?;

    // 1 = Normal, 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
    // Flipped orientations are ignored.
    match asset.orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("Failed to create texture: {}", e))?;

    // Texture is on the GPU now, CPU copy can go
    drop(image);

    Ok(texture)
}

/// One texture per deck asset.
pub fn load_deck_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    deck: &Deck,
) -> Result<HashMap<AssetRef, Texture2D>> {
    let mut textures = HashMap::new();
    for (asset, resolved) in deck.assets() {
        let texture = load_texture(rl, thread, resolved).map_err(|e| anyhow!("{}: {}", asset.name(), e))?;
        if resolved.orientation != 1 {
            tracing::debug!("Applied EXIF orientation {} to {}", resolved.orientation, asset.name());
        }
        textures.insert(asset.clone(), texture);
    }
    Ok(textures)
}
