//! GPU texture store.
//!
//! Holds every texture the renderer draws: one texture per animation frame
//! (uploaded from the [`SheetCatalog`]) plus named standalone textures such
//! as the background tile and the terrain block.
//!
//! This is a NonSend resource because textures live in the GL context of
//! the main thread.

use image::RgbaImage;
use log::info;
use raylib::ffi;
use raylib::prelude::*;
use rustc_hash::FxHashMap;

use crate::components::animation::AnimationKey;
use crate::error::AssetError;
use crate::resources::sheetcatalog::SheetCatalog;

#[derive(Default)]
pub struct TextureStore {
    frames: FxHashMap<AnimationKey, Vec<Texture2D>>,
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upload every frame of every set in `catalog`. Returns the number of
    /// textures created.
    pub fn upload_catalog(
        &mut self,
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        catalog: &SheetCatalog,
    ) -> Result<usize, AssetError> {
        let mut uploaded = 0;
        for key in catalog.keys() {
            let set = catalog.get(key)?;
            let mut textures = Vec::with_capacity(set.len());
            for (i, frame) in set.frames().iter().enumerate() {
                let label = format!("{key}#{i}");
                textures.push(texture_from_rgba(rl, th, &label, frame)?);
            }
            uploaded += textures.len();
            self.frames.insert(key, textures);
        }
        info!("Uploaded {} frame textures for {} sets", uploaded, catalog.len());
        Ok(uploaded)
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }

    pub fn frame(&self, key: AnimationKey, index: usize) -> Option<&Texture2D> {
        self.frames.get(&key).and_then(|set| set.get(index))
    }
}

/// Byte length of a tightly packed RGBA8 buffer, checked against the
/// image dimensions and the `u32` size raylib allocates with.
pub fn rgba_byte_len(label: &str, pixels: &RgbaImage) -> Result<u32, AssetError> {
    let (w, h) = pixels.dimensions();
    let raw = pixels.as_raw();
    let expected = (w as usize)
        .checked_mul(h as usize)
        .and_then(|n| n.checked_mul(4));
    if expected != Some(raw.len()) || raw.is_empty() || i32::try_from(w.max(h)).is_err() {
        return Err(AssetError::TextureUpload {
            key: label.to_string(),
            reason: format!("bad RGBA buffer for {w}x{h}: {} bytes", raw.len()),
        });
    }
    u32::try_from(raw.len()).map_err(|_| AssetError::TextureUpload {
        key: label.to_string(),
        reason: format!("{w}x{h} image is too large"),
    })
}

/// Copy an RGBA8 buffer into a raylib image and upload it to the GPU.
pub fn texture_from_rgba(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    label: &str,
    pixels: &RgbaImage,
) -> Result<Texture2D, AssetError> {
    let len = rgba_byte_len(label, pixels)?;
    let (w, h) = pixels.dimensions();
    let image = unsafe {
        let data = ffi::MemAlloc(len) as *mut u8;
        if data.is_null() {
            return Err(AssetError::TextureUpload {
                key: label.to_string(),
                reason: "out of memory".to_string(),
            });
        }
        std::ptr::copy_nonoverlapping(pixels.as_raw().as_ptr(), data, len as usize);
        Image::from_raw(ffi::Image {
            data: data as *mut std::ffi::c_void,
            width: w as i32,
            height: h as i32,
            mipmaps: 1,
            format: ffi::PixelFormat::PIXELFORMAT_UNCOMPRESSED_R8G8B8A8 as i32,
        })
    };
    rl.load_texture_from_image(th, &image)
        .map_err(|e| AssetError::TextureUpload {
            key: label.to_string(),
            reason: e.to_string(),
        })
}
