//! Asset error types.
//!
//! Every failure that can happen while building the sheet catalog, uploading
//! textures, or selecting an animation frame is reported as an [`AssetError`]
//! and handed back to the caller.

use std::path::PathBuf;

use thiserror::Error;

use crate::components::animation::AnimationKey;

/// Errors produced by asset loading and animation lookups.
#[derive(Debug, Error)]
pub enum AssetError {
    /// A required file or directory does not exist.
    #[error("missing asset: {}", .path.display())]
    MissingAsset { path: PathBuf },

    /// A path exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file exists but could not be read or decoded as an image.
    #[error("failed to decode {}: {source}", .path.display())]
    DecodeFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// No frame set is registered for the requested key.
    #[error("unknown animation key: {0}")]
    UnknownAnimationKey(AnimationKey),

    /// Two sheets in one directory map to the same key.
    #[error("animation key {0} is provided by more than one sheet")]
    DuplicateSheet(AnimationKey),

    /// The sheet is not exactly one frame tall.
    #[error("sheet '{name}' is {actual}px tall but frames are declared {declared}px")]
    FrameHeightMismatch {
        name: String,
        declared: u32,
        actual: u32,
    },

    /// Frame width or height is zero.
    #[error("invalid frame size {width}x{height}")]
    InvalidFrameSize { width: u32, height: u32 },

    /// The sheet is narrower than a single frame.
    #[error("sheet '{name}' ({width}px wide) holds no {frame_width}px frame")]
    EmptySheet {
        name: String,
        width: u32,
        frame_width: u32,
    },

    /// A region extends past the edges of its source image.
    #[error("region {w}x{h} at ({x}, {y}) exceeds image bounds {image_w}x{image_h}")]
    RegionOutOfBounds {
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        image_w: u32,
        image_h: u32,
    },

    /// The GPU refused a texture.
    #[error("failed to upload texture '{key}': {reason}")]
    TextureUpload { key: String, reason: String },
}
