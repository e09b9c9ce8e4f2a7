//! Sprite-sheet slicing and the frame catalog.
//!
//! A sprite sheet is a single horizontal strip of equally sized frames. The
//! functions here cut a strip into frames, scale each frame up for display,
//! and optionally mirror the whole set so that one piece of art serves both
//! facing directions.
//!
//! The [`SheetCatalog`] is built once during startup (see
//! [`SheetCatalog::load_sprite_sheets`]), inserted into the world as a
//! read-only resource and never modified afterwards. All decoding happens
//! here so the main loop never touches the filesystem.
//!
//! # Layout on disk
//!
//! ```text
//! assets/
//!   MainCharacters/
//!     NinjaFrog/
//!       idle.png   (11 frames of 32x32 -> 352x32)
//!       run.png    (12 frames of 32x32 -> 384x32)
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use bevy_ecs::prelude::Resource;
use image::imageops::{self, FilterType};
use image::RgbaImage;
use log::{info, warn};
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::components::animation::{Action, AnimationKey, Facing};
use crate::error::AssetError;

/// Integer upscale applied to every frame before display.
pub const SCALE_FACTOR: u32 = 2;

/// A single decoded frame.
pub type Frame = RgbaImage;

/// Ordered, non-empty run of equally sized frames.
#[derive(Debug, Clone)]
pub struct FrameSet {
    frames: Vec<Frame>,
}

impl FrameSet {
    fn new(frames: Vec<Frame>) -> Self {
        debug_assert!(!frames.is_empty());
        Self { frames }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Size of each frame after scaling.
    pub fn frame_size(&self) -> (u32, u32) {
        self.frames[0].dimensions()
    }
}

/// One line of the catalog summary printed by `--list-sheets`.
#[derive(Debug, Clone, Serialize)]
pub struct SheetSummary {
    pub key: String,
    pub action: Action,
    pub facing: Option<Facing>,
    pub frame_count: usize,
    pub frame_width: u32,
    pub frame_height: u32,
}

/// All frame sets known to the game, keyed by action and facing.
#[derive(Resource, Debug, Default)]
pub struct SheetCatalog {
    sets: FxHashMap<AnimationKey, FrameSet>,
}

impl SheetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from one `<category>/<subcategory>` directory.
    pub fn from_dir(
        assets_root: &Path,
        category: &str,
        subcategory: &str,
        frame_width: u32,
        frame_height: u32,
        directional: bool,
    ) -> Result<Self, AssetError> {
        let mut catalog = Self::new();
        catalog.load_sprite_sheets(
            assets_root,
            category,
            subcategory,
            frame_width,
            frame_height,
            directional,
        )?;
        Ok(catalog)
    }

    /// Decode and register every `*.png` sheet in
    /// `<assets_root>/<category>/<subcategory>/`.
    ///
    /// Files are processed in name order. Sheets whose file stem is not a
    /// known [`Action`] are skipped. Returns the number of frame sets added.
    pub fn load_sprite_sheets(
        &mut self,
        assets_root: &Path,
        category: &str,
        subcategory: &str,
        frame_width: u32,
        frame_height: u32,
        directional: bool,
    ) -> Result<usize, AssetError> {
        let dir = assets_root.join(category).join(subcategory);
        let entries = std::fs::read_dir(&dir).map_err(|source| match source.kind() {
            ErrorKind::NotFound => AssetError::MissingAsset { path: dir.clone() },
            _ => AssetError::ReadFailure {
                path: dir.clone(),
                source,
            },
        })?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && is_png(path))
            .collect();
        paths.sort();

        let mut added = 0;
        for path in paths {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default();
            let Some(action) = Action::from_sheet_name(stem) else {
                warn!("Skipping sheet {}: '{}' is not a known action", path.display(), stem);
                continue;
            };

            let sheet = load_image(&path)?;
            let keys = self
                .insert_sheet(action, &sheet, frame_width, frame_height, directional)
                .inspect_err(|e| {
                    if let AssetError::DuplicateSheet(_) = e {
                        warn!("{} repeats an action loaded earlier", path.display());
                    }
                })?;
            info!(
                "Loaded sheet {} -> {} ({} frames)",
                path.display(),
                keys.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
                sheet.width() / frame_width
            );
            added += keys.len();
        }
        Ok(added)
    }

    /// Slice an in-memory sheet and register the resulting frame set(s).
    ///
    /// Directional sheets are registered as `<action>_right` (as drawn) and
    /// `<action>_left` (mirrored). Returns the keys that were written.
    ///
    /// A key that is already registered is never replaced:
    /// [`AssetError::DuplicateSheet`] is returned and the catalog is left
    /// unchanged.
    pub fn insert_sheet(
        &mut self,
        action: Action,
        sheet: &RgbaImage,
        frame_width: u32,
        frame_height: u32,
        directional: bool,
    ) -> Result<Vec<AnimationKey>, AssetError> {
        let taken = if directional {
            [Facing::Right, Facing::Left]
                .into_iter()
                .map(|facing| AnimationKey::directed(action, facing))
                .find(|key| self.contains(*key))
        } else {
            Some(AnimationKey::undirected(action)).filter(|key| self.contains(*key))
        };
        if let Some(key) = taken {
            return Err(AssetError::DuplicateSheet(key));
        }

        let frames = slice_sheet(action.as_str(), sheet, frame_width, frame_height, SCALE_FACTOR)?;

        if directional {
            let left = mirror_frames(&frames);
            let right_key = AnimationKey::directed(action, Facing::Right);
            let left_key = AnimationKey::directed(action, Facing::Left);
            self.sets.insert(right_key, FrameSet::new(frames));
            self.sets.insert(left_key, FrameSet::new(left));
            Ok(vec![right_key, left_key])
        } else {
            let key = AnimationKey::undirected(action);
            self.sets.insert(key, FrameSet::new(frames));
            Ok(vec![key])
        }
    }

    pub fn get(&self, key: AnimationKey) -> Result<&FrameSet, AssetError> {
        self.sets
            .get(&key)
            .ok_or(AssetError::UnknownAnimationKey(key))
    }

    pub fn frame_count(&self, key: AnimationKey) -> Result<usize, AssetError> {
        self.get(key).map(FrameSet::len)
    }

    pub fn contains(&self, key: AnimationKey) -> bool {
        self.sets.contains_key(&key)
    }

    /// Registered keys in a stable order.
    pub fn keys(&self) -> Vec<AnimationKey> {
        let mut keys: Vec<AnimationKey> = self.sets.keys().copied().collect();
        keys.sort();
        keys
    }

    /// Fail with [`AssetError::UnknownAnimationKey`] on the first key in
    /// `keys` that has no frame set.
    pub fn require(&self, keys: &[AnimationKey]) -> Result<(), AssetError> {
        match keys.iter().find(|key| !self.contains(**key)) {
            Some(key) => Err(AssetError::UnknownAnimationKey(*key)),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn summary(&self) -> Vec<SheetSummary> {
        self.keys()
            .into_iter()
            .map(|key| {
                let set = &self.sets[&key];
                let (frame_width, frame_height) = set.frame_size();
                SheetSummary {
                    key: key.to_string(),
                    action: key.action,
                    facing: key.facing,
                    frame_count: set.len(),
                    frame_width,
                    frame_height,
                }
            })
            .collect()
    }
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

/// Decode an image file into RGBA8.
pub fn load_image(path: &Path) -> Result<RgbaImage, AssetError> {
    if !path.exists() {
        return Err(AssetError::MissingAsset {
            path: path.to_path_buf(),
        });
    }
    let image = image::open(path).map_err(|source| AssetError::DecodeFailure {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(image.to_rgba8())
}

/// Copy the `w`x`h` region at `(x, y)` and scale it by `scale`.
pub fn extract_region(
    image: &RgbaImage,
    x: u32,
    y: u32,
    w: u32,
    h: u32,
    scale: u32,
) -> Result<Frame, AssetError> {
    let (image_w, image_h) = image.dimensions();
    let fits_x = x.checked_add(w).is_some_and(|right| right <= image_w);
    let fits_y = y.checked_add(h).is_some_and(|bottom| bottom <= image_h);
    if !fits_x || !fits_y {
        return Err(AssetError::RegionOutOfBounds {
            x,
            y,
            w,
            h,
            image_w,
            image_h,
        });
    }

    let region = imageops::crop_imm(image, x, y, w, h).to_image();
    if scale <= 1 {
        return Ok(region);
    }
    Ok(imageops::resize(
        &region,
        w * scale,
        h * scale,
        FilterType::Nearest,
    ))
}

/// Cut a horizontal strip into `sheet.width() / frame_width` frames, left
/// to right. Trailing columns that do not fill a whole frame are dropped.
pub fn slice_sheet(
    name: &str,
    sheet: &RgbaImage,
    frame_width: u32,
    frame_height: u32,
    scale: u32,
) -> Result<Vec<Frame>, AssetError> {
    if frame_width == 0 || frame_height == 0 {
        return Err(AssetError::InvalidFrameSize {
            width: frame_width,
            height: frame_height,
        });
    }
    if sheet.height() != frame_height {
        return Err(AssetError::FrameHeightMismatch {
            name: name.to_string(),
            declared: frame_height,
            actual: sheet.height(),
        });
    }

    let count = sheet.width() / frame_width;
    if count == 0 {
        return Err(AssetError::EmptySheet {
            name: name.to_string(),
            width: sheet.width(),
            frame_width,
        });
    }

    (0..count)
        .map(|i| extract_region(sheet, i * frame_width, 0, frame_width, frame_height, scale))
        .collect()
}

/// Horizontally mirror every frame.
pub fn mirror_frames(frames: &[Frame]) -> Vec<Frame> {
    frames.iter().map(imageops::flip_horizontal).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// Strip of `count` frames, frame `i` filled with a solid shade of `i`.
    fn striped_sheet(count: u32, frame_w: u32, frame_h: u32, extra_cols: u32) -> RgbaImage {
        RgbaImage::from_fn(count * frame_w + extra_cols, frame_h, |x, _| {
            let i = (x / frame_w) as u8;
            Rgba([i * 20, 255 - i * 20, i, 255])
        })
    }

    /// Asymmetric pattern so mirroring is observable.
    fn gradient_sheet(count: u32, frame_w: u32, frame_h: u32) -> RgbaImage {
        RgbaImage::from_fn(count * frame_w, frame_h, |x, y| {
            Rgba([(x % frame_w) as u8 * 7, y as u8 * 3, (x / frame_w) as u8, 255])
        })
    }

    #[test]
    fn slicing_yields_width_over_frame_width_frames() {
        let sheet = striped_sheet(5, 32, 32, 0);
        let frames = slice_sheet("run", &sheet, 32, 32, 1).unwrap();
        assert_eq!(frames.len(), 5);
        for frame in &frames {
            assert_eq!(frame.dimensions(), (32, 32));
        }
    }

    #[test]
    fn slicing_keeps_left_to_right_order() {
        let sheet = striped_sheet(4, 8, 8, 0);
        let frames = slice_sheet("run", &sheet, 8, 8, SCALE_FACTOR).unwrap();
        for (i, frame) in frames.iter().enumerate() {
            let expected = Rgba([i as u8 * 20, 255 - i as u8 * 20, i as u8, 255]);
            assert!(frame.pixels().all(|p| *p == expected), "frame {i}");
        }
    }

    #[test]
    fn slicing_scales_each_frame() {
        let sheet = striped_sheet(3, 32, 32, 0);
        let frames = slice_sheet("idle", &sheet, 32, 32, SCALE_FACTOR).unwrap();
        assert_eq!(frames.len(), 3);
        assert!(frames.iter().all(|f| f.dimensions() == (64, 64)));
    }

    #[test]
    fn remainder_columns_are_dropped() {
        let sheet = striped_sheet(3, 16, 16, 10);
        let frames = slice_sheet("run", &sheet, 16, 16, 1).unwrap();
        assert_eq!(frames.len(), 3);
    }

    #[test]
    fn height_mismatch_is_rejected() {
        let sheet = striped_sheet(3, 32, 24, 0);
        let err = slice_sheet("run", &sheet, 32, 32, 1).unwrap_err();
        assert!(matches!(
            err,
            AssetError::FrameHeightMismatch {
                declared: 32,
                actual: 24,
                ..
            }
        ));
    }

    #[test]
    fn narrow_sheet_is_rejected() {
        let sheet = striped_sheet(0, 32, 32, 20);
        let err = slice_sheet("hit", &sheet, 32, 32, 1).unwrap_err();
        assert!(matches!(err, AssetError::EmptySheet { width: 20, .. }));
    }

    #[test]
    fn zero_frame_width_is_rejected() {
        let sheet = striped_sheet(2, 8, 8, 0);
        let err = slice_sheet("run", &sheet, 0, 8, 1).unwrap_err();
        assert!(matches!(err, AssetError::InvalidFrameSize { .. }));
    }

    #[test]
    fn region_out_of_bounds_is_rejected() {
        let image = striped_sheet(2, 8, 8, 0);
        let err = extract_region(&image, 10, 0, 8, 8, 1).unwrap_err();
        assert!(matches!(err, AssetError::RegionOutOfBounds { .. }));
        assert!(extract_region(&image, 8, 0, 8, 8, 2).is_ok());
    }

    #[test]
    fn directional_sheet_registers_mirrored_pair() {
        let sheet = gradient_sheet(6, 16, 16);
        let mut catalog = SheetCatalog::new();
        let keys = catalog
            .insert_sheet(Action::Run, &sheet, 16, 16, true)
            .unwrap();
        assert_eq!(keys.len(), 2);

        let right = catalog
            .get(AnimationKey::directed(Action::Run, Facing::Right))
            .unwrap();
        let left = catalog
            .get(AnimationKey::directed(Action::Run, Facing::Left))
            .unwrap();
        assert_eq!(right.len(), 6);
        assert_eq!(left.len(), right.len());

        for i in 0..right.len() {
            let r = right.get(i).unwrap();
            let l = left.get(i).unwrap();
            let (w, h) = r.dimensions();
            assert_eq!(l.dimensions(), (w, h));
            for y in 0..h {
                for x in 0..w {
                    assert_eq!(l.get_pixel(x, y), r.get_pixel(w - 1 - x, y));
                }
            }
        }
    }

    #[test]
    fn undirected_sheet_registers_single_key() {
        let sheet = striped_sheet(2, 16, 16, 0);
        let mut catalog = SheetCatalog::new();
        let keys = catalog
            .insert_sheet(Action::Hit, &sheet, 16, 16, false)
            .unwrap();
        assert_eq!(keys, vec![AnimationKey::undirected(Action::Hit)]);
        assert!(!catalog.contains(AnimationKey::directed(Action::Hit, Facing::Right)));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn unknown_key_lookup_fails() {
        let catalog = SheetCatalog::new();
        let key = AnimationKey::directed(Action::Fall, Facing::Left);
        assert!(matches!(
            catalog.frame_count(key),
            Err(AssetError::UnknownAnimationKey(k)) if k == key
        ));
    }

    #[test]
    fn second_sheet_for_same_action_is_rejected() {
        let mut catalog = SheetCatalog::new();
        catalog
            .insert_sheet(Action::Run, &striped_sheet(12, 16, 16, 0), 16, 16, true)
            .unwrap();
        let err = catalog
            .insert_sheet(Action::Run, &striped_sheet(3, 16, 16, 0), 16, 16, true)
            .unwrap_err();
        assert!(matches!(
            err,
            AssetError::DuplicateSheet(key) if key == AnimationKey::directed(Action::Run, Facing::Right)
        ));
        assert_eq!(
            catalog
                .frame_count(AnimationKey::directed(Action::Run, Facing::Left))
                .unwrap(),
            12
        );
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn require_reports_first_missing_key() {
        let mut catalog = SheetCatalog::new();
        catalog
            .insert_sheet(Action::Idle, &striped_sheet(2, 16, 16, 0), 16, 16, true)
            .unwrap();
        let idle_left = AnimationKey::directed(Action::Idle, Facing::Left);
        let run_left = AnimationKey::directed(Action::Run, Facing::Left);
        assert!(catalog.require(&[idle_left]).is_ok());
        assert!(matches!(
            catalog.require(&[idle_left, run_left]),
            Err(AssetError::UnknownAnimationKey(k)) if k == run_left
        ));
    }

    #[test]
    fn summary_is_sorted_and_reports_scaled_size() {
        let mut catalog = SheetCatalog::new();
        catalog
            .insert_sheet(Action::Run, &striped_sheet(12, 32, 32, 0), 32, 32, true)
            .unwrap();
        catalog
            .insert_sheet(Action::Idle, &striped_sheet(11, 32, 32, 0), 32, 32, true)
            .unwrap();

        let summary = catalog.summary();
        let keys: Vec<&str> = summary.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["idle_left", "idle_right", "run_left", "run_right"]);
        assert_eq!(summary[0].frame_count, 11);
        assert_eq!(summary[3].frame_count, 12);
        assert_eq!((summary[0].frame_width, summary[0].frame_height), (64, 64));
    }
}
