//! Player sprite sheet.
//!
//! The sheet is a 3 x 4 grid of equally sized frames. Rows are facing
//! directions (west, north, east, south); columns are the stand, walk and
//! hack frames. Frames are scaled once at load time to the on-screen tile
//! size in half-block pixels.

use std::fmt;
use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::core::{Pose, PoseFrame};
use crate::fb::Rgb;
use crate::types::FacingDirection4;

pub const SHEET_COLUMNS: u32 = 3;
pub const SHEET_ROWS: u32 = 4;

/// Colour of the fallback disc
pub const PLACEHOLDER_COLOR: Rgb = Rgb::new(0, 128, 255);

#[derive(Debug)]
pub enum SpriteError {
    /// The file could not be read or decoded
    Image(image::ImageError),
    /// The sheet does not split into 3 x 4 non-empty frames
    BadDimensions { width: u32, height: u32 },
}

impl fmt::Display for SpriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpriteError::Image(err) => write!(f, "cannot load sprite sheet: {err}"),
            SpriteError::BadDimensions { width, height } => write!(
                f,
                "sprite sheet is {width}x{height}, expected a {SHEET_COLUMNS}x{SHEET_ROWS} grid of frames"
            ),
        }
    }
}

impl std::error::Error for SpriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SpriteError::Image(err) => Some(err),
            SpriteError::BadDimensions { .. } => None,
        }
    }
}

impl From<image::ImageError> for SpriteError {
    fn from(err: image::ImageError) -> Self {
        SpriteError::Image(err)
    }
}

/// One RGBA frame, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteFrame {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl SpriteFrame {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA at (x, y); fully transparent outside the frame
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        if x >= self.width || y >= self.height {
            return [0; 4];
        }
        self.pixels[(y * self.width + x) as usize]
    }

    fn from_image(img: &RgbaImage) -> Self {
        Self {
            width: img.width(),
            height: img.height(),
            pixels: img.pixels().map(|p| p.0).collect(),
        }
    }

    /// Filled disc used when no sprite sheet is available.
    pub fn placeholder(width: u32, height: u32) -> Self {
        let cx = width as f32 / 2.0;
        let cy = height as f32 / 2.0;
        let r = width.min(height) as f32 * 0.4;
        let Rgb { r: cr, g: cg, b: cb } = PLACEHOLDER_COLOR;

        let mut pixels = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                let alpha = if dx * dx + dy * dy <= r * r { 255 } else { 0 };
                pixels.push([cr, cg, cb, alpha]);
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteSheet {
    /// `SHEET_ROWS * SHEET_COLUMNS` frames, row-major
    frames: Vec<SpriteFrame>,
}

impl SpriteSheet {
    /// Load a sheet from disk and scale each frame to `tile_w x tile_h`.
    pub fn load(path: impl AsRef<Path>, tile_w: u32, tile_h: u32) -> Result<Self, SpriteError> {
        let sheet = image::open(path)?.to_rgba8();
        Self::from_image(&sheet, tile_w, tile_h)
    }

    pub fn from_image(sheet: &RgbaImage, tile_w: u32, tile_h: u32) -> Result<Self, SpriteError> {
        let (width, height) = sheet.dimensions();
        let frame_w = width / SHEET_COLUMNS;
        let frame_h = height / SHEET_ROWS;
        if frame_w == 0
            || frame_h == 0
            || width % SHEET_COLUMNS != 0
            || height % SHEET_ROWS != 0
            || tile_w == 0
            || tile_h == 0
        {
            return Err(SpriteError::BadDimensions { width, height });
        }

        let mut frames = Vec::with_capacity((SHEET_ROWS * SHEET_COLUMNS) as usize);
        for row in 0..SHEET_ROWS {
            for col in 0..SHEET_COLUMNS {
                let cropped =
                    imageops::crop_imm(sheet, col * frame_w, row * frame_h, frame_w, frame_h)
                        .to_image();
                let scaled = imageops::resize(&cropped, tile_w, tile_h, FilterType::Nearest);
                frames.push(SpriteFrame::from_image(&scaled));
            }
        }
        Ok(Self { frames })
    }

    pub fn frame(&self, pose: Pose) -> &SpriteFrame {
        let row = match pose.facing {
            FacingDirection4::West => 0,
            FacingDirection4::North => 1,
            FacingDirection4::East => 2,
            FacingDirection4::South => 3,
        };
        let col = match pose.frame {
            PoseFrame::Stand => 0,
            PoseFrame::Walk => 1,
            PoseFrame::Hack => 2,
        };
        &self.frames[row * SHEET_COLUMNS as usize + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// 3x4 sheet of 2x2 frames, each frame a solid colour encoding its
    /// (row, col).
    fn test_sheet() -> RgbaImage {
        RgbaImage::from_fn(6, 8, |x, y| {
            let col = (x / 2) as u8;
            let row = (y / 2) as u8;
            Rgba([row * 10, col * 10, 7, 255])
        })
    }

    #[test]
    fn frames_follow_row_and_column_order() {
        let sheet = SpriteSheet::from_image(&test_sheet(), 4, 4).unwrap();

        let east_hack = sheet.frame(Pose::new(FacingDirection4::East, PoseFrame::Hack));
        assert_eq!(east_hack.width(), 4);
        assert_eq!(east_hack.height(), 4);
        assert_eq!(east_hack.pixel(0, 0), [20, 20, 7, 255]);
        assert_eq!(east_hack.pixel(3, 3), [20, 20, 7, 255]);

        let west_stand = sheet.frame(Pose::new(FacingDirection4::West, PoseFrame::Stand));
        assert_eq!(west_stand.pixel(1, 1), [0, 0, 7, 255]);

        let south_walk = sheet.frame(Pose::new(FacingDirection4::South, PoseFrame::Walk));
        assert_eq!(south_walk.pixel(2, 0), [30, 10, 7, 255]);
    }

    #[test]
    fn uneven_sheet_is_rejected() {
        let img = RgbaImage::new(7, 8);
        let err = SpriteSheet::from_image(&img, 4, 4).unwrap_err();
        assert!(matches!(err, SpriteError::BadDimensions { width: 7, height: 8 }));
        assert!(err.to_string().contains("7x8"));
    }

    #[test]
    fn empty_frames_are_rejected() {
        let img = RgbaImage::new(2, 8);
        assert!(matches!(
            SpriteSheet::from_image(&img, 4, 4),
            Err(SpriteError::BadDimensions { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_image_error() {
        let err = SpriteSheet::load("/nonexistent/Miner.png", 4, 4).unwrap_err();
        assert!(matches!(err, SpriteError::Image(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn placeholder_is_an_opaque_disc() {
        let disc = SpriteFrame::placeholder(8, 8);
        assert_eq!(disc.pixel(4, 4)[3], 255);
        assert_eq!(disc.pixel(0, 0)[3], 0);
        assert_eq!(&disc.pixel(4, 4)[..3], &[0, 128, 255]);
        assert_eq!(disc.pixel(99, 0), [0; 4]);
    }
}
