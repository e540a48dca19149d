use std::path::{Path, PathBuf};

use image::{ImageReader, RgbaImage};

use crate::error::FramecutError;
use crate::frame::FrameBox;

/// A decoded single-row sprite strip. Immutable source for cropping;
/// loaded once per input file and dropped once its frames are written.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    pub path: PathBuf,
    image: RgbaImage,
}

impl SpriteSheet {
    /// Decode a sheet from disk, converting to RGBA so every pixel carries
    /// an alpha channel (opaque where the source format had none).
    pub fn load(path: &Path) -> Result<Self, FramecutError> {
        let image = ImageReader::open(path)
            .map_err(|e| FramecutError::ImageLoad {
                path: path.to_path_buf(),
                source: e.into(),
            })?
            .decode()
            .map_err(|e| FramecutError::ImageLoad {
                path: path.to_path_buf(),
                source: e,
            })?
            .into_rgba8();

        Ok(Self::new(path.to_path_buf(), image))
    }

    pub fn new(path: PathBuf, image: RgbaImage) -> Self {
        Self { path, image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Copy the region under `frame_box` out into an independently owned image
    pub fn crop(&self, frame_box: FrameBox) -> RgbaImage {
        image::imageops::crop_imm(
            &self.image,
            frame_box.left,
            frame_box.top,
            frame_box.width(),
            frame_box.height(),
        )
        .to_image()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn striped_sheet(width: u32, height: u32) -> SpriteSheet {
        let mut img = RgbaImage::new(width, height);
        for (x, _, pixel) in img.enumerate_pixels_mut() {
            // encode the column in the red channel so crops are checkable
            *pixel = Rgba([(x % 256) as u8, 0, 0, 255]);
        }
        SpriteSheet::new(PathBuf::from("test.png"), img)
    }

    #[test]
    fn test_crop_dimensions() {
        let sheet = striped_sheet(252, 42);
        let frame = sheet.crop(FrameBox::new(84, 0, 126, 42));
        assert_eq!(frame.dimensions(), (42, 42));
    }

    #[test]
    fn test_crop_copies_the_right_columns() {
        let sheet = striped_sheet(252, 42);
        let frame = sheet.crop(FrameBox::new(84, 0, 126, 42));
        assert_eq!(frame.get_pixel(0, 0)[0], 84);
        assert_eq!(frame.get_pixel(41, 41)[0], 125);
    }

    #[test]
    fn test_crop_of_clamped_box_is_narrow() {
        let sheet = striped_sheet(100, 42);
        let frame = sheet.crop(FrameBox::new(84, 0, 100, 42));
        assert_eq!(frame.dimensions(), (16, 42));
    }
}
