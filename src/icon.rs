use image::{ImageFormat, Rgb, RgbImage};
use std::path::Path;

use crate::config::{BACKGROUND, FOREGROUND};
use crate::error::IconError;
use crate::raster::stroke;

/// Checkmark vertices and stroke width, scaled to the icon size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckmarkGeometry {
    pub margin: u32,
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
    pub x3: u32,
    pub y3: u32,
    pub thickness: u32,
}

impl CheckmarkGeometry {
    pub fn for_size(size: u32) -> Self {
        let margin = size / 8;
        Self {
            margin,
            x1: margin + size / 5,
            y1: size / 2,
            x2: size / 2,
            y2: size.saturating_sub(margin),
            x3: size.saturating_sub(margin),
            y3: margin,
            thickness: (size / 16).max(1),
        }
    }

    pub fn left(&self) -> (i32, i32) { (self.x1 as i32, self.y1 as i32) }
    pub fn bottom(&self) -> (i32, i32) { (self.x2 as i32, self.y2 as i32) }
    pub fn top_right(&self) -> (i32, i32) { (self.x3 as i32, self.y3 as i32) }
}

/// A rendered square icon.
#[derive(Debug, Clone)]
pub struct Icon {
    pub size: u32,
    pub image: RgbImage,
}

impl Icon {
    /// Encode as PNG. The file is closed before this returns, on success or error.
    pub fn save(&self, path: &Path) -> Result<(), IconError> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

pub fn create_icon(size: u32) -> Icon {
    create_icon_with_colors(size, BACKGROUND, FOREGROUND)
}

pub fn create_icon_with_colors(size: u32, background: [u8; 3], foreground: [u8; 3]) -> Icon {
    let mut image = RgbImage::from_pixel(size, size, Rgb(background));
    let g = CheckmarkGeometry::for_size(size);
    let fg = Rgb(foreground);

    stroke(&mut image, g.left(), g.bottom(), g.thickness, fg);
    stroke(&mut image, g.bottom(), g.top_right(), g.thickness, fg);

    Icon { size, image }
}
