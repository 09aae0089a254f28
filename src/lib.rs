use anyhow::{Context, Result};
use image::{GrayImage, ImageBuffer, Luma, RgbImage};
use crate::palettes::scale_tocolor;
use log::*;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
pub mod error;
pub mod palettes;
pub mod transition;
pub use error::TransitionError;
pub use transition::{ColorTransition, TransitionPoint, EMPTY_COLOR};

/// Suffix appended to the stem of every recolored image.
pub const OUTPUT_SUFFIX: &str = "rgb.png";

/// Maps every pixel of a grayscale image through the transition.
pub fn recolor(gray: &GrayImage, transition: &ColorTransition) -> RgbImage {
    let table = transition.lookup_table();
    let mut rgb = RgbImage::new(gray.width(), gray.height());
    rgb.par_chunks_mut(3)
        .zip(gray.as_raw().par_iter())
        .for_each(|(pixel, &value)| pixel.copy_from_slice(&table[value as usize]));
    rgb
}

/// Maps a 16-bit grayscale image through the transition after stretching its
/// darkest pixel to coordinate 0 and its brightest to 255.
pub fn recolor_stretched(
    gray: &ImageBuffer<Luma<u16>, Vec<u16>>,
    transition: &ColorTransition,
) -> RgbImage {
    let (min, max) = gray
        .as_raw()
        .iter()
        .fold((u16::MAX, u16::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    info!("Stretching values {} to {}", min, max);
    let min = f32::from(min);
    // a flat image takes the bottom color
    let max = if f32::from(max) > min { f32::from(max) } else { min + 1.0 };
    let mut rgb = RgbImage::new(gray.width(), gray.height());
    rgb.par_chunks_mut(3)
        .zip(gray.as_raw().par_iter())
        .for_each(|(pixel, &value)| {
            pixel.copy_from_slice(&scale_tocolor(transition, f32::from(value), min, max))
        });
    rgb
}

pub fn output_path<P: AsRef<Path>>(path: P) -> PathBuf {
    path.as_ref().with_extension(OUTPUT_SUFFIX)
}

pub fn is_output_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .to_str()
        .map_or(false, |name| name.ends_with(&format!(".{}", OUTPUT_SUFFIX)))
}

/// Recolors an image file, writing `<stem>.rgb.png` next to it. With `stretch`
/// the image is read at 16 bits and its value range is stretched first.
pub fn recolor_file<P: AsRef<Path>>(
    path: P,
    transition: &ColorTransition,
    stretch: bool,
) -> Result<PathBuf> {
    let path = path.as_ref();
    info!("Loading: {}", path.display());
    let img = image::open(path)
        .with_context(|| format!("Could not open image {}", path.display()))?;
    let rgb = if stretch {
        recolor_stretched(&img.into_luma16(), transition)
    } else {
        recolor(&img.into_luma8(), transition)
    };
    info!("Recolored {}x{}", rgb.width(), rgb.height());
    let dest = output_path(path);
    info!("Saving {}", dest.display());
    rgb.save(&dest)
        .with_context(|| format!("Could not save image {}", dest.display()))?;
    Ok(dest)
}
