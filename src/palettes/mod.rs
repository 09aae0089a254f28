use crate::transition::ColorTransition;
use log::*;
pub mod default;
pub mod extended;

pub trait PaletteColorize {
    fn get_color(&self, value: u8) -> [u8; 3];
    fn get_color_under_range(&self) -> [u8; 3];
    fn get_color_over_range(&self) -> [u8; 3];
}

impl PaletteColorize for ColorTransition {
    fn get_color(&self, value: u8) -> [u8; 3] {
        ColorTransition::get_color(self, value)
    }
    fn get_color_under_range(&self) -> [u8; 3] {
        ColorTransition::get_color(self, u8::MIN)
    }
    fn get_color_over_range(&self) -> [u8; 3] {
        ColorTransition::get_color(self, u8::MAX)
    }
}

/// Names accepted by [`by_name`].
pub const PRESETS: [&str; 2] = ["grayscale", "terrain"];

/// Looks up a built-in transition.
pub fn by_name(name: &str) -> Option<ColorTransition> {
    match name {
        "grayscale" => Some(default::grayscale()),
        "terrain" => Some(extended::terrain()),
        _ => None,
    }
}

/// Scale a value from between min and max to between 0 and 1
fn rescale_value_from(value: f32, min: f32, max: f32) -> f32 {
    let old_range = max - min;
    (value - min) / old_range
}

/// Scale a value from between 0 and 1 to between min and max
fn rescale_value_to(value: f32, min: f32, max: f32) -> f32 {
    value.mul_add(max - min, min)
}

/// Places value on a scale from min to max, and transforms it to a grayscale coordinate from 0 to 255. Returns a color using the specified palette.
pub fn scale_tocolor(palette: &dyn PaletteColorize, value: f32, min: f32, max: f32) -> [u8; 3] {
    let scaled = rescale_value_from(value, min, max);
    if scaled < 0.0 || scaled.is_nan() {
        warn!("Value out of range! Value range: {} to {}, Value: {}, Scaled: {}", min, max, value, scaled);
        palette.get_color_under_range()
    } else if scaled > 1.0 {
        warn!("Value out of range! Value range: {} to {}, Value: {}, Scaled: {}", min, max, value, scaled);
        palette.get_color_over_range()
    } else {
        palette.get_color(rescale_value_to(scaled, 0.0, 255.0).round() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn normalize_goes_up() {
        let palette = default::grayscale();
        assert_eq!(
            (0..=255)
                .map(|v| v as f32)
                .map(|v| scale_tocolor(&palette, v, 0.0, 255.0)
                    .first()
                    .cloned()
                    .unwrap())
                .collect::<Vec<_>>(),
            (0..=255).map(|v| v as u8).collect::<Vec<_>>()
        );
    }

    #[test]
    fn scale_top_of_range() {
        assert_eq!(
            scale_tocolor(&default::grayscale(), 23.02, -29.4, 23.02),
            [255, 255, 255]
        );
    }

    #[test]
    fn scale_over_under() {
        let palette = extended::terrain();
        assert_eq!(
            scale_tocolor(&palette, f32::INFINITY, 0.0, 1.0),
            palette.get_color(255)
        );
        assert_eq!(
            scale_tocolor(&palette, f32::NEG_INFINITY, 0.0, 1.0),
            palette.get_color(0)
        );
        assert_eq!(
            scale_tocolor(&default::grayscale(), 2.0, 0.0, 1.0),
            [255, 255, 255]
        );
        assert_eq!(
            scale_tocolor(&default::grayscale(), -1.0, 0.0, 1.0),
            [0, 0, 0]
        );
    }

    #[test]
    fn presets_by_name() {
        for name in PRESETS.iter() {
            assert!(!by_name(name).unwrap().is_empty(), "{}", name);
        }
        assert_eq!(by_name("viridis"), None);
    }

    proptest! {
        #[test]
        fn scale_tocolor_within_bounds(
            a in proptest::num::f32::ANY,
            b in proptest::num::f32::ANY,
            c in proptest::num::f32::ANY)
          {
            let min = a.min(b).min(c);
            let mid = a.min(b).max( a.max(b).min(c));
            let max = a.max(b).max(c);
            scale_tocolor(&default::grayscale(),mid,min,max);
            scale_tocolor(&extended::terrain(),mid,min,max);
        }
    }
}
