use crate::error::{Result, TransitionError};
use log::*;
use std::fs;
use std::path::Path;

mod format;

/// Color returned when a transition has no points to interpolate between.
pub const EMPTY_COLOR: [u8; 3] = [0, 0, 0];

/// One user defined anchor, mapping a grayscale value to an RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionPoint {
    pub coordinate: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl TransitionPoint {
    pub fn new(coordinate: u8, red: u8, green: u8, blue: u8) -> Self {
        Self {
            coordinate,
            red,
            green,
            blue,
        }
    }

    pub fn color(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

/// Piecewise-linear mapping from grayscale values (0-255) to RGB colors.
///
/// Points are kept sorted by coordinate with at most one point per coordinate,
/// so lookups can bisect them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorTransition {
    points: Vec<TransitionPoint>,
}

impl ColorTransition {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Creates an empty transition with room for `capacity` points, reporting
    /// allocation failure instead of aborting.
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        let mut points = Vec::new();
        points.try_reserve(capacity)?;
        Ok(Self { points })
    }

    /// Reads a transition file. Serves as both constructor and loader.
    ///
    /// # Errors
    /// Returns [`TransitionError::Io`] when the file cannot be read. Malformed
    /// content is never an error, see [`ColorTransition::replace_from_str`].
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading transition: {}", path.display());
        let bytes = fs::read(path).map_err(|e| TransitionError::io(path, e))?;
        let mut transition = Self::new();
        transition.replace_from_str(&String::from_utf8_lossy(&bytes));
        debug!("Loaded {} points", transition.len());
        Ok(transition)
    }

    /// Writes the complete text form of the transition, never truncated.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        info!("Saving transition with {} points: {}", self.len(), path.display());
        fs::write(path, format!("{}\n", self)).map_err(|e| TransitionError::io(path, e))
    }

    pub fn points(&self) -> &[TransitionPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get_point(&self, coordinate: u8) -> Option<&TransitionPoint> {
        self.position(coordinate).ok().map(|i| &self.points[i])
    }

    fn position(&self, coordinate: u8) -> std::result::Result<usize, usize> {
        self.points.binary_search_by_key(&coordinate, |p| p.coordinate)
    }

    /// Adds a point, or recolors the existing point at `coordinate`.
    pub fn add_point(&mut self, coordinate: u8, red: u8, green: u8, blue: u8) {
        let point = TransitionPoint::new(coordinate, red, green, blue);
        match self.position(coordinate) {
            Ok(i) => self.points[i] = point,
            Err(i) => self.points.insert(i, point),
        }
    }

    /// Like [`ColorTransition::add_point`], but reports a failed grow instead
    /// of aborting. Stored points are untouched when this fails.
    pub fn try_add_point(&mut self, coordinate: u8, red: u8, green: u8, blue: u8) -> Result<()> {
        let point = TransitionPoint::new(coordinate, red, green, blue);
        match self.position(coordinate) {
            Ok(i) => self.points[i] = point,
            Err(i) => {
                self.points.try_reserve(1)?;
                self.points.insert(i, point);
            }
        }
        Ok(())
    }

    /// Removes the point at exactly `coordinate`, if there is one.
    pub fn remove_point(&mut self, coordinate: u8) -> Option<TransitionPoint> {
        self.position(coordinate)
            .ok()
            .map(|i| self.points.remove(i))
    }

    /// Drops every point and releases the backing storage.
    pub fn clear(&mut self) {
        if !self.points.is_empty() {
            debug!("Releasing {} transition points", self.points.len());
        }
        self.points = Vec::new();
    }

    /// Maps a grayscale value to a color, interpolating linearly between the
    /// two points that bracket it. Values outside the points' range take the
    /// nearest boundary color; an empty transition gives [`EMPTY_COLOR`].
    pub fn get_color(&self, coordinate: u8) -> [u8; 3] {
        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return EMPTY_COLOR,
        };
        if coordinate <= first.coordinate {
            return first.color();
        }
        if coordinate >= last.coordinate {
            return last.color();
        }

        // first < coordinate < last, so 1 <= upper < len
        let upper = self.points.partition_point(|p| p.coordinate < coordinate);
        let (p0, p1) = (&self.points[upper - 1], &self.points[upper]);
        let offset = coordinate - p0.coordinate;
        let width = p1.coordinate - p0.coordinate;
        [
            interpolate(p0.red, p1.red, offset, width),
            interpolate(p0.green, p1.green, offset, width),
            interpolate(p0.blue, p1.blue, offset, width),
        ]
    }

    /// Evaluates the transition at every grayscale value.
    pub fn lookup_table(&self) -> [[u8; 3]; 256] {
        let mut table = [EMPTY_COLOR; 256];
        for (coordinate, color) in (0..=u8::MAX).zip(table.iter_mut()) {
            *color = self.get_color(coordinate);
        }
        table
    }
}

/// Linear blend of one channel, rounded half away from zero.
fn interpolate(from: u8, to: u8, offset: u8, width: u8) -> u8 {
    if width == 0 {
        return from;
    }
    let delta = (i32::from(to) - i32::from(from)) * i32::from(offset);
    let width = i32::from(width);
    let step = if delta >= 0 {
        (2 * delta + width) / (2 * width)
    } else {
        (2 * delta - width) / (2 * width)
    };
    (i32::from(from) + step).clamp(0, 255) as u8
}
