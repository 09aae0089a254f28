//! Text form of a transition: `coordinate,red,green,blue` records, each
//! terminated by `;`, in ascending coordinate order.
use super::{ColorTransition, TransitionPoint};
use itertools::Itertools;
use log::*;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

impl fmt::Display for TransitionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.coordinate, self.red, self.green, self.blue)
    }
}

impl fmt::Display for ColorTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for point in &self.points {
            write!(f, "{};", point)?;
        }
        Ok(())
    }
}

impl ColorTransition {
    /// Serializes the transition so that the text plus a terminator fits in
    /// `max_length` bytes. Points that do not fit are left out whole, so the
    /// result always parses back to a prefix of the transition.
    pub fn to_string_bounded(&self, max_length: usize) -> String {
        let capacity = max_length.saturating_sub(1);
        let mut out = String::new();
        for (written, point) in self.points.iter().enumerate() {
            let record = format!("{};", point);
            if out.len() + record.len() > capacity {
                debug!(
                    "Transition text truncated to {} of {} points",
                    written,
                    self.points.len()
                );
                break;
            }
            out.push_str(&record);
        }
        out
    }

    /// Replaces all points with the ones read from `text`.
    ///
    /// Parsing is lenient: blank records are skipped and reading stops at the
    /// first malformed record, keeping everything before it. Records may come
    /// in any order; a repeated coordinate keeps the last color.
    pub fn replace_from_str(&mut self, text: &str) {
        self.clear();
        for record in text.split(';').map(str::trim).filter(|r| !r.is_empty()) {
            match parse_record(record) {
                Some(point) => self.add_point(point.coordinate, point.red, point.green, point.blue),
                None => {
                    warn!(
                        "Ignoring malformed transition data after {} points: '{}'",
                        self.points.len(),
                        record
                    );
                    break;
                }
            }
        }
    }
}

impl FromStr for ColorTransition {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut transition = ColorTransition::new();
        transition.replace_from_str(s);
        Ok(transition)
    }
}

fn parse_record(record: &str) -> Option<TransitionPoint> {
    let (coordinate, red, green, blue) = record.split(',').map(parse_channel).collect_tuple()?;
    Some(TransitionPoint::new(coordinate?, red?, green?, blue?))
}

/// Plain decimal digits only; `u8::from_str` would also take a leading `+`.
fn parse_channel(field: &str) -> Option<u8> {
    let field = field.trim();
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
