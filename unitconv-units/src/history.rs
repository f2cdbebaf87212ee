//! Session history of successful conversions

use std::fmt;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use unitconv_core::Number;
use crate::UnitCode;

/// One successful conversion. Never mutated after it is recorded.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub input: Number,
    pub from: UnitCode,
    /// Already rounded to `places`
    pub output: Number,
    pub to: UnitCode,
    pub places: u32,
}

// Output is written with exactly `places` digits, matching the text history
impl Serialize for HistoryEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("HistoryEntry", 4)?;
        state.serialize_field("input", &self.input)?;
        state.serialize_field("from", &self.from)?;
        state.serialize_field("output", &self.output.to_fixed(self.places))?;
        state.serialize_field("to", &self.to)?;
        state.end()
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} > {} {}",
            self.input,
            self.from,
            self.output.to_fixed(self.places),
            self.to
        )
    }
}
