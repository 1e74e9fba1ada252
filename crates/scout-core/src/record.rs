//! Core record type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::design::DesignChoice;
use crate::scale::ScaleSpec;

/// A unique record identifier.
pub type RecordId = uuid::Uuid;

/// One scouting entry.
///
/// Field names on disk are camelCase and every field except the two
/// newer-schema options is required: an object missing any of them fails to
/// decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoutRecord {
    pub id: RecordId,
    /// Team number, kept as free text.
    pub name: String,
    pub selected_option: DesignChoice,
    pub scale: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_scale: Option<f64>,
    pub additional_info: String,
    pub yes_or_no: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_yes_or_no: Option<bool>,
    pub number_list: Vec<f64>,
}

impl ScoutRecord {
    /// Create a record for `name` with a fresh identifier and blank fields.
    pub fn new(name: &str) -> Self {
        Self::with_id(RecordId::new_v4(), name)
    }

    /// Create a record with a caller-supplied identifier.
    pub fn with_id(id: RecordId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            selected_option: DesignChoice::default(),
            scale: 0,
            second_scale: None,
            additional_info: String::new(),
            yes_or_no: false,
            second_yes_or_no: None,
            number_list: Vec::new(),
        }
    }

    /// Whether the record carries the newer-schema fields.
    pub fn has_extended_fields(&self) -> bool {
        self.second_scale.is_some() || self.second_yes_or_no.is_some()
    }

    /// Check both ratings against their scales.
    pub fn validate(&self) -> Result<(), RecordError> {
        if !ScaleSpec::PRIMARY.contains(f64::from(self.scale)) {
            return Err(RecordError::ScaleOutOfRange {
                id: self.id,
                value: self.scale,
            });
        }
        if let Some(value) = self.second_scale {
            if !ScaleSpec::SECONDARY.contains(value) {
                return Err(RecordError::SecondScaleOutOfRange { id: self.id, value });
            }
        }
        Ok(())
    }
}

/// A decoded record whose values break the schema's bounds.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("Record {id}: scale {value} is outside 0..=10")]
    ScaleOutOfRange { id: RecordId, value: u8 },

    #[error("Record {id}: secondScale {value} is not a quarter step in 0..=3")]
    SecondScaleOutOfRange { id: RecordId, value: f64 },
}
