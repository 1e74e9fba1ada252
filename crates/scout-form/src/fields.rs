//! Editable form state and the two conversions.

use scout_core::{DesignChoice, RecordId, RobotDesign, ScaleSpec, ScoutRecord};

use crate::numbers::{format_number_list, parse_number_list};

/// Picker entry that switches the design over to the custom text box.
pub const OTHER_OPTION: &str = "Other";

/// Widget values backing the record form.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct FormFields {
    pub name: String,
    /// A design label or [`OTHER_OPTION`].
    pub option: String,
    /// Custom design text, read only when `option` is [`OTHER_OPTION`].
    pub custom_option: String,
    pub scale: f64,
    pub second_scale: f64,
    pub additional_info: String,
    pub yes_or_no: bool,
    pub second_yes_or_no: bool,
    /// Comma-separated numbers as typed.
    pub number_list: String,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            option: RobotDesign::default().label().to_string(),
            custom_option: String::new(),
            scale: ScaleSpec::PRIMARY.min,
            second_scale: ScaleSpec::SECONDARY.min,
            additional_info: String::new(),
            yes_or_no: false,
            second_yes_or_no: false,
            number_list: String::new(),
        }
    }
}

impl FormFields {
    /// Picker entries: every design label, then [`OTHER_OPTION`].
    pub fn option_choices() -> Vec<&'static str> {
        RobotDesign::ALL
            .iter()
            .map(|d| d.label())
            .chain(std::iter::once(OTHER_OPTION))
            .collect()
    }

    pub fn is_other(&self) -> bool {
        self.option == OTHER_OPTION
    }

    /// Resolve the picker and custom text into the value that gets stored.
    ///
    /// Custom text that is just the picker word "Other" stores as empty, so
    /// the sentinel never reaches disk.
    pub fn design_choice(&self) -> DesignChoice {
        if self.is_other() {
            if self.custom_option.trim() == OTHER_OPTION {
                return DesignChoice::Custom(String::new());
            }
            DesignChoice::from_label(&self.custom_option)
        } else {
            DesignChoice::from_label(&self.option)
        }
    }

    pub fn scale_label(&self) -> String {
        ScaleSpec::PRIMARY.label(self.scale)
    }

    pub fn second_scale_label(&self) -> String {
        ScaleSpec::SECONDARY.label(self.second_scale)
    }
}

/// Fill the form from an existing record.
///
/// Records written before the second scale and toggle existed open with
/// those widgets at their defaults.
pub fn decompose(record: &ScoutRecord) -> FormFields {
    let (option, custom_option) = match &record.selected_option {
        DesignChoice::Listed(design) => (design.label().to_string(), String::new()),
        DesignChoice::Custom(text) => (OTHER_OPTION.to_string(), text.clone()),
    };

    FormFields {
        name: record.name.clone(),
        option,
        custom_option,
        scale: f64::from(record.scale),
        second_scale: record.second_scale.unwrap_or(ScaleSpec::SECONDARY.min),
        additional_info: record.additional_info.clone(),
        yes_or_no: record.yes_or_no,
        second_yes_or_no: record.second_yes_or_no.unwrap_or(false),
        number_list: format_number_list(&record.number_list),
    }
}

/// Build a record from the form.
///
/// `id` is the record being edited; `None` means a new record and gets a
/// fresh identifier. Slider values are snapped to their scale and malformed
/// numbers in the list are dropped.
pub fn compose(fields: &FormFields, id: Option<RecordId>) -> ScoutRecord {
    ScoutRecord {
        id: id.unwrap_or_else(RecordId::new_v4),
        name: fields.name.clone(),
        selected_option: fields.design_choice(),
        scale: ScaleSpec::PRIMARY.quantize(fields.scale) as u8,
        second_scale: Some(ScaleSpec::SECONDARY.quantize(fields.second_scale)),
        additional_info: fields.additional_info.clone(),
        yes_or_no: fields.yes_or_no,
        second_yes_or_no: Some(fields.second_yes_or_no),
        number_list: parse_number_list(&fields.number_list),
    }
}
