//! scout-form: Conversion between scouting records and form field state.
//!
//! Opening the edit form *decomposes* a record into plain widget values:
//! strings, slider positions and toggles. Saving *composes* those values
//! back into a record. The number list is edited as comma-separated text.
//!
//! # Design picker
//!
//! The picker lists the known designs plus an `"Other"` entry. Picking
//! `"Other"` stores whatever is in the custom text box; the word `"Other"`
//! itself is only ever form state.

#[cfg(feature = "native")]
uniffi::setup_scaffolding!();

pub mod fields;
pub mod numbers;

pub use fields::*;
pub use numbers::*;
