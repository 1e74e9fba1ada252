//! Robot design choice: a fixed list of known designs plus free text.

use serde::{Deserialize, Serialize};

/// Known robot designs, in picker order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum RobotDesign {
    #[default]
    #[serde(rename = "Hero Bot")]
    HeroBot,
    #[serde(rename = "Improved Hero Bot")]
    ImprovedHeroBot,
    #[serde(rename = "Backroller w/ T Fling")]
    BackrollerTFling,
    #[serde(rename = "Backroller Bot")]
    BackrollerBot,
    #[serde(rename = "Dual Flywheel")]
    DualFlywheel,
    #[serde(rename = "Single Flywheel")]
    SingleFlywheel,
}

impl RobotDesign {
    /// All designs in picker order.
    pub const ALL: [RobotDesign; 6] = [
        Self::HeroBot,
        Self::ImprovedHeroBot,
        Self::BackrollerTFling,
        Self::BackrollerBot,
        Self::DualFlywheel,
        Self::SingleFlywheel,
    ];

    /// Display name, also the persisted value.
    pub fn label(&self) -> &'static str {
        match self {
            Self::HeroBot => "Hero Bot",
            Self::ImprovedHeroBot => "Improved Hero Bot",
            Self::BackrollerTFling => "Backroller w/ T Fling",
            Self::BackrollerBot => "Backroller Bot",
            Self::DualFlywheel => "Dual Flywheel",
            Self::SingleFlywheel => "Single Flywheel",
        }
    }

    /// Exact, case-sensitive match against the display names.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == label)
    }
}

/// The design recorded for a team.
///
/// Persisted as a bare string: a known design's label, or whatever the user
/// typed when none of the known designs fit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DesignChoice {
    Listed(RobotDesign),
    Custom(String),
}

impl DesignChoice {
    /// Classify a persisted or user-facing string.
    pub fn from_label(label: &str) -> Self {
        match RobotDesign::from_label(label) {
            Some(design) => Self::Listed(design),
            None => Self::Custom(label.to_string()),
        }
    }

    /// The string that gets persisted.
    pub fn label(&self) -> &str {
        match self {
            Self::Listed(design) => design.label(),
            Self::Custom(text) => text,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl Default for DesignChoice {
    fn default() -> Self {
        Self::Listed(RobotDesign::default())
    }
}

impl From<String> for DesignChoice {
    fn from(value: String) -> Self {
        match RobotDesign::from_label(&value) {
            Some(design) => Self::Listed(design),
            None => Self::Custom(value),
        }
    }
}

impl From<DesignChoice> for String {
    fn from(value: DesignChoice) -> Self {
        match value {
            DesignChoice::Listed(design) => design.label().to_string(),
            DesignChoice::Custom(text) => text,
        }
    }
}

impl From<RobotDesign> for DesignChoice {
    fn from(value: RobotDesign) -> Self {
        Self::Listed(value)
    }
}

impl std::fmt::Display for DesignChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
