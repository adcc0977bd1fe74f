//! Room condition models
//!
//! The "Not Important" options of the room form are modeled as `None`
//! rather than extra enum variants, so downstream code cannot mistake a
//! no-preference answer for a real category.

use serde::{Deserialize, Serialize};

/// Sunlight available in the room
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SunlightLevel {
    Low,
    BrightIndirect,
    Direct,
}

impl std::fmt::Display for SunlightLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SunlightLevel::Low => write!(f, "Low light"),
            SunlightLevel::BrightIndirect => write!(f, "Bright indirect light"),
            SunlightLevel::Direct => write!(f, "Direct sunlight"),
        }
    }
}

/// Soil the user has on hand
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SoilType {
    WellDrained,
    Sandy,
    Moist,
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoilType::WellDrained => write!(f, "Well-drained"),
            SoilType::Sandy => write!(f, "Sandy"),
            SoilType::Moist => write!(f, "Moist"),
        }
    }
}

/// A single priority requirement the user can tag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpecialRequirement {
    LowWater,
    ToleratesLowLight,
    AirPurifier,
    HumidEnvironment,
    HangingBaskets,
}

impl std::fmt::Display for SpecialRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecialRequirement::LowWater => write!(f, "Low water needs"),
            SpecialRequirement::ToleratesLowLight => write!(f, "Tolerates low light"),
            SpecialRequirement::AirPurifier => write!(f, "Is a good air purifier"),
            SpecialRequirement::HumidEnvironment => write!(f, "Likes a humid environment"),
            SpecialRequirement::HangingBaskets => write!(f, "Good for hanging baskets"),
        }
    }
}

/// Space the plant will live in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpaceSize {
    Small,
    Medium,
    Large,
}

impl std::fmt::Display for SpaceSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpaceSize::Small => write!(f, "Small (desk or shelf)"),
            SpaceSize::Medium => write!(f, "Medium (windowsill or table)"),
            SpaceSize::Large => write!(f, "Large (floor space)"),
        }
    }
}

/// Room conditions submitted by the user
///
/// Immutable once submitted; passed by value into the suggestion request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomConditions {
    pub sunlight: SunlightLevel,
    /// `None` means the user has no soil preference
    pub soil: Option<SoilType>,
    /// `None` means fertilizer availability does not matter to the user
    pub fertilizer_available: Option<bool>,
    /// `None` means no priority requirement was tagged
    pub special_requirement: Option<SpecialRequirement>,
    /// Maximum days the user can leave between waterings
    pub max_watering_interval_days: u32,
    pub space: SpaceSize,
}
