// Smoking habit profile and the trigger catalog

use serde::{Deserialize, Serialize};
use std::fmt;

/// A situational cause of craving, picked from a fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigger {
    #[serde(rename = "Stress")]
    Stress,
    #[serde(rename = "After Meals")]
    AfterMeals,
    #[serde(rename = "Social Settings")]
    SocialSettings,
    #[serde(rename = "Morning Routine")]
    MorningRoutine,
    #[serde(rename = "Work Breaks")]
    WorkBreaks,
    #[serde(rename = "Alcohol")]
    Alcohol,
    #[serde(rename = "Coffee")]
    Coffee,
    #[serde(rename = "Boredom")]
    Boredom,
}

/// Catalog in display order. The quiz grid and the `1`-`8` hotkeys index into this.
pub const TRIGGERS: [Trigger; 8] = [
    Trigger::Stress,
    Trigger::AfterMeals,
    Trigger::SocialSettings,
    Trigger::MorningRoutine,
    Trigger::WorkBreaks,
    Trigger::Alcohol,
    Trigger::Coffee,
    Trigger::Boredom,
];

impl Trigger {
    pub fn label(self) -> &'static str {
        match self {
            Self::Stress => "Stress",
            Self::AfterMeals => "After Meals",
            Self::SocialSettings => "Social Settings",
            Self::MorningRoutine => "Morning Routine",
            Self::WorkBreaks => "Work Breaks",
            Self::Alcohol => "Alcohol",
            Self::Coffee => "Coffee",
            Self::Boredom => "Boredom",
        }
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        TRIGGERS.get(idx).copied()
    }

    pub fn to_index(self) -> usize {
        match self {
            Self::Stress => 0,
            Self::AfterMeals => 1,
            Self::SocialSettings => 2,
            Self::MorningRoutine => 3,
            Self::WorkBreaks => 4,
            Self::Alcohol => 5,
            Self::Coffee => 6,
            Self::Boredom => 7,
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Self-reported smoking profile, built once when the quiz completes.
///
/// Serialises with the camelCase field names the results screen expects
/// (`cigarettesPerDay`, `yearsSmoked`, `costPerPack`, `mainTriggers`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmokingHabits {
    cigarettes_per_day: u32,
    years_smoked: u32,
    cost_per_pack: f64,
    main_triggers: Vec<Trigger>,
}

impl SmokingHabits {
    pub(crate) fn new(
        cigarettes_per_day: u32,
        years_smoked: u32,
        cost_per_pack: f64,
        main_triggers: Vec<Trigger>,
    ) -> Self {
        Self {
            cigarettes_per_day,
            years_smoked,
            cost_per_pack,
            main_triggers,
        }
    }

    pub fn cigarettes_per_day(&self) -> u32 {
        self.cigarettes_per_day
    }

    pub fn years_smoked(&self) -> u32 {
        self.years_smoked
    }

    pub fn cost_per_pack(&self) -> f64 {
        self.cost_per_pack
    }

    /// Triggers in the order they were selected.
    pub fn main_triggers(&self) -> &[Trigger] {
        &self.main_triggers
    }
}
