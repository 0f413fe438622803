// Home dashboard model: streak counters, goals and achievements

/// Quit-journey counters shown on the home screen.
///
/// Nothing updates these yet; they stay at their initial values for the
/// lifetime of the screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HomeStats {
    pub days_sober: u32,
    pub money_saved: u32,
    pub cigarettes_avoided: u32,
}

/// A milestone unlocked once the streak reaches `days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub title: &'static str,
    pub days: u32,
}

pub const ACHIEVEMENTS: [Achievement; 3] = [
    Achievement {
        title: "24 Hours Smoke-Free",
        days: 1,
    },
    Achievement {
        title: "1 Week Milestone",
        days: 7,
    },
    Achievement {
        title: "1 Month Champion",
        days: 30,
    },
];

pub const DAILY_GOALS: [&str; 3] = [
    "Drink 8 glasses of water",
    "Take a 10-minute walk",
    "Log your cravings",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementStatus {
    pub title: &'static str,
    pub completed: bool,
}

impl Achievement {
    pub fn is_completed(&self, days_sober: u32) -> bool {
        days_sober >= self.days
    }
}

impl HomeStats {
    pub fn achievements(&self) -> Vec<AchievementStatus> {
        ACHIEVEMENTS
            .iter()
            .map(|a| AchievementStatus {
                title: a.title,
                completed: a.is_completed(self.days_sober),
            })
            .collect()
    }

    pub fn money_saved_display(&self) -> String {
        format!("${}", self.money_saved)
    }
}
