//! quitpath: a terminal smoking-cessation tracker.
//!
//! The onboarding [`quiz`] collects a [`habits::SmokingHabits`] profile and
//! hands it to the results screen through the typed [`navigation`] contract.
//! The [`home`] dashboard shows the quit-journey counters and achievements.

pub mod config;
pub mod habits;
pub mod home;
pub mod logging;
pub mod navigation;
pub mod quiz;
pub mod ui;
