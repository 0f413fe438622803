// Home dashboard achievements and counters

use quitpath::home::{ACHIEVEMENTS, DAILY_GOALS, HomeStats};

#[test]
fn test_no_achievements_at_day_zero() {
    let stats = HomeStats::default();
    let achievements = stats.achievements();
    assert_eq!(achievements.len(), 3);
    assert!(achievements.iter().all(|a| !a.completed));
}

#[test]
fn test_one_week_unlocks_first_two() {
    let stats = HomeStats {
        days_sober: 7,
        ..Default::default()
    };
    let achievements = stats.achievements();
    assert!(achievements[0].completed);
    assert!(achievements[1].completed);
    assert!(!achievements[2].completed);
    assert_eq!(achievements[2].title, "1 Month Champion");
}

#[test]
fn test_thresholds_and_titles() {
    let thresholds: Vec<u32> = ACHIEVEMENTS.iter().map(|a| a.days).collect();
    assert_eq!(thresholds, [1, 7, 30]);
    assert_eq!(ACHIEVEMENTS[0].title, "24 Hours Smoke-Free");
    assert_eq!(ACHIEVEMENTS[1].title, "1 Week Milestone");
}

#[test]
fn test_counters_start_at_zero() {
    let stats = HomeStats::default();
    assert_eq!(stats.days_sober, 0);
    assert_eq!(stats.money_saved, 0);
    assert_eq!(stats.cigarettes_avoided, 0);
    assert_eq!(DAILY_GOALS.len(), 3);
}
