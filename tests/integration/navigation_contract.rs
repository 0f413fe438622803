// Navigation contract: routes, payloads and the results hand-off

use insta::assert_snapshot;
use quitpath::habits::{SmokingHabits, Trigger};
use quitpath::navigation::{Navigator, Route, ScreenName};
use quitpath::quiz::{QuizOutcome, QuizProgress};
use quitpath::ui::AppState;

fn stress_and_coffee() -> SmokingHabits {
    let mut quiz = QuizProgress::new();
    quiz.select_trigger(Trigger::Stress);
    quiz.select_trigger(Trigger::Coffee);
    quiz.complete()
}

#[test]
fn test_initial_route_is_quiz_not_home() {
    let nav = Navigator::default();
    assert_eq!(nav.current().name(), ScreenName::Quiz);
    assert_ne!(nav.current().name(), ScreenName::Home);
    assert_eq!(AppState::default().current_screen(), ScreenName::Quiz);
}

#[test]
fn test_route_names_cover_contract() {
    let routes = [
        Route::Onboarding,
        Route::Home,
        Route::Quiz,
        Route::QuizResults {
            smoking_habits: stress_and_coffee(),
        },
        Route::Breathing,
        Route::Community,
        Route::Profile,
    ];
    let names: Vec<&str> = routes.iter().map(|r| r.name().title()).collect();
    assert_eq!(
        names,
        [
            "Onboarding",
            "Home",
            "Quiz",
            "Quiz Results",
            "Breathing",
            "Community",
            "Profile"
        ]
    );
}

#[test]
fn test_completed_quiz_lands_on_results_with_payload() {
    let mut state = AppState::default();
    for _ in 0..3 {
        state.quiz.progress.advance();
    }
    state.quiz.progress.select_trigger(Trigger::Stress);
    state.quiz.progress.select_trigger(Trigger::Coffee);

    match state.quiz.progress.advance() {
        QuizOutcome::Completed(habits) => state.show_results(habits),
        QuizOutcome::Continue => panic!("expected completion"),
    }

    match state.navigator.current() {
        Route::QuizResults { smoking_habits } => {
            assert_eq!(smoking_habits, &stress_and_coffee());
        }
        other => panic!("expected results route, got {:?}", other.name()),
    }
    assert_eq!(state.navigator.depth(), 2);
    assert_eq!(state.last_result, Some(stress_and_coffee()));
}

#[test]
fn test_payload_json_uses_contract_field_names() {
    let json = serde_json::to_string(&stress_and_coffee()).unwrap();
    assert_snapshot!(json, @r#"{"cigarettesPerDay":10,"yearsSmoked":5,"costPerPack":10.0,"mainTriggers":["Stress","Coffee"]}"#);
}

#[test]
fn test_payload_json_round_trip() {
    let json = r#"{
        "cigarettesPerDay": 22,
        "yearsSmoked": 3,
        "costPerPack": 7.5,
        "mainTriggers": ["After Meals", "Boredom"]
    }"#;
    let habits: SmokingHabits = serde_json::from_str(json).unwrap();
    assert_eq!(habits.cigarettes_per_day(), 22);
    assert_eq!(habits.years_smoked(), 3);
    assert_eq!(habits.cost_per_pack(), 7.5);
    assert_eq!(
        habits.main_triggers(),
        &[Trigger::AfterMeals, Trigger::Boredom]
    );
}
