// End-to-end scenarios for the onboarding quiz
//
// These drive QuizProgress the same way the quiz screen does, without a terminal.

use quitpath::habits::Trigger;
use quitpath::quiz::{QuizEvent, QuizOutcome, QuizProgress, QuizStep, format_cost};

fn expect_completed(outcome: QuizOutcome) -> quitpath::habits::SmokingHabits {
    match outcome {
        QuizOutcome::Completed(habits) => habits,
        QuizOutcome::Continue => panic!("quiz should have completed"),
    }
}

// ============================================================================
// Step sequencing
// ============================================================================

#[test]
fn test_go_back_on_first_step_is_noop() {
    let mut quiz = QuizProgress::new();
    for _ in 0..3 {
        quiz.go_back();
        assert_eq!(quiz.current_step().number(), 1);
    }
    assert_eq!(quiz, QuizProgress::new());
}

#[test]
fn test_advance_before_last_step_increments_by_one() {
    let mut quiz = QuizProgress::new();
    for expected in 2..=4 {
        let before = quiz.current_step().number();
        assert_eq!(quiz.advance(), QuizOutcome::Continue);
        assert_eq!(quiz.current_step().number(), before + 1);
        assert_eq!(quiz.current_step().number(), expected);
    }
}

#[test]
fn test_advance_on_last_step_completes_without_moving() {
    let mut quiz = QuizProgress::new();
    for _ in 0..3 {
        quiz.advance();
    }
    assert_eq!(quiz.current_step(), QuizStep::Triggers);

    for _ in 0..2 {
        let habits = expect_completed(quiz.advance());
        assert_eq!(habits, quiz.complete());
        assert_eq!(quiz.current_step(), QuizStep::Triggers);
    }
}

#[test]
fn test_back_then_forward_keeps_answers() {
    let mut quiz = QuizProgress::new();
    quiz.set_cigarettes_per_day(18);
    quiz.advance();
    quiz.set_years_smoked(9);
    quiz.advance();
    quiz.set_cost_per_pack(8.5);
    quiz.go_back();
    quiz.go_back();
    quiz.advance();
    quiz.advance();
    quiz.advance();

    let habits = expect_completed(quiz.advance());
    assert_eq!(habits.cigarettes_per_day(), 18);
    assert_eq!(habits.years_smoked(), 9);
    assert_eq!(habits.cost_per_pack(), 8.5);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_defaults_then_two_triggers() {
    let mut quiz = QuizProgress::new();
    assert_eq!(quiz.cigarettes_per_day(), 10);

    for _ in 0..3 {
        quiz.advance();
    }
    assert_eq!(quiz.current_step().number(), 4);
    assert_eq!(quiz.years_smoked(), 5);
    assert_eq!(format_cost(quiz.cost_per_pack()), "$10.00");

    quiz.select_trigger(Trigger::Stress);
    quiz.select_trigger(Trigger::Coffee);

    let habits = expect_completed(quiz.advance());
    assert_eq!(habits.cigarettes_per_day(), 10);
    assert_eq!(habits.years_smoked(), 5);
    assert_eq!(habits.cost_per_pack(), 10.0);
    assert_eq!(habits.main_triggers(), &[Trigger::Stress, Trigger::Coffee]);
}

#[test]
fn test_toggled_off_trigger_is_excluded() {
    let mut quiz = QuizProgress::new();
    for _ in 0..3 {
        quiz.advance();
    }
    quiz.select_trigger(Trigger::Stress);
    quiz.select_trigger(Trigger::Stress);

    let habits = expect_completed(quiz.advance());
    assert!(!habits.main_triggers().contains(&Trigger::Stress));
    assert!(habits.main_triggers().is_empty());
}

#[test]
fn test_selection_order_is_preserved_after_removal() {
    let mut quiz = QuizProgress::new();
    quiz.select_trigger(Trigger::Boredom);
    quiz.select_trigger(Trigger::Alcohol);
    quiz.select_trigger(Trigger::WorkBreaks);
    quiz.select_trigger(Trigger::Alcohol);
    quiz.select_trigger(Trigger::Alcohol);

    assert_eq!(
        quiz.complete().main_triggers(),
        &[Trigger::Boredom, Trigger::WorkBreaks, Trigger::Alcohol]
    );
}

#[test]
fn test_event_driven_run() {
    let events = [
        QuizEvent::SetCigarettesPerDay(25),
        QuizEvent::Advance,
        QuizEvent::SetYearsSmoked(14),
        QuizEvent::Advance,
        QuizEvent::SetCostPerPack(12.0),
        QuizEvent::Advance,
        QuizEvent::ToggleTrigger(Trigger::MorningRoutine),
        QuizEvent::ToggleTrigger(Trigger::SocialSettings),
        QuizEvent::Back,
        QuizEvent::Advance,
    ];

    let mut quiz = QuizProgress::new();
    for event in events {
        let (next, outcome) = quiz.apply(event);
        assert_eq!(outcome, QuizOutcome::Continue);
        quiz = next;
    }

    let (_, outcome) = quiz.apply(QuizEvent::Advance);
    let habits = expect_completed(outcome);
    assert_eq!(habits.cigarettes_per_day(), 25);
    assert_eq!(habits.years_smoked(), 14);
    assert_eq!(habits.cost_per_pack(), 12.0);
    assert_eq!(
        habits.main_triggers(),
        &[Trigger::MorningRoutine, Trigger::SocialSettings]
    );
}
