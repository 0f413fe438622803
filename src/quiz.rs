//! Onboarding quiz flow.
//!
//! Four ordered steps collect the habit profile. The flow is a plain state
//! struct plus events so it can be driven without any rendering layer:
//! the terminal UI translates key presses into [`QuizEvent`]s and hands the
//! [`SmokingHabits`] from a [`QuizOutcome::Completed`] to the navigator.

use crate::habits::{SmokingHabits, Trigger};

/// Quiz steps in the order they are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizStep {
    #[default]
    CigarettesPerDay,
    YearsSmoked,
    CostPerPack,
    Triggers,
}

impl QuizStep {
    pub const COUNT: u8 = 4;

    /// 1-based position, as shown in "Step N of 4".
    pub fn number(self) -> u8 {
        match self {
            Self::CigarettesPerDay => 1,
            Self::YearsSmoked => 2,
            Self::CostPerPack => 3,
            Self::Triggers => 4,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::CigarettesPerDay),
            2 => Some(Self::YearsSmoked),
            3 => Some(Self::CostPerPack),
            4 => Some(Self::Triggers),
            _ => None,
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn prev(self) -> Option<Self> {
        Self::from_number(self.number().saturating_sub(1))
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    pub fn question(self) -> &'static str {
        match self {
            Self::CigarettesPerDay => "How many cigarettes do you smoke daily?",
            Self::YearsSmoked => "How many years have you been smoking?",
            Self::CostPerPack => "What's the cost of a pack in your area?",
            Self::Triggers => "What triggers your smoking habit?",
        }
    }

    /// Range of the slider backing this step, `None` for the trigger picker.
    pub fn slider(self) -> Option<SliderRange> {
        match self {
            Self::CigarettesPerDay => Some(CIGARETTES_PER_DAY),
            Self::YearsSmoked => Some(YEARS_SMOKED),
            Self::CostPerPack => Some(COST_PER_PACK),
            Self::Triggers => None,
        }
    }
}

/// Bounds, increment and starting value of a quiz slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

pub const CIGARETTES_PER_DAY: SliderRange = SliderRange {
    min: 1.0,
    max: 40.0,
    step: 1.0,
    default: 10.0,
};

pub const YEARS_SMOKED: SliderRange = SliderRange {
    min: 1.0,
    max: 30.0,
    step: 1.0,
    default: 5.0,
};

pub const COST_PER_PACK: SliderRange = SliderRange {
    min: 5.0,
    max: 25.0,
    step: 0.5,
    default: 10.0,
};

impl SliderRange {
    /// Clamp into range and round to the nearest step.
    pub fn snap(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }

    /// Move `delta` steps away from `value`, staying in range.
    pub fn offset(&self, value: f64, delta: i32) -> f64 {
        self.snap(value + f64::from(delta) * self.step)
    }
}

/// Inputs the quiz reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuizEvent {
    SetCigarettesPerDay(u32),
    SetYearsSmoked(u32),
    SetCostPerPack(f64),
    ToggleTrigger(Trigger),
    Back,
    Advance,
}

/// Result of advancing or applying an event.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizOutcome {
    Continue,
    Completed(SmokingHabits),
}

/// Answers collected so far plus the step being shown.
///
/// Slider values keep their last setting while other steps are displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizProgress {
    current_step: QuizStep,
    cigarettes_per_day: u32,
    years_smoked: u32,
    cost_per_pack: f64,
    selected_triggers: Vec<Trigger>,
}

impl Default for QuizProgress {
    fn default() -> Self {
        Self {
            current_step: QuizStep::default(),
            cigarettes_per_day: CIGARETTES_PER_DAY.default as u32,
            years_smoked: YEARS_SMOKED.default as u32,
            cost_per_pack: COST_PER_PACK.default,
            selected_triggers: Vec::new(),
        }
    }
}

impl QuizProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> QuizStep {
        self.current_step
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

    /// Selected triggers in selection order.
    pub fn selected_triggers(&self) -> &[Trigger] {
        &self.selected_triggers
    }

    pub fn is_selected(&self, trigger: Trigger) -> bool {
        self.selected_triggers.contains(&trigger)
    }

    pub fn set_cigarettes_per_day(&mut self, value: u32) {
        self.cigarettes_per_day = CIGARETTES_PER_DAY.snap(f64::from(value)) as u32;
    }

    pub fn set_years_smoked(&mut self, value: u32) {
        self.years_smoked = YEARS_SMOKED.snap(f64::from(value)) as u32;
    }

    pub fn set_cost_per_pack(&mut self, value: f64) {
        self.cost_per_pack = COST_PER_PACK.snap(value);
    }

    /// Value of the slider on the current step, if it has one.
    pub fn slider_value(&self) -> Option<f64> {
        match self.current_step {
            QuizStep::CigarettesPerDay => Some(f64::from(self.cigarettes_per_day)),
            QuizStep::YearsSmoked => Some(f64::from(self.years_smoked)),
            QuizStep::CostPerPack => Some(self.cost_per_pack),
            QuizStep::Triggers => None,
        }
    }

    /// Move the current step's slider by `delta` steps. Returns true if the value changed.
    pub fn nudge_slider(&mut self, delta: i32) -> bool {
        let (Some(range), Some(value)) = (self.current_step.slider(), self.slider_value()) else {
            return false;
        };
        let next = range.offset(value, delta);
        self.set_slider_value(next);
        next != value
    }

    /// Set the current step's slider, snapped to its range.
    pub fn set_slider_value(&mut self, value: f64) {
        match self.current_step {
            QuizStep::CigarettesPerDay => {
                self.cigarettes_per_day = CIGARETTES_PER_DAY.snap(value) as u32
            }
            QuizStep::YearsSmoked => self.years_smoked = YEARS_SMOKED.snap(value) as u32,
            QuizStep::CostPerPack => self.cost_per_pack = COST_PER_PACK.snap(value),
            QuizStep::Triggers => {}
        }
    }

    /// Toggle a trigger: remove it if selected, otherwise append it.
    pub fn select_trigger(&mut self, trigger: Trigger) {
        if let Some(pos) = self.selected_triggers.iter().position(|t| *t == trigger) {
            self.selected_triggers.remove(pos);
        } else {
            self.selected_triggers.push(trigger);
        }
    }

    /// Step back. No-op on the first step.
    pub fn go_back(&mut self) {
        if let Some(prev) = self.current_step.prev() {
            self.current_step = prev;
        }
    }

    /// Step forward, or complete the quiz from the last step.
    pub fn advance(&mut self) -> QuizOutcome {
        match self.current_step.next() {
            Some(next) => {
                self.current_step = next;
                QuizOutcome::Continue
            }
            None => QuizOutcome::Completed(self.complete()),
        }
    }

    /// Snapshot the answers as the results payload.
    pub fn complete(&self) -> SmokingHabits {
        tracing::info!(
            cigarettes_per_day = self.cigarettes_per_day,
            years_smoked = self.years_smoked,
            cost_per_pack = self.cost_per_pack,
            triggers = self.selected_triggers.len(),
            "quiz completed"
        );
        SmokingHabits::new(
            self.cigarettes_per_day,
            self.years_smoked,
            self.cost_per_pack,
            self.selected_triggers.clone(),
        )
    }

    /// Pure transition: consume the state and an event, return the next state.
    pub fn apply(mut self, event: QuizEvent) -> (Self, QuizOutcome) {
        let outcome = match event {
            QuizEvent::SetCigarettesPerDay(v) => {
                self.set_cigarettes_per_day(v);
                QuizOutcome::Continue
            }
            QuizEvent::SetYearsSmoked(v) => {
                self.set_years_smoked(v);
                QuizOutcome::Continue
            }
            QuizEvent::SetCostPerPack(v) => {
                self.set_cost_per_pack(v);
                QuizOutcome::Continue
            }
            QuizEvent::ToggleTrigger(t) => {
                self.select_trigger(t);
                QuizOutcome::Continue
            }
            QuizEvent::Back => {
                self.go_back();
                QuizOutcome::Continue
            }
            QuizEvent::Advance => self.advance(),
        };
        (self, outcome)
    }

    pub fn shows_back(&self) -> bool {
        self.current_step.prev().is_some()
    }

    pub fn primary_label(&self) -> &'static str {
        if self.current_step.is_last() {
            "Complete"
        } else {
            "Next"
        }
    }

    /// Value line under the slider, e.g. "10 cigarettes" or "$10.00".
    pub fn value_display(&self) -> Option<String> {
        match self.current_step {
            QuizStep::CigarettesPerDay => Some(format!("{} cigarettes", self.cigarettes_per_day)),
            QuizStep::YearsSmoked => Some(format!("{} years", self.years_smoked)),
            QuizStep::CostPerPack => Some(format_cost(self.cost_per_pack)),
            QuizStep::Triggers => None,
        }
    }
}

pub fn format_cost(cost: f64) -> String {
    format!("${:.2}", cost)
}
