// Custom widgets for the TUI

pub mod slider;

pub use slider::Slider;
