// Colour palette shared by all screens

use ratatui::style::Color;

// Primary blue (#4A90E2): titles, selected triggers, focused controls
pub const ACCENT: Color = Color::Rgb(0x4A, 0x90, 0xE2);

// Mint (#50E3C2): completed achievements, stats card highlight
pub const SUCCESS: Color = Color::Rgb(0x50, 0xE3, 0xC2);

// Slate (#64748B): secondary text
pub const MUTED: Color = Color::Rgb(0x64, 0x74, 0x8B);

// Light slate (#BBC3CF): pending achievements, empty slider track
pub const TRACK: Color = Color::Rgb(0xBB, 0xC3, 0xCF);

// Near-black (#1A1F36) used as text on light buttons
pub const INK: Color = Color::Rgb(0x1A, 0x1F, 0x36);
