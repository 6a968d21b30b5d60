// Fizzbuzz-style display classification for counter values

use ratatui::style::Color;

/// Presentation category of a counter value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCategory {
    /// Not divisible by 3 or 5 (zero lands here by explicit choice)
    None,
    /// Divisible by 5 only
    Five,
    /// Divisible by 3 only
    Three,
    /// Divisible by both
    Both,
}

impl ColorCategory {
    /// Terminal color for this category
    pub fn color(&self) -> Color {
        match self {
            ColorCategory::None => Color::White,
            ColorCategory::Five => Color::Green,
            ColorCategory::Three => Color::Rgb(128, 128, 255),
            ColorCategory::Both => Color::Cyan,
        }
    }
}

/// Classify a counter value for display.
///
/// Zero is treated as divisible by neither 3 nor 5. Untouched counters
/// render in the plain color, not the divisible-by-everything one.
pub fn color_category_for(value: u32) -> ColorCategory {
    let divisible_by_5 = value != 0 && value % 5 == 0;
    let divisible_by_3 = value != 0 && value % 3 == 0;
    match (divisible_by_5, divisible_by_3) {
        (false, false) => ColorCategory::None,
        (true, true) => ColorCategory::Both,
        (true, false) => ColorCategory::Five,
        (false, true) => ColorCategory::Three,
    }
}
