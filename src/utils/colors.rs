//! ANSI colour helpers for terminal output.
use ansi_term::Colour;

/// Colour for a CO2e per kg value:
/// \>= 10 → red, \>= 3 → yellow, otherwise green; unknown → grey.
pub fn colour_for_intensity(value: Option<f64>) -> Colour {
    match value {
        Some(v) if v >= 10.0 => Colour::Red,
        Some(v) if v >= 3.0 => Colour::Yellow,
        Some(_) => Colour::Green,
        None => Colour::Fixed(244),
    }
}

pub fn paint_intensity(text: &str, value: Option<f64>) -> String {
    colour_for_intensity(value).paint(text).to_string()
}
