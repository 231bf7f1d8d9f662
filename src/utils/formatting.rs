//! Formatting utilities used for CLI and export outputs.

use ansi_term::Style;

pub fn bold(s: &str) -> String {
    Style::new().bold().paint(s).to_string()
}

/// Two-decimal kg figure; unknown values print as `n/a`.
pub fn fmt_kg(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "n/a".to_string(),
    }
}

pub fn fmt_pct(value: f64) -> String {
    format!("{value:.1}%")
}

/// Signed difference, e.g. `+1.20` / `-0.35`.
pub fn fmt_delta(value: f64) -> String {
    if value > 0.0 {
        format!("+{value:.2}")
    } else {
        format!("{value:.2}")
    }
}

/// Horizontal bar proportional to `value / max`, `width` characters at most.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * width as f64).round() as usize;
    "█".repeat(len.clamp(1, width))
}
