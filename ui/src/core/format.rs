//! Formatting helpers for presenting records.

use time::{macros::format_description, Date};

/// "Jan 2023", used on cards and in the modal header.
pub fn format_month_year(date: Date) -> String {
    date.format(&format_description!("[month repr:short] [year]"))
        .unwrap_or_else(|_| "—".to_string())
}

/// "Jan 05", used next to timeline entries.
pub fn format_month_day(date: Date) -> String {
    date.format(&format_description!("[month repr:short] [day]"))
        .unwrap_or_else(|_| "—".to_string())
}

/// "January 05, 2023", used in the modal footer.
pub fn format_long_date(date: Date) -> String {
    date.format(&format_description!("[month repr:long] [day], [year]"))
        .unwrap_or_else(|_| "—".to_string())
}

/// CSS width value for the lifespan bar.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

const ACCENT_PALETTE: [&str; 4] = [
    "accent--violet",
    "accent--teal",
    "accent--amber",
    "accent--rose",
];

/// Deterministic accent class for a category. Known categories have fixed
/// accents; anything else is hashed into the palette.
pub fn accent_class(category: &str) -> &'static str {
    match category {
        "model" => "accent--model",
        "product" => "accent--product",
        other => {
            let hash = other
                .bytes()
                .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)));
            ACCENT_PALETTE[hash as usize % ACCENT_PALETTE.len()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn dates_render_in_wall_formats() {
        let d = date!(2023 - 01 - 05);
        assert_eq!(format_month_year(d), "Jan 2023");
        assert_eq!(format_month_day(d), "Jan 05");
        assert_eq!(format_long_date(d), "January 05, 2023");
    }

    #[test]
    fn accents_are_stable() {
        assert_eq!(accent_class("model"), "accent--model");
        assert_eq!(accent_class("product"), "accent--product");
        assert_eq!(accent_class("feature"), accent_class("feature"));
        assert!(ACCENT_PALETTE.contains(&accent_class("feature")));
    }
}
