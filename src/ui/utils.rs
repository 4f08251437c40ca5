use crate::ui::ui_text::UI_TEXT;

/// Abbreviate a large value to two decimals with a T/B/M/K suffix.
/// `None` (uncapped supply and friends) renders as the infinity glyph.
pub fn format_number(value: Option<f64>) -> String {
    let Some(num) = value else {
        return UI_TEXT.infinity.to_string();
    };

    if num >= 1e12 {
        format!("{:.2}T", num / 1e12)
    } else if num >= 1e9 {
        format!("{:.2}B", num / 1e9)
    } else if num >= 1e6 {
        format!("{:.2}M", num / 1e6)
    } else if num >= 1e3 {
        format!("{:.2}K", num / 1e3)
    } else {
        format!("{:.2}", num)
    }
}

/// Full price with thousands separators and two decimals ("50,000.00").
pub fn format_price(price: f64) -> String {
    let raw = format!("{:.2}", price.abs());
    let (int_part, frac_part) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if price < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Signed percentage with two decimals ("+2.50%", "-0.30%").
/// Zero keeps the plus sign, a flat market still reads as non-negative.
pub fn format_percentage(value: f64) -> String {
    format!("{:+.2}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_suffixes() {
        assert_eq!(format_number(Some(950_000_000_000.0)), "950.00B");
        assert_eq!(format_number(Some(25_000_000_000.0)), "25.00B");
        assert_eq!(format_number(Some(1_200_000_000_000.0)), "1.20T");
        assert_eq!(format_number(Some(2_500_000.0)), "2.50M");
        assert_eq!(format_number(Some(19_000.0)), "19.00K");
        assert_eq!(format_number(Some(999.5)), "999.50");
    }

    #[test]
    fn test_format_number_none_is_infinity() {
        assert_eq!(format_number(None), "\u{221e}");
    }

    #[test]
    fn test_format_price_grouping() {
        assert_eq!(format_price(50_000.0), "50,000.00");
        assert_eq!(format_price(950_000_000_000.0), "950,000,000,000.00");
        assert_eq!(format_price(1.0), "1.00");
        assert_eq!(format_price(0.5), "0.50");
        assert_eq!(format_price(999.99), "999.99");
        assert_eq!(format_price(1_000.0), "1,000.00");
        assert_eq!(format_price(-1_234.5), "-1,234.50");
    }

    #[test]
    fn test_format_percentage_signs() {
        assert_eq!(format_percentage(2.5), "+2.50%");
        assert_eq!(format_percentage(-0.3), "-0.30%");
        assert_eq!(format_percentage(0.0), "+0.00%");
    }
}
