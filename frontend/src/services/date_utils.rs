use chrono::NaiveDate;
use shared::{parse_canonical_date, ToCanonicalDate};

/// Today's date according to the browser clock
pub fn get_current_date() -> NaiveDate {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// English month name for the calendar header
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "Invalid Month",
    }
}

/// Format a record date for display (e.g., "2024.01.05")
///
/// Dates that don't parse are shown as received.
pub fn format_date_for_display(date_str: &str) -> String {
    match parse_canonical_date(date_str) {
        Some(date) => date.format("%Y.%m.%d").to_string(),
        None => date_str.canonical_date(),
    }
}

/// Format a won amount with thousands separators (e.g., "12,500원")
pub fn format_amount(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-{}원", grouped)
    } else {
        format!("{}원", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_month_name() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(0), "Invalid Month");
        assert_eq!(month_name(13), "Invalid Month");
    }

    #[wasm_bindgen_test]
    fn test_format_date_for_display() {
        assert_eq!(format_date_for_display("20240105"), "2024.01.05");
        assert_eq!(format_date_for_display("2024-01-05"), "2024.01.05");
        assert_eq!(format_date_for_display("invalid-date"), "invalid-date");
    }

    #[wasm_bindgen_test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0원");
        assert_eq!(format_amount(999.0), "999원");
        assert_eq!(format_amount(12500.0), "12,500원");
        assert_eq!(format_amount(1234567.4), "1,234,567원");
        assert_eq!(format_amount(-5000.0), "-5,000원");
    }

    // Needs the browser clock
    #[cfg(target_arch = "wasm32")]
    #[wasm_bindgen_test]
    fn test_current_date_is_valid() {
        let today = get_current_date();
        assert!(today.format("%Y").to_string().parse::<i32>().unwrap() >= 2024);
    }
}
