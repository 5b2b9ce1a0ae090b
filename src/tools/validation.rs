//! Input checks shared by the tools

use chrono::NaiveDate;

pub fn validate_email(email: &str) -> Result<&str, String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("user_email cannot be empty".to_string());
    }
    if !email.contains('@') {
        return Err(format!("user_email '{}' is not a valid email address", email));
    }
    Ok(email)
}

pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| format!("{} must be in YYYY-MM-DD format, got '{}'", field, value))
}

/// Parse and order-check a start/end date pair
pub fn parse_date_range(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate), String> {
    let start_date = parse_date("start_date", start)?;
    let end_date = parse_date("end_date", end)?;
    if start_date > end_date {
        return Err(format!(
            "start_date {} is after end_date {}",
            start_date, end_date
        ));
    }
    Ok((start_date, end_date))
}

pub fn validate_score(field: &str, value: f64) -> Result<f64, String> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(format!("{} must be between 0 and 100, got {}", field, value));
    }
    Ok(value)
}
