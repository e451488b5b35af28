use crate::error::ConversionError;

// ---------------------------------------------------------------------------
// Imperial length → meters
// ---------------------------------------------------------------------------

pub const METERS_PER_FOOT: f64 = 0.3048;
pub const METERS_PER_INCH: f64 = 0.0254;

/// Parse one form field as a length. Surrounding whitespace is ignored;
/// empty, non-numeric and non-finite (`inf`, `NaN`) text is rejected.
pub fn parse_length(text: &str) -> Result<f64, ConversionError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| ConversionError::Invalid)?;
    if !value.is_finite() {
        return Err(ConversionError::Invalid);
    }
    Ok(value)
}

/// `feet * 0.3048 + inches * 0.0254`, rounded to two decimals.
///
/// Both values must be strictly positive: zero inches is rejected too.
pub fn feet_inches_to_meters(feet: f64, inches: f64) -> Result<f64, ConversionError> {
    if feet <= 0.0 || inches <= 0.0 {
        return Err(ConversionError::NotPositive);
    }
    Ok(round_to_cents(feet * METERS_PER_FOOT + inches * METERS_PER_INCH))
}

/// Parse both fields, then convert. A parse failure in either field wins over
/// a sign failure in the other.
pub fn convert_text(feet: &str, inches: &str) -> Result<f64, ConversionError> {
    let feet = parse_length(feet)?;
    let inches = parse_length(inches)?;
    feet_inches_to_meters(feet, inches)
}

/// Result label text in the shortest form with at least one decimal,
/// e.g. `1.22 meters`, `1.2 meters`, `2.0 meters`.
pub fn format_meters(meters: f64) -> String {
    let mut value = meters.to_string();
    if !value.contains('.') {
        value.push_str(".0");
    }
    format!("{value} meters")
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_feet_twelve_inches() {
        let m = feet_inches_to_meters(3.0, 12.0).unwrap();
        assert_eq!(m, 1.22);
        assert_eq!(format_meters(m), "1.22 meters");
    }

    #[test]
    fn test_zero_is_rejected() {
        assert_eq!(
            feet_inches_to_meters(3.0, 0.0),
            Err(ConversionError::NotPositive)
        );
        assert_eq!(
            feet_inches_to_meters(0.0, 5.0),
            Err(ConversionError::NotPositive)
        );
    }

    #[test]
    fn test_negative_is_rejected() {
        assert_eq!(
            feet_inches_to_meters(-1.0, 5.0),
            Err(ConversionError::NotPositive)
        );
    }

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length(" 5.5 "), Ok(5.5));
        assert_eq!(parse_length("1e1"), Ok(10.0));
        assert_eq!(parse_length(""), Err(ConversionError::Invalid));
        assert_eq!(parse_length("five"), Err(ConversionError::Invalid));
        assert_eq!(parse_length("inf"), Err(ConversionError::Invalid));
        assert_eq!(parse_length("NaN"), Err(ConversionError::Invalid));
    }

    #[test]
    fn test_convert_text() {
        assert_eq!(convert_text("3", "12"), Ok(1.22));
        assert_eq!(convert_text("6", "1").map(format_meters), Ok("1.85 meters".to_string()));
        // invalid text is reported even when the other field is negative
        assert_eq!(convert_text("-1", "abc"), Err(ConversionError::Invalid));
        assert_eq!(convert_text("-1", "5"), Err(ConversionError::NotPositive));
    }

    #[test]
    fn test_format_uses_shortest_form() {
        assert_eq!(format_meters(1.22), "1.22 meters");
        assert_eq!(format_meters(1.2), "1.2 meters");
        assert_eq!(format_meters(2.0), "2.0 meters");
        assert_eq!(format_meters(0.3), "0.3 meters");
    }

    #[test]
    fn test_rounded_result_formats_without_padding() {
        // 3 ft 11.2 in = 1.19888 m
        assert_eq!(convert_text("3", "11.2").map(format_meters), Ok("1.2 meters".to_string()));
        // 6 ft 6.9 in = 2.00406 m
        assert_eq!(convert_text("6", "6.9").map(format_meters), Ok("2.0 meters".to_string()));
    }
}
