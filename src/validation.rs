use regex::Regex;

use crate::errors::AppError;

/// Checks the fixed phone format: exactly 11 digits starting with "09".
pub fn validate_number(phone: &str) -> Result<bool, AppError> {
    let re = Regex::new(r"^09[0-9]{9}$")?;
    Ok(re.is_match(phone))
}

/// References arrive as raw text collected by the caller; parsing happens
/// here, not upstream.
pub fn parse_reference(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::NonNumericReference)
}

/// Same as [`parse_reference`], but 0 is not a legal key.
pub fn parse_nonzero_reference(raw: &str) -> Result<i64, AppError> {
    let reference = parse_reference(raw)?;

    if reference == 0 {
        return Err(AppError::ZeroReference);
    }
    Ok(reference)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn accepts_eleven_digits_with_09_prefix() -> Result<(), AppError> {
        assert!(validate_number("09123456789")?);
        assert!(validate_number("09991234567")?);
        Ok(())
    }

    #[test]
    fn rejects_wrong_length_prefix_or_characters() -> Result<(), AppError> {
        assert!(!validate_number("0912345678")?); // 10 digits
        assert!(!validate_number("091234567890")?); // 12 digits
        assert!(!validate_number("19123456789")?); // wrong prefix
        assert!(!validate_number("0912345678a")?); // non-digit
        assert!(!validate_number("")?);
        Ok(())
    }

    #[test]
    fn parses_trimmed_and_negative_references() -> Result<(), AppError> {
        assert_eq!(parse_reference("  7 ")?, 7);
        assert_eq!(parse_reference("-3")?, -3);
        Ok(())
    }

    #[test]
    fn rejects_non_numeric_and_zero_references() {
        assert!(matches!(
            parse_reference("abc"),
            Err(AppError::NonNumericReference)
        ));
        assert!(matches!(
            parse_reference("12x"),
            Err(AppError::NonNumericReference)
        ));
        assert!(matches!(
            parse_nonzero_reference("0"),
            Err(AppError::ZeroReference)
        ));
    }
}
