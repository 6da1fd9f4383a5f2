use core::fmt;

/// Everything that can go wrong in a session. The first eight variants are
/// the store's validation outcomes; the rest belong to the surrounding
/// application layer (command parsing, terminal I/O, rendering).
#[derive(Debug)]
pub enum AppError {
    MissingField,
    NonNumericReference,
    ZeroReference,
    InvalidPhoneFormat,
    DuplicateReference(i64),
    DuplicatePhone(String),
    NotFound,
    NoChange,
    ParseCommand(String),
    Io(std::io::Error),
    Regex(regex::Error),
    Json(serde_json::Error),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Regex(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::MissingField => {
                write!(f, "Please fill in all fields.")
            }
            AppError::NonNumericReference => {
                write!(f, "Reference number must only consist of purely numbers.")
            }
            AppError::ZeroReference => {
                write!(f, "Reference number cannot be 0.")
            }
            AppError::InvalidPhoneFormat => {
                write!(f, "Invalid phone number. Start with '09' and use 11 digits.")
            }
            AppError::DuplicateReference(reference) => {
                write!(f, "Reference number {} already exists.", reference)
            }
            AppError::DuplicatePhone(number) => {
                write!(f, "Contact number {} already exists.", number)
            }
            AppError::NotFound => {
                write!(f, "Reference number not found.")
            }
            AppError::NoChange => {
                write!(f, "No changes were made to the contact details.")
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Unrecognized command: '{}'", cmd)
            }
            AppError::Io(e) => {
                write!(f, "I/O error while reading input: {}", e)
            }
            AppError::Regex(e) => {
                write!(f, "Invalid validation pattern: {}", e)
            }
            AppError::Json(e) => {
                write!(f, "Failed to render output: {}", e)
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn confirm_duplicate_reference_message() {
        let err = AppError::DuplicateReference(42);

        assert_eq!(
            format!("{}", err),
            "Reference number 42 already exists.".to_string()
        );
    }

    #[test]
    fn confirm_duplicate_phone_message() {
        let err = AppError::DuplicatePhone("09171234567".to_string());

        assert!(format!("{}", err).contains("09171234567 already exists."));
    }

    #[test]
    fn io_error_converts_into_app_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "end of input");
        let err = AppError::from(io_err);

        assert!(matches!(err, AppError::Io(_)));
        assert!(format!("{}", err).contains("end of input"));
    }
}
