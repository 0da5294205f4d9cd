//! Session name and storage key validation.
//!
//! A session name becomes a directory name and a storage key becomes a file
//! name, so both are kept to a safe alphabet:
//! - ASCII alphanumerics, underscores (`_`) and hyphens (`-`)
//! - Cannot be empty
//! - Cannot start with a hyphen

/// Validates a session name.
///
/// # Examples
/// ```
/// use regbookapp::session::validate_session_name;
///
/// assert!(validate_session_name("default").is_ok());
/// assert!(validate_session_name("tab-2_b").is_ok());
///
/// assert!(validate_session_name("").is_err());
/// assert!(validate_session_name("-x").is_err());
/// assert!(validate_session_name("../etc").is_err());
/// ```
pub fn validate_session_name(name: &str) -> Result<(), SessionNameError> {
    let Some(first_char) = name.chars().next() else {
        return Err(SessionNameError::Empty);
    };
    if first_char == '-' {
        return Err(SessionNameError::InvalidStart(first_char));
    }

    match name.chars().find(|ch| !is_valid_session_char(*ch)) {
        Some(ch) => Err(SessionNameError::InvalidCharacter(ch)),
        None => Ok(()),
    }
}

/// Validates a storage key. Keys follow the same rules as session names.
///
/// ```
/// use regbookapp::session::validate_storage_key;
///
/// assert!(validate_storage_key("submittedData").is_ok());
/// assert!(validate_storage_key("sub/key").is_err());
/// ```
pub fn validate_storage_key(key: &str) -> Result<(), SessionNameError> {
    validate_session_name(key)
}

fn is_valid_session_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
}

/// Error type for session name and storage key validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionNameError {
    /// Session name is empty
    Empty,
    /// Session name starts with a hyphen
    InvalidStart(char),
    /// Session name contains a character outside the allowed set
    InvalidCharacter(char),
}

impl std::fmt::Display for SessionNameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionNameError::Empty => write!(f, "name cannot be empty"),
            SessionNameError::InvalidStart(ch) => {
                write!(f, "name cannot start with '{}'", ch)
            }
            SessionNameError::InvalidCharacter(ch) => {
                write!(
                    f,
                    "name contains invalid character '{}' (only alphanumeric, underscore, and hyphen allowed)",
                    ch
                )
            }
        }
    }
}

impl std::error::Error for SessionNameError {}
