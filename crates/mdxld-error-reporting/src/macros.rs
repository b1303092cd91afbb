//! Macros for creating diagnostic messages.


/// Create a generic error with automatic file and line information.
///
/// The error carries code `MDX-0-99` and embeds the file and line number where
/// it was created.
///
/// # Example
///
/// ```
/// use mdxld_error_reporting::generic_error;
///
/// let error = generic_error!("Unexpected node in document root");
/// assert_eq!(error.code, Some("MDX-0-99".to_string()));
/// assert!(error.title.contains(file!()));
/// ```
#[macro_export]
macro_rules! generic_error {
    ($message:expr) => {
        $crate::DiagnosticMessageBuilder::generic_error($message, file!(), line!())
    };
}

/// Create a generic warning with automatic file and line information.
///
/// # Example
///
/// ```
/// use mdxld_error_reporting::generic_warning;
///
/// let warning = generic_warning!("Frontmatter block is empty");
/// assert_eq!(warning.code, Some("MDX-0-99".to_string()));
/// ```
#[macro_export]
macro_rules! generic_warning {
    ($message:expr) => {
        $crate::DiagnosticMessageBuilder::generic_warning($message, file!(), line!())
    };
}
