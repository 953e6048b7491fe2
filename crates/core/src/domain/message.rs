// Display Messages
// What the error normalizer hands to a display sink. The sink decides how
// the message is rendered (alert box, terminal line, ...).

/// CSS class used for all error messages
pub const ALERT_DANGER: &str = "alert-danger";

/// Title used for all error messages
pub const ERROR_TITLE: &str = "Error!";

/// A message ready for rendering by a display sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMessage {
    pub css_class: String,
    pub title: String,
    pub body: String,
}

impl DisplayMessage {
    pub fn new(
        css_class: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            css_class: css_class.into(),
            title: title.into(),
            body: body.into(),
        }
    }

    /// Error message with the fixed alert class and title
    pub fn error(body: impl Into<String>) -> Self {
        Self::new(ALERT_DANGER, ERROR_TITLE, body)
    }
}
