//! The single-slot status line.
//!
//! Each message overwrites the previous one. There is no queue and nothing
//! auto-dismisses.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Error => "error",
        }
    }

    pub fn style(self) -> StatusStyle {
        match self {
            Severity::Info => StatusStyle {
                background: "#e6ffe6",
                color: "#060",
                border: "1px solid #060",
            },
            Severity::Error => StatusStyle {
                background: "#ffe6e6",
                color: "#b00",
                border: "1px solid #b00",
            },
        }
    }
}

/// Visual treatment of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub background: &'static str,
    pub color: &'static str,
    pub border: &'static str,
}

impl StatusStyle {
    /// Inline CSS declaration list.
    pub fn to_css(self) -> String {
        format!(
            "background: {}; color: {}; border: {}",
            self.background, self.color, self.border
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Status {
    pub text: String,
    pub severity: Severity,
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
