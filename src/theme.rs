//! ANSI colors for CLI output.
//!
//! Colors are switched off when `NO_COLOR` is set, so that piped output and
//! tests see plain text.

const ANSI_RESET: &str = "\x1b[0m";

/// Foreground escape codes for each text role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub success: &'static str,
    /// Emit escape codes at all.
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "\x1b[37m",
            secondary: "\x1b[90m",
            warning: "\x1b[33m",
            error: "\x1b[31m",
            success: "\x1b[32m",
            enabled: true,
        }
    }
}

impl Theme {
    /// Theme that leaves text untouched.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", color, text, ANSI_RESET)
        } else {
            text.to_string()
        }
    }

    pub fn primary_text(&self, text: &str) -> String {
        self.paint(self.primary, text)
    }

    /// Dimmed text for hints and paths.
    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.secondary, text)
    }

    pub fn warning_text(&self, text: &str) -> String {
        self.paint(self.warning, text)
    }

    pub fn error_text(&self, text: &str) -> String {
        self.paint(self.error, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        self.paint(self.success, text)
    }
}

/// Theme for the current process, honoring `NO_COLOR`.
pub fn current_theme() -> Theme {
    match std::env::var_os("NO_COLOR") {
        Some(value) if !value.is_empty() => Theme::plain(),
        _ => Theme::default(),
    }
}
