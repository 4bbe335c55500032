use std::fmt::Write as _;

pub const DEFAULT_DISCLAIMER: &str = "Facts-only. No investment advice. This assistant only provides factual information drawn from official AMC / AMFI / SEBI public pages. It does not offer investment advice, recommendations, or portfolio suggestions. Always verify critical details from the original scheme documents linked in each response.";

/// Facts-only banner. Dismissal lasts for the current session and only applies when the
/// banner was created dismissible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disclaimer {
    text: String,
    dismissible: bool,
    dismissed: bool,
}

impl Disclaimer {
    pub fn new(dismissible: bool) -> Self {
        Self::with_text(DEFAULT_DISCLAIMER, dismissible)
    }

    pub fn with_text(text: impl Into<String>, dismissible: bool) -> Self {
        Self {
            text: text.into(),
            dismissible,
            dismissed: false,
        }
    }

    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }

    /// Returns whether the banner is now hidden.
    pub fn dismiss(&mut self) -> bool {
        if self.dismissible {
            self.dismissed = true;
        }
        self.dismissed
    }

    pub fn is_visible(&self) -> bool {
        !(self.dismissed && self.dismissible)
    }

    pub fn render(&self, out: &mut String) {
        if !self.is_visible() {
            return;
        }

        let _ = writeln!(out, "[!] {}", self.text);
        if self.dismissible {
            let _ = writeln!(out, "    (type :dismiss to hide this notice)");
        }
    }
}

impl Default for Disclaimer {
    fn default() -> Self {
        Self::new(false)
    }
}
