use std::fmt::Write as _;

use crate::response::{FaqResponse, ResponseStatus};

/// Answer with its citation. Only built for `success` replies that carry answer text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard<'a> {
    pub answer: &'a str,
    pub source: &'a str,
    pub last_updated: &'a str,
    pub show_details: bool,
}

impl<'a> ResultCard<'a> {
    pub fn from_response(response: &'a FaqResponse, show_details: bool) -> Option<Self> {
        if response.status != ResponseStatus::Success {
            return None;
        }

        Some(Self {
            answer: response.answer_text()?,
            source: response.source.as_deref().unwrap_or_default(),
            last_updated: response.last_updated.as_deref().unwrap_or_default(),
            show_details,
        })
    }

    pub fn render(&self, out: &mut String) {
        let _ = writeln!(out, "{}", self.answer);
        let _ = writeln!(out, "----");
        let _ = writeln!(out, "Source: {}", source_link(self.source));
        let _ = writeln!(out, "Last updated: {}", self.last_updated);

        if self.show_details {
            let _ = writeln!(out, "(:details) Hide source details");
            let _ = writeln!(out, "    Source URL: {}", self.source);
            let _ = writeln!(out, "    Last Updated: {}", self.last_updated);
        } else {
            let _ = writeln!(out, "(:details) Show source details");
        }
    }
}

pub(crate) fn source_link(url: &str) -> String {
    format!("{url} \u{2197}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer() -> FaqResponse {
        FaqResponse::success(
            "The lock-in period for SBI Long Term Equity Fund is 3 years.",
            "https://www.sbimf.com/en-us/tax-saving-schemes",
            "2025-01-15",
        )
    }

    #[test]
    fn renders_answer_and_citation() {
        let response = answer();
        let card = ResultCard::from_response(&response, false).expect("card");

        let mut out = String::new();
        card.render(&mut out);
        assert!(out.starts_with("The lock-in period"));
        assert!(out.contains("Source: https://www.sbimf.com/en-us/tax-saving-schemes \u{2197}"));
        assert!(out.contains("Last updated: 2025-01-15"));
        assert!(out.contains("Show source details"));
        assert!(!out.contains("Source URL:"));
    }

    #[test]
    fn details_expand_on_toggle() {
        let response = answer();
        let card = ResultCard::from_response(&response, true).expect("card");

        let mut out = String::new();
        card.render(&mut out);
        assert!(out.contains("Hide source details"));
        assert!(out.contains("Source URL: https://www.sbimf.com/en-us/tax-saving-schemes"));
        assert!(out.contains("Last Updated: 2025-01-15"));
    }

    #[test]
    fn success_without_answer_renders_nothing() {
        let mut response = answer();
        response.answer = Some(String::new());
        assert!(ResultCard::from_response(&response, false).is_none());

        let refusal = FaqResponse::refusal("Facts only.", None);
        assert!(ResultCard::from_response(&refusal, false).is_none());
    }

    #[test]
    fn missing_citation_fields_render_blank() {
        let mut response = answer();
        response.source = None;
        response.last_updated = None;
        let card = ResultCard::from_response(&response, false).expect("card");
        assert_eq!(card.source, "");
        assert_eq!(card.last_updated, "");
    }
}
