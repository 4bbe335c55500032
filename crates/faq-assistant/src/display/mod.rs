//! Text renderings of the assistant page. Components take resolved data and own no business
//! logic; user input comes back up as a `UiIntent`.

pub mod disclaimer;
pub mod examples;
pub mod panels;
pub mod query_box;
pub mod result_card;

pub use disclaimer::{Disclaimer, DEFAULT_DISCLAIMER};
pub use examples::{example, EXAMPLE_QUESTIONS};
pub use query_box::{prepare_submission, PLACEHOLDER};
pub use result_card::ResultCard;

use crate::shell::{Phase, ShellState};

/// What the user asked for with one line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiIntent {
    Submit(String),
    Example(usize),
    ToggleDetails,
    DismissDisclaimer,
    Help,
    Quit,
}

impl UiIntent {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed {
            ":details" => Self::ToggleDetails,
            ":dismiss" => Self::DismissDisclaimer,
            ":help" | ":h" => Self::Help,
            ":quit" | ":q" | ":exit" => Self::Quit,
            _ => match trimmed.parse::<usize>() {
                Ok(number) if example(number).is_some() => Self::Example(number),
                _ => Self::Submit(line.to_string()),
            },
        }
    }
}

pub const HELP_TEXT: &str = "Type a question and press enter. Enter 1-5 to run an example, \
:details to toggle source details, :dismiss to hide the notice, :quit to leave.";

/// Everything a full page render needs.
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    pub state: &'a ShellState,
    pub disclaimer: &'a Disclaimer,
    pub show_source_details: bool,
    pub year: i32,
}

pub fn render_page(view: &PageView<'_>) -> String {
    let mut out = String::new();
    panels::render_header(&mut out);
    view.disclaimer.render(&mut out);
    out.push('\n');

    panels::render_intro(&mut out);
    out.push('\n');

    let state = view.state;
    query_box::render_query_box(&mut out, state.query(), state.error(), state.is_loading());
    out.push('\n');
    examples::render_examples(&mut out);

    let mut outcome = String::new();
    render_outcome(&mut outcome, state, view.show_source_details);
    if !outcome.is_empty() {
        out.push('\n');
        out.push_str(&outcome);
    }

    out.push('\n');
    panels::render_footer(&mut out, view.year);
    out
}

/// Only the part of the page that changes per submission.
pub fn render_outcome(out: &mut String, state: &ShellState, show_source_details: bool) {
    let Some(response) = state.response() else {
        return;
    };

    match state.phase() {
        Phase::DisplayingSuccess => {
            if let Some(card) = ResultCard::from_response(response, show_source_details) {
                card.render(out);
            }
        }
        Phase::DisplayingRefusal => panels::render_refusal(out, response),
        Phase::DisplayingNoMatch => panels::render_no_match(out, response),
        Phase::Idle | Phase::Submitting | Phase::DisplayingError => {}
    }
}
