//! Terminal presentation of the assistant: a one-shot `ask` and an interactive `chat` loop,
//! both talking to the query proxy through `AnswerClient`.

use crate::cli::{AskArgs, ChatArgs, ScreenArgs};
use chrono::{Datelike, Local};
use faq_assistant::client::{AnswerClient, AnswerService};
use faq_assistant::config::AppConfig;
use faq_assistant::display::{
    example, prepare_submission, render_outcome, render_page, Disclaimer, PageView, UiIntent,
    HELP_TEXT,
};
use faq_assistant::error::AppError;
use faq_assistant::pii;
use faq_assistant::shell::{Shell, ShellState};
use faq_assistant::telemetry;
use std::fmt::Write as _;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};

const PROMPT: &str = "ask> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Render,
    Help,
    Quit,
}

/// Page-local UI state around a `Shell`.
pub(crate) struct Session<S> {
    shell: Shell<S>,
    disclaimer: Disclaimer,
    show_source_details: bool,
}

impl<S> Session<S>
where
    S: AnswerService,
{
    pub(crate) fn new(service: S, disclaimer: Disclaimer) -> Self {
        Self {
            shell: Shell::new(service),
            disclaimer,
            show_source_details: false,
        }
    }

    pub(crate) fn state(&self) -> &ShellState {
        self.shell.state()
    }

    pub(crate) async fn handle(&mut self, intent: UiIntent) -> Flow {
        match intent {
            UiIntent::Submit(raw) => {
                if let Some(query) = prepare_submission(&raw, self.state().is_loading()) {
                    self.submit(query).await;
                }
                Flow::Render
            }
            // Examples bypass the query box guard and go straight to the shell.
            UiIntent::Example(number) => {
                if let Some(question) = example(number) {
                    self.submit(question.to_string()).await;
                }
                Flow::Render
            }
            UiIntent::ToggleDetails => {
                self.show_source_details = !self.show_source_details;
                Flow::Render
            }
            UiIntent::DismissDisclaimer => {
                if !self.disclaimer.dismiss() {
                    debug!("disclaimer is not dismissible");
                }
                Flow::Render
            }
            UiIntent::Help => Flow::Help,
            UiIntent::Quit => Flow::Quit,
        }
    }

    async fn submit(&mut self, query: String) {
        self.show_source_details = false;
        self.shell.submit(query).await;
    }

    pub(crate) fn page(&self, year: i32) -> String {
        render_page(&PageView {
            state: self.shell.state(),
            disclaimer: &self.disclaimer,
            show_source_details: self.show_source_details,
            year,
        })
    }

    /// Outcome block only, used by one-shot `ask`.
    pub(crate) fn outcome(&self, show_source_details: bool) -> String {
        let state = self.shell.state();
        let mut out = String::new();
        if let Some(error) = state.error() {
            let _ = writeln!(out, "! {error}");
        }
        render_outcome(&mut out, state, show_source_details);
        out
    }
}

fn resolve_origin(origin: Option<String>) -> Result<String, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(origin.unwrap_or_else(|| config.server.origin()))
}

fn current_year() -> i32 {
    Local::now().year()
}

pub(crate) async fn run_ask(args: AskArgs) -> Result<(), AppError> {
    let origin = resolve_origin(args.origin)?;
    let client = AnswerClient::new(&origin)?;
    info!(endpoint = client.endpoint(), "asking faq proxy");

    let mut session = Session::new(client, Disclaimer::default());
    session.handle(UiIntent::Submit(args.query)).await;

    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(session.outcome(args.details).as_bytes())
        .await?;
    stdout.flush().await?;
    Ok(())
}

pub(crate) async fn run_chat(args: ChatArgs) -> Result<(), AppError> {
    let origin = resolve_origin(args.origin)?;
    let client = AnswerClient::new(&origin)?;
    info!(endpoint = client.endpoint(), "starting chat session");

    let mut session = Session::new(client, Disclaimer::new(args.dismissible_disclaimer));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    stdout
        .write_all(session.page(current_year()).as_bytes())
        .await?;

    loop {
        stdout.write_all(PROMPT.as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let intent = UiIntent::parse(&line);
        if matches!(intent, UiIntent::Submit(_) | UiIntent::Example(_)) {
            stdout.write_all(b"Loading...\n").await?;
            stdout.flush().await?;
        }

        match session.handle(intent).await {
            Flow::Render => {
                stdout
                    .write_all(session.page(current_year()).as_bytes())
                    .await?;
            }
            Flow::Help => {
                stdout.write_all(HELP_TEXT.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
            }
            Flow::Quit => break,
        }
    }

    stdout.flush().await?;
    Ok(())
}

pub(crate) fn run_screen(args: ScreenArgs) -> Result<(), AppError> {
    let verdict = pii::detect(&args.text);
    println!("{}", serde_json::to_string_pretty(&verdict)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use faq_assistant::client::AnswerError;
    use faq_assistant::display::EXAMPLE_QUESTIONS;
    use faq_assistant::response::FaqResponse;
    use faq_assistant::shell::Phase;
    use std::sync::Mutex;

    #[derive(Default)]
    struct ScriptedService {
        asked: Mutex<Vec<String>>,
    }

    impl ScriptedService {
        fn asked(&self) -> Vec<String> {
            self.asked.lock().expect("lock").clone()
        }
    }

    impl AnswerService for ScriptedService {
        async fn answer(&self, query: &str) -> Result<FaqResponse, AnswerError> {
            self.asked.lock().expect("lock").push(query.to_string());
            Ok(FaqResponse::success(
                "The minimum SIP amount is Rs 500.",
                "https://www.sbimf.com/sip",
                "2025-01-15",
            ))
        }
    }

    fn session() -> Session<ScriptedService> {
        Session::new(ScriptedService::default(), Disclaimer::new(true))
    }

    #[tokio::test]
    async fn blank_input_is_not_submitted() {
        let mut session = session();
        assert_eq!(session.handle(UiIntent::Submit("   ".into())).await, Flow::Render);
        assert!(session.shell.service().asked().is_empty());
        assert_eq!(session.state().phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn submitted_query_is_trimmed() {
        let mut session = session();
        session
            .handle(UiIntent::Submit("  What is the minimum SIP?  ".into()))
            .await;
        assert_eq!(session.shell.service().asked(), vec!["What is the minimum SIP?"]);
        assert_eq!(session.state().phase(), Phase::DisplayingSuccess);
    }

    #[tokio::test]
    async fn example_submits_its_question() {
        let mut session = session();
        session.handle(UiIntent::Example(2)).await;
        assert_eq!(session.shell.service().asked(), vec![EXAMPLE_QUESTIONS[1]]);
        assert_eq!(session.state().query(), EXAMPLE_QUESTIONS[1]);
    }

    #[tokio::test]
    async fn details_toggle_resets_on_new_submission() {
        let mut session = session();
        session.handle(UiIntent::Submit("What is the minimum SIP?".into())).await;
        session.handle(UiIntent::ToggleDetails).await;
        assert!(session.page(2026).contains("Source URL: https://www.sbimf.com/sip"));

        session.handle(UiIntent::Submit("And for ELSS?".into())).await;
        assert!(!session.page(2026).contains("Source URL:"));
    }

    #[tokio::test]
    async fn dismissing_hides_disclaimer() {
        let mut session = session();
        assert!(session.page(2026).contains("Facts-only. No investment advice."));
        session.handle(UiIntent::DismissDisclaimer).await;
        assert!(!session.disclaimer.is_visible());
    }

    #[tokio::test]
    async fn flagged_query_shows_error_in_outcome() {
        let mut session = session();
        session.handle(UiIntent::Submit("PAN ABCDE1234F".into())).await;
        assert!(session.shell.service().asked().is_empty());
        assert!(session
            .outcome(false)
            .starts_with("! Personal information detected: PAN."));
    }

    #[tokio::test]
    async fn help_and_quit_do_not_touch_state() {
        let mut session = session();
        assert_eq!(session.handle(UiIntent::Help).await, Flow::Help);
        assert_eq!(session.handle(UiIntent::Quit).await, Flow::Quit);
        assert_eq!(session.state().phase(), Phase::Idle);
    }
}
