use crate::server;
use crate::terminal::{run_ask, run_chat, run_screen};
use clap::{Args, Parser, Subcommand};
use faq_assistant::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Mutual Fund FAQ Assistant",
    about = "Serve the FAQ query proxy or ask it questions from the terminal",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP query proxy (default command)
    Serve(ServeArgs),
    /// Ask one question through a running proxy and print the outcome
    Ask(AskArgs),
    /// Interactive session against a running proxy
    Chat(ChatArgs),
    /// Run the PII screen locally and print the verdict as JSON
    Screen(ScreenArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the answering service base URL (FAQ_API_URL)
    #[arg(long)]
    pub(crate) upstream: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct AskArgs {
    /// Question to ask
    pub(crate) query: String,
    /// Proxy origin, defaults to the configured server address
    #[arg(long)]
    pub(crate) origin: Option<String>,
    /// Expand source details on answers
    #[arg(long)]
    pub(crate) details: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ChatArgs {
    /// Proxy origin, defaults to the configured server address
    #[arg(long)]
    pub(crate) origin: Option<String>,
    /// Allow the disclaimer banner to be dismissed for this session
    #[arg(long)]
    pub(crate) dismissible_disclaimer: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScreenArgs {
    /// Text to screen for personal identifiers
    pub(crate) text: String,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Ask(args) => run_ask(args).await,
        Command::Chat(args) => run_chat(args).await,
        Command::Screen(args) => run_screen(args),
    }
}
