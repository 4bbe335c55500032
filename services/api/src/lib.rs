mod cli;
mod infra;
mod routes;
mod server;
mod terminal;

use faq_assistant::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
