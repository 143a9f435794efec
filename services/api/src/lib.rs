mod cli;
mod console;
mod infra;
mod routes;
mod server;

use campus_eligibility::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
