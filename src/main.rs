use crate::cli::{Command, IssueSessionArgs, RootArgs};
use crate::config::Config;
use crate::db::connection::{init_db, Database};
use crate::responses::error_to_response;
use crate::router::{handle, AppState};
use astra::Server;
use clap::Parser;

mod auth;
mod cli;
mod config;
mod db;
mod domain;
mod errors;
mod lfpe;
mod navigation;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn main() -> Result<(), BoxError> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_admin=info".into()),
        )
        .init();

    let args = RootArgs::parse();
    let config = Config::from_env()?;

    let db = Database::new(config.database_path.clone());
    init_db(&db)?;

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(db, config),
        Command::IssueSession(args) => issue_session(&db, &args),
    }
}

fn serve(db: Database, config: Config) -> Result<(), BoxError> {
    let addr = config.bind_addr;
    let server = Server::bind(&addr).max_workers(config.max_workers);
    let state = AppState::new(db, config);

    tracing::info!("Starting server at http://{addr}");

    server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    })?;

    tracing::info!("Server shut down cleanly.");
    Ok(())
}

/// Stand-in for the external identity provider: mints a `session` cookie value.
fn issue_session(db: &Database, args: &IssueSessionArgs) -> Result<(), BoxError> {
    let token = db.with_conn(|conn| -> Result<String, errors::ServerError> {
        let now = db::now_unix();
        let email = db::users::normalize_email(&args.email)?;
        let user_id = db::users::get_or_create_user(conn, &email, now)?;
        auth::sessions::create_session(conn, user_id, now)
    })?;

    tracing::info!(email = %args.email, "session issued");
    println!("{token}");
    Ok(())
}
