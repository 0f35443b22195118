//! Command-line entrypoint.
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "catalog_admin", version, about = "Admin dashboard for the retail catalog and sales pipeline")]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Create the user if needed and print a fresh session token
    IssueSession(IssueSessionArgs),
}

#[derive(Parser, Debug)]
pub struct IssueSessionArgs {
    /// Email of the administrator the session belongs to
    #[arg(long, value_name = "EMAIL")]
    pub email: String,
}
