//! CLI module for the gym portal
//!
//! Provides subcommands for the two ways this binary runs:
//! - `serve`: the HTTP API server
//! - `admin`: the interactive member administration console

pub mod admin;
pub mod serve;

use clap::{Parser, Subcommand};

/// Gym membership portal
#[derive(Parser)]
#[command(name = "gym-portal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Run the interactive member administration console
    Admin,
}
