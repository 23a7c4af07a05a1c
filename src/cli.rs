// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};

#[derive(Parser, Debug)]
#[command(
    name = "jiggly",
    about = "Keeps a workstation awake by nudging the pointer via an external worker",
    version,
    long_about = None,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (overrides auto-discovery)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v = debug, -vv = trace); logs go to stderr
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// MCP server commands
    Mcp {
        #[command(subcommand)]
        command: McpCommands,
    },
    /// Start a worker, keep it alive until Ctrl-C, then stop it
    Run {
        /// Seconds between jiggles (clamped to 5-300)
        #[arg(long, short = 'i')]
        interval: Option<i64>,
        /// Movement magnitude in pixels (clamped to 1-10)
        #[arg(long, short = 'o')]
        offset: Option<i64>,
    },
    /// Print the controller snapshot (state, bounds, platform deps) as JSON
    Info,
    /// Print the merged effective configuration
    ShowConfig,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum McpCommands {
    /// Serve the jigglypuff tools over stdio (line-delimited JSON-RPC)
    Serve {
        /// Comma-separated tool subset to expose (default: all)
        #[arg(long)]
        tools: Option<String>,
    },
}

pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "jiggly", &mut std::io::stdout());
}
