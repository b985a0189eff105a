// Command-line interface

pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "contact-form")]
#[command(about = "Contact form handler - validates and sanitizes submissions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, env = "HOST")]
        host: Option<String>,
    },

    /// Validate a submission locally and print the response the server would send
    Check {
        /// Sender name
        #[arg(long, default_value = "")]
        name: String,

        /// Sender email address
        #[arg(long, default_value = "")]
        email: String,

        /// Message body
        #[arg(long, default_value = "")]
        message: String,
    },
}
