use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Print the URLs a key can be fetched from.
    GetPaths {
        key: String,
        /// Do not let the tracker verify the paths.
        #[arg(long)]
        noverify: bool,
    },
    /// Rename a key.
    Rename {
        from: String,
        to: String,
    },
    /// Delete a key.
    Delete {
        key: String,
    },
    /// Print everything the tracker knows about a key.
    Debug {
        key: String,
    },
    /// Send any tracker command with `key=value` arguments.
    Raw {
        command: String,
        args: Vec<String>,
    },
}
