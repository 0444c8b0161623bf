//! CLI command structure using clap

use clap::{Args, Parser, Subcommand};
use htmlify_core::config::{ConfigOverrides, EnvDir};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "htmlify")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print extra progress and enable info-level logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (default: htmlify.config.json in the current directory)
    #[arg(long, global = true, value_name = "PATH", env = "HTMLIFY_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile every top-level document once (default)
    Build {
        /// Output the build report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compile, then recompile whenever a source file changes
    Watch,
}

/// Settings that override the config file
#[derive(Args, Default)]
pub struct SettingsArgs {
    /// Directory containing documents and fragments
    #[arg(long, global = true, value_name = "DIR")]
    pub target_dir: Option<PathBuf>,

    /// Directory compiled documents are written to
    #[arg(long, global = true, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Extension of documents and fragments (e.g. "comp")
    #[arg(long, global = true, value_name = "EXT")]
    pub input_ext: Option<String>,

    /// Extension of compiled documents (e.g. "html")
    #[arg(long, global = true, value_name = "EXT")]
    pub output_ext: Option<String>,

    /// Resolve @env directives from the process environment
    #[arg(long, global = true)]
    pub env: bool,

    /// Dotenv file (or directory containing .env) to load; implies --env
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,
}

impl SettingsArgs {
    pub fn overrides(&self, watch: Option<bool>) -> ConfigOverrides {
        let env_dir = match (&self.env_file, self.env) {
            (Some(path), _) => Some(EnvDir::Path(path.clone())),
            (None, true) => Some(EnvDir::Flag(true)),
            (None, false) => None,
        };

        ConfigOverrides {
            target_dir: self.target_dir.clone(),
            out_dir: self.out_dir.clone(),
            watch,
            input_extension: self.input_ext.clone(),
            output_extension: self.output_ext.clone(),
            env_dir,
        }
    }
}
