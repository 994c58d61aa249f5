//! Command-line interface implementation for Stencil.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for Stencil.
#[derive(Parser, Debug)]
#[command(
    name = "stencil",
    version,
    about = "Stencil: C++ class scaffolding tool",
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Path to the settings file; found next to the working or executable
    /// directory when omitted
    #[arg(short, long, global = true, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Make a profile from the settings file the default for later runs
    #[command(visible_alias = "sp")]
    SetProfile {
        /// Profile name as declared in the settings file
        #[arg(short, long, value_name = "NAME")]
        profile: String,
    },

    /// Generate a header/implementation pair from the class templates
    #[command(visible_alias = "nc")]
    NewClass {
        /// Class name; the file stem is its snake_case form
        #[arg(short, long, value_name = "NAME")]
        class: String,

        /// Use this profile instead of the default one, for this run only
        #[arg(short, long, value_name = "NAME")]
        profile: Option<String>,

        /// Directory for the header file, under the profile's root path
        #[arg(long, value_name = "DIR")]
        header: Option<PathBuf>,

        /// Directory for the implementation file; defaults to the header
        /// directory
        #[arg(long, value_name = "DIR")]
        cpp: Option<PathBuf>,

        /// Overwrite existing files without asking for confirmation
        #[arg(short, long)]
        force: bool,

        /// Resolve placeholders in one scan; substituted values are never
        /// rescanned for further markers
        #[arg(long)]
        single_pass: bool,
    },
}

/// Parses command line arguments and returns the Cli structure.
///
/// # Returns
/// * `Cli` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Cli {
    match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Cli::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
