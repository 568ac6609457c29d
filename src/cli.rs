use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "attrscan")]
#[command(about = "Module attribute discovery and documentation extraction", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a module or package tree for documented attributes
    Scan {
        /// Module file or package directory to scan
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Scan modules whose own name starts with an underscore
        #[arg(long)]
        private_modules: bool,

        /// Include attributes whose own name starts with an underscore
        #[arg(long)]
        include_privates: bool,

        /// Only report attributes of this type (int, float, str, bool, list, tuple, dict)
        #[arg(long)]
        signature: Option<String>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn scan_parses_flags() {
        let cli = Cli::parse_from([
            "attrscan",
            "scan",
            "pkg",
            "--include-privates",
            "--signature",
            "int",
            "--format",
            "json",
        ]);
        match cli.command {
            Commands::Scan {
                path,
                format,
                include_privates,
                private_modules,
                signature,
                ..
            } => {
                assert_eq!(path, PathBuf::from("pkg"));
                assert_eq!(format, OutputFormat::Json);
                assert!(include_privates);
                assert!(!private_modules);
                assert_eq!(signature.as_deref(), Some("int"));
            }
        }
    }
}
