use anyhow::Result;
use attrscan::cli::{Cli, Commands};
use attrscan::core::TypeSig;
use attrscan::discover::Discovery;
use attrscan::io::output::{JsonWriter, MarkdownWriter, OutputWriter};
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            path,
            format,
            output,
            private_modules,
            include_privates,
            signature,
        } => handle_scan(
            path,
            format,
            output,
            private_modules,
            include_privates,
            signature,
        ),
    }
}

fn handle_scan(
    path: PathBuf,
    format: attrscan::cli::OutputFormat,
    output: Option<PathBuf>,
    private_modules: bool,
    include_privates: bool,
    signature: Option<String>,
) -> Result<()> {
    let mut discovery = Discovery::new()
        .in_private_modules(private_modules)
        .include_privates(include_privates);
    if let Some(signature) = signature {
        discovery = discovery.with_signature(TypeSig::parse(&signature));
    }

    let attributes = discovery.discover(path)?;

    let format = attrscan::io::OutputFormat::from(format);
    match output {
        Some(output_path) => {
            let file = File::create(output_path)?;
            let mut writer: Box<dyn OutputWriter> = match format {
                attrscan::io::OutputFormat::Json => Box::new(JsonWriter::new(file)),
                _ => Box::new(MarkdownWriter::new(file)),
            };
            writer.write_attributes(&attributes)
        }
        None => attrscan::io::create_writer(format).write_attributes(&attributes),
    }
}
