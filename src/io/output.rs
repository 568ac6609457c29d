//! Report writers for discovered attributes

use crate::core::Attribute;
use colored::*;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_attributes(&mut self, attributes: &[Attribute]) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_attributes(&mut self, attributes: &[Attribute]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(attributes)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_module_header(&mut self, attribute: &Attribute) -> anyhow::Result<()> {
        match &attribute.source {
            Some(path) => writeln!(self.writer, "## `{}`", path.display())?,
            None => writeln!(self.writer, "## (in-memory module)")?,
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "| Name | Type | Value | Description |")?;
        writeln!(self.writer, "|------|------|-------|-------------|")?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_attributes(&mut self, attributes: &[Attribute]) -> anyhow::Result<()> {
        writeln!(self.writer, "# Module Attributes")?;
        writeln!(self.writer)?;

        let mut current_module: Option<&Attribute> = None;
        for attribute in attributes {
            let new_module = current_module
                .map(|prev| prev.source != attribute.source)
                .unwrap_or(true);
            if new_module {
                if current_module.is_some() {
                    writeln!(self.writer)?;
                }
                self.write_module_header(attribute)?;
                current_module = Some(attribute);
            }
            let type_name = attribute
                .type_
                .as_ref()
                .map(|t| t.to_string())
                .unwrap_or_else(|| "-".to_string());
            let description = attribute
                .comment
                .clone()
                .or_else(|| attribute.doc.as_ref().map(|d| d.replace('\n', " ")))
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                self.writer,
                "| `{}` | {} | `{}` | {} |",
                attribute.name, type_name, attribute.value, description
            )?;
        }
        Ok(())
    }
}

pub struct TerminalWriter;

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for TerminalWriter {
    fn write_attributes(&mut self, attributes: &[Attribute]) -> anyhow::Result<()> {
        if attributes.is_empty() {
            println!("No attributes found.");
            return Ok(());
        }

        let mut current_source: Option<Option<&std::path::PathBuf>> = None;
        for attribute in attributes {
            let source = attribute.source.as_ref();
            if current_source != Some(source) {
                let label = source
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(in-memory module)".to_string());
                println!("{}", label.bold());
                current_source = Some(source);
            }
            let type_name = attribute
                .type_
                .as_ref()
                .map(|t| format!(": {t}"))
                .unwrap_or_default();
            println!(
                "  {}{} = {}",
                attribute.name.cyan(),
                type_name.yellow(),
                attribute.value
            );
            if let Some(comment) = &attribute.comment {
                println!("    {}", comment.dimmed());
            }
            if let Some(doc) = &attribute.doc {
                for line in doc.lines() {
                    println!("    {}", line.dimmed());
                }
            }
        }
        println!();
        println!("{} attributes", attributes.len());
        Ok(())
    }
}

pub fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    }
}
