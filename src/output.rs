use crate::{CrawlerError, Item};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One title per line, blank when the title is missing.
    #[default]
    Plain,
    /// One JSON object per line.
    Json,
}

pub(crate) fn emit<W, D>(out: &mut W, format: OutputFormat, detail: &D) -> Result<(), CrawlerError>
where
    W: Write,
    D: Item + Serialize,
{
    match format {
        OutputFormat::Plain => writeln!(out, "{}", detail.title().unwrap_or_default())?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, detail)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
