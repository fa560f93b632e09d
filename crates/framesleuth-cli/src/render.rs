/// Text rendering of sequence summaries — plain lines, JSON or CSV.
use crate::args::OutputFormat;
use anyhow::Result;
use framesleuth_core::SequenceSummary;
use serde::Serialize;
use std::io::Write;

/// Rendering switches taken from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub show_missing: bool,
}

/// Sequences found in one source, tagged with where they came from.
#[derive(Debug, Serialize)]
pub struct Listing<'a> {
    pub path: String,
    pub sequences: &'a [SequenceSummary],
}

/// One CSV record. Frame lists are flattened to compressed ranges.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    path: &'a str,
    length: usize,
    head: &'a str,
    padding: String,
    tail: &'a str,
    frame_range: &'a str,
    missing: &'a str,
}

/// `"   7 bm3k.%04d.jpg\t1-3 5-6 9-10"`.
pub fn plain_line(summary: &SequenceSummary, show_missing: bool) -> String {
    let mut line = format!(
        "{:>4} {}{}",
        summary.length,
        summary.pattern(),
        summary.spacing
    );
    line.push_str(&summary.frame_range);
    if show_missing && !summary.missing_range.is_empty() {
        line.push_str(&format!(" [missing {}]", summary.missing_range));
    }
    line
}

/// Write the summaries of a single source.
pub fn write_summaries<W: Write>(
    out: &mut W,
    summaries: &[SequenceSummary],
    options: RenderOptions,
) -> Result<()> {
    match options.format {
        OutputFormat::Plain => {
            for summary in summaries {
                writeln!(out, "{}", plain_line(summary, options.show_missing))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, summaries)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let listing = Listing {
                path: String::new(),
                sequences: summaries,
            };
            write_csv(out, &[listing])?;
        }
    }
    Ok(())
}

/// Write every listing into a single CSV table with a leading `path` column.
pub fn write_csv<W: Write>(out: &mut W, listings: &[Listing<'_>]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(&mut *out);
    for listing in listings {
        for summary in listing.sequences {
            writer.serialize(CsvRow {
                path: &listing.path,
                length: summary.length,
                head: &summary.head,
                padding: summary.padding.to_string(),
                tail: &summary.tail,
                frame_range: &summary.frame_range,
                missing: &summary.missing_range,
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Write several listings as one JSON array of `{path, sequences}`.
pub fn write_json_listings<W: Write>(out: &mut W, listings: &[Listing<'_>]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, listings)?;
    writeln!(out)?;
    Ok(())
}
