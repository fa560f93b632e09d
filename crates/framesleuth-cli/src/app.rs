/// One invocation of `lss`: detect, render, pick an exit code.
use crate::args::{Args, OutputFormat};
use crate::render::{self, Listing, RenderOptions};
use anyhow::Result;
use framesleuth_core::analysis::summarise;
use framesleuth_core::{get_sequences_many, DetectOptions, Source};
use std::io::Write;
use tracing::debug;

/// Run the listing for every path in `args`, writing results to `out`.
///
/// Returns the process exit code: 0 when every path was listed, otherwise
/// the highest [`exit_code`](framesleuth_core::SourceError::exit_code) among
/// the failures. Failed paths are logged by the core and skipped in the
/// output; only write errors abort the run.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<i32> {
    let options = DetectOptions::new().with_trace_comparisons(args.debug);
    let render_options = RenderOptions {
        format: args.format,
        show_missing: args.missing,
    };

    let sources: Vec<Source> = args.paths.iter().cloned().map(Source::from).collect();
    debug!("Listing {} source(s)", sources.len());

    let results = get_sequences_many(&sources, &options);

    let mut exit_code = 0;
    let mut listed = Vec::with_capacity(results.len());
    for (source, result) in sources.iter().zip(results) {
        match result {
            Ok(sequences) => listed.push((source.label(), summarise(&sequences))),
            Err(err) => exit_code = exit_code.max(err.exit_code()),
        }
    }

    let multiple = sources.len() > 1;
    let listings: Vec<Listing<'_>> = listed
        .iter()
        .map(|(path, summaries)| Listing {
            path: path.clone(),
            sequences: summaries,
        })
        .collect();

    match args.format {
        OutputFormat::Csv => render::write_csv(out, &listings)?,
        OutputFormat::Json if multiple => render::write_json_listings(out, &listings)?,
        _ => {
            for (i, listing) in listings.iter().enumerate() {
                if multiple {
                    if i > 0 {
                        writeln!(out)?;
                    }
                    writeln!(out, "{}:", listing.path)?;
                }
                render::write_summaries(out, listing.sequences, render_options)?;
            }
        }
    }

    out.flush()?;
    Ok(exit_code)
}
