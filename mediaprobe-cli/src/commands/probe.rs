use log::{debug, info};
use mediaprobe_core::{ProbeResult, ProcessRunner, Prober};

use crate::cli::ProbeArgs;
use crate::error::{CliErrorContext, CliResult};
use crate::output::{
    chapter_line, format_rows, print_heading, print_info, print_section, stream_line, tag_rows,
};

/// Execute the probe command
pub fn run_probe<R: ProcessRunner>(prober: &Prober<R>, args: &ProbeArgs) -> CliResult<()> {
    debug!("Probing {}", args.input.display());
    let result = prober.probe(&args.input)?;

    if args.json {
        println!("{}", render_json(&result, args.compact)?);
    } else {
        info!("Probed {} stream(s)", result.streams.len());
        print_summary(&result);
    }
    Ok(())
}

/// Serialises the decoded model.
pub fn render_json(result: &ProbeResult, compact: bool) -> CliResult<String> {
    let rendered = if compact {
        serde_json::to_string(result)
    } else {
        serde_json::to_string_pretty(result)
    };
    rendered.cli_context("Failed to serialize probe result")
}

fn print_summary(result: &ProbeResult) {
    print_heading("Media Information");
    for (label, value) in format_rows(&result.format) {
        print_info(label, value);
    }

    let format_tags = tag_rows(&result.format.tags);
    if !format_tags.is_empty() {
        print_section("Tags");
        for (key, value) in format_tags {
            print_info(&key, value);
        }
    }

    print_section("Streams");
    if result.streams.is_empty() {
        println!("(none)");
    }
    for stream in &result.streams {
        println!("{}", stream_line(stream));
        if let Some(title) = stream.tags.as_ref().and_then(|t| t.get("title")) {
            println!("    title: {title}");
        }
    }

    if !result.chapters.is_empty() {
        print_section(&format!("Chapters ({})", result.chapters.len()));
        for chapter in &result.chapters {
            println!("{}", chapter_line(chapter));
        }
    }
}
