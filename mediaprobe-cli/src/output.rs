//! Terminal output helpers.
//!
//! Formatting (`format_*`) is separated from printing so summaries can be
//! tested without capturing stdout.

use mediaprobe_core::{ChapterInfo, FormatInfo, StreamInfo, StreamKind, Tags};
use owo_colors::OwoColorize;
use std::fmt::Display;

/// Print a heading with colored styling and clear separation
pub fn print_heading(text: &str) {
    let line = "=".repeat(50);
    println!("{}", line.bright_blue());
    println!("{}", format!(" {text} ").bold().bright_white());
    println!("{}", line.bright_blue());
}

/// Print a section heading (smaller than main heading)
pub fn print_section(text: &str) {
    println!();
    println!("{}", format!(" {text} ").bold().white());
    println!("{}", "-".repeat(40).blue());
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{}: {}", label.bright_cyan(), value);
}

pub fn print_success(message: &str) {
    println!("{}", message.bright_green());
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".bright_red().bold(), message);
}

/// Seconds as `H:MM:SS.mmm`.
pub fn format_duration(secs: f64) -> String {
    let total_ms = (secs.max(0.0) * 1000.0).round() as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms / 60_000) % 60;
    let seconds = (total_ms / 1000) % 60;
    let millis = total_ms % 1000;
    format!("{hours}:{minutes:02}:{seconds:02}.{millis:03}")
}

/// Byte count with a binary unit suffix.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.2} {}", UNITS[unit])
    }
}

pub fn format_bit_rate(bps: u64) -> String {
    if bps >= 1_000_000 {
        format!("{:.2} Mb/s", bps as f64 / 1_000_000.0)
    } else {
        format!("{} kb/s", bps / 1000)
    }
}

/// Raw string unless empty; ffprobe's `N/A` is passed through.
fn or_unknown(value: &str) -> &str {
    if value.is_empty() { "unknown" } else { value }
}

/// Label/value rows describing the container.
pub fn format_rows(format: &FormatInfo) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("File", or_unknown(&format.filename).to_string()),
        (
            "Format",
            if format.format_long_name.is_empty() {
                or_unknown(&format.format_name).to_string()
            } else {
                format!("{} ({})", format.format_long_name, format.format_name)
            },
        ),
        (
            "Duration",
            format
                .duration_secs()
                .map(format_duration)
                .unwrap_or_else(|| or_unknown(&format.duration).to_string()),
        ),
        (
            "Size",
            format
                .size_bytes()
                .map(format_bytes)
                .unwrap_or_else(|| or_unknown(&format.size).to_string()),
        ),
        (
            "Bit rate",
            format
                .bit_rate_bps()
                .map(format_bit_rate)
                .unwrap_or_else(|| or_unknown(&format.bit_rate).to_string()),
        ),
        ("Streams", format.nb_streams.to_string()),
    ];
    if format.nb_programs > 0 {
        rows.push(("Programs", format.nb_programs.to_string()));
    }
    rows.push(("Probe score", format.probe_score.to_string()));
    rows
}

/// One-line description of a stream, e.g.
/// `#0 video: h264 (High) 1920x1080 24.000 fps 3.95 Mb/s [eng] {default}`.
pub fn stream_line(stream: &StreamInfo) -> String {
    let mut line = format!("#{} {}: {}", stream.index, stream.kind(), or_unknown(&stream.codec_name));
    if !stream.profile.is_empty() {
        line.push_str(&format!(" ({})", stream.profile));
    }
    if stream.kind() == StreamKind::Video && stream.width > 0 && stream.height > 0 {
        line.push_str(&format!(" {}x{}", stream.width, stream.height));
        if let Some(fps) = stream.avg_frame_rate_value().or_else(|| stream.frame_rate()) {
            line.push_str(&format!(" {fps:.3} fps"));
        }
    }
    if let Some(bps) = stream.bit_rate_bps() {
        line.push_str(&format!(" {}", format_bit_rate(bps)));
    }
    if let Some(lang) = stream.language() {
        line.push_str(&format!(" [{lang}]"));
    }
    if let Some(disposition) = &stream.disposition {
        let flags = disposition.active_flags();
        if !flags.is_empty() {
            line.push_str(&format!(" {{{}}}", flags.join(", ")));
        }
    }
    line
}

pub fn chapter_line(chapter: &ChapterInfo) -> String {
    format!(
        "#{} {} - {}{}",
        chapter.id,
        or_unknown(&chapter.start_time),
        or_unknown(&chapter.end_time),
        chapter.title().map(|t| format!(" {t}")).unwrap_or_default()
    )
}

/// Non-empty tags as sorted key/value pairs, using ffprobe's key names.
pub fn tag_rows(tags: &Tags) -> Vec<(String, String)> {
    let known = [
        "title",
        "artist",
        "album",
        "track",
        "comment",
        "genre",
        "date",
        "major_brand",
        "major_version",
        "compatible_brands",
        "creation_time",
        "language",
        "handler_name",
    ];
    let mut rows: Vec<(String, String)> = known
        .into_iter()
        .chain(tags.extra.keys().map(String::as_str))
        .filter_map(|key| tags.get(key).map(|value| (key.to_string(), value)))
        .collect();
    rows.sort();
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediaprobe_core::Disposition;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "0:00:00.000");
        assert_eq!(format_duration(600.0), "0:10:00.000");
        assert_eq!(format_duration(3725.5), "1:02:05.500");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1536), "1.50 KiB");
        assert_eq!(format_bytes(299_823_672), "285.93 MiB");
    }

    #[test]
    fn test_format_bit_rate() {
        assert_eq!(format_bit_rate(160_002), "160 kb/s");
        assert_eq!(format_bit_rate(3_946_359), "3.95 Mb/s");
    }

    #[test]
    fn test_stream_line_video() {
        let stream = StreamInfo {
            index: 0,
            codec_type: "video".into(),
            codec_name: "h264".into(),
            profile: "High".into(),
            width: 1920,
            height: 1080,
            avg_frame_rate: "24000/1001".into(),
            bit_rate: "N/A".into(),
            disposition: Some(Disposition {
                default: 1,
                forced: 1,
                ..Default::default()
            }),
            tags: Some(Tags {
                language: "eng".into(),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            stream_line(&stream),
            "#0 video: h264 (High) 1920x1080 23.976 fps [eng] {default, forced}"
        );
    }

    #[test]
    fn test_stream_line_minimal() {
        let stream = StreamInfo {
            index: 3,
            codec_type: "data".into(),
            ..Default::default()
        };
        assert_eq!(stream_line(&stream), "#3 data: unknown");
    }

    #[test]
    fn test_format_rows_fall_back_to_raw_values() {
        let format = FormatInfo {
            filename: "live.ts".into(),
            format_name: "mpegts".into(),
            duration: "N/A".into(),
            ..Default::default()
        };
        let rows = format_rows(&format);
        assert!(rows.contains(&("Format", "mpegts".to_string())));
        assert!(rows.contains(&("Duration", "N/A".to_string())));
        assert!(rows.contains(&("Size", "unknown".to_string())));
        assert!(!rows.iter().any(|(label, _)| *label == "Programs"));
    }

    #[test]
    fn test_tag_rows_skip_empty_and_include_extra() {
        let tags: Tags =
            serde_json::from_str(r#"{"title": "Clip", "major_version": "512", "ENCODER": "Lavf", "BPS": null}"#).unwrap();
        assert_eq!(
            tag_rows(&tags),
            vec![
                ("ENCODER".to_string(), "Lavf".to_string()),
                ("major_version".to_string(), "512".to_string()),
                ("title".to_string(), "Clip".to_string()),
            ]
        );
    }

    #[test]
    fn test_chapter_line() {
        let chapter: ChapterInfo = serde_json::from_str(
            r#"{"id": 1, "start_time": "300.000000", "end_time": "600.000000", "tags": {"title": "Finale"}}"#,
        )
        .unwrap();
        assert_eq!(chapter_line(&chapter), "#1 300.000000 - 600.000000 Finale");
    }
}
