//! Typed records for ffprobe's JSON output.
//!
//! Field names follow ffprobe's keys exactly. Scalars missing from the JSON
//! decode as zero values; nested records on streams are optional. The
//! container-level [`FormatInfo`] and its [`Tags`] are always present after a
//! decode, substituted with empty records when ffprobe omits them.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Value ffprobe prints for fields it could not determine.
const NOT_AVAILABLE: &str = "N/A";

/// Decoded ffprobe output for one media file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeResult {
    /// Streams in the order ffprobe emitted them
    #[serde(deserialize_with = "null_as_default")]
    pub streams: Vec<StreamInfo>,

    #[serde(deserialize_with = "null_as_default")]
    pub chapters: Vec<ChapterInfo>,

    /// Container-level information, never absent
    #[serde(deserialize_with = "null_as_default")]
    pub format: FormatInfo,

    /// Error section, present when ffprobe reported one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ProbeErrorInfo>,
}

impl ProbeResult {
    /// Streams of the given kind, in source order.
    pub fn streams_of(&self, kind: StreamKind) -> impl Iterator<Item = &StreamInfo> {
        self.streams.iter().filter(move |s| s.kind() == kind)
    }

    pub fn video_streams(&self) -> Vec<&StreamInfo> {
        self.streams_of(StreamKind::Video).collect()
    }

    pub fn audio_streams(&self) -> Vec<&StreamInfo> {
        self.streams_of(StreamKind::Audio).collect()
    }

    pub fn subtitle_streams(&self) -> Vec<&StreamInfo> {
        self.streams_of(StreamKind::Subtitle).collect()
    }

    /// First video stream that is not an attached picture (cover art).
    pub fn primary_video_stream(&self) -> Option<&StreamInfo> {
        self.streams_of(StreamKind::Video).find(|s| {
            s.disposition
                .as_ref()
                .is_none_or(|d| d.attached_pic == 0)
        })
    }
}

/// Broad category of a stream, derived from `codec_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamKind {
    Video,
    Audio,
    Subtitle,
    Data,
    Attachment,
    Unknown,
}

impl From<&str> for StreamKind {
    fn from(s: &str) -> Self {
        match s {
            "video" => StreamKind::Video,
            "audio" => StreamKind::Audio,
            "subtitle" => StreamKind::Subtitle,
            "data" => StreamKind::Data,
            "attachment" => StreamKind::Attachment,
            _ => StreamKind::Unknown,
        }
    }
}

impl std::fmt::Display for StreamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StreamKind::Video => "video",
            StreamKind::Audio => "audio",
            StreamKind::Subtitle => "subtitle",
            StreamKind::Data => "data",
            StreamKind::Attachment => "attachment",
            StreamKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// One elementary stream inside the container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamInfo {
    pub index: i64,
    pub codec_name: String,
    pub codec_long_name: String,
    pub profile: String,
    pub codec_type: String,
    pub codec_time_base: String,
    pub codec_tag_string: String,
    pub codec_tag: String,
    pub width: i64,
    pub height: i64,
    pub codec_width: i64,
    pub codec_height: i64,
    pub has_b_frames: i64,
    pub sample_aspect_ratio: String,
    pub display_aspect_ratio: String,
    pub pix_fmt: String,
    pub level: i64,
    pub color_range: String,
    pub color_space: String,
    pub color_transfer: String,
    pub color_primaries: String,
    pub chroma_location: String,
    pub refs: i64,
    pub is_avc: String,
    pub nal_length_size: String,
    /// Real base frame rate as a rational string, e.g. `"24000/1001"`
    pub r_frame_rate: String,
    pub avg_frame_rate: String,
    pub time_base: String,
    pub start_pts: i64,
    pub start_time: String,
    pub duration_ts: i64,
    pub duration: String,
    /// Bits per second, or `"N/A"`
    pub bit_rate: String,
    pub bits_per_raw_sample: String,
    pub nb_frames: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposition: Option<Disposition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

impl StreamInfo {
    pub fn kind(&self) -> StreamKind {
        StreamKind::from(self.codec_type.as_str())
    }

    /// `r_frame_rate` as frames per second.
    pub fn frame_rate(&self) -> Option<f64> {
        parse_rational(&self.r_frame_rate)
    }

    /// `avg_frame_rate` as frames per second.
    pub fn avg_frame_rate_value(&self) -> Option<f64> {
        parse_rational(&self.avg_frame_rate)
    }

    pub fn bit_rate_bps(&self) -> Option<u64> {
        parse_reported(&self.bit_rate)
    }

    pub fn duration_secs(&self) -> Option<f64> {
        parse_reported(&self.duration)
    }

    /// Language tag, when the stream carries one.
    pub fn language(&self) -> Option<&str> {
        self.tags
            .as_ref()
            .map(|t| t.language.as_str())
            .filter(|l| !l.is_empty())
    }
}

/// Role flags of a stream. Each flag is `0` or `1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Disposition {
    pub default: i32,
    pub dub: i32,
    pub original: i32,
    pub comment: i32,
    pub lyrics: i32,
    pub karaoke: i32,
    pub forced: i32,
    pub hearing_impaired: i32,
    pub visual_impaired: i32,
    pub clean_effects: i32,
    pub attached_pic: i32,
    pub timed_thumbnails: i32,
}

impl Disposition {
    /// Names of the flags that are set, in declaration order.
    pub fn active_flags(&self) -> Vec<&'static str> {
        [
            ("default", self.default),
            ("dub", self.dub),
            ("original", self.original),
            ("comment", self.comment),
            ("lyrics", self.lyrics),
            ("karaoke", self.karaoke),
            ("forced", self.forced),
            ("hearing_impaired", self.hearing_impaired),
            ("visual_impaired", self.visual_impaired),
            ("clean_effects", self.clean_effects),
            ("attached_pic", self.attached_pic),
            ("timed_thumbnails", self.timed_thumbnails),
        ]
        .into_iter()
        .filter(|(_, v)| *v != 0)
        .map(|(name, _)| name)
        .collect()
    }
}

/// Descriptive metadata attached to a stream, chapter or the container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tags {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub track: String,
    pub comment: String,
    pub genre: String,
    /// Usually the year
    pub date: String,
    pub major_brand: String,
    #[serde(rename = "major_version")]
    pub minor_version: String,
    pub compatible_brands: String,
    pub creation_time: String,
    pub language: String,
    pub handler_name: String,
    /// Tags without a dedicated field (e.g. Matroska's `ENCODER`, `DURATION`)
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Tags {
    /// Looks up a tag by key, checking dedicated fields before `extra`.
    /// Empty values count as absent.
    pub fn get(&self, key: &str) -> Option<String> {
        let known = match key {
            "title" => Some(&self.title),
            "artist" => Some(&self.artist),
            "album" => Some(&self.album),
            "track" => Some(&self.track),
            "comment" => Some(&self.comment),
            "genre" => Some(&self.genre),
            "date" => Some(&self.date),
            "major_brand" => Some(&self.major_brand),
            "major_version" => Some(&self.minor_version),
            "compatible_brands" => Some(&self.compatible_brands),
            "creation_time" => Some(&self.creation_time),
            "language" => Some(&self.language),
            "handler_name" => Some(&self.handler_name),
            _ => None,
        };
        match known {
            Some(value) => Some(value.clone()).filter(|v| !v.is_empty()),
            None => self.extra.get(key).and_then(|v| match v {
                serde_json::Value::Null => None,
                serde_json::Value::String(s) => Some(s.clone()),
                other => Some(other.to_string()),
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Tags::default()
    }
}

/// The container as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatInfo {
    pub filename: String,
    pub nb_streams: i64,
    pub nb_programs: i64,
    /// Comma-separated demuxer names, e.g. `"mov,mp4,m4a,3gp,3g2,mj2"`
    pub format_name: String,
    pub format_long_name: String,
    pub start_time: String,
    /// Seconds, or `"N/A"`
    pub duration: String,
    /// Bytes, or `"N/A"`
    pub size: String,
    pub bit_rate: String,
    pub probe_score: i64,
    /// Never absent, empty when ffprobe reported no tags
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Tags,
}

impl FormatInfo {
    pub fn duration_secs(&self) -> Option<f64> {
        parse_reported(&self.duration)
    }

    pub fn size_bytes(&self) -> Option<u64> {
        parse_reported(&self.size)
    }

    pub fn bit_rate_bps(&self) -> Option<u64> {
        parse_reported(&self.bit_rate)
    }

    /// Individual demuxer names from `format_name`.
    pub fn format_names(&self) -> impl Iterator<Item = &str> {
        self.format_name.split(',').filter(|n| !n.is_empty())
    }
}

/// A chapter marker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChapterInfo {
    pub id: i64,
    pub time_base: String,
    pub start: i64,
    pub start_time: String,
    pub end: i64,
    pub end_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

impl ChapterInfo {
    pub fn title(&self) -> Option<&str> {
        self.tags
            .as_ref()
            .map(|t| t.title.as_str())
            .filter(|t| !t.is_empty())
    }
}

/// ffprobe's `error` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeErrorInfo {
    /// Negative errno-style code, e.g. `-2` for a missing file
    pub code: i64,
    pub string: String,
}

impl std::fmt::Display for ProbeErrorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (code {})", self.string, self.code)
    }
}

/// Treats an explicit JSON `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parses a numeric field that ffprobe may report as `"N/A"` or leave empty.
fn parse_reported<T: std::str::FromStr>(value: &str) -> Option<T> {
    let value = value.trim();
    if value.is_empty() || value == NOT_AVAILABLE {
        return None;
    }
    value.parse().ok()
}

/// Parses `"num/den"` into a float. Zero denominators yield `None`.
pub fn parse_rational(value: &str) -> Option<f64> {
    let (num, den) = value.trim().split_once('/')?;
    let num: f64 = num.trim().parse().ok()?;
    let den: f64 = den.trim().parse().ok()?;
    if den == 0.0 {
        return None;
    }
    Some(num / den)
}
