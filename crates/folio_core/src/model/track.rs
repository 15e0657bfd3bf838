//! Music track record.

use serde::{Deserialize, Serialize};

/// One audio track on the music page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    /// Audio source path served by the site.
    pub src: String,
    /// Length in whole seconds, when known.
    #[serde(default)]
    pub duration: Option<u32>,
}

impl Track {
    /// Renders the duration as `m:ss`, or `--:--` when unknown.
    pub fn formatted_duration(&self) -> String {
        match self.duration {
            Some(seconds) => format_seconds(seconds),
            None => "--:--".to_string(),
        }
    }
}

/// Formats whole seconds as `m:ss`.
pub fn format_seconds(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::{format_seconds, Track};

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_seconds(245), "4:05");
        assert_eq!(format_seconds(59), "0:59");
        assert_eq!(format_seconds(3600), "60:00");
    }

    #[test]
    fn unknown_duration_renders_placeholder() {
        let track = Track {
            id: "demo".to_string(),
            title: "Demo".to_string(),
            artist: "Artist".to_string(),
            src: "/music/demo.mp3".to_string(),
            duration: None,
        };
        assert_eq!(track.formatted_duration(), "--:--");
    }
}
