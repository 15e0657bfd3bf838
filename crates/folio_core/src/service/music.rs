//! Music page state.
//!
//! # Responsibility
//! - Track the currently playing track and wrap-around navigation.
//! - Summarize the playlist for the page header.

use crate::model::track::{format_seconds, Track};
use crate::repo::content_repo::{CatalogError, CatalogResult};
use log::debug;

/// Playlist view shown by the music page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MusicView<'a> {
    pub tracks: &'a [Track],
    pub current: Option<&'a Track>,
    /// Sum of known durations, formatted as `m:ss`.
    pub total_duration: String,
}

/// Mounted music page.
#[derive(Debug)]
pub struct MusicPage<'a> {
    tracks: &'a [Track],
    current: Option<usize>,
}

impl<'a> MusicPage<'a> {
    pub fn mount(tracks: &'a [Track]) -> Self {
        Self {
            tracks,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&'a Track> {
        self.current.map(|index| &self.tracks[index])
    }

    /// Starts playing the track with `id`.
    pub fn play(&mut self, id: &str) -> CatalogResult<&'a Track> {
        let index = self
            .tracks
            .iter()
            .position(|track| track.id == id)
            .ok_or_else(|| CatalogError::TrackNotFound(id.to_string()))?;
        debug!("event=track_play module=service status=ok track={id}");
        self.current = Some(index);
        Ok(&self.tracks[index])
    }

    /// Advances to the next track, wrapping to the first. Starts at the first
    /// track when nothing is playing.
    pub fn next(&mut self) -> Option<&'a Track> {
        if self.tracks.is_empty() {
            return None;
        }
        let index = match self.current {
            Some(index) => (index + 1) % self.tracks.len(),
            None => 0,
        };
        self.current = Some(index);
        self.current()
    }

    /// Steps back, wrapping to the last track.
    pub fn previous(&mut self) -> Option<&'a Track> {
        if self.tracks.is_empty() {
            return None;
        }
        let len = self.tracks.len();
        let index = match self.current {
            Some(index) => (index + len - 1) % len,
            None => len - 1,
        };
        self.current = Some(index);
        self.current()
    }

    pub fn stop(&mut self) {
        self.current = None;
    }

    /// Total of all known track durations in seconds.
    pub fn total_seconds(&self) -> u32 {
        self.tracks.iter().filter_map(|track| track.duration).sum()
    }

    pub fn view(&self) -> MusicView<'a> {
        MusicView {
            tracks: self.tracks,
            current: self.current(),
            total_duration: format_seconds(self.total_seconds()),
        }
    }
}
