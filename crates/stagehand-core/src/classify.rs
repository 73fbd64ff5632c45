// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Concrete source classification.
//!
//! The host only reports a coarse [`ItemType`]. The concrete type is inferred
//! from string signals in a fixed priority order; the first rule that matches
//! wins because the signals overlap (an HTML item can also look like a file).
//!
//! Rules, in order:
//!
//! 1. `GAMESOURCE` -> game
//! 2. `HTML`/`FILE` named `Video Playlist*` with a non-empty `FilePlaylist` -> video playlist
//! 3. `HTML` -> html
//! 4. `SCREEN` -> screen
//! 5. `BITMAP`, or `FILE` ending in `.gif` -> image
//! 6. `FILE` not ending in `.gif`/`.xbs` and not an `rtsp://`/`rtmp://` URL -> media
//! 7. `LIVE` without the audio-capture category GUID -> camera
//! 8. `LIVE` with it -> audio
//! 9. `FLASHFILE` -> flash
//! 10. anything else -> generic source
//!
//! Rule 6 is a double negative: a `FILE` with an empty or unrecognized value
//! is media. That permissiveness is intentional and covered by tests.

use std::fmt;

use crate::identity::{ItemType, SourceIdentity};

/// DirectShow audio-input device category; present in microphone device ids.
pub const AUDIO_DEVICE_GUID: &str = "{33D9A762-90C8-11D0-BD43-00A0C911CE86}";

/// Name prefix the host gives video playlist items.
pub const VIDEO_PLAYLIST_PREFIX: &str = "Video Playlist";

/// Concrete source type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Game capture.
    Game,
    /// Playlist of video files played by the host's playlist plugin.
    VideoPlaylist,
    /// Web page / HTML plugin.
    Html,
    /// Screen region capture.
    Screen,
    /// Still image or animated GIF.
    Image,
    /// Video or audio file.
    Media,
    /// Video capture device.
    Camera,
    /// Audio capture device.
    Audio,
    /// Flash movie.
    Flash,
    /// Anything the rules do not recognize.
    Generic,
}

impl SourceKind {
    /// Every kind, in classification priority order.
    pub const ALL: [Self; 10] = [
        Self::Game,
        Self::VideoPlaylist,
        Self::Html,
        Self::Screen,
        Self::Image,
        Self::Media,
        Self::Camera,
        Self::Audio,
        Self::Flash,
        Self::Generic,
    ];

    /// Stable lowercase name, used by tooling output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Game => "game",
            Self::VideoPlaylist => "video-playlist",
            Self::Html => "html",
            Self::Screen => "screen",
            Self::Image => "image",
            Self::Media => "media",
            Self::Camera => "camera",
            Self::Audio => "audio",
            Self::Flash => "flash",
            Self::Generic => "source",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn ends_with_ignore_case(value: &str, suffix: &str) -> bool {
    value.len() >= suffix.len()
        && value.is_char_boundary(value.len() - suffix.len())
        && value[value.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value.len() >= prefix.len()
        && value.is_char_boundary(prefix.len())
        && value[..prefix.len()].eq_ignore_ascii_case(prefix)
}

fn is_gif(value: &str) -> bool {
    ends_with_ignore_case(value, ".gif")
}

fn is_streaming_url(value: &str) -> bool {
    starts_with_ignore_case(value, "rtsp://") || starts_with_ignore_case(value, "rtmp://")
}

fn is_video_playlist(identity: &SourceIdentity) -> bool {
    matches!(identity.item_type, ItemType::Html | ItemType::File)
        && identity.name.starts_with(VIDEO_PLAYLIST_PREFIX)
        && identity
            .property(SourceIdentity::FILE_PLAYLIST)
            .is_some_and(|list| !list.is_empty())
}

/// Classify one deduplicated source. Pure; performs no host I/O.
pub fn classify(identity: &SourceIdentity) -> SourceKind {
    let value = identity.raw_value.as_str();
    let ty = identity.item_type;

    if ty == ItemType::GameSource {
        SourceKind::Game
    } else if is_video_playlist(identity) {
        SourceKind::VideoPlaylist
    } else if ty == ItemType::Html {
        SourceKind::Html
    } else if ty == ItemType::Screen {
        SourceKind::Screen
    } else if ty == ItemType::Bitmap || (ty == ItemType::File && is_gif(value)) {
        SourceKind::Image
    } else if ty == ItemType::File
        && !is_gif(value)
        && !ends_with_ignore_case(value, ".xbs")
        && !is_streaming_url(value)
    {
        SourceKind::Media
    } else if ty == ItemType::Live && !value.contains(AUDIO_DEVICE_GUID) {
        SourceKind::Camera
    } else if ty == ItemType::Live {
        SourceKind::Audio
    } else if ty == ItemType::FlashFile {
        SourceKind::Flash
    } else {
        SourceKind::Generic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagehand_port::PropertyBag;

    fn ident(ty: &str, name: &str, value: &str, extra: &[(&str, &str)]) -> SourceIdentity {
        let mut bag: PropertyBag = [("id", "{I}"), ("type", ty), ("name", name), ("item", value)]
            .into_iter()
            .collect();
        for (k, v) in extra {
            bag.insert(*k, *v);
        }
        SourceIdentity::from_properties(bag, 0)
    }

    const MIC: &str =
        "@DEVICE:CM:{33D9A762-90C8-11D0-BD43-00A0C911CE86}\\Microphone (USB Audio)";
    const CAM: &str = "@DEVICE:PNP:\\\\?\\USB#VID_046D&PID_0825#{65E8773D-8F56-11D0-A3B9-00A0C9223196}";

    #[test]
    fn classification_table() {
        let cases: &[(&str, &str, &str, &[(&str, &str)], SourceKind)] = &[
            ("7", "Game", "", &[], SourceKind::Game),
            ("7", "Video Playlist", "x", &[("FilePlaylist", "a.xbpl")], SourceKind::Game),
            ("8", "Video Playlist - My Show", "", &[("FilePlaylist", "a.xbpl")], SourceKind::VideoPlaylist),
            ("1", "Video Playlist", "a.mp4", &[("FilePlaylist", "a.xbpl")], SourceKind::VideoPlaylist),
            ("8", "Video Playlist - My Show", "", &[("FilePlaylist", "")], SourceKind::Html),
            ("8", "video playlist", "", &[("FilePlaylist", "a.xbpl")], SourceKind::Html),
            ("8", "Clock", "http://example.test/clip.gif", &[], SourceKind::Html),
            ("5", "Region", "<screen/>", &[], SourceKind::Screen),
            ("4", "Logo", "logo.png", &[], SourceKind::Image),
            ("1", "Anim", "clip.GIF", &[], SourceKind::Image),
            ("1", "Backup", "clip.gif.bak", &[], SourceKind::Media),
            ("1", "Movie", "C:\\video\\intro.mp4", &[], SourceKind::Media),
            ("1", "Empty", "", &[], SourceKind::Media),
            ("1", "Scene", "saved.XBS", &[], SourceKind::Generic),
            ("1", "Stream", "RTSP://cam.local/live", &[], SourceKind::Generic),
            ("1", "Stream", "rtmp://ingest/live", &[], SourceKind::Generic),
            ("2", "Webcam", CAM, &[], SourceKind::Camera),
            ("2", "Mic", MIC, &[], SourceKind::Audio),
            ("6", "Banner", "banner.swf", &[], SourceKind::Flash),
            ("3", "Title", "<text/>", &[], SourceKind::Generic),
            ("0", "Odd", "", &[], SourceKind::Generic),
        ];

        for (ty, name, value, extra, expected) in cases {
            let got = classify(&ident(ty, name, value, extra));
            assert_eq!(got, *expected, "type={ty} name={name:?} value={value:?}");
        }
    }

    #[test]
    fn gif_suffix_must_be_exact() {
        assert_eq!(classify(&ident("1", "", "clip.GIF", &[])), SourceKind::Image);
        assert_eq!(
            classify(&ident("1", "", "clip.gif.bak", &[])),
            SourceKind::Media
        );
    }

    #[test]
    fn live_split_on_audio_guid() {
        assert_eq!(classify(&ident("2", "", MIC, &[])), SourceKind::Audio);
        assert_eq!(classify(&ident("2", "", CAM, &[])), SourceKind::Camera);
    }

    #[test]
    fn multibyte_values_do_not_panic() {
        assert_eq!(classify(&ident("1", "", "ü", &[])), SourceKind::Media);
        assert_eq!(classify(&ident("1", "", "日本.gif", &[])), SourceKind::Image);
    }

    #[test]
    fn all_lists_every_kind_once() {
        let mut names: Vec<_> = SourceKind::ALL.iter().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SourceKind::ALL.len());
    }
}
