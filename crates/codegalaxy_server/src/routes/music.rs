//! Placeholder focus playlist.
//!
//! No streaming provider is wired in; the list is static sample audio.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Track {
    pub id: u32,
    pub title: &'static str,
    pub artist: &'static str,
    pub duration: &'static str,
    pub url: &'static str,
}

const PLACEHOLDER_TRACKS: &[Track] = &[
    Track {
        id: 1,
        title: "Lofi Study Beat 1",
        artist: "Chill Beats",
        duration: "3:45",
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3",
    },
    Track {
        id: 2,
        title: "Focus Flow",
        artist: "Ambient Sounds",
        duration: "4:20",
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-2.mp3",
    },
    Track {
        id: 3,
        title: "Peaceful Piano",
        artist: "Relaxing Music",
        duration: "5:10",
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-3.mp3",
    },
    Track {
        id: 4,
        title: "Deep Work",
        artist: "Productivity Beats",
        duration: "3:55",
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-4.mp3",
    },
    Track {
        id: 5,
        title: "Coding Zone",
        artist: "Tech Vibes",
        duration: "4:30",
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-5.mp3",
    },
];

pub async fn list_tracks() -> Json<&'static [Track]> {
    Json(PLACEHOLDER_TRACKS)
}
