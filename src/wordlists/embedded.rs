//! Embedded fallback word list
//!
//! Used whenever no external word list is supplied or it cannot be read.

/// Default word pool, in play order
pub const FALLBACK: &[&str] = &[
    "apple", "beach", "brain", "bread", "brush", "chair", "chest", "chord", "click", "clock",
    "cloud", "dance", "diary", "drive", "drone", "eagle", "earth", "feast", "field", "flame",
    "fruit", "glass", "grape", "green", "ghost", "heart", "house", "juice", "light", "lemon",
    "melon", "money", "music", "night", "ocean", "party", "piano", "pilot", "plane", "plant",
    "plate", "phone", "power", "quiet", "radio", "river", "robot", "sheep", "shirt", "shoes",
    "smile", "snake", "space", "spoon", "storm", "sugar", "table", "tiger", "toast", "touch",
    "train", "truck", "voice", "watch", "water", "whale", "white", "woman", "world", "write",
    "youth", "zebra", "adieu", "tears", "alone", "arise", "stare", "hello", "media", "audit",
];

/// Number of words in `FALLBACK`
pub const FALLBACK_COUNT: usize = 80;
