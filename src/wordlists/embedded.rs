//! Built-in fallback vocabulary
//!
//! Used when no word list file can be found. Deliberately small: enough to keep
//! the advisor usable, not enough to play well.

/// Fallback guess vocabulary
pub const FALLBACK_WORDS: &[&str] = &[
    "about", "crane", "slate", "trace", "audio", "adieu", "raise", "arose", "salet", "reast",
    "stare", "snare", "irate", "later", "alert", "alter", "laser", "saner", "nears", "learn",
    "renal", "liner", "riles", "tiles", "stile", "smile", "miles", "limes", "slime", "motes",
    "tomes", "notes", "tones", "stone", "onset", "pores", "spore", "ropes", "store",
];
