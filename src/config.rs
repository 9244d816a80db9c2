//! Application configuration and constants

// === Vector Parameters ===
pub const VECTOR_DIM: usize = 50;
pub const EPSILON: f32 = 1e-5;

// === Default Files ===
pub const GLOVE_FILE: &str = "glove.txt";
pub const KEYWORDS_FILE: &str = "emoji.json";
pub const VECTORS_FILE: &str = "emoji.txt";

// === Output Format ===
pub const OUTPUT_PRECISION: usize = 6;

// === Search Defaults ===
pub const DEFAULT_LIMIT: usize = 10;
pub const DEFAULT_MIN_SCORE: f32 = 0.0;

// === Emojify ===
pub const UNKNOWN_PLACEHOLDER: &str = "@";
