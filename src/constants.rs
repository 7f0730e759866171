//! Global constants for beadcraft

/// Width and height of a bead design, in cells
pub const GRID_SIZE: usize = 16;

/// Number of characters in a flat pattern string
pub const PATTERN_LEN: usize = GRID_SIZE * GRID_SIZE;

/// Upper bound for a single color on the inventory form
pub const MAX_BEAD_COUNT: u32 = 256;

/// Pattern suggestion / bead counting service used when nothing is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8001";

/// Environment variable that overrides the configured service base URL
pub const API_BASE_URL_ENV: &str = "BEADCRAFT_API_BASE_URL";

/// Path of the bead counting endpoint, relative to the base URL
pub const BEAD_COUNT_PATH: &str = "/api/beadscount";

/// Path of the pattern suggestion endpoint, relative to the base URL
pub const SUGGESTIONS_PATH: &str = "/api/suggestions";
