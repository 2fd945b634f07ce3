/// Longest accepted event title, in characters
pub const MAX_TITLE_LENGTH: usize = 60;

/// Longest accepted event description, in characters
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Cells in a month grid: six full weeks
pub const GRID_DAYS: usize = 42;

/// Serialized form of event dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Literal used for events spanning the whole day
pub const ALL_DAY: &str = "All Day";

/// Earliest year a date may fall in. Every grid and seed offset computed
/// from a date in 1..=9999 stays inside chrono's range.
pub const MIN_YEAR: i32 = 1;

/// Latest year a date may fall in
pub const MAX_YEAR: i32 = 9999;
