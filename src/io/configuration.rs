//! Solver constants and runtime configuration defaults

/// Word list loaded when no `--dictionary` is given
pub const DEFAULT_DICTIONARY_PATH: &str = "/usr/share/dict/words";

// Word lists carry possessive forms ("cat's") that can never appear in a grid
/// Suffix of word list entries that are skipped while loading
pub const POSSESSIVE_SUFFIX: &str = "'s";

/// Input characters that denote an empty grid cell
pub const EMPTY_CELL_MARKERS: [char; 2] = [' ', '.'];

/// Character used when rendering an empty cell
pub const EMPTY_CELL_DISPLAY: char = ' ';

/// Separator between words of a solution and between entered word sizes
pub const SOLUTION_SEPARATOR: char = ',';

// Progress spinner display settings
/// Template for the path enumeration spinner
pub const PROGRESS_TEMPLATE: &str = "{spinner} {pos:>10} paths  {msg}";
/// Spinner animation frames (last frame is shown when finished)
pub const PROGRESS_TICK_CHARS: &str = "\\|-/ ";
/// Interval between spinner redraws in milliseconds
pub const PROGRESS_TICK_MS: u64 = 120;
