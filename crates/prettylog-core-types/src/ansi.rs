//! ANSI escape sequences
//!
//! Raw SGR codes used to color the bracketed severity tag. Only [`RESET`]
//! and a handful of colors are used by the default palette; the rest are
//! exposed so callers can build their own palettes.

// Foreground colours
pub const BLACK_FG: &str = "\x1b[30m";
pub const RED_FG: &str = "\x1b[31m";
pub const GREEN_FG: &str = "\x1b[32m";
pub const YELLOW_FG: &str = "\x1b[33m";
pub const BLUE_FG: &str = "\x1b[34m";
pub const MAGENTA_FG: &str = "\x1b[35m";
pub const CYAN_FG: &str = "\x1b[36m";
pub const WHITE_FG: &str = "\x1b[37m";

// Bright foreground colours
pub const BRIGHT_BLACK_FG: &str = "\x1b[90m";
pub const BRIGHT_RED_FG: &str = "\x1b[91m";
pub const BRIGHT_GREEN_FG: &str = "\x1b[92m";
pub const BRIGHT_YELLOW_FG: &str = "\x1b[93m";
pub const BRIGHT_BLUE_FG: &str = "\x1b[94m";
pub const BRIGHT_MAGENTA_FG: &str = "\x1b[95m";
pub const BRIGHT_CYAN_FG: &str = "\x1b[96m";
pub const BRIGHT_WHITE_FG: &str = "\x1b[97m";

// Background colours
pub const BLACK_BG: &str = "\x1b[40m";
pub const RED_BG: &str = "\x1b[41m";
pub const GREEN_BG: &str = "\x1b[42m";
pub const YELLOW_BG: &str = "\x1b[43m";
pub const BLUE_BG: &str = "\x1b[44m";
pub const MAGENTA_BG: &str = "\x1b[45m";
pub const CYAN_BG: &str = "\x1b[46m";
pub const WHITE_BG: &str = "\x1b[47m";

// Bright background colours
pub const BRIGHT_BLACK_BG: &str = "\x1b[100m";
pub const BRIGHT_RED_BG: &str = "\x1b[101m";
pub const BRIGHT_GREEN_BG: &str = "\x1b[102m";
pub const BRIGHT_YELLOW_BG: &str = "\x1b[103m";
pub const BRIGHT_BLUE_BG: &str = "\x1b[104m";
pub const BRIGHT_MAGENTA_BG: &str = "\x1b[105m";
pub const BRIGHT_CYAN_BG: &str = "\x1b[106m";
pub const BRIGHT_WHITE_BG: &str = "\x1b[107m";

/// Reset all colours and formats
pub const RESET: &str = "\x1b[0m";

// Text formats
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const ITALIC: &str = "\x1b[3m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const BLINK: &str = "\x1b[5m";
pub const REVERSE: &str = "\x1b[7m";
pub const HIDDEN: &str = "\x1b[8m";
pub const STRIKETHROUGH: &str = "\x1b[9m";

// Per-format resets
pub const RESET_BOLD: &str = "\x1b[21m";
pub const RESET_DIM: &str = "\x1b[22m";
pub const RESET_ITALIC: &str = "\x1b[23m";
pub const RESET_UNDERLINE: &str = "\x1b[24m";
pub const RESET_BLINK: &str = "\x1b[25m";
pub const RESET_REVERSE: &str = "\x1b[27m";
pub const RESET_HIDDEN: &str = "\x1b[28m";
pub const RESET_STRIKETHROUGH: &str = "\x1b[29m";

const FOREGROUNDS: [(&str, &str); 16] = [
    ("black", BLACK_FG),
    ("red", RED_FG),
    ("green", GREEN_FG),
    ("yellow", YELLOW_FG),
    ("blue", BLUE_FG),
    ("magenta", MAGENTA_FG),
    ("cyan", CYAN_FG),
    ("white", WHITE_FG),
    ("bright_black", BRIGHT_BLACK_FG),
    ("bright_red", BRIGHT_RED_FG),
    ("bright_green", BRIGHT_GREEN_FG),
    ("bright_yellow", BRIGHT_YELLOW_FG),
    ("bright_blue", BRIGHT_BLUE_FG),
    ("bright_magenta", BRIGHT_MAGENTA_FG),
    ("bright_cyan", BRIGHT_CYAN_FG),
    ("bright_white", BRIGHT_WHITE_FG),
];

const BACKGROUNDS: [(&str, &str); 16] = [
    ("black", BLACK_BG),
    ("red", RED_BG),
    ("green", GREEN_BG),
    ("yellow", YELLOW_BG),
    ("blue", BLUE_BG),
    ("magenta", MAGENTA_BG),
    ("cyan", CYAN_BG),
    ("white", WHITE_BG),
    ("bright_black", BRIGHT_BLACK_BG),
    ("bright_red", BRIGHT_RED_BG),
    ("bright_green", BRIGHT_GREEN_BG),
    ("bright_yellow", BRIGHT_YELLOW_BG),
    ("bright_blue", BRIGHT_BLUE_BG),
    ("bright_magenta", BRIGHT_MAGENTA_BG),
    ("bright_cyan", BRIGHT_CYAN_BG),
    ("bright_white", BRIGHT_WHITE_BG),
];

/// Look up a foreground colour by name (`"red"`, `"bright_cyan"`, ...)
///
/// Names are matched case-insensitively; `-` and `_` are interchangeable.
pub fn foreground_by_name(name: &str) -> Option<&'static str> {
    lookup(&FOREGROUNDS, name)
}

/// Look up a background colour by name (`"red"`, `"bright_cyan"`, ...)
pub fn background_by_name(name: &str) -> Option<&'static str> {
    lookup(&BACKGROUNDS, name)
}

/// Background variant of a foreground code, if it is one of the sixteen
/// standard colours
pub fn background_for(foreground: &str) -> Option<&'static str> {
    FOREGROUNDS
        .iter()
        .position(|(_, code)| *code == foreground)
        .map(|idx| BACKGROUNDS[idx].1)
}

fn lookup(table: &[(&'static str, &'static str)], name: &str) -> Option<&'static str> {
    let normalized = name.trim().to_ascii_lowercase().replace('-', "_");
    table
        .iter()
        .find(|(candidate, _)| *candidate == normalized)
        .map(|(_, code)| *code)
}
