//! Fixed-width severity tags
//!
//! Every tag is exactly [`TAG_WIDTH`] columns so that messages line up no
//! matter which severity printed them.

/// Column width of every severity tag
pub const TAG_WIDTH: usize = 9;

pub const TAG_LOG: &str = "   LOG   ";
pub const TAG_DEBUG: &str = "  DEBUG  ";
pub const TAG_ERROR: &str = "  ERROR  ";
pub const TAG_FATAL: &str = "  FATAL  ";
pub const TAG_INFO: &str = "  INFO   ";
pub const TAG_SUCCESS: &str = " SUCCESS ";
pub const TAG_FAILURE: &str = " FAILURE ";
pub const TAG_OK: &str = "   OK    ";
