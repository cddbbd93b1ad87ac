//! Run-time `%v` substitution
//!
//! Compile-time formatting goes through the `log_*!` macros and
//! `format_args!`. This module covers format strings that only exist at run
//! time (command-line input, configuration), where a mismatch between verbs
//! and arguments cannot be rejected up front.
//!
//! Substitution never fails. Mismatches are rendered inline:
//!
//! | input                         | output                 |
//! |-------------------------------|------------------------|
//! | `"%v"` with no argument       | `%!v(MISSING)`         |
//! | `"done"` with argument `1`    | `done%!(EXTRA 1)`      |
//! | `"100%"`                      | `100%!(NOVERB)`        |
//! | `"100%%"`                     | `100%`                 |

use std::fmt::{Display, Write};

/// Flag, width and precision characters accepted (and ignored) between `%`
/// and the verb
const MODIFIERS: &str = "+-# 0123456789.";

/// Substitute `args` into `format`, left to right
///
/// Any alphabetic verb (`%v`, `%s`, `%d`, ...) renders the next argument's
/// `Display` form.
pub fn substitute(format: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(format.len());
    let mut remaining = args.iter();
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        while chars.peek().is_some_and(|next| MODIFIERS.contains(*next)) {
            chars.next();
        }

        match chars.next() {
            None => out.push_str("%!(NOVERB)"),
            Some('%') => out.push('%'),
            Some(verb) if verb.is_alphabetic() => match remaining.next() {
                Some(arg) => {
                    let _ = write!(out, "{}", arg);
                }
                None => {
                    let _ = write!(out, "%!{}(MISSING)", verb);
                }
            },
            Some(other) => {
                let _ = write!(out, "%!{}(BADVERB)", other);
            }
        }
    }

    let extra: Vec<String> = remaining.map(|arg| arg.to_string()).collect();
    if !extra.is_empty() {
        let _ = write!(out, "%!(EXTRA {})", extra.join(", "));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(substitute("connecting to database...", &[]), "connecting to database...");
    }

    #[test]
    fn test_arguments_fill_verbs_in_order() {
        assert_eq!(
            substitute("failed to %v: %v %v", &[&420, &"disk", &2.5]),
            "failed to 420: disk 2.5"
        );
    }

    #[test]
    fn test_any_letter_verb_uses_display() {
        assert_eq!(substitute("%s=%d", &[&"n", &7]), "n=7");
    }

    #[test]
    fn test_modifiers_are_ignored() {
        assert_eq!(substitute("[%-5v]", &[&"x"]), "[x]");
    }

    #[test]
    fn test_missing_argument() {
        assert_eq!(substitute("value=%v", &[]), "value=%!v(MISSING)");
    }

    #[test]
    fn test_extra_arguments() {
        assert_eq!(substitute("done", &[&1, &"two"]), "done%!(EXTRA 1, two)");
    }

    #[test]
    fn test_percent_escapes() {
        assert_eq!(substitute("100%%", &[]), "100%");
        assert_eq!(substitute("100%", &[]), "100%!(NOVERB)");
        assert_eq!(substitute("%!", &[]), "%!!(BADVERB)");
    }

    #[test]
    fn test_unicode_passes_through() {
        assert_eq!(substitute("✓ %v ✓", &[&"ok"]), "✓ ok ✓");
    }
}
