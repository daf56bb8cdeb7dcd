//! Engine reply parsing.
//!
//! In emacs mode the engine answers with a group that opens on the character
//! class for the queried letter, e.g. `\([aAあアぁァ]\|...\)`. Only that leading
//! class is kept.

use std::sync::OnceLock;

use regex::Regex;

fn class_re() -> &'static Regex {
    static CLASS_RE: OnceLock<Regex> = OnceLock::new();
    CLASS_RE.get_or_init(|| Regex::new(r"^\\\(\[([^\]]+)\]").expect("class regex is valid"))
}

/// Return `[body]` when `line` starts with `\(` followed by a bracket class.
pub fn extract_class(line: &str) -> Option<String> {
    class_re()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|body| format!("[{}]", body.as_str()))
}

/// The class from the last matching line, if any.
pub fn extract_from_lines<S: AsRef<str>>(lines: &[S]) -> Option<String> {
    lines.iter().filter_map(|l| extract_class(l.as_ref())).last()
}
