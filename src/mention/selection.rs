// WHY: Splices a chosen option over the located token and nothing else
// Always slice-before + replacement + slice-after, never a pattern replace

use serde::Serialize;
use tracing::debug;

use super::offsets::{char_len, splice};
use super::{LocatedWord, MentionOption};

/// Buffer and caret position after inserting a mention
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Applied {
    pub buffer: String,
    pub cursor: usize,
}

/// Replace `word.start..word.end` with `trigger + name + " "`
///
/// The caret lands just after the inserted separator space. An option with an
/// empty name still inserts the trigger and the space.
pub fn apply<O: MentionOption + ?Sized>(buffer: &str, word: &LocatedWord, option: &O, trigger: char) -> Applied {
    let mut replacement = String::with_capacity(option.name().len() + 2);
    replacement.push(trigger);
    replacement.push_str(option.name());

    let len = char_len(buffer);
    let start = word.start.min(len);
    let end = word.end.clamp(start, len);
    let cursor = start + replacement.chars().count() + 1;

    replacement.push(' ');
    let buffer = splice(buffer, start, end, &replacement);
    debug!(start, end, cursor, "Applied mention selection");

    Applied { buffer, cursor }
}
