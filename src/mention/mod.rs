// WHY: Core mention interface, pure functions over (buffer, cursor, trigger) snapshots
// Nothing in this module touches a rendering surface or holds state between calls

use serde::{Deserialize, Serialize};

pub mod offsets;
pub mod locator;
pub mod scanner;
pub mod filter;
pub mod selection;
pub mod navigation;
pub mod highlight;

pub use filter::{filter, filter_with, try_filter, MatchPredicate, PrefixMatch};
pub use highlight::render_highlighted;
pub use locator::locate;
pub use navigation::{HoverState, NavKey};
pub use scanner::{collect_mentions, mention_spans, scan};
pub use selection::{apply, Applied};

/// Trigger symbol used when none is configured
pub const DEFAULT_TRIGGER: char = '@';

/// Configuration shared by every mention operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MentionConfig {
    /// Character that opens a mention token
    pub trigger: char,
}

impl Default for MentionConfig {
    fn default() -> Self {
        Self {
            trigger: DEFAULT_TRIGGER,
        }
    }
}

/// Token under the cursor. `start..end` are char offsets, end exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LocatedWord {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl LocatedWord {
    /// The canonical "no active mention" value anchored at the cursor
    pub fn empty_at(cursor: usize) -> Self {
        Self {
            start: cursor,
            end: cursor,
            text: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A completed mention found by the scanner; `index` is its start char offset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub word: String,
    pub index: usize,
}

impl Match {
    /// Char offset one past the last char of the token
    pub fn end(&self) -> usize {
        self.index + self.word.chars().count()
    }
}

/// Completed mention resolved against the option list, for display overlays
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MentionSpan<'a, O> {
    pub start: usize,
    pub end: usize,
    pub option: &'a O,
}

/// Anything that can be offered as a mention candidate
pub trait MentionOption {
    fn name(&self) -> &str;
}

impl MentionOption for String {
    fn name(&self) -> &str {
        self
    }
}

impl MentionOption for str {
    fn name(&self) -> &str {
        self
    }
}

impl MentionOption for &str {
    fn name(&self) -> &str {
        self
    }
}

/// Option record with a name and arbitrary caller-defined metadata
///
/// Deserializes from either a bare string (`"alice"`) or an object with a
/// `name` field (`{"name": "alice", "id": 7}`); the remaining fields are kept
/// in `metadata`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawOption")]
pub struct NamedOption {
    pub name: String,
    #[serde(flatten)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl NamedOption {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metadata: serde_json::Map::new(),
        }
    }
}

impl MentionOption for NamedOption {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOption {
    Bare(String),
    Record {
        #[serde(default)]
        name: String,
        #[serde(flatten)]
        metadata: serde_json::Map<String, serde_json::Value>,
    },
}

impl From<RawOption> for NamedOption {
    fn from(raw: RawOption) -> Self {
        match raw {
            RawOption::Bare(name) => Self::new(name),
            RawOption::Record { name, metadata } => Self { name, metadata },
        }
    }
}
