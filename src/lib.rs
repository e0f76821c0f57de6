pub mod mention;
pub mod engine;
pub mod options;

// Re-export main types for convenient access
pub use mention::{
    LocatedWord, Match, MentionConfig, MentionOption, MentionSpan, NamedOption,
    locate, scan, filter, filter_with, try_filter, apply, Applied,
    collect_mentions, mention_spans, render_highlighted,
    HoverState, NavKey, MatchPredicate, PrefixMatch,
};

// Re-export the stateful composition used by host editors
pub use engine::{KeyOutcome, MentionEngine, MentionState, MentionView};

// Re-export option loading utilities
pub use options::{load_options, load_options_async, parse_options, normalize_line_endings};
