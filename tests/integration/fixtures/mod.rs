// Test fixtures with known buffers and option lists
// WHY: Scenario tests share the same option set and message texts

/// Option names used by the end-to-end scenarios
pub const OPTION_NAMES: [&str; 3] = ["one", "two", "three"];

/// Option list with metadata, as a host application would supply it
pub const RICH_OPTIONS_JSON: &str = r#"[
    {"name": "alice", "id": 1, "team": "infra"},
    {"name": "bob", "id": 2},
    "carol"
]"#;

/// Multi-line message with completed, unknown and unterminated mentions
pub const MESSAGE: &str = "hey @alice and @bob,\nplease sync with @carol\n@dave mail@bob @alice";

/// Document-order names `collect_mentions` should return for MESSAGE with RICH_OPTIONS_JSON
pub const MESSAGE_MENTIONED: [&str; 2] = ["alice", "carol"];
