// WHY: Live-token detection for the word the user is composing under the cursor
// Newlines count as spaces here; callers must normalize \r\n before calling

use tracing::debug;

use super::offsets::clamp_cursor;
use super::LocatedWord;

/// Space-equivalent boundary for the live token
fn is_boundary(ch: char) -> bool {
    ch == ' ' || ch == '\n'
}

/// Locate the trigger-prefixed token under `cursor`
///
/// The token ends at the next boundary after the cursor. It starts at the
/// beginning of the run of non-boundary chars when that run begins with
/// `trigger`, so further triggers inside the run belong to the same token.
/// Otherwise it starts at the nearest `trigger` before the cursor within the
/// run, which lets a mention follow punctuation such as `(@bo`. With no
/// trigger before the cursor the empty value anchored at the cursor is
/// returned.
///
/// A cursor past the end of the buffer is clamped to the end.
pub fn locate(buffer: &str, cursor: usize, trigger: char) -> LocatedWord {
    let chars: Vec<char> = buffer.chars().collect();
    let cursor = clamp_cursor(buffer, cursor);

    let run_start = chars[..cursor]
        .iter()
        .rposition(|&ch| is_boundary(ch))
        .map_or(0, |pos| pos + 1);

    let start = if run_start < cursor && chars[run_start] == trigger {
        Some(run_start)
    } else {
        chars[run_start..cursor]
            .iter()
            .rposition(|&ch| ch == trigger)
            .map(|pos| run_start + pos)
    };

    let end = chars[cursor..]
        .iter()
        .position(|&ch| is_boundary(ch))
        .map_or(chars.len(), |pos| cursor + pos);

    let Some(start) = start else {
        return LocatedWord::empty_at(cursor);
    };

    let text: String = chars[start..end].iter().collect();
    debug!(start, end, %text, "Located live mention token");

    LocatedWord { start, end, text }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(start: usize, end: usize, text: &str) -> LocatedWord {
        LocatedWord {
            start,
            end,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_locate_basic() {
        assert_eq!(locate("@awd", 4, '@'), word(0, 4, "@awd"));
    }

    #[test]
    fn test_locate_cursor_inside_word() {
        // @a|wd: boundaries stay on the whole token
        assert_eq!(locate("@awd", 3, '@'), word(0, 4, "@awd"));
        assert_eq!(locate("@awd", 1, '@'), word(0, 4, "@awd"));
    }

    #[test]
    fn test_locate_trailing_trigger_after_space() {
        assert_eq!(locate("@awd @", 4, '@'), word(0, 4, "@awd"));
        assert_eq!(locate("@awd @", 6, '@'), word(5, 6, "@"));
    }

    #[test]
    fn test_locate_after_newline() {
        assert_eq!(locate("@awd\n", 5, '@'), LocatedWord::empty_at(5));
    }

    #[test]
    fn test_locate_space_newline_trigger() {
        assert_eq!(locate("@awd \n@", 7, '@'), word(6, 7, "@"));
    }

    #[test]
    fn test_locate_trigger_newline_trigger_splits() {
        assert_eq!(locate("@a\n@b", 5, '@'), word(3, 5, "@b"));
        assert_eq!(locate("@a\n@b", 2, '@'), word(0, 2, "@a"));
    }

    #[test]
    fn test_locate_multiple_triggers_one_token() {
        assert_eq!(locate("@awd@awd", 8, '@'), word(0, 8, "@awd@awd"));
        assert_eq!(locate("@awd@awd", 5, '@'), word(0, 8, "@awd@awd"));
    }

    #[test]
    fn test_locate_start_of_buffer() {
        assert_eq!(locate("@awd", 0, '@'), LocatedWord::empty_at(0));
        assert_eq!(locate("", 0, '@'), LocatedWord::empty_at(0));
        assert_eq!(locate("@", 1, '@'), word(0, 1, "@"));
    }

    #[test]
    fn test_locate_plain_words_are_not_live() {
        assert_eq!(locate("one", 3, '@'), LocatedWord::empty_at(3));
        assert_eq!(locate("hello world", 8, '@'), LocatedWord::empty_at(8));
        assert_eq!(locate("mail", 4, '@'), LocatedWord::empty_at(4));
    }

    #[test]
    fn test_locate_trigger_after_adjacent_symbol() {
        assert_eq!(locate("(@bo", 4, '@'), word(1, 4, "@bo"));
        assert_eq!(locate("ab@cd", 5, '@'), word(2, 5, "@cd"));
        assert_eq!(locate("hi,@t", 5, '@'), word(3, 5, "@t"));
        assert_eq!(locate("ab@cd", 3, '@'), word(2, 5, "@cd"));
    }

    #[test]
    fn test_locate_cursor_before_interior_trigger() {
        // a|b@cd: the trigger sits after the cursor
        assert_eq!(locate("ab@cd", 1, '@'), LocatedWord::empty_at(1));
        assert_eq!(locate("ab@cd", 2, '@'), LocatedWord::empty_at(2));
    }

    #[test]
    fn test_locate_cursor_on_space_after_token() {
        // Cursor right after the separator space sees nothing
        assert_eq!(locate("@two ", 5, '@'), LocatedWord::empty_at(5));
    }

    #[test]
    fn test_locate_clamps_cursor() {
        assert_eq!(locate("@awd", 40, '@'), word(0, 4, "@awd"));
    }

    #[test]
    fn test_locate_custom_trigger_and_unicode() {
        assert_eq!(locate("ping #zoë now", 9, '#'), word(5, 9, "#zoë"));
        assert_eq!(locate("ping @zoë now", 9, '#'), LocatedWord::empty_at(9));
    }
}
