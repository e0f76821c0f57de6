// WHY: Full-buffer pass for completed mentions used by highlighting and extraction
// Results come back rightmost first so replacements can be applied back to front

use tracing::debug;

use super::{Match, MentionOption, MentionSpan};

/// Whitespace that may precede a trigger and that terminates a token
fn is_boundary(ch: char) -> bool {
    ch == ' ' || ch == '\n'
}

/// Find every completed mention in `buffer`, most recently started first
///
/// A token starts at a `trigger` preceded by start-of-buffer, a space or a
/// newline, and runs until the next space or newline. A token still open at
/// the end of the buffer is not emitted: a mention counts as completed only
/// once whitespace follows it.
pub fn scan(buffer: &str, trigger: char) -> Vec<Match> {
    let mut matches = Vec::new();
    let mut word = String::new();
    let mut word_len = 0usize;
    let mut previous = ' ';

    for (index, ch) in buffer.chars().enumerate() {
        if is_boundary(ch) {
            if word_len > 0 {
                matches.push(Match {
                    word: std::mem::take(&mut word),
                    index: index - word_len,
                });
                word_len = 0;
            }
        } else if word_len > 0 || (ch == trigger && is_boundary(previous)) {
            word.push(ch);
            word_len += 1;
        }
        previous = ch;
    }

    if word_len > 0 {
        debug!(%word, "Dropping unterminated mention at end of buffer");
    }

    matches.reverse();
    debug!("Scanned {} completed mentions", matches.len());
    matches
}

/// Resolve scanned mentions against `options`, keeping scan order
///
/// A match becomes a span only when some option's name, prefixed with the
/// trigger, equals the token exactly. The first such option wins.
pub fn mention_spans<'a, O: MentionOption>(
    buffer: &str,
    options: &'a [O],
    trigger: char,
) -> Vec<MentionSpan<'a, O>> {
    scan(buffer, trigger)
        .into_iter()
        .filter_map(|m| {
            let option = lookup(options, &m.word, trigger)?;
            Some(MentionSpan {
                start: m.index,
                end: m.end(),
                option,
            })
        })
        .collect()
}

/// Options mentioned in `buffer`, in document order, duplicates kept
pub fn collect_mentions<'a, O: MentionOption>(
    buffer: &str,
    options: &'a [O],
    trigger: char,
) -> Vec<&'a O> {
    let mut mentioned: Vec<&'a O> = scan(buffer, trigger)
        .iter()
        .filter_map(|m| lookup(options, &m.word, trigger))
        .collect();
    mentioned.reverse();
    mentioned
}

fn lookup<'a, O: MentionOption>(options: &'a [O], word: &str, trigger: char) -> Option<&'a O> {
    let name = word.strip_prefix(trigger)?;
    options.iter().find(|option| option.name() == name)
}
