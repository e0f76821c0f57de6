// WHY: Display copy of the buffer with resolved mentions decorated
// Splices run back to front so earlier char offsets stay valid

use super::offsets::{char_slice, splice};
use super::MentionSpan;

/// Produce a display copy of `buffer` with every span's text replaced by
/// `decorate(option, token)`
///
/// Spans must not overlap. They are applied from the rightmost start
/// backwards so earlier offsets stay valid while splicing.
pub fn render_highlighted<O, F>(buffer: &str, spans: &[MentionSpan<'_, O>], mut decorate: F) -> String
where
    F: FnMut(&O, &str) -> String,
{
    let mut ordered: Vec<&MentionSpan<'_, O>> = spans.iter().collect();
    ordered.sort_by(|a, b| b.start.cmp(&a.start));

    let mut rendered = buffer.to_string();
    for span in ordered {
        let token = char_slice(buffer, span.start, span.end);
        let decorated = decorate(span.option, token);
        rendered = splice(&rendered, span.start, span.end, &decorated);
    }
    rendered
}
