// WHY: Narrows the option list to the candidates matching the live token
// Result order is always the input order; predicates never re-sort

use tracing::debug;

use super::MentionOption;

/// Decides whether an option is visible for the typed query
///
/// `query` is the live token with its leading trigger removed.
pub trait MatchPredicate<O> {
    fn matches(&self, query: &str, option: &O) -> bool;
}

impl<O, F> MatchPredicate<O> for F
where
    F: Fn(&str, &O) -> bool,
{
    fn matches(&self, query: &str, option: &O) -> bool {
        self(query, option)
    }
}

/// Default predicate: empty query shows everything, otherwise the option
/// name must start with the query (ordinal, case-sensitive)
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixMatch;

impl<O: MentionOption> MatchPredicate<O> for PrefixMatch {
    fn matches(&self, query: &str, option: &O) -> bool {
        query.is_empty() || option.name().starts_with(query)
    }
}

/// Strip the first trigger occurrence from the live token
pub fn query_of(live_word: &str, trigger: char) -> String {
    live_word.replacen(trigger, "", 1)
}

/// Filter with the default prefix predicate
pub fn filter<'a, O: MentionOption>(live_word: &str, options: &'a [O], trigger: char) -> Vec<&'a O> {
    filter_with(live_word, options, trigger, &PrefixMatch)
}

/// Filter with a caller-supplied predicate, invoked once per option in list order
pub fn filter_with<'a, O, P>(live_word: &str, options: &'a [O], trigger: char, predicate: &P) -> Vec<&'a O>
where
    P: MatchPredicate<O> + ?Sized,
{
    let query = query_of(live_word, trigger);
    let visible: Vec<&'a O> = options
        .iter()
        .filter(|option| predicate.matches(query.as_str(), option))
        .collect();
    debug!(%query, visible = visible.len(), total = options.len(), "Filtered mention options");
    visible
}

/// Filter with a fallible predicate; the first error is returned unchanged
///
/// Options after the failing one are not evaluated.
pub fn try_filter<'a, O, E, F>(live_word: &str, options: &'a [O], trigger: char, predicate: F) -> Result<Vec<&'a O>, E>
where
    F: Fn(&str, &O) -> Result<bool, E>,
{
    let query = query_of(live_word, trigger);
    let mut visible = Vec::new();
    for option in options {
        if predicate(query.as_str(), option)? {
            visible.push(option);
        }
    }
    Ok(visible)
}
