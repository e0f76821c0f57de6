// WHY: Composes locate -> filter -> navigate -> apply for a host editor
// The host owns MentionState and passes it into every call; the engine keeps none

use tracing::debug;

use crate::mention::{
    apply, filter_with, locate, mention_spans, offsets, Applied, HoverState, LocatedWord, MatchPredicate,
    MentionConfig, MentionOption, MentionSpan, NavKey, PrefixMatch,
};

/// Per-buffer state threaded through the engine by the caller
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MentionState {
    pub hover: HoverState,
    /// Live token from the last input change
    pub word: LocatedWord,
}

/// Everything the renderer needs after an input change
#[derive(Debug, Clone)]
pub struct MentionView<'a, O> {
    pub visible: Vec<&'a O>,
    pub hover: Option<usize>,
    pub spans: Vec<MentionSpan<'a, O>>,
}

/// Result of a navigation key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Dropdown closed or key not handled; the host should process it normally
    Ignored,
    /// Hover moved; the host should suppress the key's default action
    Moved { hover: usize },
    /// An option was inserted; the host writes back the buffer and caret
    Selected(Applied),
}

/// Mention detection bound to an option list, trigger and match predicate
#[derive(Debug, Clone)]
pub struct MentionEngine<O, P = PrefixMatch> {
    options: Vec<O>,
    config: MentionConfig,
    predicate: P,
}

impl<O: MentionOption> MentionEngine<O, PrefixMatch> {
    /// Engine with the default prefix predicate
    pub fn new(options: Vec<O>, config: MentionConfig) -> Self {
        Self::with_predicate(options, config, PrefixMatch)
    }
}

impl<O: MentionOption, P: MatchPredicate<O>> MentionEngine<O, P> {
    pub fn with_predicate(options: Vec<O>, config: MentionConfig, predicate: P) -> Self {
        Self {
            options,
            config,
            predicate,
        }
    }

    pub fn options(&self) -> &[O] {
        &self.options
    }

    /// Replace the whole option list; states from before stay valid
    pub fn set_options(&mut self, options: Vec<O>) {
        self.options = options;
    }

    pub fn config(&self) -> MentionConfig {
        self.config
    }

    /// Options visible for a live token
    pub fn visible(&self, word: &LocatedWord) -> Vec<&O> {
        filter_with(&word.text, &self.options, self.config.trigger, &self.predicate)
    }

    /// Handle a text change or caret move
    pub fn on_input(&self, state: MentionState, buffer: &str, cursor: usize) -> (MentionState, MentionView<'_, O>) {
        let cursor = offsets::clamp_cursor(buffer, cursor);
        let word = locate(buffer, cursor, self.config.trigger);
        let visible = self.visible(&word);
        let hover = state.hover.on_located(&word, visible.len());
        let spans = mention_spans(buffer, &self.options, self.config.trigger);

        debug!(open = hover.is_open(), visible = visible.len(), spans = spans.len(), "Processed input change");

        let view = MentionView {
            hover: hover.hover_index(visible.len()),
            visible,
            spans,
        };
        (MentionState { hover, word }, view)
    }

    /// Handle Up/Down/Enter against the state from the last input change
    pub fn on_key(&self, state: MentionState, key: NavKey, buffer: &str) -> (MentionState, KeyOutcome) {
        let visible = self.visible(&state.word);
        let Some(current) = state.hover.hover_index(visible.len()) else {
            return (state, KeyOutcome::Ignored);
        };

        match key {
            NavKey::Up | NavKey::Down => {
                let hover = state.hover.on_nav(key, visible.len());
                match hover.hover_index(visible.len()) {
                    Some(index) if !visible.is_empty() => {
                        (MentionState { hover, ..state }, KeyOutcome::Moved { hover: index })
                    }
                    _ => (state, KeyOutcome::Ignored),
                }
            }
            NavKey::Enter => {
                let Some(option) = visible.get(current) else {
                    return (state, KeyOutcome::Ignored);
                };
                let applied = apply(buffer, &state.word, *option, self.config.trigger);
                let next = MentionState {
                    hover: HoverState::Closed,
                    word: LocatedWord::empty_at(applied.cursor),
                };
                (next, KeyOutcome::Selected(applied))
            }
        }
    }

    /// Options mentioned in the buffer, in document order
    pub fn collect(&self, buffer: &str) -> Vec<&O> {
        crate::mention::collect_mentions(buffer, &self.options, self.config.trigger)
    }
}
