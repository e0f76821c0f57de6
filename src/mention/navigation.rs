// WHY: Keyboard hover state for the option dropdown as a plain value
// Each transition takes the current state and returns the next one

use serde::Serialize;

use super::LocatedWord;

/// Dropdown visibility and the hovered row among visible options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum HoverState {
    #[default]
    Closed,
    Open { hover: usize },
}

/// Navigation keys the dropdown reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Enter,
}

impl HoverState {
    pub fn is_open(&self) -> bool {
        matches!(self, HoverState::Open { .. })
    }

    /// Hovered row, clamped into `0..visible` by modulo
    pub fn hover_index(&self, visible: usize) -> Option<usize> {
        match *self {
            HoverState::Closed => None,
            HoverState::Open { hover } => Some(wrap(hover, visible)),
        }
    }

    /// React to a fresh locate result; `visible` is the filtered option count
    pub fn on_located(self, word: &LocatedWord, visible: usize) -> Self {
        match self {
            _ if word.is_empty() => HoverState::Closed,
            HoverState::Closed => HoverState::Open { hover: 0 },
            HoverState::Open { hover } => HoverState::Open {
                hover: wrap(hover, visible),
            },
        }
    }

    /// Move the hover; no-op when closed or when nothing is visible
    pub fn on_nav(self, key: NavKey, visible: usize) -> Self {
        match self {
            HoverState::Open { hover } if visible > 0 => {
                let current = wrap(hover, visible);
                let hover = match key {
                    NavKey::Down => (current + 1) % visible,
                    NavKey::Up => (current + visible - 1) % visible,
                    NavKey::Enter => current,
                };
                HoverState::Open { hover }
            }
            other => other,
        }
    }
}

fn wrap(hover: usize, visible: usize) -> usize {
    if visible == 0 {
        0
    } else {
        hover % visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mention::locate;

    #[test]
    fn test_opens_and_closes_with_live_token() {
        let open = HoverState::Closed.on_located(&locate("@one", 4, '@'), 1);
        assert_eq!(open, HoverState::Open { hover: 0 });

        let closed = open.on_located(&locate("one", 3, '@'), 3);
        assert_eq!(closed, HoverState::Closed);
    }

    #[test]
    fn test_down_and_up_wrap() {
        let state = HoverState::Open { hover: 0 };
        let state = state.on_nav(NavKey::Down, 3).on_nav(NavKey::Down, 3);
        assert_eq!(state, HoverState::Open { hover: 2 });
        assert_eq!(state.on_nav(NavKey::Down, 3), HoverState::Open { hover: 0 });
        assert_eq!(HoverState::Open { hover: 0 }.on_nav(NavKey::Up, 3), HoverState::Open { hover: 2 });
    }

    #[test]
    fn test_no_movement_without_visible_options() {
        let state = HoverState::Open { hover: 1 };
        assert_eq!(state.on_nav(NavKey::Down, 0), state);
        assert_eq!(state.on_nav(NavKey::Up, 0), state);
        assert_eq!(HoverState::Closed.on_nav(NavKey::Down, 3), HoverState::Closed);
    }

    #[test]
    fn test_hover_clamped_when_list_shrinks() {
        let state = HoverState::Open { hover: 2 };
        let word = locate("@tw", 3, '@');
        assert_eq!(state.on_located(&word, 2), HoverState::Open { hover: 0 });
        assert_eq!(HoverState::Open { hover: 4 }.hover_index(3), Some(1));
        assert_eq!(HoverState::Closed.hover_index(3), None);
    }
}
