//! Reveal/hide decision for the summary widget.
//!
//! A pure function of `(direction, below_primary_item, widget_exists)`,
//! re-evaluated on every throttled scroll event so the order in which
//! scroll and sensor updates arrive does not matter.

use crate::types::{ScrollDirection, WidgetState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Build the widget, then show it
    BuildAndShow,
    Show,
    Hide,
    /// Nothing exists and nothing should appear
    Stay,
}

pub fn decide(direction: ScrollDirection, below_primary_item: bool, widget_exists: bool) -> Decision {
    match (direction, below_primary_item, widget_exists) {
        (ScrollDirection::Up, true, false) => Decision::BuildAndShow,
        (ScrollDirection::Up, true, true) => Decision::Show,
        (_, _, true) => Decision::Hide,
        (_, _, false) => Decision::Stay,
    }
}

impl Decision {
    /// State after applying this decision to `current`.
    pub fn next_state(self, current: WidgetState) -> WidgetState {
        match self {
            Decision::BuildAndShow | Decision::Show => WidgetState::Visible,
            Decision::Hide => WidgetState::Hidden,
            Decision::Stay => current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScrollDirection::{Other, Up};

    #[test]
    fn test_decision_table() {
        let table = [
            (Up, true, false, Decision::BuildAndShow),
            (Up, true, true, Decision::Show),
            (Up, false, true, Decision::Hide),
            (Up, false, false, Decision::Stay),
            (Other, true, true, Decision::Hide),
            (Other, false, true, Decision::Hide),
            (Other, true, false, Decision::Stay),
            (Other, false, false, Decision::Stay),
        ];

        for (direction, below, exists, expected) in table {
            assert_eq!(
                decide(direction, below, exists),
                expected,
                "direction={:?} below={} exists={}",
                direction,
                below,
                exists
            );
        }
    }

    #[test]
    fn test_next_state() {
        assert_eq!(Decision::BuildAndShow.next_state(WidgetState::Unbuilt), WidgetState::Visible);
        assert_eq!(Decision::Hide.next_state(WidgetState::Visible), WidgetState::Hidden);
        assert_eq!(Decision::Stay.next_state(WidgetState::Unbuilt), WidgetState::Unbuilt);
    }
}
