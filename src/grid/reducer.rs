//! Reducer for the grid view state.

use crate::ui::mvi::Reducer;

use super::intent::GridIntent;
use super::layout::LayoutMode;
use super::state::{GridViewState, PickerState};

pub struct GridReducer;

impl Reducer for GridReducer {
    type State = GridViewState;
    type Intent = GridIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GridIntent::HeaderResized { width, negotiator } => {
                let shrinking = state.header_width.is_some_and(|last| width < last);
                state.layout_mode = negotiator.mode(width);
                let next = match state.layout_mode {
                    LayoutMode::Mobile => negotiator.mobile_search_width(width),
                    LayoutMode::Desktop => {
                        // Coming back from mobile the box may be wider than
                        // the default; restart negotiation from the default.
                        let current = state
                            .search_width
                            .min(negotiator.metrics().default_search_width);
                        negotiator.negotiate(width, current)
                    }
                };
                // A narrower header never widens the box, including across
                // the breakpoint where the mobile row has no default ceiling.
                state.search_width = if shrinking {
                    next.min(state.search_width)
                } else {
                    next
                };
                state.header_width = Some(width);
                state
            }

            GridIntent::RefreshClicked { at, hold } => {
                state.refresh_until = Some(at + hold);
                state
            }

            GridIntent::Tick { now } => {
                if !state.is_refreshing(now) {
                    state.refresh_until = None;
                }
                state
            }

            GridIntent::ToggleColumn { key } => {
                state.visibility.toggle(&key);
                state
            }

            GridIntent::ShowAllColumns => {
                state.visibility.show_all();
                state
            }

            GridIntent::OpenColumnPicker => {
                state.picker = PickerState::Open { cursor: 0 };
                state
            }

            GridIntent::CloseColumnPicker => {
                state.picker = PickerState::Hidden;
                state
            }

            GridIntent::PickerUp => {
                if let PickerState::Open { cursor } = state.picker {
                    let len = state.visibility.all_keys().len();
                    let cursor = if cursor == 0 {
                        len.saturating_sub(1)
                    } else {
                        cursor - 1
                    };
                    state.picker = PickerState::Open { cursor };
                }
                state
            }

            GridIntent::PickerDown => {
                if let PickerState::Open { cursor } = state.picker {
                    let len = state.visibility.all_keys().len();
                    let cursor = if cursor + 1 >= len { 0 } else { cursor + 1 };
                    state.picker = PickerState::Open { cursor };
                }
                state
            }

            GridIntent::PickerToggle => {
                if let PickerState::Open { cursor } = state.picker {
                    if let Some(key) = state.visibility.all_keys().get(cursor).cloned() {
                        state.visibility.toggle(&key);
                    }
                }
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::layout::{GridLayoutNegotiator, LayoutMetrics};
    use std::time::{Duration, Instant};

    fn state() -> GridViewState {
        GridViewState::new(vec!["code".into(), "name".into(), "active".into()], 32)
    }

    #[test]
    fn resize_below_breakpoint_switches_to_mobile() {
        let negotiator = GridLayoutNegotiator::new(LayoutMetrics::default());
        let state = GridReducer::reduce(
            state(),
            GridIntent::HeaderResized {
                width: 60,
                negotiator,
            },
        );
        assert_eq!(state.layout_mode, LayoutMode::Mobile);
        // 60 - 24 - 22 - 2 - 2 leaves 10, floored at the minimum.
        assert_eq!(state.search_width, 12);

        let state = GridReducer::reduce(
            state,
            GridIntent::HeaderResized {
                width: 200,
                negotiator,
            },
        );
        assert_eq!(state.layout_mode, LayoutMode::Desktop);
        assert_eq!(state.search_width, 32);
    }

    #[test]
    fn shrinking_sweep_never_widens_search() {
        let negotiator = GridLayoutNegotiator::new(LayoutMetrics::default());
        let mut state = state();
        let mut last = u16::MAX;
        for width in (60..=120).rev() {
            state = GridReducer::reduce(state, GridIntent::HeaderResized { width, negotiator });
            assert!(
                state.search_width <= last,
                "search grew {last} -> {} at header {width}",
                state.search_width
            );
            last = state.search_width;
        }
        assert_eq!(state.layout_mode, LayoutMode::Mobile);
    }

    #[test]
    fn mobile_row_is_capped_when_crossing_breakpoint_narrower() {
        // A breakpoint far above the default leaves a wide mobile row.
        let negotiator = GridLayoutNegotiator::new(LayoutMetrics {
            mobile_breakpoint: 140,
            ..LayoutMetrics::default()
        });
        let state = GridReducer::reduce(
            state(),
            GridIntent::HeaderResized {
                width: 160,
                negotiator,
            },
        );
        assert_eq!(state.search_width, 32);
        let state = GridReducer::reduce(
            state,
            GridIntent::HeaderResized {
                width: 130,
                negotiator,
            },
        );
        assert_eq!(state.layout_mode, LayoutMode::Mobile);
        assert_eq!(state.search_width, 32);

        // Widening inside the mobile range fills the row again.
        let state = GridReducer::reduce(
            state,
            GridIntent::HeaderResized {
                width: 135,
                negotiator,
            },
        );
        assert_eq!(state.search_width, 85);
    }

    #[test]
    fn tick_clears_expired_refresh() {
        let at = Instant::now();
        let state = GridReducer::reduce(
            state(),
            GridIntent::RefreshClicked {
                at,
                hold: Duration::from_millis(500),
            },
        );
        assert!(state.is_refreshing(at));
        let state = GridReducer::reduce(
            state,
            GridIntent::Tick {
                now: at + Duration::from_secs(1),
            },
        );
        assert_eq!(state.refresh_until, None);
    }

    #[test]
    fn picker_cursor_wraps_and_toggles() {
        let state = GridReducer::reduce(state(), GridIntent::OpenColumnPicker);
        let state = GridReducer::reduce(state, GridIntent::PickerUp);
        assert_eq!(state.picker, PickerState::Open { cursor: 2 });
        let state = GridReducer::reduce(state, GridIntent::PickerToggle);
        assert_eq!(state.visibility.visible_keys(), vec!["code", "name"]);
    }

    #[test]
    fn picker_moves_are_noops_when_hidden() {
        let state = GridReducer::reduce(state(), GridIntent::PickerDown);
        assert_eq!(state.picker, PickerState::Hidden);
    }
}
