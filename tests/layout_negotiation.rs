use admin_grid::grid::{
    GridIntent, GridLayoutNegotiator, GridReducer, GridViewState, LayoutMetrics, LayoutMode,
};
use admin_grid::ui::mvi::Reducer;

fn negotiator() -> GridLayoutNegotiator {
    GridLayoutNegotiator::new(LayoutMetrics::default())
}

#[test]
fn shrinking_header_never_grows_search() {
    let n = negotiator();
    let mut width = n.metrics().default_search_width;
    for header in (60..=200).rev() {
        let next = n.negotiate(header, width);
        assert!(next <= width, "header {header}: {next} > {width}");
        assert!(next >= n.metrics().min_search_width);
        width = next;
    }
    assert_eq!(width, n.metrics().min_search_width);
}

#[test]
fn growing_header_never_shrinks_search() {
    let n = negotiator();
    let mut width = n.metrics().min_search_width;
    for header in 60..=200 {
        let next = n.negotiate(header, width);
        assert!(next >= width, "header {header}: {next} < {width}");
        assert!(next <= n.metrics().default_search_width);
        width = next;
    }
    assert_eq!(width, n.metrics().default_search_width);
}

#[test]
fn fitting_header_is_stable() {
    let n = negotiator();
    let default = n.metrics().default_search_width;
    assert_eq!(n.negotiate(200, default), default);
    assert_eq!(n.negotiate(200, n.negotiate(200, default)), default);
}

#[test]
fn narrow_viewport_switches_to_single_row_search() {
    let n = negotiator();
    let state = GridViewState::new(vec!["id".into()], 32);
    let state = GridReducer::reduce(
        state,
        GridIntent::HeaderResized {
            width: 70,
            negotiator: n,
        },
    );
    assert_eq!(state.layout_mode, LayoutMode::Mobile);
    // Same row as the title and the right group.
    assert_eq!(state.search_width, 70 - 24 - 22 - 2 - 2);

    let state = GridReducer::reduce(
        state,
        GridIntent::HeaderResized {
            width: 160,
            negotiator: n,
        },
    );
    assert_eq!(state.layout_mode, LayoutMode::Desktop);
    assert_eq!(state.search_width, 32);
}

#[test]
fn reducer_sweep_across_breakpoint_never_widens_search() {
    let n = negotiator();
    let mut state = GridViewState::new(vec!["id".into()], 32);
    let mut widths = Vec::new();
    for width in (60..=120).rev() {
        state = GridReducer::reduce(
            state,
            GridIntent::HeaderResized {
                width,
                negotiator: n,
            },
        );
        widths.push((width, state.layout_mode, state.search_width));
    }
    for pair in widths.windows(2) {
        assert!(pair[1].2 <= pair[0].2, "search grew: {pair:?}");
    }
    assert!(widths.contains(&(80, LayoutMode::Desktop, 30)));
    assert!(widths.contains(&(79, LayoutMode::Mobile, 29)));
}
