use super::*;
use crate::error::FetchError;

fn users(n: u64) -> Vec<UserRecord> {
    (1..=n)
        .map(|i| UserRecord {
            id: i,
            name: format!("U{i}"),
            email: format!("u{i}@x"),
            phone: format!("555-000{i}"),
            website: format!("u{i}.example"),
        })
        .collect()
}

fn loaded(n: u64) -> DirectoryState {
    let mut state = DirectoryState::new();
    let seq = state.begin_fetch();
    assert!(state.apply_fetch(seq, Ok(users(n))));
    state
}

fn ready<'a>(state: &'a DirectoryState) -> ResultsView<'a> {
    match state.view() {
        DirectoryView::Ready(results) => results,
        other => panic!("expected results view, got {other:?}"),
    }
}

fn names(results: &ResultsView<'_>) -> Vec<String> {
    results.page_items.iter().map(|u| u.name.clone()).collect()
}

#[test]
fn starts_idle_then_loading() {
    let mut state = DirectoryState::new();
    assert_eq!(state.view(), DirectoryView::Idle);
    assert_eq!(state.page(), 1);
    assert_eq!(state.search(), "");

    let seq = state.begin_fetch();
    assert_eq!(seq, 1);
    assert_eq!(state.fetch_state(), &FetchState::Loading);
    assert_eq!(state.view(), DirectoryView::Loading);
}

#[test]
fn scenario_a_initial_results() {
    let state = loaded(10);
    let results = ready(&state);
    assert_eq!(names(&results), vec!["U1", "U2", "U3", "U4", "U5"]);
    assert_eq!(results.page_label(), "Page 1 of 2");
    assert!(results.has_next());
    assert!(!results.has_prev());
    assert_eq!(results.summary(), "Showing 5 of 10 users");
}

#[test]
fn scenario_b_next_page() {
    let mut state = loaded(10);
    assert!(state.next_page());

    let results = ready(&state);
    assert_eq!(names(&results), vec!["U6", "U7", "U8", "U9", "U10"]);
    assert_eq!(results.page_label(), "Page 2 of 2");
    assert!(!results.has_next());
    assert!(results.has_prev());
}

#[test]
fn scenario_c_search_filters_and_resets_page() {
    let mut state = loaded(10);
    state.next_page();
    assert_eq!(state.page(), 2);

    state.set_search("u1");
    assert_eq!(state.page(), 1);

    let results = ready(&state);
    assert_eq!(names(&results), vec!["U1", "U10"]);
    assert_eq!(results.page_label(), "Page 1 of 1");
    assert_eq!(results.summary(), "Showing 2 of 2 users");
    assert_eq!(results.total_count, 10);
}

#[test]
fn scenario_d_failure_then_retry() {
    let mut state = DirectoryState::new();
    let seq = state.begin_fetch();
    state.apply_fetch(seq, Err(FetchError::Network("connection refused".into())));

    assert!(state.can_retry());
    assert_eq!(state.view(), DirectoryView::Failed { message: "Network error: connection refused" });

    let retry_seq = state.begin_fetch();
    assert_eq!(state.view(), DirectoryView::Loading);
    assert!(state.apply_fetch(retry_seq, Ok(users(3))));

    let results = ready(&state);
    assert_eq!(results.filtered_count, 3);
    assert!(!state.can_retry());
}

#[test]
fn scenario_e_empty_collection() {
    let state = loaded(0);
    let results = ready(&state);
    assert!(results.page_items.is_empty());
    assert_eq!(results.total_pages, 0);
    assert!(!results.show_pagination());
    assert!(!results.has_next());
    assert!(!results.has_prev());
    assert_eq!(results.summary(), "Showing 0 of 0 users");
}

#[test]
fn search_always_resets_page_to_one() {
    let mut state = loaded(23);
    state.next_page();
    state.next_page();
    state.next_page();
    assert_eq!(state.page(), 4);
    state.push_search_char('u');
    assert_eq!(state.page(), 1);

    state.next_page();
    state.pop_search_char();
    assert_eq!(state.page(), 1);

    state.next_page();
    state.clear_search();
    assert_eq!(state.page(), 1);
    assert_eq!(state.search(), "");
}

#[test]
fn search_editing_builds_term_char_by_char() {
    let mut state = loaded(10);
    state.push_search_char('U');
    state.push_search_char('1');
    assert_eq!(state.search(), "U1");
    assert_eq!(ready(&state).filtered_count, 2);

    state.pop_search_char();
    assert_eq!(state.search(), "U");
    assert_eq!(ready(&state).filtered_count, 10);

    state.pop_search_char();
    state.pop_search_char();
    assert_eq!(state.search(), "");
}

#[test]
fn page_stepping_stays_within_bounds() {
    let mut state = loaded(11);
    assert!(!state.prev_page());
    assert_eq!(state.page(), 1);

    assert!(state.next_page());
    assert!(state.next_page());
    assert!(!state.next_page());
    assert_eq!(state.page(), 3);
    assert_eq!(names(&ready(&state)), vec!["U11"]);

    assert!(state.prev_page());
    assert_eq!(state.page(), 2);
}

#[test]
fn page_stepping_is_inert_without_results() {
    let mut state = DirectoryState::new();
    state.begin_fetch();
    assert!(!state.next_page());
    assert!(!state.prev_page());
    assert_eq!(state.page(), 1);

    let mut empty = loaded(0);
    assert!(!empty.next_page());
    assert_eq!(empty.page(), 1);
}

#[test]
fn search_while_loading_is_kept_for_results() {
    let mut state = DirectoryState::new();
    let seq = state.begin_fetch();
    state.set_search("u1");
    assert_eq!(state.view(), DirectoryView::Loading);

    state.apply_fetch(seq, Ok(users(10)));
    assert_eq!(ready(&state).filtered_count, 2);
}

#[test]
fn stale_result_is_discarded() {
    let mut state = DirectoryState::new();
    let first = state.begin_fetch();
    let second = state.begin_fetch();

    assert!(!state.apply_fetch(first, Ok(users(10))));
    assert_eq!(state.view(), DirectoryView::Loading);

    assert!(state.apply_fetch(second, Err(FetchError::Http { status: 500 })));
    assert!(state.can_retry());
}

#[test]
fn duplicate_delivery_is_ignored() {
    let mut state = DirectoryState::new();
    let seq = state.begin_fetch();
    assert!(state.apply_fetch(seq, Ok(users(2))));
    assert!(!state.apply_fetch(seq, Err(FetchError::Decode("late".into()))));
    assert!(matches!(state.fetch_state(), FetchState::Succeeded(_)));
}

#[test]
fn failure_replaces_state_atomically() {
    let mut state = DirectoryState::new();
    let seq = state.begin_fetch();
    state.apply_fetch(seq, Err(FetchError::Http { status: 404 }));
    match state.fetch_state() {
        FetchState::Failed(message) => assert!(message.contains("404")),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn retry_restarts_from_initial_position() {
    let mut state = loaded(10);
    state.set_search("u");
    state.next_page();
    state.begin_fetch();
    assert_eq!(state.search(), "");
    assert_eq!(state.page(), 1);
}

#[test]
fn page_invariant_holds_across_interactions() {
    let mut state = loaded(17);
    for round in 0..60 {
        match (round * 7 + 3) % 6 {
            0 => {
                state.next_page();
            }
            1 => {
                state.prev_page();
            }
            2 => state.push_search_char('1'),
            3 => state.pop_search_char(),
            4 => state.push_search_char('u'),
            _ => state.clear_search(),
        }
        let results = ready(&state);
        assert!(results.page >= 1);
        assert!(results.page <= results.total_pages.max(1), "round {round}: {results:?}");
        assert!(results.page_items.len() <= PAGE_SIZE);
    }
}
