//! End-to-end scenarios through the public API: a mock HTTP endpoint, the
//! fetch controller, and the event handler, driven the way the binary's event
//! loop drives them.

use dirbrowse::directory::PageLink::{Ellipsis, Number};
use dirbrowse::source::HttpSource;
use dirbrowse::ui::Body;
use dirbrowse::worker::{FetchController, FetchResponse};
use dirbrowse::{handle_event, initialize, Action, AppState, Config, Event, InitialSnapshot, Screen, User};
use httpmock::prelude::*;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

fn users_json(count: usize) -> Value {
    let users: Vec<Value> = (1..=count)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("U{i}"),
                "username": format!("user{i}"),
                "email": format!("u{i}@example.com"),
                "company": { "name": format!("Company {i}") }
            })
        })
        .collect();
    Value::Array(users)
}

fn user_ids(state: &AppState) -> Vec<i64> {
    match state.compute_viewmodel().body {
        Body::Users { rows, .. } => {
            let names: Vec<String> = rows
                .iter()
                .map(|row| row.name.iter().map(|s| s.text.as_str()).collect())
                .collect();
            names
                .iter()
                .filter_map(|name| name.trim_start_matches('U').parse().ok())
                .collect()
        }
        _ => vec![],
    }
}

/// Executes the actions of one event like the event loop does.
fn dispatch(state: &mut AppState, controller: &mut FetchController, event: &Event) -> Vec<Action> {
    let (_, actions) = handle_event(state, event);
    for action in &actions {
        if *action == Action::Fetch {
            controller.start();
        }
    }
    actions
}

/// Waits for the next response the controller accepts and applies it.
async fn settle(state: &mut AppState, controller: &mut FetchController, responses: &mut UnboundedReceiver<FetchResponse>) {
    while let Some(response) = responses.recv().await {
        if controller.accept(&response) {
            dispatch(state, controller, &Event::FetchCompleted(response.outcome));
            return;
        }
    }
}

fn type_and_commit(state: &mut AppState, controller: &mut FetchController, text: &str) {
    dispatch(state, controller, &Event::SearchMode);
    for c in text.chars() {
        dispatch(state, controller, &Event::Char(c));
    }
    dispatch(state, controller, &Event::CommitQuery);
}

#[tokio::test]
async fn twelve_users_paginate_filter_and_reset() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users");
            then.status(200).json_body(users_json(12));
        })
        .await;

    let source = Arc::new(HttpSource::new(server.url("/users")));
    let (mut controller, mut responses) = FetchController::new(source);
    let mut state = initialize(&Config::default(), InitialSnapshot::default());

    assert_eq!(dispatch(&mut state, &mut controller, &Event::Mount), vec![Action::Fetch]);
    assert_eq!(state.screen(), Screen::Loading);
    settle(&mut state, &mut controller, &mut responses).await;

    assert_eq!(state.screen(), Screen::Success);
    assert_eq!(state.total_pages(), 3);
    assert_eq!(user_ids(&state), vec![1, 2, 3, 4, 5]);

    dispatch(&mut state, &mut controller, &Event::NextPage);
    dispatch(&mut state, &mut controller, &Event::NextPage);
    assert_eq!(user_ids(&state), vec![11, 12]);
    dispatch(&mut state, &mut controller, &Event::NextPage);
    assert_eq!(state.current_page(), 3);

    type_and_commit(&mut state, &mut controller, "U1");
    assert_eq!(state.current_page(), 1);
    assert_eq!(user_ids(&state), vec![1, 10, 11, 12]);
    assert_eq!(
        state.compute_viewmodel().summary.as_deref(),
        Some("4 results")
    );
}

#[tokio::test]
async fn server_error_then_retry_succeeds() {
    let server = MockServer::start_async().await;
    let mut failing = server
        .mock_async(|when, then| {
            when.method(GET).path("/users");
            then.status(500);
        })
        .await;

    let source = Arc::new(HttpSource::new(server.url("/users")));
    let (mut controller, mut responses) = FetchController::new(source);
    let mut state = initialize(&Config::default(), InitialSnapshot::default());

    dispatch(&mut state, &mut controller, &Event::Mount);
    settle(&mut state, &mut controller, &mut responses).await;

    assert_eq!(state.screen(), Screen::Error);
    match state.compute_viewmodel().body {
        Body::Error(panel) => assert!(panel.message.contains("500")),
        other => panic!("expected error panel, got {other:?}"),
    }
    assert_eq!(dispatch(&mut state, &mut controller, &Event::NextPage), vec![]);

    failing.delete_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users");
            then.status(200).json_body(users_json(3));
        })
        .await;

    assert_eq!(dispatch(&mut state, &mut controller, &Event::Retry), vec![Action::Fetch]);
    assert!(state.error.is_none());
    settle(&mut state, &mut controller, &mut responses).await;

    assert_eq!(state.screen(), Screen::Success);
    assert_eq!(user_ids(&state), vec![1, 2, 3]);
}

#[tokio::test]
async fn superseded_fetch_never_overwrites_the_latest() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users");
            then.status(200).json_body(users_json(7));
        })
        .await;

    let source = Arc::new(HttpSource::new(server.url("/users")));
    let (mut controller, mut responses) = FetchController::new(source);
    let mut state = initialize(&Config::default(), InitialSnapshot::default());

    dispatch(&mut state, &mut controller, &Event::Mount);
    dispatch(&mut state, &mut controller, &Event::Refresh);
    let latest = controller.generation();

    let stale = FetchResponse::failed(latest - 1, "Error fetching data: 500");
    assert!(!controller.accept(&stale));
    assert!(state.loading);

    settle(&mut state, &mut controller, &mut responses).await;
    assert_eq!(state.screen(), Screen::Success);
    assert_eq!(state.users.len(), 7);
}

#[test]
fn prefetched_snapshot_skips_the_first_fetch_and_compacts_pages() {
    let users: Vec<User> = (1..=60)
        .map(|i| User::new(i, format!("Person {i}"), format!("p{i}@example.com"), "Acme"))
        .collect();
    let mut state = initialize(&Config::default(), InitialSnapshot { users, error: None });

    let (_, actions) = handle_event(&mut state, &Event::Mount);
    assert!(actions.is_empty());
    assert_eq!(state.total_pages(), 12);

    handle_event(&mut state, &Event::GoToPage(6));
    match state.compute_viewmodel().body {
        Body::Users {
            pagination: Some(info),
            ..
        } => assert_eq!(
            info.links,
            vec![Number(1), Ellipsis, Number(5), Number(6), Number(7), Ellipsis, Number(12)]
        ),
        other => panic!("expected paginated users, got {other:?}"),
    }
}

#[test]
fn narrowing_query_reports_empty_results() {
    let users = vec![
        User::new(1, "Leanne Graham", "Sincere@april.biz", "Romaguera-Crona"),
        User::new(2, "Ervin Howell", "Shanna@melissa.tv", "Deckow-Crist"),
    ];
    let mut state = initialize(&Config::default(), InitialSnapshot { users, error: None });

    handle_event(&mut state, &Event::SearchMode);
    for c in "zz".chars() {
        handle_event(&mut state, &Event::Char(c));
    }
    assert!(state.compute_viewmodel().search_bar.stale);
    handle_event(&mut state, &Event::CommitQuery);

    match state.compute_viewmodel().body {
        Body::Empty(empty) => assert_eq!(empty.message, "No results for \"zz\""),
        other => panic!("expected empty state, got {other:?}"),
    }
}
