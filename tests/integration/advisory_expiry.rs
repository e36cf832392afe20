//! Advisory lifetime integration tests.
//!
//! Uses tokio's paused clock so the 2000 ms expiry is exact and instant.

use std::time::Duration;

use crossterm::event::KeyCode;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use hashtag::actors::AdvisoryTimer;
use hashtag::app::dispatch;
use hashtag::tea::{Message, Model};
use hashtag::EditorConfig;

use super::fixtures::{key, tags, Harness};

async fn settle() {
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
}

fn type_and_commit(model: &mut Model, timer: &mut AdvisoryTimer, text: &str) {
    for c in text.chars() {
        dispatch(model, key(KeyCode::Char(c)), timer);
    }
    dispatch(model, key(KeyCode::Enter), timer);
}

/// Drain expiry messages that are ready and apply them.
fn pump(
    model: &mut Model,
    timer: &mut AdvisoryTimer,
    rx: &mut mpsc::UnboundedReceiver<Message>,
) {
    loop {
        match rx.try_recv() {
            Ok(msg) => {
                dispatch(model, msg, timer);
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
        }
    }
}

/// Test: Advisory disappears after 2000 ms
/// Given a rejected duplicate
/// When 2000 ms pass with no further rejections
/// Then the advisory is gone from the snapshot and from the drawn frame
#[tokio::test(start_paused = true)]
async fn test_advisory_cleared_after_two_seconds() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = AdvisoryTimer::new(tx);
    let mut host = Harness::new(&["dup"]);
    let message = "\"dup\" is already added";

    type_and_commit(&mut host.model, &mut timer, "dup");
    assert!(host.screen_text().contains(message));

    tokio::time::advance(Duration::from_millis(1999)).await;
    settle().await;
    pump(&mut host.model, &mut timer, &mut rx);
    assert!(host.advisory().is_some(), "still visible at 1999 ms");
    assert!(host.screen_text().contains(message));

    tokio::time::advance(Duration::from_millis(1)).await;
    settle().await;
    pump(&mut host.model, &mut timer, &mut rx);
    assert!(host.advisory().is_none());
    assert!(!host.screen_text().contains("already added"));
}

/// Test: A second rejection restarts the clock
/// Given an advisory set at t=0
/// When another duplicate is rejected at t=1500
/// Then the new advisory is still visible at t=2500 and gone at t=3500
#[tokio::test(start_paused = true)]
async fn test_second_rejection_restarts_timer() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = AdvisoryTimer::new(tx);
    let mut model = Model::new(tags(&["a", "b"]), EditorConfig::default());

    type_and_commit(&mut model, &mut timer, "a");
    tokio::time::advance(Duration::from_millis(1500)).await;
    type_and_commit(&mut model, &mut timer, "b");

    tokio::time::advance(Duration::from_millis(1000)).await;
    settle().await;
    pump(&mut model, &mut timer, &mut rx);
    assert_eq!(
        model.snapshot().advisory.as_deref(),
        Some("\"b\" is already added")
    );

    tokio::time::advance(Duration::from_millis(1000)).await;
    settle().await;
    pump(&mut model, &mut timer, &mut rx);
    assert!(model.snapshot().advisory.is_none());
}

/// Test: Teardown cancels the pending expiry
#[tokio::test(start_paused = true)]
async fn test_teardown_cancels_timer() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = AdvisoryTimer::new(tx.clone());
    let mut model = Model::new(tags(&["a"]), EditorConfig::default());

    type_and_commit(&mut model, &mut timer, "a");
    drop(timer);

    tokio::time::advance(Duration::from_secs(10)).await;
    settle().await;
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
}
