//! Editor behavior integration tests.
//!
//! Each test follows one property of the tag input through the host's
//! update function, the same path real key events take.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use hashtag::tea::Command;
use hashtag::{EditorConfig, KeyOutcome, TagInput, TagInputProps};

use super::fixtures::{config, tags, Harness};

/// Test: Non-duplicate input commits exactly once
/// Given a list and a fresh tag typed into the entry
/// When a separator is pressed
/// Then the list grows by exactly that tag, once
#[test]
fn test_commit_notifies_once_with_appended_list() {
    for text in ["a", "two words", "ünïcödé", "#already-hashed"] {
        let value = tags(&["x", "y"]);
        let config = EditorConfig::default();
        let mut editor = TagInput::new();
        let mut calls: Vec<Vec<String>> = Vec::new();

        for c in text.chars() {
            let props = TagInputProps::new(&value, &config);
            let event = KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty());
            editor.handle_key(props, event, |l| calls.push(l));
        }
        let props = TagInputProps::new(&value, &config);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::empty());
        editor.handle_key(props, enter, |l| calls.push(l));

        let mut expected = value.clone();
        expected.push(text.to_string());
        assert_eq!(calls, vec![expected], "input {:?}", text);
    }
}

/// Test: Duplicates never reach the host
/// Given a list containing the typed value
/// When a separator is pressed
/// Then the list is unchanged and the advisory names the value
#[test]
fn test_duplicate_never_notifies() {
    for existing in ["react", "a b", "x"] {
        let mut h = Harness::new(&["react", "a b", "x"]);
        h.type_text(existing);
        h.press(KeyCode::Enter);

        assert!(h.changes.is_empty());
        assert_eq!(h.advisory(), Some(format!("\"{existing}\" is already added")));
        assert_eq!(
            h.commands,
            vec![Command::ScheduleAdvisoryExpiry { generation: 1 }]
        );
    }
}

/// Test: Whitespace-only input does nothing
#[test]
fn test_whitespace_only_is_ignored() {
    for blank in ["", " ", "   ", "\t"] {
        let mut h = Harness::new(&["a"]);
        h.type_text(blank);
        h.press(KeyCode::Enter);

        assert!(h.changes.is_empty(), "input {:?}", blank);
        assert!(h.advisory().is_none());
    }
}

/// Test: Trimming happens before commit
#[test]
fn test_trimmed_before_commit() {
    let mut h = Harness::new(&[]);
    h.type_text("  tag  ");
    h.press(KeyCode::Enter);
    assert_eq!(h.changes, vec![tags(&["tag"])]);
}

/// Test: Trimming happens before the duplicate check
#[test]
fn test_trimmed_before_duplicate_check() {
    let mut h = Harness::new(&["tag"]);
    h.type_text("  tag  ");
    h.press(KeyCode::Enter);
    assert!(h.changes.is_empty());
    assert_eq!(h.advisory().as_deref(), Some("\"tag\" is already added"));
}

/// Test: Backspace at empty entry peels tags off the end
#[test]
fn test_backspace_sequence() {
    let mut h = Harness::new(&["a", "b"]);
    h.press(KeyCode::Backspace);
    h.press(KeyCode::Backspace);
    h.press(KeyCode::Backspace);

    assert_eq!(h.changes, vec![tags(&["a"]), tags(&[])]);
}

/// Test: Explicit removal keeps relative order
#[test]
fn test_remove_middle_chip() {
    let mut h = Harness::new(&["a", "b", "c"]);
    h.press(KeyCode::Left); // c
    h.press(KeyCode::Left); // b
    h.press(KeyCode::Delete);

    assert_eq!(h.changes, vec![tags(&["a", "c"])]);
}

/// Test: The limit withdraws the entry but keeps removal
/// Given max_tags = 2 and two tags
/// When typing and separators are pressed
/// Then nothing changes, until a removal frees a slot
#[test]
fn test_limit_gating_round_trip() {
    let mut h = Harness::with_config(&["a", "b"], config(Some(2), &["Enter", ","]));

    h.type_text("c,");
    h.press(KeyCode::Enter);
    assert!(h.changes.is_empty());
    assert!(h.model.editor.pending().is_empty());

    h.press(KeyCode::Backspace);
    assert_eq!(h.model.tags, tags(&["a"]));

    h.type_text("c,");
    assert_eq!(h.model.tags, tags(&["a", "c"]));
}

/// Test: Custom separators replace the defaults
#[test]
fn test_space_and_enter_separators() {
    let mut h = Harness::with_config(&[], config(None, &["Enter", " "]));

    h.type_text("one ");
    h.type_text("two");
    h.press(KeyCode::Enter);
    h.type_text("three,");

    assert_eq!(h.changes, vec![tags(&["one"]), tags(&["one", "two"])]);
    assert_eq!(h.model.editor.pending(), "three,");
}

/// Test: Separator keys are swallowed even when nothing commits
#[test]
fn test_separator_is_consumed_on_empty_entry() {
    let value = tags(&[]);
    let config = EditorConfig::default();
    let mut editor = TagInput::new();
    let comma = KeyEvent::new(KeyCode::Char(','), KeyModifiers::empty());

    let mut notified = false;

    let props = TagInputProps::new(&value, &config);
    let outcome = editor.handle_key(props, comma, |_| notified = true);
    assert_eq!(outcome, KeyOutcome::Consumed);
    assert!(!notified);
    assert_eq!(editor.pending(), "");
}
