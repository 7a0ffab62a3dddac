use crate::NoteDraft;

use googletest::prelude::*;

#[test]
fn given_padded_title_and_content_when_built_then_both_are_trimmed() {
    // Given / When
    let draft = NoteDraft::new("  Groceries  ", "  milk and eggs  ").unwrap();

    // Then
    assert_that!(draft.title(), eq("Groceries"));
    assert_that!(draft.content(), eq("milk and eggs"));
}

#[test]
fn given_whitespace_only_title_when_built_then_validation_error() {
    let result = NoteDraft::new("   ", "hello");

    assert_that!(result, err(anything()));
}

#[test]
fn given_whitespace_only_content_when_built_then_validation_error() {
    let result = NoteDraft::new("hello", "  \n ");

    assert_that!(result, err(anything()));
}

#[test]
fn given_both_fields_empty_when_built_then_validation_error() {
    let result = NoteDraft::new("", "");

    assert_that!(result, err(anything()));
}
