// Unit tests for selector template expansion

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_expand_replaces_placeholder() {
    assert_eq!(expand("item-{n}", "{n}", 3), "item-3");
    assert_eq!(expand("#row-{n}", "{n}", 42), "#row-42");
}

#[test]
fn test_expand_replaces_first_occurrence_only() {
    assert_eq!(expand("#a-{n} > .b-{n}", "{n}", 7), "#a-7 > .b-{n}");
}

#[test]
fn test_expand_missing_placeholder_is_passthrough() {
    assert_eq!(expand("static", "{n}", 3), "static");
    assert_eq!(expand("", "{n}", 3), "");
}

#[test]
fn test_expand_custom_placeholder_token() {
    assert_eq!(expand("li:nth-child(%d)", "%d", 9), "li:nth-child(9)");
}
