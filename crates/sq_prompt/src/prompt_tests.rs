use serde_json::json;

use super::*;
use crate::insertion::{Document, Insertion};

#[test]
fn render_single_literal() {
    assert_eq!(Prompt::new("What is the weather?").render(), "What is the weather?");
}

#[test]
fn render_interleaves_literals_and_insertions() {
    let prompt = Prompt::new("Rate the text from 1 to ")
        .insert(10_i64)
        .literal(" where ")
        .insert(10_i64)
        .literal(" is best.");

    assert_eq!(prompt.render(), "Rate the text from 1 to 10 where 10 is best.");
}

#[test]
fn render_trims_surrounding_whitespace() {
    let prompt = Prompt::new("  \n Summarize: ").insert("hello").literal("  \n");

    assert_eq!(prompt.render(), "Summarize: hello");
}

#[test]
fn document_insertion_contributes_content() {
    let document = Document::new("notes.txt", "The sky was grey all week.");
    let prompt = Prompt::new("Summarize this:\n").insert(document);

    assert_eq!(prompt.render(), "Summarize this:\nThe sky was grey all week.");
}

#[test]
fn typed_insertions_use_default_representation() {
    let prompt = Prompt::new("float=")
        .insert(2.5)
        .literal(" bool=")
        .insert(true)
        .literal(" json=")
        .insert(json!({"a": 1}));

    assert_eq!(prompt.render(), "float=2.5 bool=true json={\"a\":1}");
}

#[test]
fn literal_without_insertion_extends_first_segment() {
    let prompt = Prompt::new("a").literal("b").literal("c");

    assert_eq!(prompt.render(), "abc");
}

#[test]
fn display_matches_render_inputs() {
    assert_eq!(Insertion::from(42_i64).to_string(), "42");
    assert_eq!(Insertion::from("text").to_string(), "text");
    assert_eq!(Insertion::from(json!([1, 2])).to_string(), "[1,2]");
}
