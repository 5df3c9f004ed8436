//! Normalization of arbitrary display strings into bare identifiers.
//!
//! Every flavor goes through the same raw pass first:
//!
//! 1. leading whitespace is stripped (an empty remainder is an error),
//! 2. characters that cannot appear in an identifier become `_`,
//!    and a leading character that cannot start one gets a `_` prefix,
//! 3. runs of `_` are collapsed and trailing `_` removed.
//!
//! The flavor then applies its case transform, and finally a trailing `_` is
//! appended if the result is a reserved keyword.

use super::keywords::is_keyword;
use crate::error::TranspileError;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static NON_ASCII_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").unwrap());
static NON_XID_CONTINUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{XID_Continue}]").unwrap());
static XID_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\p{XID_Start}_]").unwrap());
static UNDERSCORE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__+").unwrap());
static LOWER_UPPER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());
static UNDERSCORE_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([a-zA-Z])").unwrap());

/// Runs the flavor-independent part of sanitization.
pub fn str_to_raw_id(s: &str) -> Result<String, TranspileError> {
    let s = s.trim_start();
    if s.is_empty() {
        return Err(TranspileError::EmptyIdentifier);
    }

    let mut id = if s.is_ascii() {
        let replaced = NON_ASCII_WORD.replace_all(s, "_");
        if replaced.starts_with(|c: char| c.is_ascii_digit()) {
            format!("_{}", replaced)
        } else {
            replaced.into_owned()
        }
    } else {
        let replaced = NON_XID_CONTINUE.replace_all(s, "_");
        if XID_START.is_match(&replaced) {
            replaced.into_owned()
        } else {
            format!("_{}", replaced)
        }
    };

    id = UNDERSCORE_RUN.replace_all(&id, "_").into_owned();
    let trimmed = id.trim_end_matches('_');
    // A seed made only of punctuation keeps a single underscore.
    if trimmed.is_empty() {
        return Ok("_".to_string());
    }
    Ok(trimmed.to_string())
}

/// `fooBar` -> `foo_bar`
pub fn id_to_lower(id: &str) -> String {
    LOWER_UPPER.replace_all(id, "${1}_${2}").to_lowercase()
}

/// `fooBar` -> `FOO_BAR`
pub fn id_to_upper(id: &str) -> String {
    LOWER_UPPER.replace_all(id, "${1}_${2}").to_uppercase()
}

/// `foo_bar` -> `FooBar`
pub fn id_to_camel(id: &str) -> String {
    let joined = UNDERSCORE_LETTER.replace_all(id, |caps: &Captures| caps[1].to_uppercase());
    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn escape_keyword(mut id: String) -> String {
    if is_keyword(&id) {
        id.push('_');
    }
    id
}

pub fn str_to_mod_id(s: &str) -> Result<String, TranspileError> {
    Ok(escape_keyword(id_to_lower(&str_to_raw_id(s)?)))
}

pub fn str_to_func_id(s: &str) -> Result<String, TranspileError> {
    Ok(escape_keyword(id_to_lower(&str_to_raw_id(s)?)))
}

pub fn str_to_var_id(s: &str) -> Result<String, TranspileError> {
    let id = escape_keyword(id_to_lower(&str_to_raw_id(s)?));
    if id == "i" {
        return Ok("L".to_string());
    }
    Ok(id)
}

pub fn str_to_class_id(s: &str) -> Result<String, TranspileError> {
    Ok(escape_keyword(id_to_camel(&str_to_raw_id(s)?)))
}

pub fn str_to_const_id(s: &str) -> Result<String, TranspileError> {
    Ok(escape_keyword(id_to_upper(&str_to_raw_id(s)?)))
}
