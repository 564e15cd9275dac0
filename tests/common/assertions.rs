//! Common assertion helpers for report output validation

#![allow(dead_code)]

use predicates::prelude::*;

/// Report line of a repository with the given relative path and status text
pub fn has_repository(path: &str, status: &str) -> impl Predicate<str> {
    predicates::str::contains(format!(" {path}  =>  {status}"))
}

/// Report line of an uninitialized directory
pub fn has_uninitialized(path: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("[?] {path}\n"))
}

pub fn has_repository_count(count: usize) -> impl Predicate<str> {
    predicates::str::contains(format!("GIT REPOSITORIES FOUND: {count}\n"))
}

pub fn invalid_root() -> impl Predicate<str> {
    predicates::str::contains("Error:").and(predicates::str::contains("not found."))
}
