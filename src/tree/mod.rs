//! Filesystem traversal and hashing
//!
//! Walks a directory tree, hashes every regular file and collects the results
//! into a [`Snapshot`](crate::types::Snapshot).

pub mod hasher;
pub mod path;
pub mod scanner;
pub mod walker;
