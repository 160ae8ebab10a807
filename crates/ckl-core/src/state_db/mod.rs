//! Persistent checklist state store (SQLite via sqlx).
//!
//! A flat `entries` table of string keys and string values, the durable
//! analog of the browser's localStorage. Keys are serialized [`crate::key::StateKey`]s;
//! values are stringified booleans and decimal counters.

pub mod db;
pub mod entries;

pub use db::StateDb;
