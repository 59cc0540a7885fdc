//! Domain layer containing the data model shared across the service.
//!
//! The frontend never constructs links itself; every entity here is a typed
//! view of what the backend link store returns, plus the request shapes it
//! accepts. Entities are plain data structures without business logic.
//!
//! Field names follow the backend's JSON contract via serde renames, so the
//! Rust side stays snake_case while the wire stays exactly what the backend
//! emits (including its historical casing quirks).

pub mod entities;
