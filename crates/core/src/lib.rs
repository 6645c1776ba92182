//! gamehaven_core - functional core shared by the gamehaven server and client.
//!
//! Pure data types and functions with no I/O: the game catalog model, the
//! validation schema both sides assert, filter parsing and ordering, the
//! repository contract and cache keys.

pub mod cache;
pub mod catalog;
pub mod storage;
