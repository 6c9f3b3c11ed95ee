//! Catalog View
//!
//! Client-side product catalog manager: search, "load more" pagination,
//! title edits and deletes over an in-memory product list.
//!
//! Follows a Pure Core / Impure Shell layout. `model` and `state` are pure;
//! `source`, `config`, `logging` and `shell` perform I/O.

pub mod config;
pub mod logging;
pub mod model;
pub mod shell;
pub mod source;
pub mod state;
