//! commentdash
//!
//! Terminal dashboard for searching, sorting and paginating a remote
//! collection of comment records, with a small user profile page.
//!
//! Pure Core / Impure Shell: `model` and `state` hold data and pure
//! transitions; `storage`, `source` and `view` do the I/O.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod storage;
pub mod view;
