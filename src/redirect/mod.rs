//! Path-to-URL redirect handling
//!
//! This module turns a small list of `(path, url)` records into a request
//! handler that answers matching paths with a `302 Found` and hands every
//! other request to a fallback handler.
//!
//! ## Key Components
//!
//! - [`RedirectEntry`] - One decoded `(path, url)` record
//! - [`RedirectTable`] - Immutable path → url lookup table
//! - [`RedirectHandler`] - `tower::Service` that redirects or delegates
//! - [`ParseError`] - The only error the redirect layer produces
//!
//! ## Example
//!
//! ```rust,ignore
//! use urlshort::redirect::{json_handler, map_handler, RedirectTable};
//!
//! let inline = map_handler(RedirectTable::from_iter([("/a", "/x")]), fallback);
//! let handler = json_handler(br#"[{"path":"/b","url":"/y"}]"#, inline)?;
//! ```

mod entry;
mod error;
mod handler;
mod table;

pub use entry::{Format, RedirectEntry, parse, parse_json, parse_yaml};
pub use error::ParseError;
pub use handler::{
    RedirectHandler, ResponseFuture, format_handler, json_handler, map_handler, yaml_handler,
};
pub use table::RedirectTable;
