//! Lazy traversal from log roots to parsed request events.
//!
//! The data flow is:
//!
//! roots
//! LogFiles (leaf-directory discovery)
//! LineFilter (textual pre-filter)
//! parse_line
//! RequestEvent
//!
//! Nothing here holds more than one open file or one line at a time; only
//! [`collect_events`] materialises the parsed events.

mod discover;
mod events;
mod filter;

pub use discover::*;
pub use events::*;
pub use filter::*;
