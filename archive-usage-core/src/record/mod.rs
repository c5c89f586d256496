//! Access-log record parsing.
//!
//! One raw log line becomes one [`RequestEvent`]. The parser works on the
//! whitespace-separated positional layout of the archive's access logs and
//! classifies the dataset identifier found in the request path as it goes.

mod error;
mod parse;
mod types;

pub use error::*;
pub use parse::*;
pub use types::*;
