//! logfmt encoding: values, the record buffer and its pool
//!
//! See <https://brandur.org/logfmt> for a description of the format.

pub mod buffer;
mod pool;
pub mod timestamp;
pub mod value;

pub use buffer::{Buffer, EOL};
pub use timestamp::{format_timestamp, TIME_FORMAT};
pub use value::{write_value_str, Value};
