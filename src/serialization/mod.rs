//! Dataset serialization (delimited text).

mod delimited;

pub use delimited::DelimitedWriter;
