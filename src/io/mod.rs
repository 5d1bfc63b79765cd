//! JSON wire format: reading topologies and event chains, writing results.
//!
//! All input validation lives here. The propagation core assumes component
//! ids are unique, dependency references resolve, and event timestamps are
//! unique; this layer rejects anything else before the core runs.

pub mod dto;
pub mod mapper;
pub mod reader;
pub mod writer;

pub use reader::JsonFileReader;
