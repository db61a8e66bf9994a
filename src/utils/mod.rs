// JSON utilities
pub mod json_converter;

pub use json_converter::value_to_short_string;
