//! Tests for the JSON layer.

mod building;
mod path;
