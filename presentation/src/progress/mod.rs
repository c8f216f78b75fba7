//! Progress display while the council deliberates

pub mod reporter;
