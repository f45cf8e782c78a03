pub mod client;
pub mod dataset;

pub use client::*;
pub use dataset::*;
