pub mod client;
pub mod decode;
mod models;

pub use client::{PlexClient, PlexClientBuilder};
