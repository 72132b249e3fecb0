pub mod client;

pub use client::HttpProductGateway;
