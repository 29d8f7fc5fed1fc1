mod client;

pub use client::PoliteClient;
