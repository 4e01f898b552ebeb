// Adapters layer: concrete implementations for external systems.
// Local storage lives under config::cli next to the CLI configuration.

pub mod http;
