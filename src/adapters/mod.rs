// Adapters layer: concrete implementations for external systems (provider
// HTTP APIs, operator interaction, pacing).

pub mod http;
pub mod interactive;
