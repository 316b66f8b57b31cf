// Composition root for the registration context.
//
// Responsibilities
// - Read config from environment.
// - Install the tracing subscriber.
// - Parse a session file and replay it against a fresh registry.

pub mod config;
pub mod logging;
pub mod session;
