// Composition root for the cart service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate concrete adapters and wire them into the cart manager.
// - Expose the HTTP surface.

pub mod config;
pub mod http;
pub mod state;
