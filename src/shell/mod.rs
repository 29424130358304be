// Composition root for the bookstore service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in memory resource store.
// - Wire the book handler into the HTTP routes.

pub mod config;
pub mod http;
pub mod state;
