//! # Actor Framework
//!
//! Building blocks for state that must have exactly one writer: a Tokio task owns the
//! state, and everything else talks to it through cheap, cloneable clients.
//!
//! ## Why actors here?
//!
//! - Isolated state (no shared memory, no locks)
//! - Message-passing concurrency
//! - Sequential processing within each actor eliminates races between writers
//!
//! A session-wide shopping cart, a stored bearer token and a set of polled order
//! snapshots are all "one value, many readers, serialized writers". Each of them gets
//! its own actor and its own typed client.
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the state and how actions change it
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and context injection
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, Default)]
//! struct Notes { lines: Vec<String> }
//!
//! #[derive(Debug)]
//! enum NotesAction { Append(String), Clear }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("notes error")]
//! struct NotesError;
//!
//! #[async_trait]
//! impl ActorEntity for Notes {
//!     type Action = NotesAction;
//!     type ActionResult = usize;
//!     type Context = ();
//!     type Error = NotesError;
//!
//!     async fn handle_action(&mut self, action: NotesAction, _: &()) -> Result<usize, NotesError> {
//!         match action {
//!             NotesAction::Append(line) => self.lines.push(line),
//!             NotesAction::Clear => self.lines.clear(),
//!         }
//!         Ok(self.lines.len())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::new(Notes::default(), 10);
//!     tokio::spawn(actor.run(()));
//!
//!     client.perform_action(NotesAction::Append("no ice".into())).await.unwrap();
//!     let notes = client.get().await.unwrap();
//!     assert_eq!(notes.lines, vec!["no ice".to_string()]);
//! }
//! ```
//!
//! ## Shutdown
//!
//! An actor stops when the last clone of its client is dropped. Actors that hold other
//! actors' clients in their `Context` must therefore be torn down first.
//!
//! ## Testing
//!
//! See [`mock`] for utilities to test clients without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
