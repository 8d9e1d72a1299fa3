//! Client-side counterpart of the service: a typed remote resource client
//! plus optimistic in-memory stores that keep a cache of the server state.
//!
//! Mutations apply locally first for perceived responsiveness, then confirm
//! against the server; a remote failure rolls the local state back exactly
//! and surfaces the error to the caller.

pub mod app;
pub mod error;
pub mod model;
pub mod remote;
pub mod store;

pub use app::{App, Theme};
pub use error::{ClientError, ClientResult};
pub use model::{Card, CardDraft, CardPatch, Stack, StackPatch};
pub use remote::{HttpRemote, RemoteApi};
pub use store::{CardStore, StackStore, Workspace};
