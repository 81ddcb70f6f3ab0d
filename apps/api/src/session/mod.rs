// In-memory form sessions. A session is one user's form plus the pending
// text of its four tag inputs. Nothing is persisted.

pub mod handlers;
pub mod models;
pub mod store;

pub use models::{FormPatch, FormSession, TagField};
pub use store::SessionStore;
