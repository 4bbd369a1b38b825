//! Outbound adapters implementing domain ports.
//!
//! Adapters are thin translators between domain types and the storage they
//! wrap. They contain no business logic; authorisation and status codes stay
//! in the domain services.
//!
//! - **persistence**: process-local repositories for articles and members.

pub mod persistence;
