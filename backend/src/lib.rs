//! Article API whose handlers compose fallible steps through a short-circuiting
//! outcome pipeline.
//!
//! - [`domain`] holds the [`Outcome`](domain::Outcome) pipeline, the article and
//!   member models, and the services that produce outcomes.
//! - [`inbound::http`] seeds chains from requests and renders their result.
//! - [`outbound::persistence`] stores articles and members in memory.
//! - [`middleware::Trace`] scopes a [`TraceId`] to each request.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use domain::TraceId;
pub use middleware::Trace;
