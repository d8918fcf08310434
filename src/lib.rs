//! Device introspection and typed-value core for a TR-069 (CWMP) CPE agent.
//!
//! [`routes`] answers "what is my default route?" from the kernel routing
//! table. [`cwmp`] holds the Annex A value codecs, most importantly the
//! strict boolean grammar. Both are synchronous and keep no state between
//! calls.

pub mod config;
pub mod cwmp;
pub mod error;
pub mod helpers;
pub mod routes;

pub use error::{CoreError, CoreResult};
pub use routes::{DefaultRoute, DefaultRouteResolver, RouteRow};
