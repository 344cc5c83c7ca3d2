//! Auth types shared across Ink Trace services.
//!
//! Provides JWT validation, cookie builders, and the `Identity` / `MaybeIdentity` extractors.

pub mod cookie;
pub mod identity;
pub mod token;
