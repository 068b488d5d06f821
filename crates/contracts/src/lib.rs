//! Shared API contracts between the portal frontend and the backend.
//!
//! Every type here mirrors a JSON body of the backend REST API, so the
//! serde field names are the wire names.

pub mod domain;
