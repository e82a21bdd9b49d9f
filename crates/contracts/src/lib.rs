//! Wire contracts shared by the admin UI and the remote store API.
//!
//! Every type here mirrors the JSON the API speaks (camelCase fields).

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
