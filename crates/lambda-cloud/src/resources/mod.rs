//! Resource clients, one per API resource.
//!
//! Each client holds a shared [`Transport`](crate::transport::Transport) and
//! maps one resource's JSON payloads into the domain objects in
//! [`types`](crate::types). The shared pattern: decode the success envelope
//! with a defaulted `data` field (a missing field yields an empty result,
//! never an error) and keep the provider's response ordering.

pub mod file_systems;
pub mod instance_types;
pub mod instances;
pub mod ssh_keys;

pub use file_systems::FileSystems;
pub use instance_types::InstanceTypes;
pub use instances::{InstanceIds, Instances, LaunchRequest};
pub use ssh_keys::SshKeys;
