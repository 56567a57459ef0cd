//! Typed client for the Lambda Cloud GPU instance API.
//!
//! This crate wraps the Lambda Cloud REST API
//! (`https://cloud.lambdalabs.com/api/v1`) with typed access to four
//! resources — compute instances, instance types, SSH keys, and file
//! systems — plus the instance lifecycle operations (launch, terminate,
//! restart).
//!
//! ## Design
//!
//! Every operation is one request/response exchange: build an HTTP request,
//! decode the JSON success envelope (`{"data": ...}`) into a plain value
//! object, or turn a failure status into [`LambdaCloudError::Api`]. There is
//! no retrying, no caching, and no client-side state; to observe a lifecycle
//! transition, poll the listing endpoints.
//!
//! Decoding is deliberately lenient: a field the provider leaves out becomes
//! `None` or an empty list, never an error, and list responses keep the
//! provider's ordering.
//!
//! ## Example
//!
//! ```ignore
//! use lambda_cloud::{LambdaClient, LaunchRequest};
//!
//! let client = LambdaClient::new(api_key)?;
//!
//! // Find a type with capacity and launch one instance.
//! let types = client.instance_types().list().await?;
//! let available = types
//!     .iter()
//!     .find(|t| !t.regions_with_capacity_available.is_empty())
//!     .expect("everything is sold out");
//!
//! let ids = client
//!     .instances()
//!     .launch(LaunchRequest::new(
//!         available.regions_with_capacity_available[0].clone(),
//!         available.name.clone().unwrap(),
//!         vec!["my-key".to_string()],
//!     ))
//!     .await?;
//!
//! // Later: terminate by id.
//! client.instances().terminate(ids.unwrap()).await?;
//! ```

pub mod client;
pub mod error;
pub mod resources;
pub mod transport;
pub mod types;

pub use client::LambdaClient;
pub use error::{LambdaCloudError, Result};
pub use resources::{FileSystems, InstanceIds, InstanceTypes, Instances, LaunchRequest, SshKeys};
pub use transport::{Transport, DEFAULT_BASE_URL};
pub use types::{FileSystem, Instance, InstanceType, SshKey};
