//! Client facade wiring the transport to the resource clients.

use std::sync::Arc;

use crate::error::Result;
use crate::resources::{FileSystems, InstanceTypes, Instances, SshKeys};
use crate::transport::{Transport, DEFAULT_BASE_URL};

/// Client for the Lambda Cloud public API.
///
/// Pure composition: one [`Transport`] shared by the four resource clients,
/// wired at construction time. Cloning is cheap and clones share the
/// underlying connection pool, so a single client can serve concurrent
/// callers.
#[derive(Debug, Clone)]
pub struct LambdaClient {
    instances: Instances,
    instance_types: InstanceTypes,
    ssh_keys: SshKeys,
    file_systems: FileSystems,
}

impl LambdaClient {
    /// Create a client for the public API endpoint.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be created.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a different endpoint, e.g. a staging
    /// deployment. `base_url` is used by plain concatenation and should not
    /// end with a slash.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be created.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let transport = Arc::new(Transport::new(api_key, base_url)?);

        Ok(Self {
            instances: Instances::new(Arc::clone(&transport)),
            instance_types: InstanceTypes::new(Arc::clone(&transport)),
            ssh_keys: SshKeys::new(Arc::clone(&transport)),
            file_systems: FileSystems::new(transport),
        })
    }

    /// Instance listing and lifecycle operations.
    #[must_use]
    pub fn instances(&self) -> &Instances {
        &self.instances
    }

    /// Instance type catalogue.
    #[must_use]
    pub fn instance_types(&self) -> &InstanceTypes {
        &self.instance_types
    }

    /// SSH key management.
    #[must_use]
    pub fn ssh_keys(&self) -> &SshKeys {
        &self.ssh_keys
    }

    /// File system listing.
    #[must_use]
    pub fn file_systems(&self) -> &FileSystems {
        &self.file_systems
    }
}
