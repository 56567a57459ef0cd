//! Instance listing and lifecycle operations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use super::instance_types::InstanceTypeData;
use crate::error::Result;
use crate::transport::Transport;
use crate::types::Instance;

// ============================================================================
// Wire models
// ============================================================================

/// Success envelope for `GET /instances`.
#[derive(Debug, Deserialize)]
struct ListInstancesResponse {
    #[serde(default)]
    data: Vec<InstanceData>,
}

/// Success envelope for `GET /instances/{id}`.
#[derive(Debug, Deserialize)]
struct GetInstanceResponse {
    data: Option<InstanceData>,
}

/// A single instance record as the API returns it.
#[derive(Debug, Default, Deserialize)]
struct InstanceData {
    id: Option<String>,
    region: Option<Value>,
    ip: Option<String>,
    instance_type: Option<InstanceTypeData>,
    status: Option<String>,
    #[serde(default)]
    ssh_key_names: Vec<String>,
    #[serde(default)]
    file_system_names: Vec<String>,
    hostname: Option<String>,
    jupyter_token: Option<String>,
    jupyter_url: Option<String>,
}

impl InstanceData {
    fn into_instance(self) -> Instance {
        Instance {
            id: self.id,
            region: self.region,
            ip: self.ip,
            // Availability only appears on the instance-types listing.
            instance_type: self.instance_type.map(|t| t.into_instance_type(Vec::new())),
            status: self.status,
            ssh_key_names: self.ssh_key_names,
            file_system_names: self.file_system_names,
            hostname: self.hostname,
            jupyter_token: self.jupyter_token,
            jupyter_url: self.jupyter_url,
        }
    }
}

/// Success envelope for `POST /instance-operations/launch`.
#[derive(Debug, Deserialize)]
struct LaunchResponse {
    data: Option<LaunchData>,
}

#[derive(Debug, Deserialize)]
struct LaunchData {
    instance_ids: Option<Vec<String>>,
}

/// Success envelope for `POST /instance-operations/terminate`.
#[derive(Debug, Deserialize)]
struct TerminateResponse {
    data: Option<TerminateData>,
}

#[derive(Debug, Deserialize)]
struct TerminateData {
    terminated_instances: Option<Vec<String>>,
}

/// Success envelope for `POST /instance-operations/restart`.
#[derive(Debug, Deserialize)]
struct RestartResponse {
    data: Option<RestartData>,
}

#[derive(Debug, Deserialize)]
struct RestartData {
    restarted_instances: Option<Vec<String>>,
}

/// Request body for terminate and restart.
#[derive(Debug, Serialize)]
struct InstanceIdsBody {
    instance_ids: Vec<String>,
}

// ============================================================================
// Request parameters
// ============================================================================

/// Parameters for [`Instances::launch`].
///
/// The serialized body carries exactly these six fields.
#[derive(Debug, Clone, Serialize)]
pub struct LaunchRequest {
    /// Short name of the region to launch into.
    pub region_name: String,
    /// Name of the instance type to launch.
    pub instance_type_name: String,
    /// Names of the SSH keys allowed to access the instances. The provider
    /// currently requires exactly one; this is not validated locally.
    pub ssh_key_names: Vec<String>,
    /// Names of the file systems to attach. The provider currently allows at
    /// most one.
    pub file_system_names: Vec<String>,
    /// Number of instances to launch.
    pub quantity: u32,
    /// User-provided name for the instances.
    pub name: String,
}

impl LaunchRequest {
    /// Build a request launching one unnamed instance with no file systems.
    pub fn new(
        region_name: impl Into<String>,
        instance_type_name: impl Into<String>,
        ssh_key_names: Vec<String>,
    ) -> Self {
        Self {
            region_name: region_name.into(),
            instance_type_name: instance_type_name.into(),
            ssh_key_names,
            file_system_names: Vec::new(),
            quantity: 1,
            name: String::new(),
        }
    }
}

/// One instance id or a list of them.
///
/// The lifecycle endpoints accept either; a single id is normalized to a
/// one-element list before the request body is built.
#[derive(Debug, Clone)]
pub enum InstanceIds {
    /// A single id.
    One(String),
    /// A list of ids.
    Many(Vec<String>),
}

impl InstanceIds {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(id) => vec![id],
            Self::Many(ids) => ids,
        }
    }
}

impl From<String> for InstanceIds {
    fn from(id: String) -> Self {
        Self::One(id)
    }
}

impl From<&str> for InstanceIds {
    fn from(id: &str) -> Self {
        Self::One(id.to_string())
    }
}

impl From<Vec<String>> for InstanceIds {
    fn from(ids: Vec<String>) -> Self {
        Self::Many(ids)
    }
}

impl From<Vec<&str>> for InstanceIds {
    fn from(ids: Vec<&str>) -> Self {
        Self::Many(ids.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for InstanceIds {
    fn from(ids: &[&str]) -> Self {
        Self::Many(ids.iter().map(|id| (*id).to_string()).collect())
    }
}

// ============================================================================
// Resource client
// ============================================================================

/// Client for the `/instances` and `/instance-operations` endpoints.
///
/// There is no local tracking of status transitions; to observe the effect of
/// a lifecycle operation, poll [`list`](Instances::list) or
/// [`get_by_id`](Instances::get_by_id).
#[derive(Debug, Clone)]
pub struct Instances {
    transport: Arc<Transport>,
}

impl Instances {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// List the account's instances, in provider order.
    ///
    /// # Errors
    /// Returns [`LambdaCloudError`](crate::LambdaCloudError) if the request
    /// fails or the API answers with a failure status.
    pub async fn list(&self) -> Result<Vec<Instance>> {
        let response: ListInstancesResponse = self.transport.get("/instances", None).await?;
        Ok(response
            .data
            .into_iter()
            .map(InstanceData::into_instance)
            .collect())
    }

    /// Fetch a single instance by id.
    ///
    /// Returns `Ok(None)` when the success body carries no `data` field,
    /// which the provider uses for unknown ids. The provider may instead
    /// answer with a 4xx, which surfaces as
    /// [`LambdaCloudError::Api`](crate::LambdaCloudError::Api) before this
    /// check runs; both signals mean not-found. Note the lenient `None` path
    /// also swallows any malformed success body.
    ///
    /// # Errors
    /// Returns [`LambdaCloudError`](crate::LambdaCloudError) if the request
    /// fails or the API answers with a failure status.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Instance>> {
        let response: GetInstanceResponse = self
            .transport
            .get(&format!("/instances/{id}"), None)
            .await?;
        Ok(response.data.map(InstanceData::into_instance))
    }

    /// Launch one or more instances of a given type.
    ///
    /// Returns the ids of the newly created instances, or `None` when the
    /// success body does not carry them.
    ///
    /// # Errors
    /// Returns [`LambdaCloudError`](crate::LambdaCloudError) if the request
    /// fails or the API answers with a failure status (e.g. no capacity in
    /// the requested region).
    pub async fn launch(&self, request: LaunchRequest) -> Result<Option<Vec<String>>> {
        info!(
            region = %request.region_name,
            instance_type = %request.instance_type_name,
            quantity = request.quantity,
            "launching instances"
        );

        let response: LaunchResponse = self
            .transport
            .post("/instance-operations/launch", Some(&request), None)
            .await?;
        Ok(response.data.and_then(|data| data.instance_ids))
    }

    /// Terminate one instance or a list of instances.
    ///
    /// Returns the ids the provider reports as terminated, or `None` when
    /// the success body does not carry them.
    ///
    /// # Errors
    /// Returns [`LambdaCloudError`](crate::LambdaCloudError) if the request
    /// fails or the API answers with a failure status.
    pub async fn terminate(&self, ids: impl Into<InstanceIds>) -> Result<Option<Vec<String>>> {
        let body = InstanceIdsBody {
            instance_ids: ids.into().into_vec(),
        };
        info!(count = body.instance_ids.len(), "terminating instances");

        let response: TerminateResponse = self
            .transport
            .post("/instance-operations/terminate", Some(&body), None)
            .await?;
        Ok(response.data.and_then(|data| data.terminated_instances))
    }

    /// Restart one instance or a list of instances.
    ///
    /// Returns the ids the provider reports as restarted, or `None` when the
    /// success body does not carry them.
    ///
    /// # Errors
    /// Returns [`LambdaCloudError`](crate::LambdaCloudError) if the request
    /// fails or the API answers with a failure status.
    pub async fn restart(&self, ids: impl Into<InstanceIds>) -> Result<Option<Vec<String>>> {
        let body = InstanceIdsBody {
            instance_ids: ids.into().into_vec(),
        };
        info!(count = body.instance_ids.len(), "restarting instances");

        let response: RestartResponse = self
            .transport
            .post("/instance-operations/restart", Some(&body), None)
            .await?;
        Ok(response.data.and_then(|data| data.restarted_instances))
    }
}
