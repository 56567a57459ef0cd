//! File system listing.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;
use crate::transport::Transport;
use crate::types::FileSystem;

/// Success envelope for `GET /file-systems`.
#[derive(Debug, Deserialize)]
struct ListFileSystemsResponse {
    #[serde(default)]
    data: Vec<FileSystemData>,
}

/// A file system record as the API returns it. `region` and `created_by`
/// pass through without a typed model.
#[derive(Debug, Default, Deserialize)]
struct FileSystemData {
    id: Option<String>,
    name: Option<String>,
    created: Option<String>,
    created_by: Option<Value>,
    mount_point: Option<String>,
    region: Option<Value>,
    is_in_use: Option<bool>,
    bytes_used: Option<u64>,
}

impl FileSystemData {
    fn into_file_system(self) -> FileSystem {
        FileSystem {
            id: self.id,
            name: self.name,
            created: self.created,
            created_by: self.created_by,
            mount_point: self.mount_point,
            region: self.region,
            is_in_use: self.is_in_use,
            bytes_used: self.bytes_used,
        }
    }
}

/// Client for the `/file-systems` endpoint.
#[derive(Debug, Clone)]
pub struct FileSystems {
    transport: Arc<Transport>,
}

impl FileSystems {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// List the account's file systems, in provider order.
    ///
    /// # Errors
    /// Returns [`LambdaCloudError`](crate::LambdaCloudError) if the request
    /// fails or the API answers with a failure status.
    pub async fn list(&self) -> Result<Vec<FileSystem>> {
        let response: ListFileSystemsResponse = self.transport.get("/file-systems", None).await?;
        Ok(response
            .data
            .into_iter()
            .map(FileSystemData::into_file_system)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client(server: &MockServer) -> FileSystems {
        FileSystems::new(Arc::new(
            Transport::new("test-key", server.uri()).expect("client should build"),
        ))
    }

    #[tokio::test]
    async fn list_maps_records_and_passes_region_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/file-systems"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {
                        "id": "fs-1",
                        "name": "training-data",
                        "created": "2023-02-24T20:48:56.002Z",
                        "created_by": {"id": "user-1", "email": "ml@example.com"},
                        "mount_point": "/home/ubuntu/training-data",
                        "region": {"name": "us-west-2", "description": "Oregon, USA"},
                        "is_in_use": true,
                        "bytes_used": 2147483648u64,
                    },
                ],
            })))
            .mount(&server)
            .await;

        let systems = client(&server).list().await.expect("list should succeed");
        assert_eq!(systems.len(), 1);
        let fs = &systems[0];
        assert_eq!(fs.id.as_deref(), Some("fs-1"));
        assert_eq!(fs.is_in_use, Some(true));
        assert_eq!(fs.bytes_used, Some(2_147_483_648));
        assert_eq!(fs.region.as_ref().unwrap()["name"], "us-west-2");
        assert!(fs.created_at().is_some());
    }

    #[tokio::test]
    async fn missing_data_field_is_an_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/file-systems"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let systems = client(&server).list().await.expect("list should succeed");
        assert!(systems.is_empty());
    }
}
