//! Instance type listing.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;
use crate::transport::Transport;
use crate::types::InstanceType;

// ============================================================================
// Wire models
// ============================================================================

/// Success envelope for `GET /instance-types`.
///
/// `data` is a map keyed by type name; with `serde_json/preserve_order` the
/// map iterates in the order the provider sent the keys.
#[derive(Debug, Deserialize)]
struct ListInstanceTypesResponse {
    #[serde(default)]
    data: serde_json::Map<String, Value>,
}

/// One entry of the keyed map: the type itself plus current availability.
#[derive(Debug, Default, Deserialize)]
struct InstanceTypeEntry {
    #[serde(default)]
    instance_type: InstanceTypeData,
    #[serde(default)]
    regions_with_capacity_available: Vec<String>,
}

/// An `instance_type` record as the API returns it, hardware nested under
/// `specs`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct InstanceTypeData {
    pub name: Option<String>,
    pub price_cents_per_hour: Option<u64>,
    pub description: Option<String>,
    #[serde(default)]
    pub specs: InstanceTypeSpecs,
}

/// Nested hardware specs.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct InstanceTypeSpecs {
    pub vcpus: Option<u32>,
    pub memory_gib: Option<u32>,
    pub storage_gib: Option<u32>,
}

impl InstanceTypeData {
    /// Flatten the wire record into the domain object.
    pub(crate) fn into_instance_type(self, regions: Vec<String>) -> InstanceType {
        InstanceType {
            name: self.name,
            price_cents_per_hour: self.price_cents_per_hour,
            description: self.description,
            vcpus: self.specs.vcpus,
            memory_gib: self.specs.memory_gib,
            storage_gib: self.specs.storage_gib,
            regions_with_capacity_available: regions,
        }
    }
}

// ============================================================================
// Resource client
// ============================================================================

/// Client for the `/instance-types` endpoint.
#[derive(Debug, Clone)]
pub struct InstanceTypes {
    transport: Arc<Transport>,
}

impl InstanceTypes {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// List the instance types the provider offers, in provider order.
    ///
    /// A type with an empty
    /// [`regions_with_capacity_available`](InstanceType::regions_with_capacity_available)
    /// is sold out everywhere. No sorting is applied; callers wanting
    /// price order sort themselves.
    ///
    /// # Errors
    /// Returns [`LambdaCloudError`](crate::LambdaCloudError) if the request
    /// fails or the API answers with a failure status.
    pub async fn list(&self) -> Result<Vec<InstanceType>> {
        let response: ListInstanceTypesResponse =
            self.transport.get("/instance-types", None).await?;

        let types = response
            .data
            .into_iter()
            .map(|(_, entry)| {
                let entry: InstanceTypeEntry = serde_json::from_value(entry).unwrap_or_default();
                entry
                    .instance_type
                    .into_instance_type(entry.regions_with_capacity_available)
            })
            .collect();
        Ok(types)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client(server: &MockServer) -> InstanceTypes {
        InstanceTypes::new(Arc::new(
            Transport::new("test-key", server.uri()).expect("client should build"),
        ))
    }

    #[tokio::test]
    async fn preserves_provider_order_not_price_order() {
        let server = MockServer::start().await;
        // Provider order is deliberately not price order.
        Mock::given(method("GET"))
            .and(path("/instance-types"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "gpu_8x_a100_80gb_sxm4": {
                        "instance_type": {
                            "name": "gpu_8x_a100_80gb_sxm4",
                            "price_cents_per_hour": 1200,
                            "description": "8x A100 (80 GB SXM4)",
                            "specs": {"vcpus": 240, "memory_gib": 1800, "storage_gib": 20000},
                        },
                        "regions_with_capacity_available": ["us-east-1"],
                    },
                    "gpu_1x_a10": {
                        "instance_type": {
                            "name": "gpu_1x_a10",
                            "price_cents_per_hour": 60,
                            "description": "1x A10 (24 GB PCIe)",
                            "specs": {"vcpus": 30, "memory_gib": 200, "storage_gib": 1400},
                        },
                        "regions_with_capacity_available": [],
                    },
                    "gpu_1x_a100": {
                        "instance_type": {
                            "name": "gpu_1x_a100",
                            "price_cents_per_hour": 110,
                            "description": "1x A100 (40 GB SXM4)",
                            "specs": {"vcpus": 30, "memory_gib": 200, "storage_gib": 512},
                        },
                        "regions_with_capacity_available": ["us-west-2", "us-east-1"],
                    },
                },
            })))
            .mount(&server)
            .await;

        let types = client(&server).list().await.expect("list should succeed");
        let names: Vec<_> = types.iter().filter_map(|t| t.name.as_deref()).collect();
        assert_eq!(
            names,
            vec!["gpu_8x_a100_80gb_sxm4", "gpu_1x_a10", "gpu_1x_a100"],
        );
    }

    #[tokio::test]
    async fn flattens_specs_and_availability() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/instance-types"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "gpu_1x_a100": {
                        "instance_type": {
                            "name": "gpu_1x_a100",
                            "price_cents_per_hour": 110,
                            "description": "1x A100 (40 GB SXM4)",
                            "specs": {"vcpus": 30, "memory_gib": 200, "storage_gib": 512},
                        },
                        "regions_with_capacity_available": ["us-west-2"],
                    },
                },
            })))
            .mount(&server)
            .await;

        let types = client(&server).list().await.expect("list should succeed");
        assert_eq!(types.len(), 1);
        let ty = &types[0];
        assert_eq!(ty.price_cents_per_hour, Some(110));
        assert_eq!(ty.vcpus, Some(30));
        assert_eq!(ty.memory_gib, Some(200));
        assert_eq!(ty.storage_gib, Some(512));
        assert_eq!(ty.regions_with_capacity_available, vec!["us-west-2"]);
    }

    #[test]
    fn sold_out_entry_decodes_to_empty_regions() {
        let entry: InstanceTypeEntry = serde_json::from_value(json!({
            "instance_type": {"name": "gpu_1x_h100_pcie"},
        }))
        .expect("entry should decode");

        let ty = entry
            .instance_type
            .into_instance_type(entry.regions_with_capacity_available);
        assert_eq!(ty.name.as_deref(), Some("gpu_1x_h100_pcie"));
        assert!(ty.regions_with_capacity_available.is_empty());
        assert!(ty.vcpus.is_none());
    }

    #[test]
    fn missing_data_field_decodes_to_empty_map() {
        let response: ListInstanceTypesResponse =
            serde_json::from_value(json!({})).expect("envelope should decode");
        assert!(response.data.is_empty());
    }
}
