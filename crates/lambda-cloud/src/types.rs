//! Domain value objects returned by the API.
//!
//! Every type here is a plain immutable snapshot built from one response
//! body. The client keeps no identity map: listing the same remote object
//! twice yields two independent values. A field the provider leaves out
//! decodes to `None` (or an empty list), never to an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A provisioned GPU/CPU compute instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instance {
    /// Instance ID.
    pub id: Option<String>,
    /// Region details, passed through as the provider sends them.
    pub region: Option<Value>,
    /// Public IP address.
    pub ip: Option<String>,
    /// Hardware configuration of the instance. The embedded type carries no
    /// region availability (that only appears on the instance-types listing).
    pub instance_type: Option<InstanceType>,
    /// Provider-defined status string (e.g. `booting`, `active`,
    /// `terminated`). Not validated by the client, so new provider statuses
    /// pass through unchanged.
    pub status: Option<String>,
    /// Names of the SSH keys with access to the instance.
    #[serde(default)]
    pub ssh_key_names: Vec<String>,
    /// Names of the file systems attached to the instance.
    #[serde(default)]
    pub file_system_names: Vec<String>,
    /// Hostname.
    pub hostname: Option<String>,
    /// Token for the hosted Jupyter server.
    pub jupyter_token: Option<String>,
    /// URL of the hosted Jupyter server.
    pub jupyter_url: Option<String>,
}

/// A provider-defined compute resource shape with pricing and availability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceType {
    /// Type name, e.g. `gpu_8x_a100_80gb_sxm4`.
    pub name: Option<String>,
    /// On-demand price in US cents per hour.
    pub price_cents_per_hour: Option<u64>,
    /// Human-readable description.
    pub description: Option<String>,
    /// Number of virtual CPUs.
    pub vcpus: Option<u32>,
    /// Memory in GiB.
    pub memory_gib: Option<u32>,
    /// Storage in GiB.
    pub storage_gib: Option<u32>,
    /// Regions where capacity is currently available. Empty when the type is
    /// sold out.
    #[serde(default)]
    pub regions_with_capacity_available: Vec<String>,
}

/// An SSH key registered with the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SshKey {
    /// Key ID.
    pub id: Option<String>,
    /// Key name.
    pub name: Option<String>,
    /// Public key material.
    pub public_key: Option<String>,
    /// Private key material. Populated only on the response to a create that
    /// asked the provider to generate the keypair; never on a listing.
    pub private_key: Option<String>,
}

/// A persistent file system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSystem {
    /// File system ID.
    pub id: Option<String>,
    /// File system name.
    pub name: Option<String>,
    /// Creation timestamp as the provider sends it.
    pub created: Option<String>,
    /// Creating user, passed through opaquely.
    pub created_by: Option<Value>,
    /// Mount point on attached instances.
    pub mount_point: Option<String>,
    /// Region details, passed through opaquely.
    pub region: Option<Value>,
    /// Whether any instance currently has the file system attached.
    pub is_in_use: Option<bool>,
    /// Bytes in use.
    pub bytes_used: Option<u64>,
}

impl FileSystem {
    /// Parse [`created`](FileSystem::created) as an RFC 3339 timestamp.
    ///
    /// Returns `None` when the field is absent or not a valid timestamp.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_at_parses_rfc3339() {
        let fs = FileSystem {
            id: None,
            name: None,
            created: Some("2023-02-24T20:48:56.002Z".to_string()),
            created_by: None,
            mount_point: None,
            region: None,
            is_in_use: None,
            bytes_used: None,
        };

        let parsed = fs.created_at().expect("timestamp should parse");
        assert_eq!(parsed.timestamp(), 1_677_271_736);
    }

    #[test]
    fn created_at_is_none_for_missing_or_invalid_timestamps() {
        let mut fs = FileSystem {
            id: None,
            name: None,
            created: None,
            created_by: None,
            mount_point: None,
            region: None,
            is_in_use: None,
            bytes_used: None,
        };
        assert!(fs.created_at().is_none());

        fs.created = Some("yesterday".to_string());
        assert!(fs.created_at().is_none());
    }
}
