//! YANG data definitions for the `ietf-interfaces` subset
//!
//! The structs here serialize to the JSON encoding of YANG data
//! (RFC 7951), with module-qualified names on the top-level container
//! and on augmenting nodes.

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Interface type identities from `iana-if-type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterfaceType {
    /// Software loopback interface
    #[serde(rename = "iana-if-type:softwareLoopback")]
    SoftwareLoopback,
}

impl InterfaceType {
    /// Get the module-qualified identity name
    pub fn as_str(self) -> &'static str {
        match self {
            InterfaceType::SoftwareLoopback => "iana-if-type:softwareLoopback",
        }
    }
}

impl std::fmt::Display for InterfaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body for creating an interface: the `ietf-interfaces:interface` container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceRequest {
    #[serde(rename = "ietf-interfaces:interface")]
    pub interface: Interface,
}

/// A single entry of the `ietf-interfaces` interface list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    pub name: String,
    #[serde(rename = "type")]
    pub interface_type: InterfaceType,
    pub enabled: bool,
    #[serde(rename = "ietf-ip:ipv4")]
    pub ipv4: Ipv4,
}

/// `ietf-ip:ipv4` augmentation of an interface
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ipv4 {
    pub address: Vec<Ipv4Address>,
}

/// Address entry keyed by `ip`, with a dotted-quad netmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ipv4Address {
    pub ip: Ipv4Addr,
    pub netmask: Ipv4Addr,
}

impl InterfaceRequest {
    /// Build an enabled loopback interface carrying a single address
    pub fn loopback(name: impl Into<String>, ip: Ipv4Addr, netmask: Ipv4Addr) -> Self {
        Self {
            interface: Interface {
                name: name.into(),
                interface_type: InterfaceType::SoftwareLoopback,
                enabled: true,
                ipv4: Ipv4 {
                    address: vec![Ipv4Address { ip, netmask }],
                },
            },
        }
    }

    /// Set the `enabled` leaf
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.interface.enabled = enabled;
        self
    }

    /// Serialize to the compact JSON request body
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
