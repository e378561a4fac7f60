//! RESTCONF media types and resource paths
//!
//! See: https://www.rfc-editor.org/rfc/rfc8040#section-11.3

/// YANG data media types defined by RESTCONF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// application/yang-data+json
    YangDataJson,
    /// application/yang-data+xml
    YangDataXml,
}

impl MediaType {
    /// Parse a media type from a header value, ignoring parameters
    pub fn from_header(value: &str) -> Option<Self> {
        let essence = value.split(';').next().unwrap_or("").trim();
        match essence {
            "application/yang-data+json" => Some(Self::YangDataJson),
            "application/yang-data+xml" => Some(Self::YangDataXml),
            _ => None,
        }
    }

    /// Get the header value for this media type
    pub fn as_str(self) -> &'static str {
        match self {
            Self::YangDataJson => "application/yang-data+json",
            Self::YangDataXml => "application/yang-data+xml",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// RESTCONF resource paths, relative to the device base URL
pub mod resource {
    /// `ietf-interfaces` interface list
    pub const INTERFACES: &str = "/restconf/data/ietf-interfaces:interfaces";
}
