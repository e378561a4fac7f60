//! restconf-client - Rust client for RESTCONF device configuration
//!
//! This library serializes YANG-modeled interface configuration to the
//! `application/yang-data+json` encoding and sends it to a network device's
//! RESTCONF API over HTTP with basic authentication.
//!
//! # Example
//!
//! ```no_run
//! use std::net::Ipv4Addr;
//! use std::time::Duration;
//! use restconf_client::{Client, InterfaceRequest};
//!
//! # async fn run() -> restconf_client::Result<()> {
//! let client = Client::new(Duration::from_secs(30), "https://198.51.100.10", "admin", "admin");
//!
//! let config = InterfaceRequest::loopback(
//!     "Loopback200",
//!     Ipv4Addr::new(20, 0, 0, 1),
//!     Ipv4Addr::new(255, 255, 255, 255),
//! );
//!
//! let response = client.create_loopback_interface(&config).await?;
//! println!("{}", response.status());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
mod error;
pub mod media_types;
mod types;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{RestconfError, Result};
pub use media_types::MediaType;
pub use types::{Interface, InterfaceRequest, InterfaceType, Ipv4, Ipv4Address};

/// Re-export the response types handed back by [`Client`]
pub use reqwest::{Response, StatusCode};
