//! Taro Common - Shared types, traits, and utilities
//!
//! This crate provides the foundational pieces used by Taro configuration objects:
//! - Error types
//! - Field validators
//! - Property-source environment for overlay
//! - Shutdown settings shared with the application
//! - Common constants

pub mod environment;
pub mod error;
pub mod shutdown;
pub mod traits;
pub mod validation;

// Re-exports for convenience
pub use environment::ConfigEnvironment;
pub use error::{Result, TaroError};
pub use shutdown::ShutdownSettings;
pub use traits::*;
pub use validation::{ConfigValidator, DefaultValidator};

/// Separator between a scheme and the rest of an address
pub const PROTOCOL_SEPARATOR: &str = "://";

/// Protocol assumed when none is configured
pub const DEFAULT_PROTOCOL: &str = "dubbo";

/// Protocol token of the ZooKeeper coordination service
pub const ZOOKEEPER_PROTOCOL: &str = "zookeeper";

/// Property keys
pub const PROTOCOL_KEY: &str = "protocol";
pub const PORT_KEY: &str = "port";
pub const USERNAME_KEY: &str = "username";
pub const PASSWORD_KEY: &str = "password";
pub const TRANSPORTER_KEY: &str = "transporter";
pub const SERVER_KEY: &str = "server";
pub const CLIENT_KEY: &str = "client";
pub const CLUSTER_KEY: &str = "cluster";
pub const GROUP_KEY: &str = "group";
pub const VERSION_KEY: &str = "version";
pub const TIMEOUT_KEY: &str = "timeout";
pub const SESSION_KEY: &str = "session";
pub const FILE_KEY: &str = "file";
pub const WAIT_KEY: &str = "wait";
pub const CHECK_KEY: &str = "check";
pub const DYNAMIC_KEY: &str = "dynamic";
pub const REGISTER_KEY: &str = "register";
pub const SUBSCRIBE_KEY: &str = "subscribe";
pub const DEFAULT_KEY: &str = "default";
pub const SIMPLIFIED_KEY: &str = "simplified";
