//! Taro Registry - Registry endpoint descriptor
//!
//! This crate provides:
//! - `RegistryConfig`: where and how to reach a service registry
//! - Address parsing that infers identifier, protocol and port
//! - Property overlay from a `ConfigEnvironment`
//! - Flat parameter maps for downstream transport

pub mod address;
pub mod properties;
pub mod registry;
pub mod slot;

pub use address::AddressParts;
pub use properties::RegistryProperties;
pub use registry::RegistryConfig;
pub use slot::{Slot, ValueSource};

/// Published key of the extra keys kept by a simplified registry
pub const EXTRA_KEYS_KEY: &str = "extra-keys";

/// Properties overlaid onto every registry config
pub const REGISTRY_PREFIX: &str = "taro.registry";

/// Parent of the per-id registry properties, `taro.registries.<id>`
pub const REGISTRIES_PREFIX: &str = "taro.registries";
