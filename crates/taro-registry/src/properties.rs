//! Flat property view of a registry config
//!
//! [`RegistryProperties`] is the shape used both when overlaying values from
//! property sources and when publishing a registry config as a string map.

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use taro_common::{
    CHECK_KEY, CLIENT_KEY, CLUSTER_KEY, DEFAULT_KEY, DYNAMIC_KEY, FILE_KEY, GROUP_KEY,
    PASSWORD_KEY, PORT_KEY, PROTOCOL_KEY, REGISTER_KEY, Result, SERVER_KEY, SESSION_KEY,
    SIMPLIFIED_KEY, SUBSCRIBE_KEY, TIMEOUT_KEY, TRANSPORTER_KEY, TaroError, USERNAME_KEY,
    VERSION_KEY, WAIT_KEY,
};

use crate::EXTRA_KEYS_KEY;

/// Keys written by [`RegistryProperties::to_parameters`] for named fields
const PUBLISHED_KEYS: [&str; 21] = [
    PROTOCOL_KEY,
    PORT_KEY,
    USERNAME_KEY,
    PASSWORD_KEY,
    TRANSPORTER_KEY,
    SERVER_KEY,
    CLIENT_KEY,
    CLUSTER_KEY,
    GROUP_KEY,
    VERSION_KEY,
    TIMEOUT_KEY,
    SESSION_KEY,
    FILE_KEY,
    WAIT_KEY,
    CHECK_KEY,
    DYNAMIC_KEY,
    REGISTER_KEY,
    SUBSCRIBE_KEY,
    DEFAULT_KEY,
    SIMPLIFIED_KEY,
    EXTRA_KEYS_KEY,
];

/// Whether `key` is the published name of a named registry property
pub fn is_published_key(key: &str) -> bool {
    PUBLISHED_KEYS.contains(&key)
}

/// Every settable field of a registry config, all optional.
///
/// Property names are kebab-case; `is_default` is published as `default`
/// and `extra_keys` as `extra-keys`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RegistryProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(alias = "transport", skip_serializing_if = "Option::is_none")]
    pub transporter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub register: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribe: Option<bool>,
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simplified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_keys: Option<String>,
}

impl RegistryProperties {
    /// Render as a flat string map for downstream transport.
    ///
    /// `id` and `address` are not part of the published map. Entries of
    /// `parameters` fill the remaining keys; a named field always wins.
    pub fn to_parameters(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        put(&mut map, PROTOCOL_KEY, &self.protocol);
        put(&mut map, PORT_KEY, &self.port);
        put(&mut map, USERNAME_KEY, &self.username);
        put(&mut map, PASSWORD_KEY, &self.password);
        put(&mut map, TRANSPORTER_KEY, &self.transporter);
        put(&mut map, SERVER_KEY, &self.server);
        put(&mut map, CLIENT_KEY, &self.client);
        put(&mut map, CLUSTER_KEY, &self.cluster);
        put(&mut map, GROUP_KEY, &self.group);
        put(&mut map, VERSION_KEY, &self.version);
        put(&mut map, TIMEOUT_KEY, &self.timeout);
        put(&mut map, SESSION_KEY, &self.session);
        put(&mut map, FILE_KEY, &self.file);
        put(&mut map, WAIT_KEY, &self.wait);
        put(&mut map, CHECK_KEY, &self.check);
        put(&mut map, DYNAMIC_KEY, &self.dynamic);
        put(&mut map, REGISTER_KEY, &self.register);
        put(&mut map, SUBSCRIBE_KEY, &self.subscribe);
        put(&mut map, DEFAULT_KEY, &self.is_default);
        put(&mut map, SIMPLIFIED_KEY, &self.simplified);
        put(&mut map, EXTRA_KEYS_KEY, &self.extra_keys);
        if let Some(parameters) = &self.parameters {
            for (key, value) in parameters {
                map.entry(key.clone()).or_insert_with(|| value.clone());
            }
        }
        map
    }

    /// Read back a map produced by [`RegistryProperties::to_parameters`].
    ///
    /// Unknown keys are collected into `parameters`. A named numeric or
    /// boolean field that does not parse is an error.
    pub fn from_parameters(map: &BTreeMap<String, String>) -> Result<Self> {
        let mut props = Self::default();
        let mut extra = HashMap::new();
        for (key, value) in map {
            match key.as_str() {
                PROTOCOL_KEY => props.protocol = Some(value.clone()),
                PORT_KEY => props.port = Some(parse(key, value)?),
                USERNAME_KEY => props.username = Some(value.clone()),
                PASSWORD_KEY => props.password = Some(value.clone()),
                TRANSPORTER_KEY => props.transporter = Some(value.clone()),
                SERVER_KEY => props.server = Some(value.clone()),
                CLIENT_KEY => props.client = Some(value.clone()),
                CLUSTER_KEY => props.cluster = Some(value.clone()),
                GROUP_KEY => props.group = Some(value.clone()),
                VERSION_KEY => props.version = Some(value.clone()),
                TIMEOUT_KEY => props.timeout = Some(parse(key, value)?),
                SESSION_KEY => props.session = Some(parse(key, value)?),
                FILE_KEY => props.file = Some(value.clone()),
                WAIT_KEY => props.wait = Some(parse(key, value)?),
                CHECK_KEY => props.check = Some(parse(key, value)?),
                DYNAMIC_KEY => props.dynamic = Some(parse(key, value)?),
                REGISTER_KEY => props.register = Some(parse(key, value)?),
                SUBSCRIBE_KEY => props.subscribe = Some(parse(key, value)?),
                DEFAULT_KEY => props.is_default = Some(parse(key, value)?),
                SIMPLIFIED_KEY => props.simplified = Some(parse(key, value)?),
                EXTRA_KEYS_KEY => props.extra_keys = Some(value.clone()),
                _ => {
                    extra.insert(key.clone(), value.clone());
                }
            }
        }
        if !extra.is_empty() {
            props.parameters = Some(extra);
        }
        Ok(props)
    }
}

fn put<T: ToString>(map: &mut BTreeMap<String, String>, key: &str, value: &Option<T>) {
    if let Some(value) = value {
        map.insert(key.to_string(), value.to_string());
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| TaroError::invalid_value(key, value))
}
