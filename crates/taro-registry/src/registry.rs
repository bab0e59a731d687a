//! Registry endpoint descriptor
//!
//! [`RegistryConfig`] describes where and how to reach a service registry.
//! Setting the address infers identifier, protocol and port from it, but
//! only for fields that are still vacant; explicit values always win.

use std::collections::{BTreeMap, HashMap};

use taro_common::{
    CLIENT_KEY, ConfigEntity, ConfigEnvironment, ConfigValidator, DEFAULT_PROTOCOL,
    DefaultValidator, FILE_KEY, PASSWORD_KEY, PROTOCOL_KEY, PROTOCOL_SEPARATOR, Result,
    SERVER_KEY, ShutdownSettings, TRANSPORTER_KEY, TaroError, USERNAME_KEY, ZOOKEEPER_PROTOCOL,
};
use tracing::{debug, trace};

use crate::address::AddressParts;
use crate::properties::{RegistryProperties, is_published_key};
use crate::slot::{Slot, ValueSource};
use crate::{REGISTRIES_PREFIX, REGISTRY_PREFIX};

/// Connection descriptor for one service registry.
///
/// Constrained setters run the configured [`ConfigValidator`] before
/// committing and leave the field untouched when the check fails.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistryConfig<V = DefaultValidator> {
    id: Slot<String>,
    address: Option<String>,
    protocol: Slot<String>,
    port: Slot<i32>,
    username: Option<String>,
    password: Option<String>,
    transporter: Option<String>,
    server: Option<String>,
    client: Option<String>,
    cluster: Option<String>,
    group: Option<String>,
    version: Option<String>,
    /// Request timeout in milliseconds
    timeout: Option<i32>,
    /// Session timeout in milliseconds
    session: Option<i32>,
    /// File for saving the registry's dynamic list
    file: Option<String>,
    wait: Option<i32>,
    check: Option<bool>,
    dynamic: Option<bool>,
    register: Option<bool>,
    subscribe: Option<bool>,
    is_default: Option<bool>,
    simplified: Option<bool>,
    parameters: Option<HashMap<String, String>>,
    /// Extra keys kept when the registry is simplified, e.g. `a,b,c`
    extra_keys: Option<String>,
    validator: V,
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config from an address, inferring identifier, protocol and port
    pub fn with_address(address: impl Into<String>) -> Self {
        let mut config = Self::new();
        config.set_address(address);
        config
    }

    /// Create a config from an address and an explicit protocol.
    ///
    /// The explicit protocol replaces whatever the address scheme implied.
    pub fn with_address_and_protocol(
        address: impl Into<String>,
        protocol: impl Into<String>,
    ) -> Result<Self> {
        let mut config = Self::with_address(address);
        config.set_protocol(protocol)?;
        Ok(config)
    }

    /// Rebuild a config from a map produced by [`RegistryConfig::to_parameters`]
    pub fn from_parameters(
        parameters: &BTreeMap<String, String>,
        shutdown: &ShutdownSettings,
    ) -> Result<Self> {
        let mut config = Self::new();
        config.apply(RegistryProperties::from_parameters(parameters)?, shutdown)?;
        Ok(config)
    }
}

impl<V: ConfigValidator> RegistryConfig<V> {
    /// Create an empty config checked by `validator`
    pub fn with_validator(validator: V) -> Self {
        Self {
            id: Slot::default(),
            address: None,
            protocol: Slot::default(),
            port: Slot::default(),
            username: None,
            password: None,
            transporter: None,
            server: None,
            client: None,
            cluster: None,
            group: None,
            version: None,
            timeout: None,
            session: None,
            file: None,
            wait: None,
            check: None,
            dynamic: None,
            register: None,
            subscribe: None,
            is_default: None,
            simplified: None,
            parameters: None,
            extra_keys: None,
            validator,
        }
    }

    // ========================================================================
    // Inferable fields
    // ========================================================================

    pub fn id(&self) -> Option<&str> {
        self.id.get().map(String::as_str)
    }

    pub fn id_source(&self) -> Option<ValueSource> {
        self.id.source()
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id.assign(id.into());
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Store the address verbatim and infer the vacant fields it implies.
    ///
    /// The scheme fills identifier and protocol, the trailing port fills
    /// port. Addresses without a scheme infer nothing.
    pub fn set_address(&mut self, address: impl Into<String>) {
        let address = address.into();
        let parts = AddressParts::parse(&address);
        if let Some(scheme) = parts.scheme {
            self.update_id_if_absent(scheme);
            self.update_protocol_if_absent(scheme);
        }
        if let Some(port) = parts.port {
            self.update_port_if_absent(port);
        }
        self.address = Some(address);
    }

    pub fn protocol(&self) -> Option<&str> {
        self.protocol.get().map(String::as_str)
    }

    pub fn protocol_source(&self) -> Option<ValueSource> {
        self.protocol.source()
    }

    /// The protocol, or the default protocol when none is configured
    pub fn effective_protocol(&self) -> &str {
        self.protocol()
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_PROTOCOL)
    }

    /// Overwrite the protocol. A vacant identifier takes the protocol name.
    pub fn set_protocol(&mut self, protocol: impl Into<String>) -> Result<()> {
        let protocol = protocol.into();
        self.validator.check_name(PROTOCOL_KEY, Some(&protocol))?;
        self.update_id_if_absent(&protocol);
        self.protocol.assign(protocol);
        Ok(())
    }

    pub fn port(&self) -> Option<i32> {
        self.port.get().copied()
    }

    pub fn port_source(&self) -> Option<ValueSource> {
        self.port.source()
    }

    pub fn set_port(&mut self, port: i32) {
        self.port.assign(port);
    }

    fn update_id_if_absent(&mut self, candidate: &str) {
        if !candidate.is_empty() && self.id.fill_if_vacant(candidate.to_string()) {
            trace!(id = candidate, "Inferred registry id");
        }
    }

    fn update_protocol_if_absent(&mut self, candidate: &str) {
        if !candidate.is_empty() && self.protocol.fill_if_vacant(candidate.to_string()) {
            trace!(protocol = candidate, "Inferred registry protocol");
        }
    }

    fn update_port_if_absent(&mut self, candidate: i32) {
        if candidate > 0 && self.port.fill_if_vacant(candidate) {
            trace!(port = candidate, "Inferred registry port");
        }
    }

    // ========================================================================
    // Credentials and transport
    // ========================================================================

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn set_username(&mut self, username: impl Into<String>) -> Result<()> {
        let username = username.into();
        self.validator.check_name(USERNAME_KEY, Some(&username))?;
        self.username = Some(username);
        Ok(())
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn set_password(&mut self, password: impl Into<String>) -> Result<()> {
        let password = password.into();
        self.validator.check_length(PASSWORD_KEY, Some(&password))?;
        self.password = Some(password);
        Ok(())
    }

    pub fn transporter(&self) -> Option<&str> {
        self.transporter.as_deref()
    }

    pub fn set_transporter(&mut self, transporter: impl Into<String>) -> Result<()> {
        let transporter = transporter.into();
        self.validator
            .check_name(TRANSPORTER_KEY, Some(&transporter))?;
        self.transporter = Some(transporter);
        Ok(())
    }

    #[deprecated(note = "use `transporter`")]
    pub fn transport(&self) -> Option<&str> {
        self.transporter()
    }

    #[deprecated(note = "use `set_transporter`")]
    pub fn set_transport(&mut self, transport: impl Into<String>) -> Result<()> {
        self.set_transporter(transport)
    }

    pub fn server(&self) -> Option<&str> {
        self.server.as_deref()
    }

    pub fn set_server(&mut self, server: impl Into<String>) -> Result<()> {
        let server = server.into();
        self.validator.check_name(SERVER_KEY, Some(&server))?;
        self.server = Some(server);
        Ok(())
    }

    pub fn client(&self) -> Option<&str> {
        self.client.as_deref()
    }

    pub fn set_client(&mut self, client: impl Into<String>) -> Result<()> {
        let client = client.into();
        self.validator.check_name(CLIENT_KEY, Some(&client))?;
        self.client = Some(client);
        Ok(())
    }

    // ========================================================================
    // Free-form descriptors
    // ========================================================================

    pub fn cluster(&self) -> Option<&str> {
        self.cluster.as_deref()
    }

    pub fn set_cluster(&mut self, cluster: impl Into<String>) {
        self.cluster = Some(cluster.into());
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn set_group(&mut self, group: impl Into<String>) {
        self.group = Some(group.into());
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = Some(version.into());
    }

    pub fn timeout(&self) -> Option<i32> {
        self.timeout
    }

    pub fn set_timeout(&mut self, timeout: i32) {
        self.timeout = Some(timeout);
    }

    pub fn session(&self) -> Option<i32> {
        self.session
    }

    pub fn set_session(&mut self, session: i32) {
        self.session = Some(session);
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub fn set_file(&mut self, file: impl Into<String>) -> Result<()> {
        let file = file.into();
        self.validator.check_path_length(FILE_KEY, Some(&file))?;
        self.file = Some(file);
        Ok(())
    }

    #[deprecated(note = "configure the shutdown wait on the application")]
    pub fn wait(&self) -> Option<i32> {
        self.wait
    }

    /// Wait before stop, in milliseconds.
    ///
    /// A positive value is also recorded in `shutdown`, last writer wins.
    #[deprecated(note = "configure the shutdown wait on the application")]
    pub fn set_wait(&mut self, wait: i32, shutdown: &ShutdownSettings) {
        self.wait = Some(wait);
        if wait > 0 {
            debug!(wait, "Registry config sets the shutdown wait");
            shutdown.set_wait_millis(wait as u64);
        }
    }

    // ========================================================================
    // Toggles
    // ========================================================================

    pub fn check(&self) -> Option<bool> {
        self.check
    }

    pub fn set_check(&mut self, check: bool) {
        self.check = Some(check);
    }

    pub fn dynamic(&self) -> Option<bool> {
        self.dynamic
    }

    pub fn set_dynamic(&mut self, dynamic: bool) {
        self.dynamic = Some(dynamic);
    }

    pub fn register(&self) -> Option<bool> {
        self.register
    }

    pub fn set_register(&mut self, register: bool) {
        self.register = Some(register);
    }

    pub fn subscribe(&self) -> Option<bool> {
        self.subscribe
    }

    pub fn set_subscribe(&mut self, subscribe: bool) {
        self.subscribe = Some(subscribe);
    }

    pub fn is_default(&self) -> Option<bool> {
        self.is_default
    }

    pub fn set_default(&mut self, is_default: bool) {
        self.is_default = Some(is_default);
    }

    pub fn simplified(&self) -> Option<bool> {
        self.simplified
    }

    pub fn set_simplified(&mut self, simplified: bool) {
        self.simplified = Some(simplified);
    }

    // ========================================================================
    // Extension parameters
    // ========================================================================

    pub fn parameters(&self) -> Option<&HashMap<String, String>> {
        self.parameters.as_ref()
    }

    /// Replace the extension parameters.
    ///
    /// Keys that name a published property (`group`, `extra-keys`, ...) are
    /// rejected so the named field and the bag never disagree.
    pub fn set_parameters(&mut self, parameters: HashMap<String, String>) -> Result<()> {
        self.validator.check_parameter_names(Some(&parameters))?;
        if let Some(key) = parameters.keys().find(|k| is_published_key(k)) {
            return Err(TaroError::validation(
                key,
                key,
                "reserved for a named registry property",
            ));
        }
        self.parameters = Some(parameters);
        Ok(())
    }

    pub fn extra_keys(&self) -> Option<&str> {
        self.extra_keys.as_deref()
    }

    pub fn set_extra_keys(&mut self, extra_keys: impl Into<String>) {
        self.extra_keys = Some(extra_keys.into());
    }

    // ========================================================================
    // Derived predicates
    // ========================================================================

    /// Usable as soon as it has an address; no protocol means the default one
    pub fn is_valid(&self) -> bool {
        self.address.as_deref().is_some_and(|a| !a.is_empty())
    }

    /// Whether the registry is ZooKeeper, by protocol or by address scheme
    pub fn is_zookeeper_protocol(&self) -> bool {
        if !self.is_valid() {
            return false;
        }
        self.protocol() == Some(ZOOKEEPER_PROTOCOL)
            || self.address.as_deref().is_some_and(|address| {
                address
                    .strip_prefix(ZOOKEEPER_PROTOCOL)
                    .is_some_and(|rest| rest.starts_with(PROTOCOL_SEPARATOR))
            })
    }

    // ========================================================================
    // Property views
    // ========================================================================

    /// Snapshot of every field as flat properties
    pub fn to_properties(&self) -> RegistryProperties {
        RegistryProperties {
            id: self.id().map(str::to_owned),
            address: self.address.clone(),
            protocol: self.protocol().map(str::to_owned),
            port: self.port(),
            username: self.username.clone(),
            password: self.password.clone(),
            transporter: self.transporter.clone(),
            server: self.server.clone(),
            client: self.client.clone(),
            cluster: self.cluster.clone(),
            group: self.group.clone(),
            version: self.version.clone(),
            timeout: self.timeout,
            session: self.session,
            file: self.file.clone(),
            wait: self.wait,
            check: self.check,
            dynamic: self.dynamic,
            register: self.register,
            subscribe: self.subscribe,
            is_default: self.is_default,
            simplified: self.simplified,
            parameters: self.parameters.clone(),
            extra_keys: self.extra_keys.clone(),
        }
    }

    /// Publish as a string map; `extra_keys` appears under `extra-keys`
    pub fn to_parameters(&self) -> BTreeMap<String, String> {
        self.to_properties().to_parameters()
    }

    /// Write every present property through its setter.
    ///
    /// Explicit fields go first so that the address only infers what the
    /// properties leave vacant. The first failing setter stops the write and
    /// leaves the fields before it applied; the shutdown wait is published
    /// last, only once every checked setter has passed.
    #[allow(deprecated)]
    pub fn apply(&mut self, props: RegistryProperties, shutdown: &ShutdownSettings) -> Result<()> {
        if let Some(id) = props.id {
            self.set_id(id);
        }
        if let Some(protocol) = props.protocol {
            self.set_protocol(protocol)?;
        }
        if let Some(port) = props.port {
            self.set_port(port);
        }
        if let Some(address) = props.address {
            self.set_address(address);
        }
        if let Some(username) = props.username {
            self.set_username(username)?;
        }
        if let Some(password) = props.password {
            self.set_password(password)?;
        }
        if let Some(transporter) = props.transporter {
            self.set_transporter(transporter)?;
        }
        if let Some(server) = props.server {
            self.set_server(server)?;
        }
        if let Some(client) = props.client {
            self.set_client(client)?;
        }
        if let Some(cluster) = props.cluster {
            self.set_cluster(cluster);
        }
        if let Some(group) = props.group {
            self.set_group(group);
        }
        if let Some(version) = props.version {
            self.set_version(version);
        }
        if let Some(timeout) = props.timeout {
            self.set_timeout(timeout);
        }
        if let Some(session) = props.session {
            self.set_session(session);
        }
        if let Some(file) = props.file {
            self.set_file(file)?;
        }
        if let Some(check) = props.check {
            self.set_check(check);
        }
        if let Some(dynamic) = props.dynamic {
            self.set_dynamic(dynamic);
        }
        if let Some(register) = props.register {
            self.set_register(register);
        }
        if let Some(subscribe) = props.subscribe {
            self.set_subscribe(subscribe);
        }
        if let Some(is_default) = props.is_default {
            self.set_default(is_default);
        }
        if let Some(simplified) = props.simplified {
            self.set_simplified(simplified);
        }
        if let Some(parameters) = props.parameters {
            self.set_parameters(parameters)?;
        }
        if let Some(extra_keys) = props.extra_keys {
            self.set_extra_keys(extra_keys);
        }
        if let Some(wait) = props.wait {
            self.set_wait(wait, shutdown);
        }
        Ok(())
    }
}

impl<V: ConfigValidator + Clone> RegistryConfig<V> {
    /// Apply one prefix on a staged copy and commit it only when every
    /// setter accepted its value.
    fn overlay(&mut self, env: &ConfigEnvironment, prefix: &str) -> Result<()> {
        if let Some(props) = env.lookup::<RegistryProperties>(prefix)? {
            debug!(prefix, "Overlaying registry properties");
            let mut staged = self.clone();
            staged.apply(props, env.shutdown())?;
            *self = staged;
        }
        Ok(())
    }
}

impl<V: ConfigValidator + Clone> ConfigEntity for RegistryConfig<V> {
    fn id(&self) -> Option<&str> {
        RegistryConfig::id(self)
    }

    /// Overlay `taro.registry.*`, then `taro.registries.<id>.*` when the
    /// config has an identifier.
    fn refresh(&mut self, env: &ConfigEnvironment) -> Result<()> {
        self.overlay(env, REGISTRY_PREFIX)?;
        if let Some(id) = RegistryConfig::id(self)
            .filter(|id| !id.is_empty())
            .map(str::to_owned)
        {
            self.overlay(env, &format!("{}.{}", REGISTRIES_PREFIX, id))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_infers_vacant_fields() {
        let config = RegistryConfig::with_address("zookeeper://127.0.0.1:2181");
        assert_eq!(config.id(), Some("zookeeper"));
        assert_eq!(config.protocol(), Some("zookeeper"));
        assert_eq!(config.port(), Some(2181));
        assert_eq!(config.id_source(), Some(ValueSource::Inferred));
        assert_eq!(config.protocol_source(), Some(ValueSource::Inferred));
        assert_eq!(config.port_source(), Some(ValueSource::Inferred));
    }

    #[test]
    fn test_explicit_protocol_survives_address() {
        let mut config = RegistryConfig::new();
        config.set_protocol("nacos").unwrap();
        config.set_address("zookeeper://127.0.0.1:2181");
        assert_eq!(config.protocol(), Some("nacos"));
        assert_eq!(config.protocol_source(), Some(ValueSource::Explicit));
        // The protocol already named the config
        assert_eq!(config.id(), Some("nacos"));
    }

    #[test]
    fn test_explicit_port_survives_address() {
        let mut config = RegistryConfig::new();
        config.set_port(9090);
        config.set_address("zookeeper://127.0.0.1:2181");
        assert_eq!(config.port(), Some(9090));
    }

    #[test]
    fn test_explicit_id_survives_address_and_protocol() {
        let mut config = RegistryConfig::new();
        config.set_id("primary");
        config.set_address("etcd://127.0.0.1:2379");
        config.set_protocol("etcd3").unwrap();
        assert_eq!(config.id(), Some("primary"));
        assert_eq!(config.protocol(), Some("etcd3"));
    }

    #[test]
    fn test_second_address_does_not_reinfer() {
        let mut config = RegistryConfig::with_address("zookeeper://10.0.0.1:2181");
        config.set_address("redis://10.0.0.2:6379");
        assert_eq!(config.address(), Some("redis://10.0.0.2:6379"));
        assert_eq!(config.protocol(), Some("zookeeper"));
        assert_eq!(config.port(), Some(2181));
    }

    #[test]
    fn test_zero_port_is_not_inferred() {
        let config = RegistryConfig::with_address("nacos://10.0.0.1:0");
        assert_eq!(config.port(), None);
    }

    #[test]
    fn test_address_without_scheme() {
        let config = RegistryConfig::with_address("justahost");
        assert_eq!(config.address(), Some("justahost"));
        assert_eq!(config.id(), None);
        assert_eq!(config.protocol(), None);
        assert_eq!(config.port(), None);
        assert!(config.is_valid());
    }

    #[test]
    fn test_with_address_and_protocol() {
        let config =
            RegistryConfig::with_address_and_protocol("127.0.0.1:2181", "zookeeper").unwrap();
        assert_eq!(config.protocol(), Some("zookeeper"));
        assert_eq!(config.id(), Some("zookeeper"));
        assert_eq!(config.port(), None);
        assert!(config.is_zookeeper_protocol());
    }

    #[test]
    fn test_invalid_protocol_leaves_prior_value() {
        let mut config = RegistryConfig::new();
        config.set_protocol("nacos").unwrap();
        let err = config.set_protocol("nacos v2").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(config.protocol(), Some("nacos"));
    }

    #[test]
    fn test_invalid_protocol_does_not_name_config() {
        let mut config = RegistryConfig::new();
        assert!(config.set_protocol("zk://").is_err());
        assert_eq!(config.id(), None);
        assert_eq!(config.protocol(), None);
    }

    #[test]
    fn test_field_validators() {
        let mut config = RegistryConfig::new();
        assert!(config.set_username("admin").is_ok());
        assert!(config.set_username("admin user").is_err());
        assert_eq!(config.username(), Some("admin"));

        assert!(config.set_password("s3cr3t!#").is_ok());
        assert!(config.set_password("p".repeat(201)).is_err());
        assert_eq!(config.password(), Some("s3cr3t!#"));

        assert!(config.set_transporter("netty4").is_ok());
        assert!(config.set_server("net ty").is_err());
        assert!(config.set_client("mina/1").is_err());
        assert_eq!(config.server(), None);
        assert_eq!(config.client(), None);

        assert!(config.set_file("/tmp/registry.cache").is_ok());
        assert!(config.set_file("f".repeat(201)).is_err());
        assert_eq!(config.file(), Some("/tmp/registry.cache"));
    }

    #[test]
    #[allow(deprecated)]
    fn test_transport_alias() {
        let mut config = RegistryConfig::new();
        config.set_transport("grizzly").unwrap();
        assert_eq!(config.transporter(), Some("grizzly"));
        assert_eq!(config.transport(), Some("grizzly"));
    }

    #[test]
    fn test_parameters_cannot_shadow_named_fields() {
        let mut config = RegistryConfig::new();
        config.set_group("dev");
        let shadowing = HashMap::from([
            ("group".to_string(), "prod".to_string()),
            ("zone".to_string(), "east".to_string()),
        ]);
        let err = config.set_parameters(shadowing).unwrap_err();
        assert!(matches!(err, TaroError::Validation { ref key, .. } if key == "group"));
        assert_eq!(config.parameters(), None);
        assert_eq!(config.group(), Some("dev"));
    }

    #[test]
    fn test_parameter_names_checked() {
        let mut config = RegistryConfig::new();
        let good = HashMap::from([("registry.type".to_string(), "all".to_string())]);
        config.set_parameters(good.clone()).unwrap();

        let bad = HashMap::from([("registry type".to_string(), "all".to_string())]);
        assert!(config.set_parameters(bad).is_err());
        assert_eq!(config.parameters(), Some(&good));
    }

    #[test]
    #[allow(deprecated)]
    fn test_wait_propagates_positive_values_only() {
        let shutdown = ShutdownSettings::new();
        let mut config = RegistryConfig::new();

        config.set_wait(0, &shutdown);
        assert_eq!(config.wait(), Some(0));
        assert_eq!(shutdown.wait(), None);

        config.set_wait(-5, &shutdown);
        assert_eq!(shutdown.wait(), None);

        config.set_wait(2500, &shutdown);
        assert_eq!(
            shutdown.wait(),
            Some(std::time::Duration::from_millis(2500))
        );
    }

    #[test]
    fn test_is_valid() {
        let mut config = RegistryConfig::new();
        assert!(!config.is_valid());
        config.set_address("");
        assert!(!config.is_valid());
        config.set_address("10.0.0.1");
        assert!(config.is_valid());
    }

    #[test]
    fn test_is_zookeeper_protocol() {
        assert!(RegistryConfig::with_address("zookeeper://127.0.0.1:2181").is_zookeeper_protocol());
        assert!(
            RegistryConfig::with_address_and_protocol("foo://x", "zookeeper")
                .unwrap()
                .is_zookeeper_protocol()
        );
        assert!(!RegistryConfig::with_address("redis://x").is_zookeeper_protocol());
        // Invalid configs are never zookeeper, whatever the protocol
        let mut config = RegistryConfig::new();
        config.set_protocol("zookeeper").unwrap();
        assert!(!config.is_zookeeper_protocol());
    }

    #[test]
    fn test_zookeeper_prefix_needs_separator() {
        let mut config = RegistryConfig::new();
        config.set_protocol("nacos").unwrap();
        config.set_address("zookeeperish://10.0.0.1:2181");
        assert!(!config.is_zookeeper_protocol());
    }

    #[test]
    fn test_effective_protocol() {
        assert_eq!(RegistryConfig::new().effective_protocol(), DEFAULT_PROTOCOL);
        assert_eq!(
            RegistryConfig::with_address("nacos://10.0.0.1:8848").effective_protocol(),
            "nacos"
        );
    }

    #[test]
    fn test_to_parameters_excludes_identity_and_address() {
        let mut config = RegistryConfig::with_address("zookeeper://127.0.0.1:2181");
        config.set_extra_keys("a,b");
        config.set_simplified(true);
        let map = config.to_parameters();
        assert!(!map.contains_key("id"));
        assert!(!map.contains_key("address"));
        assert_eq!(map.get("extra-keys").map(String::as_str), Some("a,b"));
        assert_eq!(map.get("simplified").map(String::as_str), Some("true"));
        assert_eq!(map.get("port").map(String::as_str), Some("2181"));
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Permissive;

    impl ConfigValidator for Permissive {
        fn check_name(&self, _key: &str, _value: Option<&str>) -> Result<()> {
            Ok(())
        }
        fn check_length(&self, _key: &str, _value: Option<&str>) -> Result<()> {
            Ok(())
        }
        fn check_path_length(&self, _key: &str, _value: Option<&str>) -> Result<()> {
            Ok(())
        }
        fn check_parameter_names(
            &self,
            _parameters: Option<&HashMap<String, String>>,
        ) -> Result<()> {
            Ok(())
        }
    }

    /// A validator with state and no `Default`
    #[derive(Debug, Clone, PartialEq)]
    struct MaxLength(usize);

    impl ConfigValidator for MaxLength {
        fn check_name(&self, key: &str, value: Option<&str>) -> Result<()> {
            match value {
                Some(v) if v.len() > self.0 => Err(TaroError::validation(key, v, "too long")),
                _ => Ok(()),
            }
        }
        fn check_length(&self, key: &str, value: Option<&str>) -> Result<()> {
            self.check_name(key, value)
        }
        fn check_path_length(&self, key: &str, value: Option<&str>) -> Result<()> {
            self.check_name(key, value)
        }
        fn check_parameter_names(
            &self,
            _parameters: Option<&HashMap<String, String>>,
        ) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_stateful_validator() {
        let mut config = RegistryConfig::with_validator(MaxLength(4));
        config.set_protocol("etcd").unwrap();
        assert!(config.set_protocol("zookeeper").is_err());
        assert_eq!(config.protocol(), Some("etcd"));
        assert_eq!(config.address(), None);
    }

    #[test]
    fn test_injected_validator() {
        let mut config = RegistryConfig::with_validator(Permissive);
        config.set_protocol("zoo keeper").unwrap();
        config.set_username("admin user").unwrap();
        assert_eq!(config.protocol(), Some("zoo keeper"));
    }
}
