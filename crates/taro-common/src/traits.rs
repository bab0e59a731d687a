//! Traits shared by configuration objects

use crate::environment::ConfigEnvironment;
use crate::error::Result;

/// A configuration object that can be overlaid from property sources.
pub trait ConfigEntity {
    /// Identity key of this object, used to scope id-specific properties
    fn id(&self) -> Option<&str>;

    /// Overlay values from `env` onto this object.
    ///
    /// Values found in the property sources override current field values
    /// and go through the same setters (and checks) as programmatic writes.
    fn refresh(&mut self, env: &ConfigEnvironment) -> Result<()>;
}
