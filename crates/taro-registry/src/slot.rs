//! Field cells that remember where their value came from
//!
//! Inferable fields (identifier, protocol, port) are stored in a [`Slot`].
//! A slot is written either explicitly, which always overwrites, or by
//! inference, which only ever fills a vacant slot.

/// How the current value of a [`Slot`] was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueSource {
    /// Assigned through a setter or a property overlay
    Explicit,
    /// Derived from another field, typically the address
    Inferred,
}

/// Values that may be present but still count as unset
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for i32 {
    fn is_blank(&self) -> bool {
        false
    }
}

/// An optional field value tagged with its [`ValueSource`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot<T> {
    entry: Option<(T, ValueSource)>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<T: Blank> Slot<T> {
    pub fn get(&self) -> Option<&T> {
        self.entry.as_ref().map(|(value, _)| value)
    }

    pub fn source(&self) -> Option<ValueSource> {
        self.entry.as_ref().map(|(_, source)| *source)
    }

    /// No value, or a blank one
    pub fn is_vacant(&self) -> bool {
        self.get().is_none_or(Blank::is_blank)
    }

    /// Explicit write. Always overwrites.
    pub fn assign(&mut self, value: T) {
        self.entry = Some((value, ValueSource::Explicit));
    }

    /// Inferred write. Only fills a vacant slot; returns whether it did.
    pub fn fill_if_vacant(&mut self, value: T) -> bool {
        if !self.is_vacant() {
            return false;
        }
        self.entry = Some((value, ValueSource::Inferred));
        true
    }
}
