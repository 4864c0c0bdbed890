// SPDX-License-Identifier: MIT OR Apache-2.0

/// The set of structural operations a value exposes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Capabilities {
    /// Supports `value[key]` style reads.
    pub read_by_key: bool,
    /// Supports `value[key] = x` style writes.
    pub write_by_key: bool,
    /// Can produce a sequence of elements.
    pub iterable: bool,
}

impl Capabilities {
    /// No structural operations at all: scalars and absent values.
    pub const fn none() -> Self {
        Self {
            read_by_key: false,
            write_by_key: false,
            iterable: false,
        }
    }

    /// Key/value mappings read, write and iterate.
    pub const fn mapping() -> Self {
        Self {
            read_by_key: true,
            write_by_key: true,
            iterable: true,
        }
    }

    /// Sequences, sets, text and lazy ranges only iterate.
    pub const fn sequence() -> Self {
        Self {
            read_by_key: false,
            write_by_key: false,
            iterable: true,
        }
    }

    /// Both read and write by key.
    pub const fn supports_indexed_access(&self) -> bool {
        self.read_by_key && self.write_by_key
    }

    /// Can be iterated.
    pub const fn supports_iteration(&self) -> bool {
        self.iterable
    }
}
