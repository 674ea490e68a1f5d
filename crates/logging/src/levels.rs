//! crates/logging/src/levels.rs
//! Debug flag enum and per-flag verbosity levels.

/// Diagnostic categories that can be enabled independently.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DebugFlag {
    /// Chunk accumulation and digest finalization.
    Hash,
    /// Algorithm name resolution.
    Registry,
    /// Reads and writes around the checksum engines.
    Io,
}

impl DebugFlag {
    /// Every flag, in display order.
    pub const ALL: [Self; 3] = [Self::Hash, Self::Registry, Self::Io];

    /// Name used in `--debug` tokens.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hash => "hash",
            Self::Registry => "registry",
            Self::Io => "io",
        }
    }

    /// Tracing target the flag's events are emitted under.
    pub const fn target(self) -> &'static str {
        match self {
            Self::Hash => "crc_hash::hash",
            Self::Registry => "crc_hash::registry",
            Self::Io => "crc_hash::io",
        }
    }

    /// Looks a flag up by its token name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.name() == name)
    }
}

/// Debug verbosity levels for each flag.
///
/// Level 0 silences a flag; 1 admits info events, 2 debug events and 3 or
/// more trace events.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct DebugLevels {
    /// Chunk accumulation and finalization level.
    pub hash: u8,
    /// Algorithm resolution level.
    pub registry: u8,
    /// I/O level.
    pub io: u8,
}

impl DebugLevels {
    /// Get the level for a specific flag.
    pub fn get(&self, flag: DebugFlag) -> u8 {
        match flag {
            DebugFlag::Hash => self.hash,
            DebugFlag::Registry => self.registry,
            DebugFlag::Io => self.io,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: DebugFlag, level: u8) {
        match flag {
            DebugFlag::Hash => self.hash = level,
            DebugFlag::Registry => self.registry = level,
            DebugFlag::Io => self.io = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        self.hash = level;
        self.registry = level;
        self.io = level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set_roundtrip_per_flag() {
        let mut levels = DebugLevels::default();
        for (index, flag) in DebugFlag::ALL.into_iter().enumerate() {
            levels.set(flag, index as u8 + 1);
        }
        assert_eq!(levels.get(DebugFlag::Hash), 1);
        assert_eq!(levels.get(DebugFlag::Registry), 2);
        assert_eq!(levels.get(DebugFlag::Io), 3);
    }

    #[test]
    fn set_all_overwrites_every_flag() {
        let mut levels = DebugLevels {
            hash: 1,
            registry: 0,
            io: 4,
        };
        levels.set_all(2);
        assert!(DebugFlag::ALL.into_iter().all(|flag| levels.get(flag) == 2));
    }

    #[test]
    fn names_and_targets() {
        for flag in DebugFlag::ALL {
            assert_eq!(DebugFlag::from_name(flag.name()), Some(flag));
            assert!(flag.target().starts_with("crc_hash::"));
        }
        assert_eq!(DebugFlag::from_name("HASH"), None);
        assert_eq!(DebugFlag::from_name("proto"), None);
    }
}
