use std::{
    fmt,
    ops::{BitOr, BitOrAssign},
};

/// Importance level of a record. Each level owns a distinct bit so levels can
/// be combined into a [`SeverityMask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Severity {
    Debug = 0x01,
    Fatal = 0x02,
    Error = 0x04,
    Warning = 0x08,
    Info = 0x10,
    /// Fallback label, never part of an active mask.
    Unknown = 0x40,
}

impl Severity {
    /// The five levels that can be activated on a logger.
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Fatal,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
    ];

    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Maps a raw value back to its level. Anything that is not exactly one
    /// known bit is `Unknown`.
    pub fn from_bits(bits: u32) -> Severity {
        Self::ALL
            .into_iter()
            .find(|level| level.bits() == bits)
            .unwrap_or(Severity::Unknown)
    }

    pub fn name(self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Fatal => "fatal",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Unknown => "unknown",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Severity::Debug => "Informational events most useful for developers to debug application.",
            Severity::Fatal => "Severe error information that will presumably abort application.",
            Severity::Error => {
                "Information representing errors in application but application will keep running."
            }
            Severity::Warning => "Useful when application has potentially harmful situations.",
            Severity::Info => "Mainly useful to represent current progress of application.",
            Severity::Unknown => "Unknown level.",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warning,
            log::Level::Info => Severity::Info,
            log::Level::Debug | log::Level::Trace => Severity::Debug,
        }
    }
}

/// Set of active severities, as a bitwise OR of [`Severity`] bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SeverityMask(u32);

impl SeverityMask {
    pub const NONE: SeverityMask = SeverityMask(0);
    /// Debug | Fatal | Error | Warning | Info.
    pub const ALL: SeverityMask = SeverityMask(
        Severity::Debug.bits()
            | Severity::Fatal.bits()
            | Severity::Error.bits()
            | Severity::Warning.bits()
            | Severity::Info.bits(),
    );

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if any bit of `level` is set in the mask.
    pub const fn contains(self, level: Severity) -> bool {
        self.0 & level.bits() != 0
    }

    pub const fn union(self, other: SeverityMask) -> Self {
        Self(self.0 | other.0)
    }

    /// Clears the bits of `other`, leaving bits that were never set untouched.
    pub const fn difference(self, other: SeverityMask) -> Self {
        Self(self.0 & !other.0)
    }

    /// Flips the bits of `other`: set bits are cleared, clear bits become set.
    pub const fn symmetric_difference(self, other: SeverityMask) -> Self {
        Self(self.0 ^ other.0)
    }

    /// Active levels, in [`Severity::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = Severity> {
        Severity::ALL
            .into_iter()
            .filter(move |level| self.contains(*level))
    }
}

impl From<Severity> for SeverityMask {
    fn from(level: Severity) -> Self {
        Self(level.bits())
    }
}

impl From<u32> for SeverityMask {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl<T: Into<SeverityMask>> BitOr<T> for SeverityMask {
    type Output = SeverityMask;
    fn bitor(self, rhs: T) -> SeverityMask {
        self.union(rhs.into())
    }
}

impl<T: Into<SeverityMask>> BitOr<T> for Severity {
    type Output = SeverityMask;
    fn bitor(self, rhs: T) -> SeverityMask {
        SeverityMask::from(self).union(rhs.into())
    }
}

impl<T: Into<SeverityMask>> BitOrAssign<T> for SeverityMask {
    fn bitor_assign(&mut self, rhs: T) {
        *self = self.union(rhs.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_are_distinct() {
        let mut seen = 0u32;
        for level in Severity::ALL.into_iter().chain([Severity::Unknown]) {
            assert_eq!(level.bits().count_ones(), 1, "{level} is not a single bit");
            assert_eq!(seen & level.bits(), 0, "{level} overlaps another level");
            seen |= level.bits();
        }
    }

    #[test]
    fn test_names() {
        let names: Vec<_> = Severity::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["debug", "fatal", "error", "warning", "info"]);
        assert_eq!(Severity::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_from_bits_falls_back_to_unknown() {
        assert_eq!(Severity::from_bits(0x08), Severity::Warning);
        assert_eq!(Severity::from_bits(0), Severity::Unknown);
        assert_eq!(Severity::from_bits(0x03), Severity::Unknown);
        assert_eq!(Severity::from_bits(0x40), Severity::Unknown);
        assert_eq!(Severity::from_bits(0x1000).name(), "unknown");
    }

    #[test]
    fn test_descriptions_are_fixed_sentences() {
        for level in Severity::ALL.into_iter().chain([Severity::Unknown]) {
            assert!(level.description().ends_with('.'));
        }
        assert_eq!(Severity::Unknown.description(), "Unknown level.");
    }

    #[test]
    fn test_from_log_level() {
        assert_eq!(Severity::from(log::Level::Error), Severity::Error);
        assert_eq!(Severity::from(log::Level::Warn), Severity::Warning);
        assert_eq!(Severity::from(log::Level::Info), Severity::Info);
        assert_eq!(Severity::from(log::Level::Debug), Severity::Debug);
        assert_eq!(Severity::from(log::Level::Trace), Severity::Debug);
    }

    #[test]
    fn test_mask_ops() {
        let mask = Severity::Info | Severity::Warning;
        assert!(mask.contains(Severity::Info));
        assert!(mask.contains(Severity::Warning));
        assert!(!mask.contains(Severity::Debug));
        assert_eq!(mask.iter().collect::<Vec<_>>(), [Severity::Warning, Severity::Info]);

        assert_eq!(mask.difference(Severity::Debug.into()), mask);
        assert!(
            mask.symmetric_difference(Severity::Debug.into())
                .contains(Severity::Debug)
        );

        assert!(SeverityMask::ALL.iter().eq(Severity::ALL));
        assert!(!SeverityMask::ALL.contains(Severity::Unknown));
        assert!(SeverityMask::NONE.is_empty());
    }
}
