//! Access and declaration modifiers.
//!
//! Bit values match the class-file access flags, so a bitmap read from
//! bytecode metadata can be passed straight to [`Flags::from_bitmap`].

use bitflags::bitflags;

bitflags! {
    /// Modifier set carried by classes, variables and methods.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Flags: u64 {
        // === Visibility ===

        const PUBLIC = 1 << 0;
        const PRIVATE = 1 << 1;
        const PROTECTED = 1 << 2;

        // === Declaration ===

        const STATIC = 1 << 3;
        const FINAL = 1 << 4;
        const SYNCHRONIZED = 1 << 5;
        const VOLATILE = 1 << 6;
        const TRANSIENT = 1 << 7;
        const ABSTRACT = 1 << 10;
    }
}

impl Flags {
    /// Build from a raw access-flag bitmap, dropping unknown bits.
    #[inline]
    pub const fn from_bitmap(bitmap: u64) -> Self {
        Self::from_bits_truncate(bitmap)
    }

    /// The raw access-flag bitmap.
    #[inline]
    pub const fn to_bitmap(self) -> u64 {
        self.bits()
    }

    /// `true` when every flag in `test` is set.
    #[inline]
    pub const fn has_all(self, test: Flags) -> bool {
        self.contains(test)
    }

    /// Source keyword for a single flag.
    pub fn keyword(self) -> Option<&'static str> {
        KEYWORDS
            .iter()
            .find(|(flag, _)| *flag == self)
            .map(|(_, keyword)| *keyword)
    }

    /// Parse a single modifier keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::all().iter().find(|flag| flag.keyword() == Some(keyword))
    }
}

const KEYWORDS: [(Flags, &str); 9] = [
    (Flags::PUBLIC, "public"),
    (Flags::PRIVATE, "private"),
    (Flags::PROTECTED, "protected"),
    (Flags::STATIC, "static"),
    (Flags::FINAL, "final"),
    (Flags::SYNCHRONIZED, "synchronized"),
    (Flags::VOLATILE, "volatile"),
    (Flags::TRANSIENT, "transient"),
    (Flags::ABSTRACT, "abstract"),
];
