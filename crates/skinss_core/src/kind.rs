//! Asset kind enumeration.

/// The two asset kinds stored per identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum AssetKind {
    /// Skin texture (always PNG)
    #[display("skin")]
    Skin,
    /// Cape texture (PNG or animated GIF)
    #[display("cape")]
    Cape,
}

impl AssetKind {
    /// String representation, also used as the blob file extension.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Skin => "skin",
            AssetKind::Cape => "cape",
        }
    }
}
