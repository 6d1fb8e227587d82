//! Avatar body-model variant.

use serde::{Deserialize, Serialize};

/// Avatar body-model variant, set only on skin upload.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum SkinModel {
    /// Classic body model
    #[default]
    #[display("default")]
    Default,
    /// Slim-arm body model
    #[display("slim")]
    Slim,
}

impl SkinModel {
    /// Resolve an optional model hint.
    ///
    /// The hint is case-normalized; only the exact token `"slim"` selects the
    /// slim variant, every other value (including absent) resolves to the
    /// default model.
    ///
    /// # Examples
    ///
    /// ```
    /// use skinss_core::SkinModel;
    ///
    /// assert_eq!(SkinModel::resolve(Some("Slim")), SkinModel::Slim);
    /// assert_eq!(SkinModel::resolve(Some("thin")), SkinModel::Default);
    /// assert_eq!(SkinModel::resolve(None), SkinModel::Default);
    /// ```
    pub fn resolve(hint: Option<&str>) -> Self {
        match hint {
            Some(value) if value.eq_ignore_ascii_case("slim") => SkinModel::Slim,
            _ => SkinModel::Default,
        }
    }

    /// String representation used in responses and the profile record.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkinModel::Default => "default",
            SkinModel::Slim => "slim",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_slim_selects_slim() {
        assert_eq!(SkinModel::resolve(Some("slim")), SkinModel::Slim);
        assert_eq!(SkinModel::resolve(Some("SLIM")), SkinModel::Slim);
        assert_eq!(SkinModel::resolve(Some("Slim")), SkinModel::Slim);
        assert_eq!(SkinModel::resolve(Some("thin")), SkinModel::Default);
        assert_eq!(SkinModel::resolve(Some("")), SkinModel::Default);
        assert_eq!(SkinModel::resolve(Some("slim ")), SkinModel::Default);
        assert_eq!(SkinModel::resolve(None), SkinModel::Default);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&SkinModel::Slim).unwrap(), "\"slim\"");
        assert_eq!(
            serde_json::to_string(&SkinModel::Default).unwrap(),
            "\"default\""
        );
        let parsed: SkinModel = serde_json::from_str("\"slim\"").unwrap();
        assert_eq!(parsed, SkinModel::Slim);
    }
}
