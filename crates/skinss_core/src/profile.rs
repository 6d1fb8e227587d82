//! Per-identifier profile record.

use crate::SkinModel;
use serde::{Deserialize, Serialize};

/// Metadata record tracking the asset pair for one identifier.
///
/// A record conceptually exists for every identifier: an identifier with no
/// persisted state is indistinguishable from [`Profile::default`]. Records
/// are never deleted; deleting both assets leaves an all-false/empty record.
///
/// Field names serialize in camelCase to match the on-disk JSON sidecar
/// format.
///
/// # Invariants
///
/// - `has_skin` is true iff a skin blob exists, and `skin_hash` is then the
///   digest of that exact blob; false implies an empty `skin_hash`.
/// - Same pairing for `has_cape`/`cape_hash`; `cape_is_gif` is meaningful
///   only while `has_cape` is true.
/// - `model` is overwritten only by a successful skin upload. It survives
///   cape operations and skin deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    /// Skin asset currently present
    pub has_skin: bool,
    /// Cape asset currently present
    pub has_cape: bool,
    /// Cape asset is an animated GIF container (vs PNG)
    pub cape_is_gif: bool,
    /// Avatar body-model variant
    pub model: SkinModel,
    /// Content fingerprint of the current skin asset, empty if absent
    pub skin_hash: String,
    /// Content fingerprint of the current cape asset, empty if absent
    pub cape_hash: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            has_skin: false,
            has_cape: false,
            cape_is_gif: false,
            model: SkinModel::Default,
            skin_hash: String::new(),
            cape_hash: String::new(),
        }
    }
}

impl Profile {
    /// Record a successful skin upload.
    pub fn apply_skin_upload(&mut self, hash: String, model: SkinModel) {
        self.has_skin = true;
        self.model = model;
        self.skin_hash = hash;
    }

    /// Record a skin deletion. The model variant is deliberately retained.
    pub fn clear_skin(&mut self) {
        self.has_skin = false;
        self.skin_hash = String::new();
    }

    /// Record a successful cape upload.
    pub fn apply_cape_upload(&mut self, hash: String, is_gif: bool) {
        self.has_cape = true;
        self.cape_is_gif = is_gif;
        self.cape_hash = hash;
    }

    /// Record a cape deletion.
    pub fn clear_cape(&mut self) {
        self.has_cape = false;
        self.cape_is_gif = false;
        self.cape_hash = String::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_is_all_false_and_empty() {
        let profile = Profile::default();
        assert!(!profile.has_skin);
        assert!(!profile.has_cape);
        assert!(!profile.cape_is_gif);
        assert_eq!(profile.model, SkinModel::Default);
        assert_eq!(profile.skin_hash, "");
        assert_eq!(profile.cape_hash, "");
    }

    #[test]
    fn serializes_camel_case_sidecar_fields() {
        let mut profile = Profile::default();
        profile.apply_skin_upload("abc123".to_string(), SkinModel::Slim);

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["hasSkin"], true);
        assert_eq!(json["hasCape"], false);
        assert_eq!(json["capeIsGif"], false);
        assert_eq!(json["model"], "slim");
        assert_eq!(json["skinHash"], "abc123");
        assert_eq!(json["capeHash"], "");
    }

    #[test]
    fn deserializes_original_sidecar_document() {
        let json = r#"{
            "hasSkin": true,
            "hasCape": true,
            "capeIsGif": true,
            "model": "slim",
            "skinHash": "aa",
            "capeHash": "bb"
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert!(profile.has_skin);
        assert!(profile.cape_is_gif);
        assert_eq!(profile.model, SkinModel::Slim);
        assert_eq!(profile.cape_hash, "bb");
    }

    #[test]
    fn clearing_skin_retains_model() {
        let mut profile = Profile::default();
        profile.apply_skin_upload("aa".to_string(), SkinModel::Slim);
        profile.clear_skin();

        assert!(!profile.has_skin);
        assert_eq!(profile.skin_hash, "");
        assert_eq!(profile.model, SkinModel::Slim);
    }

    #[test]
    fn cape_operations_do_not_touch_skin_fields() {
        let mut profile = Profile::default();
        profile.apply_skin_upload("aa".to_string(), SkinModel::Slim);
        profile.apply_cape_upload("bb".to_string(), true);
        profile.clear_cape();

        assert!(profile.has_skin);
        assert_eq!(profile.model, SkinModel::Slim);
        assert!(!profile.has_cape);
        assert!(!profile.cape_is_gif);
        assert_eq!(profile.cape_hash, "");
    }
}
