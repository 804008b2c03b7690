//! Catalog loading and filtering.
//!
//! Perks, powers and items share one shape: an ordered JSON array of records
//! carrying at least a `name` and an `icon`. A single loader, keyed by
//! [`CatalogKind`], reads any of them from a [`ResourceBundle`].
//!
//! Loading never fails from the caller's point of view. A missing or
//! malformed resource is logged and produces an empty catalog, so screens
//! fall back to their empty state.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use tokio::sync::oneshot;
use uuid::Uuid;

use crate::{
    error::CatalogError,
    resources::{ResourceBundle, SharedResources, asset_key, read_text},
};

/// The catalogs shipped with the application.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CatalogKind {
    Perks,
    Powers,
    Items,
}

impl CatalogKind {
    pub fn resource_name(&self) -> String {
        format!("{}.json", self.as_ref())
    }

    pub fn title(&self) -> &'static str {
        match self {
            CatalogKind::Perks => "Perks",
            CatalogKind::Powers => "Powers",
            CatalogKind::Items => "Items",
        }
    }
}

/// A single named, icon-bearing record of a catalog.
///
/// The `id` is generated when the record is decoded and only identifies the
/// entry inside the current screen; it is never read from or written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    #[serde(skip_deserializing, default = "Uuid::new_v4")]
    id: Uuid,
    name: String,
    icon: String,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            icon: icon.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Image lookup key: the icon reference without its file extension.
    pub fn asset_key(&self) -> &str {
        asset_key(&self.icon)
    }
}

/// What to do with records that fail to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DecodePolicy {
    /// One bad record discards the whole catalog.
    #[default]
    Strict,
    /// Bad records are logged and skipped; the rest of the catalog is kept.
    SkipInvalid,
}

/// Decodes a whole JSON document from `bundle`.
pub fn try_load_document<T: DeserializeOwned>(
    bundle: &dyn ResourceBundle,
    name: &str,
) -> Result<T, CatalogError> {
    let content = read_text(bundle, name)?;
    serde_json::from_str(&content).map_err(|source| CatalogError::Decode {
        name: name.to_string(),
        source,
    })
}

/// Decodes a JSON array of records from `bundle`, keeping source order.
pub fn try_load_records<T: DeserializeOwned>(
    bundle: &dyn ResourceBundle,
    name: &str,
    policy: DecodePolicy,
) -> Result<Vec<T>, CatalogError> {
    match policy {
        DecodePolicy::Strict => try_load_document(bundle, name),
        DecodePolicy::SkipInvalid => {
            let raw: Vec<serde_json::Value> = try_load_document(bundle, name)?;
            let records = raw
                .into_iter()
                .enumerate()
                .filter_map(|(index, value)| match serde_json::from_value(value) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        log::warn!("Skipping record {index} of '{name}': {e}");
                        None
                    }
                })
                .collect();
            Ok(records)
        }
    }
}

/// Loads the catalog of `kind`, absorbing every failure into an empty catalog.
pub fn load_catalog(
    bundle: &dyn ResourceBundle,
    kind: CatalogKind,
    policy: DecodePolicy,
) -> Vec<CatalogEntry> {
    match try_load_records(bundle, &kind.resource_name(), policy) {
        Ok(entries) => {
            log::info!("Loaded {} {kind} from {}", entries.len(), bundle.describe());
            entries
        }
        Err(e) if e.is_not_found() => {
            log::warn!("{e}");
            Vec::new()
        }
        Err(e) => {
            log::error!("{e}");
            Vec::new()
        }
    }
}

/// Loads a catalog on the blocking pool.
///
/// The entries are delivered once through the returned receiver. Dropping the
/// receiver before the load completes discards the result.
pub fn spawn_load(
    bundle: SharedResources,
    kind: CatalogKind,
    policy: DecodePolicy,
) -> oneshot::Receiver<Vec<CatalogEntry>> {
    let (sender, receiver) = oneshot::channel();
    tokio::task::spawn_blocking(move || {
        let entries = load_catalog(bundle.as_ref(), kind, policy);
        if sender.send(entries).is_err() {
            log::debug!("The {kind} screen closed before its catalog finished loading");
        }
    });
    receiver
}

/// Returns the entries whose name contains `query`, ignoring case.
///
/// An absent or empty query keeps every entry. Whitespace is part of the
/// query like any other character. Order is preserved, and filtering a
/// filtered catalog again with the same query changes nothing.
pub fn filter_entries(entries: &[CatalogEntry], query: Option<&str>) -> Vec<CatalogEntry> {
    let needle = query
        .filter(|query| !query.is_empty())
        .map(str::to_lowercase);

    match needle {
        None => entries.to_vec(),
        Some(needle) => entries
            .iter()
            .filter(|entry| entry.name.to_lowercase().contains(&needle))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{borrow::Cow, collections::HashMap, str::FromStr};

    #[derive(Debug, Default)]
    struct MemoryBundle(HashMap<String, Vec<u8>>);

    impl MemoryBundle {
        fn with(name: &str, content: &str) -> Self {
            let mut files = HashMap::new();
            files.insert(name.to_string(), content.as_bytes().to_vec());
            Self(files)
        }
    }

    impl ResourceBundle for MemoryBundle {
        fn read(&self, name: &str) -> Option<Cow<'_, [u8]>> {
            self.0.get(name).map(|bytes| Cow::Borrowed(bytes.as_slice()))
        }

        fn describe(&self) -> String {
            "memory".to_string()
        }
    }

    fn names(entries: &[CatalogEntry]) -> Vec<&str> {
        entries.iter().map(CatalogEntry::name).collect()
    }

    #[test]
    fn kind_resource_names() {
        assert_eq!(CatalogKind::Perks.resource_name(), "perks.json");
        assert_eq!(CatalogKind::Powers.resource_name(), "powers.json");
        assert_eq!(CatalogKind::Items.resource_name(), "items.json");
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!(CatalogKind::from_str("PERKS"), Ok(CatalogKind::Perks));
        assert_eq!(CatalogKind::from_str("items"), Ok(CatalogKind::Items));
        assert!(CatalogKind::from_str("skins").is_err());
    }

    #[test]
    fn loads_records_in_source_order() {
        let bundle = MemoryBundle::with(
            "perks.json",
            r#"[{"name":"Sprint Burst","icon":"a.png"},{"name":"Adrenaline","icon":"b.png"},{"name":"Lithe","icon":"c.png"}]"#,
        );
        let entries = load_catalog(&bundle, CatalogKind::Perks, DecodePolicy::Strict);
        assert_eq!(names(&entries), ["Sprint Burst", "Adrenaline", "Lithe"]);
    }

    #[test]
    fn each_load_generates_fresh_ids() {
        let bundle = MemoryBundle::with("items.json", r#"[{"name":"Map","icon":"map.png"}]"#);
        let first = load_catalog(&bundle, CatalogKind::Items, DecodePolicy::Strict);
        let second = load_catalog(&bundle, CatalogKind::Items, DecodePolicy::Strict);
        assert_ne!(first[0].id(), second[0].id());
    }

    #[test]
    fn record_missing_icon_discards_catalog_when_strict() {
        let bundle = MemoryBundle::with(
            "powers.json",
            r#"[{"name":"Bear Trap","icon":"trap.png"},{"name":"Wailing Bell"}]"#,
        );
        let error = try_load_records::<CatalogEntry>(&bundle, "powers.json", DecodePolicy::Strict)
            .expect_err("Expected a decode error");
        assert!(matches!(error, CatalogError::Decode { .. }));
        assert!(load_catalog(&bundle, CatalogKind::Powers, DecodePolicy::Strict).is_empty());
    }

    #[test]
    fn skip_invalid_keeps_valid_records() {
        let bundle = MemoryBundle::with(
            "powers.json",
            r#"[{"name":"Bear Trap","icon":"trap.png"},{"name":"Wailing Bell"},{"name":7,"icon":"x"},{"name":"Chainsaw","icon":"saw.png"}]"#,
        );
        let entries = load_catalog(&bundle, CatalogKind::Powers, DecodePolicy::SkipInvalid);
        assert_eq!(names(&entries), ["Bear Trap", "Chainsaw"]);
    }

    #[test]
    fn skip_invalid_still_rejects_a_non_array_document() {
        let bundle = MemoryBundle::with("perks.json", r#"{"name":"Sprint Burst"}"#);
        assert!(load_catalog(&bundle, CatalogKind::Perks, DecodePolicy::SkipInvalid).is_empty());
    }

    #[test]
    fn invalid_utf8_is_an_encoding_error() {
        let mut bundle = MemoryBundle::default();
        bundle.0.insert("perks.json".to_string(), vec![b'[', 0xff, b']']);
        let error = try_load_records::<CatalogEntry>(&bundle, "perks.json", DecodePolicy::Strict)
            .expect_err("Expected an encoding error");
        assert!(matches!(error, CatalogError::Encoding { .. }));
    }

    #[test]
    fn filter_matches_any_case() {
        let entries = vec![CatalogEntry::new("Sprint Burst", "sprint_burst.png")];
        assert_eq!(filter_entries(&entries, Some("sprint")), entries);
        assert_eq!(filter_entries(&entries, Some("SPRINT")), entries);
        assert_eq!(filter_entries(&entries, Some("t bu")), entries);
    }

    #[test]
    fn filter_without_query_returns_everything() {
        let entries = vec![
            CatalogEntry::new("Dead Hard", "a.png"),
            CatalogEntry::new("Bond", "b.png"),
        ];
        assert_eq!(filter_entries(&entries, None), entries);
        assert_eq!(filter_entries(&entries, Some("")), entries);
    }

    #[test]
    fn filter_keeps_whitespace_in_query() {
        let entries = vec![
            CatalogEntry::new("Sprint", "sprint.png"),
            CatalogEntry::new("Dead Hard", "dead_hard.png"),
        ];
        assert!(filter_entries(&entries, Some("sprint ")).is_empty());
        assert!(filter_entries(&entries, Some("   ")).is_empty());
        assert_eq!(names(&filter_entries(&entries, Some(" "))), ["Dead Hard"]);
    }

    #[test]
    fn filter_folds_non_ascii_case() {
        let entries = vec![CatalogEntry::new("Ébauche Éternelle", "e.png")];
        assert_eq!(filter_entries(&entries, Some("ÉTERN")).len(), 1);
        assert_eq!(filter_entries(&entries, Some("éternelle")).len(), 1);
    }
}
