use nucard_derive::api_model;
use serde_json::{Map, Value};
use std::borrow::Cow;

/// A canonical card record.
///
/// Only `id`, `name` and `factionId` are interpreted; every other attribute of the stored
/// record is kept in `extra` and written back unchanged.
#[api_model(deny_unknown_fields = false)]
#[derive(Clone, PartialEq)]
pub struct Card {
    /// Upstream-assigned unique id
    pub id: String,
    /// Display name
    pub name: String,
    /// Owning faction id; absent for neutral cards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faction_id: Option<String>,
    /// Remaining attributes, passed through verbatim
    #[serde(flatten)]
    #[cfg_attr(feature = "server", schema(value_type = Object))]
    pub extra: Map<String, Value>,
}

impl Card {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), faction_id: None, extra: Map::new() }
    }

    #[must_use]
    pub fn with_faction(mut self, faction_id: impl Into<String>) -> Self {
        self.faction_id = Some(faction_id.into());
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

#[api_model]
#[derive(Clone, PartialEq, Eq)]
/// A playable class
pub struct Faction {
    pub id: Cow<'static, str>,
    pub name: Cow<'static, str>,
}

#[api_model]
#[derive(Clone, PartialEq, Eq)]
/// A third-party reference site entry for a card
pub struct ExternalInfoProvider {
    pub name: String,
    pub icon: String,
    pub url: String,
}

#[api_model]
/// Error body returned by every failing catalog route
pub struct ErrorResponse {
    /// Error kind, e.g. `NotFound`
    pub error: String,
    pub message: String,
}
