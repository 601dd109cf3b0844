//! Order statuses: opaque server-owned labels and the single table that decides how
//! each one is displayed.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;

/// Server-assigned status id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusId(pub u32);

impl Display for StatusId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A status label as the server names it.
///
/// The server may introduce new names at any time, so this is not a closed enum. The
/// constants cover the names the workflows act on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusName(String);

impl StatusName {
    pub const PENDING: &'static str = "Pendiente";
    pub const IN_KITCHEN: &'static str = "En cocina";
    pub const READY: &'static str = "Listo";
    pub const DELIVERED: &'static str = "Entregado";
    pub const CANCELLED: &'static str = "Cancelado";
    pub const UNKNOWN: &'static str = "Desconocido";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn pending() -> Self {
        Self::new(Self::PENDING)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a well-known name.
    pub fn is(&self, name: &str) -> bool {
        self.0.trim().eq_ignore_ascii_case(name)
    }

    pub fn is_ready(&self) -> bool {
        self.is(Self::READY)
    }
}

impl Default for StatusName {
    fn default() -> Self {
        Self::new(Self::UNKNOWN)
    }
}

impl Display for StatusName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Status as embedded in an order document. The id is not always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRef {
    #[serde(default)]
    pub id: Option<StatusId>,
    #[serde(rename = "nombre", default)]
    pub name: StatusName,
}

/// One entry of the server's status enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatus {
    pub id: StatusId,
    #[serde(rename = "nombre")]
    pub name: StatusName,
}

/// The current status enumeration, as fetched from the server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusCatalog {
    statuses: Vec<OrderStatus>,
}

impl StatusCatalog {
    pub fn new(statuses: Vec<OrderStatus>) -> Self {
        Self { statuses }
    }

    pub fn statuses(&self) -> &[OrderStatus] {
        &self.statuses
    }

    pub fn id_of(&self, name: &str) -> Option<StatusId> {
        self.statuses
            .iter()
            .find(|status| status.name.is(name))
            .map(|status| status.id)
    }
}

/// Display treatment of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    Warning,
    Info,
    Success,
    Secondary,
    Danger,
    #[default]
    Light,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Warning => "warning",
            Tone::Info => "info",
            Tone::Success => "success",
            Tone::Secondary => "secondary",
            Tone::Danger => "danger",
            Tone::Light => "light",
        }
    }
}

/// Status name to badge tone. Names without an entry get [`Tone::default`].
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeTable {
    tones: HashMap<String, Tone>,
}

impl Default for BadgeTable {
    fn default() -> Self {
        let tones = [
            (StatusName::PENDING, Tone::Warning),
            (StatusName::IN_KITCHEN, Tone::Info),
            (StatusName::READY, Tone::Success),
            (StatusName::DELIVERED, Tone::Secondary),
            (StatusName::CANCELLED, Tone::Danger),
        ]
        .into_iter()
        .map(|(name, tone)| (name.to_lowercase(), tone))
        .collect();
        Self { tones }
    }
}

impl BadgeTable {
    /// Table covering every status the server currently knows.
    ///
    /// Server names with no known treatment are listed with the default tone, so a
    /// status filter built from [`entries`](Self::entries) shows them too.
    pub fn from_catalog(catalog: &StatusCatalog) -> Self {
        let mut table = Self::default();
        for status in catalog.statuses() {
            table
                .tones
                .entry(status.name.as_str().trim().to_lowercase())
                .or_default();
        }
        table
    }

    pub fn tone(&self, status: &StatusName) -> Tone {
        self.tones
            .get(&status.as_str().trim().to_lowercase())
            .copied()
            .unwrap_or_default()
    }

    /// Catalog statuses paired with their tone, in catalog order.
    pub fn entries<'a>(&'a self, catalog: &'a StatusCatalog) -> impl Iterator<Item = (&'a StatusName, Tone)> + 'a {
        catalog
            .statuses()
            .iter()
            .map(move |status| (&status.name, self.tone(&status.name)))
    }
}
