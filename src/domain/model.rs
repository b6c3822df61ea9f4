use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque, unique identifier of a pantry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EntryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Lifecycle of an entry. `Removing` is terminal: the entry is purged once
/// the removal delay elapses and is never mutated again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryPhase {
    Active,
    Removing,
}

/// Result of looking an ingredient name up in the static tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub emoji: &'static str,
    pub shelf_life_days: Option<u32>,
}

/// A validated form submission, ready to become an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub name: String,
    pub quantity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PantryEntry {
    pub id: EntryId,
    pub name: String,
    pub quantity: f64,
    pub emoji: &'static str,
    pub expiry_estimate: Option<u32>,
    pub added_at: DateTime<Utc>,
    pub phase: EntryPhase,
}

impl PantryEntry {
    /// Builds an active entry. Emoji and expiry are derived here once and
    /// never recomputed.
    pub fn create(new_entry: NewEntry, classification: Classification) -> Self {
        Self {
            id: EntryId::new(),
            name: new_entry.name,
            quantity: new_entry.quantity,
            emoji: classification.emoji,
            expiry_estimate: classification.shelf_life_days,
            added_at: Utc::now(),
            phase: EntryPhase::Active,
        }
    }

    pub fn is_removing(&self) -> bool {
        self.phase == EntryPhase::Removing
    }

    pub fn best_before(&self) -> Option<NaiveDate> {
        self.expiry_estimate
            .map(|days| (self.added_at + Duration::days(i64::from(days))).date_naive())
    }

    /// Quantity without trailing zeros: `2`, `0.5`, `1.25`.
    pub fn display_quantity(&self) -> String {
        format_quantity(self.quantity)
    }
}

/// Rounds to three decimals, except where that would hide a positive
/// quantity as `0`.
pub fn format_quantity(quantity: f64) -> String {
    // no fractional digits left to round at this magnitude
    if quantity.abs() >= 1e12 {
        return format!("{}", quantity);
    }

    let rounded = (quantity * 1000.0).round() / 1000.0;
    if rounded.is_finite() && (rounded != 0.0 || quantity == 0.0) {
        format!("{}", rounded)
    } else {
        format!("{}", quantity)
    }
}

/// Serializable projection of an entry for the JSON API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryView {
    pub id: EntryId,
    pub name: String,
    pub quantity: f64,
    pub emoji: String,
    pub expiry_estimate: Option<u32>,
    pub best_before: Option<NaiveDate>,
    pub added_at: DateTime<Utc>,
    pub removing: bool,
}

impl From<&PantryEntry> for EntryView {
    fn from(entry: &PantryEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
            quantity: entry.quantity,
            emoji: entry.emoji.to_string(),
            expiry_estimate: entry.expiry_estimate,
            best_before: entry.best_before(),
            added_at: entry.added_at,
            removing: entry.is_removing(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milk() -> PantryEntry {
        PantryEntry::create(
            NewEntry {
                name: "Milk".to_string(),
                quantity: 2.0,
            },
            Classification {
                emoji: "🥛",
                shelf_life_days: Some(7),
            },
        )
    }

    #[test]
    fn test_create_is_active_with_fresh_id() {
        let a = milk();
        let b = milk();

        assert_eq!(a.phase, EntryPhase::Active);
        assert!(!a.is_removing());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_best_before_offsets_added_date() {
        let entry = milk();
        let expected = (entry.added_at + Duration::days(7)).date_naive();

        assert_eq!(entry.best_before(), Some(expected));
    }

    #[test]
    fn test_best_before_absent_without_estimate() {
        let mut entry = milk();
        entry.expiry_estimate = None;

        assert_eq!(entry.best_before(), None);
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(2.0), "2");
        assert_eq!(format_quantity(0.5), "0.5");
        assert_eq!(format_quantity(1.25), "1.25");
        assert_eq!(format_quantity(10.0), "10");
        assert_eq!(format_quantity(0.1 + 0.2), "0.3");
    }

    #[test]
    fn test_format_quantity_large_values_do_not_saturate() {
        assert_eq!(format_quantity(1e20), "100000000000000000000");
        assert_ne!(format_quantity(1e20), i64::MAX.to_string());
        assert!(format_quantity(1e308).starts_with("1000"));
    }

    #[test]
    fn test_format_quantity_tiny_positive_is_never_zero() {
        assert_eq!(format_quantity(0.0001), "0.0001");
        assert_ne!(format_quantity(0.0004), "0");
        assert_eq!(format_quantity(0.0006), "0.001");
    }

    #[test]
    fn test_entry_id_round_trips_through_text() {
        let id = EntryId::new();
        let parsed: EntryId = id.to_string().parse().unwrap();

        assert_eq!(parsed, id);
        assert!("not-a-uuid".parse::<EntryId>().is_err());
    }

    #[test]
    fn test_view_reports_removing_flag() {
        let mut entry = milk();
        entry.phase = EntryPhase::Removing;
        let view = EntryView::from(&entry);

        assert!(view.removing);
        assert_eq!(view.name, "Milk");
        assert_eq!(view.expiry_estimate, Some(7));
    }
}
