//! # Denomination Tables
//!
//! A multi-tier currency: every tier converts to the base unit through an
//! integer multiplier. The first entry is the base unit (multiplier 1).
//! A table may name a container item (a coin pouch) whose contents are
//! counted through the same table.
//!
//! ## File Format
//!
//! ```toml
//! [[table]]
//! name = "coinage"
//! container = "coinage:coin_pouch"
//! denominations = [
//!     { item = "coinage:copper_coin", multiplier = 1 },
//!     { item = "coinage:silver_coin", multiplier = 9 },
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{EconomyError, EconomyResult};
use crate::identity::ItemIdentity;

/// One tier of a currency.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Denomination {
    /// Coin item.
    pub item: ItemIdentity,
    /// Base units per coin.
    pub multiplier: u64,
}

/// A multi-tier currency.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenominationTable {
    /// Table name, used in logs.
    pub name: String,
    /// Tiers, base unit first.
    pub denominations: Vec<Denomination>,
    /// Container item whose contents count toward this table.
    #[serde(default)]
    pub container: Option<ItemIdentity>,
}

impl DenominationTable {
    /// The built-in three-tier coin table.
    ///
    /// Copper is the base unit, silver is worth 9 copper, gold 81.
    #[must_use]
    pub fn builtin() -> Self {
        let tier = |token: &'static str, multiplier| Denomination {
            item: ItemIdentity::from_static(token),
            multiplier,
        };
        Self {
            name: "coinage".to_string(),
            denominations: vec![
                tier("coinage:copper_coin", 1),
                tier("coinage:silver_coin", 9),
                tier("coinage:gold_coin", 81),
            ],
            container: Some(ItemIdentity::from_static("coinage:coin_pouch")),
        }
    }

    /// Base unit item.
    #[must_use]
    pub fn base(&self) -> Option<&ItemIdentity> {
        self.denominations.first().map(|d| &d.item)
    }

    /// Returns true if `identity` is this table's base unit.
    #[must_use]
    pub fn is_base(&self, identity: &ItemIdentity) -> bool {
        self.base() == Some(identity)
    }

    /// Base units per item, if the item is a tier of this table.
    #[must_use]
    pub fn multiplier_of(&self, identity: &ItemIdentity) -> Option<u64> {
        self.denominations
            .iter()
            .find(|d| &d.item == identity)
            .map(|d| d.multiplier)
    }

    /// Returns true if `identity` is this table's container.
    #[must_use]
    pub fn is_container(&self, identity: &ItemIdentity) -> bool {
        self.container.as_ref() == Some(identity)
    }

    /// Checks the table invariants.
    ///
    /// # Errors
    ///
    /// Returns [`EconomyError::InvalidConfig`] if the table is empty, the
    /// base multiplier is not 1, a multiplier is zero, or an item repeats.
    pub fn validate(&self) -> EconomyResult<()> {
        let Some(first) = self.denominations.first() else {
            return Err(EconomyError::InvalidConfig(format!("{}: no denominations", self.name)));
        };
        if first.multiplier != 1 {
            return Err(EconomyError::InvalidConfig(format!(
                "{}: base unit {} has multiplier {}",
                self.name, first.item, first.multiplier
            )));
        }
        for (i, denomination) in self.denominations.iter().enumerate() {
            if denomination.multiplier == 0 {
                return Err(EconomyError::InvalidConfig(format!(
                    "{}: {} has multiplier 0",
                    self.name, denomination.item
                )));
            }
            if self.denominations[..i].iter().any(|d| d.item == denomination.item) {
                return Err(EconomyError::InvalidConfig(format!(
                    "{}: {} listed twice",
                    self.name, denomination.item
                )));
            }
        }
        Ok(())
    }
}

/// A set of denomination tables.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenominationSet {
    /// Tables in lookup order.
    #[serde(default, rename = "table")]
    pub tables: Vec<DenominationTable>,
}

impl DenominationSet {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`EconomyError::InvalidConfig`] on parse failure or if any
    /// table fails [`DenominationTable::validate`].
    pub fn from_toml_str(text: &str) -> EconomyResult<Self> {
        let set: Self = toml::from_str(text).map_err(|e| EconomyError::InvalidConfig(e.to_string()))?;
        for table in &set.tables {
            table.validate()?;
        }
        tracing::debug!(tables = set.tables.len(), "Denomination tables loaded");
        Ok(set)
    }

    /// Set holding only [`DenominationTable::builtin`].
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            tables: vec![DenominationTable::builtin()],
        }
    }

    /// Table whose base unit is `identity`.
    #[must_use]
    pub fn table_for_base(&self, identity: &ItemIdentity) -> Option<&DenominationTable> {
        self.tables.iter().find(|t| t.is_base(identity))
    }
}

impl From<Vec<DenominationTable>> for DenominationSet {
    fn from(tables: Vec<DenominationTable>) -> Self {
        Self { tables }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        let table = DenominationTable::builtin();
        table.validate().unwrap();

        let gold = ItemIdentity::parse("coinage:gold_coin").unwrap();
        assert_eq!(table.multiplier_of(&gold), Some(81));
        assert!(table.is_base(&ItemIdentity::parse("coinage:copper_coin").unwrap()));
        assert!(!table.is_base(&gold));
        assert!(table.is_container(&ItemIdentity::parse("coinage:coin_pouch").unwrap()));
    }

    #[test]
    fn test_parse_toml() {
        let text = r#"
            [[table]]
            name = "shells"
            denominations = [
                { item = "sea:shell", multiplier = 1 },
                { item = "sea:pearl", multiplier = 50 },
            ]
        "#;
        let set = DenominationSet::from_toml_str(text).unwrap();
        assert_eq!(set.tables.len(), 1);
        assert!(set.tables[0].container.is_none());

        let shell = ItemIdentity::parse("sea:shell").unwrap();
        assert_eq!(set.table_for_base(&shell).map(|t| t.name.as_str()), Some("shells"));
    }

    #[test]
    fn test_validate_rejects_bad_tables() {
        let bad_base = r#"
            [[table]]
            name = "bad"
            denominations = [{ item = "a:b", multiplier = 2 }]
        "#;
        assert!(DenominationSet::from_toml_str(bad_base).is_err());

        let duplicate = r#"
            [[table]]
            name = "dup"
            denominations = [
                { item = "a:b", multiplier = 1 },
                { item = "a:b", multiplier = 3 },
            ]
        "#;
        assert!(DenominationSet::from_toml_str(duplicate).is_err());

        let malformed_item = r#"
            [[table]]
            name = "bad_id"
            denominations = [{ item = "A B", multiplier = 1 }]
        "#;
        assert!(DenominationSet::from_toml_str(malformed_item).is_err());
    }
}
