//! Order entries as delivered by the quoting engine

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// An exact rational amount as two decimal strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fraction {
    /// Numerator
    pub numer: String,
    /// Denominator
    pub denom: String,
}

impl Fraction {
    /// Create a fraction from its numerator and denominator
    pub fn new(numer: impl Into<String>, denom: impl Into<String>) -> Self {
        Self {
            numer: numer.into(),
            denom: denom.into(),
        }
    }
}

/// The diffable fields of an [`OrderEntry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryField {
    /// The coin the order is quoted in
    Coin,
    /// The counter coin, when the engine reports one
    RelCoin,
    /// Price as decimal text
    Price,
    /// Price as an exact fraction
    PriceFraction,
    /// Maximum tradable volume as decimal text
    MaxVolume,
    /// Maximum tradable volume as an exact fraction
    MaxVolumeFraction,
    /// Maximum volume expressed in the base coin
    BaseMaxVolume,
    /// Maximum volume expressed in the rel coin
    RelMaxVolume,
    /// Minimum volume accepted by the maker
    MinVolume,
    /// Relative depth of the row within its side
    DepthPercent,
    /// Whether the order belongs to the local user
    IsMine,
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntryField::Coin => "coin",
            EntryField::RelCoin => "rel_coin",
            EntryField::Price => "price",
            EntryField::PriceFraction => "price_fraction",
            EntryField::MaxVolume => "max_volume",
            EntryField::MaxVolumeFraction => "max_volume_fraction",
            EntryField::BaseMaxVolume => "base_max_volume",
            EntryField::RelMaxVolume => "rel_max_volume",
            EntryField::MinVolume => "min_volume",
            EntryField::DepthPercent => "depth_percent",
            EntryField::IsMine => "is_mine",
        };
        write!(f, "{name}")
    }
}

/// One resting order of a book side or of the best-orders set.
///
/// Entries are immutable once received. A newer entry with the same `uuid`
/// replaces the old one as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEntry {
    /// Unique key within a collection
    pub uuid: Uuid,

    /// Coin of the order
    pub coin: String,

    /// Counter coin; only best-order entries are guaranteed to carry one
    #[serde(default)]
    pub rel_coin: Option<String>,

    /// Price as decimal text
    pub price: String,

    /// Price as an exact fraction
    pub price_fraction: Fraction,

    /// Maximum volume as decimal text
    pub max_volume: String,

    /// Maximum volume as an exact fraction
    pub max_volume_fraction: Fraction,

    /// Maximum volume in base coin units (may be empty)
    #[serde(default)]
    pub base_max_volume: String,

    /// Maximum volume in rel coin units (may be empty)
    #[serde(default)]
    pub rel_max_volume: String,

    /// Minimum volume the maker accepts (may be empty)
    #[serde(default)]
    pub min_volume: String,

    /// Depth of the row relative to its side, in percent (may be empty)
    #[serde(default)]
    pub depth_percent: String,

    /// Whether the order was placed by the local user
    #[serde(default)]
    pub is_mine: bool,
}

impl OrderEntry {
    /// Create an entry with the required fields; optional fields start empty
    pub fn new(
        uuid: Uuid,
        coin: impl Into<String>,
        price: impl Into<String>,
        price_fraction: Fraction,
        max_volume: impl Into<String>,
        max_volume_fraction: Fraction,
    ) -> Self {
        Self {
            uuid,
            coin: coin.into(),
            rel_coin: None,
            price: price.into(),
            price_fraction,
            max_volume: max_volume.into(),
            max_volume_fraction,
            base_max_volume: String::new(),
            rel_max_volume: String::new(),
            min_volume: String::new(),
            depth_percent: String::new(),
            is_mine: false,
        }
    }

    /// Builder style setter for the counter coin
    pub fn with_rel_coin(mut self, rel_coin: impl Into<String>) -> Self {
        self.rel_coin = Some(rel_coin.into());
        self
    }

    /// Fields whose value differs between `self` and `other`.
    ///
    /// The uuid is the identity, not a field, and is never reported.
    pub fn changed_fields(&self, other: &OrderEntry) -> Vec<EntryField> {
        let mut fields = Vec::new();
        if self.coin != other.coin {
            fields.push(EntryField::Coin);
        }
        if self.rel_coin != other.rel_coin {
            fields.push(EntryField::RelCoin);
        }
        if self.price != other.price {
            fields.push(EntryField::Price);
        }
        if self.price_fraction != other.price_fraction {
            fields.push(EntryField::PriceFraction);
        }
        if self.max_volume != other.max_volume {
            fields.push(EntryField::MaxVolume);
        }
        if self.max_volume_fraction != other.max_volume_fraction {
            fields.push(EntryField::MaxVolumeFraction);
        }
        if self.base_max_volume != other.base_max_volume {
            fields.push(EntryField::BaseMaxVolume);
        }
        if self.rel_max_volume != other.rel_max_volume {
            fields.push(EntryField::RelMaxVolume);
        }
        if self.min_volume != other.min_volume {
            fields.push(EntryField::MinVolume);
        }
        if self.depth_percent != other.depth_percent {
            fields.push(EntryField::DepthPercent);
        }
        if self.is_mine != other.is_mine {
            fields.push(EntryField::IsMine);
        }
        fields
    }
}
