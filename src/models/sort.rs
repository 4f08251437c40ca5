use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::models::asset::Asset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Descending // Highest first
    }
}

/// Columns the table can order by.
///
/// `Name` is deliberately non-numeric: comparing by it yields `Equal`, so
/// the stable sort leaves the incoming order alone. That is a simplification
/// carried over from the source data grid, not a general string sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
pub enum SortColumn {
    Name,
    Price,
    Change1h,
    Change24h,
    Change7d,
    MarketCap,
    Volume24h,
    MaxSupply,
}

impl Default for SortColumn {
    fn default() -> Self {
        Self::Price
    }
}

impl SortColumn {
    /// Numeric key for an asset under this column. `None` means either a
    /// missing value (uncapped max supply) or a non-numeric column.
    fn numeric_key(&self, asset: &Asset) -> Option<f64> {
        match self {
            SortColumn::Name => None,
            SortColumn::Price => Some(asset.price),
            SortColumn::Change1h => Some(asset.change_1h),
            SortColumn::Change24h => Some(asset.change_24h),
            SortColumn::Change7d => Some(asset.change_7d),
            SortColumn::MarketCap => Some(asset.market_cap),
            SortColumn::Volume24h => Some(asset.volume_24h),
            SortColumn::MaxSupply => asset.max_supply,
        }
    }

    fn is_numeric(&self) -> bool {
        !matches!(self, SortColumn::Name)
    }
}

/// Produce a new ordering of `assets` by `column` / `direction`.
///
/// Missing values always sink to the end, whatever the requested direction:
/// an uncapped supply is "no answer", not a very large or very small one.
pub fn sorted_assets(assets: &[Asset], column: SortColumn, direction: SortDirection) -> Vec<Asset> {
    let mut sorted = assets.to_vec();
    sorted.sort_by(|a, b| compare(a, b, column, direction));
    sorted
}

fn compare(a: &Asset, b: &Asset, column: SortColumn, direction: SortDirection) -> Ordering {
    if !column.is_numeric() {
        return Ordering::Equal;
    }

    match (column.numeric_key(a), column.numeric_key(b)) {
        (Some(x), Some(y)) => {
            let ord = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        }
        // Missing values sort last regardless of direction.
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}
