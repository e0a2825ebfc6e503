//! Caller-owned view state
//!
//! [`PropellantTable`] holds the rows of the last propellant parse and the
//! column sort; [`ParseSession`] keeps the most recent wrapper of each kind.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::{EngWrapper, FormulaWrapper, MotorWrapper, PropellantRecord};

/// Sortable propellant column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    IspStar,
    BurnRateA,
    BurnRateN,
    Density,
    SpecificHeatRatio,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Name,
        SortKey::IspStar,
        SortKey::BurnRateA,
        SortKey::BurnRateN,
        SortKey::Density,
        SortKey::SpecificHeatRatio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::IspStar => "isp_star",
            SortKey::BurnRateA => "burn_rate_a",
            SortKey::BurnRateN => "burn_rate_n",
            SortKey::Density => "density",
            SortKey::SpecificHeatRatio => "specific_heat_ratio",
        }
    }

    /// Column header text as shown in BurnSim
    pub fn column_label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::IspStar => "ISPStar",
            SortKey::BurnRateA => "A",
            SortKey::BurnRateN => "N",
            SortKey::Density => "Density",
            SortKey::SpecificHeatRatio => "SpecificHeatRatio",
        }
    }

    fn compare(&self, left: &PropellantRecord, right: &PropellantRecord) -> Ordering {
        let numbers = |l: f64, r: f64| l.partial_cmp(&r).unwrap_or(Ordering::Equal);
        match self {
            SortKey::Name => left
                .name
                .to_lowercase()
                .cmp(&right.name.to_lowercase())
                .then_with(|| left.name.cmp(&right.name)),
            SortKey::IspStar => numbers(left.isp_star, right.isp_star),
            SortKey::BurnRateA => numbers(left.burn_rate_a, right.burn_rate_a),
            SortKey::BurnRateN => numbers(left.burn_rate_n, right.burn_rate_n),
            SortKey::Density => numbers(left.density, right.density),
            SortKey::SpecificHeatRatio => {
                numbers(left.specific_heat_ratio, right.specific_heat_ratio)
            }
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    /// Accepts field names (`isp_star`) and column labels (`ISPStar`)
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == value || key.column_label() == value)
            .ok_or_else(|| format!("Unknown sort key: {}", value))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Active sort column; no key means source order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

/// Propellant rows with their sort state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropellantTable {
    rows: Vec<PropellantRecord>,
    sort: SortState,
}

impl PropellantTable {
    pub fn new(rows: Vec<PropellantRecord>) -> Self {
        Self {
            rows,
            sort: SortState::default(),
        }
    }

    pub fn rows(&self) -> &[PropellantRecord] {
        &self.rows
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    /// A new key sorts ascending; the same key again flips the direction
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort.key == Some(key) {
            self.sort.direction = self.sort.direction.flipped();
        } else {
            self.sort = SortState {
                key: Some(key),
                direction: SortDirection::Asc,
            };
        }
    }

    /// Rows in display order. The sort is stable so ties keep source order.
    pub fn sorted(&self) -> Vec<&PropellantRecord> {
        let mut rows: Vec<&PropellantRecord> = self.rows.iter().collect();

        if let Some(key) = self.sort.key {
            rows.sort_by(|left, right| {
                let ordering = key.compare(left, right);
                match self.sort.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }

        rows
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.sort = SortState::default();
    }
}

/// Latest parse results for one user
#[derive(Debug, Clone, Default)]
pub struct ParseSession {
    pub formula: Option<FormulaWrapper>,
    pub motor: Option<MotorWrapper>,
    pub eng: Option<EngWrapper>,
    pub propellants: PropellantTable,
}

impl ParseSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep a propellant wrapper; its rows replace the table and reset the
    /// sort (an error wrapper leaves the table empty)
    pub fn record_formula(&mut self, wrapper: FormulaWrapper) {
        self.propellants = PropellantTable::new(wrapper.payload.propellants.clone());
        self.formula = Some(wrapper);
    }

    pub fn record_motor(&mut self, wrapper: MotorWrapper) {
        self.motor = Some(wrapper);
    }

    pub fn record_eng(&mut self, wrapper: EngWrapper) {
        self.eng = Some(wrapper);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::parse_formula_text;
    use crate::models::SourceType;

    fn record(name: &str, isp: f64) -> PropellantRecord {
        PropellantRecord {
            propellant_id: name.to_lowercase(),
            name: name.to_string(),
            isp_star: isp,
            burn_rate_a: 0.05,
            burn_rate_n: 0.3,
            density: 1.7,
            specific_heat_ratio: 1.2,
            notes: String::new(),
            original_index: 1,
        }
    }

    fn names(rows: Vec<&PropellantRecord>) -> Vec<&str> {
        rows.into_iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_toggle_sort() {
        let mut table = PropellantTable::new(Vec::new());
        assert_eq!(table.sort_state().key, None);

        table.toggle_sort(SortKey::Name);
        assert_eq!(table.sort_state().direction, SortDirection::Asc);
        table.toggle_sort(SortKey::Name);
        assert_eq!(table.sort_state().direction, SortDirection::Desc);
        table.toggle_sort(SortKey::Density);
        assert_eq!(
            table.sort_state(),
            SortState {
                key: Some(SortKey::Density),
                direction: SortDirection::Asc
            }
        );
    }

    #[test]
    fn test_sorted_rows() {
        let mut table = PropellantTable::new(vec![
            record("Charlie", 150.0),
            record("Alpha", 190.0),
            record("Bravo", 150.0),
        ]);

        assert_eq!(names(table.sorted()), vec!["Charlie", "Alpha", "Bravo"]);

        table.toggle_sort(SortKey::Name);
        assert_eq!(names(table.sorted()), vec!["Alpha", "Bravo", "Charlie"]);

        table.toggle_sort(SortKey::IspStar);
        assert_eq!(names(table.sorted()), vec!["Charlie", "Bravo", "Alpha"]);

        table.toggle_sort(SortKey::IspStar);
        assert_eq!(names(table.sorted()), vec!["Alpha", "Charlie", "Bravo"]);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let mut table = PropellantTable::new(vec![
            record("Zulu", 100.0),
            record("alpha", 100.0),
            record("Alpha", 100.0),
        ]);

        table.toggle_sort(SortKey::Name);
        assert_eq!(names(table.sorted()), vec!["Alpha", "alpha", "Zulu"]);
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!("isp_star".parse::<SortKey>().unwrap(), SortKey::IspStar);
        assert_eq!("ISPStar".parse::<SortKey>().unwrap(), SortKey::IspStar);
        assert_eq!("A".parse::<SortKey>().unwrap(), SortKey::BurnRateA);
        assert!("thrust".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_session_clear() {
        let mut session = ParseSession::new();
        let wrapper = parse_formula_text(
            r#"<Propellant Name="A" ISPStar="100" A="0.1" N="0.3" Density="1.5" SpecificHeatRatio="1.2"/>"#,
            SourceType::Paste,
            "",
        );
        session.record_formula(wrapper);
        session.propellants.toggle_sort(SortKey::Name);
        assert_eq!(session.propellants.rows().len(), 1);

        session.clear();
        assert!(session.formula.is_none());
        assert!(session.propellants.rows().is_empty());
        assert_eq!(session.propellants.sort_state(), SortState::default());
    }
}
