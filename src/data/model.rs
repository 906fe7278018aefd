use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Mya – "millions of years ago", a point estimate or an [older, younger] range
// ---------------------------------------------------------------------------

/// The `mya` values of a record, in source order.
///
/// One value is a point estimate; two values are a range running from the
/// more ancient bound to the more recent one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mya(Vec<f64>);

impl Mya {
    pub fn new(values: Vec<f64>) -> Self {
        Mya(values)
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exact membership test.
    pub fn contains(&self, mya: f64) -> bool {
        self.0.iter().any(|&v| v == mya)
    }

    pub fn first(&self) -> Option<f64> {
        self.0.first().copied()
    }

    pub fn second(&self) -> Option<f64> {
        self.0.get(1).copied()
    }

    /// The last value: the point estimate, or the more recent end of a range.
    pub fn latest(&self) -> Option<f64> {
        self.0.last().copied()
    }
}

impl From<Vec<f64>> for Mya {
    fn from(values: Vec<f64>) -> Self {
        Mya(values)
    }
}

impl fmt::Display for Mya {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [] => write!(f, "?"),
            [point] => write!(f, "{point}"),
            [start, rest @ ..] => {
                write!(f, "{start}")?;
                for v in rest {
                    write!(f, "–{v}")?;
                }
                Ok(())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// DinosaurRecord – one entry of the dataset
// ---------------------------------------------------------------------------

/// A single dinosaur entry, shaped like the source JSON (`camelCase` keys).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DinosaurRecord {
    pub dinosaur_id: String,
    pub name: String,
    pub pronunciation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning_of_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet: Option<String>,
    pub length_in_meters: f64,
    pub period: String,
    pub mya: Mya,
    pub info: String,
}

// ---------------------------------------------------------------------------
// DinosaurCatalog – the complete loaded dataset
// ---------------------------------------------------------------------------

/// All loaded records in source order, plus the distinct periods they span.
#[derive(Debug, Clone, Default)]
pub struct DinosaurCatalog {
    pub records: Vec<DinosaurRecord>,
    /// Sorted set of `period` values, used for colouring.
    pub periods: BTreeSet<String>,
}

impl DinosaurCatalog {
    /// Build the period index from the loaded records.
    pub fn from_records(records: Vec<DinosaurRecord>) -> Self {
        let periods = records.iter().map(|r| r.period.clone()).collect();
        DinosaurCatalog { records, periods }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mya_accessors() {
        let range = Mya::new(vec![150.0, 145.0]);
        assert_eq!(range.first(), Some(150.0));
        assert_eq!(range.second(), Some(145.0));
        assert_eq!(range.latest(), Some(145.0));
        assert!(range.contains(145.0));
        assert!(!range.contains(148.0));

        let point = Mya::new(vec![66.0]);
        assert_eq!(point.second(), None);
        assert_eq!(point.latest(), Some(66.0));

        let empty = Mya::default();
        assert!(empty.is_empty());
        assert_eq!(empty.latest(), None);
    }

    #[test]
    fn mya_display() {
        assert_eq!(Mya::new(vec![77.5]).to_string(), "77.5");
        assert_eq!(Mya::new(vec![156.0, 144.0]).to_string(), "156–144");
        assert_eq!(Mya::default().to_string(), "?");
    }

    #[test]
    fn record_deserializes_from_camel_case_json() {
        let json = r#"{
            "dinosaurId": "WHQcpcOj0G",
            "name": "Dracorex",
            "pronunciation": "dray-co-rex",
            "meaningOfName": "dragon king",
            "diet": "herbivorous",
            "lengthInMeters": 4,
            "period": "Late Cretaceous",
            "mya": [66],
            "info": "Dracorex had spikes on its head."
        }"#;
        let record: DinosaurRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.dinosaur_id, "WHQcpcOj0G");
        assert_eq!(record.length_in_meters, 4.0);
        assert_eq!(record.mya.values(), &[66.0]);
        assert_eq!(record.meaning_of_name.as_deref(), Some("dragon king"));
    }

    #[test]
    fn optional_fields_default_to_none() {
        let json = r#"{
            "dinosaurId": "x", "name": "X", "pronunciation": "ex",
            "lengthInMeters": 1.5, "period": "Triassic", "mya": [210, 200],
            "info": "Small."
        }"#;
        let record: DinosaurRecord = serde_json::from_str(json).unwrap();
        assert!(record.diet.is_none());
        assert!(record.meaning_of_name.is_none());
    }

    #[test]
    fn catalog_collects_sorted_periods() {
        let json = r#"[
            {"dinosaurId":"a","name":"A","pronunciation":"a","lengthInMeters":1,"period":"Late Jurassic","mya":[150],"info":"."},
            {"dinosaurId":"b","name":"B","pronunciation":"b","lengthInMeters":2,"period":"Early Cretaceous","mya":[120],"info":"."},
            {"dinosaurId":"c","name":"C","pronunciation":"c","lengthInMeters":3,"period":"Late Jurassic","mya":[151],"info":"."}
        ]"#;
        let records: Vec<DinosaurRecord> = serde_json::from_str(json).unwrap();
        let catalog = DinosaurCatalog::from_records(records);
        assert_eq!(catalog.len(), 3);
        let periods: Vec<&str> = catalog.periods.iter().map(String::as_str).collect();
        assert_eq!(periods, vec!["Early Cretaceous", "Late Jurassic"]);
    }
}
