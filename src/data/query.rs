use std::collections::BTreeMap;

use super::model::DinosaurRecord;

/// Metres → feet.
pub const FEET_PER_METER: f64 = 3.281;

/// Returned by [`dinosaur_description`] when no record carries the id.
pub const DINOSAUR_NOT_FOUND: &str = "A dinosaur with an ID of 'incorrect-id' cannot be found.";

/// The `key` value that makes [`dinosaurs_alive_mya`] return names.
pub const NAME_KEY: &str = "name";

// ---------------------------------------------------------------------------
// Tallest dinosaur
// ---------------------------------------------------------------------------

/// Map the tallest dinosaur's name to its length in feet.
///
/// Returns an empty map for an empty slice. On ties the earliest record wins.
pub fn tallest_dinosaur(records: &[DinosaurRecord]) -> BTreeMap<String, f64> {
    let mut tallest = BTreeMap::new();
    let Some((first, rest)) = records.split_first() else {
        return tallest;
    };

    let mut current = first;
    for record in rest {
        if record.length_in_meters > current.length_in_meters {
            current = record;
        }
    }

    tallest.insert(
        current.name.clone(),
        current.length_in_meters * FEET_PER_METER,
    );
    tallest
}

// ---------------------------------------------------------------------------
// Description
// ---------------------------------------------------------------------------

/// Render the two-line description of the record with `id`.
///
/// The not-found message never echoes the requested id.
pub fn dinosaur_description(records: &[DinosaurRecord], id: &str) -> String {
    records
        .iter()
        .find(|r| r.dinosaur_id == id)
        .map(describe)
        .unwrap_or_else(|| DINOSAUR_NOT_FOUND.to_string())
}

fn describe(record: &DinosaurRecord) -> String {
    let latest = record
        .mya
        .latest()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    format!(
        "{} ({})\n{} It lived in the {} period, over {} million years ago.",
        record.name, record.pronunciation, record.info, record.period, latest
    )
}

// ---------------------------------------------------------------------------
// Alive at a given mya
// ---------------------------------------------------------------------------

/// Which rule admitted a record into an alive-at result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliveRule {
    /// `mya` contains the query and names were requested.
    NamedExact,
    /// Single point estimate equal to the query or one above it.
    PointEstimate,
    /// `mya` contains the query.
    ExactMembership,
    /// Query lies inside the `[first, second]` range, bounds included.
    WithinRange,
}

/// What each admitted record contributes to the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliveField {
    Id,
    Name,
}

impl AliveField {
    /// Only `"name"` selects names; any other key (or none) yields ids.
    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            Some(NAME_KEY) => AliveField::Name,
            _ => AliveField::Id,
        }
    }

}

impl AliveRule {
    /// The value a record admitted by this rule contributes.
    ///
    /// Names come only from exact matches and point estimates; the
    /// membership and range rules always yield ids.
    pub fn extract(self, record: &DinosaurRecord, field: AliveField) -> String {
        match (self, field) {
            (AliveRule::NamedExact, _) | (AliveRule::PointEstimate, AliveField::Name) => {
                record.name.clone()
            }
            _ => record.dinosaur_id.clone(),
        }
    }
}

type Guard = fn(&DinosaurRecord, f64, AliveField) -> bool;

/// Evaluated top to bottom; the first guard that holds decides.
const ALIVE_RULES: [(AliveRule, Guard); 4] = [
    (AliveRule::NamedExact, |r, mya, field| {
        field == AliveField::Name && r.mya.contains(mya)
    }),
    (AliveRule::PointEstimate, |r, mya, _| match r.mya.values() {
        [point] => *point == mya || *point - 1.0 == mya,
        _ => false,
    }),
    (AliveRule::ExactMembership, |r, mya, _| r.mya.contains(mya)),
    (AliveRule::WithinRange, |r, mya, _| {
        match (r.mya.first(), r.mya.second()) {
            (Some(start), Some(end)) => start >= mya && end <= mya,
            _ => false,
        }
    }),
];

/// The rule under which `record` counts as alive at `mya`, if any.
pub fn alive_rule(record: &DinosaurRecord, mya: f64, field: AliveField) -> Option<AliveRule> {
    ALIVE_RULES
        .iter()
        .find(|(_, guard)| guard(record, mya, field))
        .map(|(rule, _)| *rule)
}

/// Collect ids of the dinosaurs alive at `mya`, in input order.
///
/// With `key` set to `"name"`, exact and point-estimate matches yield names
/// instead; range matches still yield ids.
pub fn dinosaurs_alive_mya(records: &[DinosaurRecord], mya: f64, key: Option<&str>) -> Vec<String> {
    let field = AliveField::from_key(key);
    records
        .iter()
        .filter_map(|record| {
            let rule = alive_rule(record, mya, field)?;
            log::trace!("{} alive at {mya} mya via {rule:?}", record.dinosaur_id);
            Some(rule.extract(record, field))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Mya;

    fn record(id: &str, name: &str, mya: &[f64], length: f64) -> DinosaurRecord {
        DinosaurRecord {
            dinosaur_id: id.to_string(),
            name: name.to_string(),
            pronunciation: format!("{}-pron", name.to_lowercase()),
            meaning_of_name: None,
            diet: None,
            length_in_meters: length,
            period: "Late Cretaceous".to_string(),
            mya: Mya::new(mya.to_vec()),
            info: format!("{name} was a dinosaur."),
        }
    }

    fn dracorex() -> DinosaurRecord {
        record("WHQcpcOj0G", "Dracorex", &[66.0], 4.0)
    }

    #[test]
    fn tallest_of_empty_is_empty() {
        assert!(tallest_dinosaur(&[]).is_empty());
    }

    #[test]
    fn tallest_converts_to_feet() {
        let records = vec![
            record("a", "Small", &[70.0], 2.0),
            record("b", "Brachiosaurus", &[154.0, 150.0], 30.0),
            record("c", "Medium", &[100.0], 12.0),
        ];
        let tallest = tallest_dinosaur(&records);
        assert_eq!(tallest.len(), 1);
        assert_eq!(tallest["Brachiosaurus"], 30.0 * FEET_PER_METER);
        assert!((tallest["Brachiosaurus"] - 98.43).abs() < 1e-9);
    }

    #[test]
    fn tallest_tie_keeps_first() {
        let records = vec![
            record("a", "Shorty", &[70.0], 1.0),
            record("b", "First", &[70.0], 9.0),
            record("c", "Second", &[70.0], 9.0),
        ];
        let tallest = tallest_dinosaur(&records);
        assert_eq!(tallest.keys().collect::<Vec<_>>(), vec!["First"]);
    }

    #[test]
    fn tallest_single_record() {
        let tallest = tallest_dinosaur(&[dracorex()]);
        assert_eq!(tallest.get("Dracorex"), Some(&(4.0 * FEET_PER_METER)));
    }

    #[test]
    fn description_formats_two_lines() {
        let mut xeno = record("U9vuZmgKwUr", "Xenoceratops", &[77.5], 6.0);
        xeno.pronunciation = "ZEE-no-SEH-ruh-tops".to_string();
        xeno.info = "Xenoceratops had horns and a bony frill with elaborate ornamentation of projections, knobs, and spikes.".to_string();
        xeno.period = "Early Cretaceous".to_string();

        let text = dinosaur_description(&[dracorex(), xeno], "U9vuZmgKwUr");
        assert_eq!(
            text,
            "Xenoceratops (ZEE-no-SEH-ruh-tops)\nXenoceratops had horns and a bony frill with elaborate ornamentation of projections, knobs, and spikes. It lived in the Early Cretaceous period, over 77.5 million years ago."
        );
        assert_eq!(text.matches('\n').count(), 1);
    }

    #[test]
    fn description_uses_latest_bound_of_range() {
        let records = vec![record("r", "Ranger", &[156.0, 144.0], 5.0)];
        let text = dinosaur_description(&records, "r");
        assert!(text.ends_with("over 144 million years ago."));
    }

    #[test]
    fn description_first_match_wins() {
        let records = vec![
            record("dup", "Earlier", &[90.0], 1.0),
            record("dup", "Later", &[80.0], 1.0),
        ];
        assert!(dinosaur_description(&records, "dup").starts_with("Earlier ("));
    }

    #[test]
    fn description_not_found_is_literal() {
        let records = vec![dracorex()];
        assert_eq!(dinosaur_description(&records, "nonexistent"), DINOSAUR_NOT_FOUND);
        assert_eq!(
            dinosaur_description(&[], "incorrect-id"),
            "A dinosaur with an ID of 'incorrect-id' cannot be found."
        );
    }

    #[test]
    fn description_with_empty_mya() {
        let records = vec![record("e", "Enigma", &[], 1.0)];
        assert!(dinosaur_description(&records, "e").ends_with("over unknown million years ago."));
    }

    #[test]
    fn alive_point_estimate_allows_one_less() {
        let records = vec![dracorex()];
        assert_eq!(dinosaurs_alive_mya(&records, 65.0, None), vec!["WHQcpcOj0G"]);
        assert_eq!(dinosaurs_alive_mya(&records, 66.0, None), vec!["WHQcpcOj0G"]);
        assert!(dinosaurs_alive_mya(&records, 64.0, None).is_empty());
        assert!(dinosaurs_alive_mya(&records, 67.0, None).is_empty());
    }

    #[test]
    fn alive_name_key_returns_names() {
        let records = vec![dracorex()];
        assert_eq!(dinosaurs_alive_mya(&records, 65.0, Some("name")), vec!["Dracorex"]);
        assert_eq!(dinosaurs_alive_mya(&records, 66.0, Some("name")), vec!["Dracorex"]);
    }

    #[test]
    fn alive_unknown_key_falls_back_to_ids() {
        let records = vec![dracorex()];
        assert_eq!(
            dinosaurs_alive_mya(&records, 65.0, Some("unknown-key")),
            vec!["WHQcpcOj0G"]
        );
        assert_eq!(
            dinosaurs_alive_mya(&records, 65.0, Some("period")),
            vec!["WHQcpcOj0G"]
        );
    }

    #[test]
    fn alive_range_is_inclusive() {
        let records = vec![record("rng", "Ranger", &[150.0, 145.0], 5.0)];
        for mya in [150.0, 148.0, 145.0] {
            assert_eq!(dinosaurs_alive_mya(&records, mya, None), vec!["rng"], "mya {mya}");
        }
        assert!(dinosaurs_alive_mya(&records, 151.0, None).is_empty());
        assert!(dinosaurs_alive_mya(&records, 144.0, None).is_empty());
    }

    #[test]
    fn alive_range_with_name_key_yields_ids() {
        let records = vec![
            record("rng", "Ranger", &[150.0, 145.0], 5.0),
            record("pt", "Pointy", &[149.0], 1.0),
        ];
        assert_eq!(
            dinosaurs_alive_mya(&records, 148.0, Some("name")),
            vec!["rng", "Pointy"]
        );
        assert_eq!(
            dinosaurs_alive_mya(&records, 145.0, Some("name")),
            vec!["Ranger"]
        );
    }

    #[test]
    fn rule_extraction() {
        let range = record("rng", "Ranger", &[150.0, 145.0], 5.0);
        assert_eq!(AliveRule::NamedExact.extract(&range, AliveField::Name), "Ranger");
        assert_eq!(AliveRule::PointEstimate.extract(&range, AliveField::Name), "Ranger");
        assert_eq!(AliveRule::PointEstimate.extract(&range, AliveField::Id), "rng");
        assert_eq!(AliveRule::ExactMembership.extract(&range, AliveField::Id), "rng");
        assert_eq!(AliveRule::WithinRange.extract(&range, AliveField::Name), "rng");
    }

    #[test]
    fn alive_preserves_input_order() {
        let records = vec![
            record("z", "Zed", &[160.0, 140.0], 1.0),
            record("skip", "Skip", &[90.0], 1.0),
            record("a", "Ay", &[151.0], 1.0),
            record("m", "Em", &[150.0], 1.0),
        ];
        assert_eq!(dinosaurs_alive_mya(&records, 150.0, None), vec!["z", "a", "m"]);
    }

    #[test]
    fn alive_nothing_matches() {
        let records = vec![dracorex(), record("r", "Ranger", &[150.0, 145.0], 5.0)];
        assert!(dinosaurs_alive_mya(&records, 10.0, None).is_empty());
        assert!(dinosaurs_alive_mya(&[], 10.0, Some("name")).is_empty());
    }

    #[test]
    fn alive_rule_precedence() {
        let point = dracorex();
        assert_eq!(
            alive_rule(&point, 66.0, AliveField::Name),
            Some(AliveRule::NamedExact)
        );
        assert_eq!(
            alive_rule(&point, 66.0, AliveField::Id),
            Some(AliveRule::PointEstimate)
        );
        assert_eq!(
            alive_rule(&point, 65.0, AliveField::Name),
            Some(AliveRule::PointEstimate)
        );

        let range = record("r", "Ranger", &[150.0, 145.0], 5.0);
        assert_eq!(
            alive_rule(&range, 145.0, AliveField::Id),
            Some(AliveRule::ExactMembership)
        );
        assert_eq!(
            alive_rule(&range, 148.0, AliveField::Name),
            Some(AliveRule::WithinRange)
        );
        assert_eq!(alive_rule(&range, 100.0, AliveField::Id), None);
    }

    #[test]
    fn alive_ignores_empty_mya() {
        let records = vec![record("e", "Enigma", &[], 1.0)];
        assert!(dinosaurs_alive_mya(&records, 0.0, None).is_empty());
    }

    #[test]
    fn field_from_key() {
        assert_eq!(AliveField::from_key(None), AliveField::Id);
        assert_eq!(AliveField::from_key(Some("name")), AliveField::Name);
        assert_eq!(AliveField::from_key(Some("Name")), AliveField::Id);
    }
}
