// ==========================================
// Conso / Retour - JSON export
// ==========================================
// Responsibility: canonical JSON rendition of the derived table
// Hard rule: byte-for-byte deterministic for a given row set; raw numeric
// values only, no locale formatting on the export path
// ==========================================

use crate::domain::material::DerivedRow;
use serde::{Deserialize, Serialize};

// ==========================================
// JsonRow - interchange row
// ==========================================
// Field order fixes the JSON key order. delta_percent is a display-only
// derivation and is deliberately not part of the interchange contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonRow {
    pub id: String,
    pub description: String,
    pub unit_of_measure: String,
    pub planned: f64,
    pub assigned: f64,
    pub issued: f64,
    pub total: f64,
    pub retour: f64,
    pub consomme: f64,
}

impl From<&DerivedRow> for JsonRow {
    fn from(row: &DerivedRow) -> Self {
        JsonRow {
            id: row.record.id.clone(),
            description: row.record.description.clone(),
            unit_of_measure: row.record.unit_of_measure.clone(),
            planned: row.record.planned,
            assigned: row.record.assigned,
            issued: row.record.issued,
            total: row.record.total,
            retour: row.record.retour,
            consomme: row.consomme,
        }
    }
}

/// Serialize the derived rows as the `conso-retour.json` document.
///
/// Pretty-printed with 2-space indentation for human diffability. The empty
/// collection yields `[]`.
pub fn to_json(rows: &[DerivedRow]) -> String {
    let payload: Vec<JsonRow> = rows.iter().map(JsonRow::from).collect();

    // A Vec of plain structs with no map keys cannot fail to serialize.
    serde_json::to_string_pretty(&payload)
        .unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::material::MaterialRecord;
    use crate::engine::ReconciliationCore;

    fn derived(id: &str, assigned: f64, retour: f64) -> DerivedRow {
        let record = MaterialRecord {
            planned: 1000.0,
            assigned,
            issued: 10.0,
            total: assigned,
            retour,
            ..MaterialRecord::new(id, format!("MAT {}", id), "EA")
        };
        ReconciliationCore::derive_row(&record)
    }

    #[test]
    fn test_empty_rows_yield_empty_array() {
        assert_eq!(to_json(&[]), "[]");
    }

    #[test]
    fn test_key_order_is_stable() {
        let out = to_json(&[derived("A", 100.0, 40.0)]);

        let keys = [
            "\"id\"",
            "\"description\"",
            "\"unitOfMeasure\"",
            "\"planned\"",
            "\"assigned\"",
            "\"issued\"",
            "\"total\"",
            "\"retour\"",
            "\"consomme\"",
        ];
        let positions: Vec<usize> = keys
            .iter()
            .map(|k| out.find(k).unwrap_or_else(|| panic!("missing key {}", k)))
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]), "keys out of order: {}", out);
    }

    #[test]
    fn test_delta_is_not_exported() {
        let out = to_json(&[derived("A", 100.0, 40.0)]);
        assert!(!out.contains("delta"));
    }

    #[test]
    fn test_round_trip() {
        let rows = vec![derived("A", 100.0, 40.0), derived("B", 0.0, 5.0)];
        let out = to_json(&rows);

        let parsed: Vec<JsonRow> = serde_json::from_str(&out).unwrap();
        let expected: Vec<JsonRow> = rows.iter().map(JsonRow::from).collect();

        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_deterministic_output() {
        let rows = vec![derived("A", 100.0, 40.0)];
        assert_eq!(to_json(&rows), to_json(&rows));
    }
}
