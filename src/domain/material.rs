// ==========================================
// Conso / Retour - material domain model
// ==========================================
// Scope: one PO line plus its derived projection and the aggregate totals
// Hard rule: MaterialRecord is the only fact layer; DerivedRow and Totals are
// ephemeral projections, recomputed on every read, never stored back
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// MaterialRecord - PO line fact data
// ==========================================
// planned/assigned/issued/total come from the upstream SAP extract and are
// read-only for the operator; retour is the single operator-editable field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    // ===== Key =====
    pub id: String, // material number, stable key

    // ===== Master data =====
    pub description: String,     // free text
    pub unit_of_measure: String, // display unit code, e.g. "EA"

    // ===== Quantities (non-negative, set by the import boundary) =====
    pub planned: f64,  // quantity planned on the PO
    pub assigned: f64, // quantity assigned to the order
    pub issued: f64,   // quantity already issued
    pub total: f64,    // total movement quantity

    // ===== Operator input =====
    pub retour: f64, // returned quantity; invariant: retour >= 0 (clamped, never rejected)
}

impl MaterialRecord {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        unit_of_measure: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            unit_of_measure: unit_of_measure.into(),
            planned: 0.0,
            assigned: 0.0,
            issued: 0.0,
            total: 0.0,
            retour: 0.0,
        }
    }
}

// ==========================================
// DerivedRow - computed projection of one line
// ==========================================
// consomme and delta_percent are owned by the Reconciliation Calculator;
// nothing outside the engine writes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedRow {
    pub record: MaterialRecord,
    pub consomme: f64,      // max(0, assigned - retour), never negative
    pub delta_percent: f64, // 0 when assigned == 0, display-only outside JSON export
}

// ==========================================
// Totals - aggregate over all rows
// ==========================================
// Always rebuilt from the full DerivedRow set in one pass; never accumulated
// incrementally, so totals cannot drift from the rows.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub planned: f64,
    pub assigned: f64,
    pub issued: f64,
    pub total: f64,
    pub retour: f64,
    pub consomme: f64,
}

impl Totals {
    /// Fold one derived row into the running totals.
    pub fn accumulate(&mut self, row: &DerivedRow) {
        self.planned += row.record.planned;
        self.assigned += row.record.assigned;
        self.issued += row.record.issued;
        self.total += row.record.total;
        self.retour += row.record.retour;
        self.consomme += row.consomme;
    }
}

// ==========================================
// PoHeader - PO context shown above the table
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoHeader {
    pub po_number: String, // manufacturing purchase order number
    pub product: String,   // finished product label
    pub batch: String,     // production batch
}

// ==========================================
// PoSession - in-memory close-out session
// ==========================================
// Owned by the view layer for the lifetime of the screen. Nothing here is
// persisted; the session dies with the window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoSession {
    pub header: PoHeader,
    pub records: Vec<MaterialRecord>,
    pub opened_at: DateTime<Utc>,  // audit: when the screen was opened
    pub updated_at: DateTime<Utc>, // audit: last retour edit
}

impl PoSession {
    pub fn new(header: PoHeader, records: Vec<MaterialRecord>) -> Self {
        let now = Utc::now();
        Self {
            header,
            records,
            opened_at: now,
            updated_at: now,
        }
    }

    /// Fixed seed used until the SAP TXT import is wired in.
    ///
    /// Mirrors the reference data set for PO 1048956 (FRAXIPARINE 0.6 ML,
    /// batch 8564) so the screen is exercisable without an import file.
    pub fn demo() -> Self {
        let header = PoHeader {
            po_number: "1048956".to_string(),
            product: "FRAXIPARINE 0.6 ML".to_string(),
            batch: "8564".to_string(),
        };

        let records = vec![
            MaterialRecord {
                id: "000123451".to_string(),
                description: "CARTON SECONDARY 1".to_string(),
                unit_of_measure: "EA".to_string(),
                planned: 16530.0,
                assigned: 2160.0,
                issued: 100.0,
                total: 2060.0,
                retour: 100.0,
            },
            MaterialRecord {
                id: "000123452".to_string(),
                description: "ETIQUETTES PRIMAIRES".to_string(),
                unit_of_measure: "EA".to_string(),
                planned: 10000.0,
                assigned: 9800.0,
                issued: 0.0,
                total: 9800.0,
                retour: 0.0,
            },
            MaterialRecord {
                id: "000123453".to_string(),
                description: "BOUTEILLES VERRE 0.6".to_string(),
                unit_of_measure: "EA".to_string(),
                planned: 16530.0,
                assigned: 16200.0,
                issued: 0.0,
                total: 16200.0,
                retour: 0.0,
            },
        ];

        Self::new(header, records)
    }

    /// Mark the session as touched by an operator edit.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
