// ==========================================
// Conso / Retour - Reconciliation Calculator
// ==========================================
// Responsibility: derive consomme / delta% per line and aggregate totals,
// and apply validated retour mutations
// Hard rule: stateless, no side effects, no I/O; every entry point is total
// (malformed input degrades to 0 or a no-op, never an error)
// ==========================================

use crate::domain::material::{DerivedRow, MaterialRecord, Totals};
use crate::domain::types::QuickSetMode;

// ==========================================
// ReconciliationCore - pure function library
// ==========================================
pub struct ReconciliationCore;

impl ReconciliationCore {
    /// Coerce untrusted numeric input to a non-negative quantity.
    ///
    /// # Rule
    /// - NaN or non-finite input -> 0
    /// - negative input -> 0
    /// - anything else passes through unchanged
    ///
    /// This is the single coercion point for operator input; the clamp is
    /// silent so the screen always holds a displayable value.
    pub fn coerce_non_negative(raw: f64) -> f64 {
        if !raw.is_finite() {
            return 0.0;
        }
        raw.max(0.0)
    }

    /// Coerce raw text from the retour input field to a quantity.
    ///
    /// Unparseable text counts as 0, then the non-negative clamp applies.
    pub fn numeric_coerce(raw: &str) -> f64 {
        let value = raw.trim().parse::<f64>().unwrap_or(0.0);
        Self::coerce_non_negative(value)
    }

    /// Percentage deviation of `value` from `reference`.
    ///
    /// Defined as 0 when the reference is 0 (no division by zero).
    pub fn percent_deviation(value: f64, reference: f64) -> f64 {
        if reference == 0.0 {
            return 0.0;
        }
        (value - reference) / reference * 100.0
    }

    /// Derive one row.
    ///
    /// # Formulas
    /// - consomme = max(0, assigned - retour); never negative, even when
    ///   retour exceeds assigned (the excess clamps, it does not error)
    /// - delta_percent = (consomme - assigned) / assigned * 100, or 0 when
    ///   assigned is 0
    pub fn derive_row(record: &MaterialRecord) -> DerivedRow {
        let retour = Self::coerce_non_negative(record.retour);
        let consomme = Self::coerce_non_negative(record.assigned - retour);
        let delta_percent = Self::percent_deviation(consomme, record.assigned);

        DerivedRow {
            record: MaterialRecord {
                retour,
                ..record.clone()
            },
            consomme,
            delta_percent,
        }
    }

    /// Derive every row in input order and fold totals in one pass.
    ///
    /// Input order is significant: it is preserved through to display and
    /// export. The empty collection yields no rows and all-zero totals.
    pub fn derive_all(records: &[MaterialRecord]) -> (Vec<DerivedRow>, Totals) {
        let mut totals = Totals::default();
        let rows = records
            .iter()
            .map(|record| {
                let row = Self::derive_row(record);
                totals.accumulate(&row);
                row
            })
            .collect();

        (rows, totals)
    }

    /// Replace one record's retour with a coerced value.
    ///
    /// # Parameters
    /// - records: current collection (not mutated)
    /// - id: material key; an unknown id is a no-op, not a fault, since the
    ///   screen can only reference known ids
    /// - raw: untrusted value; coerced through [`Self::coerce_non_negative`]
    ///
    /// # Returns
    /// - A new collection; untouched records carry over value-identical.
    pub fn set_retour(records: &[MaterialRecord], id: &str, raw: f64) -> Vec<MaterialRecord> {
        records
            .iter()
            .map(|record| {
                if record.id == id {
                    MaterialRecord {
                        retour: Self::coerce_non_negative(raw),
                        ..record.clone()
                    }
                } else {
                    record.clone()
                }
            })
            .collect()
    }

    /// Text-input variant of [`Self::set_retour`] for the edit boundary.
    pub fn set_retour_raw(records: &[MaterialRecord], id: &str, raw: &str) -> Vec<MaterialRecord> {
        Self::set_retour(records, id, Self::numeric_coerce(raw))
    }

    /// Apply a retour shortcut to the named record.
    ///
    /// # Modes
    /// - Zero     -> retour = 0
    /// - Half     -> retour = (assigned / 2).round(); f64::round, i.e. halves
    ///   round away from zero (2.5 -> 3), applied uniformly
    /// - Assigned -> retour = assigned
    ///
    /// Unknown id is a no-op; the mode token is parsed by the caller, an
    /// unparseable token never reaches this function.
    pub fn quick_set(
        records: &[MaterialRecord],
        id: &str,
        mode: QuickSetMode,
    ) -> Vec<MaterialRecord> {
        let Some(record) = records.iter().find(|r| r.id == id) else {
            return records.to_vec();
        };

        let value = match mode {
            QuickSetMode::Zero => 0.0,
            QuickSetMode::Half => (record.assigned / 2.0).round(),
            QuickSetMode::Assigned => record.assigned,
        };

        Self::set_retour(records, id, value)
    }
}
