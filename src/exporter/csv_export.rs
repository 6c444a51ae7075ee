// ==========================================
// Conso / Retour - CSV export
// ==========================================
// Responsibility: canonical CSV rendition of the derived table
// Hard rule: byte-for-byte deterministic; semicolon separator and fully
// quoted fields for the target locale's spreadsheet tooling
// ==========================================

use crate::domain::material::DerivedRow;
use csv::{QuoteStyle, WriterBuilder};

/// Fixed header row; column order matches the operator screen.
pub const CSV_HEADERS: [&str; 10] = [
    "Material",
    "Description",
    "UoM",
    "Planned",
    "Assigned",
    "Issued",
    "Total",
    "Retour",
    "Consomme",
    "Delta (%)",
];

/// Render one quantity for the CSV cell.
///
/// Raw numeric rendering only (f64 Display, no thousands separators); locale
/// formatting is a screen concern and must never reach the export path.
fn fmt_quantity(value: f64) -> String {
    value.to_string()
}

/// Serialize the derived rows as the `conso-retour.csv` document.
///
/// Layout: fixed header row, then one line per row in input order. Every
/// field is double-quoted with internal quotes doubled, fields are joined by
/// `;`, rows by a single `\n` with no trailing newline. Unlike the JSON
/// document, delta is included, formatted with exactly two decimals. The
/// empty collection yields a header-only document.
pub fn to_csv(rows: &[DerivedRow]) -> String {
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    // Writing into an in-memory buffer: the only failure mode would be a
    // quoting misconfiguration, which the fixed builder above rules out.
    writer
        .write_record(CSV_HEADERS)
        .expect("in-memory CSV write");

    for row in rows {
        let planned = fmt_quantity(row.record.planned);
        let assigned = fmt_quantity(row.record.assigned);
        let issued = fmt_quantity(row.record.issued);
        let total = fmt_quantity(row.record.total);
        let retour = fmt_quantity(row.record.retour);
        let consomme = fmt_quantity(row.consomme);
        let delta = format!("{:.2}", row.delta_percent);

        writer
            .write_record([
                row.record.id.as_str(),
                row.record.description.as_str(),
                row.record.unit_of_measure.as_str(),
                planned.as_str(),
                assigned.as_str(),
                issued.as_str(),
                total.as_str(),
                retour.as_str(),
                consomme.as_str(),
                delta.as_str(),
            ])
            .expect("in-memory CSV write");
    }

    let bytes = writer.into_inner().expect("in-memory CSV flush");
    let mut document = String::from_utf8(bytes).expect("CSV output is UTF-8");

    // The writer terminates every record; the contract separates them.
    if document.ends_with('\n') {
        document.pop();
    }

    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::material::MaterialRecord;
    use crate::engine::ReconciliationCore;

    const EXPECTED_HEADER: &str = "\"Material\";\"Description\";\"UoM\";\"Planned\";\"Assigned\";\"Issued\";\"Total\";\"Retour\";\"Consomme\";\"Delta (%)\"";

    fn derived(id: &str, description: &str, assigned: f64, retour: f64) -> DerivedRow {
        let record = MaterialRecord {
            planned: 500.0,
            assigned,
            issued: 0.0,
            total: assigned,
            retour,
            ..MaterialRecord::new(id, description, "EA")
        };
        ReconciliationCore::derive_row(&record)
    }

    #[test]
    fn test_empty_rows_yield_header_only() {
        assert_eq!(to_csv(&[]), EXPECTED_HEADER);
    }

    #[test]
    fn test_header_is_exact_regardless_of_rows() {
        let rows = vec![derived("A", "MAT A", 100.0, 40.0)];
        let out = to_csv(&rows);

        assert_eq!(out.lines().next().unwrap(), EXPECTED_HEADER);
    }

    #[test]
    fn test_row_rendering() {
        let rows = vec![derived("A", "MAT A", 100.0, 40.0)];
        let out = to_csv(&rows);

        assert_eq!(
            out.lines().nth(1).unwrap(),
            "\"A\";\"MAT A\";\"EA\";\"500\";\"100\";\"0\";\"100\";\"40\";\"60\";\"-40.00\""
        );
    }

    #[test]
    fn test_internal_quotes_are_doubled() {
        let rows = vec![derived("A", "CARTON \"SECONDARY\" 1", 10.0, 0.0)];
        let out = to_csv(&rows);

        assert!(out.contains("\"CARTON \"\"SECONDARY\"\" 1\""));
    }

    #[test]
    fn test_no_trailing_newline() {
        let rows = vec![
            derived("A", "MAT A", 100.0, 40.0),
            derived("B", "MAT B", 0.0, 5.0),
        ];
        let out = to_csv(&rows);

        assert!(!out.ends_with('\n'));
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn test_rows_in_input_order() {
        let rows = vec![
            derived("Z", "LAST ALPHA", 10.0, 0.0),
            derived("A", "FIRST ALPHA", 20.0, 0.0),
        ];
        let out = to_csv(&rows);
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[1].starts_with("\"Z\""));
        assert!(lines[2].starts_with("\"A\""));
    }

    #[test]
    fn test_zero_assigned_delta_renders_zero() {
        let rows = vec![derived("B", "MAT B", 0.0, 5.0)];
        let out = to_csv(&rows);

        assert!(out.lines().nth(1).unwrap().ends_with("\"0\";\"0.00\""));
    }
}
