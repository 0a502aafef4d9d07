//! Row parser for delimited import files
//!
//! Deliberately forgiving: no quoting or escape support, and malformed rows
//! never fail here. Missing columns surface later as empty field values,
//! surplus columns are folded back into the last declared column.

use std::collections::HashMap;

/// One data line, keyed by header name. Values are trimmed.
#[derive(Debug, Clone, Default)]
pub struct RowRecord {
    fields: HashMap<String, String>,
}

impl RowRecord {
    /// Check header aliases in priority order; the first one carrying a
    /// non-empty value wins.
    pub fn first_of(&self, aliases: &[&str]) -> Option<&str> {
        aliases.iter().find_map(|key| {
            self.fields
                .get(*key)
                .map(String::as_str)
                .filter(|value| !value.is_empty())
        })
    }

    #[cfg(test)]
    pub(crate) fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// Split raw text into header-keyed row records.
///
/// The first non-blank line is the header, split on plain `,`. Each later
/// line becomes one record. A data row with more columns than the header has
/// the surplus re-joined with `,` into the last header's field (tolerance
/// for unescaped commas in a trailing free-text column); a row with fewer
/// columns reads as empty for the missing trailing headers.
///
/// Empty or header-only input yields an empty Vec, not an error.
pub fn parse_rows(input: &str) -> Vec<RowRecord> {
    let mut lines = input.lines().map(str::trim).filter(|line| !line.is_empty());

    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<&str> = header_line.split(',').map(str::trim).collect();

    lines
        .map(|line| {
            let mut cols: Vec<String> = line.split(',').map(str::to_string).collect();
            if cols.len() > headers.len() {
                let tail = cols.split_off(headers.len() - 1).join(",");
                cols.push(tail);
            }

            let fields = headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    let value = cols
                        .get(i)
                        .map(|col| col.trim().to_string())
                        .unwrap_or_default();
                    (header.to_string(), value)
                })
                .collect();

            RowRecord { fields }
        })
        .collect()
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_rows() {
        assert!(parse_rows("").is_empty());
        assert!(parse_rows("   \n\n  \n").is_empty());
    }

    #[test]
    fn header_only_yields_no_rows() {
        assert!(parse_rows("a,b,c").is_empty());
        assert!(parse_rows("a,b,c\n\n").is_empty());
    }

    #[test]
    fn maps_values_to_headers() {
        let rows = parse_rows("Brand,Model\nAcme,ModelX\nZenith,Roadster");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].first_of(&["Brand"]), Some("Acme"));
        assert_eq!(rows[0].first_of(&["Model"]), Some("ModelX"));
        assert_eq!(rows[1].first_of(&["Brand"]), Some("Zenith"));
    }

    #[test]
    fn trims_headers_and_values() {
        let rows = parse_rows(" Brand , Model \n  Acme ,  ModelX  ");
        assert_eq!(rows[0].first_of(&["Brand"]), Some("Acme"));
        assert_eq!(rows[0].first_of(&["Model"]), Some("ModelX"));
    }

    #[test]
    fn handles_crlf_line_endings() {
        let rows = parse_rows("Brand,Model\r\nAcme,ModelX\r\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].first_of(&["Brand"]), Some("Acme"));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let rows = parse_rows("Brand,Model\n\nAcme,ModelX\n   \nZenith,Roadster\n");
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn surplus_columns_merge_into_last_field() {
        // unescaped comma in the trailing free-text column
        let rows = parse_rows("Brand,Model,Notes\nAcme,ModelX,fast, very fast");
        assert_eq!(rows[0].first_of(&["Notes"]), Some("fast, very fast"));
        assert_eq!(rows[0].first_of(&["Brand"]), Some("Acme"));
    }

    #[test]
    fn missing_trailing_columns_read_empty() {
        let rows = parse_rows("Brand,Model,Notes\nAcme,ModelX");
        assert_eq!(rows[0].first_of(&["Notes"]), None);
        assert_eq!(rows[0].first_of(&["Model"]), Some("ModelX"));
    }

    #[test]
    fn first_of_skips_empty_aliases() {
        let row = RowRecord::from_pairs(&[("ID", ""), ("id", "abc-1")]);
        assert_eq!(row.first_of(&["ID", "id"]), Some("abc-1"));
        assert_eq!(row.first_of(&["missing"]), None);
    }
}
