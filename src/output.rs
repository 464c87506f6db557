//! Rendering of stored grade rows.
//!
//! Supports a boxed text table and JSON.

use anyhow::Result;
use serde_json::{Map, Value};
use tabled::builder::Builder;
use tabled::settings::Style;

/// Renders rows as a text table; the first row is the header.
pub fn render_table(rows: &[Vec<String>]) -> String {
    let mut builder = Builder::default();
    for row in rows {
        builder.push_record(row.iter().cloned());
    }

    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}

/// Renders the data rows as a JSON array of objects keyed by the header row.
pub fn render_json(rows: &[Vec<String>]) -> Result<String> {
    let Some((header, data)) = rows.split_first() else {
        return Ok("[]".to_string());
    };

    let objects: Vec<Map<String, Value>> = data
        .iter()
        .map(|row| {
            header
                .iter()
                .zip(row.iter())
                .map(|(key, value)| (key.clone(), Value::String(value.clone())))
                .collect()
        })
        .collect();

    Ok(serde_json::to_string_pretty(&objects)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<Vec<String>> {
        vec![
            vec!["Name".into(), "Final Grade".into()],
            vec!["Alice".into(), "A".into()],
            vec!["Bob".into(), "C".into()],
        ]
    }

    #[test]
    fn test_render_table_contains_cells() {
        let table = render_table(&sample_rows());

        assert!(table.contains("Name"));
        assert!(table.contains("Alice"));
        assert!(table.contains("Bob"));
        let name_line = table.lines().position(|l| l.contains("Name")).unwrap();
        let alice_line = table.lines().position(|l| l.contains("Alice")).unwrap();
        assert!(name_line < alice_line);
    }

    #[test]
    fn test_render_table_empty_does_not_panic() {
        render_table(&[]);
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&sample_rows()).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[0]["Name"], "Alice");
        assert_eq!(parsed[1]["Final Grade"], "C");
    }

    #[test]
    fn test_render_json_header_only() {
        let rows = vec![vec!["Name".to_string()]];
        assert_eq!(render_json(&rows).unwrap(), "[]");
        assert_eq!(render_json(&[]).unwrap(), "[]");
    }
}
