//! CSV / JSON download of a record collection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::ServiceError;

const UTF8_BOM: &str = "\u{FEFF}";

/// Keys kept by a summary export, in this order, when the record has them.
const SUMMARY_KEYS: &[&str] = &["id", "name", "status", "date"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv;charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    #[default]
    Detailed,
    Summary,
}

/// A rendered file ready to be sent as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub content_type: &'static str,
    pub body: String,
}

/// `tickets_export_2025-04-15.csv`
pub fn export_filename(entity: &str, date: NaiveDate, format: ExportFormat) -> String {
    format!(
        "{}_export_{}.{}",
        entity,
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Serialize records to flat JSON objects, keeping field order.
pub fn to_rows<T: Serialize>(items: &[T]) -> anyhow::Result<Vec<Map<String, Value>>> {
    items
        .iter()
        .map(|item| match serde_json::to_value(item)? {
            Value::Object(map) => Ok(map),
            other => anyhow::bail!("expected a JSON object per record, got {other}"),
        })
        .collect()
}

fn summarize(rows: Vec<Map<String, Value>>) -> Vec<Map<String, Value>> {
    rows.into_iter()
        .map(|mut row| {
            let mut kept = Map::new();
            for key in SUMMARY_KEYS {
                if let Some(value) = row.remove(*key) {
                    kept.insert((*key).to_string(), value);
                }
            }
            kept
        })
        .collect()
}

/// Text of one CSV cell. Nested values are written as compact JSON.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        nested => nested.to_string(),
    }
}

/// Header row from the first record's keys; later rows follow that order.
pub fn to_csv(rows: &[Map<String, Value>]) -> anyhow::Result<String> {
    let headers: Vec<String> = rows
        .first()
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default();

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(&headers)?;
    for row in rows {
        let record: Vec<String> = headers
            .iter()
            .map(|key| row.get(key).map(cell_text).unwrap_or_default())
            .collect();
        writer.write_record(&record)?;
    }
    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!("csv flush: {e}"))?;
    let text = String::from_utf8(bytes)?;
    Ok(format!("{UTF8_BOM}{}", text.trim_end_matches('\n')))
}

pub fn to_json(rows: &[Map<String, Value>]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

/// Render `items` as a downloadable file. An empty collection is refused
/// with [`ServiceError::EmptyExport`].
pub fn export_records<T: Serialize>(
    entity: &str,
    items: &[T],
    format: ExportFormat,
    kind: ExportKind,
    today: NaiveDate,
) -> anyhow::Result<ExportFile> {
    if items.is_empty() {
        return Err(ServiceError::EmptyExport.into());
    }
    let rows = to_rows(items)?;
    let rows = match kind {
        ExportKind::Detailed => rows,
        ExportKind::Summary => summarize(rows),
    };
    let body = match format {
        ExportFormat::Csv => to_csv(&rows)?,
        ExportFormat::Json => to_json(&rows)?,
    };
    tracing::info!(
        "Exported {} {} record(s) as {}",
        items.len(),
        entity,
        format.extension()
    );
    Ok(ExportFile {
        filename: export_filename(entity, today, format),
        content_type: format.content_type(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Item {
        id: String,
        name: String,
        note: String,
        status: String,
        tags: Vec<String>,
    }

    fn item(id: &str, name: &str, note: &str) -> Item {
        Item {
            id: id.into(),
            name: name.into(),
            note: note.into(),
            status: "active".into(),
            tags: vec!["a".into()],
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 15).unwrap()
    }

    #[test]
    fn test_filename() {
        assert_eq!(
            export_filename("tickets", day(), ExportFormat::Csv),
            "tickets_export_2025-04-15.csv"
        );
        assert_eq!(
            export_filename("animals", day(), ExportFormat::Json),
            "animals_export_2025-04-15.json"
        );
    }

    #[test]
    fn test_csv_quoting_and_bom() {
        let items = vec![
            item("1", "Simba, the lion", "said \"hi\""),
            item("2", "Nala", "plain"),
        ];
        let file = export_records("animals", &items, ExportFormat::Csv, ExportKind::Detailed, day()).unwrap();
        let mut lines = file.body.lines();
        assert_eq!(lines.next(), Some("\u{FEFF}id,name,note,status,tags"));
        assert_eq!(
            lines.next(),
            Some("1,\"Simba, the lion\",\"said \"\"hi\"\"\",active,\"[\"\"a\"\"]\"")
        );
        assert_eq!(lines.next(), Some("2,Nala,plain,active,\"[\"\"a\"\"]\""));
        assert_eq!(lines.next(), None);
        assert_eq!(file.content_type, "text/csv;charset=utf-8");
    }

    #[test]
    fn test_summary_keeps_known_keys_only() {
        let items = vec![item("1", "Simba", "x")];
        let file = export_records("animals", &items, ExportFormat::Json, ExportKind::Summary, day()).unwrap();
        let parsed: Value = serde_json::from_str(&file.body).unwrap();
        assert_eq!(parsed, json!([{ "id": "1", "name": "Simba", "status": "active" }]));
        assert!(file.body.contains('\n'), "pretty printed");
    }

    #[test]
    fn test_empty_collection_is_refused() {
        let items: Vec<Item> = Vec::new();
        let err = export_records("animals", &items, ExportFormat::Csv, ExportKind::Detailed, day()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ServiceError>(),
            Some(ServiceError::EmptyExport)
        ));
    }

    #[test]
    fn test_format_and_kind_wire_names() {
        let format: ExportFormat = serde_json::from_value(json!("json")).unwrap();
        assert_eq!(format, ExportFormat::Json);
        let kind: ExportKind = serde_json::from_value(json!("summary")).unwrap();
        assert_eq!(kind, ExportKind::Summary);
    }
}
