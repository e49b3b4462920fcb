use anyhow::Result;
use loan_market_shared::LoanRecord;
use serde::Serialize;

use crate::cli::OutputFormat;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_loans(records: &[&LoanRecord], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(records),
        OutputFormat::Table => {
            tracing::info!("\n{}", format_table(records));
            Ok(())
        },
        OutputFormat::Vertical => {
            tracing::info!("\n{}", format_vertical(records));
            Ok(())
        },
    }
}

const TABLE_HEADERS: [&str; 6] = ["id", "title", "category", "interest", "max loan", "home"];

fn table_row(record: &LoanRecord) -> [String; 6] {
    [
        record.id.to_string(),
        record.title().to_string(),
        record.category().to_string(),
        record.interest_rate_display().to_string(),
        record.max_loan_display().to_string(),
        if record.visible_on_home() { "yes" } else { "no" }.to_string(),
    ]
}

pub fn format_table(records: &[&LoanRecord]) -> String {
    let rows: Vec<[String; 6]> = records.iter().map(|record| table_row(record)).collect();
    let mut widths = TABLE_HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |cells: &[String]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![render(TABLE_HEADERS.map(str::to_string).as_slice())];
    lines.push(widths.iter().map(|width| "-".repeat(*width)).collect::<Vec<_>>().join("-+-"));
    lines.extend(rows.iter().map(|row| render(row.as_slice())));
    lines.push(format!("({} loans)", rows.len()));
    lines.join("\n")
}

pub fn format_vertical(records: &[&LoanRecord]) -> String {
    let mut output = String::new();
    for (idx, record) in records.iter().enumerate() {
        let fields = &record.fields;
        output.push_str(&format!("*************************** {}. row ***************************\n", idx + 1));
        let rows = [
            ("id", record.id.to_string()),
            ("title", fields.title.clone()),
            ("category", fields.category.clone()),
            ("short_description", fields.short_description.clone()),
            ("description", record.description_display().to_string()),
            ("max_loan", record.max_loan_display().to_string()),
            ("interest_rate", record.interest_rate_display().to_string()),
            ("tenure", record.tenure_display().to_string()),
            ("emi_plans", fields.emi_plans.join(", ")),
            ("image", image_summary(record)),
            ("show_on_home", fields.visible_on_home.to_string()),
            ("created_at", timestamp(fields.created_at)),
            ("updated_at", timestamp(fields.updated_at)),
        ];
        for (label, value) in rows {
            output.push_str(&format!("{label:>17}: {value}\n"));
        }
    }
    output
}

fn image_summary(record: &LoanRecord) -> String {
    let image = &record.fields.image_data;
    if image.is_empty() {
        "-".to_string()
    } else if record.has_inline_image() {
        format!("inline ({} bytes)", image.len())
    } else {
        image.clone()
    }
}

fn timestamp(value: Option<chrono::DateTime<chrono::Utc>>) -> String {
    value
        .map(|ts| ts.to_rfc3339())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use loan_market_shared::{LoanFields, LoanId};

    use super::*;

    fn loan(id: &str, title: &str, visible: bool) -> LoanRecord {
        LoanRecord::new(LoanId::new(id), LoanFields {
            title: title.into(),
            category: "Business".into(),
            max_loan_amount: "$25000".into(),
            visible_on_home: visible,
            ..LoanFields::default()
        })
    }

    #[test]
    fn table_aligns_columns_and_counts_rows() {
        let a = loan("1", "Shop Expansion", true);
        let b = loan("22", "Tiny", false);
        let table = format_table(&[&a, &b]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("id | title"));
        assert!(lines[2].contains("Shop Expansion | Business"));
        assert!(lines[2].ends_with("yes"));
        assert!(lines[3].contains("Not specified"));
        assert_eq!(lines[4], "(2 loans)");
    }

    #[test]
    fn vertical_summarizes_inline_images() {
        let mut record = loan("1", "Shop", false);
        record.fields.image_data = "data:image/png;base64,AAAA".into();
        let text = format_vertical(&[&record]);
        assert!(text.contains("image: inline (26 bytes)"));
        assert!(text.contains("created_at: -"));
    }
}
