//! Rendering an analysis for the terminal, as JSON, or as CSV.

use anyhow::{Context, Result};
use clap::ValueEnum;
use fingenius_api::models::AnalyzeResponse;
use fingenius_core::ExpenseSummary;
use fingenius_finance::{breakdown, categorize};
use std::fmt::Write as _;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

pub fn render_table(summary: &ExpenseSummary) -> String {
    let mut out = String::new();
    if summary.is_empty() {
        out.push_str("No expenses found.\n");
        return out;
    }

    let _ = writeln!(out, "{:<12} {:<24} {:<14} {:>12}", "Date", "Merchant", "Category", "Amount");
    for r in &summary.records {
        let _ = writeln!(
            out,
            "{:<12} {:<24} {:<14} {:>12.2}",
            r.date,
            r.merchant,
            categorize(r).label(),
            r.amount
        );
    }
    let _ = writeln!(out, "\nTotal: ₹{:.2} across {} expenses", summary.total, summary.len());

    out.push_str("\nBy category:\n");
    for c in breakdown(summary) {
        let _ = writeln!(
            out,
            "  {:<14} ₹{:>12.2}  {:>6.2}%  (count={})",
            c.category.label(),
            c.total,
            c.share,
            c.count
        );
    }
    out
}

pub fn write_csv<W: Write>(summary: &ExpenseSummary, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["date", "merchant", "category", "amount", "raw_text"])?;
    for r in &summary.records {
        let amount = r.amount.to_string();
        wtr.write_record([
            r.date.as_str(),
            r.merchant.as_str(),
            categorize(r).label(),
            amount.as_str(),
            r.raw_text.as_str(),
        ])?;
    }
    wtr.flush().context("flush csv output")?;
    Ok(())
}

pub fn print(summary: &ExpenseSummary, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print!("{}", render_table(summary)),
        OutputFormat::Json => {
            let body = AnalyzeResponse::from(summary);
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Csv => write_csv(summary, std::io::stdout().lock())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "Rs. 500 at Zomato on 20/07/2023\nINR 120 Uber ride, trip \"home\" on 21/07/2023";

    #[test]
    fn test_table_lists_records_and_total() {
        let text = render_table(&fingenius_ingest::extract(INPUT));
        assert!(text.contains("Zomato"));
        assert!(text.contains("Transport"));
        assert!(text.contains("Total: ₹620.00 across 2 expenses"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(render_table(&ExpenseSummary::new()), "No expenses found.\n");
    }

    #[test]
    fn test_csv_quotes_raw_text() {
        let mut buf = Vec::new();
        write_csv(&fingenius_ingest::extract(INPUT), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("date,merchant,category,amount,raw_text"));
        assert_eq!(
            lines.next(),
            Some(r#"21/07/2023,Transport,Transport,120,"INR 120 Uber ride, trip ""home"" on 21/07/2023""#)
        );
        assert_eq!(
            lines.next(),
            Some("20/07/2023,Zomato,Food,500,Rs. 500 at Zomato on 20/07/2023")
        );
    }
}
