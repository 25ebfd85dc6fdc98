//! Read recorded expenses from CSV for the spending advisor.
//!
//! Expected header (case-insensitive, any column order):
//! description,amount[,category]

use anyhow::{Context, Result, bail};
use finvoice_core::Expense;
use std::io::Read;
use std::path::Path;
use tracing::warn;

pub fn parse_expenses_csv(path: impl AsRef<Path>) -> Result<Vec<Expense>> {
    let rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;
    read_expenses(rdr)
}

pub fn parse_expenses_reader<R: Read>(reader: R) -> Result<Vec<Expense>> {
    let rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    read_expenses(rdr)
}

fn read_expenses<R: Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Expense>> {
    let headers = rdr.headers().context("reading CSV header")?.clone();
    let column = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));

    let Some(desc_idx) = column("description") else {
        bail!("CSV header has no 'description' column");
    };
    let Some(amount_idx) = column("amount") else {
        bail!("CSV header has no 'amount' column");
    };
    let category_idx = column("category");

    let mut expenses = Vec::new();
    for (line, result) in rdr.records().enumerate() {
        let record = result?;
        let raw_amount = record.get(amount_idx).unwrap_or("");
        let amount: f64 = match raw_amount.replace(',', "").parse() {
            Ok(a) => a,
            Err(_) => {
                warn!("Skipping row {}: unparseable amount '{}'", line + 2, raw_amount);
                continue;
            }
        };

        let category = category_idx
            .and_then(|i| record.get(i))
            .filter(|c| !c.is_empty())
            .map(|c| c.to_lowercase());

        expenses.push(Expense {
            description: record.get(desc_idx).unwrap_or("").to_string(),
            amount,
            category,
        });
    }

    Ok(expenses)
}
