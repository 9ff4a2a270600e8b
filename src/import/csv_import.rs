use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::models::{ExpenseItem, IncomeItem, SavingsGoal};

/// Income and expense records read from a budget file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetRecords {
    pub income: Vec<IncomeItem>,
    pub expenses: Vec<ExpenseItem>,
}

pub struct CsvImporter;

impl CsvImporter {
    /// Load a budget file with rows `kind,name,amount[,category]`.
    pub fn load_budget(path: &Path) -> Result<BudgetRecords> {
        let rows = read_rows(path)?;
        let records = parse_budget_rows(&rows)?;
        tracing::debug!(
            path = %path.display(),
            income = records.income.len(),
            expenses = records.expenses.len(),
            "loaded budget"
        );
        Ok(records)
    }

    /// Load a goals file with rows `name,target,saved[,deadline[,status]]`.
    pub fn load_goals(path: &Path) -> Result<Vec<SavingsGoal>> {
        let rows = read_rows(path)?;
        let goals = parse_goal_rows(&rows)?;
        tracing::debug!(path = %path.display(), goals = goals.len(), "loaded goals");
        Ok(goals)
    }
}

/// Read every non-blank record as trimmed strings, paired with its 1-based line.
fn read_rows(path: &Path) -> Result<Vec<(usize, Vec<String>)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let mut rows = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result.context("Failed to read CSV record")?;
        // The reader skips blank lines, so take the line from the record itself.
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(i + 1);
        let fields: Vec<String> = record.iter().map(|s| s.trim().to_string()).collect();
        if fields.iter().all(|f| f.is_empty()) {
            continue;
        }
        rows.push((line, fields));
    }
    Ok(rows)
}

fn is_header(row: &[String], first: &str) -> bool {
    row.first().is_some_and(|f| f.eq_ignore_ascii_case(first))
}

pub(crate) fn parse_budget_rows(rows: &[(usize, Vec<String>)]) -> Result<BudgetRecords> {
    let mut records = BudgetRecords::default();

    for (idx, (line, row)) in rows.iter().enumerate() {
        if idx == 0 && is_header(row, "kind") {
            continue;
        }

        let kind = field(row, 0).to_lowercase();
        let name = field(row, 1).to_string();
        let amount = required_amount(row, 2, *line)?;

        match kind.as_str() {
            "income" => records.income.push(IncomeItem::new(name, amount)),
            "expense" => {
                let category = Some(field(row, 3).to_string());
                records.expenses.push(ExpenseItem::new(name, amount, category));
            }
            "" => anyhow::bail!("Row {line}: missing kind"),
            other => anyhow::bail!("Row {line}: unknown kind '{other}' (expected income or expense)"),
        }
    }

    Ok(records)
}

pub(crate) fn parse_goal_rows(rows: &[(usize, Vec<String>)]) -> Result<Vec<SavingsGoal>> {
    let mut goals = Vec::new();

    for (idx, (line, row)) in rows.iter().enumerate() {
        if idx == 0 && is_header(row, "name") {
            continue;
        }

        let name = field(row, 0);
        if name.is_empty() {
            anyhow::bail!("Row {line}: missing name");
        }

        let mut goal = SavingsGoal::new(
            name.to_string(),
            required_amount(row, 1, *line)?,
        );
        goal.current_amount = parse_decimal(field(row, 2))
            .with_context(|| format!("Row {line}: invalid saved amount"))?
            .unwrap_or(Decimal::ZERO);

        let deadline = field(row, 3);
        if !deadline.is_empty() {
            goal.deadline = Some(
                parse_date(deadline).with_context(|| format!("Row {line}: invalid deadline"))?,
            );
        }

        let (active, completed) = parse_status(field(row, 4))
            .with_context(|| format!("Row {line}: invalid status"))?;
        goal.active = active;
        goal.completed = completed;

        goals.push(goal);
    }

    Ok(goals)
}

fn field(row: &[String], col: usize) -> &str {
    row.get(col).map(|s| s.as_str()).unwrap_or("")
}

fn required_amount(row: &[String], col: usize, line: usize) -> Result<Decimal> {
    parse_decimal(field(row, col))
        .with_context(|| format!("Row {line}: invalid amount"))?
        .ok_or_else(|| anyhow::anyhow!("Row {line}: missing amount"))
}

/// Parse a money string, accepting `$` and thousand separators. Empty is `None`.
pub(crate) fn parse_decimal(s: &str) -> Result<Option<Decimal>> {
    let cleaned = s
        .replace(['$', ','], "")
        .replace('(', "-")
        .replace(')', "")
        .trim()
        .to_string();
    if cleaned.is_empty() {
        return Ok(None);
    }
    Decimal::from_str(&cleaned)
        .map(Some)
        .with_context(|| format!("Failed to parse '{s}' as an amount"))
}

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate> {
    for fmt in &["%Y-%m-%d", "%m/%d/%Y", "%m-%d-%Y", "%m/%d/%y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d);
        }
    }
    anyhow::bail!("Could not parse date: {s}")
}

/// Parse a status like `active`, `completed` or `active+completed`.
pub(crate) fn parse_status(s: &str) -> Result<(bool, bool)> {
    let mut active = false;
    let mut completed = false;
    for token in s.split(['+', '|', ' ']).filter(|t| !t.is_empty()) {
        match token.to_lowercase().as_str() {
            "active" => active = true,
            "completed" | "complete" | "done" => completed = true,
            other => anyhow::bail!("unknown goal status '{other}'"),
        }
    }
    Ok((active, completed))
}

#[cfg(test)]
#[path = "csv_import_tests.rs"]
mod tests;
