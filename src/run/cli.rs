use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use finbuddy::format::{format_currency, format_percentage, truncate};
use finbuddy::import::{BudgetRecords, CsvImporter};
use finbuddy::{Config, InvestmentProgress, SavingsGoal};

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    match args[1].as_str() {
        "summary" | "s" => cli_summary(&args[2..]),
        "score" => cli_score(&args[2..]),
        "goals" | "g" => cli_goals(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("finbuddy {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

pub(crate) fn print_usage() {
    println!("FinBuddy — budget summaries and financial health scores");
    println!();
    println!("Usage: finbuddy [--verbose] <command>");
    println!();
    println!("Commands:");
    println!("  summary [budget.csv]          Print totals, saving rate and spending by category");
    println!("  score [budget.csv]            Print the financial health score");
    println!("    --goals <goals.csv>         Savings goals file (default: data dir goals.csv)");
    println!("    --lessons <N>               Investment lessons completed");
    println!("    --quizzes <N>               Investment quizzes taken");
    println!("  goals [goals.csv]             Print savings goal progress");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Budget rows: kind,name,amount[,category]  (kind = income | expense)");
    println!("Goal rows:   name,target,saved[,deadline[,status]]  (status = active+completed)");
}

/// Strip a global `--verbose`/`-v` given before the command.
/// Later occurrences belong to the command and are left alone.
pub(crate) fn take_verbose_flag(args: &mut Vec<String>) -> bool {
    let verbose = matches!(args.get(1).map(String::as_str), Some("--verbose" | "-v"));
    if verbose {
        args.remove(1);
    }
    verbose
}

fn cli_summary(args: &[String]) -> Result<()> {
    let path = match positional_path(args) {
        Some(p) => p,
        None => Config::load()?.budget_path(),
    };
    let records = CsvImporter::load_budget(&path)?;
    tracing::info!(path = %path.display(), "summarizing budget");

    let summary = finbuddy::summarize(&records.income, &records.expenses);

    println!("FinBuddy — Budget Summary");
    println!("{}", "─".repeat(40));
    println!("  Income:       {}", format_currency(summary.total_income));
    println!("  Expenses:     {}", format_currency(summary.total_expenses));
    println!("  Balance:      {}", format_currency(summary.balance));
    println!("  Saving Rate:  {}", format_percentage(summary.saving_rate, 1));

    if !summary.expense_by_category.is_empty() {
        println!();
        println!("Spending by Category:");
        for (name, amount) in summary.top_categories() {
            println!("  {:<24} {}", truncate(name, 24), format_currency(amount));
        }
    }

    Ok(())
}

fn cli_score(args: &[String]) -> Result<()> {
    let path = match positional_path(args) {
        Some(p) => p,
        None => Config::load()?.budget_path(),
    };
    let records = CsvImporter::load_budget(&path)?;
    let goals = load_goals_for_score(args)?;
    let progress = investment_progress(args)?;
    tracing::info!(
        path = %path.display(),
        goals = goals.len(),
        has_progress = progress.is_some(),
        "scoring financial health"
    );

    let summary = budget_summary(&records);
    let result = finbuddy::score(summary.as_ref(), &goals, progress.as_ref());

    println!("FinBuddy — Financial Health");
    println!("{}", "─".repeat(40));
    println!("  Score:        {}/{}", result.score, finbuddy::health::MAX_SCORE);
    println!("  Balance:      {:.1}/30", result.breakdown.balance);
    println!("  Goals:        {:.1}/25", result.breakdown.goals);
    println!("  Diversity:    {:.1}/15", result.breakdown.diversity);
    println!("  Investing:    {:.1}/30", result.breakdown.investment);
    println!();
    println!("Recommendations:");
    for rec in &result.recommendations {
        println!("  • {rec}");
    }

    Ok(())
}

fn cli_goals(args: &[String]) -> Result<()> {
    let path = match positional_path(args) {
        Some(p) => p,
        None => Config::load()?.goals_path(),
    };
    let goals = CsvImporter::load_goals(&path)?;
    if goals.is_empty() {
        println!("No savings goals");
        return Ok(());
    }

    let today = chrono::Local::now().date_naive();
    let summary = finbuddy::summarize_goals(&goals, today);

    println!("{:<24} {:>14} {:>14} {:>8}", "Goal", "Saved", "Target", "Done");
    println!("{}", "─".repeat(63));
    for goal in &goals {
        println!(
            "{:<24} {:>14} {:>14} {:>8}",
            truncate(&goal.name, 24),
            format_currency(goal.current_amount),
            format_currency(goal.target_amount),
            format_percentage(goal.percent_complete(), 0),
        );
    }
    println!();
    println!("  Saved:        {}", format_currency(summary.total_saved));
    println!("  Target:       {}", format_currency(summary.total_target));
    println!("  Progress:     {}", format_percentage(summary.percent_toward_all, 1));
    println!("  Reached:      {}/{}", summary.reached, goals.len());
    if let Some(name) = &summary.nearest_goal {
        println!("  Closest:      {name}");
    }
    println!("  Save monthly: {}", format_currency(summary.recommended_monthly));

    Ok(())
}

/// An empty budget file counts as no budget at all.
pub(crate) fn budget_summary(records: &BudgetRecords) -> Option<finbuddy::BudgetSummary> {
    if records.income.is_empty() && records.expenses.is_empty() {
        None
    } else {
        Some(finbuddy::summarize(&records.income, &records.expenses))
    }
}

fn load_goals_for_score(args: &[String]) -> Result<Vec<SavingsGoal>> {
    match flag_value(args, "--goals") {
        Some(p) => CsvImporter::load_goals(&PathBuf::from(shellexpand(p))),
        None => {
            let default = Config::load()?.goals_path();
            if default.exists() {
                CsvImporter::load_goals(&default)
            } else {
                Ok(Vec::new())
            }
        }
    }
}

/// `None` unless at least one of `--lessons` / `--quizzes` is given.
pub(crate) fn investment_progress(args: &[String]) -> Result<Option<InvestmentProgress>> {
    let lessons = flag_count(args, "--lessons")?;
    let quizzes = flag_count(args, "--quizzes")?;
    if lessons.is_none() && quizzes.is_none() {
        return Ok(None);
    }
    Ok(Some(InvestmentProgress::new(
        lessons.unwrap_or(0),
        quizzes.unwrap_or(0),
    )))
}

fn flag_count(args: &[String], flag: &str) -> Result<Option<u32>> {
    flag_value(args, flag)
        .map(|v| {
            v.parse::<u32>()
                .with_context(|| format!("{flag} expects a whole number, got '{v}'"))
        })
        .transpose()
}

pub(crate) fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

/// First argument that is neither a flag nor a flag's value.
pub(crate) fn positional_path(args: &[String]) -> Option<PathBuf> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg.starts_with('-') {
            iter.next();
            continue;
        }
        return Some(PathBuf::from(shellexpand(arg)));
    }
    None
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        Path::new(&home).join(rest).display().to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
