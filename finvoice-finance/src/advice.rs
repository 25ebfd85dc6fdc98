//! Spending advisor: per-category totals and a templated savings tip.

use finvoice_core::{CategoryInsight, CategoryTable, Expense, RandomSource, SpendingAdvice};
use tracing::debug;

const ADVICE_TEMPLATES: [&str; 5] = [
    "Based on your spending, you could save {amount} on {category} by reducing expenses by 20%.",
    "I notice you spent {total} on {category} last month. Consider setting a budget of {budget}.",
    "To reach your {goal_name} goal faster, try redirecting {amount} from {category} to savings.",
    "Your spending in {category} is {percentage}% higher than average. Look for ways to reduce these expenses.",
    "Great job keeping your {category} expenses low! You're saving {amount} compared to last month.",
];

const DEFAULT_GOAL: &str = "savings";

/// Sum amounts per category, in first-seen order. Uncategorized expenses
/// count toward the table's fallback.
pub fn category_totals(expenses: &[Expense], table: &CategoryTable) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();
    for expense in expenses {
        let category = expense.category.as_deref().unwrap_or(table.fallback());
        match totals.iter_mut().find(|(name, _)| name == category) {
            Some((_, total)) => *total += expense.amount,
            None => totals.push((category.to_string(), expense.amount)),
        }
    }
    totals
}

/// Each category's total and rounded share of all spending.
pub fn category_insights(totals: &[(String, f64)]) -> Vec<CategoryInsight> {
    let grand_total: f64 = totals.iter().map(|(_, amt)| amt).sum();
    totals
        .iter()
        .map(|(category, amount)| CategoryInsight {
            category: category.clone(),
            amount: *amount,
            percentage: if grand_total > 0.0 {
                (amount / grand_total * 100.0).round() as i64
            } else {
                0
            },
        })
        .collect()
}

/// Build a savings tip around the highest-spending category.
pub fn advise(
    expenses: &[Expense],
    goals: &[String],
    table: &CategoryTable,
    rng: &dyn RandomSource,
) -> SpendingAdvice {
    let totals = category_totals(expenses, table);

    // First category wins ties
    let (top_category, top_amount) = totals
        .iter()
        .fold(None::<&(String, f64)>, |best, entry| match best {
            Some(b) if b.1 >= entry.1 => Some(b),
            _ => Some(entry),
        })
        .map(|(name, amt)| (name.as_str(), *amt))
        .unwrap_or((table.fallback(), 0.0));

    let template = ADVICE_TEMPLATES[rng.index(ADVICE_TEMPLATES.len())];
    let percentage = rng.int_inclusive(15, 30);
    let goal_name = goals.first().map(String::as_str).unwrap_or(DEFAULT_GOAL);

    let advice = template
        .replace("{category}", top_category)
        .replace("{amount}", &format!("{}", (top_amount * 0.2).round()))
        .replace("{total}", &format_amount(top_amount))
        .replace("{budget}", &format!("{}", (top_amount * 0.8).round()))
        .replace("{goal_name}", goal_name)
        .replace("{percentage}", &percentage.to_string());

    debug!(
        "Advice over {} expenses: top category {} ({:.2})",
        expenses.len(),
        top_category,
        top_amount
    );

    SpendingAdvice {
        advice,
        category_insights: category_insights(&totals),
    }
}

fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}
