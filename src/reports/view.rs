//! Ledger view model
//!
//! `LedgerView` is the full, serializable projection of the ledger: the lists
//! as shown, the dashboard numbers, chart series and insights. It is rebuilt
//! from the store on every request and rendered as text, JSON or YAML.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use super::aggregate::{self, CategoryTotal, Summary};
use super::insights::{self, Insight};
use crate::config::Settings;
use crate::display::report::{format_bar, format_percentage};
use crate::error::FinanceResult;
use crate::models::{Bill, BudgetStatus, Expense, FamilyMember, Income, Money};
use crate::storage::LedgerStore;

/// Colours cycled over the category breakdown
pub const CHART_PALETTE: [&str; 8] = [
    "#2E75B6", "#70AD47", "#FF6B6B", "#FFC000", "#667eea", "#f093fb", "#4facfe", "#43e97b",
];

/// One labelled value of a chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: Money,
    pub color: String,
}

/// Data behind the dashboard charts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    /// Two bars: total income, total expenses
    pub income_vs_expenses: Vec<ChartPoint>,
    /// One slice per category, first-seen order
    pub expense_breakdown: Vec<ChartPoint>,
}

impl ChartData {
    fn project(summary: &Summary, totals: &[CategoryTotal]) -> Self {
        Self {
            income_vs_expenses: vec![
                ChartPoint {
                    label: "Income".into(),
                    value: summary.total_income,
                    color: "#70AD47".into(),
                },
                ChartPoint {
                    label: "Expenses".into(),
                    value: summary.total_expenses,
                    color: "#FF6B6B".into(),
                },
            ],
            expense_breakdown: totals
                .iter()
                .zip(CHART_PALETTE.iter().cycle())
                .map(|(total, color)| ChartPoint {
                    label: total.category.clone(),
                    value: total.total,
                    color: (*color).to_string(),
                })
                .collect(),
        }
    }
}

/// Everything the presentation layer shows
#[derive(Debug, Clone, Serialize)]
pub struct LedgerView {
    pub generated_at: DateTime<Utc>,
    pub currency_symbol: String,
    pub summary: Summary,
    pub incomes: Vec<Income>,
    pub expenses: Vec<Expense>,
    /// Latest expenses, newest first
    pub recent_expenses: Vec<Expense>,
    /// Bills ordered by due date
    pub bills: Vec<Bill>,
    pub budgets: Vec<BudgetStatus>,
    pub family: Vec<FamilyMember>,
    pub categories: Vec<CategoryTotal>,
    pub charts: ChartData,
    pub insights: Vec<Insight>,
}

impl LedgerView {
    /// Project the current ledger
    pub fn project(store: &LedgerStore, settings: &Settings) -> FinanceResult<Self> {
        let incomes = store.incomes.get_all()?;
        let expenses = store.expenses.get_all()?;
        let mut bills = store.bills.get_all()?;
        let budgets = store.budgets.get_all()?;
        let family = store.family.get_all()?;

        let summary = Summary::compute(&incomes, &expenses, &bills);
        let categories = aggregate::category_totals(&expenses);
        let budget_statuses = aggregate::budget_statuses(&budgets, &categories);
        let insights = insights::generate(
            &incomes,
            &expenses,
            &bills,
            &settings.insights,
            &settings.currency_symbol,
        );
        let charts = ChartData::project(&summary, &categories);

        bills.sort_by_key(|b| b.due_date);
        let recent_expenses = expenses
            .iter()
            .rev()
            .take(settings.recent_expense_limit)
            .cloned()
            .collect();

        debug!(
            incomes = incomes.len(),
            expenses = expenses.len(),
            bills = bills.len(),
            insights = insights.len(),
            "ledger view recomputed"
        );

        Ok(Self {
            generated_at: Utc::now(),
            currency_symbol: settings.currency_symbol.clone(),
            summary,
            incomes,
            expenses,
            recent_expenses,
            bills,
            budgets: budget_statuses,
            family,
            categories,
            charts,
            insights,
        })
    }

    fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Render the dashboard for the terminal
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("FinanceHub Dashboard\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        let summary = &self.summary;
        output.push_str(&format!(
            "{:<22} {:>16}\n",
            "Total Income:",
            self.money(summary.total_income)
        ));
        output.push_str(&format!(
            "{:<22} {:>16}\n",
            "Total Expenses:",
            self.money(summary.total_expenses)
        ));
        output.push_str(&format!(
            "{:<22} {:>16}\n",
            "Upcoming Bills:",
            self.money(summary.outstanding_bills)
        ));
        output.push_str(&format!("{:<22} {:>16}\n", "Balance:", self.money(summary.balance)));
        output.push_str(&format!(
            "{:<22} {:>16}\n",
            "Savings Rate:",
            summary.savings_rate.to_string()
        ));

        output.push_str("\nIncome vs Expenses\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        let max_bar = self
            .charts
            .income_vs_expenses
            .iter()
            .map(|p| p.value.as_f64())
            .fold(0.0, f64::max);
        for point in &self.charts.income_vs_expenses {
            output.push_str(&format!(
                "{:<10} {} {}\n",
                point.label,
                format_bar(point.value.as_f64(), max_bar, 30),
                self.money(point.value)
            ));
        }

        if !self.categories.is_empty() {
            output.push_str("\nSpending by Category\n");
            output.push_str(&"-".repeat(60));
            output.push('\n');
            for total in &self.categories {
                output.push_str(&format!(
                    "{:<16} {} {:>6} {}\n",
                    total.category,
                    format_bar(total.share, 100.0, 20),
                    format_percentage(total.share),
                    self.money(total.total)
                ));
            }
        }

        if !self.budgets.is_empty() {
            output.push_str("\nBudgets\n");
            output.push_str(&"-".repeat(60));
            output.push('\n');
            for status in &self.budgets {
                output.push_str(&format!(
                    "{:<16} {} {} / {} ({})\n",
                    status.category,
                    format_bar(status.fill_percentage, 100.0, 20),
                    self.money(status.spent),
                    self.money(status.limit),
                    status.health
                ));
            }
        }

        output.push_str("\nInsights\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&insights::format_terminal(&self.insights));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{
        BillInput, BillService, BudgetInput, BudgetService, ExpenseInput, ExpenseService,
        IncomeInput, IncomeService,
    };

    fn seeded_store() -> LedgerStore {
        let store = LedgerStore::new();
        IncomeService::new(&store)
            .add(IncomeInput {
                name: Some("Salary".into()),
                amount: Some("5000".into()),
                date: Some("2025-01-01".into()),
                category: Some("Job".into()),
            })
            .unwrap();

        let expenses = ExpenseService::new(&store);
        for (category, amount) in [("food", "1000"), ("food", "500"), ("rent", "2000")] {
            expenses
                .add(ExpenseInput {
                    name: Some(format!("{} spend", category)),
                    amount: Some(amount.into()),
                    category: Some(category.into()),
                    date: Some("2025-01-05".into()),
                })
                .unwrap();
        }

        let bills = BillService::new(&store);
        for (name, due) in [("Internet", "2025-02-15"), ("Rent", "2025-02-01")] {
            bills
                .add(BillInput {
                    name: Some(name.into()),
                    amount: Some("800".into()),
                    due_date: Some(due.into()),
                    frequency: Some("monthly".into()),
                    auto_pay: false,
                })
                .unwrap();
        }

        BudgetService::new(&store)
            .set(BudgetInput {
                category: Some("food".into()),
                limit: Some("1000".into()),
                period: Some("monthly".into()),
            })
            .unwrap();

        store
    }

    #[test]
    fn test_project_dashboard_numbers() {
        let store = seeded_store();
        let view = LedgerView::project(&store, &Settings::default()).unwrap();

        assert_eq!(view.summary.total_income, Money::from_units(5000));
        assert_eq!(view.summary.total_expenses, Money::from_units(3500));
        assert_eq!(view.summary.balance, Money::from_units(1500));
        assert_eq!(view.summary.outstanding_bills, Money::from_units(1600));
        assert_eq!(view.categories.len(), 2);
        assert!(view.budgets[0].is_over());
    }

    #[test]
    fn test_project_orders_lists() {
        let store = seeded_store();
        let view = LedgerView::project(&store, &Settings::default()).unwrap();

        assert_eq!(view.bills[0].name, "Rent");
        assert_eq!(view.recent_expenses[0].category, "rent");
        assert_eq!(view.expenses[0].category, "food");
    }

    #[test]
    fn test_recent_limit_from_settings() {
        let store = seeded_store();
        let mut settings = Settings::default();
        settings.recent_expense_limit = 2;

        let view = LedgerView::project(&store, &settings).unwrap();
        assert_eq!(view.recent_expenses.len(), 2);
        assert_eq!(view.expenses.len(), 3);
    }

    #[test]
    fn test_chart_series() {
        let store = seeded_store();
        let view = LedgerView::project(&store, &Settings::default()).unwrap();

        let bars: Vec<_> = view
            .charts
            .income_vs_expenses
            .iter()
            .map(|p| (p.label.as_str(), p.value))
            .collect();
        assert_eq!(
            bars,
            vec![
                ("Income", Money::from_units(5000)),
                ("Expenses", Money::from_units(3500))
            ]
        );
        assert_eq!(view.charts.expense_breakdown[0].color, CHART_PALETTE[0]);
        assert_eq!(view.charts.expense_breakdown[1].label, "rent");
    }

    #[test]
    fn test_insights_follow_rules() {
        let store = seeded_store();
        let view = LedgerView::project(&store, &Settings::default()).unwrap();

        let titles: Vec<_> = view.insights.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["High Spending on rent", "2 Unpaid Bills"]);
    }

    #[test]
    fn test_empty_store_projects_cleanly() {
        let store = LedgerStore::new();
        let view = LedgerView::project(&store, &Settings::default()).unwrap();

        assert!(view.insights.is_empty());
        let output = view.format_terminal();
        assert!(output.contains("no data"));
        assert!(output.contains("Add transactions to see insights"));
    }

    #[test]
    fn test_format_terminal() {
        let store = seeded_store();
        let output = LedgerView::project(&store, &Settings::default())
            .unwrap()
            .format_terminal();

        assert!(output.contains("FinanceHub Dashboard"));
        assert!(output.contains("₹5,000.00"));
        assert!(output.contains("Over Budget"));
        assert!(output.contains("30.0%"));
    }

    #[test]
    fn test_serializes_to_json() {
        let store = seeded_store();
        let view = LedgerView::project(&store, &Settings::default()).unwrap();

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["summary"]["total_income"], 500000);
        assert_eq!(json["summary"]["savings_rate"], 30.0);
        assert_eq!(json["insights"][0]["kind"], "info");
    }
}
