//! List tables for the session shell
//!
//! Each record list is rendered as a `tabled` table using the configured
//! currency symbol and date format.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::{format_percentage, truncate};
use crate::audit::AuditEntry;
use crate::config::Settings;
use crate::models::{Bill, BudgetStatus, Expense, FamilyMember, Income};

fn render<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

#[derive(Tabled)]
struct IncomeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Source")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format income records as a table
pub fn format_income_list(incomes: &[Income], settings: &Settings) -> String {
    if incomes.is_empty() {
        return "No income added yet\n".to_string();
    }

    render(
        incomes
            .iter()
            .map(|i| IncomeRow {
                id: i.id.to_string(),
                name: truncate(&i.name, 30),
                category: i.category.clone(),
                date: settings.format_date(i.date),
                amount: settings.format_money(i.amount),
            })
            .collect(),
    )
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Description")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format expenses as a table
pub fn format_expense_list(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses added yet\n".to_string();
    }

    render(
        expenses
            .iter()
            .map(|e| ExpenseRow {
                id: e.id.to_string(),
                name: truncate(&e.name, 30),
                category: e.category.clone(),
                date: settings.format_date(e.date),
                amount: settings.format_money(e.amount),
            })
            .collect(),
    )
}

#[derive(Tabled)]
struct BillRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Bill")]
    name: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Frequency")]
    frequency: String,
    #[tabled(rename = "Auto-pay")]
    auto_pay: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Format bills as a table, in the order given
pub fn format_bill_list(bills: &[Bill], settings: &Settings) -> String {
    if bills.is_empty() {
        return "No bills added yet\n".to_string();
    }

    render(
        bills
            .iter()
            .map(|b| BillRow {
                id: b.id.to_string(),
                name: truncate(&b.name, 30),
                due: settings.format_date(b.due_date),
                frequency: b.frequency.to_string(),
                auto_pay: if b.auto_pay { "yes" } else { "no" }.to_string(),
                amount: settings.format_money(b.amount),
                status: if b.paid { "Paid" } else { "Unpaid" }.to_string(),
            })
            .collect(),
    )
}

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Format budget statuses as a table
pub fn format_budget_list(statuses: &[BudgetStatus], settings: &Settings) -> String {
    if statuses.is_empty() {
        return "No budgets created yet\n".to_string();
    }

    render(
        statuses
            .iter()
            .map(|s| BudgetRow {
                category: s.category.clone(),
                period: s.period.to_string(),
                spent: settings.format_money(s.spent),
                limit: settings.format_money(s.limit),
                remaining: settings.format_money(s.remaining),
                used: format_percentage(s.fill_percentage),
                status: s.health.to_string(),
            })
            .collect(),
    )
}

#[derive(Tabled)]
struct MemberRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Role")]
    role: String,
}

/// Format the family roster as a table
pub fn format_family_list(members: &[FamilyMember]) -> String {
    if members.is_empty() {
        return "No family members added yet\n".to_string();
    }

    render(
        members
            .iter()
            .map(|m| MemberRow {
                id: m.id.to_string(),
                name: m.name.clone(),
                role: m.role.clone(),
            })
            .collect(),
    )
}

/// Format audit entries, one per line, oldest first
pub fn format_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No changes recorded.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    output
}
