//! Wire types shared between the take-home calculator backend and frontend.

use serde::{Deserialize, Serialize};

/// One marginal tax bracket: everything earned above `lower_bound` (up to the
/// next bracket's lower bound) is taxed at `rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Salary at which this bracket starts
    pub lower_bound: f64,
    /// Marginal rate as a fraction (0.20 for 20%)
    pub rate: f64,
}

/// One recurring bill or expense as entered on the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    /// Display name, e.g. "Rent" or "Groceries"
    pub name: String,
    /// Amount per recurrence period (non-negative)
    pub amount: f64,
    /// Recurrence period: "weekly", "monthly" or "annual"
    pub period: String,
}

/// Everything needed for one calculation. Built from the form; nothing is
/// stored between requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// Annual gross salary before tax
    pub gross_salary: f64,
    /// Tax brackets in ascending order of lower bound
    pub brackets: Vec<TaxBracket>,
    /// Recurring bills and expenses
    #[serde(default)]
    pub expenses: Vec<ExpenseEntry>,
}

/// Headline figures of a calculation, all annual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownSummary {
    pub gross_salary: f64,
    pub tax_owed: f64,
    pub total_expenses: f64,
    /// `gross_salary - tax_owed - total_expenses`; may be negative
    pub net_take_home: f64,
}

/// Tax attributed to a single bracket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketTax {
    pub lower_bound: f64,
    pub rate: f64,
    /// Portion of the salary that fell inside this bracket
    pub taxable: f64,
    /// Tax owed on that portion
    pub tax: f64,
}

/// An expense with its amount converted to a common annual figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedExpense {
    pub name: String,
    /// Amount as entered
    pub amount: f64,
    /// Period as entered
    pub period: String,
    /// Annual equivalent of `amount`
    pub annual: f64,
}

/// One row of the results table, amounts rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub item: String,
    pub annual: f64,
    pub monthly: f64,
    pub weekly: f64,
}

/// A single flow edge of the Sankey diagram. `source` and `target` index
/// into [`Sankey::labels`], which is the encoding Plotly consumes directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SankeyLink {
    pub source: usize,
    pub target: usize,
    pub value: f64,
}

/// Node labels plus flow edges for the cash-flow diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sankey {
    pub labels: Vec<String>,
    pub links: Vec<SankeyLink>,
}

/// Full response for `POST /api/calculate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub summary: BreakdownSummary,
    pub bracket_detail: Vec<BracketTax>,
    pub expense_detail: Vec<NormalizedExpense>,
    pub table: Vec<TableRow>,
    pub sankey: Sankey,
}

/// Response for `GET /api/brackets/default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultBracketsResponse {
    pub brackets: Vec<TaxBracket>,
}

/// Error body returned alongside 4xx statuses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
