//! Reshapes a [`Breakdown`] into the table rows and Sankey flows the
//! frontend renders.
//!
//! This is the only place amounts are rounded: half-to-even to two decimal
//! places, applied when a figure is put on the wire for display. The
//! breakdown itself stays unrounded so its arithmetic identities hold.

use shared::{BreakdownSummary, CalculateResponse, Sankey, SankeyLink, TableRow};

use super::calculator::Breakdown;
use super::periods::PeriodAmount;

/// Round to 2 decimal places, ties to even.
fn round_currency(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

fn table_row(item: &str, annual: f64) -> TableRow {
    let pa = PeriodAmount::from_annual(annual);
    TableRow {
        item: item.to_string(),
        annual: round_currency(pa.annual()),
        monthly: round_currency(pa.monthly()),
        weekly: round_currency(pa.weekly()),
    }
}

/// Build the results table: gross salary, tax, each expense in entry order,
/// the expense total, then net take-home.
pub fn build_table(breakdown: &Breakdown) -> Vec<TableRow> {
    let mut rows = vec![
        table_row("Gross Salary", breakdown.gross_salary),
        table_row("Tax", breakdown.tax_owed),
    ];
    for expense in &breakdown.expense_detail {
        rows.push(table_row(&expense.name, expense.annual));
    }
    rows.push(table_row("Total Expenses", breakdown.total_expenses));
    rows.push(table_row("Net Take-Home", breakdown.net_take_home));
    rows
}

/// Build the cash-flow diagram: gross salary fans out into tax, expenses and
/// net take-home; the expenses node fans out into each named expense. Values
/// are annual.
pub fn build_sankey(breakdown: &Breakdown) -> Sankey {
    let mut labels = vec![
        "Gross Salary".to_string(),
        "Tax".to_string(),
        "Expenses".to_string(),
        "Net Take-Home".to_string(),
    ];
    let mut links = vec![
        SankeyLink {
            source: 0,
            target: 1,
            value: round_currency(breakdown.tax_owed),
        },
        SankeyLink {
            source: 0,
            target: 2,
            value: round_currency(breakdown.total_expenses),
        },
        SankeyLink {
            source: 0,
            target: 3,
            value: round_currency(breakdown.net_take_home),
        },
    ];

    for expense in &breakdown.expense_detail {
        let target = labels.len();
        labels.push(expense.name.clone());
        links.push(SankeyLink {
            source: 2,
            target,
            value: round_currency(expense.annual),
        });
    }

    Sankey { labels, links }
}

/// Assemble the full wire response for one computed breakdown.
pub fn build_response(breakdown: &Breakdown) -> CalculateResponse {
    CalculateResponse {
        summary: BreakdownSummary {
            gross_salary: breakdown.gross_salary,
            tax_owed: breakdown.tax_owed,
            total_expenses: breakdown.total_expenses,
            net_take_home: breakdown.net_take_home,
        },
        bracket_detail: breakdown.bracket_detail.clone(),
        expense_detail: breakdown.expense_detail.clone(),
        table: build_table(breakdown),
        sankey: build_sankey(breakdown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Calculator, User};
    use shared::{CalculateRequest, ExpenseEntry, TaxBracket};

    fn breakdown() -> Breakdown {
        let request = CalculateRequest {
            gross_salary: 30_000.0,
            brackets: vec![
                TaxBracket {
                    lower_bound: 0.0,
                    rate: 0.0,
                },
                TaxBracket {
                    lower_bound: 20_000.0,
                    rate: 0.10,
                },
            ],
            expenses: vec![
                ExpenseEntry {
                    name: "Rent".to_string(),
                    amount: 800.0,
                    period: "monthly".to_string(),
                },
                ExpenseEntry {
                    name: "Groceries".to_string(),
                    amount: 60.0,
                    period: "weekly".to_string(),
                },
            ],
        };
        let user = User::from_request(&request).unwrap();
        Calculator::new(&user).compute().unwrap()
    }

    #[test]
    fn rounds_half_to_even() {
        assert_eq!(round_currency(1.005), 1.0); // 1.005 is stored just below the tie
        assert_eq!(round_currency(2.675f64 * 2.0), 5.35);
        assert_eq!(round_currency(10.0 / 3.0), 3.33);
    }

    #[test]
    fn table_rows_are_ordered() {
        let rows = build_table(&breakdown());
        let items: Vec<&str> = rows.iter().map(|r| r.item.as_str()).collect();
        assert_eq!(
            items,
            vec![
                "Gross Salary",
                "Tax",
                "Rent",
                "Groceries",
                "Total Expenses",
                "Net Take-Home",
            ]
        );
    }

    #[test]
    fn table_rows_carry_period_views() {
        let rows = build_table(&breakdown());
        let gross = &rows[0];
        assert_eq!(gross.annual, 30_000.0);
        assert_eq!(gross.monthly, 2_500.0);
        assert_eq!(gross.weekly, 575.34); // 30000 / 52.1429
    }

    #[test]
    fn sankey_links_reference_valid_labels() {
        let sankey = build_sankey(&breakdown());
        for link in &sankey.links {
            assert!(link.source < sankey.labels.len());
            assert!(link.target < sankey.labels.len());
        }
    }

    #[test]
    fn sankey_fans_salary_out_and_expenses_down() {
        let b = breakdown();
        let sankey = build_sankey(&b);

        // salary -> tax, expenses, net
        assert_eq!(sankey.links[0].source, 0);
        assert_eq!(sankey.links[0].value, round_currency(b.tax_owed));
        assert_eq!(sankey.links[2].value, round_currency(b.net_take_home));

        // expenses node -> each named expense
        let rent = sankey
            .links
            .iter()
            .find(|l| sankey.labels[l.target] == "Rent")
            .unwrap();
        assert_eq!(rent.source, 2);
        assert_eq!(rent.value, 9_600.0);
    }

    #[test]
    fn response_summary_is_unrounded() {
        let b = breakdown();
        let response = build_response(&b);
        assert_eq!(response.summary.net_take_home, b.net_take_home);
        assert_eq!(
            response.summary.net_take_home,
            response.summary.gross_salary
                - response.summary.tax_owed
                - response.summary.total_expenses
        );
    }
}
