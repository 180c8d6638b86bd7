//! Validated container for one calculation's inputs.

use shared::{CalculateRequest, TaxBracket};

use super::errors::ValidationError;
use super::periods::{Period, PeriodAmount};

/// A recurring bill or expense with its amount already normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub name: String,
    /// Amount as entered, per `period`
    pub amount: f64,
    pub period: Period,
    /// Annual-canonical view of `amount`
    pub normalized: PeriodAmount,
}

/// Immutable snapshot of one request's financial inputs.
///
/// Constructed fresh per request and discarded after the response; all
/// validation of user-entered values happens here, so the calculator can
/// assume well-formed amounts. The tax brackets are carried as given and
/// validated by the calculator, since a broken rule set is a configuration
/// problem rather than a user-input problem.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    gross_salary: f64,
    brackets: Vec<TaxBracket>,
    expenses: Vec<Expense>,
}

impl User {
    /// Build a `User` from the raw request, rejecting negative or
    /// non-finite amounts and unrecognized recurrence periods.
    pub fn from_request(request: &CalculateRequest) -> Result<Self, ValidationError> {
        if !request.gross_salary.is_finite() || request.gross_salary < 0.0 {
            return Err(ValidationError::InvalidSalary(request.gross_salary));
        }

        let mut expenses = Vec::with_capacity(request.expenses.len());
        for entry in &request.expenses {
            if !entry.amount.is_finite() || entry.amount < 0.0 {
                return Err(ValidationError::InvalidExpenseAmount {
                    name: entry.name.clone(),
                    amount: entry.amount,
                });
            }
            let period: Period = entry.period.parse()?;
            expenses.push(Expense {
                name: entry.name.clone(),
                amount: entry.amount,
                period,
                normalized: PeriodAmount::from_period(entry.amount, period),
            });
        }

        Ok(Self {
            gross_salary: request.gross_salary,
            brackets: request.brackets.clone(),
            expenses,
        })
    }

    pub fn gross_salary(&self) -> f64 {
        self.gross_salary
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Expenses in the order they were entered, amounts normalized.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ExpenseEntry;

    fn request(gross_salary: f64, expenses: Vec<ExpenseEntry>) -> CalculateRequest {
        CalculateRequest {
            gross_salary,
            brackets: vec![TaxBracket {
                lower_bound: 0.0,
                rate: 0.2,
            }],
            expenses,
        }
    }

    #[test]
    fn accepts_valid_inputs() {
        let req = request(
            30_000.0,
            vec![ExpenseEntry {
                name: "Rent".to_string(),
                amount: 800.0,
                period: "monthly".to_string(),
            }],
        );

        let user = User::from_request(&req).unwrap();
        assert_eq!(user.gross_salary(), 30_000.0);
        assert_eq!(user.expenses().len(), 1);
        assert_eq!(user.expenses()[0].normalized.annual(), 9_600.0);
    }

    #[test]
    fn rejects_negative_salary() {
        let err = User::from_request(&request(-1.0, vec![])).unwrap_err();
        assert_eq!(err, ValidationError::InvalidSalary(-1.0));
    }

    #[test]
    fn rejects_nan_salary() {
        let err = User::from_request(&request(f64::NAN, vec![])).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidSalary(_)));
    }

    #[test]
    fn rejects_negative_expense_amount() {
        let req = request(
            30_000.0,
            vec![ExpenseEntry {
                name: "Rent".to_string(),
                amount: -50.0,
                period: "monthly".to_string(),
            }],
        );

        let err = User::from_request(&req).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidExpenseAmount {
                name: "Rent".to_string(),
                amount: -50.0,
            }
        );
    }

    #[test]
    fn rejects_unknown_period() {
        let req = request(
            30_000.0,
            vec![ExpenseEntry {
                name: "Gym".to_string(),
                amount: 30.0,
                period: "quarterly".to_string(),
            }],
        );

        let err = User::from_request(&req).unwrap_err();
        assert_eq!(err, ValidationError::UnknownPeriod("quarterly".to_string()));
    }

    #[test]
    fn zero_amounts_are_valid() {
        let req = request(
            0.0,
            vec![ExpenseEntry {
                name: "Nothing".to_string(),
                amount: 0.0,
                period: "annual".to_string(),
            }],
        );

        let user = User::from_request(&req).unwrap();
        assert_eq!(user.gross_salary(), 0.0);
        assert_eq!(user.expenses()[0].normalized.annual(), 0.0);
    }

    #[test]
    fn preserves_expense_order() {
        let req = request(
            30_000.0,
            vec![
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
        );

        let user = User::from_request(&req).unwrap();
        let names: Vec<&str> = user.expenses().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Rent", "Groceries"]);
    }
}
