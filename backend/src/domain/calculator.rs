//! Take-home pay calculation over a validated [`User`].

use shared::{BracketTax, NormalizedExpense, TaxBracket};
use tracing::debug;

use super::errors::ConfigurationError;
use super::user::User;

/// Result of one calculation, all figures annual and unrounded.
///
/// `net_take_home` is computed as a single subtraction from the other three
/// fields, so the identity `net == gross - tax - expenses` holds exactly.
/// It is deliberately not clamped: tax plus expenses exceeding the salary
/// yields a negative figure rather than a hidden zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakdown {
    pub gross_salary: f64,
    pub tax_owed: f64,
    pub total_expenses: f64,
    pub net_take_home: f64,
    pub bracket_detail: Vec<BracketTax>,
    pub expense_detail: Vec<NormalizedExpense>,
}

/// Derives a [`Breakdown`] from a [`User`]. Stateless; borrows the user and
/// never mutates it.
pub struct Calculator<'a> {
    user: &'a User,
}

impl<'a> Calculator<'a> {
    pub fn new(user: &'a User) -> Self {
        Self { user }
    }

    /// Run the calculation. Deterministic: identical inputs always produce
    /// identical outputs.
    pub fn compute(&self) -> Result<Breakdown, ConfigurationError> {
        validate_brackets(self.user.brackets())?;

        let gross_salary = self.user.gross_salary();
        let (tax_owed, bracket_detail) = progressive_tax(gross_salary, self.user.brackets());

        let expense_detail: Vec<NormalizedExpense> = self
            .user
            .expenses()
            .iter()
            .map(|e| NormalizedExpense {
                name: e.name.clone(),
                amount: e.amount,
                period: e.period.to_string(),
                annual: e.normalized.annual(),
            })
            .collect();
        let total_expenses: f64 = expense_detail.iter().map(|e| e.annual).sum();

        let net_take_home = gross_salary - tax_owed - total_expenses;
        debug!(
            gross_salary,
            tax_owed, total_expenses, net_take_home, "computed breakdown"
        );

        Ok(Breakdown {
            gross_salary,
            tax_owed,
            total_expenses,
            net_take_home,
            bracket_detail,
            expense_detail,
        })
    }
}

/// Reject an empty bracket set, and any bracket with a negative or
/// non-finite lower bound, a negative rate, or an out-of-order lower bound.
/// Bounds below zero would let `progressive_tax` tax income that does not
/// exist (a zero salary would owe tax on the negative slice).
fn validate_brackets(brackets: &[TaxBracket]) -> Result<(), ConfigurationError> {
    if brackets.is_empty() {
        return Err(ConfigurationError::EmptyBrackets);
    }
    for (index, bracket) in brackets.iter().enumerate() {
        if !bracket.lower_bound.is_finite() || bracket.lower_bound < 0.0 {
            return Err(ConfigurationError::InvalidLowerBound {
                index,
                lower_bound: bracket.lower_bound,
            });
        }
        if bracket.rate < 0.0 {
            return Err(ConfigurationError::NegativeRate {
                lower_bound: bracket.lower_bound,
                rate: bracket.rate,
            });
        }
        if index > 0 && !(brackets[index - 1].lower_bound < bracket.lower_bound) {
            return Err(ConfigurationError::UnorderedBrackets {
                index,
                lower_bound: bracket.lower_bound,
            });
        }
    }
    Ok(())
}

/// Marginal tax over ascending brackets: each bracket taxes the slice of
/// salary between its lower bound and the next bracket's lower bound (the
/// last bracket is unbounded above). A bracket whose lower bound is at or
/// above the salary contributes nothing, so a salary exactly on a boundary
/// puts zero income into the higher bracket.
fn progressive_tax(salary: f64, brackets: &[TaxBracket]) -> (f64, Vec<BracketTax>) {
    let mut tax_owed = 0.0;
    let mut detail = Vec::new();

    for (i, bracket) in brackets.iter().enumerate() {
        if bracket.lower_bound >= salary {
            break;
        }
        let upper = brackets
            .get(i + 1)
            .map_or(f64::INFINITY, |next| next.lower_bound);
        let taxable = salary.min(upper) - bracket.lower_bound;
        let tax = taxable * bracket.rate;
        tax_owed += tax;
        detail.push(BracketTax {
            lower_bound: bracket.lower_bound,
            rate: bracket.rate,
            taxable,
            tax,
        });
    }

    (tax_owed, detail)
}
