//! Transient split-a-bill form for the selected friend.

use shared::{
    domain::{Friend, FriendId, Money, Payer},
    error::SplitError,
};

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillSplitForm {
    friend_id: FriendId,
    friend_name: String,
    bill_total: Option<Money>,
    user_expense: Option<Money>,
    payer: Payer,
}

impl BillSplitForm {
    pub fn new(friend: &Friend) -> Self {
        Self {
            friend_id: friend.id,
            friend_name: friend.name.clone(),
            bill_total: None,
            user_expense: None,
            payer: Payer::User,
        }
    }

    pub fn friend_id(&self) -> FriendId {
        self.friend_id
    }

    pub fn friend_name(&self) -> &str {
        &self.friend_name
    }

    pub fn bill_total(&self) -> Option<Money> {
        self.bill_total
    }

    pub fn user_expense(&self) -> Option<Money> {
        self.user_expense
    }

    pub fn payer(&self) -> Payer {
        self.payer
    }

    pub fn set_payer(&mut self, payer: Payer) {
        self.payer = payer;
    }

    /// Lowering the total below the current expense pulls the expense down
    /// with it, so the friend's share never goes negative.
    pub fn set_bill_total(&mut self, total: Option<Money>) -> Result<()> {
        if let Some(total) = total {
            if total.is_negative() {
                return Err(SplitError::NegativeAmount(total.to_string()));
            }
            if self.user_expense.is_some_and(|expense| expense > total) {
                self.user_expense = Some(total);
            }
        }
        self.bill_total = total;
        Ok(())
    }

    /// Rejects an expense above the bill total and keeps the previous value.
    pub fn set_user_expense(&mut self, expense: Option<Money>) -> Result<()> {
        if let Some(expense) = expense {
            if expense.is_negative() {
                return Err(SplitError::NegativeAmount(expense.to_string()));
            }
            let bill = self.bill_total.unwrap_or(Money::ZERO);
            if expense > bill {
                return Err(match self.bill_total {
                    Some(bill) => SplitError::ExpenseExceedsBill { expense, bill },
                    None => SplitError::MissingBillTotal,
                });
            }
        }
        self.user_expense = expense;
        Ok(())
    }

    pub fn set_bill_total_text(&mut self, raw: &str) -> Result<()> {
        let total = parse_field(raw)?;
        self.set_bill_total(total)
    }

    pub fn set_user_expense_text(&mut self, raw: &str) -> Result<()> {
        let expense = parse_field(raw)?;
        self.set_user_expense(expense)
    }

    pub fn friend_expense(&self) -> Option<Money> {
        let bill = self.bill_total?;
        let expense = self.user_expense?;
        Some(bill.checked_sub(expense)?.max(Money::ZERO))
    }

    /// Signed change to apply to the friend's balance.
    ///
    /// When the user paid, the friend now owes their share; when the friend
    /// paid, the user owes their own expense.
    pub fn settlement_delta(&self) -> Result<Money> {
        let bill = self
            .bill_total
            .filter(|bill| !bill.is_zero())
            .ok_or(SplitError::MissingBillTotal)?;
        let expense = self
            .user_expense
            .filter(|expense| !expense.is_zero())
            .ok_or(SplitError::MissingUserExpense)?;

        match self.payer {
            Payer::User => bill
                .checked_sub(expense)
                .map(|share| share.max(Money::ZERO))
                .ok_or(SplitError::AmountOutOfRange),
            Payer::Friend => Money::ZERO
                .checked_sub(expense)
                .ok_or(SplitError::AmountOutOfRange),
        }
    }

    pub fn title(&self) -> String {
        format!("Split a bill with {}", self.friend_name)
    }

    pub fn friend_expense_label(&self) -> String {
        format!("{}'s expense", self.friend_name)
    }

    pub fn payer_label(&self, payer: Payer) -> &str {
        match payer {
            Payer::User => "You",
            Payer::Friend => &self.friend_name,
        }
    }
}

/// Blank input and a lone `.` (the start of `.5`) leave the field empty.
fn parse_field(raw: &str) -> Result<Option<Money>> {
    let raw_trimmed = raw.trim();
    if raw_trimmed.is_empty() || raw_trimmed == "." {
        return Ok(None);
    }
    Money::parse_non_negative(raw).map(Some)
}

#[cfg(test)]
#[path = "tests/bill_split_tests.rs"]
mod tests;
