use thiserror::Error;

use crate::domain::{FriendId, Money};

/// Rejected operations. Every variant leaves the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error("friend name must not be empty")]
    EmptyName,
    #[error("friend image url must not be empty")]
    EmptyImage,
    #[error("no friend with id {0}")]
    UnknownFriend(FriendId),
    #[error("friend id {0} is already taken")]
    DuplicateFriendId(FriendId),
    #[error("no friend is selected")]
    NoFriendSelected,
    #[error("split form belongs to friend {form} but friend {selected} is selected")]
    SplitFormMismatch { form: FriendId, selected: FriendId },
    #[error("bill total is missing")]
    MissingBillTotal,
    #[error("your expense is missing")]
    MissingUserExpense,
    #[error("your expense ${expense} exceeds the bill total ${bill}")]
    ExpenseExceedsBill { expense: Money, bill: Money },
    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),
    #[error("'{0}' is negative; amounts must be zero or more")]
    NegativeAmount(String),
    #[error("amount is out of range")]
    AmountOutOfRange,
}
