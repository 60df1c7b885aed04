//! UI actions and error modeling for the desktop controller.

use shared::{
    domain::{FriendId, Payer},
    error::SplitError,
};

/// Everything a panel can ask for. Panels never touch the session directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    ToggleAddForm,
    EditFriendName(String),
    EditFriendImage(String),
    SubmitFriend,
    SelectFriend(FriendId),
    EditBillTotal(String),
    EditUserExpense(String),
    ChoosePayer(Payer),
    ConfirmSplit,
}

impl UiAction {
    pub fn name(&self) -> &'static str {
        match self {
            UiAction::ToggleAddForm => "toggle_add_form",
            UiAction::EditFriendName(_) => "edit_friend_name",
            UiAction::EditFriendImage(_) => "edit_friend_image",
            UiAction::SubmitFriend => "submit_friend",
            UiAction::SelectFriend(_) => "select_friend",
            UiAction::EditBillTotal(_) => "edit_bill_total",
            UiAction::EditUserExpense(_) => "edit_user_expense",
            UiAction::ChoosePayer(_) => "choose_payer",
            UiAction::ConfirmSplit => "confirm_split",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    AddFriend,
    SelectFriend,
    SplitBill,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_split_error(context: UiErrorContext, err: &SplitError) -> Self {
        let message = match err {
            SplitError::EmptyName => "Enter your friend's name.".to_string(),
            SplitError::EmptyImage => "Enter an image URL.".to_string(),
            SplitError::MissingBillTotal if context == UiErrorContext::SplitBill => {
                "Enter the bill value first.".to_string()
            }
            SplitError::MissingUserExpense => "Enter your expense.".to_string(),
            other => {
                let text = other.to_string();
                let mut chars = text.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => text,
                }
            }
        };

        Self { context, message }
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
