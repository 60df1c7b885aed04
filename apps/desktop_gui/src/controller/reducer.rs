//! Applies queued UI actions to the session and the form drafts.

use shared::{domain::FriendId, error::SplitError};
use split_core::{AddFriendForm, BillSplitForm, IdSource, Session, Settings};

use crate::controller::events::{UiAction, UiError, UiErrorContext};

/// Split form plus the text the user typed into its amount fields.
#[derive(Debug, Clone)]
pub struct SplitDraft {
    pub form: BillSplitForm,
    pub bill_text: String,
    pub expense_text: String,
}

impl SplitDraft {
    fn new(form: BillSplitForm) -> Self {
        Self {
            form,
            bill_text: String::new(),
            expense_text: String::new(),
        }
    }

    pub fn friend_expense_text(&self) -> String {
        self.form
            .friend_expense()
            .map(|amount| amount.to_string())
            .unwrap_or_default()
    }
}

pub struct AppState<I = split_core::ClockIds> {
    pub session: Session<I>,
    pub add_friend: AddFriendForm,
    pub split: Option<SplitDraft>,
    pub last_error: Option<UiError>,
}

impl AppState {
    pub fn from_settings(settings: &Settings) -> Result<Self, SplitError> {
        Ok(Self::with_session(
            Session::from_settings(settings)?,
            AddFriendForm::new(settings.avatar_base_url.clone()),
        ))
    }
}

impl<I: IdSource> AppState<I> {
    pub fn with_session(session: Session<I>, add_friend: AddFriendForm) -> Self {
        Self {
            session,
            add_friend,
            split: None,
            last_error: None,
        }
    }
}

pub fn reduce<I: IdSource>(state: &mut AppState<I>, action: UiAction) {
    let selected_before = state.session.selected_friend_id();
    let add_form_was_open = state.session.is_add_form_open();

    let outcome = match action {
        UiAction::ToggleAddForm => {
            state.session.toggle_add_form();
            Ok(())
        }
        UiAction::EditFriendName(name) => {
            state.add_friend.name = name;
            Ok(())
        }
        UiAction::EditFriendImage(image) => {
            state.add_friend.image = image;
            Ok(())
        }
        UiAction::SubmitFriend => state
            .add_friend
            .submit(&mut state.session)
            .map(|_| ())
            .map_err(|err| UiError::from_split_error(UiErrorContext::AddFriend, &err)),
        UiAction::SelectFriend(id) => state
            .session
            .select_friend(id)
            .map_err(|err| UiError::from_split_error(UiErrorContext::SelectFriend, &err)),
        UiAction::EditBillTotal(text) => with_split(state, |draft| {
            let expense_before = draft.form.user_expense();
            draft.form.set_bill_total_text(&text)?;
            draft.bill_text = text;
            if draft.form.user_expense() != expense_before {
                draft.expense_text = draft
                    .form
                    .user_expense()
                    .map(|amount| amount.to_string())
                    .unwrap_or_default();
            }
            Ok(())
        }),
        UiAction::EditUserExpense(text) => with_split(state, |draft| {
            draft.form.set_user_expense_text(&text)?;
            draft.expense_text = text;
            Ok(())
        }),
        UiAction::ChoosePayer(payer) => with_split(state, |draft| {
            draft.form.set_payer(payer);
            Ok(())
        }),
        UiAction::ConfirmSplit => match state.split.as_ref() {
            Some(draft) => state
                .session
                .confirm_split(&draft.form)
                .map(|_| ())
                .map_err(|err| UiError::from_split_error(UiErrorContext::SplitBill, &err)),
            None => Err(UiError::from_split_error(
                UiErrorContext::SplitBill,
                &SplitError::NoFriendSelected,
            )),
        },
    };

    match outcome {
        Ok(()) => state.last_error = None,
        Err(err) => {
            tracing::debug!(context = ?err.context(), message = err.message(), "ui action rejected");
            state.last_error = Some(err);
        }
    }

    if add_form_was_open && !state.session.is_add_form_open() {
        state.add_friend.reset();
    }
    sync_split_draft(state, selected_before);
}

fn with_split<I: IdSource>(
    state: &mut AppState<I>,
    edit: impl FnOnce(&mut SplitDraft) -> Result<(), SplitError>,
) -> Result<(), UiError> {
    let draft = state.split.as_mut().ok_or_else(|| {
        UiError::from_split_error(UiErrorContext::SplitBill, &SplitError::NoFriendSelected)
    })?;
    edit(draft).map_err(|err| UiError::from_split_error(UiErrorContext::SplitBill, &err))
}

/// A new selection always starts from a blank split form.
fn sync_split_draft<I: IdSource>(state: &mut AppState<I>, selected_before: Option<FriendId>) {
    let selected_now = state.session.selected_friend_id();
    if selected_now == selected_before && state.split.is_some() == selected_now.is_some() {
        return;
    }

    state.split = state
        .session
        .selected_friend()
        .map(|friend| SplitDraft::new(BillSplitForm::new(friend)));
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
