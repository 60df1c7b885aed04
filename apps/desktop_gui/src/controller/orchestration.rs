//! Dispatch helpers from panel interactions to the UI action queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::controller::events::UiAction;

pub fn dispatch_ui_action(action_tx: &Sender<UiAction>, action: UiAction, status: &mut String) {
    let action_name = action.name();

    match action_tx.try_send(action) {
        Ok(()) => tracing::debug!(action = action_name, "queued ui action"),
        Err(TrySendError::Full(_)) => {
            *status = "UI action queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "UI action queue disconnected; restart the app".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;

    use super::*;

    #[test]
    fn queues_actions_in_order() {
        let (tx, rx) = bounded(4);
        let mut status = String::new();

        dispatch_ui_action(&tx, UiAction::ToggleAddForm, &mut status);
        dispatch_ui_action(&tx, UiAction::SubmitFriend, &mut status);

        assert_eq!(rx.try_recv(), Ok(UiAction::ToggleAddForm));
        assert_eq!(rx.try_recv(), Ok(UiAction::SubmitFriend));
        assert!(status.is_empty());
    }

    #[test]
    fn reports_full_queue() {
        let (tx, _rx) = bounded(1);
        let mut status = String::new();

        dispatch_ui_action(&tx, UiAction::ToggleAddForm, &mut status);
        dispatch_ui_action(&tx, UiAction::ToggleAddForm, &mut status);

        assert_eq!(status, "UI action queue is full; please retry");
    }

    #[test]
    fn reports_disconnected_queue() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let mut status = String::new();

        dispatch_ui_action(&tx, UiAction::ConfirmSplit, &mut status);

        assert_eq!(status, "UI action queue disconnected; restart the app");
    }
}
