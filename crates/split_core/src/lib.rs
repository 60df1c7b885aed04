//! Friends ledger and bill-split session state.
//!
//! [`Session`] owns every piece of shared state (the roster, the selected
//! friend, the add-friend form flag) and is the only thing that mutates it.
//! Presentation code reads through the accessors and writes through the
//! operations below; forms keep their own transient drafts.

use serde::Serialize;
use shared::{
    domain::{Friend, FriendId, Money},
    error::SplitError,
};
use tracing::{debug, info};

pub mod add_friend;
pub mod bill_split;
pub mod ids;
pub mod roster;
pub mod settings;

pub use add_friend::AddFriendForm;
pub use bill_split::BillSplitForm;
pub use ids::{ClockIds, IdSource, SequentialIds};
pub use roster::{BalanceStatus, RosterRow};
pub use settings::{load_settings, Settings};

pub type Result<T, E = SplitError> = std::result::Result<T, E>;

const SEED_AVATAR_BASE_URL: &str = "https://i.pravatar.cc/48";

/// The built-in roster a fresh session starts with.
pub fn seed_friends() -> Vec<Friend> {
    [
        (118836, "Clark", -7),
        (933372, "Sarah", 20),
        (499476, "Anthony", 0),
    ]
    .into_iter()
    .map(|(id, name, balance)| Friend {
        id: FriendId(id),
        name: name.to_string(),
        image: format!("{SEED_AVATAR_BASE_URL}?u={id}"),
        balance: Money::from_units(balance),
    })
    .collect()
}

/// Which affordance the session is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    Idle,
    AddingFriend,
    FriendSelected(FriendId),
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub friends: Vec<Friend>,
    pub selected_friend_id: Option<FriendId>,
    pub is_add_form_open: bool,
}

#[derive(Debug)]
pub struct Session<I = ClockIds> {
    friends: Vec<Friend>,
    selected: Option<FriendId>,
    add_form_open: bool,
    ids: I,
}

impl Session<ClockIds> {
    pub fn new() -> Self {
        Self {
            friends: seed_friends(),
            selected: None,
            add_form_open: false,
            ids: ClockIds::default(),
        }
    }

    /// Starts from the settings roster when one is configured.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        match &settings.friends {
            Some(seed) => {
                let friends = seed
                    .iter()
                    .cloned()
                    .map(|friend| friend.into_friend(&settings.avatar_base_url))
                    .collect();
                Self::with_friends(friends, ClockIds::default())
            }
            None => Ok(Self::new()),
        }
    }
}

impl Default for Session<ClockIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdSource> Session<I> {
    pub fn with_friends(friends: Vec<Friend>, ids: I) -> Result<Self> {
        for (index, friend) in friends.iter().enumerate() {
            if friend.name.trim().is_empty() {
                return Err(SplitError::EmptyName);
            }
            if friends[..index].iter().any(|other| other.id == friend.id) {
                return Err(SplitError::DuplicateFriendId(friend.id));
            }
        }

        Ok(Self {
            friends,
            selected: None,
            add_form_open: false,
            ids,
        })
    }

    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn friend(&self, id: FriendId) -> Option<&Friend> {
        self.friends.iter().find(|friend| friend.id == id)
    }

    pub fn selected_friend_id(&self) -> Option<FriendId> {
        self.selected
    }

    pub fn selected_friend(&self) -> Option<&Friend> {
        self.selected.and_then(|id| self.friend(id))
    }

    pub fn is_add_form_open(&self) -> bool {
        self.add_form_open
    }

    /// A selection wins over an open add form: the split form is what the
    /// user is looking at.
    pub fn mode(&self) -> SessionMode {
        match (self.selected, self.add_form_open) {
            (Some(id), _) => SessionMode::FriendSelected(id),
            (None, true) => SessionMode::AddingFriend,
            (None, false) => SessionMode::Idle,
        }
    }

    pub fn add_form_toggle_label(&self) -> &'static str {
        if self.add_form_open {
            "Close"
        } else {
            "Add Friend"
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            friends: self.friends.clone(),
            selected_friend_id: self.selected,
            is_add_form_open: self.add_form_open,
        }
    }

    pub fn toggle_add_form(&mut self) {
        self.add_form_open = !self.add_form_open;
        debug!(open = self.add_form_open, "toggled add friend form");
    }

    /// Appends a friend with a zero balance and closes the add form.
    ///
    /// The stored image is `image_url` with `?=<id>` appended so every new
    /// friend gets a distinct avatar.
    pub fn add_friend(&mut self, name: &str, image_url: &str) -> Result<FriendId> {
        let name = name.trim();
        let image_url = image_url.trim();
        if name.is_empty() {
            debug!("add friend rejected: empty name");
            return Err(SplitError::EmptyName);
        }
        if image_url.is_empty() {
            debug!("add friend rejected: empty image url");
            return Err(SplitError::EmptyImage);
        }

        let id = self.fresh_id();
        self.friends.push(Friend {
            id,
            name: name.to_string(),
            image: format!("{image_url}?={id}"),
            balance: Money::ZERO,
        });
        self.add_form_open = false;

        info!(friend_id = %id, name, "friend added");
        Ok(id)
    }

    /// Selecting the selected friend again clears the selection.
    pub fn select_friend(&mut self, id: FriendId) -> Result<()> {
        if self.friend(id).is_none() {
            debug!(friend_id = %id, "select rejected: unknown friend");
            return Err(SplitError::UnknownFriend(id));
        }

        if self.selected == Some(id) {
            self.selected = None;
            debug!(friend_id = %id, "friend deselected");
        } else {
            self.selected = Some(id);
            self.add_form_open = false;
            debug!(friend_id = %id, "friend selected");
        }
        Ok(())
    }

    /// Adds `delta` to the selected friend's balance and clears the
    /// selection. Returns the new balance.
    pub fn settle_bill(&mut self, delta: Money) -> Result<Money> {
        let Some(id) = self.selected else {
            debug!(%delta, "settle rejected: no friend selected");
            return Err(SplitError::NoFriendSelected);
        };
        let friend = self
            .friends
            .iter_mut()
            .find(|friend| friend.id == id)
            .ok_or(SplitError::UnknownFriend(id))?;

        let Some(balance) = friend.balance.checked_add(delta) else {
            debug!(friend_id = %id, %delta, "settle rejected: balance out of range");
            return Err(SplitError::AmountOutOfRange);
        };
        friend.balance = balance;
        self.selected = None;

        info!(friend_id = %id, %delta, %balance, "bill settled");
        Ok(balance)
    }

    pub fn confirm_split(&mut self, form: &BillSplitForm) -> Result<Money> {
        let selected = self.selected.ok_or(SplitError::NoFriendSelected)?;
        if form.friend_id() != selected {
            return Err(SplitError::SplitFormMismatch {
                form: form.friend_id(),
                selected,
            });
        }

        let delta = form.settlement_delta().inspect_err(|err| {
            debug!(friend_id = %selected, error = %err, "split rejected");
        })?;
        self.settle_bill(delta)
    }

    fn fresh_id(&mut self) -> FriendId {
        loop {
            let id = self.ids.next_id();
            if self.friend(id).is_none() {
                return id;
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
