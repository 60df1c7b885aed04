//! Read-only projection of the roster for display.

use shared::domain::{FriendId, Money};

use crate::{IdSource, Session};

/// Sign of a balance, with the amount as a positive value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStatus {
    YouOwe(Money),
    OwesYou(Money),
    Settled,
}

impl BalanceStatus {
    pub fn of(balance: Money) -> Self {
        if balance.is_negative() {
            Self::YouOwe(balance.abs())
        } else if balance.is_positive() {
            Self::OwesYou(balance)
        } else {
            Self::Settled
        }
    }

    pub fn message(&self, name: &str) -> String {
        match self {
            Self::YouOwe(amount) => format!("You owe {name} ${amount}"),
            Self::OwesYou(amount) => format!("{name} owes you ${amount}"),
            Self::Settled => format!("You and {name} are equal"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow<'a> {
    pub id: FriendId,
    pub name: &'a str,
    pub image: &'a str,
    pub status: BalanceStatus,
    pub is_selected: bool,
}

impl RosterRow<'_> {
    pub fn message(&self) -> String {
        self.status.message(self.name)
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_selected {
            "Close"
        } else {
            "Select"
        }
    }
}

pub fn rows<I: IdSource>(session: &Session<I>) -> Vec<RosterRow<'_>> {
    let selected = session.selected_friend_id();
    session
        .friends()
        .iter()
        .map(|friend| RosterRow {
            id: friend.id,
            name: &friend.name,
            image: &friend.image,
            status: BalanceStatus::of(friend.balance),
            is_selected: selected == Some(friend.id),
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/roster_tests.rs"]
mod tests;
