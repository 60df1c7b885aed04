//! Draft state for the add-friend form.

use shared::domain::FriendId;

use crate::{settings::DEFAULT_AVATAR_BASE_URL, IdSource, Result, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddFriendForm {
    pub name: String,
    pub image: String,
    default_image: String,
}

impl Default for AddFriendForm {
    fn default() -> Self {
        Self::new(DEFAULT_AVATAR_BASE_URL)
    }
}

impl AddFriendForm {
    pub fn new(default_image: impl Into<String>) -> Self {
        let default_image = default_image.into();
        Self {
            name: String::new(),
            image: default_image.clone(),
            default_image,
        }
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.image.clone_from(&self.default_image);
    }

    /// Adds the drafted friend. The draft is cleared on success and kept on
    /// rejection so it can be corrected.
    pub fn submit<I: IdSource>(&mut self, session: &mut Session<I>) -> Result<FriendId> {
        let id = session.add_friend(&self.name, &self.image)?;
        self.reset();
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use shared::{
        domain::{FriendId, Money},
        error::SplitError,
    };

    use super::*;
    use crate::{seed_friends, SequentialIds};

    fn session() -> Session<SequentialIds> {
        Session::with_friends(seed_friends(), SequentialIds::starting_at(1)).expect("session")
    }

    #[test]
    fn starts_with_default_avatar() {
        let form = AddFriendForm::default();
        assert_eq!(form.name, "");
        assert_eq!(form.image, "https://i.pravatar.cc/48");
    }

    #[test]
    fn submit_adds_friend_and_resets_draft() {
        let mut session = session();
        session.toggle_add_form();

        let mut form = AddFriendForm::new("https://avatars.example/64");
        form.name = "Dana".to_string();
        form.image = "https://avatars.example/dana".to_string();

        let id = form.submit(&mut session).expect("submit");
        assert_eq!(id, FriendId(1));

        let dana = session.friend(id).expect("dana");
        assert_eq!(dana.image, "https://avatars.example/dana?=1");
        assert_eq!(dana.balance, Money::ZERO);
        assert!(!session.is_add_form_open());

        assert_eq!(form.name, "");
        assert_eq!(form.image, "https://avatars.example/64");
    }

    #[test]
    fn rejected_submit_keeps_draft() {
        let mut session = session();
        session.toggle_add_form();

        let mut form = AddFriendForm::default();
        form.image = "https://img.example/x".to_string();

        assert_eq!(form.submit(&mut session), Err(SplitError::EmptyName));
        assert_eq!(form.image, "https://img.example/x");
        assert!(session.is_add_form_open());
        assert_eq!(session.friends().len(), 3);
    }
}
