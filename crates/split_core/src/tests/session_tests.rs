use super::*;

const CLARK: FriendId = FriendId(118836);
const SARAH: FriendId = FriendId(933372);
const ANTHONY: FriendId = FriendId(499476);

fn session() -> Session<SequentialIds> {
    Session::with_friends(seed_friends(), SequentialIds::starting_at(1_000)).expect("session")
}

/// Always hands out the same id; used to prove collisions are skipped.
struct StuckThenCounting {
    repeats: u32,
    next: i64,
}

impl IdSource for StuckThenCounting {
    fn next_id(&mut self) -> FriendId {
        if self.repeats > 0 {
            self.repeats -= 1;
            return CLARK;
        }
        self.next += 1;
        FriendId(self.next)
    }
}

#[test]
fn starts_with_seed_roster_and_nothing_open() {
    let session = Session::new();
    let names: Vec<_> = session.friends().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Clark", "Sarah", "Anthony"]);
    assert_eq!(session.friend(CLARK).expect("clark").balance, Money::from_units(-7));
    assert_eq!(session.friend(SARAH).expect("sarah").balance, Money::from_units(20));
    assert_eq!(session.friend(ANTHONY).expect("anthony").image, "https://i.pravatar.cc/48?u=499476");
    assert_eq!(session.selected_friend_id(), None);
    assert!(!session.is_add_form_open());
    assert_eq!(session.mode(), SessionMode::Idle);
}

#[test]
fn toggle_add_form_flips_visibility_only() {
    let mut session = session();
    session.select_friend(SARAH).expect("select");

    session.toggle_add_form();
    assert!(session.is_add_form_open());
    assert_eq!(session.selected_friend_id(), Some(SARAH));
    assert_eq!(session.add_form_toggle_label(), "Close");

    session.toggle_add_form();
    assert!(!session.is_add_form_open());
    assert_eq!(session.add_form_toggle_label(), "Add Friend");
}

#[test]
fn add_friend_appends_with_zero_balance_and_closes_form() {
    let mut session = session();
    session.toggle_add_form();
    assert_eq!(session.mode(), SessionMode::AddingFriend);

    let first = session.add_friend("Dana", "https://i.pravatar.cc/48").expect("dana");
    let second = session.add_friend("Eli", "https://i.pravatar.cc/48").expect("eli");

    assert_ne!(first, second);
    assert_eq!(session.friends().len(), 5);
    assert_eq!(session.friends()[3].name, "Dana");
    assert_eq!(session.friends()[4].name, "Eli");
    assert!(session.friends()[3..].iter().all(|f| f.balance == Money::ZERO));
    assert_eq!(session.friends()[3].image, format!("https://i.pravatar.cc/48?={first}"));
    assert!(!session.is_add_form_open());
    assert_eq!(session.mode(), SessionMode::Idle);
}

#[test]
fn add_friend_leaves_selection_alone() {
    let mut session = session();
    session.select_friend(CLARK).expect("select");
    session.add_friend("Dana", "https://i.pravatar.cc/48").expect("dana");
    assert_eq!(session.selected_friend_id(), Some(CLARK));
}

#[test]
fn add_friend_rejects_blank_fields_without_touching_roster() {
    let mut session = session();
    session.toggle_add_form();
    let before = session.friends().to_vec();

    assert_eq!(session.add_friend("", "x"), Err(SplitError::EmptyName));
    assert_eq!(session.add_friend("   ", "x"), Err(SplitError::EmptyName));
    assert_eq!(session.add_friend("x", ""), Err(SplitError::EmptyImage));

    assert_eq!(session.friends(), before.as_slice());
    assert!(session.is_add_form_open());
}

#[test]
fn add_friend_skips_ids_already_in_use() {
    let mut session = Session::with_friends(
        seed_friends(),
        StuckThenCounting {
            repeats: 3,
            next: 0,
        },
    )
    .expect("session");

    let id = session.add_friend("Dana", "img").expect("dana");
    assert_eq!(id, FriendId(1));

    let mut ids: Vec<_> = session.friends().iter().map(|f| f.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), session.friends().len());
}

#[test]
fn duplicate_seed_ids_are_rejected() {
    let mut friends = seed_friends();
    friends.push(friends[0].clone());
    let err = Session::with_friends(friends, SequentialIds::starting_at(1)).expect_err("dup");
    assert_eq!(err, SplitError::DuplicateFriendId(CLARK));
}

#[test]
fn selecting_closes_add_form() {
    let mut session = session();
    session.toggle_add_form();
    session.select_friend(ANTHONY).expect("select");

    assert_eq!(session.selected_friend_id(), Some(ANTHONY));
    assert!(!session.is_add_form_open());
    assert_eq!(session.mode(), SessionMode::FriendSelected(ANTHONY));
}

#[test]
fn selecting_same_friend_twice_clears_selection() {
    let mut session = session();
    session.select_friend(SARAH).expect("first");
    session.select_friend(SARAH).expect("second");
    assert_eq!(session.selected_friend_id(), None);
}

#[test]
fn selecting_another_friend_moves_selection() {
    let mut session = session();
    session.select_friend(SARAH).expect("sarah");
    session.select_friend(CLARK).expect("clark");
    assert_eq!(session.selected_friend().map(|f| f.name.as_str()), Some("Clark"));
}

#[test]
fn selecting_unknown_friend_is_rejected() {
    let mut session = session();
    session.select_friend(SARAH).expect("sarah");
    assert_eq!(
        session.select_friend(FriendId(1)),
        Err(SplitError::UnknownFriend(FriendId(1)))
    );
    assert_eq!(session.selected_friend_id(), Some(SARAH));
}

#[test]
fn settle_adds_delta_and_clears_selection() {
    let mut session = session();
    session.select_friend(CLARK).expect("select");

    let balance = session.settle_bill(Money::from_cents(1250)).expect("settle");

    assert_eq!(balance, Money::from_cents(550));
    assert_eq!(session.friend(CLARK).expect("clark").balance, Money::from_cents(550));
    assert_eq!(session.selected_friend_id(), None);
}

#[test]
fn settle_without_selection_changes_nothing() {
    let mut session = session();
    let before = session.friends().to_vec();

    assert_eq!(
        session.settle_bill(Money::from_units(10)),
        Err(SplitError::NoFriendSelected)
    );
    assert_eq!(session.friends(), before.as_slice());
}

#[test]
fn confirm_split_settles_selected_friend() {
    let mut session = session();
    session.select_friend(SARAH).expect("select");
    let sarah = session.selected_friend().expect("sarah").clone();

    let mut form = BillSplitForm::new(&sarah);
    form.set_bill_total_text("100").expect("bill");
    form.set_user_expense_text("40").expect("expense");
    form.set_payer(shared::domain::Payer::Friend);

    let balance = session.confirm_split(&form).expect("split");
    assert_eq!(balance, Money::from_units(-20));
    assert_eq!(session.selected_friend_id(), None);
}

#[test]
fn confirm_split_with_incomplete_form_keeps_selection() {
    let mut session = session();
    session.select_friend(ANTHONY).expect("select");
    let form = BillSplitForm::new(session.selected_friend().expect("anthony"));

    assert_eq!(session.confirm_split(&form), Err(SplitError::MissingBillTotal));
    assert_eq!(session.selected_friend_id(), Some(ANTHONY));
    assert_eq!(session.friend(ANTHONY).expect("anthony").balance, Money::ZERO);
}

#[test]
fn confirm_split_rejects_form_for_another_friend() {
    let mut session = session();
    session.select_friend(ANTHONY).expect("select");
    let clark = session.friend(CLARK).expect("clark").clone();
    let mut form = BillSplitForm::new(&clark);
    form.set_bill_total_text("10").expect("bill");
    form.set_user_expense_text("5").expect("expense");

    assert_eq!(
        session.confirm_split(&form),
        Err(SplitError::SplitFormMismatch {
            form: CLARK,
            selected: ANTHONY,
        })
    );
    assert_eq!(session.friend(CLARK).expect("clark").balance, Money::from_units(-7));
}

#[test]
fn settings_roster_replaces_seed() {
    let settings = Settings {
        friends: Some(vec![settings::SeedFriend {
            id: FriendId(5),
            name: "Dana".to_string(),
            image: None,
            balance: Money::from_units(3),
        }]),
        ..Settings::default()
    };

    let session = Session::from_settings(&settings).expect("session");
    assert_eq!(session.friends().len(), 1);
    assert_eq!(session.friends()[0].image, "https://i.pravatar.cc/48?u=5");
}

#[test]
fn snapshot_reflects_state() {
    let mut session = session();
    session.select_friend(SARAH).expect("select");
    let snapshot = session.snapshot();

    assert_eq!(snapshot.friends.len(), 3);
    assert_eq!(snapshot.selected_friend_id, Some(SARAH));
    assert!(!snapshot.is_add_form_open);

    let json = serde_json::to_value(&snapshot).expect("json");
    assert_eq!(json["selected_friend_id"], 933372);
}

#[test]
fn settling_past_the_balance_range_is_rejected_without_change() {
    let mut session = session();

    let settle_max_bill = |session: &mut Session<SequentialIds>| {
        session.select_friend(ANTHONY).expect("select");
        let mut form = BillSplitForm::new(session.selected_friend().expect("anthony"));
        form.set_bill_total_text("92233720368547758.07").expect("bill");
        form.set_user_expense_text("0.01").expect("expense");
        session.confirm_split(&form)
    };

    let first = settle_max_bill(&mut session).expect("first split");
    assert_eq!(first, Money::from_cents(i64::MAX - 1));

    assert_eq!(settle_max_bill(&mut session), Err(SplitError::AmountOutOfRange));
    assert_eq!(session.friend(ANTHONY).expect("anthony").balance, first);
    assert_eq!(session.selected_friend_id(), Some(ANTHONY));
    assert_eq!(
        roster::rows(&session)[2].message(),
        format!("Anthony owes you ${first}")
    );
}

#[test]
fn seed_friends_with_blank_names_are_rejected() {
    let mut friends = seed_friends();
    friends[1].name = "  ".to_string();
    let err = Session::with_friends(friends, SequentialIds::starting_at(1)).expect_err("blank");
    assert_eq!(err, SplitError::EmptyName);
}
