use super::*;

#[test]
fn parses_whole_and_fractional_amounts() {
    assert_eq!("50".parse::<Money>().expect("whole"), Money::from_units(50));
    assert_eq!("12.5".parse::<Money>().expect("one digit"), Money::from_cents(1250));
    assert_eq!("12.05".parse::<Money>().expect("two digits"), Money::from_cents(1205));
    assert_eq!(" .75 ".parse::<Money>().expect("leading dot"), Money::from_cents(75));
    assert_eq!("-7".parse::<Money>().expect("negative"), Money::from_units(-7));
}

#[test]
fn rejects_malformed_amounts() {
    for raw in ["", ".", "abc", "1.234", "1,5", "--3", "4e2"] {
        assert_eq!(
            raw.parse::<Money>(),
            Err(SplitError::InvalidAmount(raw.trim().to_string())),
            "{raw:?} should not parse"
        );
    }
}

#[test]
fn form_parsing_rejects_negative_amounts() {
    assert_eq!(
        Money::parse_non_negative("-3"),
        Err(SplitError::NegativeAmount("-3".to_string()))
    );
    assert_eq!(Money::parse_non_negative("0"), Ok(Money::ZERO));
}

#[test]
fn formats_whole_amounts_without_cents() {
    assert_eq!(Money::from_units(7).to_string(), "7");
    assert_eq!(Money::from_units(-7).to_string(), "-7");
    assert_eq!(Money::from_cents(750).to_string(), "7.50");
    assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
}

#[test]
fn arithmetic_is_exact() {
    let balance = Money::from_cents(10) + Money::from_cents(20);
    assert_eq!(balance, Money::from_cents(30));
    assert_eq!(-Money::from_units(40), Money::from_units(-40));
    assert_eq!(Money::from_units(100) - Money::from_units(40), Money::from_units(60));
    assert_eq!(Money::from_units(-7).abs(), Money::from_units(7));
}

#[test]
fn money_deserializes_from_units_or_text() {
    #[derive(Debug, Deserialize)]
    struct Row {
        balance: Money,
    }

    let row: Row = toml::from_str("balance = -7").expect("units");
    assert_eq!(row.balance, Money::from_units(-7));

    let row: Row = serde_json::from_str(r#"{"balance":"12.50"}"#).expect("text");
    assert_eq!(row.balance, Money::from_cents(1250));

    assert!(serde_json::from_str::<Row>(r#"{"balance":"twelve"}"#).is_err());
}

#[test]
fn friend_serializes_balance_as_text() {
    let friend = Friend {
        id: FriendId(118836),
        name: "Clark".to_string(),
        image: "https://i.pravatar.cc/48?u=118836".to_string(),
        balance: Money::from_units(-7),
    };

    let json = serde_json::to_value(&friend).expect("serialize");
    assert_eq!(json["id"], 118836);
    assert_eq!(json["balance"], "-7");
}

#[test]
fn payer_defaults_to_user() {
    assert_eq!(Payer::default(), Payer::User);
    assert_eq!(serde_json::to_string(&Payer::Friend).expect("payer"), "\"friend\"");
}

#[test]
fn checked_arithmetic_stops_at_the_range_edges() {
    let max = Money::from_cents(i64::MAX);
    assert_eq!(max.checked_add(Money::from_cents(1)), None);
    assert_eq!(Money::from_cents(-i64::MAX).checked_sub(Money::from_cents(1)), None);
    assert_eq!(
        Money::from_cents(-1).checked_add(Money::from_cents(-i64::MAX)),
        None
    );
    assert_eq!(
        Money::from_units(5).checked_sub(Money::from_units(7)),
        Some(Money::from_units(-2))
    );
    assert_eq!(Money::from_cents(i64::MIN).abs(), max);
}
