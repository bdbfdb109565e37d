use super::*;

#[test]
fn test_presence_parse_case_insensitive() {
    assert_eq!("HAVE".parse::<Presence>().unwrap(), Presence::Have);
    assert_eq!(" need ".parse::<Presence>().unwrap(), Presence::Need);
    assert!("maybe".parse::<Presence>().is_err());
}

#[test]
fn test_presence_other() {
    assert_eq!(Presence::Have.other(), Presence::Need);
    assert_eq!(Presence::Need.other(), Presence::Have);
}

#[test]
fn test_item_json_defaults_presence() {
    let item: FridgeItem = serde_json::from_str(r#"{"id": 7, "name": "Eggs"}"#).unwrap();
    assert_eq!(item.id, ItemId(7));
    assert_eq!(item.presence, Presence::Have);

    let json = serde_json::to_string(&FridgeItem::new(3, "Milk", Presence::Need)).unwrap();
    assert_eq!(json, r#"{"id":3,"name":"Milk","presence":"need"}"#);
}
