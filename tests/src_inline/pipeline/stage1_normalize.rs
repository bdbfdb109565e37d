use super::*;

fn catalog() -> Vec<FridgeItem> {
    vec![
        FridgeItem::new(1, "Milk", Presence::Have),
        FridgeItem::new(2, "milk ", Presence::Need),
        FridgeItem::new(3, "MILK", Presence::Need),
        FridgeItem::new(4, "Milkshake", Presence::Need),
    ]
}

fn ids(items: &[FridgeItem]) -> Vec<u64> {
    items.iter().map(|i| i.id.0).collect()
}

#[test]
fn test_normalize_trims_and_lowercases() {
    assert_eq!(normalize_name("  Whole MILK \t"), "whole milk");
    assert_eq!(normalize_name("Äpfel"), "äpfel");
    assert_eq!(normalize_name("   "), "");
}

#[test]
fn test_index_caches_normalized_names() {
    let index = NameIndex::build(&catalog());
    assert_eq!(index.len(), 4);
    let names: Vec<&str> = index.entries().iter().map(|e| e.normalized.as_str()).collect();
    assert_eq!(names, vec!["milk", "milk", "milk", "milkshake"]);
    assert_eq!(index.entries()[1].item.name, "milk ");
}

#[test]
fn test_same_name_other_presence() {
    let index = NameIndex::build(&catalog());
    assert_eq!(ids(&index.same_name(" MILK", Presence::Have, None)), vec![2, 3]);
    assert_eq!(ids(&index.same_name("milk", Presence::Need, None)), vec![1]);
    assert_eq!(
        ids(&index.same_name("milk", Presence::Have, Some(ItemId(2)))),
        vec![3]
    );
    assert!(index.same_name("cream", Presence::Have, None).is_empty());
}

#[test]
fn test_get_by_id() {
    let index = NameIndex::build(&catalog());
    assert_eq!(index.get(ItemId(4)).map(|i| i.name.as_str()), Some("Milkshake"));
    assert!(index.get(ItemId(99)).is_none());
    assert!(NameIndex::build(&[]).is_empty());
}
