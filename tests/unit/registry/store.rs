use super::*;

#[test]
fn scalar_register_then_get() {
    let mut reg = HandleRegistry::new();
    assert!(reg.attach("centerStem", 7u32));
    assert_eq!(reg.handle("centerStem"), Some(&7));
    assert_eq!(reg.get("centerStem"), Some(&Slot::Handle(Some(7))));
}

#[test]
fn list_slot_register_then_get_parent() {
    let mut reg = HandleRegistry::new();
    reg.attach("a.0", 1u32);
    match reg.get("a") {
        Some(Slot::List(items)) => assert_eq!(items[0], Slot::Handle(Some(1))),
        other => panic!("expected list, got {other:?}"),
    }
    assert_eq!(reg.handle("a.0"), Some(&1));
}

#[test]
fn out_of_order_indices_pad_without_disturbing_siblings() {
    let mut reg = HandleRegistry::new();
    reg.attach("circles.2", 20u32);
    reg.attach("circles.0", 0);
    assert_eq!(reg.handle("circles.1"), None);
    reg.attach("circles.1", 10);
    assert_eq!(reg.handles("circles"), vec![&0, &10, &20]);
}

#[test]
fn re_registration_replaces_only_that_slot() {
    let mut reg = HandleRegistry::new();
    reg.attach("leafs.0", 1u32);
    reg.attach("leafs.1", 2);
    reg.attach("leafs.1", 3);
    reg.attach("stem", 9);
    assert_eq!(reg.handles("leafs"), vec![&1, &3]);
    assert_eq!(reg.handle("stem"), Some(&9));
}

#[test]
fn detach_leaves_an_empty_slot() {
    let mut reg = HandleRegistry::new();
    reg.attach("leafs.0", 1u32);
    reg.attach("leafs.1", 2);
    reg.detach("leafs.0");
    assert_eq!(reg.handles("leafs"), vec![&2]);
    assert_eq!(reg.get("leafs.0"), Some(&Slot::Handle(None)));
}

#[test]
fn nested_intermediate_containers_are_created() {
    let mut reg = HandleRegistry::new();
    reg.attach("outer.inner.3.leaf", 5u32);
    assert_eq!(reg.handle("outer.inner.3.leaf"), Some(&5));
    assert!(matches!(reg.get("outer.inner"), Some(Slot::List(v)) if v.len() == 4));
}

#[test]
fn shape_conflict_is_last_write_wins() {
    let mut reg = HandleRegistry::new();
    reg.attach("g", 1u32);
    reg.attach("g.0", 2);
    assert_eq!(reg.handle("g"), None);
    assert_eq!(reg.handles("g"), vec![&2]);
    reg.attach("g", 3);
    assert_eq!(reg.handle("g"), Some(&3));
}

#[test]
fn absent_and_malformed_reads_are_none() {
    let mut reg = HandleRegistry::<u32>::new();
    assert!(reg.get("missing").is_none());
    assert!(reg.handles("missing").is_empty());
    assert!(reg.get("a..b").is_none());
    assert!(!reg.attach("a..b", 1));
    assert_eq!(reg.revision(), 0);
}

#[test]
fn close_discards_and_blocks_writes() {
    let mut reg = HandleRegistry::new();
    reg.attach("path", 1u32);
    let before = reg.revision();
    reg.close();
    assert!(reg.is_closed());
    assert!(reg.get("path").is_none());
    assert!(!reg.attach("path", 2));
    assert_eq!(reg.revision(), before);
    assert_eq!(reg.attached_count(), 0);
}

#[test]
fn oversized_list_indices_are_dropped() {
    let mut reg = HandleRegistry::<u32>::new();
    assert!(!reg.register("leafs.18446744073709551615", Some(1)));
    assert!(!reg.register("leafs.10000000000", Some(1)));
    assert!(!reg.register(&format!("leafs.{}", MAX_LIST_INDEX + 1), Some(1)));
    let unbounded = HandlePath::parse("leafs").unwrap().child_index(usize::MAX);
    assert!(!reg.register_path(&unbounded, Some(1)));
    assert_eq!(reg.revision(), 0);
    assert!(reg.get("leafs").is_none());

    assert!(reg.register(&format!("leafs.{MAX_LIST_INDEX}"), Some(7)));
    assert_eq!(reg.handles("leafs"), vec![&7]);
}
