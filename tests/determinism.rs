use devmatch::{DeviceDescriptor, MatchRecord, MatchTable, match_device};

fn board_table() -> MatchTable<&'static str> {
    MatchTable::new()
        .with_record(MatchRecord::with_data("vendor,chip-a", "chip-a-core"))
        .with_record(MatchRecord::with_data("vendor,chip-b", "chip-b-core"))
        .with_record(MatchRecord::with_data("vendor,chip-b2", "chip-b-core"))
}

#[test]
fn repeated_lookups_return_the_identical_record() {
    let table = board_table();
    let dev = DeviceDescriptor::new("uart0", ["vendor,chip-b", "vendor,chip-a"]);

    let first = match_device(&table, &dev).expect("uart0 should match");
    for _ in 0..100 {
        let again = match_device(&table, &dev).expect("uart0 should match");
        assert!(std::ptr::eq(again.record, first.record));
        assert_eq!(again.candidate_index, first.candidate_index);
        assert_eq!(again.key_index, first.key_index);
    }
}

#[test]
fn device_preference_beats_table_order() {
    let table = board_table();

    // chip-b appears later in the table but is the device's first choice.
    let dev = DeviceDescriptor::new("uart0", ["vendor,chip-b", "vendor,chip-a"]);
    let hit = match_device(&table, &dev).expect("uart0 should match");
    assert_eq!(hit.matched_key(), "vendor,chip-b");
    assert_eq!(hit.candidate_index, 1);
    assert_eq!(hit.key_index, 0);

    // Same table, reversed preference: chip-a wins now.
    let dev = DeviceDescriptor::new("uart1", ["vendor,chip-a", "vendor,chip-b"]);
    let hit = match_device(&table, &dev).expect("uart1 should match");
    assert_eq!(hit.matched_key(), "vendor,chip-a");
    assert_eq!(hit.candidate_index, 0);
}

#[test]
fn free_function_and_method_agree() {
    let table = board_table();
    let dev = DeviceDescriptor::new("uart0", ["vendor,chip-b2"]);

    let via_fn = match_device(&table, &dev).expect("should match");
    let via_method = table.match_device(&dev).expect("should match");
    assert_eq!(via_fn.candidate_index, via_method.candidate_index);
    assert_eq!(via_fn.matched_key(), via_method.matched_key());
}

#[test]
fn unknown_device_resolves_to_none_not_error() {
    let table = board_table();
    let dev = DeviceDescriptor::new("mystery0", ["othervendor,unknown-chip"]);
    assert!(match_device(&table, &dev).is_none());
}
