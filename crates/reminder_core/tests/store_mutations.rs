use chrono::NaiveDate;
use reminder_core::{
    FixedClock, Reminder, ReminderStore, ReminderValidationError, StoreError, StoreErrorKind,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

fn setup() -> (ReminderStore<FixedClock>, Vec<u64>) {
    let mut store = ReminderStore::new(FixedClock::at_date(day(1)));
    let ids = vec![
        store.insert("A", day(5)).unwrap(),
        store.insert("B", day(1)).unwrap(),
        store.insert("C", day(10)).unwrap(),
        store.insert("D", day(5)).unwrap(),
    ];
    (store, ids)
}

#[test]
fn edit_changes_only_target_text() {
    let (mut store, ids) = setup();
    let before = store.snapshot();

    store.edit_text(ids[0], "A edited").unwrap();

    let after = store.snapshot();
    assert_eq!(after.len(), before.len());
    for (old, new) in before.iter().zip(after.iter()) {
        assert_eq!(old.id(), new.id());
        assert_eq!(old.date(), new.date());
        if old.id() == ids[0] {
            assert_eq!(new.text(), "A edited");
        } else {
            assert_eq!(old.text(), new.text());
        }
    }
}

#[test]
fn edit_rejects_blank_text_and_keeps_store() {
    let (mut store, ids) = setup();
    let before = store.snapshot();

    let err = store.edit_text(ids[1], "  ").unwrap_err();
    assert_eq!(
        err,
        StoreError::Validation(ReminderValidationError::EmptyText)
    );
    assert_eq!(err.kind(), StoreErrorKind::InvalidArgument);
    assert_eq!(store.snapshot(), before);
}

#[test]
fn remove_by_id_drops_exactly_one_record() {
    let (mut store, ids) = setup();
    let before = store.snapshot();

    store.remove_by_id(ids[0]).unwrap();

    let expected: Vec<Reminder> = before.into_iter().filter(|r| r.id() != ids[0]).collect();
    assert_eq!(store.snapshot(), expected);
    assert!(store.get(ids[0]).is_none());
}

#[test]
fn unknown_ids_fail_with_not_found() {
    let (mut store, ids) = setup();
    store.remove_by_id(ids[2]).unwrap();
    let before = store.snapshot();

    for missing in [ids[2], 999] {
        let err = store.remove_by_id(missing).unwrap_err();
        assert_eq!(err, StoreError::NotFound(missing));
        assert_eq!(err.kind(), StoreErrorKind::NotFound);

        let err = store.edit_text(missing, "ghost").unwrap_err();
        assert_eq!(err, StoreError::NotFound(missing));
    }
    assert_eq!(store.snapshot(), before);
}

#[test]
fn insert_rejects_blank_text() {
    let mut store = ReminderStore::new(FixedClock::at_date(day(1)));
    let err = store.insert("\n\t", day(2)).unwrap_err();

    assert_eq!(err.kind(), StoreErrorKind::InvalidArgument);
    assert_eq!(err.to_string(), "reminder text must not be empty");
    assert!(store.is_empty());
}
