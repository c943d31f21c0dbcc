use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use versiculo_core::{
    ChangePhase, CursorError, CursorFlags, Direction, Granularity, KeyChange, KeyError, Locale,
    MemoryModule, Module, Position, VerseKeyEngine, Versification,
};

fn bible() -> Rc<MemoryModule> {
    Rc::new(MemoryModule::bible("KJV"))
}

fn old_testament() -> Rc<MemoryModule> {
    Rc::new(MemoryModule::bible("OT").with_testaments(true, false))
}

fn engine_for(module: &Rc<MemoryModule>) -> VerseKeyEngine {
    let module: Rc<dyn Module> = module.clone();
    VerseKeyEngine::bound(module)
}

fn record(key: &mut VerseKeyEngine) -> Rc<RefCell<Vec<KeyChange>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    key.subscribe(move |change| sink.borrow_mut().push(*change));
    events
}

#[test]
fn test_out_of_range_key_clamps_to_module_end() {
    let module = old_testament();
    let mut key = engine_for(&module);

    assert!(!key.set_key("Mal 5:1"));
    assert_eq!(key.raw_key(), "Malachi 4:6");
    assert_eq!(key.position(), Position::new(1, 39, 4, 6));
}

#[test]
fn test_repeated_out_of_range_key_clamps_the_same_way() {
    let module = old_testament();
    let upper = module.bounds().upper;
    let mut key = engine_for(&module);

    assert!(!key.set_key("Rev 5:1"));
    let first = key.position();
    assert!(!key.set_key("Rev 5:1"));

    assert_eq!(first, upper);
    assert_eq!(key.position(), upper);
    assert_eq!(key.raw_key(), "Malachi 4:6");
}

#[test]
fn test_new_testament_key_on_old_testament_module() {
    let module = old_testament();
    let mut key = engine_for(&module);

    assert_eq!(
        key.try_set_key("John 3:16"),
        Err(KeyError::Range {
            clamped_to: Position::new(1, 39, 4, 6)
        })
    );
}

#[test]
fn test_book_rollover_between_testaments() {
    let mut key = VerseKeyEngine::unbound();

    assert!(key.set_key("Mal 3:4"));
    assert!(key.next(Granularity::Book));
    assert_eq!(key.raw_key(), "Matthew 1:1");

    assert!(key.previous(Granularity::Book));
    assert_eq!(key.raw_key(), "Malachi 1:1");
}

#[test]
fn test_book_steps_stop_at_canon_ends() {
    let mut key = VerseKeyEngine::unbound();

    assert!(key.set_key("Gen 5:5"));
    assert!(!key.previous(Granularity::Book));
    assert_eq!(key.raw_key(), "Genesis 5:5");

    assert!(key.set_key("Rev 2:2"));
    assert_eq!(
        key.step(Direction::Forward, Granularity::Book),
        Err(KeyError::NavigationTerminal {
            direction: Direction::Forward,
            granularity: Granularity::Book
        })
    );
    assert_eq!(key.raw_key(), "Revelation 2:2");
}

#[test]
fn test_book_step_into_missing_testament_clamps() {
    let module = old_testament();
    let mut key = engine_for(&module);

    assert!(key.set_key("Mal 2:1"));
    assert!(!key.next(Granularity::Book));
    assert_eq!(key.raw_key(), "Malachi 4:6");
}

#[test]
fn test_errors_do_not_leak_into_next_call() {
    let mut key = VerseKeyEngine::unbound();

    assert!(!key.set_key("Rev 99:1"));
    assert!(key.previous(Granularity::Verse));
    assert_eq!(key.raw_key(), "Revelation 22:20");
    assert!(key.pop_error().is_none());
}

#[test]
fn test_failed_set_key_does_not_fail_the_next_one() {
    let mut key = VerseKeyEngine::unbound();
    assert!(!key.set_key("Hezekiah 1:1"));
    assert!(key.set_key("John 3:16"));
    assert_eq!(key.raw_key(), "John 3:16");

    assert!(!key.set_key("Rev 99:1"));
    assert!(key.set_key("John 3:16"));
    assert_eq!(key.raw_key(), "John 3:16");

    let module = old_testament();
    let mut key = engine_for(&module);
    assert!(!key.set_key("John 3:16"));
    assert!(key.set_key("Ps 23:1"));
    assert_eq!(key.raw_key(), "Psalms 23:1");
    assert!(key.pop_error().is_none());
}

#[test]
fn test_raw_key_ignores_locale() {
    let module = Rc::new(MemoryModule::bible("Luther").with_locale(Arc::new(Locale::german())));
    let mut key = engine_for(&module);

    assert!(key.set_key("1. Mose 3:15"));
    assert_eq!(key.key(), "1. Mose 3:15");
    assert_eq!(key.raw_key(), "Genesis 3:15");

    module.set_locale(Arc::new(Locale::spanish()));
    assert_eq!(key.key(), "Génesis 3:15");
    assert_eq!(key.raw_key(), "Genesis 3:15");
    assert_eq!(key.osis_ref(), "Gen.3.15");
}

#[test]
fn test_localized_book_change() {
    let module = Rc::new(MemoryModule::bible("RVR").with_locale(Arc::new(Locale::spanish())));
    let mut key = engine_for(&module);

    assert_eq!(key.book(Some("Apocalipsis")).as_deref(), Some("Apocalipsis"));
    assert_eq!(key.raw_key(), "Revelation 1:1");
}

#[test]
fn test_verse_step_notifies_once() {
    let module = bible();
    let mut key = engine_for(&module);
    assert!(key.set_key("Gen 1:31"));
    let events = record(&mut key);

    assert!(key.next(Granularity::Verse));
    assert_eq!(
        *events.borrow(),
        vec![
            KeyChange {
                phase: ChangePhase::Before,
                position: Position::new(1, 1, 1, 31)
            },
            KeyChange {
                phase: ChangePhase::After,
                position: Position::new(1, 1, 2, 1)
            },
        ]
    );
}

#[test]
fn test_verse_steps_skip_linked_verses() {
    let module = Rc::new(
        MemoryModule::bible("KJV")
            .with_link(Position::new(1, 1, 1, 2))
            .with_link(Position::new(1, 1, 1, 3)),
    );
    let mut key = engine_for(&module);
    assert!(key.set_key("Gen 1:1"));

    assert!(key.next(Granularity::Verse));
    assert_eq!(key.raw_key(), "Genesis 1:4");
    assert!(key.previous(Granularity::Verse));
    assert_eq!(key.raw_key(), "Genesis 1:1");
}

#[test]
fn test_detached_module_steps_by_arithmetic() {
    let module = Rc::new(
        MemoryModule::bible("KJV")
            .with_link(Position::new(1, 1, 1, 2))
            .detached(),
    );
    let mut key = engine_for(&module);
    assert!(key.set_key("Gen 1:1"));

    assert!(key.next(Granularity::Verse));
    assert_eq!(key.raw_key(), "Genesis 1:2");
}

#[test]
fn test_cursor_flags_restored_after_step() {
    let module = bible();
    let mut key = engine_for(&module);
    let original = CursorFlags::default();

    assert!(key.set_key("Ps 23:1"));
    assert!(key.next(Granularity::Verse));
    assert_eq!(key.raw_key(), "Psalms 23:2");
    assert_eq!(module.cursor().unwrap().flags(), original);
}

#[test]
fn test_failed_cursor_step_leaves_everything_alone() {
    let module = old_testament();
    let mut key = engine_for(&module);
    assert!(key.set_key("Mal 4:6"));
    let events = record(&mut key);

    assert_eq!(
        key.step(Direction::Forward, Granularity::Verse),
        Err(KeyError::ModuleCursor(CursorError::OutOfBounds))
    );
    assert_eq!(key.raw_key(), "Malachi 4:6");
    assert!(events.borrow().is_empty());

    let cursor = module.cursor().unwrap();
    assert_eq!(cursor.flags(), CursorFlags::default());
    assert_eq!(cursor.text(), "Malachi 4:6");
}

#[test]
fn test_engines_share_a_module() {
    let module = bible();
    let mut first = engine_for(&module);
    let mut second = engine_for(&module);

    assert!(first.set_key("John 1:1"));
    assert!(second.set_key("Acts 1:1"));
    assert!(first.next(Granularity::Verse));
    assert!(second.next(Granularity::Verse));

    assert_eq!(first.raw_key(), "John 1:2");
    assert_eq!(second.raw_key(), "Acts 1:2");
}

#[test]
fn test_rebind_to_other_versification() {
    let tiny = Versification::from_json(
        r#"{
            "name": "Tiny",
            "old_testament": [{"osis": "Gen", "name": "Genesis", "verses": [3, 2]}],
            "new_testament": [{"osis": "Rev", "name": "Revelation", "verses": [4]}]
        }"#,
    )
    .unwrap();
    let module: Rc<dyn Module> =
        Rc::new(MemoryModule::bible("Tiny").with_versification(Arc::new(tiny)));

    let mut key = VerseKeyEngine::unbound();
    assert!(key.set_key("John 3:16"));
    key.rebind(module).unwrap();

    assert_eq!(key.versification().name(), "Tiny");
    assert_eq!(key.raw_key(), "Revelation 1:4");

    assert!(key.set_key("Gen 1:4"));
    assert_eq!(key.raw_key(), "Genesis 2:1");
    assert!(key.next(Granularity::Chapter));
    assert_eq!(key.raw_key(), "Revelation 1:1");
    assert!(!key.next(Granularity::Chapter));
    assert_eq!(key.raw_key(), "Revelation 1:4");
}
