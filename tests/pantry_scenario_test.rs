use mypantry::core::classifier::{classify, DEFAULT_EMOJI};
use mypantry::core::form::FormInput;
use mypantry::core::pantry::{Pantry, DEFAULT_REMOVAL_DELAY};
use mypantry::core::state::Outcome;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_milk_scenario_end_to_end() {
    let pantry = Pantry::new(DEFAULT_REMOVAL_DELAY, 1.0);

    let milk = pantry.submit(FormInput::new("Milk", "2")).unwrap();
    assert_eq!(milk.name, "Milk");
    assert_eq!(milk.quantity, 2.0);
    assert_eq!(milk.expiry_estimate, Some(7));

    assert_eq!(pantry.adjust(milk.id, -1.0), Outcome::Updated(milk.id));
    let after_first = pantry.get(milk.id).unwrap();
    assert_eq!(after_first.quantity, 1.0);
    assert!(!after_first.is_removing());
    assert_eq!(after_first.expiry_estimate, Some(7), "expiry is never recomputed");

    assert_eq!(pantry.adjust(milk.id, -1.0), Outcome::RemovalStarted(milk.id));
    let pending = pantry.get(milk.id).unwrap();
    assert!(pending.is_removing());
    assert!(pending.quantity > 0.0);

    tokio::time::sleep(Duration::from_millis(350)).await;
    assert!(pantry.get(milk.id).is_none());
    assert!(pantry.snapshot().is_empty());
}

#[tokio::test]
async fn test_submissions_append_exactly_one_entry() {
    let pantry = Pantry::new(DEFAULT_REMOVAL_DELAY, 1.0);
    let names = ["Eggs", "  organic bananas  ", "xyzzy", "Peanut Butter"];

    for (i, name) in names.iter().enumerate() {
        let entry = pantry.submit(FormInput::new(*name, "")).unwrap();
        assert_eq!(entry.name, name.trim());
        assert_eq!(entry.quantity, 1.0);
        assert_eq!(pantry.snapshot().len(), i + 1);
    }

    for blank in ["", " ", "\t\n"] {
        assert!(pantry.submit(FormInput::new(blank, "5")).is_none());
    }
    assert_eq!(pantry.snapshot().len(), names.len());

    let listed: Vec<String> = pantry
        .snapshot()
        .entries()
        .iter()
        .map(|e| e.name.clone())
        .collect();
    assert_eq!(listed, vec!["Eggs", "organic bananas", "xyzzy", "Peanut Butter"]);
}

#[tokio::test]
async fn test_identifiers_are_unique() {
    let pantry = Pantry::new(DEFAULT_REMOVAL_DELAY, 1.0);
    let a = pantry.submit(FormInput::new("Milk", "1")).unwrap();
    let b = pantry.submit(FormInput::new("Milk", "1")).unwrap();

    assert_ne!(a.id, b.id);
    assert_eq!(pantry.snapshot().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_removal_always_completes() {
    let pantry = Pantry::new(DEFAULT_REMOVAL_DELAY, 1.0);
    let eggs = pantry.submit(FormInput::new("Eggs", "1")).unwrap();
    let rice = pantry.submit(FormInput::new("Rice", "3")).unwrap();

    pantry.start_removal(eggs.id);
    // nothing brings it back during the window
    pantry.adjust(eggs.id, 5.0);
    assert!(pantry.get(eggs.id).unwrap().is_removing());
    assert_eq!(pantry.get(eggs.id).unwrap().quantity, 1.0);

    tokio::time::sleep(Duration::from_millis(150)).await;
    pantry.adjust(rice.id, -3.0);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(pantry.get(eggs.id).is_none());
    assert!(pantry.get(rice.id).unwrap().is_removing(), "rice started later");

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(pantry.snapshot().is_empty());
}

#[test]
fn test_lookup_properties() {
    assert_eq!(classify("Eggs"), classify("eggs"));
    assert_eq!(classify("organic bananas"), classify("banana"));

    let unknown = classify("xyzzy");
    assert_eq!(unknown.emoji, DEFAULT_EMOJI);
    assert_eq!(unknown.shelf_life_days, None);
}
