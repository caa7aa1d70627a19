//! Theme, visit counter and expiring values on disk.

#![allow(clippy::unwrap_used)]

use chrono::{Duration, TimeZone, Utc};
use rooftop_core::Theme;
use rooftop_integration_tests::TestOrigin;
use rooftop_storefront::app::Effect;
use rooftop_storefront::controllers::dark_mode::THEME_STORAGE_KEY;
use rooftop_storefront::controllers::{VisitGreeting, VisitorCounter};
use rooftop_storefront::storage::ExpiringStore;

#[test]
fn test_first_load_saves_light_theme() {
    let origin = TestOrigin::new().unwrap();
    let (page, effects) = origin.load_page().unwrap();

    assert_eq!(page.theme(), Theme::Light);
    assert!(matches!(
        effects.first(),
        Some(Effect::Theme {
            theme: Theme::Light,
            icon: "🌙",
            ..
        })
    ));
    let stored = origin.open_store().unwrap().get(THEME_STORAGE_KEY).unwrap();
    assert_eq!(stored.as_deref(), Some("light"));
}

#[test]
fn test_tenth_visit_gets_a_toast() {
    let origin = TestOrigin::new().unwrap();
    for _ in 0..9 {
        origin.load_page().unwrap();
    }

    let (_, effects) = origin.load_page().unwrap();
    assert!(effects.iter().any(|e| matches!(
        e,
        Effect::Toast(t) if t.message.contains("10x")
    )));
}

#[test]
fn test_visit_count_survives_reopen() {
    let origin = TestOrigin::new().unwrap();
    let counter = VisitorCounter::new(ExpiringStore::new(origin.open_store().unwrap()));
    assert_eq!(counter.record_visit(), (1, VisitGreeting::Welcome));

    let counter = VisitorCounter::new(ExpiringStore::new(origin.open_store().unwrap()));
    assert_eq!(counter.record_visit().0, 2);
}

#[test]
fn test_expired_value_is_gone_after_reopen() {
    let origin = TestOrigin::new().unwrap();
    let written = Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap();

    let store = ExpiringStore::new(origin.open_store().unwrap());
    store.set_at("promo_seen", &true, Some(7), written).unwrap();

    let store = ExpiringStore::new(origin.open_store().unwrap());
    assert_eq!(
        store.get_at::<bool>("promo_seen", written + Duration::days(6)),
        Some(true)
    );
    assert_eq!(
        store.get_at::<bool>("promo_seen", written + Duration::days(8)),
        None
    );
    assert_eq!(
        store.get_at::<bool>("promo_seen", written + Duration::days(1)),
        None
    );
}
