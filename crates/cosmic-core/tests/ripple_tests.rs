// Host-side tests for the ripple expansion/decay law.

use cosmic_core::Ripple;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_ripple(seed: u64) -> Ripple {
    let mut rng = StdRng::seed_from_u64(seed);
    Ripple::new(50.0, 50.0, &mut rng)
}

#[test]
fn construction_draws_stay_in_documented_ranges() {
    for seed in 0..20 {
        let r = make_ripple(seed);
        assert_eq!(r.origin, Vec2::new(50.0, 50.0));
        assert_eq!(r.radius, 0.0);
        assert_eq!(r.age, 0.0);
        assert!((200.0..300.0).contains(&r.max_radius));
        assert!((5.0..10.0).contains(&r.strength));
        assert!((60.0..90.0).contains(&r.max_age));
    }
}

#[test]
fn radius_grows_monotonically_to_max() {
    let mut r = make_ripple(1);
    let max_radius = r.max_radius;
    let mut prev_radius = r.radius;
    let mut alive = true;
    while alive {
        alive = r.advance();
        assert!(r.radius >= prev_radius, "radius decreased while alive");
        prev_radius = r.radius;
    }
    // At expiry age >= max_age, so the front has reached the full radius.
    assert!(r.radius >= max_radius);
}

#[test]
fn strength_is_non_increasing_over_lifetime() {
    let mut r = make_ripple(2);
    let mut prev = r.strength;
    while r.advance() {
        assert!(r.strength <= prev);
        prev = r.strength;
    }
}

#[test]
fn expires_on_first_tick_at_or_past_max_age() {
    let r0 = make_ripple(3);
    let expected_ticks = r0.max_age.ceil() as usize;

    let mut r = r0;
    let mut ticks = 0;
    while r.advance() {
        ticks += 1;
        assert!(ticks < 1000, "ripple never expired");
    }
    ticks += 1; // the advance that returned false
    assert_eq!(ticks, expected_ticks);
}

#[test]
fn force_applies_only_inside_the_annulus() {
    let mut r = make_ripple(4);
    r.radius = 100.0;
    r.strength = 5.0;

    // Deep inside the ring: no force.
    assert!(r.force_at(Vec2::new(50.0 + 50.0, 50.0)).is_none());
    // At the origin: skipped (no direction).
    assert!(r.force_at(Vec2::new(50.0, 50.0)).is_none());
    // On the front itself: excluded (d < radius is strict).
    assert!(r.force_at(Vec2::new(150.0, 50.0)).is_none());
    // Outside: no force.
    assert!(r.force_at(Vec2::new(250.0, 50.0)).is_none());

    // Just behind the front: radially outward, magnitude strength/(d+1).
    let force = r.force_at(Vec2::new(140.0, 50.0)).expect("inside annulus");
    assert!(force.x > 0.0 && force.y.abs() < 1e-6);
    assert!((force.length() - 5.0 / 91.0).abs() < 1e-5);
}

#[test]
fn fade_decays_linearly_with_age() {
    let mut r = make_ripple(5);
    assert!((r.fade() - 1.0).abs() < 1e-6);
    r.age = r.max_age / 2.0;
    assert!((r.fade() - 0.5).abs() < 1e-6);
    r.age = r.max_age;
    assert!(r.fade().abs() < 1e-6);
}
