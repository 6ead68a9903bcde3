// Host-side tests for single-particle physics.

use cosmic_core::{ColorTheme, Particle, ParticleConfig};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_config() -> ParticleConfig {
    ParticleConfig::default()
}

fn make_particle(x: f32, y: f32, config: &ParticleConfig, seed: u64) -> Particle {
    let mut rng = StdRng::seed_from_u64(seed);
    Particle::new(x, y, config, &mut rng)
}

#[test]
fn wrap_invariant_holds_for_any_velocity() {
    let config = make_config();
    let (width, height) = (100.0, 100.0);
    let velocities = [
        Vec2::new(1000.0, -777.0),
        Vec2::new(-5000.0, 5000.0),
        Vec2::new(0.0, 0.0),
        Vec2::new(-0.3, 99.9),
        Vec2::new(101.0, -101.0),
    ];
    for (i, v) in velocities.iter().enumerate() {
        let mut p = make_particle(50.0, 50.0, &config, i as u64);
        p.velocity = *v;
        for _ in 0..5 {
            p.update(width, height);
            assert!(
                (0.0..=width).contains(&p.position.x),
                "x out of bounds: {} after velocity {:?}",
                p.position.x,
                v
            );
            assert!(
                (0.0..=height).contains(&p.position.y),
                "y out of bounds: {} after velocity {:?}",
                p.position.y,
                v
            );
        }
    }
}

#[test]
fn age_increases_by_one_per_update() {
    let config = make_config();
    let mut p = make_particle(50.0, 50.0, &config, 1);
    assert_eq!(p.age, 0.0);
    for i in 1..=100 {
        p.update(500.0, 500.0);
        assert_eq!(p.age, i as f32);
    }
}

#[test]
fn should_reset_exactly_at_max_age() {
    let config = make_config();
    let mut p = make_particle(50.0, 50.0, &config, 2);
    p.age = p.max_age - 1.0;
    assert!(!p.should_reset());
    p.age = p.max_age;
    assert!(p.should_reset());
    p.age = p.max_age + 1.0;
    assert!(p.should_reset());
}

#[test]
fn reset_rewinds_age_and_preserves_visual_identity() {
    let config = make_config();
    let mut rng = StdRng::seed_from_u64(3);
    let mut p = Particle::new(10.0, 10.0, &config, &mut rng);
    let saturation = p.saturation;
    let lightness = p.lightness;
    let alpha = p.alpha;
    let max_size = p.max_size;

    p.age = p.max_age;
    p.reset(200.0, 200.0, &config, &mut rng);

    assert_eq!(p.age, 0.0);
    assert!((0.0..=200.0).contains(&p.position.x));
    assert!((0.0..=200.0).contains(&p.position.y));
    assert!(p.max_age >= 1000.0 && p.max_age < 3000.0);
    // Saturation, lightness, alpha, and the size envelope survive resets.
    assert_eq!(p.saturation, saturation);
    assert_eq!(p.lightness, lightness);
    assert_eq!(p.alpha, alpha);
    assert_eq!(p.max_size, max_size);
}

#[test]
fn reset_redraws_hue_from_current_theme() {
    let mut config = make_config();
    config.color_theme = ColorTheme::Sunset;
    let mut rng = StdRng::seed_from_u64(4);
    let mut p = Particle::new(10.0, 10.0, &config, &mut rng);
    p.reset(100.0, 100.0, &config, &mut rng);
    assert!((10.0..60.0).contains(&p.hue));
}

#[test]
fn construction_draws_stay_in_documented_ranges() {
    let config = make_config();
    for seed in 0..20 {
        let p = make_particle(0.0, 0.0, &config, seed);
        assert!((70.0..100.0).contains(&p.saturation));
        assert!((50.0..80.0).contains(&p.lightness));
        assert!((0.6..1.0).contains(&p.alpha));
        assert!(p.size > 0.0);
        assert!(p.max_size >= p.size * 1.2 && p.max_size < p.size * 2.0 + 1e-3);
        assert!((1000.0..3000.0).contains(&p.max_age));
        assert!((220.0..280.0).contains(&p.hue)); // cosmic default
        assert!(p.velocity.x.abs() <= config.speed * 0.5);
        assert!(p.velocity.y.abs() <= config.speed * 0.5);
    }
}

#[test]
fn size_pulse_stays_within_envelope() {
    let config = make_config();
    let mut p = make_particle(50.0, 50.0, &config, 5);
    for _ in 0..700 {
        p.update(1000.0, 1000.0);
        assert!(p.size <= p.max_size + 1e-4);
        assert!(p.size >= p.max_size * 0.6 - 1e-4);
    }
}

#[test]
fn pointer_core_attracts_over_ten_ticks() {
    let mut config = make_config();
    config.pointer_influence_radius = 300.0;
    config.pointer_influence_strength = 2.0;
    config.speed = 0.0;

    let pointer = Vec2::new(60.0, 50.0);
    let influenced0 = make_particle(50.0, 50.0, &config, 6); // 10 px away, inside 0.3 * radius
    let mut influenced = influenced0.clone();
    let mut control = influenced0;

    for _ in 0..10 {
        influenced.apply_pointer_influence(pointer.x, pointer.y, &config);
        influenced.update(1000.0, 1000.0);
        control.update(1000.0, 1000.0);
    }
    // Identical orbital drift in both runs, so any difference is the
    // pointer force alone.
    assert!(influenced.position.distance(pointer) < control.position.distance(pointer));
}

#[test]
fn pointer_halo_repels_over_ten_ticks() {
    let mut config = make_config();
    config.pointer_influence_radius = 150.0;
    config.pointer_influence_strength = 2.0;
    config.speed = 0.0;

    let pointer = Vec2::new(150.0, 50.0);
    let influenced0 = make_particle(50.0, 50.0, &config, 7); // 100 px away: halo
    let mut influenced = influenced0.clone();
    let mut control = influenced0;

    for _ in 0..10 {
        influenced.apply_pointer_influence(pointer.x, pointer.y, &config);
        influenced.update(1000.0, 1000.0);
        control.update(1000.0, 1000.0);
    }
    assert!(influenced.position.distance(pointer) > control.position.distance(pointer));
}

#[test]
fn pointer_influence_skipped_at_zero_distance_and_out_of_range() {
    let config = make_config();
    let mut p = make_particle(50.0, 50.0, &config, 8);

    p.apply_pointer_influence(50.0, 50.0, &config); // d = 0: singularity skipped
    assert_eq!(p.acceleration, Vec2::ZERO);

    p.apply_pointer_influence(50.0 + config.pointer_influence_radius, 50.0, &config); // d = radius
    assert_eq!(p.acceleration, Vec2::ZERO);

    p.apply_pointer_influence(900.0, 900.0, &config); // far outside
    assert_eq!(p.acceleration, Vec2::ZERO);
}

#[test]
fn apply_force_accumulates_until_update_clears() {
    let config = make_config();
    let mut p = make_particle(50.0, 50.0, &config, 9);
    p.apply_force(Vec2::new(0.5, 0.0));
    p.apply_force(Vec2::new(0.25, -1.0));
    assert_eq!(p.acceleration, Vec2::new(0.75, -1.0));
    p.update(1000.0, 1000.0);
    assert_eq!(p.acceleration, Vec2::ZERO);
}

#[test]
fn distance_to_is_euclidean() {
    let config = make_config();
    let mut a = make_particle(0.0, 0.0, &config, 10);
    let mut b = make_particle(0.0, 0.0, &config, 11);
    a.position = Vec2::new(0.0, 0.0);
    b.position = Vec2::new(3.0, 4.0);
    assert!((a.distance_to(&b) - 5.0).abs() < 1e-6);
    assert!((b.distance_to(&a) - 5.0).abs() < 1e-6);
}
