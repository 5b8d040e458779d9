use orbital_nexus::simulation::forces::NewtonianGravity;
use orbital_nexus::simulation::integrator::gravity_set;
use orbital_nexus::simulation::params::{PhysicsConfig, SOFTENING, TRAIL_MIN_SPACING};
use orbital_nexus::simulation::states::{distance, BodyId, CelestialBody, NVec2};
use orbital_nexus::{step, total_momentum, Scenario, ScenarioConfig};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Body at `(x, y)` with velocity `(vx, vy)` and an empty trail
pub fn body(id: &str, mass: f64, pos: [f64; 2], vel: [f64; 2]) -> CelestialBody {
    CelestialBody::new(
        BodyId::new(id),
        mass,
        mass.sqrt() * 0.5,
        NVec2::new(pos[0], pos[1]),
        NVec2::new(vel[0], vel[1]),
        "#ffffff",
    )
}

/// Build a simple 2-body system separated along the x-axis
pub fn two_body_system(dist: f64, m1: f64, m2: f64) -> Vec<CelestialBody> {
    vec![
        body("a", m1, [-dist / 2.0, 0.0], [0.0, 0.0]),
        body("b", m2, [dist / 2.0, 0.0], [0.0, 0.0]),
    ]
}

/// Default physics parameters for tests
pub fn test_config() -> PhysicsConfig {
    PhysicsConfig {
        gravitational_constant: 0.5,
        time_step: 0.5,
        trail_length: 50,
        elasticity: 0.8,
    }
}

fn forces_on(bodies: &[CelestialBody], p: &PhysicsConfig) -> Vec<NVec2> {
    let mut out = vec![NVec2::zeros(); bodies.len()];
    gravity_set(p).accumulate_forces(bodies, &mut out);
    out
}

/// Pinned star with one orbiting planet, the reference two-body case
fn pinned_pair() -> Vec<CelestialBody> {
    vec![
        body("star", 2000.0, [0.0, 0.0], [0.0, 0.0]).locked(true),
        body("planet", 100.0, [300.0, 0.0], [0.0, 1.8]),
    ]
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_newton_third_law() {
    let bodies = two_body_system(10.0, 2.0, 3.0);
    let f = forces_on(&bodies, &test_config());

    assert_eq!(f[0], -f[1], "Forces are not equal and opposite");
}

#[test]
fn pair_force_is_antisymmetric() {
    // products of G and the masses are exact in either order
    let g = NewtonianGravity { g: 0.5 };
    let a = body("a", 12.0, [3.0, -7.0], [0.0, 0.0]);
    let b = body("b", 40.0, [-55.0, 21.0], [0.0, 0.0]);

    assert_eq!(g.pair_force(&a, &b), -g.pair_force(&b, &a));
}

#[test]
fn net_force_vanishes_for_many_bodies() {
    let bodies = vec![
        body("a", 10.0, [0.0, 0.0], [0.0, 0.0]),
        body("b", 20.0, [40.0, 5.0], [0.0, 0.0]),
        body("c", 30.0, [-13.0, 70.0], [0.0, 0.0]),
        body("d", 5.0, [200.0, -90.0], [0.0, 0.0]),
    ];
    let f = forces_on(&bodies, &test_config());
    let net: NVec2 = f.iter().sum();

    assert!(net.norm() < 1e-12, "Net force not zero: {:?}", net);
}

#[test]
fn gravity_points_toward_other_body() {
    let bodies = two_body_system(20.0, 1.0, 1.0);
    let f = forces_on(&bodies, &test_config());

    let dx = bodies[1].position - bodies[0].position;
    assert!(f[0].dot(&dx) > 0.0, "Force is not toward second body");
    assert!(f[1].dot(&dx) < 0.0, "Force is not toward first body");
}

#[test]
fn gravity_softened_inverse_square_law() {
    let p = test_config();
    let f_r = forces_on(&two_body_system(100.0, 1.0, 1.0), &p);
    let f_2r = forces_on(&two_body_system(200.0, 1.0, 1.0), &p);

    let ratio = f_r[0].norm() / f_2r[0].norm();
    let s2 = SOFTENING * SOFTENING;
    let expected = (200.0 * 200.0 + s2) / (100.0 * 100.0 + s2);

    assert!((ratio - expected).abs() < 1e-9, "Expected {}, got {}", expected, ratio);
}

#[test]
fn gravity_softening_prevents_blowup() {
    let p = test_config();
    let bodies = two_body_system(1e-9, 1.0, 1.0);
    let f = forces_on(&bodies, &p);

    let bound = p.gravitational_constant / (SOFTENING * SOFTENING);
    assert!(f[0].norm() <= bound + 1e-15, "Softening failed; force too large");
}

#[test]
fn coincident_bodies_exert_no_force() {
    let bodies = vec![
        body("a", 10.0, [5.0, 5.0], [1.0, 0.0]),
        body("b", 10.0, [5.0, 5.0], [0.0, 1.0]),
    ];
    let next = step(&bodies, test_config());

    assert_eq!(next[0].velocity, bodies[0].velocity);
    assert_eq!(next[1].velocity, bodies[1].velocity);
    assert!(next.iter().all(|b| b.position.x.is_finite() && b.position.y.is_finite()));
}

// ==================================================================================
// Stepper tests
// ==================================================================================

#[test]
fn one_step_of_the_pinned_pair() {
    let p = test_config();
    let bodies = pinned_pair();
    let next = step(&bodies, p);

    let dist2 = 300.0_f64 * 300.0 + SOFTENING * SOFTENING;
    assert_eq!(dist2, 90025.0);
    let magnitude = p.gravitational_constant * 2000.0 * 100.0 / dist2;
    assert!((magnitude - 1.1108).abs() < 1e-4);

    let ax = -magnitude / 100.0;
    let vx = ax * p.time_step;
    let planet = &next[1];
    assert!((planet.velocity.x - vx).abs() < 1e-12);
    assert!((planet.velocity.x + 0.005554).abs() < 1e-6);
    assert!((planet.velocity.y - 1.8).abs() < 1e-12);

    // position uses the updated velocity
    assert!((planet.position.x - (300.0 + vx * p.time_step)).abs() < 1e-12);
    assert!((planet.position.y - 0.9).abs() < 1e-12);

    assert_eq!(next[0].position, NVec2::zeros());
    assert_eq!(next[0].velocity, NVec2::zeros());
}

#[test]
fn zero_mass_propagates_non_finite_values() {
    let bodies = vec![
        body("massless", 0.0, [0.0, 0.0], [0.0, 0.0]),
        body("partner", 5.0, [30.0, 0.0], [0.0, 0.0]),
    ];
    let next = step(&bodies, test_config());

    assert_eq!(next.len(), 2);
    let v = next[0].velocity;
    assert!(!v.x.is_finite() || !v.y.is_finite(), "Expected non-finite velocity, got {:?}", v);
    let x = next[0].position;
    assert!(!x.x.is_finite() || !x.y.is_finite(), "Expected non-finite position, got {:?}", x);
}

#[test]
fn step_preserves_ids_and_order() {
    let bodies = vec![
        body("z", 10.0, [0.0, 0.0], [0.0, 0.0]),
        body("a", 20.0, [50.0, 0.0], [0.0, 0.0]),
        body("m", 30.0, [0.0, 80.0], [0.0, 0.0]),
    ];
    let next = step(&bodies, test_config());

    let ids: Vec<&str> = next.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["z", "a", "m"]);
    assert!(step(&[], test_config()).is_empty());
}

#[test]
fn step_does_not_mutate_input() {
    let bodies = pinned_pair();
    let snapshot = bodies.clone();
    let _ = step(&bodies, test_config());

    assert_eq!(bodies, snapshot);
}

#[test]
fn step_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(5);
    let bodies: Vec<CelestialBody> = (0..12)
        .map(|i| {
            orbital_nexus::launch_body(
                NVec2::new((i as f64 * 1.3).sin() * 300.0, (i as f64 * 0.7).cos() * 300.0),
                NVec2::new(0.3, -0.2),
                &mut rng,
            )
        })
        .collect();

    let a = step(&bodies, test_config());
    let b = step(&bodies, test_config());
    assert_eq!(a, b);
}

#[test]
fn locked_body_never_moves() {
    let mut bodies = vec![
        body("anchor", 50.0, [10.0, -20.0], [3.0, 4.0]).locked(true),
        body("heavy", 5000.0, [60.0, 0.0], [0.0, 0.0]),
        body("other", 800.0, [-40.0, 90.0], [1.0, 0.0]),
    ];
    let anchor = bodies[0].clone();

    for _ in 0..500 {
        bodies = step(&bodies, test_config());
    }

    assert_eq!(bodies[0].position, anchor.position);
    assert_eq!(bodies[0].velocity, anchor.velocity);
    assert!(bodies[0].trail.is_empty());
    // it still pulls on the others
    assert_ne!(bodies[1].velocity, NVec2::zeros());
}

#[test]
fn two_body_momentum_is_conserved() {
    let mut bodies = vec![
        body("a", 2000.0, [0.0, 0.0], [0.0, -0.09]),
        body("b", 100.0, [300.0, 0.0], [0.0, 1.8]),
    ];
    let p0 = total_momentum(&bodies);

    for _ in 0..2000 {
        bodies = step(&bodies, test_config());
    }

    let drift = (total_momentum(&bodies) - p0).norm();
    assert!(drift < 1e-9, "Momentum drifted by {}", drift);
}

// ==================================================================================
// Trail tests
// ==================================================================================

#[test]
fn first_step_records_one_trail_point() {
    let next = step(&pinned_pair(), test_config());

    assert_eq!(next[1].trail.len(), 1);
    assert_eq!(next[1].trail.last(), Some(&next[1].position));
}

#[test]
fn trail_stays_bounded_and_sparse() {
    let p = test_config();
    let mut bodies = pinned_pair();

    for _ in 0..5000 {
        bodies = step(&bodies, p);
        assert!(bodies.iter().all(|b| b.trail.len() <= p.trail_length));
    }

    let trail: Vec<NVec2> = bodies[1].trail.iter().copied().collect();
    assert_eq!(trail.len(), p.trail_length);
    for pair in trail.windows(2) {
        assert!(distance(&pair[0], &pair[1]) > TRAIL_MIN_SPACING);
    }
    assert!(distance(&trail[trail.len() - 1], &bodies[1].position) <= TRAIL_MIN_SPACING);
}

#[test]
fn slow_body_does_not_grow_trail() {
    let mut bodies = vec![body("drifter", 10.0, [0.0, 0.0], [0.1, 0.0])];
    let p = test_config();

    // 0.05 units per step: one point, then nothing until 2.0 units are covered
    for _ in 0..40 {
        bodies = step(&bodies, p);
    }
    assert_eq!(bodies[0].trail.len(), 1);

    for _ in 0..5 {
        bodies = step(&bodies, p);
    }
    assert_eq!(bodies[0].trail.len(), 2);
}

#[test]
fn shrinking_trail_length_trims_on_next_append() {
    let mut p = test_config();
    let mut bodies = vec![body("runner", 1.0, [0.0, 0.0], [10.0, 0.0])];
    for _ in 0..30 {
        bodies = step(&bodies, p);
    }
    assert_eq!(bodies[0].trail.len(), 30);

    p.trail_length = 5;
    bodies = step(&bodies, p);
    assert_eq!(bodies[0].trail.len(), 5);
}

// ==================================================================================
// Scenario tests
// ==================================================================================

#[test]
fn bundled_scenarios_load() {
    let dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios");
    let mut rng = StdRng::seed_from_u64(9);

    for name in ["default.yaml", "pinned_sun.yaml", "binary.yaml"] {
        let cfg = ScenarioConfig::from_path(dir.join(name)).unwrap();
        let scenario = Scenario::build_scenario(&cfg, &mut rng).unwrap();
        assert!(!scenario.bodies.is_empty(), "{name} has no bodies");

        let mut sim = scenario.into_simulation();
        assert_eq!(sim.run(100), 100);
        assert!(sim
            .bodies()
            .iter()
            .all(|b| b.position.x.is_finite() && b.position.y.is_finite()));
    }
}

#[test]
fn default_scenario_matches_bundled_file() {
    let dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios");
    let cfg = ScenarioConfig::from_path(dir.join("default.yaml")).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let from_file = Scenario::build_scenario(&cfg, &mut rng).unwrap();
    let built_in = Scenario::default_scenario();

    assert_eq!(from_file.parameters, built_in.parameters);
    assert_eq!(from_file.bodies, built_in.bodies);
}
