use std::sync::Arc;

use em_polarization::math::{dot_complex, dot_complex_real};
use em_polarization::prelude::*;
use proptest::prelude::*;

const EPS: f64 = 1e-10;

fn arb_vec(range: f64) -> impl Strategy<Value = R3> {
    (-range..range, -range..range, -range..range).prop_map(|(x, y, z)| R3::new(x, y, z))
}

fn arb_direction() -> impl Strategy<Value = R3> {
    arb_vec(10.0).prop_filter("direction must not vanish", |a| a.norm() > 0.1)
}

fn transverse(v: &R3, a: &R3) -> R3 {
    let n = a.normalize();
    v - n * v.dot(&n)
}

/// Direction plus a real/imaginary electric pair orthogonal to it.
fn arb_transverse_wave() -> impl Strategy<Value = (R3, R3, R3)> {
    (arb_direction(), arb_vec(5.0), arb_vec(5.0))
        .prop_map(|(a, r, i)| {
            let (er, ei) = (transverse(&r, &a), transverse(&i, &a));
            (a, er, ei)
        })
        .prop_filter("field must not vanish", |(_, er, ei)| er.norm() + ei.norm() > 0.1)
}

fn arb_impedance() -> impl Strategy<Value = f64> {
    1.0..10.0_f64
}

proptest! {
    #[test]
    fn solved_magnetic_field_is_orthogonal(
        (a, er, ei) in arb_transverse_wave(),
        eta in arb_impedance(),
    ) {
        let mut engine = PolarizationEngine::default();
        let state = engine.solve(&PlaneWaveInput::new(a, er, ei, eta)).expect("transverse input");
        let sol = state.solution();
        let scale = a.norm() * sol.electric.magnitude();
        prop_assert!(dot_complex_real(sol.magnetic.phasor(), &a).norm() <= EPS * scale * a.norm());
        prop_assert!(dot_complex(sol.electric.phasor(), sol.magnetic.phasor()).norm() <= EPS * scale * scale);
    }

    #[test]
    fn longitudinal_field_is_rejected_and_state_kept(
        (a, er, ei) in arb_transverse_wave(),
        k in prop_oneof![-3.0..-0.2_f64, 0.2..3.0_f64],
    ) {
        let mut engine = PolarizationEngine::default();
        let kept = engine.solve(&PlaneWaveInput::default()).expect("default input");
        let before = engine.sample(4);

        let bad = PlaneWaveInput::new(a, er + a.normalize() * k, ei, 2.0);
        let is_rejected = matches!(engine.solve(&bad), Err(SolveError::NotOrthogonal { .. }));
        prop_assert!(is_rejected);
        prop_assert!(Arc::ptr_eq(&kept, &engine.state().expect("state kept")));
        prop_assert_eq!(engine.sample(4), before);
    }

    #[test]
    fn rotation_preserves_norms_and_aligns_direction(
        (a, er, ei) in arb_transverse_wave(),
        eta in arb_impedance(),
    ) {
        let sol = solve_plane_wave(&a, &ElectricField::from_parts(er, ei), Impedance::new(eta), 1e-9)
            .expect("transverse input");
        let state = WaveState::from_solution(sol.clone());

        let e_norm = sol.electric.magnitude();
        let h_norm = sol.magnetic.magnitude();
        prop_assert!((state.electric().magnitude() - e_norm).abs() <= EPS * e_norm.max(1.0));
        prop_assert!((state.magnetic().magnitude() - h_norm).abs() <= EPS * h_norm.max(1.0));

        let mapped = state.rotation().apply_real(&a);
        prop_assert!(mapped.x.abs() <= EPS * a.norm());
        prop_assert!(mapped.y.abs() <= EPS * a.norm());
        prop_assert!((mapped.z - a.norm()).abs() <= EPS * a.norm());

        let m = state.rotation().matrix();
        prop_assert!((m.determinant() - 1.0).abs() < EPS);
    }

    #[test]
    fn sampling_is_periodic(
        (a, er, ei) in arb_transverse_wave(),
        frame in -1_000_i64..1_000,
        n in 1_u32..64,
    ) {
        let mut engine = PolarizationEngine::default();
        let state = engine.solve(&PlaneWaveInput::new(a, er, ei, 2.0)).expect("transverse input");
        let here = sample(&state, frame, n).expect("non-empty period");
        let next = sample(&state, frame + i64::from(n), n).expect("non-empty period");
        prop_assert_eq!(here, next);
    }

    #[test]
    fn rotated_samples_lie_in_plot_plane(
        (a, er, ei) in arb_transverse_wave(),
        frame in 0_i64..10,
    ) {
        let mut engine = PolarizationEngine::default();
        engine.solve(&PlaneWaveInput::new(a, er, ei, 2.0)).expect("transverse input");
        let s = engine.sample(frame).expect("frames configured").expect("state present");
        let scale = er.norm() + ei.norm();
        prop_assert!(s.transverse_residual() <= EPS * scale.max(1.0) * a.norm().max(1.0));
        prop_assert!(s.electric.dot(&s.magnetic).abs() <= EPS * scale * scale * a.norm().max(1.0));
    }

    #[test]
    fn antiparallel_direction_is_finite(
        c in 0.1..10.0_f64,
        er in arb_vec(2.0),
        ei in arb_vec(2.0),
    ) {
        let a = R3::new(0.0, 0.0, -c);
        let er = R3::new(er.x, er.y, 0.0);
        let ei = R3::new(ei.x, ei.y, 0.0);
        let mut engine = PolarizationEngine::default();
        let state = engine.solve(&PlaneWaveInput::new(a, er, ei, 2.0)).expect("transverse input");
        prop_assert!(state.rotation().matrix().iter().all(|v| v.is_finite()));
        for frame in 0..10 {
            let s = engine.sample(frame).expect("frames configured").expect("state present");
            prop_assert!(s.electric.iter().chain(s.magnetic.iter()).all(|v| v.is_finite()));
            prop_assert!((s.electric.norm() - (er * s.phase.cos() - ei * s.phase.sin()).norm()).abs() < EPS);
        }
    }
}

#[test]
fn documented_reference_wave() {
    let mut engine = PolarizationEngine::default();
    let input = PlaneWaveInput::from_text("0,0,1", "0.5,0,0", "0,0.5,0", "2").expect("well-formed");
    let state = engine.solve(&input).expect("transverse");

    // H = (0,0,1) x (0.5, 0.5j, 0) / 2 = (-0.25j, 0.25, 0)
    let h = state.magnetic().phasor();
    assert_eq!(h[0], CScalar::new(0.0, -0.25));
    assert_eq!(h[1], CScalar::new(0.25, 0.0));
    assert_eq!(state.rotation().matrix(), &R3x3::identity());
    assert_eq!(state.electric(), &state.solution().electric);

    let s = engine.sample(0).expect("frames configured").expect("state present");
    assert_eq!(s.electric, R3::new(0.5, 0.0, 0.0));
    assert_eq!(s.magnetic, R3::new(0.0, 0.25, 0.0));
}

#[test]
fn parse_errors_never_reach_the_solver() {
    let mut engine = PolarizationEngine::default();
    engine.solve(&PlaneWaveInput::default()).expect("default input");
    let before = engine.state();

    let err = PlaneWaveInput::from_text("0,0", "0.5,0,0", "0,0.5,0", "2")
        .map_err(PolarizationError::from)
        .and_then(|input| engine.solve(&input).map_err(PolarizationError::from));
    assert!(matches!(err, Err(PolarizationError::Parse(ParseError::ComponentCount { found: 2 }))));
    assert_eq!(engine.state(), before);
}

#[test]
fn extreme_magnitudes_keep_the_orthogonality_check_honest() {
    let mut engine = PolarizationEngine::default();
    let kept = engine.solve(&PlaneWaveInput::default()).expect("default input");

    let parallel = PlaneWaveInput::from_text("1e160,0,0", "1e160,0,0", "0,0,0", "2").expect("well-formed");
    assert!(matches!(engine.solve(&parallel), Err(SolveError::NotOrthogonal { .. })));
    assert!(Arc::ptr_eq(&kept, &engine.state().expect("state kept")));

    let tiny = PlaneWaveInput::new(R3::new(1e-170, 0.0, 0.0), R3::new(0.0, 0.5, 0.0), R3::new(0.0, 0.0, 0.5), 2.0);
    engine.solve(&tiny).expect("tiny but non-zero direction");
    let s = engine.sample(0).expect("frames configured").expect("state present");
    assert!(s.transverse_residual() < 1e-15);
    assert!((s.electric.norm() - 0.5).abs() < 1e-15);
}
