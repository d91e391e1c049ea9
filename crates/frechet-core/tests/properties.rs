//! Property tests: symmetry, identity, scaling, and coupling validity over
//! randomly generated polylines.

use frechet_core::{DiscreteFrechet, Polyline};
use proptest::prelude::*;
use rayon::prelude::*;

/// Polyline of 1..12 waypoints in 2 or 3 dimensions with bounded coordinates.
fn polyline_pair() -> impl Strategy<Value = (Polyline, Polyline)> {
    (2usize..=3).prop_flat_map(|dim| {
        let waypoints = move || {
            proptest::collection::vec(proptest::collection::vec(-100.0f64..100.0, dim), 1..12)
        };
        (waypoints(), waypoints()).prop_map(|(p, q)| {
            (
                Polyline::new(p).expect("generated polyline is valid"),
                Polyline::new(q).expect("generated polyline is valid"),
            )
        })
    })
}

proptest! {
    #[test]
    fn distance_is_symmetric((p, q) in polyline_pair()) {
        let engine = DiscreteFrechet::new();
        let pq = engine.distance(p.as_view(), q.as_view()).unwrap().value();
        let qp = engine.distance(q.as_view(), p.as_view()).unwrap().value();
        prop_assert_eq!(pq, qp);
    }

    #[test]
    fn self_distance_is_zero((p, _) in polyline_pair()) {
        let dist = DiscreteFrechet::new().distance(p.as_view(), p.as_view()).unwrap();
        prop_assert_eq!(dist.value(), 0.0);
    }

    #[test]
    fn coupling_is_valid_and_realizes_distance((p, q) in polyline_pair()) {
        let (dist, seq) = DiscreteFrechet::new()
            .distance_and_coupling(p.as_view(), q.as_view())
            .unwrap();
        let steps = seq.steps();

        prop_assert_eq!((steps[0].p, steps[0].q), (0, 0));
        let last = steps[steps.len() - 1];
        prop_assert_eq!((last.p, last.q), (p.len() - 1, q.len() - 1));
        for pair in steps.windows(2) {
            let dp = pair[1].p - pair[0].p;
            let dq = pair[1].q - pair[0].q;
            prop_assert!(matches!((dp, dq), (1, 0) | (0, 1) | (1, 1)), "bad step ({dp}, {dq})");
        }

        let max_step = seq.max_step_distance(p.as_view(), q.as_view());
        prop_assert_eq!(max_step, dist.value());
    }

    #[test]
    fn doubling_scales_distance((p, q) in polyline_pair()) {
        let engine = DiscreteFrechet::new();
        let base = engine.distance(p.as_view(), q.as_view()).unwrap().value();
        let (p2, q2) = (p.scaled(2.0).unwrap(), q.scaled(2.0).unwrap());
        let doubled = engine.distance(p2.as_view(), q2.as_view()).unwrap().value();
        prop_assert!((doubled - 2.0 * base).abs() <= 1e-9 * base.max(1.0));
    }

    #[test]
    fn fill_orders_agree((p, q) in polyline_pair()) {
        let bottom_up = DiscreteFrechet::new().cost_matrix(p.as_view(), q.as_view()).unwrap();
        let top_down = DiscreteFrechet::top_down().cost_matrix(p.as_view(), q.as_view()).unwrap();
        prop_assert_eq!(&bottom_up, &top_down);
        prop_assert_eq!(bottom_up.backtrack().unwrap(), top_down.backtrack().unwrap());
    }
}

/// Independent computations share nothing, so running them on a thread pool
/// must give exactly the sequential results.
#[test]
fn parallel_computations_match_sequential() {
    let pairs: Vec<(Polyline, Polyline)> = (0..32)
        .map(|k| {
            let shift = k as f64 * 0.25;
            let p: Vec<Vec<f64>> = (0..40).map(|i| vec![i as f64, (i as f64 * 0.3).sin()]).collect();
            let q: Vec<Vec<f64>> = (0..35)
                .map(|i| vec![i as f64 * 1.1, (i as f64 * 0.3 + shift).cos()])
                .collect();
            (Polyline::new(p).unwrap(), Polyline::new(q).unwrap())
        })
        .collect();

    let engine = DiscreteFrechet::new();
    let sequential: Vec<_> = pairs
        .iter()
        .map(|(p, q)| engine.distance_and_coupling(p.as_view(), q.as_view()).unwrap())
        .collect();
    let parallel: Vec<_> = pairs
        .par_iter()
        .map(|(p, q)| engine.distance_and_coupling(p.as_view(), q.as_view()).unwrap())
        .collect();

    assert_eq!(sequential, parallel);
}
