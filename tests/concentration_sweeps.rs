use ndnormal::core::stats::Sigma;
use ndnormal::core::sweep::{
    DimRange, boundary_sweep, interval_fractions, interval_sweep, normalized_boundary,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn interval_fractions_sum_to_one_across_sweep() {
    let mut rng = StdRng::seed_from_u64(1);
    let range = DimRange::new(1, 60, 1).unwrap();
    let series = interval_sweep(&mut rng, range, 500, 0.05).unwrap();
    assert_eq!(series.len(), 60);
    assert_eq!(series.dims.first(), Some(&1));
    assert_eq!(series.dims.last(), Some(&60));
    for i in 0..series.len() {
        let f = series.get(i).unwrap();
        assert!((f.sum() - 1.0).abs() < 1e-9, "n={} sum {}", series.dims[i], f.sum());
    }
}

#[test]
fn normalized_bounds_approach_one_at_high_dimension() {
    let mut rng = StdRng::seed_from_u64(2);
    let b = normalized_boundary(&mut rng, 5000, 2000, Sigma::Two).unwrap();
    assert!((b.upper - 1.0).abs() < 0.05, "upper/n {}", b.upper);
    assert!((b.lower - 1.0).abs() < 0.05, "lower/n {}", b.lower);
}

#[test]
fn boundary_spread_shrinks_with_dimension() {
    let mut rng = StdRng::seed_from_u64(3);
    let range = DimRange::new(1, 1001, 250).unwrap();
    let series = boundary_sweep(&mut rng, range, 2000, Sigma::Two).unwrap();
    assert_eq!(series.dims, vec![1, 251, 501, 751, 1001]);

    let widths: Vec<f64> = series
        .lower
        .iter()
        .zip(&series.upper)
        .map(|(lo, hi)| hi - lo)
        .collect();
    // expected width is 4 * sqrt(2 / n): 5.66 at n=1, 0.18 at n=1001
    assert!(widths[0] > 4.0, "width at n=1 {}", widths[0]);
    assert!(widths[4] < 0.25, "width at n=1001 {}", widths[4]);
    assert!(widths[0] > widths[1] && widths[1] > widths[4]);
}

#[test]
fn middle_band_dominates_at_high_dimension() {
    let mut rng = StdRng::seed_from_u64(4);
    let f = interval_fractions(&mut rng, 5000, 2000, 0.05).unwrap();
    assert!(f.within > 0.9, "within {}", f.within);
}

#[test]
fn middle_band_grows_with_dimension() {
    let mut rng = StdRng::seed_from_u64(5);
    let range = DimRange::new(10, 2010, 500).unwrap();
    let series = interval_sweep(&mut rng, range, 2000, 0.05).unwrap();
    // P(within) is ~0.09 at n=10 and ~0.89 at n=2010
    let first = series.within[0];
    let last = *series.within.last().unwrap();
    assert!(first < 0.3, "n=10 within {first}");
    assert!(last > 0.8, "n=2010 within {last}");
    for w in series.within.windows(2) {
        assert!(w[1] > w[0] - 0.05, "within series dropped: {w:?}");
    }
}

#[test]
fn sweeps_reject_invalid_input() {
    let mut rng = StdRng::seed_from_u64(6);
    let bad = DimRange { start: 0, end: 5, step: 1 };
    assert!(boundary_sweep(&mut rng, bad, 10, Sigma::Two).is_err());
    let range = DimRange::new(1, 3, 1).unwrap();
    assert!(interval_sweep(&mut rng, range, 10, 0.0).is_err());
    assert!(interval_sweep(&mut rng, range, 0, 0.05).is_err());
}
