//! Property checks on the coupled update rules: pointwise domination,
//! constraint preservation, and the pinned boundary, along trajectories
//! driven by arbitrary seeds.

use engine::bpp::BoxedPartition;
use engine::grid::{volume_gap, HeightGrid};
use engine::ice::SquareIce;
use engine::model::Dynamics;
use engine::rng::BitSource;
use proptest::prelude::*;

fn dominated(min: &HeightGrid, max: &HeightGrid) -> bool {
    (0..min.rows())
        .all(|r| (0..min.cols()).all(|c| min.get(r, c) <= max.get(r, c)))
}

/// Adjacent heights differ by one and the perimeter matches the ice rule.
fn valid_ice_height(h: &HeightGrid) -> bool {
    let side = h.rows() as i32;
    for r in 0..h.rows() {
        for c in 0..h.cols() {
            if c + 1 < h.cols() && (h.get(r, c) - h.get(r, c + 1)).abs() != 1 {
                return false;
            }
            if r + 1 < h.rows() && (h.get(r, c) - h.get(r + 1, c)).abs() != 1 {
                return false;
            }
            let on_low = r == 0 || c == 0;
            if on_low && h.get(r, c) != (r as i32 - c as i32).abs() + 1 {
                return false;
            }
            let on_high = r + 1 == h.rows() || c + 1 == h.cols();
            if on_high && h.get(r, c) != side - (side - c as i32 - r as i32 - 1).abs() {
                return false;
            }
        }
    }
    true
}

fn valid_plane_partition(h: &HeightGrid, ceiling: i32) -> bool {
    for r in 0..h.rows() {
        for c in 0..h.cols() {
            let v = h.get(r, c);
            if !(0..=ceiling).contains(&v) {
                return false;
            }
            if c + 1 < h.cols() && v < h.get(r, c + 1) {
                return false;
            }
            if r + 1 < h.rows() && v < h.get(r + 1, c) {
                return false;
            }
        }
    }
    true
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ice_steps_preserve_order_and_validity(
        seed in any::<u32>(),
        order in 2usize..7,
        steps in 1usize..32,
    ) {
        let model = SquareIce::new(order).unwrap();
        let mut min = HeightGrid::new(model.rows(), model.cols());
        let mut max = HeightGrid::new(model.rows(), model.cols());
        model.fill_min(&mut min);
        model.fill_max(&mut max);
        let mut bits = BitSource::new(seed);

        for tick in 0..steps {
            model.step(&mut min, &mut max, &mut bits);
            prop_assert!(dominated(&min, &max), "domination lost at step {tick}");
            prop_assert!(valid_ice_height(&min), "min invalid at step {tick}");
            prop_assert!(valid_ice_height(&max), "max invalid at step {tick}");
        }
        prop_assert!(volume_gap(&min, &max) >= 0);
    }

    #[test]
    fn box_steps_preserve_order_and_validity(
        seed in any::<u32>(),
        a in 1usize..6,
        b in 1usize..6,
        c in 1i32..6,
        steps in 1usize..40,
    ) {
        let model = BoxedPartition::new(a, b, c).unwrap();
        let mut min = HeightGrid::new(model.rows(), model.cols());
        let mut max = HeightGrid::new(model.rows(), model.cols());
        model.fill_min(&mut min);
        model.fill_max(&mut max);
        let mut bits = BitSource::new(seed);

        for tick in 0..steps {
            model.step(&mut min, &mut max, &mut bits);
            prop_assert!(dominated(&min, &max), "domination lost at step {tick}");
            prop_assert!(valid_plane_partition(&min, c), "min invalid at step {tick}");
            prop_assert!(valid_plane_partition(&max, c), "max invalid at step {tick}");
        }
    }
}
