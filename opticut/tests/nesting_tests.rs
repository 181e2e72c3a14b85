#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use std::str::FromStr;

    use float_cmp::approx_eq;
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    use opticut::NestError;
    use opticut::entities::{Board, DemandQueue, ShapeInstance, ShapeKind, ShapeType};
    use opticut::nesting::{EngineConfig, FitHeuristic, NestingEngine, placement_order, solve};
    use opticut::util::assertions;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn rectangles(n: usize, w: f64, h: f64, allow_rotation: bool) -> DemandQueue {
        let mut demand = DemandQueue::new();
        demand
            .add(ShapeKind::Rectangle { w, h }, n, allow_rotation)
            .unwrap();
        demand
    }

    /// Mixed demand of all shape kinds with random dimensions and rotation permissions
    fn random_demand(rng: &mut SmallRng, n_lines: usize) -> DemandQueue {
        let mut demand = DemandQueue::new();
        for _ in 0..n_lines {
            let kind = match rng.random_range(0..4) {
                0 => ShapeKind::Rectangle {
                    w: rng.random_range(10.0..600.0),
                    h: rng.random_range(10.0..600.0),
                },
                1 => ShapeKind::Square {
                    s: rng.random_range(10.0..400.0),
                },
                2 => ShapeKind::Circle {
                    r: rng.random_range(5.0..200.0),
                },
                _ => ShapeKind::Triangle {
                    b: rng.random_range(10.0..600.0),
                    h: rng.random_range(10.0..600.0),
                },
            };
            let qty = rng.random_range(1..6);
            demand.add(kind, qty, rng.random_bool(0.5)).unwrap();
        }
        demand
    }

    #[test]
    fn scenario_a_three_rectangles_fit() {
        init_logger();
        let board = Board::try_new(1000.0, 1000.0).unwrap();
        let demand = rectangles(3, 400.0, 300.0, true);

        let report = solve(&board, demand.snapshot()).unwrap();

        assert_eq!(report.placed_count(), 3);
        assert_eq!(report.unplaced_count(), 0);
        assert_eq!(report.used_area, 360000.0);
        assert_eq!(report.board_area, 1_000_000.0);
        assert!(approx_eq!(f64, report.utilization_pct, 36.0));
        assert!(approx_eq!(f64, report.waste_pct, 64.0));

        let positions = report
            .placements
            .iter()
            .map(|p| (p.x, p.y, p.rotated))
            .collect::<Vec<_>>();
        assert_eq!(
            positions,
            vec![(0.0, 0.0, false), (400.0, 0.0, false), (0.0, 300.0, false)]
        );
        assert!(assertions::report_is_valid(&report, demand.snapshot()));
    }

    #[test]
    fn scenario_b_oversized_rectangle_is_unplaced() {
        let board = Board::try_new(100.0, 100.0).unwrap();
        let demand = rectangles(1, 200.0, 50.0, true);

        let report = solve(&board, demand.snapshot()).unwrap();

        assert_eq!(report.unplaced_count(), 1);
        assert_eq!(report.unplaced, vec![demand.snapshot()[0].id()]);
        assert!(report.placements.is_empty());
        assert_eq!(report.utilization_pct, 0.0);
        assert_eq!(report.waste_pct, 100.0);
    }

    #[test_case(false, None; "rotation forbidden")]
    #[test_case(true, Some((0.0, 100.0)); "rotation allowed")]
    fn scenario_c_rotation_only_when_allowed(allow_rotation: bool, expected: Option<(f64, f64)>) {
        let board = Board::try_new(500.0, 500.0).unwrap();
        let mut demand = DemandQueue::new();
        demand
            .add(ShapeKind::Rectangle { w: 480.0, h: 100.0 }, 1, false)
            .unwrap();
        demand
            .add(ShapeKind::Rectangle { w: 100.0, h: 480.0 }, 1, allow_rotation)
            .unwrap();
        let second = demand.snapshot()[1].id();

        let report = solve(&board, demand.snapshot()).unwrap();
        let first = &report.placements[0];
        assert_eq!((first.x, first.y, first.rotated), (0.0, 0.0, false));

        match expected {
            None => {
                assert_eq!(report.unplaced, vec![second]);
                assert_eq!(report.placed_count(), 1);
            }
            Some((x, y)) => {
                let placement = report.placement_of(second).unwrap();
                assert!(placement.rotated);
                assert_eq!(placement.rotation_degrees(), 90);
                assert_eq!((placement.x, placement.y), (x, y));
                assert_eq!((placement.placed_w, placement.placed_h), (480.0, 100.0));
                assert_eq!(report.unplaced_count(), 0);
            }
        }
        assert!(assertions::report_is_valid(&report, demand.snapshot()));
    }

    #[test_case(0.0, 500.0; "zero width")]
    #[test_case(500.0, -1.0; "negative height")]
    #[test_case(f64::NAN, 500.0; "nan width")]
    #[test_case(f64::INFINITY, 500.0; "infinite width")]
    fn scenario_d_invalid_board_fails(width: f64, height: f64) {
        let board = Board { width, height };
        let demand = rectangles(2, 10.0, 10.0, true);

        let result = NestingEngine::default().solve(&board, demand.snapshot());

        assert!(matches!(result, Err(NestError::InvalidBoard { .. })));
        assert!(Board::try_new(width, height).is_err());
    }

    #[test]
    fn empty_demand_gives_empty_report() {
        let board = Board::try_new(2440.0, 1220.0).unwrap();

        let report = solve(&board, &[]).unwrap();

        assert!(report.placements.is_empty());
        assert_eq!(report.unplaced_count(), 0);
        assert_eq!(report.used_area, 0.0);
        assert_eq!(report.utilization_pct, 0.0);
        assert_eq!(report.waste_pct, 100.0);
    }

    #[test]
    fn utilization_counts_exact_area_not_bounding_box() {
        let board = Board::try_new(100.0, 100.0).unwrap();
        let mut demand = DemandQueue::new();
        demand.add(ShapeKind::Circle { r: 25.0 }, 1, false).unwrap();
        demand
            .add(ShapeKind::Triangle { b: 50.0, h: 100.0 }, 1, true)
            .unwrap();

        let report = solve(&board, demand.snapshot()).unwrap();

        assert_eq!(report.placed_count(), 2);
        let expected = PI * 25.0 * 25.0 + 0.5 * 50.0 * 100.0;
        assert!(approx_eq!(f64, report.used_area, expected));
        assert!(approx_eq!(f64, report.bbox_area(), 50.0 * 50.0 + 50.0 * 100.0));
        assert!(report.used_area < report.bbox_area());
        assert!(approx_eq!(
            f64,
            report.utilization_pct,
            100.0 * expected / 10_000.0
        ));
    }

    #[test]
    fn squares_and_circles_are_never_rotated() {
        let board = Board::try_new(1000.0, 300.0).unwrap();
        let mut demand = DemandQueue::new();
        demand.add(ShapeKind::Square { s: 300.0 }, 3, true).unwrap();
        demand.add(ShapeKind::Circle { r: 50.0 }, 4, true).unwrap();

        let report = solve(&board, demand.snapshot()).unwrap();

        assert!(report.placements.iter().all(|p| !p.rotated));
        assert!(
            demand
                .snapshot()
                .iter()
                .all(|i| !i.can_rotate() && i.allow_rotation())
        );
        assert!(assertions::rotations_legal(&report, demand.snapshot()));
    }

    #[test]
    fn natural_orientation_is_preferred() {
        let board = Board::try_new(500.0, 500.0).unwrap();
        let demand = rectangles(1, 300.0, 100.0, true);

        let report = solve(&board, demand.snapshot()).unwrap();

        assert!(!report.placements[0].rotated);
        assert_eq!(report.placements[0].rotation_degrees(), 0);
    }

    #[test]
    fn only_rotated_fit_on_empty_board() {
        let board = Board::try_new(500.0, 100.0).unwrap();
        let demand = rectangles(1, 100.0, 500.0, true);
        let forbidden = rectangles(1, 100.0, 500.0, false);

        let report = solve(&board, demand.snapshot()).unwrap();
        assert!(report.placements[0].rotated);

        let report = solve(&board, forbidden.snapshot()).unwrap();
        assert_eq!(report.unplaced_count(), 1);
    }

    #[test]
    fn largest_bounding_box_is_placed_first() {
        let mut demand = DemandQueue::new();
        demand.add(ShapeKind::Square { s: 10.0 }, 1, true).unwrap();
        demand.add(ShapeKind::Circle { r: 20.0 }, 1, true).unwrap();
        demand
            .add(ShapeKind::Rectangle { w: 40.0, h: 40.0 }, 1, true)
            .unwrap();
        demand
            .add(ShapeKind::Triangle { b: 50.0, h: 10.0 }, 1, true)
            .unwrap();
        let ids = demand
            .snapshot()
            .iter()
            .map(|i| i.id())
            .collect::<Vec<_>>();

        let order = placement_order(demand.snapshot())
            .map(|i| i.id())
            .collect::<Vec<_>>();

        //circle and rectangle share a 40x40 bounding box, insertion order breaks the tie
        assert_eq!(order, vec![ids[1], ids[2], ids[3], ids[0]]);

        let board = Board::try_new(1000.0, 1000.0).unwrap();
        let report = solve(&board, demand.snapshot()).unwrap();
        let placed = report
            .placements
            .iter()
            .map(|p| p.instance_id)
            .collect::<Vec<_>>();
        assert_eq!(placed, order);
    }

    #[test]
    fn grid_of_squares_fills_board() {
        let board = Board::try_new(1000.0, 1000.0).unwrap();
        let mut demand = DemandQueue::new();
        demand.add(ShapeKind::Square { s: 250.0 }, 17, false).unwrap();

        let report = solve(&board, demand.snapshot()).unwrap();

        assert_eq!(report.placed_count(), 16);
        assert_eq!(report.unplaced_count(), 1);
        assert_eq!(report.utilization_pct, 100.0);
        assert_eq!(report.waste_pct, 0.0);
        assert!(assertions::report_is_valid(&report, demand.snapshot()));
    }

    #[test_case(ShapeKind::Square { s: 300.0 }, 10, (1000.0, 1000.0), (1300.0, 1300.0); "squares")]
    #[test_case(ShapeKind::Rectangle { w: 400.0, h: 300.0 }, 3, (1000.0, 1000.0), (1200.0, 1100.0); "scenario a")]
    #[test_case(ShapeKind::Rectangle { w: 200.0, h: 50.0 }, 1, (100.0, 100.0), (250.0, 250.0); "scenario b")]
    fn larger_board_never_increases_unplaced(
        kind: ShapeKind,
        qty: usize,
        small_board: (f64, f64),
        large_board: (f64, f64),
    ) {
        let (w_small, h_small) = small_board;
        let (w_large, h_large) = large_board;
        let mut demand = DemandQueue::new();
        demand.add(kind, qty, false).unwrap();

        let small = solve(&Board::try_new(w_small, h_small).unwrap(), demand.snapshot()).unwrap();
        let large = solve(&Board::try_new(w_large, h_large).unwrap(), demand.snapshot()).unwrap();

        assert!(large.unplaced_count() <= small.unplaced_count());
    }

    #[test_case(0, FitHeuristic::BestAreaFit; "seed 0 best area fit")]
    #[test_case(1, FitHeuristic::BestAreaFit; "seed 1 best area fit")]
    #[test_case(2, FitHeuristic::BestShortSideFit; "seed 2 best short side fit")]
    #[test_case(3, FitHeuristic::BestShortSideFit; "seed 3 best short side fit")]
    #[test_case(4, FitHeuristic::BottomLeft; "seed 4 bottom left")]
    #[test_case(5, FitHeuristic::BottomLeft; "seed 5 bottom left")]
    fn random_demand_yields_valid_report(seed: u64, fit_heuristic: FitHeuristic) {
        init_logger();
        let mut rng = SmallRng::seed_from_u64(seed);
        let demand = random_demand(&mut rng, 25);
        let board = Board::try_new(
            rng.random_range(500.0..3000.0),
            rng.random_range(500.0..3000.0),
        )
        .unwrap();
        let engine = NestingEngine::new(EngineConfig { fit_heuristic });

        let report = engine.solve(&board, demand.snapshot()).unwrap();

        assert!(assertions::placements_within_board(&report, &board));
        assert!(assertions::placements_disjoint(&report));
        assert!(assertions::demand_conserved(&report, demand.snapshot()));
        assert!(assertions::rotations_legal(&report, demand.snapshot()));
        assert!(assertions::statistics_consistent(&report, demand.snapshot()));
        assert!(report.utilization_pct <= 100.0);
        assert!(report.placed_count() > 0);
    }

    #[test_case(FitHeuristic::BestAreaFit; "best area fit")]
    #[test_case(FitHeuristic::BestShortSideFit; "best short side fit")]
    #[test_case(FitHeuristic::BottomLeft; "bottom left")]
    fn solving_twice_gives_identical_reports(fit_heuristic: FitHeuristic) {
        let mut rng = SmallRng::seed_from_u64(42);
        let demand = random_demand(&mut rng, 30);
        let board = Board::try_new(2440.0, 1220.0).unwrap();
        let engine = NestingEngine::new(EngineConfig { fit_heuristic });

        let first = engine.solve(&board, demand.snapshot()).unwrap();
        let second = engine.solve(&board, demand.snapshot()).unwrap();

        assert!(first.same_outcome(&second));
    }

    #[test]
    fn solve_does_not_mutate_demand() {
        let mut rng = SmallRng::seed_from_u64(7);
        let demand = random_demand(&mut rng, 10);
        let before = demand.snapshot().to_vec();

        let _ = solve(&Board::try_new(1000.0, 1000.0).unwrap(), demand.snapshot()).unwrap();

        assert_eq!(before.as_slice(), demand.snapshot());
    }

    #[test_case(ShapeKind::Rectangle { w: 400.0, h: 300.0 }, (400.0, 300.0, 120000.0); "rectangle")]
    #[test_case(ShapeKind::Square { s: 300.0 }, (300.0, 300.0, 90000.0); "square")]
    #[test_case(ShapeKind::Circle { r: 150.0 }, (300.0, 300.0, PI * 22500.0); "circle")]
    #[test_case(ShapeKind::Triangle { b: 300.0, h: 400.0 }, (300.0, 400.0, 60000.0); "triangle")]
    fn catalog_resolves_geometry(kind: ShapeKind, expected: (f64, f64, f64)) {
        let (bbox_w, bbox_h, area) = expected;
        let geometry = kind.resolve().unwrap();

        assert_eq!((geometry.bbox_w, geometry.bbox_h), (bbox_w, bbox_h));
        assert!(approx_eq!(f64, geometry.exact_area, area));
        assert!(geometry.exact_area <= geometry.bbox_w * geometry.bbox_h);
    }

    #[test_case(ShapeKind::Rectangle { w: 0.0, h: 300.0 }; "zero width")]
    #[test_case(ShapeKind::Square { s: -5.0 }; "negative side")]
    #[test_case(ShapeKind::Circle { r: f64::NAN }; "nan radius")]
    #[test_case(ShapeKind::Triangle { b: 10.0, h: f64::INFINITY }; "infinite height")]
    fn catalog_rejects_invalid_parameters(kind: ShapeKind) {
        assert!(matches!(kind.resolve(), Err(NestError::InvalidParameter(_))));
        assert!(ShapeInstance::new(kind, true).is_err());

        let mut demand = DemandQueue::new();
        assert!(demand.add(kind, 3, true).is_err());
        assert!(demand.is_empty());
    }

    #[test]
    fn shape_type_parsing() {
        assert_eq!(ShapeType::from_str("circle").unwrap(), ShapeType::Circle);
        assert_eq!(ShapeType::from_str(" Triangle ").unwrap(), ShapeType::Triangle);
        assert!(matches!(
            ShapeType::from_str("hexagon"),
            Err(NestError::InvalidParameter(_))
        ));
    }

    #[test]
    fn demand_queue_add_and_reset() {
        let mut demand = DemandQueue::new();
        let added = demand
            .add(ShapeKind::Circle { r: 150.0 }, 3, false)
            .unwrap()
            .iter()
            .map(|i| i.id())
            .collect::<Vec<_>>();
        assert_eq!(added.len(), 3);
        demand.add(ShapeKind::Square { s: 300.0 }, 0, true).unwrap();
        demand.add(ShapeKind::Square { s: 300.0 }, 2, true).unwrap();

        assert_eq!(demand.len(), 5);
        assert!(approx_eq!(
            f64,
            demand.total_exact_area(),
            3.0 * PI * 22500.0 + 2.0 * 90000.0,
            epsilon = 1e-6
        ));
        let circle = demand.get(added[0]).unwrap();
        assert_eq!(circle.shape_type(), ShapeType::Circle);
        assert_eq!(circle.color(), ShapeType::Circle.default_color());
        assert_eq!((circle.bbox_w(), circle.bbox_h()), (300.0, 300.0));

        demand.reset();
        assert!(demand.is_empty());
        assert!(demand.get(added[0]).is_none());
    }

    #[test]
    fn instance_ids_are_unique() {
        let mut a = DemandQueue::new();
        let mut b = DemandQueue::new();
        a.add(ShapeKind::Square { s: 1.0 }, 50, true).unwrap();
        a.reset();
        a.add(ShapeKind::Square { s: 1.0 }, 50, true).unwrap();
        b.add(ShapeKind::Square { s: 1.0 }, 50, true).unwrap();

        let mut ids = a
            .snapshot()
            .iter()
            .chain(b.snapshot())
            .map(|i| i.id())
            .collect::<Vec<_>>();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 100);
        assert!(ids.iter().all(|id| id.to_string().len() >= 8));
    }
}
