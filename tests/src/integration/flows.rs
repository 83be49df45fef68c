//! # Console Flows
//!
//! Full console sessions built the same way the binary builds them:
//! configuration merge, container wiring, then line-by-line commands.

#[cfg(test)]
mod tests {
    use lot_allocator::{AllocatorConfig, ParkingLotApi};
    use lot_runtime::telemetry::LogConfig;
    use lot_runtime::{build_service, Args, Outcome, PricingMode, RuntimeConfig, Session};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn config(slots: u32, flat_rate_cents: Option<u64>, seed: Option<u64>) -> RuntimeConfig {
        let args = Args {
            slots: Some(slots),
            flat_rate_cents,
            seed,
            ..Default::default()
        };
        RuntimeConfig::merge(AllocatorConfig::default(), LogConfig::default(), &args)
    }

    fn run(session: &mut Session, line: &str) -> String {
        match session.handle_line(line) {
            Outcome::Output(text) => text,
            other => panic!("'{}' produced {:?}", line, other),
        }
    }

    // =============================================================================
    // SESSIONS
    // =============================================================================

    #[test]
    fn test_park_pay_remove_session() {
        let mut session = Session::new(build_service(&config(3, Some(1250), None)));

        let parked = run(&mut session, "park AB12 2");
        assert!(parked.contains("Payment for Vehicle AB12 | Spot Number: 2 | $12.50"));
        assert!(parked.contains("[ 1] [#2] [ 3]"));

        let paid = run(&mut session, "pay");
        assert!(paid.starts_with("Payment of $12.50 processed for Vehicle AB12 at Spot 2"));
        assert_eq!(session.unpaid().count(), 0);

        let removed = run(&mut session, "remove 2");
        assert!(removed.starts_with("Vehicle AB12 removed from spot 2"));
        assert!(removed.contains("Total: 3 | Available: 3 | Occupied: 0 | Reserved: 0"));

        let history = run(&mut session, "history");
        assert_eq!(history.lines().count(), 2);
        assert!(history.lines().next().unwrap().ends_with("removed at spot 2"));
    }

    #[test]
    fn test_rejections_leave_session_usable() {
        let mut session = Session::new(build_service(&config(2, Some(500), None)));

        run(&mut session, "reserve 2");
        assert_eq!(run(&mut session, "park X 2"), "Error: Slot 2 is reserved");
        assert_eq!(
            run(&mut session, "park X 9"),
            "Error: Slot 9 out of range: lot has 2 slots"
        );
        assert!(run(&mut session, "fly away").starts_with("Error: Unknown command"));

        assert!(run(&mut session, "park X 1").starts_with("Vehicle X parked at spot 1"));
        assert_eq!(run(&mut session, "park Y 1"), "Error: Slot 1 is already occupied");

        let stats = session.service().stats();
        assert_eq!((stats.available, stats.occupied, stats.reserved), (0, 1, 1));
        assert_eq!(session.unpaid().count(), 1);
        assert_eq!(session.handle_line("exit"), Outcome::Quit);
    }

    #[test]
    fn test_seeded_pricing_is_repeatable() {
        let cfg = config(4, None, Some(42));
        assert_eq!(cfg.pricing, PricingMode::Random { seed: Some(42) });

        let quotes = |cfg: &RuntimeConfig| {
            let mut service = build_service(cfg);
            (1..=4)
                .map(|slot| service.allocate("AB12", slot).unwrap().quote.unwrap().amount)
                .collect::<Vec<_>>()
        };

        assert_eq!(quotes(&cfg), quotes(&cfg));
    }

    #[test]
    fn test_unique_occupants_flag_reaches_service() {
        let args = Args {
            slots: Some(3),
            unique_occupants: true,
            flat_rate_cents: Some(100),
            ..Default::default()
        };
        let cfg = RuntimeConfig::merge(AllocatorConfig::default(), LogConfig::default(), &args);
        let mut session = Session::new(build_service(&cfg));

        run(&mut session, "park AB12 1");
        let err = run(&mut session, "park AB12 2");

        assert!(err.starts_with("Error:"));
        assert!(err.contains("AB12"));
        assert_eq!(session.service().stats().occupied, 1);
    }

    #[test]
    fn test_board_and_json_stats_agree() {
        let mut session = Session::new(build_service(&config(12, Some(100), None)));
        run(&mut session, "park A1 3");
        run(&mut session, "reserve 11");

        let board = run(&mut session, "board");
        assert!(board.contains("[# 3]"));
        assert!(board.contains("[R11]"));

        let json: serde_json::Value =
            serde_json::from_str(&run(&mut session, "stats --json")).unwrap();
        assert_eq!(json["available"], 10);
        assert_eq!(json["occupied"], 1);
        assert_eq!(json["reserved"], 1);
    }

    #[test]
    fn test_huge_lot_from_environment() {
        let allocator = AllocatorConfig::from_lookup(|key| {
            (key == "LOT_TOTAL_SLOTS").then(|| "4000000000".to_string())
        })
        .unwrap();
        let args = Args {
            flat_rate_cents: Some(100),
            ..Default::default()
        };
        let cfg = RuntimeConfig::merge(allocator, LogConfig::default(), &args);
        let mut session = Session::new(build_service(&cfg));

        assert!(session.overview().contains("more slots not shown"));
        assert!(run(&mut session, "park AB12 3999999999").starts_with("Vehicle AB12 parked"));
        assert_eq!(
            run(&mut session, "stats"),
            "Total: 4000000000 | Available: 3999999999 | Occupied: 1 | Reserved: 0"
        );
    }
}
