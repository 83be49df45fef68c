//! # Worked Scenarios
//!
//! Small lots driven through `ParkingLotService` with a manual clock and a
//! flat-rate pricing stub, checking stats and history after each step.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use lot_allocator::domain::invariants::{
        invariant_capacity_accounting, invariant_counters_match, invariant_newest_first,
    };
    use lot_allocator::{
        AllocationError, AllocatorConfig, EventKind, FlatRatePricing, LotEvent, LotStats,
        ManualTimeSource, Money, ParkingLotApi, ParkingLotService, RecordingObserver, SlotState,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn lot(total_slots: u32) -> (ParkingLotService, Arc<ManualTimeSource>) {
        let clock = Arc::new(ManualTimeSource::new(1_700_000_000_000));
        let config = AllocatorConfig {
            total_slots,
            ..Default::default()
        };
        let service = ParkingLotService::with_clock(config, clock.clone())
            .with_pricing(Arc::new(FlatRatePricing::new(Money::from_cents(800))));
        (service, clock)
    }

    fn stats(total: u32, available: u32, occupied: u32, reserved: u32) -> LotStats {
        LotStats {
            total,
            available,
            occupied,
            reserved,
        }
    }

    // =============================================================================
    // SCENARIOS
    // =============================================================================

    /// Scenario A: park AB12 in slot 2 of 3.
    #[test]
    fn test_scenario_a_allocate() {
        let (mut lot, _clock) = lot(3);

        lot.allocate("AB12", 2).unwrap();

        assert_eq!(lot.stats(), stats(3, 2, 1, 0));
    }

    /// Scenario B: second vehicle into the same slot is rejected, nothing changes.
    #[test]
    fn test_scenario_b_occupied() {
        let (mut lot, _clock) = lot(3);
        lot.allocate("AB12", 2).unwrap();
        let history_before = lot.history();

        let err = lot.allocate("CD34", 2).unwrap_err();

        assert_eq!(err, AllocationError::SlotOccupied(2));
        assert_eq!(lot.stats(), stats(3, 2, 1, 0));
        assert_eq!(lot.history(), history_before);
        assert_eq!(
            lot.slot_state(2).and_then(|s| s.occupant().map(|o| o.to_string())),
            Some("AB12".to_string())
        );
    }

    /// Scenario C: reserved slot rejects allocation.
    #[test]
    fn test_scenario_c_reserved() {
        let (mut lot, _clock) = lot(3);

        lot.reserve(1).unwrap();
        let err = lot.allocate("X", 1).unwrap_err();

        assert_eq!(err, AllocationError::SlotReserved(1));
        assert_eq!(lot.stats(), stats(3, 2, 0, 1));
    }

    /// Scenario D: slot beyond the lot size.
    #[test]
    fn test_scenario_d_out_of_range() {
        let (mut lot, _clock) = lot(3);

        let err = lot.allocate("Z", 5).unwrap_err();

        assert_eq!(err, AllocationError::OutOfRange { slot: 5, total: 3 });
        assert!(lot.history().is_empty());
    }

    /// Scenario E: park then remove leaves an empty lot and two log entries.
    #[test]
    fn test_scenario_e_allocate_release() {
        let (mut lot, clock) = lot(3);

        lot.allocate("Z", 1).unwrap();
        clock.advance(90_000);
        lot.release(1).unwrap();

        assert_eq!(lot.stats(), stats(3, 3, 0, 0));
        let history = lot.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].kind, EventKind::Removed);
        assert_eq!(history[0].occupant.as_str(), "Z");
        assert_eq!(history[1].kind, EventKind::Parked);
        assert!(invariant_newest_first(&history));
    }

    // =============================================================================
    // EXTENDED FLOWS
    // =============================================================================

    #[test]
    fn test_fill_lot_then_everything_rejected() {
        let (mut lot, _clock) = lot(3);
        lot.allocate("A1", 1).unwrap();
        lot.allocate("B2", 2).unwrap();
        lot.reserve(3).unwrap();

        assert!(lot.stats().is_full());
        for slot in 1..=3 {
            assert!(lot.allocate("Q9", slot).is_err());
        }
        assert!(invariant_capacity_accounting(&lot.stats()));
        assert!(invariant_counters_match(lot.allocator()));
    }

    #[test]
    fn test_reservation_is_sticky() {
        let (mut lot, _clock) = lot(2);
        lot.reserve(2).unwrap();

        assert_eq!(lot.release(2).unwrap_err(), AllocationError::SlotAlreadyEmpty(2));
        assert_eq!(lot.slot_state(2), Some(SlotState::Reserved));
        assert_eq!(lot.allocate("X", 2).unwrap_err(), AllocationError::SlotReserved(2));
    }

    #[test]
    fn test_unique_occupants_config() {
        let config = AllocatorConfig {
            total_slots: 3,
            unique_occupants: true,
        };
        let mut lot = ParkingLotService::with_clock(config, Arc::new(ManualTimeSource::new(0)));

        lot.allocate("AB12", 1).unwrap();
        assert!(matches!(
            lot.allocate("AB12", 3),
            Err(AllocationError::DuplicateOccupant { slot: 1, .. })
        ));
        assert_eq!(lot.stats().occupied, 1);
    }

    #[test]
    fn test_quote_then_payment_flow() {
        let (mut lot, clock) = lot(3);
        let observer = Arc::new(RecordingObserver::new());
        lot.subscribe(observer.clone());

        let quote = lot.allocate("AB12", 2).unwrap().quote.unwrap();
        clock.advance(5_000);
        let receipt = lot.settle_payment(&quote).unwrap();

        assert_eq!(receipt.quote.amount, Money::from_cents(800));
        assert_eq!(receipt.paid_at, quote.quoted_at + 5_000);

        let events = observer.events();
        assert!(matches!(events.last(), Some(LotEvent::PaymentSettled(_))));
        assert_eq!(lot.stats(), stats(3, 2, 1, 0));
    }
}
