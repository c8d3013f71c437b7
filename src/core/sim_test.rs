#[cfg(test)]
mod sim_tests {
    use crate::core::alerts::model::{NotificationKind, MAX_WARNINGS};
    use crate::core::config::EngineConfig;
    use crate::core::coordinator::{on_config_changed, on_tick, TickSnapshot};
    use crate::core::model::{Entity, WorldFlag};
    use crate::core::state::EngineState;
    use crate::core::varbits::{Varbit, VarbitState};

    fn tick(flags: &[WorldFlag], varbits: VarbitState, others: &[(u64, i32)]) -> TickSnapshot {
        let local_actor = Entity::new(1, "Ironman", 60);
        let mut entities = vec![local_actor.clone()];
        entities.extend(
            others
                .iter()
                .map(|(id, level)| Entity::new(*id, format!("Player{}", id), *level)),
        );
        TickSnapshot {
            world_flags: flags.iter().copied().collect(),
            varbits,
            local_actor,
            entities,
            wilderness_depth_label: Some("Level: 15".to_string()),
        }
    }

    #[test]
    fn simulate_wilderness_trip() {
        let config = EngineConfig::default();
        let wildy = VarbitState::new().with(Varbit::InWilderness, 1);
        let crowd: Vec<(u64, i32)> = (2..10).map(|id| (id, 60)).collect();
        let mut state = EngineState::new();
        let mut sent = Vec::new();

        let ticks = vec![
            // Bank on a regular world
            tick(&[WorldFlag::Members], VarbitState::new(), &crowd),
            // Into the wilderness with a crowd: capped at five
            tick(&[WorldFlag::Members], wildy.clone(), &crowd),
            tick(&[WorldFlag::Members], wildy.clone(), &crowd),
            // Crowd gone: counter resets while still hostile
            tick(&[WorldFlag::Members], wildy.clone(), &[]),
            tick(&[WorldFlag::Members], wildy.clone(), &[(42, 70)]),
            // Back out
            tick(&[WorldFlag::Members], VarbitState::new(), &crowd),
        ];

        for snapshot in &ticks {
            let outcome = on_tick(snapshot, &config, state);
            assert!(outcome.notifications.len() as u32 <= MAX_WARNINGS);
            sent.push(outcome.notifications.len());
            state = outcome.state;
        }

        assert_eq!(sent, vec![0, 5, 0, 0, 1, 0]);
        assert_eq!(state.warning_count, 0);
    }

    #[test]
    fn simulate_deadman_attackers_only() {
        let config = EngineConfig {
            pvp_warnings_enabled: true,
            attackers_only_mode: true,
        };
        let mut state = EngineState::new();

        let snapshot = tick(&[WorldFlag::Deadman], VarbitState::new(), &[(2, 1), (3, 126)]);
        let outcome = on_tick(&snapshot, &config, state);
        state = outcome.state;

        assert_eq!(outcome.notifications.len(), 2);
        assert!(outcome
            .notifications
            .iter()
            .all(|n| n.kind == NotificationKind::Presence));

        // Turning the filter off clears the cached gate only
        let config = EngineConfig::default();
        state = on_config_changed(&config, state);
        assert!(!state.attackers_only);
        assert!(state.in_hostile_zone);
        assert_eq!(state.warning_count, 2);

        let outcome = on_tick(&snapshot, &config, state);
        assert!(outcome
            .notifications
            .iter()
            .all(|n| n.kind == NotificationKind::Leveled));
        assert_eq!(outcome.state.warning_count, 4);
    }

    #[test]
    fn simulate_safe_zone_on_pvp_world() {
        let config = EngineConfig::default();
        let safe = VarbitState::new().with(Varbit::SafeZone, 1);
        let mut state = EngineState::new();

        let outcome = on_tick(&tick(&[WorldFlag::Pvp], VarbitState::new(), &[(2, 60)]), &config, state);
        assert_eq!(outcome.notifications.len(), 1);
        state = outcome.state;

        let outcome = on_tick(&tick(&[WorldFlag::Pvp], safe, &[(2, 60), (3, 61)]), &config, state);
        assert!(outcome.notifications.is_empty());
        assert!(outcome.state.in_hostile_zone);
        assert_eq!(outcome.state.warning_count, 0);
    }

    #[test]
    fn simulate_same_player_every_tick() {
        let config = EngineConfig::default();
        let snapshot = tick(&[WorldFlag::HighRisk], VarbitState::new(), &[(2, 60)]);
        let mut state = EngineState::new();

        // No deduplication: the same player is reported until the cap
        let mut total = 0;
        for _ in 0..8 {
            let outcome = on_tick(&snapshot, &config, state);
            total += outcome.notifications.len();
            state = outcome.state;
        }
        assert_eq!(total, MAX_WARNINGS as usize);
    }
}
