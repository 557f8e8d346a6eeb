#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::events::{Alert, AudioEvent};
    use crate::map::{Map, MapError};
    use crate::state::GameSnapshot;
    use crate::types::{GridPos, SimTime};

    /// Verify the enums round-trip through serde_json.
    #[test]
    fn test_enemy_kind_serde() {
        let variants = vec![EnemyKind::Virus, EnemyKind::Bacteria, EnemyKind::FineParticle];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_tower_kind_serde() {
        let variants = vec![TowerKind::Mucus, TowerKind::Macrophage, TowerKind::Cough];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: TowerKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_state_tag_serde() {
        let variants = vec![
            StateTag::Initializing,
            StateTag::WaveStarting,
            StateTag::Playing,
            StateTag::WaveCleared,
            StateTag::Won,
            StateTag::Lost,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: StateTag = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify AttackStrategy round-trips, including the nested composite.
    #[test]
    fn test_attack_strategy_serde() {
        let strategy = AttackStrategy::Composite {
            strategies: vec![
                AttackStrategy::SlowEffect {
                    factor: 0.5,
                    duration: 2.0,
                    multiplier: 0.0,
                },
                AttackStrategy::SingleTarget { multiplier: 1.0 },
            ],
        };
        let json = serde_json::to_string(&strategy).unwrap();
        let back: AttackStrategy = serde_json::from_str(&json).unwrap();
        assert_eq!(strategy, back);
    }

    #[test]
    fn test_heavy_damage_default_multiplier() {
        assert!(matches!(
            AttackStrategy::heavy_default(),
            AttackStrategy::HeavyDamage { multiplier } if multiplier == 2.0
        ));
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::PlaceTower {
                kind: TowerKind::Mucus,
                x: 3,
                y: 4,
            },
            PlayerCommand::RequestNextWave,
            PlayerCommand::SetCellSize { size: 64.0 },
            PlayerCommand::Restart,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify AudioEvent round-trips through serde.
    #[test]
    fn test_audio_event_serde() {
        let events = vec![
            AudioEvent::WaveStart { wave: 1 },
            AudioEvent::EnemyDestroyed {
                kind: EnemyKind::Virus,
                reward: 10,
            },
            AudioEvent::TowerAttack {
                tower: TowerKind::Cough,
            },
            AudioEvent::GameLost,
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: AudioEvent = serde_json::from_str(&json).unwrap();
        }
    }

    #[test]
    fn test_alert_serde() {
        let alert = Alert {
            level: AlertLevel::Warning,
            message: "wave 4 is out of range".to_string(),
            tick: 120,
        };
        let json = serde_json::to_string(&alert).unwrap();
        let back: Alert = serde_json::from_str(&json).unwrap();
        assert_eq!(alert.message, back.message);
        assert_eq!(alert.tick, back.tick);
    }

    /// Verify GameSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.state, back.state);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    // ---- Grid geometry ----

    #[test]
    fn test_grid_to_world_tile_center() {
        let pos = GridPos::new(2, 3).to_world(50.0);
        assert_eq!(pos.x, 125.0);
        assert_eq!(pos.y, 175.0);

        // Cell size is applied at conversion time, not cached.
        let pos = GridPos::new(2, 3).to_world(10.0);
        assert_eq!(pos.x, 25.0);
        assert_eq!(pos.y, 35.0);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance(1.0 / 60.0);
        }
        assert_eq!(time.tick, 60);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-4);
    }

    // ---- Map and path validation ----

    #[test]
    fn test_path_validation_accepts_adjacent() {
        let map = Map::new(5, 5);
        let path = vec![GridPos::new(0, 0), GridPos::new(1, 0), GridPos::new(1, 1)];
        assert!(map.validate_path(&path).is_ok());
    }

    #[test]
    fn test_path_validation_rejects_non_adjacent() {
        let map = Map::new(5, 5);
        let path = vec![GridPos::new(0, 0), GridPos::new(2, 0)];
        assert_eq!(
            map.validate_path(&path),
            Err(MapError::NotAdjacent {
                from: GridPos::new(0, 0),
                to: GridPos::new(2, 0),
            })
        );
    }

    #[test]
    fn test_path_validation_rejects_empty() {
        let map = Map::new(5, 5);
        assert_eq!(map.validate_path(&[]), Err(MapError::EmptyPath));
    }

    #[test]
    fn test_path_validation_rejects_out_of_bounds() {
        let map = Map::new(5, 5);
        let path = vec![GridPos::new(4, 0), GridPos::new(5, 0)];
        assert_eq!(
            map.validate_path(&path),
            Err(MapError::OutOfBounds { x: 5, y: 0 })
        );
    }

    #[test]
    fn test_set_path_keeps_previous_on_failure() {
        let mut map = Map::new(5, 5);
        let good = vec![GridPos::new(0, 0), GridPos::new(1, 0)];
        map.set_path(good.clone()).unwrap();

        let bad = vec![GridPos::new(0, 0), GridPos::new(3, 3)];
        assert!(map.set_path(bad).is_err());
        assert_eq!(map.path(), good.as_slice());
        assert!(map.tile_at(1, 0).unwrap().path);
    }

    #[test]
    fn test_set_path_resets_old_tiles() {
        let mut map = Map::new(5, 5);
        map.set_path(vec![GridPos::new(0, 0), GridPos::new(1, 0)])
            .unwrap();
        map.set_path(vec![GridPos::new(0, 4), GridPos::new(1, 4)])
            .unwrap();

        let old = map.tile_at(0, 0).unwrap();
        assert!(!old.path);
        assert!(map.tile_at(0, 4).unwrap().path);
    }

    #[test]
    fn test_tile_path_and_placeable_exclusive() {
        let mut tile = crate::map::Tile::default();
        tile.set_as_placeable();
        assert!(tile.can_place_tower());
        tile.set_as_path();
        assert!(tile.path && !tile.placeable);
        assert!(!tile.can_place_tower());
    }

    #[test]
    fn test_default_layout() {
        let map = Map::with_default_layout();
        assert_eq!(map.width(), 15);
        assert_eq!(map.height(), 15);
        assert_eq!(map.path_start(), Some(GridPos::new(0, 1)));
        assert_eq!(map.path_end(), Some(GridPos::new(14, 8)));
        // Path tiles refuse towers, everything else accepts them.
        assert!(!map.can_place_tower_at(0, 1));
        assert!(map.can_place_tower_at(0, 0));
        // Out of bounds is never placeable.
        assert!(!map.can_place_tower_at(-1, 0));
        assert!(!map.can_place_tower_at(15, 15));
    }
}
