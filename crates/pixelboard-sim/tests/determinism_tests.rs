use pixelboard_core::commands::BoardCommand;
use pixelboard_core::types::SchemeId;
use pixelboard_sim::config::BoardConfig;
use pixelboard_sim::BoardEngine;

fn setup_board(engine: &mut BoardEngine) {
    engine.queue_commands(std::iter::repeat(BoardCommand::SpawnRandomVPong).take(12));
    engine.queue_command(BoardCommand::PaintSquare { x: 4, y: 4 });
}

fn config(seed: u64) -> BoardConfig {
    BoardConfig {
        viewport_width: 320,
        viewport_height: 240,
        square_size: Some(16),
        seed,
        ..Default::default()
    }
}

#[test]
fn test_same_seed_same_snapshots() {
    let mut a = BoardEngine::new(config(12345)).unwrap();
    let mut b = BoardEngine::new(config(12345)).unwrap();
    setup_board(&mut a);
    setup_board(&mut b);

    for tick in 0..300 {
        if tick == 120 {
            for engine in [&mut a, &mut b] {
                engine.queue_command(BoardCommand::SetActiveColorScheme {
                    scheme_id: SchemeId(2),
                });
            }
        }
        let json_a = serde_json::to_string(&a.tick()).unwrap();
        let json_b = serde_json::to_string(&b.tick()).unwrap();
        assert_eq!(json_a, json_b, "snapshots diverged at tick {tick}");
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut a = BoardEngine::new(config(111)).unwrap();
    let mut b = BoardEngine::new(config(222)).unwrap();
    setup_board(&mut a);
    setup_board(&mut b);

    let json_a = serde_json::to_string(&a.tick()).unwrap();
    let json_b = serde_json::to_string(&b.tick()).unwrap();
    assert_ne!(json_a, json_b);
}

#[test]
fn test_snapshot_json_round_trip_preserves_board() {
    let mut engine = BoardEngine::new(config(9)).unwrap();
    setup_board(&mut engine);
    for _ in 0..40 {
        engine.tick();
    }

    let snapshot = engine.snapshot();
    let json = serde_json::to_string_pretty(&snapshot).unwrap();
    let restored: pixelboard_core::state::BoardSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, snapshot);
    assert_eq!(restored.squares.len(), (restored.columns * restored.rows) as usize);
}
