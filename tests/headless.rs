use torus_snake::game::{Cell, Direction, GameConfig, GameEngine};
use torus_snake::modes::{HeadlessConfig, HeadlessMode, headless::parse_moves};

#[test]
fn seeded_runs_produce_identical_reports() {
    let run = || {
        let settings = HeadlessConfig {
            ticks: 300,
            moves: "..D..L...U....R".repeat(10),
            report_path: None,
        };
        let mut mode = HeadlessMode::new(GameConfig::default().with_seed(77), settings).unwrap();
        let report = mode.run().unwrap();
        (
            report.body,
            report.target,
            report.summary.targets_eaten,
            report.summary.resets,
            report.board,
        )
    };

    assert_eq!(run(), run());
}

#[test]
fn report_describes_final_state() {
    let settings = HeadlessConfig {
        ticks: 50,
        moves: "URDL".to_string(),
        report_path: None,
    };
    let mut mode = HeadlessMode::new(GameConfig::default().with_seed(5), settings).unwrap();
    let report = mode.run().unwrap();
    let state = mode.state();

    assert_eq!(report.ticks, 50);
    assert_eq!(report.head, state.snake.head());
    assert_eq!(report.body, state.snake.occupied());
    assert_eq!(report.target, state.target.position());
    assert_eq!(report.board.len(), 24);
    assert!(report.board.iter().all(|row| row.chars().count() == 32));

    let head_row = &report.board[report.head.y as usize];
    assert_eq!(head_row.chars().nth(report.head.x as usize), Some('@'));
}

#[test]
fn summary_totals_match_engine_ticks() {
    let config = GameConfig::default().with_seed(31);
    let script = "..D..L...U....R".repeat(20);
    let settings = HeadlessConfig {
        ticks: 400,
        moves: script.clone(),
        report_path: None,
    };
    let report = HeadlessMode::new(config.clone(), settings)
        .unwrap()
        .run()
        .unwrap();

    let mut engine = GameEngine::new(config).unwrap();
    let mut state = engine.new_game();
    let moves = parse_moves(&script).unwrap();
    let (mut eaten, mut resets, mut longest) = (0, 0, 0);
    for tick in 0..400 {
        if let Some(Some(direction)) = moves.get(tick) {
            state.snake.queue_direction(*direction);
        }
        let info = engine.tick(&mut state);
        eaten += u32::from(info.ate_target);
        resets += u32::from(info.collided);
        longest = longest.max(info.length);
    }

    assert_eq!(report.ticks, state.ticks);
    assert_eq!(report.summary.targets_eaten, eaten);
    assert_eq!(report.summary.resets, resets);
    assert_eq!(report.summary.longest_length, longest);
    assert_eq!(report.body, state.snake.occupied());
}

#[test]
fn bad_script_is_rejected_up_front() {
    let settings = HeadlessConfig {
        ticks: 10,
        moves: "UUZ".to_string(),
        report_path: None,
    };
    assert!(HeadlessMode::new(GameConfig::default(), settings).is_err());
}

#[test]
fn invalid_config_is_rejected() {
    let config = GameConfig {
        start_cell: Some(Cell::new(40, 0)),
        start_direction: Direction::Left,
        ..GameConfig::default()
    };
    assert!(HeadlessMode::new(config, HeadlessConfig::default()).is_err());
}
