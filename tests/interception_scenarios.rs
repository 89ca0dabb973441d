//! Interception and trajectory scenarios, end to end through the engine.

use airdefense_replay::engine::{
    Bearings, CoordinateMapper, Engine, EngineConfig, InterceptionSource, Point, Primitive,
    evaluate,
};
use airdefense_replay::model::{Frame, GridSize, Position, Rocket, Tower};

fn pos(points: &[(i32, i32)]) -> Vec<Position> {
    points.iter().map(|&(r, c)| Position::new(r, c)).collect()
}

fn frame_with(path: &[(i32, i32)], tower: (i32, i32), radius: f64) -> Frame {
    let path = pos(path);
    Frame {
        iteration: 0,
        time_step: 0,
        grid: GridSize { rows: 6, cols: 6 },
        towers: vec![Tower {
            position: Position::new(tower.0, tower.1),
            radius,
        }],
        targets: vec![],
        rockets: vec![Rocket {
            start: path[0],
            end: *path.last().unwrap(),
            path,
            intercepted: None,
        }],
    }
}

fn engine() -> (Engine, CoordinateMapper) {
    let mapper = CoordinateMapper::new(0.0, 0.0, 1.0);
    (Engine::new(mapper, EngineConfig::default()), mapper)
}

fn segments(layer: &[Primitive]) -> Vec<(Point, Point)> {
    layer
        .iter()
        .filter_map(|p| match p {
            Primitive::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
        .collect()
}

fn px(row: i32, col: i32) -> Point {
    Point::new(col as f64, row as f64)
}

#[test]
fn scenario_a_truncates_at_interception() {
    let frame = frame_with(&[(0, 0), (1, 1), (2, 2), (3, 3)], (2, 2), 1.0);
    let result = evaluate(&frame.rockets[0], &frame.towers, InterceptionSource::Recompute);
    assert!(result.intercepted);
    assert_eq!(result.index, Some(2));

    let (engine, _) = engine();
    let (scene, _) = engine.scene(&frame, &Bearings::new());
    assert_eq!(
        segments(&scene.dynamic_layer),
        vec![(px(0, 0), px(1, 1)), (px(1, 1), px(2, 2))]
    );
    assert!(!segments(&scene.dynamic_layer).contains(&(px(2, 2), px(3, 3))));
    match scene.dynamic_layer.last() {
        Some(Primitive::Text { at, .. }) => assert_eq!(*at, px(2, 2)),
        other => panic!("expected interception mark, got {:?}", other),
    }
    assert!(!scene
        .dynamic_layer
        .iter()
        .any(|p| matches!(p, Primitive::Arrow { .. })));
}

#[test]
fn scenario_b_draws_full_path_with_marker() {
    let frame = frame_with(&[(0, 0), (1, 1), (2, 2)], (5, 5), 1.0);
    let result = evaluate(&frame.rockets[0], &frame.towers, InterceptionSource::Recompute);
    assert!(!result.intercepted);

    let (engine, _) = engine();
    let (scene, bearings) = engine.scene(&frame, &Bearings::new());
    assert_eq!(
        segments(&scene.dynamic_layer),
        vec![(px(0, 0), px(1, 1)), (px(1, 1), px(2, 2))]
    );
    let expected = airdefense_replay::engine::bearing(Position::new(0, 0), Position::new(2, 2), None);
    match scene.dynamic_layer.last() {
        Some(Primitive::Arrow { points, bearing, .. }) => {
            assert_eq!(*bearing, expected);
            // the arrow sits on (2, 2): its centroid is within a few pixels
            let cx = points.iter().map(|p| p.x).sum::<f64>() / 3.0;
            let cy = points.iter().map(|p| p.y).sum::<f64>() / 3.0;
            assert!((cx - 2.0).abs() < 8.0 && (cy - 2.0).abs() < 8.0);
        }
        other => panic!("expected directional marker, got {:?}", other),
    }
    assert_eq!(bearings.get(&0), Some(&expected));
}

#[test]
fn evaluation_is_deterministic() {
    let frame = frame_with(&[(0, 0), (0, 2), (0, 4), (0, 6)], (0, 4), 1.5);
    let first = evaluate(&frame.rockets[0], &frame.towers, InterceptionSource::Recompute);
    for _ in 0..10 {
        assert_eq!(
            evaluate(&frame.rockets[0], &frame.towers, InterceptionSource::Recompute),
            first
        );
    }
}

#[test]
fn tower_order_only_changes_the_tie_break() {
    let path = pos(&[(0, 0), (2, 0), (4, 0)]);
    let rocket = Rocket {
        start: path[0],
        end: path[2],
        path,
        intercepted: None,
    };
    let a = Tower { position: Position::new(2, 1), radius: 1.0 };
    let b = Tower { position: Position::new(3, 0), radius: 1.0 };
    let ab = evaluate(&rocket, &[a, b], InterceptionSource::Recompute);
    let ba = evaluate(&rocket, &[b, a], InterceptionSource::Recompute);
    assert_eq!((ab.intercepted, ab.index), (ba.intercepted, ba.index));
    assert_eq!(ab.tower, Some(0));
    assert_eq!(ba.tower, Some(0));
}

#[test]
fn backend_flag_draws_full_path_and_marks_last_point() {
    let mut frame = frame_with(&[(0, 0), (1, 1), (2, 2)], (5, 5), 0.0);
    frame.rockets[0].intercepted = Some(true);
    let mapper = CoordinateMapper::new(0.0, 0.0, 1.0);
    let engine = Engine::new(
        mapper,
        EngineConfig {
            source: InterceptionSource::BackendFlag,
            ..EngineConfig::default()
        },
    );
    let (scene, _) = engine.scene(&frame, &Bearings::new());
    assert_eq!(segments(&scene.dynamic_layer).len(), 2);
    assert!(matches!(
        scene.dynamic_layer.last(),
        Some(Primitive::Text { at, .. }) if *at == px(2, 2)
    ));
}
