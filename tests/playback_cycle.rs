//! Clock cycling and the load-failure path.

use airdefense_replay::engine::{Bearings, Color, CoordinateMapper, Engine, EngineConfig, Point, TextAnchor};
use airdefense_replay::model::Frame;
use airdefense_replay::render::{Surface, paint_frame};
use airdefense_replay::state::PlaybackClock;
use airdefense_replay::state::frames::decode_simulation;

fn tick(clock: &mut PlaybackClock) -> Option<usize> {
    let generation = clock.timer().map(|t| t.generation).unwrap_or_default();
    clock.tick(generation)
}

#[test]
fn every_index_is_visited_once_per_cycle() {
    for n in 1..=9 {
        let mut clock = PlaybackClock::default();
        clock.set_frame_count(n);
        let mut seen = vec![clock.current_index().unwrap()];
        for _ in 1..n {
            seen.push(tick(&mut clock).unwrap());
        }
        let mut sorted = seen.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..n).collect::<Vec<_>>(), "n = {}", n);
        assert_eq!(seen, (0..n).collect::<Vec<_>>());
        // next cycle starts over
        assert_eq!(tick(&mut clock), Some(0));
    }
}

#[test]
fn speed_change_mid_cycle_keeps_the_cycle() {
    let mut clock = PlaybackClock::default();
    clock.set_frame_count(4);
    tick(&mut clock);
    clock.set_speed(1500);
    assert_eq!(clock.current_index(), Some(1));
    assert_eq!(tick(&mut clock), Some(2));
    assert_eq!(tick(&mut clock), Some(3));
    assert_eq!(tick(&mut clock), Some(0));
}

#[derive(Default)]
struct CountingSurface {
    calls: usize,
}

impl Surface for CountingSurface {
    fn clear(&mut self) {
        self.calls += 1;
    }
    fn line(&mut self, _: Point, _: Point, _: &Color, _: f64) {
        self.calls += 1;
    }
    fn circle(&mut self, _: Point, _: f64, _: &Color, _: f64) {
        self.calls += 1;
    }
    fn rect(&mut self, _: Point, _: f64, _: f64, _: &Color) {
        self.calls += 1;
    }
    fn polygon(&mut self, _: &[Point], _: &Color) {
        self.calls += 1;
    }
    fn text(&mut self, _: Point, _: &str, _: &Color, _: f64, _: TextAnchor) {
        self.calls += 1;
    }
}

#[test]
fn failed_load_never_starts_playback_or_paints() {
    // the store publishes an empty sequence when the body is unusable
    assert!(decode_simulation("Internal Server Error", 3.0).is_err());
    let frames: Vec<Frame> = Vec::new();

    let mut clock = PlaybackClock::default();
    clock.set_frame_count(frames.len());
    assert_eq!(clock.timer(), None);
    assert_eq!(clock.current_index(), None);

    let engine = Engine::new(CoordinateMapper::new(0.0, 0.0, 10.0), EngineConfig::default());
    let mut surface = CountingSurface::default();
    let mut bearings = Bearings::new();
    assert_eq!(
        paint_frame(&engine, &frames, clock.current_index(), &mut bearings, &mut surface),
        None
    );
    assert_eq!(surface.calls, 0);
}

#[test]
fn each_tick_repaints_the_whole_frame() {
    let body = r#"{"simulation_data": [
        {"iteration": 0, "time_step": 0, "N": 2, "M": 2, "towers": [[1, 1]], "targets": [],
         "rockets": [{"start": [0, 0], "path": [[0, 0], [0, 1], [0, 2]]}]},
        {"iteration": 0, "time_step": 1, "N": 2, "M": 2, "towers": [[1, 1]], "targets": [],
         "rockets": [{"start": [0, 0], "path": [[0, 0], [0, 1], [0, 2]]}]}
    ]}"#;
    let frames = decode_simulation(body, 0.0).unwrap().frames;
    let engine = Engine::new(CoordinateMapper::new(0.0, 0.0, 10.0), EngineConfig::default());
    let mut clock = PlaybackClock::default();
    clock.set_frame_count(frames.len());
    let mut bearings = Bearings::new();

    let mut counts = Vec::new();
    for _ in 0..4 {
        let mut surface = CountingSurface::default();
        let drawn = paint_frame(&engine, &frames, clock.current_index(), &mut bearings, &mut surface);
        assert!(drawn.is_some());
        counts.push(surface.calls);
        tick(&mut clock);
    }
    // same content each frame under full-path drawing, so the same number of calls
    assert!(counts.windows(2).all(|w| w[0] == w[1]));
    assert!(bearings.contains_key(&0));
}
