//! The fetched frame sequence and its load status.
//!
//! A sequence is published in one step or not at all. Frames that fail
//! validation are left out of the published sequence and recorded as
//! diagnostics instead.

use std::ops::Deref;
use std::rc::Rc;

use serde::Deserialize;
use yew::Reducible;

use crate::error::FetchResult;
use crate::model::Frame;

/// Published frames. Two sequences are equal only if they are the same publish.
#[derive(Clone, Debug)]
pub struct FrameSequence(Rc<[Frame]>);

impl Default for FrameSequence {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FrameSequence {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self(frames.into())
    }
}

impl PartialEq for FrameSequence {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for FrameSequence {
    type Target = [Frame];

    fn deref(&self) -> &[Frame] {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameDiagnostic {
    /// Position of the frame in the response, before any were dropped.
    pub index: usize,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Default)]
pub struct LoadedFrames {
    pub frames: Vec<Frame>,
    pub diagnostics: Vec<FrameDiagnostic>,
}

#[derive(Deserialize)]
struct SimulationResponse {
    simulation_data: Vec<serde_json::Value>,
}

/// Decode a `{ simulation_data: [...] }` body, dropping frames that fail validation.
pub fn decode_simulation(body: &str, default_radius: f64) -> FetchResult<LoadedFrames> {
    let response: SimulationResponse = serde_json::from_str(body)?;
    let mut loaded = LoadedFrames::default();
    for (index, value) in response.simulation_data.into_iter().enumerate() {
        match Frame::decode(value, default_radius) {
            Ok(frame) => loaded.frames.push(frame),
            Err(err) => {
                log::warn!("skipping frame {}: {}", index, err);
                loaded.diagnostics.push(FrameDiagnostic {
                    index,
                    message: err.to_string(),
                });
            }
        }
    }
    Ok(loaded)
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameStore {
    status: LoadStatus,
    frames: FrameSequence,
    diagnostics: Rc<[FrameDiagnostic]>,
    /// Id of the load whose result will be accepted.
    request: u32,
}

impl Default for FrameStore {
    fn default() -> Self {
        Self {
            status: LoadStatus::Idle,
            frames: FrameSequence::default(),
            diagnostics: Rc::from(Vec::new()),
            request: 0,
        }
    }
}

impl FrameStore {
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn frames(&self) -> &FrameSequence {
        &self.frames
    }

    pub fn frame(&self, index: Option<usize>) -> Option<&Frame> {
        index.and_then(|i| self.frames.get(i))
    }

    pub fn diagnostics(&self) -> &[FrameDiagnostic] {
        &self.diagnostics
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, LoadStatus::Failed(_))
    }

    fn begin(&mut self, request: u32) {
        self.request = request;
        self.status = LoadStatus::Loading;
        self.frames = FrameSequence::default();
        self.diagnostics = Rc::from(Vec::new());
    }

    fn publish(&mut self, request: u32, loaded: LoadedFrames) {
        if request != self.request {
            log::debug!("dropping result of superseded load {}", request);
            return;
        }
        log::info!(
            "published {} frames ({} skipped)",
            loaded.frames.len(),
            loaded.diagnostics.len()
        );
        self.status = LoadStatus::Ready;
        self.frames = FrameSequence::new(loaded.frames);
        self.diagnostics = loaded.diagnostics.into();
    }

    fn fail(&mut self, request: u32, message: String) {
        if request != self.request {
            return;
        }
        self.status = LoadStatus::Failed(message);
        self.frames = FrameSequence::default();
        self.diagnostics = Rc::from(Vec::new());
    }
}

// ---------------- Reducer & Actions -----------------
pub enum StoreAction {
    Begin { request: u32 },
    Publish { request: u32, loaded: LoadedFrames },
    Fail { request: u32, message: String },
}

impl Reducible for FrameStore {
    type Action = StoreAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use StoreAction::*;
        let mut new = (*self).clone();
        match action {
            Begin { request } => new.begin(request),
            Publish { request, loaded } => new.publish(request, loaded),
            Fail { request, message } => new.fail(request, message),
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{"simulation_data": [
        {"iteration": 1, "time_step": 0, "towers": [[1, 1]], "targets": [[4, 4]],
         "rockets": [{"start": [0, 0], "path": [[0, 0], [1, 0]]}]},
        {"iteration": 1, "time_step": 1, "towers": [[1, 1]], "targets": [[4, 4]],
         "rockets": [{"start": [0, 0], "path": []}]},
        {"iteration": 1, "time_step": 2, "towers": [[1, 1]], "targets": [[4, 4]],
         "rockets": [{"start": [0, 0], "path": [[0, 0], [1, 0]]}]}
    ]}"#;

    fn reduce(store: FrameStore, action: StoreAction) -> FrameStore {
        (*Rc::new(store).reduce(action)).clone()
    }

    #[test]
    fn malformed_frames_are_skipped_with_diagnostic() {
        let loaded = decode_simulation(BODY, 3.0).unwrap();
        assert_eq!(loaded.frames.len(), 2);
        assert_eq!(loaded.frames[1].time_step, 2);
        assert_eq!(loaded.diagnostics.len(), 1);
        assert_eq!(loaded.diagnostics[0].index, 1);
    }

    #[test]
    fn body_without_frame_list_is_an_error() {
        assert!(decode_simulation(r#"{"detail": "oops"}"#, 3.0).is_err());
        assert!(decode_simulation("<html>", 3.0).is_err());
    }

    #[test]
    fn publish_replaces_sequence_atomically() {
        let store = reduce(FrameStore::default(), StoreAction::Begin { request: 1 });
        assert_eq!(store.status(), &LoadStatus::Loading);
        assert!(store.frames().is_empty());

        let loaded = decode_simulation(BODY, 3.0).unwrap();
        let store = reduce(store, StoreAction::Publish { request: 1, loaded });
        assert_eq!(store.status(), &LoadStatus::Ready);
        assert_eq!(store.frames().len(), 2);
        assert_eq!(store.diagnostics().len(), 1);
        assert_eq!(store.frame(Some(1)).map(|f| f.time_step), Some(2));
        assert!(store.frame(Some(2)).is_none());
    }

    #[test]
    fn failure_publishes_empty_sequence() {
        let store = reduce(FrameStore::default(), StoreAction::Begin { request: 1 });
        let store = reduce(
            store,
            StoreAction::Fail {
                request: 1,
                message: "network error".into(),
            },
        );
        assert!(store.is_failed());
        assert!(store.frames().is_empty());
    }

    #[test]
    fn superseded_results_are_dropped() {
        let store = reduce(FrameStore::default(), StoreAction::Begin { request: 1 });
        let store = reduce(store, StoreAction::Begin { request: 2 });
        let loaded = decode_simulation(BODY, 3.0).unwrap();
        let store = reduce(store, StoreAction::Publish { request: 1, loaded });
        assert_eq!(store.status(), &LoadStatus::Loading);
        assert!(store.frames().is_empty());
    }

    #[test]
    fn sequences_compare_by_publish() {
        let a = FrameSequence::new(Vec::new());
        let b = FrameSequence::new(Vec::new());
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
