use super::{
    controls_panel::ControlsPanel, header::Header, legend_panel::LegendPanel,
    replay_view::ReplayView, status_line::StatusLine,
};
use crate::config::ViewerConfig;
use crate::engine::Engine;
use crate::net::fetch_simulation;
use crate::state::{FrameStore, LoadStatus, PlaybackAction, PlaybackClock, StoreAction};
use crate::timer::Interval;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| ViewerConfig::from_env());
    let engine = Engine::new(config.mapper(), config.engine);
    let store = use_reducer(FrameStore::default);
    let clock = {
        let speed = config.initial_speed_ms;
        use_reducer(move || PlaybackClock::new(speed))
    };
    // Bumped by "Run Simulation"; each value is one load.
    let load_request = use_state(|| 1u32);

    // Load the sequence (once at mount, then on explicit re-run)
    {
        let store = store.clone();
        let clock = clock.clone();
        let config = config.clone();
        use_effect_with(*load_request, move |request| {
            let request = *request;
            clock.dispatch(PlaybackAction::Stop);
            store.dispatch(StoreAction::Begin { request });
            let url = config.simulation_url();
            let radius = config.default_tower_radius;
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_simulation(&url, radius).await {
                    Ok(loaded) => store.dispatch(StoreAction::Publish { request, loaded }),
                    Err(err) => {
                        log::error!("simulation load failed: {}", err);
                        store.dispatch(StoreAction::Fail {
                            request,
                            message: err.to_string(),
                        });
                    }
                }
            });
            || ()
        });
    }
    // Published sequence drives the clock's frame count
    {
        let clock = clock.clone();
        use_effect_with(store.frames().clone(), move |frames| {
            clock.dispatch(PlaybackAction::Load {
                frame_count: frames.len(),
            });
            || ()
        });
    }
    // One interval per TimerSpec; the previous one is cleared on change
    {
        let clock_handle = clock.clone();
        use_effect_with(clock.timer(), move |timer| {
            let interval = (*timer).and_then(|spec| {
                let clock = clock_handle.clone();
                Interval::start(spec.interval_ms, move || {
                    clock.dispatch(PlaybackAction::Tick {
                        generation: spec.generation,
                    })
                })
            });
            move || drop(interval)
        });
    }

    let on_speed = {
        let clock = clock.clone();
        Callback::from(move |ms: u32| clock.dispatch(PlaybackAction::SetSpeed(ms)))
    };
    let on_run = {
        let load_request = load_request.clone();
        Callback::from(move |_| load_request.set(*load_request + 1))
    };

    let index = clock.current_index();
    let frame = store.frame(index).cloned();
    let rocket_count = frame.as_ref().map(|f| f.rockets.len()).unwrap_or(0);

    html! {
        <div style="font-family:sans-serif;">
            <Header />
            <div style="display:flex; flex-direction:column; align-items:center; padding:8px;">
                <h1 style="margin:8px 0 0;">{"Air Defense Simulation"}</h1>
                <StatusLine
                    status={store.status().clone()}
                    frame={frame}
                    skipped={store.diagnostics().len()}
                />
                <ControlsPanel
                    speed_ms={clock.speed_ms()}
                    on_speed={on_speed}
                    on_run={on_run}
                    loading={*store.status() == LoadStatus::Loading}
                />
                <div style="display:flex; gap:16px; align-items:flex-start;">
                    <ReplayView
                        frames={store.frames().clone()}
                        index={index}
                        engine={engine}
                        width={config.canvas_width}
                        height={config.canvas_height}
                    />
                    <LegendPanel rocket_count={rocket_count} />
                </div>
            </div>
        </div>
    }
}
