use crate::state::playback::{MAX_SPEED_MS, MIN_SPEED_MS};
use crate::util::format_speed;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub speed_ms: u32,
    pub on_speed: Callback<u32>,
    pub on_run: Callback<()>,
    pub loading: bool,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let run_cb = {
        let cb = props.on_run.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let speed_cb = {
        let cb = props.on_speed.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(ms) = input.value().parse::<u32>() {
                cb.emit(ms);
            }
        })
    };
    html! {<div style="display:flex; align-items:center; justify-content:center; gap:12px; padding:10px;">
        <button onclick={run_cb} disabled={props.loading}>{"Run Simulation"}</button>
        <label style="display:flex; align-items:center; gap:8px;">
            {"Animation Speed:"}
            <input
                id="speed-slider"
                type="range"
                min={MIN_SPEED_MS.to_string()}
                max={MAX_SPEED_MS.to_string()}
                value={props.speed_ms.to_string()}
                oninput={speed_cb}
            />
        </label>
        <span style="font-variant-numeric:tabular-nums; min-width:110px;">{ format_speed(props.speed_ms) }</span>
    </div>}
}
