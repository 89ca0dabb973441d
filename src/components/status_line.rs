use crate::state::LoadStatus;
use crate::util::frame_caption;
use crate::model::Frame;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusLineProps {
    pub status: LoadStatus,
    pub frame: Option<Frame>,
    #[prop_or_default]
    pub skipped: usize,
}

#[function_component(StatusLine)]
pub fn status_line(props: &StatusLineProps) -> Html {
    let text = match (&props.status, &props.frame) {
        (LoadStatus::Failed(msg), _) => format!("Could not load simulation: {}", msg),
        (_, Some(frame)) => frame_caption(frame),
        (LoadStatus::Ready, None) => "No frames".to_string(),
        (LoadStatus::Idle | LoadStatus::Loading, None) => "Loading...".to_string(),
    };
    let color = if matches!(props.status, LoadStatus::Failed(_)) { "#cf222e" } else { "inherit" };
    html! {<div style="display:flex; flex-direction:column; align-items:center; gap:4px;">
        <h3 style={format!("margin:8px 0; color:{};", color)}>{ text }</h3>
        { if props.skipped > 0 { html!{ <div style="font-size:11px; opacity:0.7;">{ format!("{} malformed frame(s) skipped", props.skipped) }</div> } } else { html!{} } }
    </div>}
}
