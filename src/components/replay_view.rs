use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::engine::{Bearings, Engine};
use crate::render::{CanvasSurface, Surface, paint_frame};
use crate::state::FrameSequence;

#[derive(Properties, PartialEq, Clone)]
pub struct ReplayViewProps {
    pub frames: FrameSequence,
    pub index: Option<usize>,
    pub engine: Engine,
    pub width: u32,
    pub height: u32,
}

#[function_component(ReplayView)]
pub fn replay_view(props: &ReplayViewProps) -> Html {
    let canvas_ref = use_node_ref();
    // Derived from the frames; handed to and returned by each scene build.
    let bearings = use_mut_ref(Bearings::new);

    // Effect: new sequence, forget bearings from the old one
    {
        let bearings = bearings.clone();
        use_effect_with(props.frames.clone(), move |_| {
            bearings.borrow_mut().clear();
            || ()
        });
    }
    // Effect: full repaint whenever the shown frame changes
    {
        let canvas_ref = canvas_ref.clone();
        let bearings = bearings.clone();
        let engine = props.engine;
        use_effect_with(
            (props.frames.clone(), props.index),
            move |(frames, index)| {
                let surface = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .and_then(|canvas| CanvasSurface::from_canvas(&canvas));
                if let Some(mut surface) = surface {
                    let mut bearings = bearings.borrow_mut();
                    match paint_frame(&engine, frames, *index, &mut bearings, &mut surface) {
                        Some(drawn) => log::debug!("frame {:?}: {} primitives", index, drawn),
                        None => surface.clear(),
                    }
                }
                || ()
            },
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            width={props.width.to_string()}
            height={props.height.to_string()}
            style="border:1px solid black; max-width:100%;"
        />
    }
}
