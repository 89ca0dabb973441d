// Small helpers shared by the components

use crate::model::Frame;

/// Route `log` output to the browser console and panics to `console.error`.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

pub fn format_speed(speed_ms: u32) -> String {
    format!("{} ms/frame", speed_ms)
}

/// Header line for a frame. Time steps are shown one-based.
pub fn frame_caption(frame: &Frame) -> String {
    format!(
        "Iteration {}, Time Step {}",
        frame.iteration,
        frame.time_step + 1
    )
}

/// Legend text for the rockets drawn in the same hue as rocket `class`
/// (zero-based), numbered from one: "Rocket 2" or "Rockets 1, 7, 13".
pub fn hue_class_label(class: usize, rocket_count: usize) -> String {
    let members: Vec<String> = (class..rocket_count)
        .step_by(6)
        .map(|i| (i + 1).to_string())
        .collect();
    match members.len() {
        0 | 1 => format!("Rocket {}", class + 1),
        _ => format!("Rockets {}", members.join(", ")),
    }
}
