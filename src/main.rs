use airdefense_replay::components::App;
use airdefense_replay::util::init_logging;

fn main() {
    init_logging();
    log::info!("air defense replay starting");
    yew::Renderer::<App>::new().render();
}
