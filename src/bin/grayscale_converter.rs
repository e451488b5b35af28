use desk_tools::app::GrayscaleApp;
use desk_tools::config;

fn main() -> eframe::Result {
    env_logger::init();
    config::run(config::GRAYSCALE_CONVERTER, GrayscaleApp::default())
}
