use desk_tools::app::ConverterApp;
use desk_tools::config;

fn main() -> eframe::Result {
    env_logger::init();
    config::run(config::METER_CONVERTER, ConverterApp::default())
}
