use desk_tools::app::CompressorApp;
use desk_tools::config;

fn main() -> eframe::Result {
    env_logger::init();
    config::run(config::FILE_COMPRESSOR, CompressorApp::default())
}
