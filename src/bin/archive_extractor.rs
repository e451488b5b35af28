use desk_tools::app::ExtractorApp;
use desk_tools::config;

fn main() -> eframe::Result {
    env_logger::init();
    config::run(config::ARCHIVE_EXTRACTOR, ExtractorApp::default())
}
