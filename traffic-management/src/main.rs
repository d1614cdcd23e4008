use clap::Parser;
use traffic_management::app::TrafficApp;

fn main() {
    env_logger::init();
    let args = TrafficApp::parse();
    let result = args
        .run()
        .and_then(|value| Ok(serde_json::to_string_pretty(&value)?));
    match result {
        Ok(output) => {
            println!("{output}");
            log::info!("finished.");
        }
        Err(e) => {
            log::error!("failed running traffic_management: {e}");
            std::process::exit(1);
        }
    }
}
