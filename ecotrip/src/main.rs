use clap::Parser;
use ecotrip::app::EcoTripApp;

fn main() {
    env_logger::init();
    let args = EcoTripApp::parse();
    match args.run() {
        Ok(_) => log::debug!("finished."),
        Err(e) => {
            log::error!("ecotrip failed: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
