use clap::Parser;
use smartroute::app::{AppError, SmartRouteApp};

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = SmartRouteApp::parse();
    args.op.run()
}
