mod cli;

use clap::Parser;
use hlog::{hlogi, hlogw, LogBridge, Severity};
use log::info;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

fn register_signals(stop: &Arc<AtomicBool>) {
    use signal_hook::consts::{SIGINT, SIGTERM};
    use signal_hook::flag;

    // Without the handlers the demo can still be stopped by --count.
    if let Err(e) = flag::register(SIGINT, Arc::clone(stop)) {
        hlogw!("Failed to register SIGINT handler: {e}");
    }
    if let Err(e) = flag::register(SIGTERM, Arc::clone(stop)) {
        hlogw!("Failed to register SIGTERM handler: {e}");
    }
}

fn main() {
    let args = cli::Args::parse();

    hlog::set_file(args.file());
    hlog::set_remain_days(args.remain_days);
    if args.fsync {
        hlog::enable_fsync();
    }
    if let Err(e) = hlog::set_level_by_name(args.level()) {
        eprintln!("{e}; keeping {}", hlog::default_logger().level());
    }
    if let Err(e) = hlog::set_max_file_size_by_str(args.max_file_size()) {
        eprintln!("{e}; keeping the default size");
    }

    if let Err(e) = LogBridge::for_default().install() {
        eprintln!("Failed to install log bridge: {e}");
    }

    let stop = Arc::new(AtomicBool::new(false));
    register_signals(&stop);

    info!("Writing to {}", args.file().display());

    let mut written = 0u64;
    while !stop.load(Ordering::Relaxed) && (args.count == 0 || written < args.count) {
        if written % 2 == 0 {
            hlogi!("record {written}");
        } else {
            info!("record {written}");
        }
        written += 1;
        if args.interval > 0 {
            thread::sleep(args.interval());
        }
    }

    let _ = hlog::default_logger().print(
        Severity::Info,
        format_args!("wrote {written} records"),
    );
    if let Err(e) = hlog::fsync() {
        eprintln!("fsync failed: {e}");
    }

    match hlog::current_file() {
        Some(path) => println!("{}", path.display()),
        None => println!("no log file was written"),
    }
}
