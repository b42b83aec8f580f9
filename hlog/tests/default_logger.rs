//! The process-wide default logger and the `hlog*!` macros.
//!
//! Everything here shares one global instance, so it lives in a single test.

use hlog::{hlogd, hloge, hlogf, hlogi, hlogv, hlogw, Handler, LogBridge, Severity};
use std::sync::{Arc, Mutex};

#[test]
fn test_default_logger_forwarding() {
    let captured = Arc::new(Mutex::new(Vec::<(Severity, String)>::new()));
    let sink = Arc::clone(&captured);
    hlog::set_handler(Handler::custom(move |level, data| {
        sink.lock()
            .unwrap()
            .push((level, String::from_utf8_lossy(data).into_owned()));
    }));

    assert_eq!(hlog::default_logger().level(), Severity::Info);

    hlogv!("not shown");
    hlogd!("not shown either");
    hlogi!("info {}", 1);
    hlogw!("warn {}", 2);
    hloge!("error {}", 3);
    hlogf!("fatal {}", 4);

    {
        let captured = captured.lock().unwrap();
        let levels: Vec<Severity> = captured.iter().map(|(level, _)| *level).collect();
        assert_eq!(
            levels,
            vec![Severity::Info, Severity::Warn, Severity::Error, Severity::Fatal]
        );
        assert!(captured[0].1.contains("][INFO ] info 1 [default_logger.rs:"));
        assert!(captured[3].1.ends_with(":default_logger]\n"));
    }

    // Forwarders reach the same instance.
    hlog::set_level_by_name("verbose").unwrap();
    assert_eq!(hlog::default_logger().level(), Severity::Verbose);
    assert!(hlog::set_level_by_name("bogus").is_err());
    assert_eq!(hlog::default_logger().level(), Severity::Verbose);

    hlog::set_max_file_size_by_str("2M").unwrap();
    hlog::set_remain_days(3);
    hlog::enable_fsync();
    let config = hlog::default_logger().file_config();
    assert_eq!(config.max_file_size, 2 << 20);
    assert_eq!(config.remain_days, 3);
    assert!(config.fsync);
    hlog::disable_fsync();
    assert!(!hlog::default_logger().file_config().fsync);

    assert!(hlog::fsync().is_ok());
    assert!(hlog::current_file().is_none());

    // The log facade lands in the same place.
    captured.lock().unwrap().clear();
    LogBridge::for_default().install().unwrap();
    log::debug!("via log {}", 5);
    let captured = captured.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].0, Severity::Debug);
    assert!(captured[0].1.contains("via log 5 [default_logger.rs:"));
}
