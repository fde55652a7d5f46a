use cmdline_logger::{LevelFilter, Logger};

#[test]
fn console_only_logger_has_no_file_writer() {
    let logger = Logger::builder()
        .name("integration-console-only")
        .ansi(false)
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    assert!(!logger.has_file(), "console-only logger should not attach a file writer");
}
