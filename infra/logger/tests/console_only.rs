use foundry_logger::{LevelFilter, Logger};

#[test]
fn console_logger_keeps_no_file_writer() {
    let logger = Logger::builder()
        .name("foundry-console")
        .console(true)
        .level(LevelFilter::DEBUG)
        .init()
        .expect("console logger should install");

    tracing::debug!("console logger installed");

    assert_eq!(logger.name(), "foundry-console");
    assert!(logger.guard().is_none(), "console output must not spawn a file writer");
}
