//! Pretty logger demonstration
//!
//! Shows the two usage shapes of the facility:
//! 1. Deferred entries flushed explicitly, optionally with `.timestamp()`
//! 2. Fire-and-forget writes through `emit!`
//!
//! Run with `cargo run -p prettylog-core --example chained_timestamps`.

use prettylog_core::facility::{init, LogFacility, Severity};
use prettylog_core::{
    emit, log_debug, log_error_bg, log_failure, log_failure_bg, log_fatal, log_general, log_info,
    log_ok,
};

fn main() {
    println!("=== SIMPLE mode ===\n");
    init("SIMPLE");

    log_general!("connecting to database...").flush();
    log_ok!("database connected").flush();
    log_info!("preparing to execute query...").flush();
    log_debug!("query: {}", "SELECT * FROM users WHERE username = $1").flush();
    log_failure!("failed to execute query").flush();
    log_failure_bg!("failed to execute query").flush();
    log_fatal!("segmentation fault, core dumped").flush();
    log_error_bg!("DUMPING CORE..").flush();

    println!("\n=== Forced timestamps in SIMPLE mode ===\n");
    log_debug!("this is a debug log {}", "with a timestamp")
        .timestamp()
        .flush();
    log_info!("job info: {}", "running job ...").flush();
    log_info!("job info: {}", "job SUCCESS").timestamp().flush();

    println!("\n=== TIMEBASED mode ===\n");
    init("TIMEBASED");
    emit!(Severity::Success, "success with some int -> {}", 42069);
    emit!(Severity::Error, "some error happened");

    println!("\n=== Private facility writing to stderr ===\n");
    let private = LogFacility::new();
    private.initialize_with_destination("SIMPLE", std::io::stderr());
    private
        .printf(Severity::Fatal, "failed to %v: %v %v", &[&420, &"disk", &2981389.82981])
        .flush();
}
