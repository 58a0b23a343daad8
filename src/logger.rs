use std::io::Write;

// stdout is reserved for the confirmation lines, diagnostics go to stderr
fn timestamp() -> String {
    chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

pub fn log_line(line: &str) {
    let stderr = std::io::stderr();
    let mut f = stderr.lock();
    let _ = writeln!(f, "[{}] {}", timestamp(), line);
}

pub fn log_error(prefix: &str, e: &dyn std::error::Error) {
    log_line(&format!("ERROR: {}: {}", prefix, e));
}
