use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

/// Opens the log file in append mode. The terminal is in raw mode while the
/// app runs, so nothing is ever logged to stdout.
pub fn init(path: &Path) {
    let Ok(mut logger) = LOGGER.lock() else {
        return;
    };
    if logger.is_none() {
        if let Ok(file) = OpenOptions::new().create(true).append(true).open(path) {
            *logger = Some(file);
        }
    }
}

pub fn log(message: &str) {
    let Ok(mut logger) = LOGGER.lock() else {
        return;
    };
    if let Some(file) = logger.as_mut() {
        let _ = write_entry(file, message);
    }
}

fn write_entry(out: &mut impl Write, message: &str) -> io::Result<()> {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    writeln!(out, "[{}] {}", timestamp, message)
}
