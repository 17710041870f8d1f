//! FILENAME: app/src/main.rs
// PURPOSE: Terminal entry point. Each stdin line is typed as keys, then Enter.
// FORMAT (log): seq|level|category|message

fn main() {
    if let Err(e) = app_lib::run() {
        eprintln!("[calcula-calc] {}", e);
        std::process::exit(1);
    }
}
