//! scriptboard main entrypoint.

use scriptboard::run;
use scriptboard::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
