//! rTogglReport main entrypoint.

use rtogglreport::run;

fn main() {
    if let Err(e) = run() {
        rtogglreport::ui::messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
