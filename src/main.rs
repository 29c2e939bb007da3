//! jobmon main entrypoint.

use jobmon::run;
use jobmon::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(e);
        std::process::exit(1);
    }
}
