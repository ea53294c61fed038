//! rhabit main entrypoint.

use rhabit::run;
use rhabit::ui::messages::failure;

fn main() {
    if let Err(e) = run() {
        failure(&e);
        std::process::exit(1);
    }
}
