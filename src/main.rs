//! grocery-co2 main entrypoint.

use grocery_co2::run;
use grocery_co2::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
