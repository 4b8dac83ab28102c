//! rDbAccess main entrypoint.

use rdbaccess::run;
use rdbaccess::ui::output::print_error;

fn main() {
    if let Err(e) = run() {
        print_error(&e);
        std::process::exit(1);
    }
}
