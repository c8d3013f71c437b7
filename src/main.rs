#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
// The ultimate strictness: catches things like missing documentation or overflow risks
#![warn(clippy::restriction)]

fn main() {
    if let Err(e) = player_warnings::run(std::env::args().skip(1)) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
