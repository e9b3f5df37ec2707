use xiangqi_notation::protocol;

fn main() {
    if let Err(e) = protocol::run_loop() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
