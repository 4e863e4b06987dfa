fn main() {
    if let Err(e) = hangar_cli::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
