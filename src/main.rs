fn main() {
    if let Err(e) = oxygen_rs::adapters::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
