fn main() {
    if let Err(err) = distid::cli::run() {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}
