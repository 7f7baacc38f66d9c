fn main() {
    if let Err(err) = slink_cli::run_cli() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
