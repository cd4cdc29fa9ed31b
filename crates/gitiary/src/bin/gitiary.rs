fn main() {
    if let Err(err) = gitiary::run() {
        eprintln!("{}", gitiary::format_error(&err));
        std::process::exit(1);
    }
}
