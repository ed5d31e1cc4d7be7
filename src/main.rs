use centaur_chess::cli::cli_top::run_stdio_loop;

fn main() {
    if let Err(err) = run_stdio_loop() {
        eprintln!("session error: {err}");
        std::process::exit(1);
    }
}
