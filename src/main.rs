use quince_checkers::shell::shell_top::run_stdio_loop;

fn main() {
    if let Err(err) = run_stdio_loop() {
        eprintln!("Fatal error: {err}");
        std::process::exit(255);
    }
}
