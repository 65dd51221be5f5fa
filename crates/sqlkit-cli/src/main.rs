use colored::Colorize;

fn main() {
    if let Err(e) = sqlkit_cli::run(std::env::args().collect()) {
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
