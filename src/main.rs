use std::io;

fn main() -> io::Result<()> {
    env_logger::init();
    let stdin = io::stdin();
    let stdout = io::stdout();
    mfsh::shell::run(stdin.lock(), stdout.lock())
}
