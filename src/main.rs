use std::env;
use std::process;

use tiller::builtins;
use tiller::dispatch;
use tiller::error::ShellError;
use tiller::flags::Flags;
use tiller::shell::Shell;

fn main() -> Result<(), ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("Tiller {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if let Some(line) = flags.get_value("command").cloned() {
        let (mut session, _history) = builtins::bootstrap()?;
        let flow = dispatch::dispatch_line(&mut session, &line)?;
        process::exit(flow.exit_code());
    }

    let mut shell = Shell::new(flags)?;
    let code = shell.run()?;
    process::exit(code);
}
