// SPDX-License-Identifier: MPL-2.0
use stepdoc::app::{self, paths, Flags};

const HELP: &str = "\
StepDoc - assemble illustrated step-by-step instructions into Word documents

USAGE:
    stepdoc [OPTIONS] [PROJECT_FILE]

ARGS:
    <PROJECT_FILE>    Project file (.json) to open on startup

OPTIONS:
    --lang <LOCALE>          Interface language (e.g. en-US, pl)
    --data-dir <PATH>        Override the data directory (autosaves, state)
    --config-dir <PATH>      Override the config directory (settings.toml)
    -h, --help               Print this help
    -V, --version            Print the version
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }
    if args.contains(["-V", "--version"]) {
        println!("stepdoc {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        data_dir: args.opt_value_from_str("--data-dir").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    // Must happen before any path resolution (config load, autosave).
    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    app::run(flags)
}
