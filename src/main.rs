// SPDX-License-Identifier: MPL-2.0
use doggy_directory::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Doggy Directory - browse dog pictures by breed

USAGE:
  doggy_directory [OPTIONS]

OPTIONS:
  --lang <ID>          UI language (e.g. en-US, fr)
  --config-dir <DIR>   Directory holding settings.toml
  --api-base <URL>     Breed API base URL (default: https://dog.ceo/api)
  -h, --help           Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_string(&mut args, "--lang"),
        config_dir: opt_string(&mut args, "--config-dir"),
        api_base: opt_string(&mut args, "--api-base"),
    };

    let leftover = args.finish();
    if !leftover.is_empty() {
        tracing::warn!(?leftover, "ignoring unknown arguments");
    }

    app::run(flags)
}

fn opt_string(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, %err, "ignoring invalid argument");
            None
        }
    }
}
