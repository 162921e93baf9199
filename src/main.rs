// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{self, Flags};
use iced_toasts::ui::notifications::Position;
use iced_toasts::ui::theming::ThemeMode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const HELP: &str = "\
Toast notification playground

USAGE:
  iced_toasts [OPTIONS]

OPTIONS:
  --lang <id>             UI language (e.g. en-US, fr)
  --theme <mode>          light, dark or system
  --position <anchor>     Default anchor, e.g. top-right, bottom-center
  --config-dir <dir>      Directory holding settings.toml
  -h, --help              Print this help
";

fn main() -> iced::Result {
    init_logging();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting iced_toasts");
    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        theme: args.opt_value_from_str::<_, ThemeMode>("--theme")?,
        position: args.opt_value_from_str::<_, Position>("--position")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("iced_toasts=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
