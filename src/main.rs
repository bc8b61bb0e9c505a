// SPDX-License-Identifier: MPL-2.0
use touchless_viewer::app::{self, Flags};

const HELP: &str = "\
TouchlessViewer - image viewer navigated by a tracked marker

USAGE:
  touchless_viewer [OPTIONS] [IMAGE]

ARGS:
  [IMAGE]                 Image to open; its folder becomes the image set

OPTIONS:
  --config-dir <DIR>      Directory containing settings.toml
  --tracker \"<COMMAND>\"   Tracker command line emitting JSON marker samples.
                          Split on whitespace without quoting; use
                          [tracking] command in settings.toml for
                          arguments containing spaces
  --pointer-marker        Emulate the marker with the mouse pointer
  --band <FRACTION>       Width fraction of the left and right zones
  -h, --help              Print this help
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, String> {
    let config_dir = args
        .opt_value_from_str("--config-dir")
        .map_err(|err| err.to_string())?;
    let tracker_command = args
        .opt_value_from_str::<_, String>("--tracker")
        .map_err(|err| err.to_string())?
        .map(|line| line.split_whitespace().map(str::to_string).collect::<Vec<_>>())
        .filter(|command| !command.is_empty());
    let pointer_marker = args.contains("--pointer-marker");
    let activation_band = args
        .opt_value_from_str("--band")
        .map_err(|err| err.to_string())?;

    let file_path = match args.finish().as_slice() {
        [] => None,
        [path] => Some(
            path.clone()
                .into_string()
                .map_err(|path| format!("image path is not valid UTF-8: {path:?}"))?,
        ),
        extra => return Err(format!("expected at most one image, got {}", extra.len())),
    };

    Ok(Flags {
        file_path,
        config_dir,
        tracker_command,
        pointer_marker,
        activation_band,
    })
}
