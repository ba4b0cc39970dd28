//! Command-line entry point for the turntable demo viewer.

use std::path::Path;

use turntable::viewer::Viewer;
use turntable::Options;

fn main() {
    env_logger::init();

    // Optional argument: path to a TOML options preset.
    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("failed to load options from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let viewer = Viewer::builder().with_options(options).build();
    if let Err(e) = viewer.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
