//! `jukebox` — demo media-player CLI built on the dispatch engine.
//!
//! The command definitions live in an embedded JSON bundle
//! (`commands.json`); handlers are registered here and receive fully typed
//! `ParsedInput` records. Usage:
//!
//! ```text
//! jukebox play song.mp3 --volume 7 --loop
//! jukebox convert in.wav out.mp3 --bitrate 192.5
//! jukebox info song.mp3
//! ```

use std::process::ExitCode;

use cli_engine_core::{CommandRegistry, Value};
use cli_engine_dispatch::Engine;

const COMMAND_BUNDLE: &str = include_str!("../commands.json");

fn main() -> ExitCode {
    let registry = match CommandRegistry::from_json(COMMAND_BUNDLE) {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("jukebox: failed to load command bundle: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut engine = Engine::new(registry);

    engine.register_callback("play", |input| {
        let file = input.arg(0).and_then(Value::as_str).unwrap_or("<none>");
        let volume = input
            .flag("--volume")
            .and_then(Value::as_integer)
            .unwrap_or(50);
        println!("playing {file} at volume {volume}");
    });

    engine.register_callback("convert", |input| {
        let from = input.arg(0).and_then(Value::as_str).unwrap_or("<none>");
        let to = input.arg(1).and_then(Value::as_str).unwrap_or("<none>");
        match input.flag("--bitrate").and_then(Value::as_float) {
            Some(bitrate) => println!("converting {from} -> {to} at {bitrate} kbps"),
            None => println!("converting {from} -> {to}"),
        }
    });

    engine.register_callback("info", |input| {
        let file = input.arg(0).and_then(Value::as_str).unwrap_or("<none>");
        println!("metadata for {file}: (demo) 3:42, 44.1 kHz, stereo");
    });

    engine.register_callback("status", |_| {
        println!("idle");
    });

    if engine.execute(std::env::args().skip(1)) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
