use std::cell::RefCell;
use std::rc::Rc;

use cli_engine_core::{ArgumentDef, ArgumentType, CommandDef, CommandRegistry, ParsedInput, Value};
use cli_engine_dispatch::{
    DiagnosticsSink, Engine, ParseError, parse_command, parse_value, split_tokens,
};

struct RecordingSink(Rc<RefCell<Vec<String>>>);

impl DiagnosticsSink for RecordingSink {
    fn write_line(&mut self, line: &str) {
        self.0.borrow_mut().push(line.to_string());
    }
}

fn media_registry() -> CommandRegistry {
    CommandRegistry::from_defs(vec![
        CommandDef::new("play", "Play a media file")
            .with_arg(ArgumentDef::required("file", ArgumentType::String))
            .with_flag(ArgumentDef::optional("--volume", ArgumentType::Integer)),
        CommandDef::new("status", "Show player status"),
    ])
}

#[test]
fn test_bare_command_invokes_handler_with_empty_input() {
    let seen: Rc<RefCell<Option<ParsedInput>>> = Rc::new(RefCell::new(None));
    let capture = Rc::clone(&seen);

    let mut engine = Engine::new(media_registry());
    engine.register_callback("status", move |input| {
        *capture.borrow_mut() = Some(input.clone());
    });

    assert!(engine.execute(["status"]));

    let input = seen.borrow().clone().expect("handler should have run");
    assert_eq!(input.command, "status");
    assert!(input.args.is_empty());
    assert!(input.flags.is_empty());
}

#[test]
fn test_required_prefix_of_optional_positionals() {
    let def = CommandDef::new("trim", "Trim a clip")
        .with_arg(ArgumentDef::required("file", ArgumentType::String))
        .with_arg(ArgumentDef::required("start", ArgumentType::Float))
        .with_arg(ArgumentDef::optional("end", ArgumentType::Float))
        .with_arg(ArgumentDef::optional("label", ArgumentType::String));

    let tokens = |raw: &[&str]| raw.iter().map(|t| t.to_string()).collect::<Vec<_>>();

    // Fewer than the required prefix fails, naming the first missing field.
    assert_eq!(
        parse_command(&def, &tokens(&["clip.mp4"])).unwrap_err(),
        ParseError::MissingRequiredArgument("start".into())
    );

    // Exactly the required prefix: optionals become Absent.
    let input = parse_command(&def, &tokens(&["clip.mp4", "1.5"])).unwrap();
    assert_eq!(input.args.len(), 4);
    assert_eq!(input.args[2], Value::Absent);
    assert_eq!(input.args[3], Value::Absent);

    // All slots filled.
    let input = parse_command(&def, &tokens(&["clip.mp4", "1.5", "9.25", "chorus"])).unwrap();
    assert_eq!(input.args[3], Value::String("chorus".into()));
}

#[test]
fn test_flag_round_trip_matches_value_parser_for_each_type() {
    let cases = [
        ("--name", ArgumentType::String, "song.mp3"),
        ("--count", ArgumentType::Integer, "42"),
        ("--rate", ArgumentType::Float, "1.25"),
        ("--shuffle", ArgumentType::Boolean, "true"),
    ];

    for (flag, ty, raw) in cases {
        let def = CommandDef::new("set", "").with_flag(ArgumentDef::optional(flag, ty));
        let tokens = vec![flag.to_string(), raw.to_string()];

        let input = parse_command(&def, &tokens).unwrap();
        let direct = parse_value(raw, ty).unwrap();
        assert_eq!(input.flag(flag), Some(&direct), "round trip for {flag}");
    }
}

#[test]
fn test_splitter_is_stateless() {
    let tokens: Vec<String> = ["song.mp3", "--volume", "7", "--loop", "extra"]
        .map(String::from)
        .to_vec();

    assert_eq!(split_tokens(&tokens), split_tokens(&tokens));
}

#[test]
fn test_trailing_flag_parses_as_absent_not_failure() {
    let def = CommandDef::new("play", "")
        .with_arg(ArgumentDef::required("file", ArgumentType::String))
        .with_flag(ArgumentDef::optional("--loop", ArgumentType::None));

    let tokens: Vec<String> = ["song.mp3", "--loop"].map(String::from).to_vec();
    let input = parse_command(&def, &tokens).unwrap();
    assert_eq!(input.flag("--loop"), Some(&Value::Absent));
}

#[test]
fn test_scenario_play_with_volume() {
    let seen: Rc<RefCell<Option<ParsedInput>>> = Rc::new(RefCell::new(None));
    let capture = Rc::clone(&seen);

    let mut engine = Engine::new(media_registry());
    engine.register_callback("play", move |input| {
        *capture.borrow_mut() = Some(input.clone());
    });

    assert!(engine.execute(["play", "song.mp3", "--volume", "7"]));

    let input = seen.borrow().clone().unwrap();
    assert_eq!(input.command, "play");
    assert_eq!(input.args, vec![Value::String("song.mp3".into())]);
    assert_eq!(input.flag("--volume"), Some(&Value::Integer(7)));
}

#[test]
fn test_scenario_missing_required_file_fails_dispatch() {
    let lines = Rc::new(RefCell::new(Vec::new()));
    let sink = RecordingSink(Rc::clone(&lines));

    let mut engine = Engine::with_sink(media_registry(), Box::new(sink));
    engine.register_callback("play", |_| panic!("handler must not run"));

    assert!(!engine.execute(["play"]));
    assert_eq!(lines.borrow().len(), 1);
    assert!(lines.borrow()[0].contains("file"));
}

#[test]
fn test_scenario_boolean_literals() {
    assert_eq!(
        parse_value("True", ArgumentType::Boolean),
        Ok(Value::Boolean(true))
    );
    assert!(parse_value("yes", ArgumentType::Boolean).is_err());
}

#[test]
fn test_scenario_integer_truncation() {
    assert_eq!(
        parse_value("3.9", ArgumentType::Integer),
        Ok(Value::Integer(3))
    );
}

#[test]
fn test_scenario_unknown_registration_target() {
    let mut engine = Engine::new(media_registry());

    // Registration for a name outside the registry is silently dropped.
    engine.register_callback("nosuch", |_| panic!("must never run"));

    // The command is still unknown to the registry, so dispatch fails —
    // distinct from the registered-but-unreachable case, which succeeds.
    assert!(!engine.execute(["nosuch"]));
    assert!(engine.execute(["status"]));
}
