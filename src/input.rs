//! Translation of raw input into navigator commands.

use std::time::Duration;

use crate::error::ScriptError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Advance,
    Retreat,
    JumpTo(usize),
    Replay,
}

/// Keys the navigator reacts to. Frontends map their own key codes onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Right,
    Left,
    Space,
    Enter,
    Home,
    Other,
}

/// Clickable controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Prev,
    Next,
    Replay,
    Dot(usize), // Slide indicator
}

impl Command {
    pub fn from_key(key: Key) -> Option<Command> {
        match key {
            Key::Right | Key::Space | Key::Enter => Some(Command::Advance),
            Key::Left => Some(Command::Retreat),
            Key::Home => Some(Command::Replay),
            Key::Other => None,
        }
    }

    pub fn from_control(control: Control) -> Command {
        match control {
            Control::Prev => Command::Retreat,
            Control::Next => Command::Advance,
            Control::Replay => Command::Replay,
            Control::Dot(index) => Command::JumpTo(index),
        }
    }
}

/// One step of a headless session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    Run(Command),
    Wait(Duration),
}

/// Parses `next,prev,replay,goto:N,wait:MS` (case-insensitive, blanks ignored).
pub fn parse_script(script: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    script
        .split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(parse_step)
        .collect()
}

fn parse_step(word: &str) -> Result<ScriptStep, ScriptError> {
    let lower = word.to_lowercase();
    let (name, arg) = match lower.split_once(':') {
        Some((name, arg)) => (name.trim(), Some(arg.trim())),
        None => (lower.as_str(), None),
    };

    let number = |arg: Option<&str>| -> Result<u64, ScriptError> {
        arg.and_then(|a| a.parse::<u64>().ok())
            .ok_or_else(|| ScriptError::InvalidArgument(word.to_string()))
    };

    match (name, arg) {
        ("next", None) => Ok(ScriptStep::Run(Command::Advance)),
        ("prev", None) => Ok(ScriptStep::Run(Command::Retreat)),
        ("replay", None) => Ok(ScriptStep::Run(Command::Replay)),
        ("goto", arg) => {
            let index = usize::try_from(number(arg)?)
                .map_err(|_| ScriptError::InvalidArgument(word.to_string()))?;
            Ok(ScriptStep::Run(Command::JumpTo(index)))
        }
        ("wait", arg) => Ok(ScriptStep::Wait(Duration::from_millis(number(arg)?))),
        ("next" | "prev" | "replay", Some(_)) => Err(ScriptError::InvalidArgument(word.to_string())),
        _ => Err(ScriptError::UnknownCommand(word.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_keys() {
        for key in [Key::Right, Key::Space, Key::Enter] {
            assert_eq!(Command::from_key(key), Some(Command::Advance));
        }
    }

    #[test]
    fn retreat_and_replay_keys() {
        assert_eq!(Command::from_key(Key::Left), Some(Command::Retreat));
        assert_eq!(Command::from_key(Key::Home), Some(Command::Replay));
        assert_eq!(Command::from_key(Key::Other), None);
    }

    #[test]
    fn controls_map_to_commands() {
        assert_eq!(Command::from_control(Control::Prev), Command::Retreat);
        assert_eq!(Command::from_control(Control::Next), Command::Advance);
        assert_eq!(Command::from_control(Control::Replay), Command::Replay);
        assert_eq!(Command::from_control(Control::Dot(4)), Command::JumpTo(4));
    }

    #[test]
    fn parses_full_script() {
        let steps = parse_script("next, Next ,prev,goto:3,wait:600,replay,").unwrap();
        assert_eq!(
            steps,
            vec![
                ScriptStep::Run(Command::Advance),
                ScriptStep::Run(Command::Advance),
                ScriptStep::Run(Command::Retreat),
                ScriptStep::Run(Command::JumpTo(3)),
                ScriptStep::Wait(Duration::from_millis(600)),
                ScriptStep::Run(Command::Replay),
            ]
        );
    }

    #[test]
    fn empty_script_has_no_steps() {
        assert_eq!(parse_script("  ,"), Ok(Vec::new()));
    }

    #[test]
    fn rejects_unknown_words() {
        assert_eq!(
            parse_script("next,jump"),
            Err(ScriptError::UnknownCommand("jump".to_string()))
        );
    }

    #[test]
    fn rejects_bad_arguments() {
        assert_eq!(
            parse_script("goto"),
            Err(ScriptError::InvalidArgument("goto".to_string()))
        );
        assert_eq!(
            parse_script("wait:soon"),
            Err(ScriptError::InvalidArgument("wait:soon".to_string()))
        );
        assert_eq!(
            parse_script("next:2"),
            Err(ScriptError::InvalidArgument("next:2".to_string()))
        );
    }
}
