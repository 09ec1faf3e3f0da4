//! Scripted sessions without a window.
//!
//! Every rendered frame becomes one line of output, starting with the frame
//! rendered at construction. Dropped commands get a line of their own naming
//! the reason.

use std::io::{self, Write};

use crate::input::ScriptStep;
use crate::navigator::{Outcome, SlideNavigator};
use crate::presenter::Presenter;

pub fn run_script<P: Presenter, W: Write>(
    navigator: &mut SlideNavigator<P>,
    steps: &[ScriptStep],
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{}", navigator.frame())?;

    for step in steps {
        match *step {
            ScriptStep::Run(command) => match navigator.apply(command) {
                Outcome::Moved { .. } => writeln!(out, "{}", navigator.frame())?,
                Outcome::Ignored(reason) => writeln!(out, "{:?} ignored ({:?})", command, reason)?,
            },
            ScriptStep::Wait(duration) => navigator.update(duration),
        }
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_SCRIPT;
    use crate::input::parse_script;
    use crate::navigator::NavigatorConfig;
    use crate::presenter::Recorder;
    use crate::slide::Slide;

    fn navigator(config: NavigatorConfig) -> SlideNavigator<Recorder> {
        let slides = ["dawn", "noon", "dusk"].iter().map(|t| Slide::new(*t)).collect();
        SlideNavigator::new(slides, config, Recorder::new()).unwrap()
    }

    fn run(nav: &mut SlideNavigator<Recorder>, script: &str) -> Vec<String> {
        let steps = parse_script(script).unwrap();
        let mut out = Vec::new();
        run_script(nav, &steps, &mut out).unwrap();
        String::from_utf8(out).unwrap().lines().map(str::to_string).collect()
    }

    #[test]
    fn default_script_renders_every_step_under_the_default_lock() {
        let mut nav = navigator(NavigatorConfig::default());
        let lines = run(&mut nav, DEFAULT_SCRIPT);
        assert_eq!(
            lines,
            vec![
                "slide 1/3 progress  33% theme=dawn prev=disabled next=visible",
                "slide 2/3 progress  67% theme=noon prev=enabled next=visible",
                "slide 3/3 progress 100% theme=dusk prev=enabled next=hidden",
                "slide 1/3 progress  33% theme=dawn prev=disabled next=visible",
            ]
        );
        assert_eq!(nav.presenter().len(), lines.len());
    }

    #[test]
    fn command_inside_lock_window_is_reported_as_locked() {
        let mut nav = navigator(NavigatorConfig::default());
        let lines = run(&mut nav, "next,next,wait:600,next");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "Advance ignored (Locked)");
        assert!(lines[3].starts_with("slide 3/3"));
    }

    #[test]
    fn ends_of_the_deck_are_reported_without_a_lock() {
        let mut nav = navigator(NavigatorConfig::immediate());
        let lines = run(&mut nav, "prev,goto:2,next,goto:7");
        assert_eq!(
            lines[1..],
            [
                "Retreat ignored (OutOfRange)",
                "slide 3/3 progress 100% theme=dusk prev=enabled next=hidden",
                "Advance ignored (OutOfRange)",
                "JumpTo(7) ignored (OutOfRange)",
            ]
        );
    }
}
