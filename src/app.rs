//! Interactive terminal session.
//!
//! Walks the navigation graph one screen at a time, reading line input and
//! writing plain-text screens. Input and output are generic so the whole flow
//! can be driven from tests.

use crate::commands::{focus as focus_cmd, home, onboarding, settings, stats, tasks};
use crate::constants::{SWIPE_THUMB_CELLS, SWIPE_TRACK_CELLS};
use crate::error::AppError;
use crate::focus::swipe::{SwipeOutcome, SwipeTrack};
use crate::focus::timer::{FocusTimer, TimerConfig};
use crate::focus::FocusManager;
use crate::navigation::{Navigator, Route};
use crate::render;
use crate::FlowApp;
use log::{debug, warn};
use std::io::{BufRead, Write};
use std::sync::Arc;

/// Receives elapsed focus seconds from the background clock.
pub type ClockSink = Arc<dyn Fn(u64) + Send + Sync>;

/// How a focus-mode visit ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusExit {
    Completed,
    Back,
    NoTask,
    EndOfInput,
}

pub struct Session<'a, R, W> {
    app: &'a mut FlowApp,
    input: R,
    output: W,
    nav: Navigator,
    clock: Option<ClockSink>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(app: &'a mut FlowApp, input: R, output: W) -> Self {
        Self {
            app,
            input,
            output,
            nav: Navigator::new(),
            clock: None,
        }
    }

    /// Show a live clock while in focus mode.
    pub fn with_clock(mut self, clock: ClockSink) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn route(&self) -> Route {
        self.nav.current()
    }

    /// Run from the splash screen until the user quits or input ends.
    pub fn run(&mut self) -> Result<(), AppError> {
        self.show(&render::splash())?;
        let start = onboarding::start_route(&self.app.prefs);
        self.nav.navigate(start)?;

        loop {
            let keep_going = match self.nav.current() {
                Route::Splash => {
                    let start = onboarding::start_route(&self.app.prefs);
                    self.nav.navigate(start)?;
                    true
                }
                Route::Onboarding => self.onboarding_screen()?,
                Route::Home => self.home_screen()?,
                Route::TaskInput => self.task_input_screen()?,
                Route::FocusMode => self.focus_screen()? != FocusExit::EndOfInput,
                Route::Settings => self.settings_screen()?,
                Route::Stats => self.stats_screen()?,
            };
            if !keep_going {
                debug!("Session ended on {}", self.nav.current());
                return Ok(());
            }
        }
    }

    /// Enter focus mode directly (skipping splash and home) and return when it ends.
    pub fn run_focus(&mut self) -> Result<FocusExit, AppError> {
        self.nav.navigate(Route::Home)?;
        self.nav.navigate(Route::FocusMode)?;
        self.focus_screen()
    }

    fn onboarding_screen(&mut self) -> Result<bool, AppError> {
        self.show(&render::onboarding())?;
        if self.read_line()?.is_none() {
            return Ok(false);
        }
        onboarding::complete_onboarding(&mut self.app.prefs)?;
        self.nav.navigate(Route::Home)?;
        Ok(true)
    }

    fn home_screen(&mut self) -> Result<bool, AppError> {
        let state = home::get_home_state(&self.app.db)?;
        self.show(&render::home(&state))?;
        let Some(line) = self.read_line()? else {
            return Ok(false);
        };

        let next = match line.as_str() {
            // Enter is the main button: resume the active task or start a new one.
            "" | "n" | "f" if state.active_task.is_some() => Some(Route::FocusMode),
            "" | "n" => Some(Route::TaskInput),
            "f" => {
                self.show("  No active task yet. Press 'n' to add one.\n")?;
                None
            }
            "s" => Some(Route::Stats),
            "o" => Some(Route::Settings),
            "q" => return Ok(false),
            other => {
                self.show(&format!("  Unknown option '{other}'\n"))?;
                None
            }
        };
        if let Some(route) = next {
            self.nav.navigate(route)?;
        }
        Ok(true)
    }

    fn task_input_screen(&mut self) -> Result<bool, AppError> {
        self.show(&render::task_input())?;
        let Some(line) = self.read_line()? else {
            return Ok(false);
        };
        if line.is_empty() {
            self.nav.pop_back()?;
            return Ok(true);
        }

        let text = tasks::suggestion(&line).unwrap_or(line.as_str());
        match tasks::submit_task(&self.app.db, text) {
            Ok(_) => {
                self.nav.navigate(Route::FocusMode)?;
            }
            Err(e @ (AppError::InvalidInput { .. } | AppError::TaskAlreadyActive { .. })) => {
                self.show(&format!("  {e}\n"))?;
            }
            Err(e) => return Err(e),
        }
        Ok(true)
    }

    fn focus_screen(&mut self) -> Result<FocusExit, AppError> {
        let manager = FocusManager::new(Arc::clone(&self.app.db));
        let timer = self.clock.as_ref().map(|sink| {
            let timer = FocusTimer::new(manager.started_at(), TimerConfig::default());
            let sink = Arc::clone(sink);
            let handle = timer.start(move |secs| sink(secs));
            (timer, handle)
        });

        let exit = self.focus_loop(&manager);

        if let Some((timer, handle)) = timer {
            timer.stop();
            if handle.join().is_err() {
                warn!("Focus clock thread panicked");
            }
        }

        let exit = exit?;
        match exit {
            FocusExit::Completed => {
                self.nav.navigate(Route::Home)?;
            }
            FocusExit::Back | FocusExit::NoTask => {
                self.nav.pop_back()?;
            }
            FocusExit::EndOfInput => {}
        }
        Ok(exit)
    }

    fn focus_loop(&mut self, manager: &FocusManager) -> Result<FocusExit, AppError> {
        let mut track = SwipeTrack::new(f32::from(SWIPE_TRACK_CELLS), f32::from(SWIPE_THUMB_CELLS));

        loop {
            let state = focus_cmd::get_focus_state(manager)?;
            self.show(&render::focus(&state, &track, SWIPE_TRACK_CELLS))?;
            if state.task.is_none() {
                return Ok(FocusExit::NoTask);
            }

            let Some(line) = self.read_line()? else {
                return Ok(FocusExit::EndOfInput);
            };

            let outcome = match line.as_str() {
                "" | "b" => return Ok(FocusExit::Back),
                "done" => SwipeOutcome::Complete,
                slide if slide.chars().all(|c| c == '>') => {
                    let cells = slide.chars().count();
                    track.drag(f32::from(u16::try_from(cells).unwrap_or(u16::MAX)));
                    track.release()
                }
                other => {
                    self.show(&format!("  Unknown input '{other}'\n"))?;
                    continue;
                }
            };

            match outcome {
                SwipeOutcome::Complete => {
                    let task = focus_cmd::complete_focus_task(manager)?;
                    self.show(&render::focus_complete(&task))?;
                    return Ok(FocusExit::Completed);
                }
                SwipeOutcome::SnapBack => {
                    self.show("  Not quite. Slide further to finish.\n")?;
                }
            }
        }
    }

    fn settings_screen(&mut self) -> Result<bool, AppError> {
        let state = settings::get_settings(&self.app.prefs);
        self.show(&render::settings(&state))?;
        let Some(line) = self.read_line()? else {
            return Ok(false);
        };

        match line.as_str() {
            "n" => {
                let enabled = !state.notifications_enabled;
                settings::set_notifications(&mut self.app.prefs, enabled)?;
            }
            "r" => {
                self.show("  Type 'yes' to delete all history & stats: ")?;
                match self.read_line()? {
                    Some(answer) if answer == "yes" => {
                        let removed = settings::reset_progress(&self.app.db)?;
                        self.show(&format!("  Removed {removed} task(s).\n"))?;
                    }
                    Some(_) => self.show("  Reset cancelled.\n")?,
                    None => return Ok(false),
                }
            }
            "" | "b" => {
                self.nav.pop_back()?;
            }
            other => self.show(&format!("  Unknown option '{other}'\n"))?,
        }
        Ok(true)
    }

    fn stats_screen(&mut self) -> Result<bool, AppError> {
        let state = stats::get_stats_now(&self.app.db)?;
        self.show(&render::stats(&state))?;
        self.show("  (Enter to go back)\n")?;
        if self.read_line()?.is_none() {
            return Ok(false);
        }
        self.nav.pop_back()?;
        Ok(true)
    }

    fn show(&mut self, text: &str) -> Result<(), AppError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Next trimmed input line, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, AppError> {
        self.show("> ")?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FlowConfig;
    use crate::models::Task;
    use std::io::Cursor;
    use std::sync::Mutex;
    use tempfile::{tempdir, TempDir};

    fn open_app() -> (FlowApp, TempDir) {
        let dir = tempdir().unwrap();
        let app = FlowApp::open(FlowConfig::new(dir.path())).unwrap();
        (app, dir)
    }

    fn run_script(app: &mut FlowApp, script: &str) -> String {
        let mut output = Vec::new();
        Session::new(app, Cursor::new(script.as_bytes()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_first_run_full_journey() {
        let (mut app, _dir) = open_app();
        let slide = ">".repeat(20);
        let script = format!("\nn\nWrite chapter one\n>>>\n{slide}\ns\n\nq\n");

        let out = run_script(&mut app, &script);

        assert!(out.contains("Welcome to Flow"));
        assert!(out.contains("What is the one thing for today?"));
        assert!(out.contains("Write chapter one"));
        assert!(out.contains("Not quite. Slide further to finish."));
        assert!(out.contains("Melted away: Write chapter one"));
        assert!(out.contains("Tasks completed: 1"));
        assert!(out.contains("Current streak: 1 day(s)"));

        assert!(app.prefs.is_onboarding_completed());
        let guard = app.db.lock().unwrap();
        assert_eq!(Task::count_completed(guard.connection()).unwrap(), 1);
        assert!(Task::find_current(guard.connection()).unwrap().is_none());
    }

    #[test]
    fn test_returning_user_skips_onboarding() {
        let (mut app, _dir) = open_app();
        app.prefs.set_onboarding_completed(true).unwrap();

        let out = run_script(&mut app, "q\n");
        assert!(!out.contains("Welcome to Flow"));
        assert!(out.contains(home::HEADLINE_IDLE));
    }

    #[test]
    fn test_home_resumes_active_task() {
        let (mut app, _dir) = open_app();
        app.prefs.set_onboarding_completed(true).unwrap();
        tasks::submit_task(&app.db, "Existing task").unwrap();

        let out = run_script(&mut app, "\ndone\nq\n");
        assert!(out.contains(home::HEADLINE_ACTIVE));
        assert!(out.contains("Current: Existing task"));
        assert!(out.contains("Melted away: Existing task"));
        assert!(out.contains(home::HEADLINE_IDLE));
    }

    #[test]
    fn test_invalid_task_is_rejected_and_blank_goes_back() {
        let (mut app, _dir) = open_app();
        app.prefs.set_onboarding_completed(true).unwrap();
        let too_long = "x".repeat(crate::constants::MAX_DESCRIPTION_LEN + 1);

        let out = run_script(&mut app, &format!("n\n{too_long}\n   \nq\n"));

        assert!(out.contains("Invalid description"));
        // Home shown on entry and again after backing out of task input.
        assert_eq!(out.matches("[n] new task").count(), 2);
        assert!(tasks::get_current_task(&app.db).unwrap().is_none());
    }

    #[test]
    fn test_settings_toggle_and_reset() {
        let (mut app, _dir) = open_app();
        app.prefs.set_onboarding_completed(true).unwrap();
        tasks::submit_task(&app.db, "To be wiped").unwrap();

        let out = run_script(&mut app, "o\nn\nr\nno\nr\nyes\nb\nq\n");

        assert!(out.contains("Notifications: off"));
        assert!(out.contains("Notifications: on"));
        assert!(out.contains("Reset cancelled."));
        assert!(out.contains("Removed 1 task(s)."));
        assert!(app.prefs.notifications_enabled());
        assert!(tasks::get_current_task(&app.db).unwrap().is_none());
    }

    #[test]
    fn test_end_of_input_stops_session() {
        let (mut app, _dir) = open_app();
        let out = run_script(&mut app, "");
        assert!(out.contains("Welcome to Flow"));
        assert!(!app.prefs.is_onboarding_completed());
    }

    #[test]
    fn test_run_focus_without_task() {
        let (mut app, _dir) = open_app();
        let mut output = Vec::new();
        let exit = Session::new(&mut app, Cursor::new(&b""[..]), &mut output)
            .run_focus()
            .unwrap();
        assert_eq!(exit, FocusExit::NoTask);
        assert!(String::from_utf8(output).unwrap().contains("Nothing to focus on"));
    }

    #[test]
    fn test_focus_clock_receives_ticks() {
        let (mut app, _dir) = open_app();
        tasks::submit_task(&app.db, "Clocked").unwrap();
        let ticks = Arc::new(Mutex::new(0_u32));
        let sink = Arc::clone(&ticks);
        let clock: ClockSink = Arc::new(move |_| *sink.lock().unwrap() += 1);

        let mut output = Vec::new();
        let exit = Session::new(&mut app, Cursor::new(&b"done\n"[..]), &mut output)
            .with_clock(clock)
            .run_focus()
            .unwrap();

        assert_eq!(exit, FocusExit::Completed);
        // The clock ticks once immediately on start.
        assert!(*ticks.lock().unwrap() >= 1);
    }

    #[test]
    fn test_quick_pick_submits_suggestion() {
        let (mut app, _dir) = open_app();
        app.prefs.set_onboarding_completed(true).unwrap();

        let out = run_script(&mut app, "n\n2\nb\nq\n");

        assert!(out.contains("[2] Drink water"));
        let current = tasks::get_current_task(&app.db).unwrap().unwrap();
        assert_eq!(current.description, "Drink water");
    }

    #[test]
    fn test_empty_line_leaves_focus_mode() {
        let (mut app, _dir) = open_app();
        tasks::submit_task(&app.db, "Stay put").unwrap();

        let mut output = Vec::new();
        let mut session = Session::new(&mut app, Cursor::new(&b"\n"[..]), &mut output);
        let exit = session.run_focus().unwrap();

        assert_eq!(exit, FocusExit::Back);
        assert_eq!(session.route(), Route::Home);
        drop(session);
        assert!(!String::from_utf8(output).unwrap().contains("Not quite"));
        assert!(tasks::get_current_task(&app.db).unwrap().is_some());
    }
}
