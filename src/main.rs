use clap::{Parser, Subcommand};
use flow_lib::app::{ClockSink, Session};
use flow_lib::commands::{self, focus as focus_cmd, onboarding, settings, tasks};
use flow_lib::constants::LOG_ENV;
use flow_lib::error::AppError;
use flow_lib::focus::FocusManager;
use flow_lib::render;
use flow_lib::validation::parse_toggle;
use flow_lib::FlowApp;
use log::error;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "flow", version, about = "One task, full focus")]
struct Cli {
    /// Directory holding flow.db and settings.json
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Set the one task for today
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        /// Go straight into focus mode afterwards
        #[arg(long)]
        focus: bool,
    },
    /// Show the active task
    Current {
        #[arg(long)]
        json: bool,
    },
    /// Complete the active task
    Done,
    /// Enter focus mode for the active task
    Focus,
    /// List completed tasks, newest first
    History {
        #[arg(long)]
        json: bool,
    },
    /// Show streak, total and weekly activity
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Show or change settings
    Settings {
        /// on or off
        #[arg(long, value_name = "STATE")]
        notifications: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Delete all history and stats
    Reset {
        #[arg(long)]
        yes: bool,
    },
    /// Mark onboarding as done
    Onboard,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "warn")).init();

    let cli = Cli::parse();
    let mut app = match FlowApp::open_default(cli.data_dir.as_deref()) {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to start Flow: {e}");
            let _ = writeln!(io::stderr(), "flow: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&mut app, cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Command failed: {e}");
            let _ = writeln!(io::stderr(), "flow: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(app: &mut FlowApp, command: Option<Command>) -> Result<(), AppError> {
    let mut out = io::stdout().lock();

    match command {
        None => {
            drop(out);
            let stdin = io::stdin();
            let mut session =
                Session::new(app, stdin.lock(), io::stdout()).with_clock(clock_sink());
            session.run()?;
        }
        Some(Command::Add { text, focus }) => {
            let task = tasks::submit_task(&app.db, &text.join(" "))?;
            writeln!(out, "Today's focus: {}", task.description)?;
            if focus {
                drop(out);
                run_focus(app)?;
            }
        }
        Some(Command::Current { json }) => {
            let current = tasks::get_current_task(&app.db)?;
            if json {
                print_json(&mut out, &current)?;
            } else {
                let state = commands::home::get_home_state(&app.db)?;
                write!(out, "{}", render::home(&state))?;
            }
        }
        Some(Command::Done) => {
            let manager = FocusManager::new(Arc::clone(&app.db));
            let task = focus_cmd::complete_focus_task(&manager)?;
            write!(out, "{}", render::focus_complete(&task))?;
        }
        Some(Command::Focus) => {
            drop(out);
            run_focus(app)?;
        }
        Some(Command::History { json }) => {
            let completed = tasks::get_completed_tasks(&app.db)?;
            if json {
                print_json(&mut out, &completed)?;
            } else {
                write!(out, "{}", render::history_local(&completed))?;
            }
        }
        Some(Command::Stats { json }) => {
            let state = commands::stats::get_stats_now(&app.db)?;
            if json {
                print_json(&mut out, &state)?;
            } else {
                write!(out, "{}", render::stats(&state))?;
            }
        }
        Some(Command::Settings { notifications, json }) => {
            let state = match notifications {
                Some(value) => settings::set_notifications(&mut app.prefs, parse_toggle(&value)?)?,
                None => settings::get_settings(&app.prefs),
            };
            if json {
                print_json(&mut out, &state)?;
            } else {
                write!(out, "{}", render::settings(&state))?;
            }
        }
        Some(Command::Reset { yes }) => {
            if !yes {
                return Err(AppError::InvalidInput {
                    field: "reset",
                    reason: String::from("pass --yes to delete all history and stats"),
                });
            }
            let removed = settings::reset_progress(&app.db)?;
            writeln!(out, "Progress reset: {removed} tasks removed")?;
        }
        Some(Command::Onboard) => {
            onboarding::complete_onboarding(&mut app.prefs)?;
            writeln!(out, "Onboarding complete")?;
        }
    }
    Ok(())
}

fn run_focus(app: &mut FlowApp) -> Result<(), AppError> {
    let stdin = io::stdin();
    let mut session = Session::new(app, stdin.lock(), io::stdout()).with_clock(clock_sink());
    session.run_focus()?;
    Ok(())
}

fn clock_sink() -> ClockSink {
    Arc::new(|secs| {
        let mut out = io::stdout();
        let _ = write!(out, "{}", render::focus_clock(secs));
        let _ = out.flush();
    })
}

fn print_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<(), AppError> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}
