//! Screen routes and the transitions allowed between them.

use crate::error::AppError;
use log::debug;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Splash,
    Onboarding,
    Home,
    TaskInput,
    FocusMode,
    Settings,
    Stats,
}

impl Route {
    pub fn as_str(self) -> &'static str {
        match self {
            Route::Splash => "splash",
            Route::Onboarding => "onboarding",
            Route::Home => "home",
            Route::TaskInput => "task_input",
            Route::FocusMode => "focus_mode",
            Route::Settings => "settings",
            Route::Stats => "stats",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happens to the back stack when an edge is followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Push the destination on top of the current screen.
    Push,
    /// Pop up to and including the given route, then push the destination.
    PopInclusive(Route),
}

/// The navigation graph. `None` means the edge does not exist.
pub fn transition(from: Route, to: Route) -> Option<Transition> {
    use Route::{FocusMode, Home, Onboarding, Settings, Splash, Stats, TaskInput};

    match (from, to) {
        (Splash, Home | Onboarding) => Some(Transition::PopInclusive(Splash)),
        (Onboarding, Home) => Some(Transition::PopInclusive(Onboarding)),
        (Home, TaskInput | FocusMode | Stats | Settings) => Some(Transition::Push),
        (TaskInput, FocusMode) => Some(Transition::PopInclusive(TaskInput)),
        (FocusMode, Home) => Some(Transition::PopInclusive(FocusMode)),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct Navigator {
    back_stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Every session starts on the splash screen.
    pub fn new() -> Self {
        Self {
            back_stack: vec![Route::Splash],
        }
    }

    pub fn current(&self) -> Route {
        self.back_stack.last().copied().unwrap_or(Route::Splash)
    }

    #[cfg(test)]
    fn back_stack(&self) -> &[Route] {
        &self.back_stack
    }

    pub fn navigate(&mut self, to: Route) -> Result<Route, AppError> {
        let from = self.current();
        let rule = transition(from, to).ok_or(AppError::InvalidRoute {
            from: from.as_str(),
            to: to.as_str(),
        })?;

        if let Transition::PopInclusive(target) = rule {
            if let Some(pos) = self.back_stack.iter().rposition(|r| *r == target) {
                self.back_stack.truncate(pos);
            }
        }
        // Single top: landing on the route already on top does not stack it twice.
        if self.back_stack.last() != Some(&to) {
            self.back_stack.push(to);
        }

        debug!("Navigated {from} -> {to} (stack: {:?})", self.back_stack);
        Ok(to)
    }

    /// Return to the previous screen. Fails at the root.
    pub fn pop_back(&mut self) -> Result<Route, AppError> {
        if self.back_stack.len() <= 1 {
            let here = self.current();
            return Err(AppError::InvalidRoute {
                from: here.as_str(),
                to: "back",
            });
        }
        let from = self.back_stack.pop().unwrap_or(Route::Splash);
        let to = self.current();
        debug!("Back {from} -> {to}");
        Ok(to)
    }
}
