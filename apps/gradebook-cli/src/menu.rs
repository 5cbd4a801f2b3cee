//! Numbered menus of (label, action) options.

use gradebook_core::GradebookError;

use crate::session::Session;
use crate::terminal::Terminal;

/// What the menu loop does after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Back,
}

/// Operation bound to a menu option.
pub type Action = fn(&mut Session, &mut dyn Terminal) -> anyhow::Result<Flow>;

pub struct MenuOption {
    pub label: &'static str,
    pub action: Action,
}

/// Menu numbered from 1. Selecting an option whose action returns
/// [`Flow::Back`] leaves this menu level.
pub struct Menu {
    title: &'static str,
    options: Vec<MenuOption>,
}

impl Menu {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            options: Vec::new(),
        }
    }

    pub fn option(mut self, label: &'static str, action: Action) -> Self {
        self.options.push(MenuOption { label, action });
        self
    }

    /// Title followed by one numbered line per option.
    pub fn render(&self) -> String {
        let mut text = self.title.to_string();
        for (i, option) in self.options.iter().enumerate() {
            text.push_str(&format!("\n{}. {}", i + 1, option.label));
        }
        text
    }

    /// Runs the menu until an action returns [`Flow::Back`].
    ///
    /// Recoverable gradebook errors are printed and the menu is shown
    /// again; anything else ends the loop with the error.
    pub fn run(&self, session: &mut Session, term: &mut dyn Terminal) -> anyhow::Result<()> {
        term.clear_screen()?;
        loop {
            term.print_lines(&self.render())?;
            let selection = term.read_integer("Enter your selection: ")?;

            let option = usize::try_from(selection)
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|index| self.options.get(index));
            let Some(option) = option else {
                term.print_lines("Invalid option specified.")?;
                continue;
            };

            match (option.action)(session, term) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Back) => return Ok(()),
                Err(err) => match err.downcast_ref::<GradebookError>() {
                    Some(gradebook_err) if gradebook_err.is_recoverable() => {
                        tracing::debug!("{} failed: {}", option.label, gradebook_err);
                        term.print_lines(&format!("Error: {}", gradebook_err))?;
                    }
                    _ => return Err(err),
                },
            }
        }
    }
}

/// Action for the closing "Back"/"Exit" option.
pub fn back(_: &mut Session, _: &mut dyn Terminal) -> anyhow::Result<Flow> {
    Ok(Flow::Back)
}
