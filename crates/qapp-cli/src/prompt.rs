use dialoguer::{Input, Select};
use qapp_core::{Event, QappError, Result, Ui};

use crate::output;

/// Interactive terminal front end: dialoguer prompts on stderr, progress on
/// stdout.
pub struct TerminalUi;

impl Ui for TerminalUi {
    fn project_name(&mut self) -> Result<String> {
        Input::<String>::new()
            .with_prompt("Enter the name of your app")
            .validate_with(|input: &String| -> std::result::Result<(), &str> {
                if input.trim().is_empty() {
                    Err("Project name cannot be empty.")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map_err(|e| QappError::Prompt(e.to_string()))
    }

    fn select_template(&mut self, templates: &[String]) -> Result<String> {
        let selection = Select::new()
            .with_prompt("Select a template")
            .items(templates)
            .default(0)
            .interact()
            .map_err(|e| QappError::Prompt(e.to_string()))?;
        Ok(templates[selection].clone())
    }

    fn notify(&mut self, event: Event) {
        println!("{}", output::render(&event));
    }
}
