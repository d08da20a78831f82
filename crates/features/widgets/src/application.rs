use crate::error::WidgetError;
use crate::factory::{WidgetBundle, WidgetFactory};
use tracing::info;

/// A client that only knows the [`WidgetFactory`] interface.
#[derive(Debug)]
pub struct Application {
    factory: Box<dyn WidgetFactory>,
    ui: Option<WidgetBundle>,
}

impl Application {
    #[must_use]
    pub fn new(factory: Box<dyn WidgetFactory>) -> Self {
        info!(family = %factory.family(), "Initializing application");
        Self { factory, ui: None }
    }

    /// Creates (or recreates) the UI elements from the factory.
    ///
    /// # Errors
    /// Propagates [`WidgetError::FamilyMismatch`] from an inconsistent factory.
    pub fn create_ui(&mut self) -> Result<(), WidgetError> {
        info!("Creating UI elements using the provided factory...");
        self.ui = Some(WidgetBundle::from_factory(self.factory.as_ref())?);
        Ok(())
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.ui.is_some()
    }

    #[must_use]
    pub const fn ui(&self) -> Option<&WidgetBundle> {
        self.ui.as_ref()
    }

    /// Paints the button and shows `text`, returning the narrated lines.
    ///
    /// # Errors
    /// Returns [`WidgetError::NotInitialized`] if [`Application::create_ui`] was not called.
    pub fn run(&self, text: &str) -> Result<Vec<String>, WidgetError> {
        let ui = self.ui.as_ref().ok_or_else(|| WidgetError::NotInitialized {
            message: "call create_ui before run".into(),
            context: None,
        })?;

        info!("Running main logic...");
        let lines = vec![ui.button().paint(), ui.textbox().display_text(text)];
        info!("Run complete.");

        Ok(lines)
    }
}
