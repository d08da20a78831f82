use foundry_domain::kinds::Family;
use std::fmt::Debug;
use tracing::info;

pub trait Button: Debug + Send + Sync {
    fn family(&self) -> Family;

    /// Draws the button and returns the narrated line.
    fn paint(&self) -> String;
}

pub trait Textbox: Debug + Send + Sync {
    fn family(&self) -> Family;

    /// Shows `text` and returns the narrated line.
    fn display_text(&self, text: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowsButton;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowsTextbox;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MacButton;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MacTextbox;

impl Button for WindowsButton {
    fn family(&self) -> Family {
        Family::Windows
    }

    fn paint(&self) -> String {
        narrate("Painting a Windows style button.".to_owned())
    }
}

impl Textbox for WindowsTextbox {
    fn family(&self) -> Family {
        Family::Windows
    }

    fn display_text(&self, text: &str) -> String {
        narrate(format!("Displaying text in a Windows style textbox: '{text}'"))
    }
}

impl Button for MacButton {
    fn family(&self) -> Family {
        Family::Mac
    }

    fn paint(&self) -> String {
        narrate("Painting a macOS style button.".to_owned())
    }
}

impl Textbox for MacTextbox {
    fn family(&self) -> Family {
        Family::Mac
    }

    fn display_text(&self, text: &str) -> String {
        narrate(format!("Displaying text in a macOS style textbox: '{text}'"))
    }
}

fn narrate(line: String) -> String {
    info!("{line}");
    line
}
