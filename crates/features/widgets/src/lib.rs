//! # Widgets
//!
//! Abstract factories for UI widgets. A [`WidgetFactory`] creates one product per role
//! (button, textbox) for a single [`Family`](foundry_domain::kinds::Family), and a
//! [`WidgetBundle`] can only be assembled from one factory, so mixed-family bundles are
//! unrepresentable.
//!
//! Choosing *which* family to use is delegated to a [`FamilyProbe`]; the factories never
//! look at the environment themselves.
//!
//! ```rust
//! use foundry_widgets::{Application, FixedProbe, factory_from_probe};
//!
//! let factory = factory_from_probe(&FixedProbe::new("mac"))?;
//! let mut app = Application::new(factory);
//! app.create_ui()?;
//!
//! let lines = app.run("Hello Abstract Factory Pattern!")?;
//! assert_eq!(lines[0], "Painting a macOS style button.");
//! # Ok::<(), foundry_widgets::WidgetError>(())
//! ```

mod application;
mod error;
mod factory;
mod probe;
mod product;

pub use crate::application::Application;
pub use crate::error::{WidgetError, WidgetErrorExt};
pub use crate::factory::{
    MacFactory, WidgetBundle, WidgetFactory, WindowsFactory, create_bundle, factory, factory_for,
};
pub use crate::probe::{FamilyProbe, FixedProbe, HostProbe, factory_from_probe};
pub use crate::product::{Button, MacButton, MacTextbox, Textbox, WindowsButton, WindowsTextbox};
pub use foundry_domain as domain;
