use crate::error::WidgetError;
use crate::product::{Button, MacButton, MacTextbox, Textbox, WindowsButton, WindowsTextbox};
use foundry_domain::kinds::Family;
use std::fmt::Debug;
use tracing::debug;

/// Creates every product role of one family.
pub trait WidgetFactory: Debug + Send + Sync {
    /// The family every product of this factory belongs to.
    fn family(&self) -> Family;

    fn create_button(&self) -> Box<dyn Button>;

    fn create_textbox(&self) -> Box<dyn Textbox>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsFactory;

#[derive(Debug, Clone, Copy, Default)]
pub struct MacFactory;

impl WidgetFactory for WindowsFactory {
    fn family(&self) -> Family {
        Family::Windows
    }

    fn create_button(&self) -> Box<dyn Button> {
        debug!("Windows factory creating a Windows button");
        Box::new(WindowsButton)
    }

    fn create_textbox(&self) -> Box<dyn Textbox> {
        debug!("Windows factory creating a Windows textbox");
        Box::new(WindowsTextbox)
    }
}

impl WidgetFactory for MacFactory {
    fn family(&self) -> Family {
        Family::Mac
    }

    fn create_button(&self) -> Box<dyn Button> {
        debug!("Mac factory creating a macOS button");
        Box::new(MacButton)
    }

    fn create_textbox(&self) -> Box<dyn Textbox> {
        debug!("Mac factory creating a macOS textbox");
        Box::new(MacTextbox)
    }
}

/// Returns the factory for a known family.
#[must_use]
pub fn factory(family: Family) -> Box<dyn WidgetFactory> {
    match family {
        Family::Windows => Box::new(WindowsFactory),
        Family::Mac => Box::new(MacFactory),
    }
}

/// Resolves a family tag (`"windows"`, `"mac"`, `"macos"`; case-insensitive) to its factory.
///
/// # Errors
/// Returns [`WidgetError::UnimplementedFamily`] when no factory exists for `tag`.
pub fn factory_for(tag: &str) -> Result<Box<dyn WidgetFactory>, WidgetError> {
    let family = tag.trim().parse::<Family>().map_err(|_| WidgetError::UnimplementedFamily {
        message: format!("Widget factory for OS '{tag}' is not implemented.").into(),
        context: None,
    })?;
    Ok(factory(family))
}

/// A button and a textbox guaranteed to belong to the same family.
///
/// Fields are private: the only way to obtain a bundle is [`WidgetBundle::from_factory`]
/// (or [`create_bundle`]), which checks the family of every member.
#[derive(Debug)]
pub struct WidgetBundle {
    family: Family,
    button: Box<dyn Button>,
    textbox: Box<dyn Textbox>,
}

impl WidgetBundle {
    /// Draws one product per role from `factory`.
    ///
    /// # Errors
    /// Returns [`WidgetError::FamilyMismatch`] if a product reports a family other than the
    /// factory's.
    pub fn from_factory(factory: &dyn WidgetFactory) -> Result<Self, WidgetError> {
        let family = factory.family();
        let button = factory.create_button();
        let textbox = factory.create_textbox();

        for (role, actual) in [("button", button.family()), ("textbox", textbox.family())] {
            if actual != family {
                return Err(WidgetError::FamilyMismatch {
                    message: format!("{role} belongs to '{actual}', factory builds '{family}'")
                        .into(),
                    context: None,
                });
            }
        }

        Ok(Self { family, button, textbox })
    }

    #[must_use]
    pub const fn family(&self) -> Family {
        self.family
    }

    #[must_use]
    pub fn button(&self) -> &dyn Button {
        self.button.as_ref()
    }

    #[must_use]
    pub fn textbox(&self) -> &dyn Textbox {
        self.textbox.as_ref()
    }

    /// Splits the bundle into its members.
    #[must_use]
    pub fn into_parts(self) -> (Box<dyn Button>, Box<dyn Textbox>) {
        (self.button, self.textbox)
    }
}

/// Creates a consistent bundle for a family tag.
///
/// # Errors
/// Returns [`WidgetError::UnimplementedFamily`] for unknown tags and
/// [`WidgetError::FamilyMismatch`] if the factory is inconsistent.
pub fn create_bundle(tag: &str) -> Result<WidgetBundle, WidgetError> {
    let factory = factory_for(tag)?;
    WidgetBundle::from_factory(factory.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct CrossedFactory;

    impl WidgetFactory for CrossedFactory {
        fn family(&self) -> Family {
            Family::Windows
        }

        fn create_button(&self) -> Box<dyn Button> {
            Box::new(WindowsButton)
        }

        fn create_textbox(&self) -> Box<dyn Textbox> {
            Box::new(MacTextbox)
        }
    }

    #[test]
    fn factory_for_accepts_aliases() {
        assert_eq!(factory_for("macos").map(|f| f.family()).ok(), Some(Family::Mac));
        assert_eq!(factory_for("Windows").map(|f| f.family()).ok(), Some(Family::Windows));
    }

    #[test]
    fn factory_for_rejects_unknown_family() {
        let err = factory_for("linux").expect_err("linux has no widget factory");
        assert!(matches!(err, WidgetError::UnimplementedFamily { .. }));
        assert!(err.to_string().contains("'linux'"));
    }

    #[test]
    fn inconsistent_factory_cannot_produce_a_bundle() {
        let err = WidgetBundle::from_factory(&CrossedFactory).expect_err("mismatch must fail");
        assert!(matches!(err, WidgetError::FamilyMismatch { .. }));
    }

    #[test]
    fn bundle_parts_share_family() {
        let bundle = create_bundle("mac").expect("mac bundle");
        let family = bundle.family();
        let (button, textbox) = bundle.into_parts();

        assert_eq!(button.family(), family);
        assert_eq!(textbox.family(), family);
    }
}
