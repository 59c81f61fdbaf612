//! Named, typed extension registry.
//!
//! Extensions are the settings objects a build script configures. They are
//! stored behind `Rc<RefCell<_>>` handles so that repeated lookups observe
//! the same instance.

use std::any::{type_name, Any};
use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::error::{BuildModelError, Result};

#[derive(Default)]
pub struct ExtensionContainer {
    entries: IndexMap<String, Rc<dyn Any>>,
}

impl ExtensionContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `value` under `name` and returns the shared handle.
    ///
    /// Registering a second extension under an existing name is an error;
    /// an extension name identifies exactly one settings object.
    pub fn add<T: 'static>(&mut self, name: &str, value: T) -> Result<Rc<RefCell<T>>> {
        if self.entries.contains_key(name) {
            return Err(BuildModelError::DuplicateExtension(name.to_owned()));
        }
        let handle = Rc::new(RefCell::new(value));
        self.entries
            .insert(name.to_owned(), handle.clone() as Rc<dyn Any>);
        Ok(handle)
    }

    /// Looks up the extension registered under `name`, expecting type `T`.
    ///
    /// A present entry of the wrong type is an explicit error rather than a
    /// silent `None`: asking for the wrong type is caller misuse.
    pub fn get<T: 'static>(&self, name: &str) -> Result<Rc<RefCell<T>>> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| BuildModelError::UnknownExtension(name.to_owned()))?;
        entry
            .clone()
            .downcast::<RefCell<T>>()
            .map_err(|_| BuildModelError::ExtensionTypeMismatch {
                name: name.to_owned(),
                expected: type_name::<T>(),
            })
    }

    /// Finds the first registered extension of type `T`, if any.
    pub fn by_type<T: 'static>(&self) -> Option<Rc<RefCell<T>>> {
        self.entries
            .values()
            .find_map(|entry| entry.clone().downcast::<RefCell<T>>().ok())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Toggles {
        enabled: bool,
    }

    #[test]
    fn returns_the_same_instance_on_repeated_lookup() {
        let mut extensions = ExtensionContainer::new();
        extensions.add("toggles", Toggles { enabled: false }).unwrap();

        let first = extensions.get::<Toggles>("toggles").unwrap();
        let second = extensions.get::<Toggles>("toggles").unwrap();
        assert!(Rc::ptr_eq(&first, &second));

        first.borrow_mut().enabled = true;
        assert!(second.borrow().enabled);
    }

    #[test]
    fn rejects_duplicate_names() {
        let mut extensions = ExtensionContainer::new();
        extensions.add("toggles", Toggles { enabled: false }).unwrap();
        let err = extensions
            .add("toggles", Toggles { enabled: true })
            .unwrap_err();
        assert!(matches!(err, BuildModelError::DuplicateExtension(_)));
    }

    #[test]
    fn wrong_type_is_an_explicit_error() {
        let mut extensions = ExtensionContainer::new();
        extensions.add("toggles", Toggles { enabled: false }).unwrap();
        let err = extensions.get::<String>("toggles").unwrap_err();
        assert!(matches!(
            err,
            BuildModelError::ExtensionTypeMismatch { .. }
        ));
    }

    #[test]
    fn by_type_finds_registered_extension() {
        let mut extensions = ExtensionContainer::new();
        assert!(extensions.by_type::<Toggles>().is_none());
        extensions.add("toggles", Toggles { enabled: true }).unwrap();
        let found = extensions.by_type::<Toggles>().unwrap();
        assert!(found.borrow().enabled);
    }
}
