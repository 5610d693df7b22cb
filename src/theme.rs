use std::fmt;

/// Marker class set on the document root while dark mode is active.
pub const DARK_MARKER: &str = "dark";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    #[default]
    Dark,
}

impl ColorMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, ColorMode::Dark)
    }

    /// Class list value for the root element.
    #[must_use]
    pub fn root_class(self) -> &'static str {
        if self.is_dark() {
            DARK_MARKER
        } else {
            ""
        }
    }

    /// The toggle shows the mode it switches to.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        if self.is_dark() {
            "🌞"
        } else {
            "🌙"
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Light => write!(f, "light"),
            ColorMode::Dark => write!(f, "dark"),
        }
    }
}

/// Write access to the host document's root class list.
pub trait RootClasses {
    fn set_marker(&mut self, marker: &str, on: bool);
}

/// Sets the dark marker when `mode` is dark and removes it otherwise.
pub fn sync_root(root: &mut impl RootClasses, mode: ColorMode) {
    root.set_marker(DARK_MARKER, mode.is_dark());
}

/// `<html>` element of the current browser document.
#[cfg(target_arch = "wasm32")]
pub struct DocumentRoot;

#[cfg(target_arch = "wasm32")]
mod document {
    use leptos::wasm_bindgen::prelude::wasm_bindgen;

    #[wasm_bindgen(
        inline_js = "export function set_root_marker(marker, on) { document.documentElement.classList.toggle(marker, on); }"
    )]
    extern "C" {
        pub fn set_root_marker(marker: &str, on: bool);
    }
}

#[cfg(target_arch = "wasm32")]
impl RootClasses for DocumentRoot {
    fn set_marker(&mut self, marker: &str, on: bool) {
        document::set_root_marker(marker, on);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[derive(Default)]
    struct FakeRoot(BTreeSet<String>);

    impl RootClasses for FakeRoot {
        fn set_marker(&mut self, marker: &str, on: bool) {
            if on {
                self.0.insert(marker.to_string());
            } else {
                self.0.remove(marker);
            }
        }
    }

    impl FakeRoot {
        fn is_dark(&self) -> bool {
            self.0.contains(DARK_MARKER)
        }
    }

    #[test]
    fn starts_dark() {
        assert_eq!(ColorMode::default(), ColorMode::Dark);
    }

    #[test]
    fn double_toggle_restores_mode_and_root() {
        let mut root = FakeRoot::default();
        let start = ColorMode::default();
        sync_root(&mut root, start);
        assert!(root.is_dark());

        let once = start.toggled();
        sync_root(&mut root, once);
        assert_eq!(once, ColorMode::Light);
        assert!(!root.is_dark());

        let twice = once.toggled();
        sync_root(&mut root, twice);
        assert_eq!(twice, start);
        assert!(root.is_dark());
    }

    #[test]
    fn sync_is_idempotent() {
        let mut root = FakeRoot::default();
        sync_root(&mut root, ColorMode::Dark);
        sync_root(&mut root, ColorMode::Dark);
        assert_eq!(root.0.len(), 1);

        sync_root(&mut root, ColorMode::Light);
        sync_root(&mut root, ColorMode::Light);
        assert!(root.0.is_empty());
    }

    #[test]
    fn root_class_and_icon_follow_mode() {
        assert_eq!(ColorMode::Dark.root_class(), "dark");
        assert_eq!(ColorMode::Light.root_class(), "");
        assert_eq!(ColorMode::Dark.toggle_icon(), "🌞");
        assert_eq!(ColorMode::Light.toggle_icon(), "🌙");
        assert_eq!(ColorMode::Light.to_string(), "light");
    }
}
