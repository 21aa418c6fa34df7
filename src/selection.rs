// Page-wide text-selection style, borrowed for the length of a gesture.
// While a stroke is being drawn, dragging over the page must not select text.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum UserSelect {
    #[default]
    Auto,
    None,
}

/// Shared handle on the page's `user-select` value. The host keeps one clone
/// (to apply it), the pad keeps another (to change it).
#[derive(Clone, Debug, Default)]
pub struct PageStyle {
    user_select: Rc<Cell<UserSelect>>,
}

impl PageStyle {
    pub fn new(initial: UserSelect) -> Self {
        Self { user_select: Rc::new(Cell::new(initial)) }
    }

    pub fn user_select(&self) -> UserSelect {
        self.user_select.get()
    }

    pub fn set_user_select(&self, value: UserSelect) {
        self.user_select.set(value);
    }

    /// Turn text selection off until the returned guard is dropped.
    pub fn suppress(&self) -> SelectionGuard {
        let saved = self.user_select.replace(UserSelect::None);
        SelectionGuard { style: self.clone(), saved }
    }
}

/// Restores the saved value on drop.
#[derive(Debug)]
pub struct SelectionGuard {
    style: PageStyle,
    saved: UserSelect,
}

impl Drop for SelectionGuard {
    fn drop(&mut self) {
        self.style.set_user_select(self.saved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_restores_prior_value() {
        let style = PageStyle::new(UserSelect::Auto);
        let guard = style.suppress();
        assert_eq!(style.user_select(), UserSelect::None);
        drop(guard);
        assert_eq!(style.user_select(), UserSelect::Auto);
    }

    #[test]
    fn guard_restores_none_when_page_already_had_it() {
        let style = PageStyle::new(UserSelect::None);
        drop(style.suppress());
        assert_eq!(style.user_select(), UserSelect::None);
    }
}
