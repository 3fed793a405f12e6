/// Draft/committed pair for values edited in a settings window.
///
/// Readers of the live value only ever see `committed`; the window writes
/// into `draft` and either commits or reverts.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingEdit<T> {
    committed: T,
    draft: T,
}

impl<T: Clone> PendingEdit<T> {
    pub fn new(value: T) -> Self {
        Self {
            draft: value.clone(),
            committed: value,
        }
    }

    pub fn committed(&self) -> &T {
        &self.committed
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut T {
        &mut self.draft
    }

    pub fn commit(&mut self) {
        self.committed = self.draft.clone();
    }

    pub fn revert(&mut self) {
        self.draft = self.committed.clone();
    }

    /// Replaces both sides, discarding any pending draft.
    pub fn reset_to(&mut self, value: T) {
        self.draft = value.clone();
        self.committed = value;
    }
}

impl<T: Clone + PartialEq> PendingEdit<T> {
    pub fn is_dirty(&self) -> bool {
        self.committed != self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_changes_do_not_leak_until_commit() {
        let mut edit = PendingEdit::new(1.0_f32);
        *edit.draft_mut() = 2.0;
        assert_eq!(*edit.committed(), 1.0);
        assert!(edit.is_dirty());

        edit.commit();
        assert_eq!(*edit.committed(), 2.0);
        assert!(!edit.is_dirty());
    }

    #[test]
    fn revert_restores_draft() {
        let mut edit = PendingEdit::new(String::from("a"));
        edit.draft_mut().push('b');
        edit.revert();
        assert_eq!(edit.draft(), "a");
        assert!(!edit.is_dirty());
    }
}
