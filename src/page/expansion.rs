/// Nejvýše jeden rozbalený detailní řádek na stránku
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpansionState {
    #[default]
    Collapsed,
    ExpandedAt(usize),
}

impl ExpansionState {
    /// Stejný index sbalí, jiný index rovnou přepne
    pub fn toggle(&mut self, index: usize) {
        *self = match *self {
            Self::ExpandedAt(current) if current == index => Self::Collapsed,
            _ => Self::ExpandedAt(index),
        };
    }

    /// Indexy platí jen v rámci aktuálně filtrovaného seznamu
    pub fn on_namespace_change(&mut self) {
        *self = Self::Collapsed;
    }

    pub fn expanded(&self) -> Option<usize> {
        match self {
            Self::Collapsed => None,
            Self::ExpandedAt(index) => Some(*index),
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded() == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_same_index_collapses() {
        let mut state = ExpansionState::default();
        state.toggle(2);
        assert_eq!(state, ExpansionState::ExpandedAt(2));
        state.toggle(2);
        assert_eq!(state, ExpansionState::Collapsed);
    }

    #[test]
    fn test_toggle_other_index_switches() {
        let mut state = ExpansionState::ExpandedAt(1);
        state.toggle(4);
        assert_eq!(state, ExpansionState::ExpandedAt(4));
        assert!(state.is_expanded(4));
        assert!(!state.is_expanded(1));
    }

    #[test]
    fn test_namespace_change_collapses() {
        let mut state = ExpansionState::default();
        state.toggle(2);
        state.on_namespace_change();
        assert_eq!(state.expanded(), None);

        state.on_namespace_change();
        assert_eq!(state, ExpansionState::Collapsed);
    }
}
