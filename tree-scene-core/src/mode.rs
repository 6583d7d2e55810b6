//! Scene-mode state machine: the coarse formation/chaos mode plus the
//! orthogonal single-item detail overlay.

/// Coarse layout mode owned by user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseMode {
    #[default]
    Formation,
    Chaos,
}

/// Spatial regime resolvers actually work in. Detail view always
/// implies the camera-relative regime for non-focal items, whatever
/// the base mode is, because receding layout only makes sense relative
/// to the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveMode {
    Formation,
    Chaos,
}

/// The one place the override rule lives.
pub fn effective_mode(base: BaseMode, selected: Option<u32>) -> EffectiveMode {
    if selected.is_some() {
        return EffectiveMode::Chaos;
    }
    match base {
        BaseMode::Formation => EffectiveMode::Formation,
        BaseMode::Chaos => EffectiveMode::Chaos,
    }
}

/// Process-wide mode state. Transitions return whether they were
/// accepted; rejected ones change nothing, since they reflect UI races
/// rather than faults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneMode {
    base: BaseMode,
    selected: Option<u32>,
}

impl SceneMode {
    pub fn base(&self) -> BaseMode {
        self.base
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn detail_active(&self) -> bool {
        self.selected.is_some()
    }

    pub fn effective(&self) -> EffectiveMode {
        effective_mode(self.base, self.selected)
    }

    /// Flip formation/chaos. Rejected while an item is focused.
    pub fn toggle_chaos(&mut self) -> bool {
        if self.selected.is_some() {
            return false;
        }
        self.base = match self.base {
            BaseMode::Formation => BaseMode::Chaos,
            BaseMode::Chaos => BaseMode::Formation,
        };
        true
    }

    /// Set the base mode directly (full-screen flag from the UI).
    /// Rejected while an item is focused.
    pub fn set_base(&mut self, base: BaseMode) -> bool {
        if self.selected.is_some() {
            return false;
        }
        self.base = base;
        true
    }

    /// Focus one item. Rejected when something is already focused or
    /// the id is outside the collection.
    pub fn select(&mut self, id: u32, item_count: usize) -> bool {
        if self.selected.is_some() || (id as usize) >= item_count {
            return false;
        }
        self.selected = Some(id);
        true
    }

    /// Drop the focus, returning to whatever the base mode was.
    pub fn clear_selection(&mut self) -> bool {
        self.selected.take().is_some()
    }
}
