//! Trigger registry and the active-input relation

use log::debug;

use crate::types::TargetConfig;
use super::field::TextField;
use super::state::DisabledMask;

/// Position of a trigger in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriggerId(pub usize);

/// A bound text field plus its raw option string
#[derive(Debug)]
pub struct Trigger<F> {
    field: F,
    options: Option<String>,
}

impl<F> Trigger<F> {
    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn options(&self) -> Option<&str> {
        self.options.as_deref()
    }
}

/// Tracks which trigger is active and which keys it disables
#[derive(Debug)]
pub struct InputBinder<F> {
    triggers: Vec<Trigger<F>>,
    active: Option<TriggerId>,
    mask: DisabledMask,
}

impl<F> Default for InputBinder<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> InputBinder<F> {
    pub fn new() -> Self {
        Self {
            triggers: Vec::new(),
            active: None,
            mask: DisabledMask::new(),
        }
    }

    /// Registers a field. Ids follow declaration order.
    pub fn bind(&mut self, field: F, options: Option<&str>) -> TriggerId {
        let id = TriggerId(self.triggers.len());
        self.triggers.push(Trigger {
            field,
            options: options.map(str::to_string),
        });
        id
    }

    pub fn active(&self) -> Option<TriggerId> {
        self.active
    }

    pub fn mask(&self) -> &DisabledMask {
        &self.mask
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    pub fn trigger(&self, id: TriggerId) -> Option<&Trigger<F>> {
        self.triggers.get(id.0)
    }

    pub fn field(&self, id: TriggerId) -> Option<&F> {
        self.triggers.get(id.0).map(|t| &t.field)
    }

    pub fn field_mut(&mut self, id: TriggerId) -> Option<&mut F> {
        self.triggers.get_mut(id.0).map(|t| &mut t.field)
    }

    pub fn active_field_mut(&mut self) -> Option<&mut F> {
        let id = self.active?;
        self.field_mut(id)
    }

    /// The trigger after the active one, wrapping around.
    ///
    /// With nothing active this is the first trigger.
    pub fn next_trigger(&self) -> Option<TriggerId> {
        if self.triggers.is_empty() {
            return None;
        }
        let next = match self.active {
            Some(TriggerId(index)) if index + 1 < self.triggers.len() => index + 1,
            _ => 0,
        };
        Some(TriggerId(next))
    }
}

impl<F: TextField> InputBinder<F> {
    /// Makes `id` the active input and applies its disabled-key options.
    ///
    /// Returns false when `id` is not a bound trigger.
    pub fn activate(&mut self, id: TriggerId) -> bool {
        let Some(trigger) = self.triggers.get(id.0) else {
            return false;
        };

        let config = TargetConfig::parse(trigger.options.as_deref());
        self.mask = DisabledMask::from(config);
        self.active = Some(id);
        debug!("Activated trigger {} with {:?}", id.0, config);

        for (index, trigger) in self.triggers.iter_mut().enumerate() {
            if index != id.0 {
                trigger.field.set_focused_marker(false);
            }
        }

        let field = &mut self.triggers[id.0].field;
        field.set_focused_marker(true);
        field.focus();
        true
    }

    /// Drops the focused marker everywhere and blurs the active input.
    ///
    /// The active relation is kept, so the last input is remembered.
    pub fn deactivate(&mut self) {
        for trigger in &mut self.triggers {
            trigger.field.set_focused_marker(false);
        }
        if let Some(field) = self.active_field_mut() {
            field.blur();
        }
        debug!("Deactivated, last active trigger {:?}", self.active);
    }
}
