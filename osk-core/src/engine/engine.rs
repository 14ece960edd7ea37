use log::{debug, trace};

use crate::layout::KeyLayout;
use crate::options::WidgetOptions;
use super::binder::{InputBinder, Trigger, TriggerId};
use super::field::TextField;
use super::interpreter::{FieldSnapshot, KeyInterpreter};
use super::output::{EventResult, KeyAction};
use super::state::KeyDisplay;
use super::surface::{NullSurface, Surface};
use super::ModifierState;

/// An on-screen keyboard bound to a set of text fields
pub struct Widget<F, S = NullSurface> {
    /// Keys shown by this widget
    layout: KeyLayout,
    options: WidgetOptions,
    interpreter: KeyInterpreter,
    binder: InputBinder<F>,
    modifiers: ModifierState,
    surface: S,
    /// Whether the surface is currently shown
    visible: bool,
}

impl<F: TextField> Widget<F, NullSurface> {
    /// Create a full keyboard in the language named by `options`, with no
    /// presentation layer attached
    pub fn keyboard(options: WidgetOptions) -> Self {
        let layout = KeyLayout::keyboard(options.language);
        Self::new(layout, options, NullSurface)
    }

    /// Create a numeric keypad with no presentation layer attached
    pub fn numpad(options: WidgetOptions) -> Self {
        Self::new(KeyLayout::numpad(), options, NullSurface)
    }
}

impl<F: TextField, S: Surface> Widget<F, S> {
    /// Create a new widget instance
    pub fn new(layout: KeyLayout, options: WidgetOptions, surface: S) -> Self {
        let interpreter =
            KeyInterpreter::new(options.rewire_tab, options.rewire_return, layout.edit_mode());
        Self {
            layout,
            options,
            interpreter,
            binder: InputBinder::new(),
            modifiers: ModifierState::new(),
            surface,
            visible: false,
        }
    }

    /// Bind a field as a trigger. `options` is its space-separated token
    /// list (`disableSymbols`, `disableTab`, `disableReturn`).
    pub fn bind(&mut self, field: F, options: Option<&str>) -> TriggerId {
        self.binder.bind(field, options)
    }

    /// A trigger was clicked: activate it and show the widget
    pub fn click_trigger(&mut self, id: TriggerId) -> bool {
        if !self.binder.activate(id) {
            return false;
        }
        if !self.visible {
            self.surface.show();
            self.visible = true;
        }
        true
    }

    /// Hide the widget. The last active trigger is remembered.
    pub fn deactivate(&mut self) {
        self.binder.deactivate();
        self.surface.hide();
        self.visible = false;
    }

    /// Process a press of the key at `index` in the layout
    pub fn press(&mut self, index: usize) -> EventResult {
        if !self.visible {
            trace!("Ignoring key {} while hidden", index);
            return EventResult::HandledSuppressDefault;
        }
        let Some(key) = self.layout.key(index).copied() else {
            trace!("Ignoring unknown key {}", index);
            return EventResult::HandledSuppressDefault;
        };
        let Some(active) = self.binder.active() else {
            return EventResult::HandledSuppressDefault;
        };
        let Some(field) = self.binder.field(active) else {
            return EventResult::HandledSuppressDefault;
        };

        let text = field.text();
        let interpretation = self.interpreter.interpret(
            &key,
            self.modifiers,
            self.binder.mask(),
            FieldSnapshot::new(&text, field.caret()),
        );
        let result = interpretation.event_result();
        self.modifiers = interpretation.modifiers;

        match interpretation.action {
            KeyAction::Refocus => {
                if let Some(field) = self.binder.field_mut(active) {
                    field.focus();
                }
            }
            KeyAction::Hide => self.deactivate(),
            KeyAction::ModifiersChanged => {}
            KeyAction::Edit(edit) => {
                if let Some(field) = self.binder.field_mut(active) {
                    field.set_text(edit.text);
                    field.notify_changed();
                    field.focus();
                    field.set_caret(edit.caret);
                }
            }
            KeyAction::NextTrigger => {
                if let Some(field) = self.binder.field_mut(active) {
                    field.notify_changed();
                }
                if let Some(next) = self.binder.next_trigger() {
                    debug!("Tab moves from trigger {} to {}", active.0, next.0);
                    self.binder.activate(next);
                }
            }
            KeyAction::SubmitForm => {
                debug!("Return submits the form of trigger {}", active.0);
                self.surface.submit_form();
            }
        }

        result
    }

    /// Current display state for the renderer
    pub fn display(&self) -> KeyDisplay {
        KeyDisplay::compute(&self.layout, self.modifiers, self.binder.mask())
    }

    pub fn modifiers(&self) -> ModifierState {
        self.modifiers
    }

    pub fn active(&self) -> Option<TriggerId> {
        self.binder.active()
    }

    pub fn field(&self, id: TriggerId) -> Option<&F> {
        self.binder.field(id)
    }

    pub fn trigger(&self, id: TriggerId) -> Option<&Trigger<F>> {
        self.binder.trigger(id)
    }

    pub fn trigger_count(&self) -> usize {
        self.binder.len()
    }

    pub fn layout(&self) -> &KeyLayout {
        &self.layout
    }

    pub fn options(&self) -> &WidgetOptions {
        &self.options
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Tear the widget down, handing the surface back to the host
    pub fn destroy(mut self) -> S {
        self.surface.destroy();
        self.surface
    }
}
