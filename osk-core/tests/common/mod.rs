//! Shared helpers for widget integration tests

use osk_core::{
    CaretRange, EventResult, KeyCategory, KeyLayout, MemoryField, Surface, TriggerId, Widget,
    WidgetOptions,
};

/// Surface that counts every request it receives
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub shown: usize,
    pub hidden: usize,
    pub submitted: usize,
    pub destroyed: usize,
}

impl Surface for RecordingSurface {
    fn show(&mut self) {
        self.shown += 1;
    }

    fn hide(&mut self) {
        self.hidden += 1;
    }

    fn submit_form(&mut self) {
        self.submitted += 1;
    }

    fn destroy(&mut self) {
        self.destroyed += 1;
    }
}

/// A full keyboard with one trigger holding `text` and `caret`, already open
#[allow(dead_code)]
pub fn keyboard_with(text: &str, caret: CaretRange) -> (Widget<MemoryField>, TriggerId) {
    let mut widget = Widget::keyboard(WidgetOptions::default());
    let id = widget.bind(MemoryField::new(text).with_caret(caret), None);
    assert!(widget.click_trigger(id));
    (widget, id)
}

/// A recording keyboard with `count` triggers, none active yet
#[allow(dead_code)]
pub fn recording_keyboard(
    options: WidgetOptions,
    count: usize,
) -> (Widget<MemoryField, RecordingSurface>, Vec<TriggerId>) {
    let layout = KeyLayout::keyboard(options.language);
    let mut widget = Widget::new(layout, options, RecordingSurface::default());
    let ids = (0..count)
        .map(|i| widget.bind(MemoryField::new(format!("field{}", i)), None))
        .collect();
    (widget, ids)
}

/// Press the printable key whose unshifted glyph is `glyph`
#[allow(dead_code)]
pub fn press_glyph<S: Surface>(widget: &mut Widget<MemoryField, S>, glyph: char) -> EventResult {
    let index = widget
        .layout()
        .position_of_glyph(glyph)
        .unwrap_or_else(|| panic!("no key for {:?}", glyph));
    widget.press(index)
}

/// Press the first key of `category`
#[allow(dead_code)]
pub fn press_category<S: Surface>(
    widget: &mut Widget<MemoryField, S>,
    category: KeyCategory,
) -> EventResult {
    let index = widget
        .layout()
        .position(category)
        .unwrap_or_else(|| panic!("no {:?} key", category));
    widget.press(index)
}

/// Type a run of unshifted glyphs, spaces included
#[allow(dead_code)]
pub fn type_glyphs<S: Surface>(widget: &mut Widget<MemoryField, S>, glyphs: &str) {
    for glyph in glyphs.chars() {
        if glyph == ' ' {
            press_category(widget, KeyCategory::Space);
        } else {
            press_glyph(widget, glyph);
        }
    }
}

/// Text and caret of a trigger's field
#[allow(dead_code)]
pub fn field_state<S: Surface>(
    widget: &Widget<MemoryField, S>,
    id: TriggerId,
) -> (String, Option<CaretRange>) {
    let field = widget.field(id).expect("trigger exists");
    (field.value().to_string(), field.current_caret())
}
