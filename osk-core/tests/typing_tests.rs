mod common;

use common::*;
use osk_core::{CaretRange, EventResult, KeyCategory, MemoryField, TextField, Widget, WidgetOptions};
use pretty_assertions::assert_eq;

#[test]
fn test_space_splits_word() {
    let (mut widget, id) = keyboard_with("helloworld", CaretRange::collapsed(5));

    let result = press_category(&mut widget, KeyCategory::Space);

    assert_eq!(result, EventResult::Handled);
    assert_eq!(
        field_state(&widget, id),
        ("hello world".to_string(), Some(CaretRange::collapsed(6)))
    );
}

#[test]
fn test_every_printable_key_inserts_one_char_at_caret() {
    let (widget, _) = keyboard_with("", CaretRange::collapsed(0));
    let printable: Vec<usize> = widget
        .layout()
        .keys()
        .iter()
        .enumerate()
        .filter(|(_, k)| k.category().is_printable())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(printable.len(), 48);

    for index in printable {
        let (mut widget, id) = keyboard_with("abcdef", CaretRange::collapsed(3));
        widget.press(index);

        let (text, caret) = field_state(&widget, id);
        assert_eq!(text.chars().count(), 7, "key {}", index);
        assert_eq!(caret, Some(CaretRange::collapsed(4)), "key {}", index);
        assert!(text.starts_with("abc") && text.ends_with("def"));
    }
}

#[test]
fn test_printable_key_replaces_selection() {
    let (mut widget, id) = keyboard_with("abcdef", CaretRange::new(1, 5));

    press_glyph(&mut widget, 'z');

    assert_eq!(
        field_state(&widget, id),
        ("azf".to_string(), Some(CaretRange::collapsed(2)))
    );
}

#[test]
fn test_typing_a_sentence() {
    let (mut widget, id) = keyboard_with("", CaretRange::collapsed(0));

    type_glyphs(&mut widget, "the quick fox, 42.");

    assert_eq!(
        field_state(&widget, id),
        ("the quick fox, 42.".to_string(), Some(CaretRange::collapsed(18)))
    );
}

#[test]
fn test_tab_and_return_insert_literals_by_default() {
    let (mut widget, id) = keyboard_with("ab", CaretRange::collapsed(1));

    assert_eq!(press_category(&mut widget, KeyCategory::Tab), EventResult::Handled);
    assert_eq!(press_category(&mut widget, KeyCategory::Return), EventResult::Handled);

    assert_eq!(
        field_state(&widget, id),
        ("a\t\nb".to_string(), Some(CaretRange::collapsed(3)))
    );
}

#[test]
fn test_edit_notifies_and_refocuses() {
    let (mut widget, id) = keyboard_with("", CaretRange::collapsed(0));

    type_glyphs(&mut widget, "abc");

    let field = widget.field(id).unwrap();
    assert_eq!(field.change_count(), 3);
    assert!(field.is_focused());
}

#[test]
fn test_missing_caret_appends() {
    let mut widget = Widget::keyboard(WidgetOptions::default());
    let id = widget.bind(MemoryField::without_caret("abc"), None);
    widget.click_trigger(id);

    press_glyph(&mut widget, 'd');

    assert_eq!(
        field_state(&widget, id),
        ("abcd".to_string(), Some(CaretRange::collapsed(4)))
    );
}

#[test]
fn test_caret_counts_characters() {
    let (mut widget, id) = keyboard_with("año", CaretRange::collapsed(2));

    press_glyph(&mut widget, 'x');

    let (text, caret) = field_state(&widget, id);
    assert_eq!(text, "añxo");
    assert_eq!(caret, Some(CaretRange::collapsed(3)));
}

#[test]
fn test_presses_without_active_input_do_nothing() {
    let mut widget: Widget<MemoryField> = Widget::keyboard(WidgetOptions::default());
    let id = widget.bind(MemoryField::new("abc"), None);

    assert_eq!(press_glyph(&mut widget, 'q'), EventResult::HandledSuppressDefault);
    assert_eq!(widget.field(id).unwrap().text(), "abc");
}

#[test]
fn test_unknown_key_index_is_ignored() {
    let (mut widget, id) = keyboard_with("abc", CaretRange::collapsed(3));

    assert_eq!(widget.press(999), EventResult::HandledSuppressDefault);
    assert_eq!(field_state(&widget, id).0, "abc");
}
