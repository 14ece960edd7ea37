//! Drives a keyboard widget without any UI attached.
//!
//! Run with `RUST_LOG=debug` to see activation and routing logs.

use osk_core::{KeyCategory, MemoryField, TextField, Widget, WidgetOptions};
use std::env;

fn main() {
    env_logger::init();

    let options = match env::args().nth(1) {
        Some(json) => match WidgetOptions::from_json(&json) {
            Ok(options) => options,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => WidgetOptions::default().with_rewire_tab(true),
    };

    let mut widget = Widget::keyboard(options);
    let name = widget.bind(MemoryField::new(""), Some("disableSymbols"));
    let notes = widget.bind(MemoryField::new(""), None);
    widget.click_trigger(name);

    let layout = widget.layout().clone();
    let key = |glyph: char| layout.position_of_glyph(glyph);
    let control = |category: KeyCategory| layout.position(category);

    let presses = [
        control(KeyCategory::Shift),
        key('a'),
        key('d'),
        key('a'),
        key('-'),
        control(KeyCategory::Tab),
        control(KeyCategory::CapsLock),
        key('h'),
        key('i'),
        control(KeyCategory::Space),
        control(KeyCategory::Shift),
        key('1'),
    ];
    for index in presses.into_iter().flatten() {
        widget.press(index);
    }

    for (label, id) in [("name", name), ("notes", notes)] {
        if let Some(field) = widget.field(id) {
            println!("{:>6}: {:?} caret {:?}", label, field.text(), field.caret());
        }
    }
    println!("active: {:?}", widget.active());
    println!("modifiers: {:?}", widget.modifiers());
}
