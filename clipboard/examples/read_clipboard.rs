//! Clipboard reading demo.
use clipkit_clipboard::{ClipboardProvider, SystemClipboard};

fn main() {
    println!("Reading clipboard...");
    let mut clipboard = SystemClipboard::new();
    match clipboard.get_text() {
        Ok(Some(text)) => println!("Clipboard text content:\n{text}"),
        Ok(None) => println!("Clipboard does not contain text."),
        Err(e) => println!("Failed to read clipboard: {e}"),
    }
}
