//! Copies a CSV line to the clipboard and reads it back.
fn main() {
    let csv = "latitude,longitude\n37.774900,-122.419400";
    geokit_clipboard::copy_text_with_label(csv, "Position CSV");

    match geokit_clipboard::get_text() {
        Some(text) if text == csv => println!("Clipboard holds the CSV:\n{text}"),
        Some(text) => println!("Clipboard holds something else:\n{text}"),
        None => println!("Clipboard does not contain text."),
    }
}
