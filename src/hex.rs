use crossterm::style::Stylize;

const BYTES_PER_ROW: usize = 16;

/// Prints `data` as offset-prefixed rows of hex pairs and ASCII.
pub fn print_bytes(data: &[u8]) {
    for (row, chunk) in data.chunks(BYTES_PER_ROW).enumerate() {
        let mut hex_part = String::new();
        let mut text_part = String::new();

        for (i, byte) in chunk.iter().enumerate() {
            hex_part.push_str(&format!("{byte:02x}"));
            if i % 2 == 1 && i < chunk.len() - 1 {
                hex_part.push(' ');
            }
            text_part.push(if byte.is_ascii_graphic() || *byte == b' ' {
                *byte as char
            } else {
                '.'
            });
        }

        println!(
            "{}{}{hex_part:39}{}{}",
            format!("{:08x}", row * BYTES_PER_ROW).dark_grey(),
            "|".dark_grey(),
            "|".dark_grey(),
            text_part.as_str().blue()
        );
    }
}
