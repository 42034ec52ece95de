//! Text rendering of the basket.

use std::io::Write;

use vpaygo_products::Product;

const HEADERS: [&str; 4] = ["Image", "Name", "Weight", "Price"];

/// Where the poller draws. Every redraw replaces the previous table.
pub trait Screen {
    fn redraw(&mut self, products: &[Product]);
    fn notify(&mut self, message: &str);
}

/// Render products as an aligned table, one row per product in basket order.
pub fn render_table(products: &[Product]) -> String {
    let rows: Vec<[String; 4]> = products
        .iter()
        .map(|p| {
            [
                p.image.to_string(),
                p.name.to_string(),
                p.weight.to_string(),
                p.price.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    push_row(&mut out, &widths.map(|w| "-".repeat(w)), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }

    match products.len() {
        0 => out.push_str("(no products)\n"),
        1 => out.push_str("1 item\n"),
        n => out.push_str(&format!("{n} items\n")),
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// ANSI terminal screen: clears and redraws on every tick.
#[derive(Debug)]
pub struct TerminalScreen<W> {
    out: W,
}

impl TerminalScreen<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalScreen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn write(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            tracing::warn!("failed to write to terminal: {e}");
        }
    }
}

impl<W: Write> Screen for TerminalScreen<W> {
    fn redraw(&mut self, products: &[Product]) {
        let frame = format!(
            "\x1b[2J\x1b[H{}\n[c] checkout  [q] quit\n",
            render_table(products)
        );
        self.write(&frame);
    }

    fn notify(&mut self, message: &str) {
        self.write(&format!("{message}\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_basket_shows_placeholder() {
        let table = render_table(&[]);
        assert_eq!(
            table,
            "Image  Name  Weight  Price\n-----  ----  ------  -----\n(no products)\n"
        );
    }

    #[test]
    fn rows_follow_basket_order_and_align() {
        let products = [
            Product::new("Apple", 1, 2, "apple.png"),
            Product::new("Milk", "1000g", "1.20", "milk.png"),
        ];
        let table = render_table(&products);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines[0], "Image      Name   Weight  Price");
        assert_eq!(lines[2], "apple.png  Apple  1       2");
        assert_eq!(lines[3], "milk.png   Milk   1000g   1.20");
        assert_eq!(lines[4], "2 items");
    }

    #[test]
    fn terminal_screen_clears_before_drawing() {
        let mut screen = TerminalScreen::new(Vec::new());
        screen.redraw(&[Product::new("Apple", 1, 2, "apple.png")]);
        screen.notify("Checkout Complete!");

        let written = String::from_utf8(screen.out).unwrap();
        assert!(written.starts_with("\x1b[2J\x1b[H"));
        assert!(written.contains("apple.png  Apple  1       2"));
        assert!(written.ends_with("Checkout Complete!\n"));
    }
}
