//! Projection of a quote response into a summary line and tables

use crate::quote::{QuantityPrice, QuoteResponse};
use crate::render::format::{eur, plain_number, weight};
use html_escape::encode_text;
use indexmap::IndexMap;
use std::fmt;

/// Placeholder for values the service did not detect
pub const PLACEHOLDER: &str = "-";

/// Column alignment for plain-text output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A rendered table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub footer: Option<Vec<String>>,
    pub align: Vec<Align>,
}

impl Table {
    fn new(headers: &[&str], align: Vec<Align>) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
            footer: None,
            align,
        }
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in self.rows.iter().chain(self.footer.iter()) {
            for (i, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(i) {
                    *width = (*width).max(cell.chars().count());
                }
            }
        }
        widths
    }

    fn write_row(
        &self,
        f: &mut fmt::Formatter<'_>,
        cells: &[String],
        widths: &[usize],
    ) -> fmt::Result {
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                line.push_str(" | ");
            }
            let pad = widths[i].saturating_sub(cell.chars().count());
            match self.align.get(i).copied().unwrap_or(Align::Left) {
                Align::Left => {
                    line.push_str(cell);
                    line.extend(std::iter::repeat(' ').take(pad));
                }
                Align::Right => {
                    line.extend(std::iter::repeat(' ').take(pad));
                    line.push_str(cell);
                }
            }
        }
        writeln!(f, "{}", line.trim_end())
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from("<table>\n<thead><tr>");
        for header in &self.headers {
            html.push_str(&format!("<th>{}</th>", encode_text(header)));
        }
        html.push_str("</tr></thead>\n<tbody>\n");
        for row in &self.rows {
            html.push_str(&html_row(row));
        }
        html.push_str("</tbody>\n");
        if let Some(footer) = &self.footer {
            html.push_str("<tfoot>\n");
            html.push_str(&html_row(footer));
            html.push_str("</tfoot>\n");
        }
        html.push_str("</table>\n");
        html
    }
}

fn html_row(cells: &[String]) -> String {
    let mut row = String::from("<tr>");
    for cell in cells {
        row.push_str(&format!("<td>{}</td>", encode_text(cell)));
    }
    row.push_str("</tr>\n");
    row
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        let rule = widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-");

        self.write_row(f, &self.headers, &widths)?;
        writeln!(f, "{}", rule)?;
        for row in &self.rows {
            self.write_row(f, row, &widths)?;
        }
        if let Some(footer) = &self.footer {
            writeln!(f, "{}", rule)?;
            self.write_row(f, footer, &widths)?;
        }
        Ok(())
    }
}

/// Detected properties as display strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub material: String,
    pub thickness_mm: String,
    pub area_mm2: String,
    pub weight_kg: String,
    pub bends: String,
    pub laser_holes: String,
    pub drill_holes: String,
}

impl Summary {
    fn fields(&self) -> [(&'static str, String); 7] {
        [
            ("materiale", self.material.clone()),
            ("spessore", format!("{} mm", self.thickness_mm)),
            ("area", format!("{} mm²", self.area_mm2)),
            ("peso", format!("{} kg", self.weight_kg)),
            ("pieghe", self.bends.clone()),
            ("fori laser", self.laser_holes.clone()),
            ("fori trapano", self.drill_holes.clone()),
        ]
    }

    pub fn to_html(&self) -> String {
        let badges: Vec<String> = self
            .fields()
            .iter()
            .map(|(label, value)| {
                format!("{}: <span class=\"badge\">{}</span>", label, encode_text(value))
            })
            .collect();
        format!("<p><strong>Rilevati</strong>: {}</p>\n", badges.join(" • "))
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .fields()
            .iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect();
        write!(f, "Rilevati: {}", parts.join(" • "))
    }
}

/// Everything shown for one quote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteView {
    pub summary: Summary,
    pub items: Table,
    pub per_quantity: Option<Table>,
}

impl QuoteView {
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"results\">\n");
        html.push_str(&self.summary.to_html());
        html.push_str(&self.items.to_html());
        if let Some(table) = &self.per_quantity {
            html.push_str(&table.to_html());
        }
        html.push_str("</div>\n");
        html
    }
}

impl fmt::Display for QuoteView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary)?;
        writeln!(f)?;
        write!(f, "{}", self.items)?;
        if let Some(table) = &self.per_quantity {
            writeln!(f)?;
            write!(f, "{}", table)?;
        }
        Ok(())
    }
}

/// Build the view for a quote response
pub fn render(response: &QuoteResponse) -> QuoteView {
    QuoteView {
        summary: render_summary(response),
        items: render_items(response),
        per_quantity: render_per_quantity(response),
    }
}

fn render_summary(response: &QuoteResponse) -> Summary {
    let detected = response.detected().cloned().unwrap_or_default();
    let or_dash = |value: Option<f64>| {
        value
            .map(plain_number)
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    };
    let or_zero = |value: Option<f64>| value.map(plain_number).unwrap_or_else(|| "0".to_string());

    Summary {
        material: detected.material.unwrap_or_else(|| PLACEHOLDER.to_string()),
        thickness_mm: or_dash(detected.thickness_mm),
        area_mm2: or_dash(detected.area_mm2),
        weight_kg: weight(detected.weight_kg),
        bends: or_zero(detected.bends_count),
        laser_holes: or_zero(detected.laser_holes_count),
        drill_holes: or_zero(detected.drill_holes_count),
    }
}

fn render_items(response: &QuoteResponse) -> Table {
    let mut table = Table::new(
        &["Voce", "Dettagli", "Totale"],
        vec![Align::Left, Align::Left, Align::Right],
    );

    for item in response.items() {
        let total = item.total.filter(|t| !t.is_nan()).unwrap_or(0.0);
        table.rows.push(vec![
            item.label.clone(),
            item.detail.clone().unwrap_or_default(),
            eur(total),
        ]);
    }

    table.footer = Some(vec![
        String::new(),
        "Totale".to_string(),
        eur(response.total()),
    ]);
    table
}

fn render_per_quantity(response: &QuoteResponse) -> Option<Table> {
    let per_quantity = response.per_quantity.as_ref().filter(|map| !map.is_empty())?;

    let mut table = Table::new(
        &["Q.tà", "Totale ordine", "Prezzo unitario"],
        vec![Align::Right, Align::Right, Align::Right],
    );
    let amount = |value: Option<f64>| value.map(eur).unwrap_or_else(|| PLACEHOLDER.to_string());

    for (quantity, price) in js_key_order(per_quantity) {
        table.rows.push(vec![
            quantity.clone(),
            amount(price.order_total),
            amount(price.unit_price),
        ]);
    }

    Some(table)
}

/// Canonical array-index key ("0", "7", "250" but not "07" or "-1")
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|&n| n != u32::MAX)
}

/// Order object keys like a JavaScript engine enumerates them: integer
/// keys ascending first, then the rest in insertion order.
fn js_key_order(map: &IndexMap<String, QuantityPrice>) -> Vec<(&String, &QuantityPrice)> {
    let mut indexed = Vec::new();
    let mut named = Vec::new();

    for (key, value) in map {
        match array_index(key) {
            Some(n) => indexed.push((n, key, value)),
            None => named.push((key, value)),
        }
    }

    indexed.sort_by_key(|(n, _, _)| *n);
    indexed
        .into_iter()
        .map(|(_, key, value)| (key, value))
        .chain(named)
        .collect()
}
