//! Quantity based risk highlighting for inventory cells

use crate::shared::number_format::parse_int_lenient;
use wasm_bindgen::JsCast;
use web_sys::Element;

/// Class marking cells whose text is a stock quantity
pub const QUANTITY_CELL_SELECTOR: &str = ".quantity-cell";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    /// below 10 units
    HighRisk,
    /// below 20 units
    Warning,
    Normal,
}

impl StockLevel {
    pub fn from_quantity(quantity: i64) -> Self {
        if quantity < 10 {
            StockLevel::HighRisk
        } else if quantity < 20 {
            StockLevel::Warning
        } else {
            StockLevel::Normal
        }
    }

    /// `None` when the text does not start with an integer
    pub fn from_cell_text(text: &str) -> Option<Self> {
        parse_int_lenient(text).map(Self::from_quantity)
    }

    pub fn css_classes(&self) -> &'static [&'static str] {
        match self {
            StockLevel::HighRisk => &["text-danger", "fw-bold"],
            StockLevel::Warning => &["text-warning"],
            StockLevel::Normal => &[],
        }
    }

    /// Space separated form of [`Self::css_classes`] for `class=` attributes
    pub fn class_attr(&self) -> &'static str {
        match self {
            StockLevel::HighRisk => "text-danger fw-bold",
            StockLevel::Warning => "text-warning",
            StockLevel::Normal => "",
        }
    }
}

/// Adds the risk classes to every quantity cell currently on the page
///
/// Returns the number of highlighted cells. Cells are only ever given
/// classes, so running it twice is harmless.
pub fn highlight_quantity_cells() -> usize {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return 0;
    };
    let Ok(cells) = document.query_selector_all(QUANTITY_CELL_SELECTOR) else {
        return 0;
    };

    let mut highlighted = 0;
    for i in 0..cells.length() {
        let Some(cell) = cells.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let text = cell.text_content().unwrap_or_default();
        let Some(level) = StockLevel::from_cell_text(&text) else {
            continue;
        };
        for class in level.css_classes() {
            if let Err(e) = cell.class_list().add_1(class) {
                log::warn!("Failed to highlight quantity cell: {:?}", e);
            }
        }
        if level != StockLevel::Normal {
            highlighted += 1;
        }
    }

    log::debug!("Highlighted {} quantity cells", highlighted);
    highlighted
}
