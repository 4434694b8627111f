use crate::render::Color;

/// Line-color pool cycled across per-seller inventory series.
pub const SELLER_PALETTE: [Color; 7] = [
    Color::rgb(0.0, 0.502, 0.0),   // green
    Color::rgb(1.0, 0.647, 0.0),   // orange
    Color::rgb(0.502, 0.0, 0.502), // purple
    Color::rgb(0.0, 0.0, 1.0),     // blue
    Color::rgb(0.502, 0.0, 0.0),   // maroon
    Color::rgb(0.0, 0.502, 0.502), // teal
    Color::rgb(1.0, 0.0, 1.0),     // magenta
];

/// Line color for the seller at `index` in dataset iteration order.
///
/// Pure position lookup; the pool wraps round-robin past its length.
#[must_use]
pub fn palette_color(index: usize) -> Color {
    SELLER_PALETTE[index % SELLER_PALETTE.len()]
}
