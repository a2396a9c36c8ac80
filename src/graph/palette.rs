use super::types::ColorId;

/// One draggable swatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteColor {
	/// Index into [`PALETTE`].
	pub id: ColorId,
	/// CSS color used for the swatch and vertex fill.
	pub hex: &'static str,
	/// Shown as the swatch tooltip.
	pub name: &'static str,
}

/// Fixed palette. A color's `id` is its index here.
pub static PALETTE: [PaletteColor; 6] = [
	PaletteColor {
		id: 0,
		hex: "#e53935",
		name: "Red",
	},
	PaletteColor {
		id: 1,
		hex: "#43a047",
		name: "Green",
	},
	PaletteColor {
		id: 2,
		hex: "#1e88e5",
		name: "Blue",
	},
	PaletteColor {
		id: 3,
		hex: "#fdd835",
		name: "Yellow",
	},
	PaletteColor {
		id: 4,
		hex: "#8e24aa",
		name: "Purple",
	},
	PaletteColor {
		id: 5,
		hex: "#fb8c00",
		name: "Orange",
	},
];

/// Look up a palette entry by id.
pub fn palette_color(id: ColorId) -> Option<&'static PaletteColor> {
	PALETTE.get(id)
}

/// Whether `id` names a palette entry.
pub fn is_palette_color(id: ColorId) -> bool {
	id < PALETTE.len()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_ids_match_positions() {
		for (i, color) in PALETTE.iter().enumerate() {
			assert_eq!(color.id, i);
			assert_eq!(palette_color(i), Some(color));
		}
		assert!(palette_color(PALETTE.len()).is_none());
		assert!(!is_palette_color(6));
	}
}
