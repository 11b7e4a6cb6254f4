//! Static named-color catalogues.
//!
//! Hex codes are stored as six lowercase digits without a leading `#`.

/// One source catalogue of named colors.
pub struct Catalogue {
    pub name: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

/// CSS keyword colors.
const CSS: Catalogue = Catalogue {
    name: "css",
    entries: &[
        ("black", "000000"),
        ("white", "ffffff"),
        ("red", "ff0000"),
        ("dark red", "8b0000"),
        ("green", "008000"),
        ("lime", "00ff00"),
        ("forest green", "228b22"),
        ("sea green", "2e8b57"),
        ("olive", "808000"),
        ("olive drab", "6b8e23"),
        ("blue", "0000ff"),
        ("navy", "000080"),
        ("midnight blue", "191970"),
        ("royal blue", "4169e1"),
        ("steel blue", "4682b4"),
        ("sky blue", "87ceeb"),
        ("light blue", "add8e6"),
        ("yellow", "ffff00"),
        ("gold", "ffd700"),
        ("orange", "ffa500"),
        ("tomato", "ff6347"),
        ("coral", "ff7f50"),
        ("salmon", "fa8072"),
        ("crimson", "dc143c"),
        ("firebrick", "b22222"),
        ("maroon", "800000"),
        ("pink", "ffc0cb"),
        ("hot pink", "ff69b4"),
        ("magenta", "ff00ff"),
        ("orchid", "da70d6"),
        ("plum", "dda0dd"),
        ("violet", "ee82ee"),
        ("purple", "800080"),
        ("indigo", "4b0082"),
        ("lavender", "e6e6fa"),
        ("cyan", "00ffff"),
        ("turquoise", "40e0d0"),
        ("teal", "008080"),
        ("brown", "a52a2a"),
        ("rosy brown", "bc8f8f"),
        ("saddle brown", "8b4513"),
        ("chocolate", "d2691e"),
        ("sienna", "a0522d"),
        ("tan", "d2b48c"),
        ("wheat", "f5deb3"),
        ("khaki", "f0e68c"),
        ("beige", "f5f5dc"),
        ("ivory", "fffff0"),
        ("azure", "f0ffff"),
        ("silver", "c0c0c0"),
        ("gray", "808080"),
        ("slate gray", "708090"),
    ],
};

/// Designer and material names absent from the CSS keywords.
const DESIGNER: Catalogue = Catalogue {
    name: "designer",
    entries: &[
        ("rose gold", "c08081"),
        ("champagne", "f7e7ce"),
        ("copper", "b87333"),
        ("bronze", "cd7f32"),
        ("brass", "b5a642"),
        ("pearl", "eae0c8"),
        ("onyx", "353839"),
        ("charcoal", "36454f"),
        ("space gray", "717378"),
        ("cream", "fffdd0"),
        ("mint", "3eb489"),
        ("mint green", "98ff98"),
        ("baby blue", "89cff0"),
        ("periwinkle", "ccccff"),
        ("blush", "de5d83"),
        ("mauve", "e0b0ff"),
        ("sage", "bcb88a"),
        ("taupe", "483c32"),
        ("burnt orange", "cc5500"),
        ("mustard", "ffdb58"),
        ("emerald", "50c878"),
        ("sapphire", "0f52ba"),
        ("ruby", "e0115f"),
        ("amethyst", "9966cc"),
    ],
};

/// All catalogues in lookup order. Ties between equally scored names
/// go to the earlier catalogue.
pub const CATALOGUES: &[Catalogue] = &[CSS, DESIGNER];
