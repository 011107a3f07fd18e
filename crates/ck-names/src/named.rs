//! The named-color reference table.
//!
//! Two blocks, in this order:
//!
//! 1. The CSS Color Module Level 4 keywords. Where CSS spells the same color
//!    twice (`cyan`/`aqua`, `magenta`/`fuchsia`, `grey`/`gray` and its
//!    compounds) only the first spelling is kept.
//! 2. The X11 shade variants (`Slate Blue 1`..`4`, `Gray 1`..`99`), minus
//!    any whose value already appears earlier.
//!
//! Every hex value maps back to exactly one name.

use crate::table::NamedColor;

/// CSS keywords alphabetically, then X11 variants. Table order breaks
/// distance ties.
pub static NAMED_COLORS: &[NamedColor] = &[
    // ── CSS keywords ──
    NamedColor::new("Alice Blue", 0xF0F8FF),
    NamedColor::new("Antique White", 0xFAEBD7),
    NamedColor::new("Aqua", 0x00FFFF),
    NamedColor::new("Aquamarine", 0x7FFFD4),
    NamedColor::new("Azure", 0xF0FFFF),
    NamedColor::new("Beige", 0xF5F5DC),
    NamedColor::new("Bisque", 0xFFE4C4),
    NamedColor::new("Black", 0x000000),
    NamedColor::new("Blanched Almond", 0xFFEBCD),
    NamedColor::new("Blue", 0x0000FF),
    NamedColor::new("Blue Violet", 0x8A2BE2),
    NamedColor::new("Brown", 0xA52A2A),
    NamedColor::new("Burlywood", 0xDEB887),
    NamedColor::new("Cadet Blue", 0x5F9EA0),
    NamedColor::new("Chartreuse", 0x7FFF00),
    NamedColor::new("Chocolate", 0xD2691E),
    NamedColor::new("Coral", 0xFF7F50),
    NamedColor::new("Cornflower Blue", 0x6495ED),
    NamedColor::new("Cornsilk", 0xFFF8DC),
    NamedColor::new("Crimson", 0xDC143C),
    NamedColor::new("Dark Blue", 0x00008B),
    NamedColor::new("Dark Cyan", 0x008B8B),
    NamedColor::new("Dark Goldenrod", 0xB8860B),
    NamedColor::new("Dark Gray", 0xA9A9A9),
    NamedColor::new("Dark Green", 0x006400),
    NamedColor::new("Dark Khaki", 0xBDB76B),
    NamedColor::new("Dark Magenta", 0x8B008B),
    NamedColor::new("Dark Olive Green", 0x556B2F),
    NamedColor::new("Dark Orange", 0xFF8C00),
    NamedColor::new("Dark Orchid", 0x9932CC),
    NamedColor::new("Dark Red", 0x8B0000),
    NamedColor::new("Dark Salmon", 0xE9967A),
    NamedColor::new("Dark Sea Green", 0x8FBC8F),
    NamedColor::new("Dark Slate Blue", 0x483D8B),
    NamedColor::new("Dark Slate Gray", 0x2F4F4F),
    NamedColor::new("Dark Turquoise", 0x00CED1),
    NamedColor::new("Dark Violet", 0x9400D3),
    NamedColor::new("Deep Pink", 0xFF1493),
    NamedColor::new("Deep Sky Blue", 0x00BFFF),
    NamedColor::new("Dim Gray", 0x696969),
    NamedColor::new("Dodger Blue", 0x1E90FF),
    NamedColor::new("Firebrick", 0xB22222),
    NamedColor::new("Floral White", 0xFFFAF0),
    NamedColor::new("Forest Green", 0x228B22),
    NamedColor::new("Fuchsia", 0xFF00FF),
    NamedColor::new("Gainsboro", 0xDCDCDC),
    NamedColor::new("Ghost White", 0xF8F8FF),
    NamedColor::new("Gold", 0xFFD700),
    NamedColor::new("Goldenrod", 0xDAA520),
    NamedColor::new("Gray", 0x808080),
    NamedColor::new("Green", 0x008000),
    NamedColor::new("Green Yellow", 0xADFF2F),
    NamedColor::new("Honeydew", 0xF0FFF0),
    NamedColor::new("Hot Pink", 0xFF69B4),
    NamedColor::new("Indian Red", 0xCD5C5C),
    NamedColor::new("Indigo", 0x4B0082),
    NamedColor::new("Ivory", 0xFFFFF0),
    NamedColor::new("Khaki", 0xF0E68C),
    NamedColor::new("Lavender", 0xE6E6FA),
    NamedColor::new("Lavender Blush", 0xFFF0F5),
    NamedColor::new("Lawn Green", 0x7CFC00),
    NamedColor::new("Lemon Chiffon", 0xFFFACD),
    NamedColor::new("Light Blue", 0xADD8E6),
    NamedColor::new("Light Coral", 0xF08080),
    NamedColor::new("Light Cyan", 0xE0FFFF),
    NamedColor::new("Light Goldenrod Yellow", 0xFAFAD2),
    NamedColor::new("Light Gray", 0xD3D3D3),
    NamedColor::new("Light Green", 0x90EE90),
    NamedColor::new("Light Pink", 0xFFB6C1),
    NamedColor::new("Light Salmon", 0xFFA07A),
    NamedColor::new("Light Sea Green", 0x20B2AA),
    NamedColor::new("Light Sky Blue", 0x87CEFA),
    NamedColor::new("Light Slate Gray", 0x778899),
    NamedColor::new("Light Steel Blue", 0xB0C4DE),
    NamedColor::new("Light Yellow", 0xFFFFE0),
    NamedColor::new("Lime", 0x00FF00),
    NamedColor::new("Lime Green", 0x32CD32),
    NamedColor::new("Linen", 0xFAF0E6),
    NamedColor::new("Maroon", 0x800000),
    NamedColor::new("Medium Aquamarine", 0x66CDAA),
    NamedColor::new("Medium Blue", 0x0000CD),
    NamedColor::new("Medium Orchid", 0xBA55D3),
    NamedColor::new("Medium Purple", 0x9370DB),
    NamedColor::new("Medium Sea Green", 0x3CB371),
    NamedColor::new("Medium Slate Blue", 0x7B68EE),
    NamedColor::new("Medium Spring Green", 0x00FA9A),
    NamedColor::new("Medium Turquoise", 0x48D1CC),
    NamedColor::new("Medium Violet Red", 0xC71585),
    NamedColor::new("Midnight Blue", 0x191970),
    NamedColor::new("Mint Cream", 0xF5FFFA),
    NamedColor::new("Misty Rose", 0xFFE4E1),
    NamedColor::new("Moccasin", 0xFFE4B5),
    NamedColor::new("Navajo White", 0xFFDEAD),
    NamedColor::new("Navy", 0x000080),
    NamedColor::new("Old Lace", 0xFDF5E6),
    NamedColor::new("Olive", 0x808000),
    NamedColor::new("Olive Drab", 0x6B8E23),
    NamedColor::new("Orange", 0xFFA500),
    NamedColor::new("Orange Red", 0xFF4500),
    NamedColor::new("Orchid", 0xDA70D6),
    NamedColor::new("Pale Goldenrod", 0xEEE8AA),
    NamedColor::new("Pale Green", 0x98FB98),
    NamedColor::new("Pale Turquoise", 0xAFEEEE),
    NamedColor::new("Pale Violet Red", 0xDB7093),
    NamedColor::new("Papaya Whip", 0xFFEFD5),
    NamedColor::new("Peach Puff", 0xFFDAB9),
    NamedColor::new("Peru", 0xCD853F),
    NamedColor::new("Pink", 0xFFC0CB),
    NamedColor::new("Plum", 0xDDA0DD),
    NamedColor::new("Powder Blue", 0xB0E0E6),
    NamedColor::new("Purple", 0x800080),
    NamedColor::new("Rebecca Purple", 0x663399),
    NamedColor::new("Red", 0xFF0000),
    NamedColor::new("Rosy Brown", 0xBC8F8F),
    NamedColor::new("Royal Blue", 0x4169E1),
    NamedColor::new("Saddle Brown", 0x8B4513),
    NamedColor::new("Salmon", 0xFA8072),
    NamedColor::new("Sandy Brown", 0xF4A460),
    NamedColor::new("Sea Green", 0x2E8B57),
    NamedColor::new("Seashell", 0xFFF5EE),
    NamedColor::new("Sienna", 0xA0522D),
    NamedColor::new("Silver", 0xC0C0C0),
    NamedColor::new("Sky Blue", 0x87CEEB),
    NamedColor::new("Slate Blue", 0x6A5ACD),
    NamedColor::new("Slate Gray", 0x708090),
    NamedColor::new("Snow", 0xFFFAFA),
    NamedColor::new("Spring Green", 0x00FF7F),
    NamedColor::new("Steel Blue", 0x4682B4),
    NamedColor::new("Tan", 0xD2B48C),
    NamedColor::new("Teal", 0x008080),
    NamedColor::new("Thistle", 0xD8BFD8),
    NamedColor::new("Tomato", 0xFF6347),
    NamedColor::new("Turquoise", 0x40E0D0),
    NamedColor::new("Violet", 0xEE82EE),
    NamedColor::new("Wheat", 0xF5DEB3),
    NamedColor::new("White", 0xFFFFFF),
    NamedColor::new("White Smoke", 0xF5F5F5),
    NamedColor::new("Yellow", 0xFFFF00),
    NamedColor::new("Yellow Green", 0x9ACD32),
    // ── X11 variants ──
    NamedColor::new("Snow 2", 0xEEE9E9),
    NamedColor::new("Snow 3", 0xCDC9C9),
    NamedColor::new("Snow 4", 0x8B8989),
    NamedColor::new("Seashell 2", 0xEEE5DE),
    NamedColor::new("Seashell 3", 0xCDC5BF),
    NamedColor::new("Seashell 4", 0x8B8682),
    NamedColor::new("Antique White 1", 0xFFEFDB),
    NamedColor::new("Antique White 2", 0xEEDFCC),
    NamedColor::new("Antique White 3", 0xCDC0B0),
    NamedColor::new("Antique White 4", 0x8B8378),
    NamedColor::new("Bisque 2", 0xEED5B7),
    NamedColor::new("Bisque 3", 0xCDB79E),
    NamedColor::new("Bisque 4", 0x8B7D6B),
    NamedColor::new("Peach Puff 2", 0xEECBAD),
    NamedColor::new("Peach Puff 3", 0xCDAF95),
    NamedColor::new("Peach Puff 4", 0x8B7765),
    NamedColor::new("Navajo White 2", 0xEECFA1),
    NamedColor::new("Navajo White 3", 0xCDB38B),
    NamedColor::new("Navajo White 4", 0x8B795E),
    NamedColor::new("Lemon Chiffon 2", 0xEEE9BF),
    NamedColor::new("Lemon Chiffon 3", 0xCDC9A5),
    NamedColor::new("Lemon Chiffon 4", 0x8B8970),
    NamedColor::new("Cornsilk 2", 0xEEE8CD),
    NamedColor::new("Cornsilk 3", 0xCDC8B1),
    NamedColor::new("Cornsilk 4", 0x8B8878),
    NamedColor::new("Ivory 2", 0xEEEEE0),
    NamedColor::new("Ivory 3", 0xCDCDC1),
    NamedColor::new("Ivory 4", 0x8B8B83),
    NamedColor::new("Honeydew 2", 0xE0EEE0),
    NamedColor::new("Honeydew 3", 0xC1CDC1),
    NamedColor::new("Honeydew 4", 0x838B83),
    NamedColor::new("Lavender Blush 2", 0xEEE0E5),
    NamedColor::new("Lavender Blush 3", 0xCDC1C5),
    NamedColor::new("Lavender Blush 4", 0x8B8386),
    NamedColor::new("Misty Rose 2", 0xEED5D2),
    NamedColor::new("Misty Rose 3", 0xCDB7B5),
    NamedColor::new("Misty Rose 4", 0x8B7D7B),
    NamedColor::new("Azure 2", 0xE0EEEE),
    NamedColor::new("Azure 3", 0xC1CDCD),
    NamedColor::new("Azure 4", 0x838B8B),
    NamedColor::new("Slate Blue 1", 0x836FFF),
    NamedColor::new("Slate Blue 2", 0x7A67EE),
    NamedColor::new("Slate Blue 3", 0x6959CD),
    NamedColor::new("Slate Blue 4", 0x473C8B),
    NamedColor::new("Royal Blue 1", 0x4876FF),
    NamedColor::new("Royal Blue 2", 0x436EEE),
    NamedColor::new("Royal Blue 3", 0x3A5FCD),
    NamedColor::new("Royal Blue 4", 0x27408B),
    NamedColor::new("Blue 2", 0x0000EE),
    NamedColor::new("Dodger Blue 2", 0x1C86EE),
    NamedColor::new("Dodger Blue 3", 0x1874CD),
    NamedColor::new("Dodger Blue 4", 0x104E8B),
    NamedColor::new("Steel Blue 1", 0x63B8FF),
    NamedColor::new("Steel Blue 2", 0x5CACEE),
    NamedColor::new("Steel Blue 3", 0x4F94CD),
    NamedColor::new("Steel Blue 4", 0x36648B),
    NamedColor::new("Deep Sky Blue 2", 0x00B2EE),
    NamedColor::new("Deep Sky Blue 3", 0x009ACD),
    NamedColor::new("Deep Sky Blue 4", 0x00688B),
    NamedColor::new("Sky Blue 1", 0x87CEFF),
    NamedColor::new("Sky Blue 2", 0x7EC0EE),
    NamedColor::new("Sky Blue 3", 0x6CA6CD),
    NamedColor::new("Sky Blue 4", 0x4A708B),
    NamedColor::new("Light Sky Blue 1", 0xB0E2FF),
    NamedColor::new("Light Sky Blue 2", 0xA4D3EE),
    NamedColor::new("Light Sky Blue 3", 0x8DB6CD),
    NamedColor::new("Light Sky Blue 4", 0x607B8B),
    NamedColor::new("Slate Gray 1", 0xC6E2FF),
    NamedColor::new("Slate Gray 2", 0xB9D3EE),
    NamedColor::new("Slate Gray 3", 0x9FB6CD),
    NamedColor::new("Slate Gray 4", 0x6C7B8B),
    NamedColor::new("Light Steel Blue 1", 0xCAE1FF),
    NamedColor::new("Light Steel Blue 2", 0xBCD2EE),
    NamedColor::new("Light Steel Blue 3", 0xA2B5CD),
    NamedColor::new("Light Steel Blue 4", 0x6E7B8B),
    NamedColor::new("Light Blue 1", 0xBFEFFF),
    NamedColor::new("Light Blue 2", 0xB2DFEE),
    NamedColor::new("Light Blue 3", 0x9AC0CD),
    NamedColor::new("Light Blue 4", 0x68838B),
    NamedColor::new("Light Cyan 2", 0xD1EEEE),
    NamedColor::new("Light Cyan 3", 0xB4CDCD),
    NamedColor::new("Light Cyan 4", 0x7A8B8B),
    NamedColor::new("Pale Turquoise 1", 0xBBFFFF),
    NamedColor::new("Pale Turquoise 2", 0xAEEEEE),
    NamedColor::new("Pale Turquoise 3", 0x96CDCD),
    NamedColor::new("Pale Turquoise 4", 0x668B8B),
    NamedColor::new("Cadet Blue 1", 0x98F5FF),
    NamedColor::new("Cadet Blue 2", 0x8EE5EE),
    NamedColor::new("Cadet Blue 3", 0x7AC5CD),
    NamedColor::new("Cadet Blue 4", 0x53868B),
    NamedColor::new("Turquoise 1", 0x00F5FF),
    NamedColor::new("Turquoise 2", 0x00E5EE),
    NamedColor::new("Turquoise 3", 0x00C5CD),
    NamedColor::new("Turquoise 4", 0x00868B),
    NamedColor::new("Cyan 2", 0x00EEEE),
    NamedColor::new("Cyan 3", 0x00CDCD),
    NamedColor::new("Dark Slate Gray 1", 0x97FFFF),
    NamedColor::new("Dark Slate Gray 2", 0x8DEEEE),
    NamedColor::new("Dark Slate Gray 3", 0x79CDCD),
    NamedColor::new("Dark Slate Gray 4", 0x528B8B),
    NamedColor::new("Aquamarine 2", 0x76EEC6),
    NamedColor::new("Aquamarine 4", 0x458B74),
    NamedColor::new("Dark Sea Green 1", 0xC1FFC1),
    NamedColor::new("Dark Sea Green 2", 0xB4EEB4),
    NamedColor::new("Dark Sea Green 3", 0x9BCD9B),
    NamedColor::new("Dark Sea Green 4", 0x698B69),
    NamedColor::new("Sea Green 1", 0x54FF9F),
    NamedColor::new("Sea Green 2", 0x4EEE94),
    NamedColor::new("Sea Green 3", 0x43CD80),
    NamedColor::new("Pale Green 1", 0x9AFF9A),
    NamedColor::new("Pale Green 3", 0x7CCD7C),
    NamedColor::new("Pale Green 4", 0x548B54),
    NamedColor::new("Spring Green 2", 0x00EE76),
    NamedColor::new("Spring Green 3", 0x00CD66),
    NamedColor::new("Spring Green 4", 0x008B45),
    NamedColor::new("Green 2", 0x00EE00),
    NamedColor::new("Green 3", 0x00CD00),
    NamedColor::new("Green 4", 0x008B00),
    NamedColor::new("Chartreuse 2", 0x76EE00),
    NamedColor::new("Chartreuse 3", 0x66CD00),
    NamedColor::new("Chartreuse 4", 0x458B00),
    NamedColor::new("Olive Drab 1", 0xC0FF3E),
    NamedColor::new("Olive Drab 2", 0xB3EE3A),
    NamedColor::new("Olive Drab 4", 0x698B22),
    NamedColor::new("Dark Olive Green 1", 0xCAFF70),
    NamedColor::new("Dark Olive Green 2", 0xBCEE68),
    NamedColor::new("Dark Olive Green 3", 0xA2CD5A),
    NamedColor::new("Dark Olive Green 4", 0x6E8B3D),
    NamedColor::new("Khaki 1", 0xFFF68F),
    NamedColor::new("Khaki 2", 0xEEE685),
    NamedColor::new("Khaki 3", 0xCDC673),
    NamedColor::new("Khaki 4", 0x8B864E),
    NamedColor::new("Light Goldenrod 1", 0xFFEC8B),
    NamedColor::new("Light Goldenrod 2", 0xEEDC82),
    NamedColor::new("Light Goldenrod 3", 0xCDBE70),
    NamedColor::new("Light Goldenrod 4", 0x8B814C),
    NamedColor::new("Light Yellow 2", 0xEEEED1),
    NamedColor::new("Light Yellow 3", 0xCDCDB4),
    NamedColor::new("Light Yellow 4", 0x8B8B7A),
    NamedColor::new("Yellow 2", 0xEEEE00),
    NamedColor::new("Yellow 3", 0xCDCD00),
    NamedColor::new("Yellow 4", 0x8B8B00),
    NamedColor::new("Gold 2", 0xEEC900),
    NamedColor::new("Gold 3", 0xCDAD00),
    NamedColor::new("Gold 4", 0x8B7500),
    NamedColor::new("Goldenrod 1", 0xFFC125),
    NamedColor::new("Goldenrod 2", 0xEEB422),
    NamedColor::new("Goldenrod 3", 0xCD9B1D),
    NamedColor::new("Goldenrod 4", 0x8B6914),
    NamedColor::new("Dark Goldenrod 1", 0xFFB90F),
    NamedColor::new("Dark Goldenrod 2", 0xEEAD0E),
    NamedColor::new("Dark Goldenrod 3", 0xCD950C),
    NamedColor::new("Dark Goldenrod 4", 0x8B6508),
    NamedColor::new("Rosy Brown 1", 0xFFC1C1),
    NamedColor::new("Rosy Brown 2", 0xEEB4B4),
    NamedColor::new("Rosy Brown 3", 0xCD9B9B),
    NamedColor::new("Rosy Brown 4", 0x8B6969),
    NamedColor::new("Indian Red 1", 0xFF6A6A),
    NamedColor::new("Indian Red 2", 0xEE6363),
    NamedColor::new("Indian Red 3", 0xCD5555),
    NamedColor::new("Indian Red 4", 0x8B3A3A),
    NamedColor::new("Sienna 1", 0xFF8247),
    NamedColor::new("Sienna 2", 0xEE7942),
    NamedColor::new("Sienna 3", 0xCD6839),
    NamedColor::new("Sienna 4", 0x8B4726),
    NamedColor::new("Burlywood 1", 0xFFD39B),
    NamedColor::new("Burlywood 2", 0xEEC591),
    NamedColor::new("Burlywood 3", 0xCDAA7D),
    NamedColor::new("Burlywood 4", 0x8B7355),
    NamedColor::new("Wheat 1", 0xFFE7BA),
    NamedColor::new("Wheat 2", 0xEED8AE),
    NamedColor::new("Wheat 3", 0xCDBA96),
    NamedColor::new("Wheat 4", 0x8B7E66),
    NamedColor::new("Tan 1", 0xFFA54F),
    NamedColor::new("Tan 2", 0xEE9A49),
    NamedColor::new("Tan 4", 0x8B5A2B),
    NamedColor::new("Chocolate 1", 0xFF7F24),
    NamedColor::new("Chocolate 2", 0xEE7621),
    NamedColor::new("Chocolate 3", 0xCD661D),
    NamedColor::new("Firebrick 1", 0xFF3030),
    NamedColor::new("Firebrick 2", 0xEE2C2C),
    NamedColor::new("Firebrick 3", 0xCD2626),
    NamedColor::new("Firebrick 4", 0x8B1A1A),
    NamedColor::new("Brown 1", 0xFF4040),
    NamedColor::new("Brown 2", 0xEE3B3B),
    NamedColor::new("Brown 3", 0xCD3333),
    NamedColor::new("Brown 4", 0x8B2323),
    NamedColor::new("Salmon 1", 0xFF8C69),
    NamedColor::new("Salmon 2", 0xEE8262),
    NamedColor::new("Salmon 3", 0xCD7054),
    NamedColor::new("Salmon 4", 0x8B4C39),
    NamedColor::new("Light Salmon 2", 0xEE9572),
    NamedColor::new("Light Salmon 3", 0xCD8162),
    NamedColor::new("Light Salmon 4", 0x8B5742),
    NamedColor::new("Orange 2", 0xEE9A00),
    NamedColor::new("Orange 3", 0xCD8500),
    NamedColor::new("Orange 4", 0x8B5A00),
    NamedColor::new("Dark Orange 1", 0xFF7F00),
    NamedColor::new("Dark Orange 2", 0xEE7600),
    NamedColor::new("Dark Orange 3", 0xCD6600),
    NamedColor::new("Dark Orange 4", 0x8B4500),
    NamedColor::new("Coral 1", 0xFF7256),
    NamedColor::new("Coral 2", 0xEE6A50),
    NamedColor::new("Coral 3", 0xCD5B45),
    NamedColor::new("Coral 4", 0x8B3E2F),
    NamedColor::new("Tomato 2", 0xEE5C42),
    NamedColor::new("Tomato 3", 0xCD4F39),
    NamedColor::new("Tomato 4", 0x8B3626),
    NamedColor::new("Orange Red 2", 0xEE4000),
    NamedColor::new("Orange Red 3", 0xCD3700),
    NamedColor::new("Orange Red 4", 0x8B2500),
    NamedColor::new("Red 2", 0xEE0000),
    NamedColor::new("Red 3", 0xCD0000),
    NamedColor::new("Deep Pink 2", 0xEE1289),
    NamedColor::new("Deep Pink 3", 0xCD1076),
    NamedColor::new("Deep Pink 4", 0x8B0A50),
    NamedColor::new("Hot Pink 1", 0xFF6EB4),
    NamedColor::new("Hot Pink 2", 0xEE6AA7),
    NamedColor::new("Hot Pink 3", 0xCD6090),
    NamedColor::new("Hot Pink 4", 0x8B3A62),
    NamedColor::new("Pink 1", 0xFFB5C5),
    NamedColor::new("Pink 2", 0xEEA9B8),
    NamedColor::new("Pink 3", 0xCD919E),
    NamedColor::new("Pink 4", 0x8B636C),
    NamedColor::new("Light Pink 1", 0xFFAEB9),
    NamedColor::new("Light Pink 2", 0xEEA2AD),
    NamedColor::new("Light Pink 3", 0xCD8C95),
    NamedColor::new("Light Pink 4", 0x8B5F65),
    NamedColor::new("Pale Violet Red 1", 0xFF82AB),
    NamedColor::new("Pale Violet Red 2", 0xEE799F),
    NamedColor::new("Pale Violet Red 3", 0xCD6889),
    NamedColor::new("Pale Violet Red 4", 0x8B475D),
    NamedColor::new("Maroon 1", 0xFF34B3),
    NamedColor::new("Maroon 2", 0xEE30A7),
    NamedColor::new("Maroon 3", 0xCD2990),
    NamedColor::new("Maroon 4", 0x8B1C62),
    NamedColor::new("Violet Red 1", 0xFF3E96),
    NamedColor::new("Violet Red 2", 0xEE3A8C),
    NamedColor::new("Violet Red 3", 0xCD3278),
    NamedColor::new("Violet Red 4", 0x8B2252),
    NamedColor::new("Magenta 2", 0xEE00EE),
    NamedColor::new("Magenta 3", 0xCD00CD),
    NamedColor::new("Orchid 1", 0xFF83FA),
    NamedColor::new("Orchid 2", 0xEE7AE9),
    NamedColor::new("Orchid 3", 0xCD69C9),
    NamedColor::new("Orchid 4", 0x8B4789),
    NamedColor::new("Plum 1", 0xFFBBFF),
    NamedColor::new("Plum 2", 0xEEAEEE),
    NamedColor::new("Plum 3", 0xCD96CD),
    NamedColor::new("Plum 4", 0x8B668B),
    NamedColor::new("Medium Orchid 1", 0xE066FF),
    NamedColor::new("Medium Orchid 2", 0xD15FEE),
    NamedColor::new("Medium Orchid 3", 0xB452CD),
    NamedColor::new("Medium Orchid 4", 0x7A378B),
    NamedColor::new("Dark Orchid 1", 0xBF3EFF),
    NamedColor::new("Dark Orchid 2", 0xB23AEE),
    NamedColor::new("Dark Orchid 3", 0x9A32CD),
    NamedColor::new("Dark Orchid 4", 0x68228B),
    NamedColor::new("Purple 1", 0x9B30FF),
    NamedColor::new("Purple 2", 0x912CEE),
    NamedColor::new("Purple 3", 0x7D26CD),
    NamedColor::new("Purple 4", 0x551A8B),
    NamedColor::new("Medium Purple 1", 0xAB82FF),
    NamedColor::new("Medium Purple 2", 0x9F79EE),
    NamedColor::new("Medium Purple 3", 0x8968CD),
    NamedColor::new("Medium Purple 4", 0x5D478B),
    NamedColor::new("Thistle 1", 0xFFE1FF),
    NamedColor::new("Thistle 2", 0xEED2EE),
    NamedColor::new("Thistle 3", 0xCDB5CD),
    NamedColor::new("Thistle 4", 0x8B7B8B),
    NamedColor::new("Gray 1", 0x030303),
    NamedColor::new("Gray 2", 0x050505),
    NamedColor::new("Gray 3", 0x080808),
    NamedColor::new("Gray 4", 0x0A0A0A),
    NamedColor::new("Gray 5", 0x0D0D0D),
    NamedColor::new("Gray 6", 0x0F0F0F),
    NamedColor::new("Gray 7", 0x121212),
    NamedColor::new("Gray 8", 0x141414),
    NamedColor::new("Gray 9", 0x171717),
    NamedColor::new("Gray 10", 0x1A1A1A),
    NamedColor::new("Gray 11", 0x1C1C1C),
    NamedColor::new("Gray 12", 0x1F1F1F),
    NamedColor::new("Gray 13", 0x212121),
    NamedColor::new("Gray 14", 0x242424),
    NamedColor::new("Gray 15", 0x262626),
    NamedColor::new("Gray 16", 0x292929),
    NamedColor::new("Gray 17", 0x2B2B2B),
    NamedColor::new("Gray 18", 0x2E2E2E),
    NamedColor::new("Gray 19", 0x303030),
    NamedColor::new("Gray 20", 0x333333),
    NamedColor::new("Gray 21", 0x363636),
    NamedColor::new("Gray 22", 0x383838),
    NamedColor::new("Gray 23", 0x3B3B3B),
    NamedColor::new("Gray 24", 0x3D3D3D),
    NamedColor::new("Gray 25", 0x404040),
    NamedColor::new("Gray 26", 0x424242),
    NamedColor::new("Gray 27", 0x454545),
    NamedColor::new("Gray 28", 0x474747),
    NamedColor::new("Gray 29", 0x4A4A4A),
    NamedColor::new("Gray 30", 0x4D4D4D),
    NamedColor::new("Gray 31", 0x4F4F4F),
    NamedColor::new("Gray 32", 0x525252),
    NamedColor::new("Gray 33", 0x545454),
    NamedColor::new("Gray 34", 0x575757),
    NamedColor::new("Gray 35", 0x595959),
    NamedColor::new("Gray 36", 0x5C5C5C),
    NamedColor::new("Gray 37", 0x5E5E5E),
    NamedColor::new("Gray 38", 0x616161),
    NamedColor::new("Gray 39", 0x636363),
    NamedColor::new("Gray 40", 0x666666),
    NamedColor::new("Gray 42", 0x6B6B6B),
    NamedColor::new("Gray 43", 0x6E6E6E),
    NamedColor::new("Gray 44", 0x707070),
    NamedColor::new("Gray 45", 0x737373),
    NamedColor::new("Gray 46", 0x757575),
    NamedColor::new("Gray 47", 0x787878),
    NamedColor::new("Gray 48", 0x7A7A7A),
    NamedColor::new("Gray 49", 0x7D7D7D),
    NamedColor::new("Gray 50", 0x7F7F7F),
    NamedColor::new("Gray 51", 0x828282),
    NamedColor::new("Gray 52", 0x858585),
    NamedColor::new("Gray 53", 0x878787),
    NamedColor::new("Gray 54", 0x8A8A8A),
    NamedColor::new("Gray 55", 0x8C8C8C),
    NamedColor::new("Gray 56", 0x8F8F8F),
    NamedColor::new("Gray 57", 0x919191),
    NamedColor::new("Gray 58", 0x949494),
    NamedColor::new("Gray 59", 0x969696),
    NamedColor::new("Gray 60", 0x999999),
    NamedColor::new("Gray 61", 0x9C9C9C),
    NamedColor::new("Gray 62", 0x9E9E9E),
    NamedColor::new("Gray 63", 0xA1A1A1),
    NamedColor::new("Gray 64", 0xA3A3A3),
    NamedColor::new("Gray 65", 0xA6A6A6),
    NamedColor::new("Gray 66", 0xA8A8A8),
    NamedColor::new("Gray 67", 0xABABAB),
    NamedColor::new("Gray 68", 0xADADAD),
    NamedColor::new("Gray 69", 0xB0B0B0),
    NamedColor::new("Gray 70", 0xB3B3B3),
    NamedColor::new("Gray 71", 0xB5B5B5),
    NamedColor::new("Gray 72", 0xB8B8B8),
    NamedColor::new("Gray 73", 0xBABABA),
    NamedColor::new("Gray 74", 0xBDBDBD),
    NamedColor::new("Gray 75", 0xBFBFBF),
    NamedColor::new("Gray 76", 0xC2C2C2),
    NamedColor::new("Gray 77", 0xC4C4C4),
    NamedColor::new("Gray 78", 0xC7C7C7),
    NamedColor::new("Gray 79", 0xC9C9C9),
    NamedColor::new("Gray 80", 0xCCCCCC),
    NamedColor::new("Gray 81", 0xCFCFCF),
    NamedColor::new("Gray 82", 0xD1D1D1),
    NamedColor::new("Gray 83", 0xD4D4D4),
    NamedColor::new("Gray 84", 0xD6D6D6),
    NamedColor::new("Gray 85", 0xD9D9D9),
    NamedColor::new("Gray 86", 0xDBDBDB),
    NamedColor::new("Gray 87", 0xDEDEDE),
    NamedColor::new("Gray 88", 0xE0E0E0),
    NamedColor::new("Gray 89", 0xE3E3E3),
    NamedColor::new("Gray 90", 0xE5E5E5),
    NamedColor::new("Gray 91", 0xE8E8E8),
    NamedColor::new("Gray 92", 0xEBEBEB),
    NamedColor::new("Gray 93", 0xEDEDED),
    NamedColor::new("Gray 94", 0xF0F0F0),
    NamedColor::new("Gray 95", 0xF2F2F2),
    NamedColor::new("Gray 97", 0xF7F7F7),
    NamedColor::new("Gray 98", 0xFAFAFA),
    NamedColor::new("Gray 99", 0xFCFCFC),
];
