//! Human-readable names for colors, used only when presenting results.

use crate::color::Color;

/// Name of `color`: the exact CSS3 entry when there is one, otherwise the
/// entry at the smallest RGB distance (first one wins on ties).
pub fn closest_color_name(color: Color) -> &'static str {
    if let Some(name) = exact_color_name(color) {
        return name;
    }

    let mut closest = NAMED_COLORS[0].0;
    let mut min_distance = f64::MAX;
    for &(name, named) in NAMED_COLORS {
        let distance = color.distance(named);
        if distance < min_distance {
            min_distance = distance;
            closest = name;
        }
    }
    closest
}

pub fn exact_color_name(color: Color) -> Option<&'static str> {
    NAMED_COLORS
        .iter()
        .find(|(_, named)| *named == color)
        .map(|(name, _)| *name)
}

/// Look up a color by CSS3 name, ignoring case.
pub fn color_by_name(name: &str) -> Option<Color> {
    NAMED_COLORS
        .iter()
        .find(|(named, _)| named.eq_ignore_ascii_case(name.trim()))
        .map(|(_, color)| *color)
}

/// CSS3 named colors in alphabetical order.
static NAMED_COLORS: &[(&str, Color)] = &[
    ("Aliceblue", Color::new(240, 248, 255)),
    ("Antiquewhite", Color::new(250, 235, 215)),
    ("Aqua", Color::new(0, 255, 255)),
    ("Aquamarine", Color::new(127, 255, 212)),
    ("Azure", Color::new(240, 255, 255)),
    ("Beige", Color::new(245, 245, 220)),
    ("Bisque", Color::new(255, 228, 196)),
    ("Black", Color::new(0, 0, 0)),
    ("Blanchedalmond", Color::new(255, 235, 205)),
    ("Blue", Color::new(0, 0, 255)),
    ("Blueviolet", Color::new(138, 43, 226)),
    ("Brown", Color::new(165, 42, 42)),
    ("Burlywood", Color::new(222, 184, 135)),
    ("Cadetblue", Color::new(95, 158, 160)),
    ("Chartreuse", Color::new(127, 255, 0)),
    ("Chocolate", Color::new(210, 105, 30)),
    ("Coral", Color::new(255, 127, 80)),
    ("Cornflowerblue", Color::new(100, 149, 237)),
    ("Cornsilk", Color::new(255, 248, 220)),
    ("Crimson", Color::new(220, 20, 60)),
    ("Cyan", Color::new(0, 255, 255)),
    ("Darkblue", Color::new(0, 0, 139)),
    ("Darkcyan", Color::new(0, 139, 139)),
    ("Darkgoldenrod", Color::new(184, 134, 11)),
    ("Darkgray", Color::new(169, 169, 169)),
    ("Darkgreen", Color::new(0, 100, 0)),
    ("Darkgrey", Color::new(169, 169, 169)),
    ("Darkkhaki", Color::new(189, 183, 107)),
    ("Darkmagenta", Color::new(139, 0, 139)),
    ("Darkolivegreen", Color::new(85, 107, 47)),
    ("Darkorange", Color::new(255, 140, 0)),
    ("Darkorchid", Color::new(153, 50, 204)),
    ("Darkred", Color::new(139, 0, 0)),
    ("Darksalmon", Color::new(233, 150, 122)),
    ("Darkseagreen", Color::new(143, 188, 143)),
    ("Darkslateblue", Color::new(72, 61, 139)),
    ("Darkslategray", Color::new(47, 79, 79)),
    ("Darkslategrey", Color::new(47, 79, 79)),
    ("Darkturquoise", Color::new(0, 206, 209)),
    ("Darkviolet", Color::new(148, 0, 211)),
    ("Deeppink", Color::new(255, 20, 147)),
    ("Deepskyblue", Color::new(0, 191, 255)),
    ("Dimgray", Color::new(105, 105, 105)),
    ("Dimgrey", Color::new(105, 105, 105)),
    ("Dodgerblue", Color::new(30, 144, 255)),
    ("Firebrick", Color::new(178, 34, 34)),
    ("Floralwhite", Color::new(255, 250, 240)),
    ("Forestgreen", Color::new(34, 139, 34)),
    ("Fuchsia", Color::new(255, 0, 255)),
    ("Gainsboro", Color::new(220, 220, 220)),
    ("Ghostwhite", Color::new(248, 248, 255)),
    ("Gold", Color::new(255, 215, 0)),
    ("Goldenrod", Color::new(218, 165, 32)),
    ("Gray", Color::new(128, 128, 128)),
    ("Green", Color::new(0, 128, 0)),
    ("Greenyellow", Color::new(173, 255, 47)),
    ("Grey", Color::new(128, 128, 128)),
    ("Honeydew", Color::new(240, 255, 240)),
    ("Hotpink", Color::new(255, 105, 180)),
    ("Indianred", Color::new(205, 92, 92)),
    ("Indigo", Color::new(75, 0, 130)),
    ("Ivory", Color::new(255, 255, 240)),
    ("Khaki", Color::new(240, 230, 140)),
    ("Lavender", Color::new(230, 230, 250)),
    ("Lavenderblush", Color::new(255, 240, 245)),
    ("Lawngreen", Color::new(124, 252, 0)),
    ("Lemonchiffon", Color::new(255, 250, 205)),
    ("Lightblue", Color::new(173, 216, 230)),
    ("Lightcoral", Color::new(240, 128, 128)),
    ("Lightcyan", Color::new(224, 255, 255)),
    ("Lightgoldenrodyellow", Color::new(250, 250, 210)),
    ("Lightgray", Color::new(211, 211, 211)),
    ("Lightgreen", Color::new(144, 238, 144)),
    ("Lightgrey", Color::new(211, 211, 211)),
    ("Lightpink", Color::new(255, 182, 193)),
    ("Lightred", Color::new(255, 127, 127)),
    ("Lightsalmon", Color::new(255, 160, 122)),
    ("Lightseagreen", Color::new(32, 178, 170)),
    ("Lightskyblue", Color::new(135, 206, 250)),
    ("Lightslategray", Color::new(119, 136, 153)),
    ("Lightslategrey", Color::new(119, 136, 153)),
    ("Lightsteelblue", Color::new(176, 196, 222)),
    ("Lightyellow", Color::new(255, 255, 224)),
    ("Lime", Color::new(0, 255, 0)),
    ("Limegreen", Color::new(50, 205, 50)),
    ("Linen", Color::new(250, 240, 230)),
    ("Magenta", Color::new(255, 0, 255)),
    ("Maroon", Color::new(128, 0, 0)),
    ("Mediumaquamarine", Color::new(102, 205, 170)),
    ("Mediumblue", Color::new(0, 0, 205)),
    ("Mediumorchid", Color::new(186, 85, 211)),
    ("Mediumpurple", Color::new(147, 112, 219)),
    ("Mediumseagreen", Color::new(60, 179, 113)),
    ("Mediumslateblue", Color::new(123, 104, 238)),
    ("Mediumspringgreen", Color::new(0, 250, 154)),
    ("Mediumturquoise", Color::new(72, 209, 204)),
    ("Mediumvioletred", Color::new(199, 21, 133)),
    ("Midnightblue", Color::new(25, 25, 112)),
    ("Mintcream", Color::new(245, 255, 250)),
    ("Mistyrose", Color::new(255, 228, 225)),
    ("Moccasin", Color::new(255, 228, 181)),
    ("Navajowhite", Color::new(255, 222, 173)),
    ("Navy", Color::new(0, 0, 128)),
    ("Oldlace", Color::new(253, 245, 230)),
    ("Olive", Color::new(128, 128, 0)),
    ("Olivedrab", Color::new(107, 142, 35)),
    ("Orange", Color::new(255, 165, 0)),
    ("Orangered", Color::new(255, 69, 0)),
    ("Orchid", Color::new(218, 112, 214)),
    ("Palegoldenrod", Color::new(238, 232, 170)),
    ("Palegreen", Color::new(152, 251, 152)),
    ("Paleturquoise", Color::new(175, 238, 238)),
    ("Palevioletred", Color::new(219, 112, 147)),
    ("Papayawhip", Color::new(255, 239, 213)),
    ("Peachpuff", Color::new(255, 218, 185)),
    ("Peru", Color::new(205, 133, 63)),
    ("Pink", Color::new(255, 192, 203)),
    ("Plum", Color::new(221, 160, 221)),
    ("Powderblue", Color::new(176, 224, 230)),
    ("Purple", Color::new(128, 0, 128)),
    ("Red", Color::new(255, 0, 0)),
    ("Rosybrown", Color::new(188, 143, 143)),
    ("Royalblue", Color::new(65, 105, 225)),
    ("Saddlebrown", Color::new(139, 69, 19)),
    ("Salmon", Color::new(250, 128, 114)),
    ("Sandybrown", Color::new(244, 164, 96)),
    ("Seagreen", Color::new(46, 139, 87)),
    ("Seashell", Color::new(255, 245, 238)),
    ("Sienna", Color::new(160, 82, 45)),
    ("Silver", Color::new(192, 192, 192)),
    ("Skyblue", Color::new(135, 206, 235)),
    ("Slateblue", Color::new(106, 90, 205)),
    ("Slategray", Color::new(112, 128, 144)),
    ("Slategrey", Color::new(112, 128, 144)),
    ("Snow", Color::new(255, 250, 250)),
    ("Springgreen", Color::new(0, 255, 127)),
    ("Steelblue", Color::new(70, 130, 180)),
    ("Tan", Color::new(210, 180, 140)),
    ("Teal", Color::new(0, 128, 128)),
    ("Thistle", Color::new(216, 191, 216)),
    ("Tomato", Color::new(255, 99, 71)),
    ("Turquoise", Color::new(64, 224, 208)),
    ("Violet", Color::new(238, 130, 238)),
    ("Wheat", Color::new(245, 222, 179)),
    ("White", Color::new(255, 255, 255)),
    ("Whitesmoke", Color::new(245, 245, 245)),
    ("Yellow", Color::new(255, 255, 0)),
    ("Yellowgreen", Color::new(154, 205, 50)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert_eq!(closest_color_name(Color::new(255, 0, 0)), "Red");
        assert_eq!(closest_color_name(Color::new(70, 130, 180)), "Steelblue");
        assert_eq!(closest_color_name(Color::new(245, 245, 220)), "Beige");
    }

    #[test]
    fn test_duplicate_entries_resolve_to_first() {
        assert_eq!(closest_color_name(Color::new(0, 255, 255)), "Aqua");
        assert_eq!(closest_color_name(Color::new(128, 128, 128)), "Gray");
    }

    #[test]
    fn test_nearest_for_unlisted_shade() {
        assert_eq!(closest_color_name(Color::new(250, 2, 3)), "Red");
        assert_eq!(closest_color_name(Color::new(1, 1, 1)), "Black");
        assert_eq!(exact_color_name(Color::new(250, 2, 3)), None);
    }

    #[test]
    fn test_color_by_name() {
        assert_eq!(color_by_name("navy"), Some(Color::new(0, 0, 128)));
        assert_eq!(color_by_name(" SaddleBrown "), Some(Color::new(139, 69, 19)));
        assert_eq!(color_by_name("not-a-color"), None);
    }

    #[test]
    fn test_table_is_sorted_and_unique() {
        for pair in NAMED_COLORS.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} before {}", pair[0].0, pair[1].0);
        }
    }
}
