use launchdeck_core::color::{hex_to_hsl, hsl_to_hex, parse_hex, ColorParseError, Hsl};

#[test]
fn parses_with_and_without_hash() {
    assert_eq!(parse_hex("#3b82f6").expect("parse"), (0x3b, 0x82, 0xf6));
    assert_eq!(parse_hex("3b82f6").expect("parse"), (0x3b, 0x82, 0xf6));
}

#[test]
fn rejects_short_and_bad_input() {
    assert!(matches!(parse_hex("#fff"), Err(ColorParseError::Length(_))));
    assert!(matches!(parse_hex("#zzzzzz"), Err(ColorParseError::Digit(_))));
}

#[test]
fn rejects_non_ascii_without_panicking() {
    // "aéaaa" is 6 bytes but slicing it at byte 2 would split the 'é'.
    assert!(matches!(
        parse_hex("a\u{e9}aaa"),
        Err(ColorParseError::Length(_))
    ));
    assert!(matches!(
        parse_hex("#\u{e9}\u{e9}\u{e9}"),
        Err(ColorParseError::Length(_))
    ));
}

#[test]
fn grayscale_has_zero_saturation() {
    for hex in ["#000000", "#808080", "#ffffff", "#2a2a2a"] {
        let hsl = hex_to_hsl(hex).expect("convert");
        assert_eq!(hsl.s, 0.0, "saturation for {hex}");
    }
}

#[test]
fn default_accent_matches_known_hsl() {
    // #3b82f6 is hsl(217.2, 91.2%, 59.8%)
    let hsl = hex_to_hsl("#3b82f6").expect("convert");
    assert!((hsl.h - 217.2).abs() < 0.5, "hue was {}", hsl.h);
    assert!((hsl.s - 0.912).abs() < 0.01, "saturation was {}", hsl.s);
    assert!((hsl.l - 0.598).abs() < 0.01, "lightness was {}", hsl.l);
}

#[test]
fn round_trips_within_rounding_tolerance() {
    let samples = [
        "#3b82f6", "#ef4444", "#f97316", "#f59e0b", "#10b981", "#06b6d4", "#8b5cf6", "#d946ef",
        "#000000", "#ffffff", "#123456",
    ];
    for hex in samples {
        let back = hsl_to_hex(hex_to_hsl(hex).expect("convert"));
        let (r1, g1, b1) = parse_hex(hex).expect("parse");
        let (r2, g2, b2) = parse_hex(&back).expect("parse");
        let close = |a: u8, b: u8| (a as i16 - b as i16).abs() <= 2;
        assert!(
            close(r1, r2) && close(g1, g2) && close(b1, b2),
            "{hex} round-tripped to {back}"
        );
    }
}

#[test]
fn with_lightness_clamps() {
    let hsl = Hsl {
        h: 200.0,
        s: 0.5,
        l: 0.5,
    };
    assert_eq!(hsl.with_lightness(1.5).l, 1.0);
    assert_eq!(hsl.with_lightness(-0.2).l, 0.0);
}
