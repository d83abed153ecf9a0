use super::*;

#[test]
fn all_lists_each_kind_once_in_catalog_order() {
    assert_eq!(
        ShapeKind::ALL,
        [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Triangle, ShapeKind::Star]
    );
}

#[test]
fn catalog_glyphs_and_colors() {
    assert_eq!(ShapeKind::Circle.glyph(), "🔴");
    assert_eq!(ShapeKind::Square.glyph(), "🟦");
    assert_eq!(ShapeKind::Triangle.glyph(), "🔺");
    assert_eq!(ShapeKind::Star.glyph(), "⭐");

    assert_eq!(ShapeKind::Circle.color(), "#FF6B6B");
    assert_eq!(ShapeKind::Square.color(), "#4ECDC4");
    assert_eq!(ShapeKind::Triangle.color(), "#FFEAA7");
    assert_eq!(ShapeKind::Star.color(), "#DDA0DD");
}

#[test]
fn tags_parse_back_to_their_kind() {
    for kind in ShapeKind::ALL {
        assert_eq!(kind.tag().parse::<ShapeKind>(), Ok(kind));
        assert_eq!(kind.to_string(), kind.tag());
    }
}

#[test]
fn unknown_tag_is_rejected() {
    let err = "hexagon".parse::<ShapeKind>().unwrap_err();
    assert_eq!(err, ShapeError::UnknownTag("hexagon".to_owned()));
    assert_eq!(err.to_string(), "unknown shape tag: \"hexagon\"");
}

#[test]
fn tags_are_case_sensitive() {
    assert!("Circle".parse::<ShapeKind>().is_err());
    assert!("".parse::<ShapeKind>().is_err());
}

#[test]
fn only_matching_kinds_fit() {
    for piece in ShapeKind::ALL {
        for hole in ShapeKind::ALL {
            assert_eq!(piece.fits(hole), piece == hole);
        }
    }
}
