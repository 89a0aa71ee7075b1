//! Property tests over randomly built documents.

mod common;

use acadstream::entities::{Circle, Entity, Line, Point};
use acadstream::io::dxf::{DxfToken, DxfValue};
use acadstream::objects::Dictionary;
use acadstream::{BookColor, CadDocument, Color, DxfVersion, Handle, Transparency, Vector3};
use common::{emitted_handles, record, write_tokens};
use proptest::prelude::*;

fn version_strategy() -> impl Strategy<Value = DxfVersion> {
    prop::sample::select(vec![
        DxfVersion::AC1009,
        DxfVersion::AC1012,
        DxfVersion::AC1014,
        DxfVersion::AC1015,
        DxfVersion::AC1018,
        DxfVersion::AC1021,
        DxfVersion::AC1024,
        DxfVersion::AC1027,
        DxfVersion::AC1032,
    ])
}

/// Color setting of an entity: indexed, true color, or book color
#[derive(Debug, Clone)]
enum ColorChoice {
    Indexed(i16),
    True(u8, u8, u8),
    Book(u8, u8, u8),
}

fn color_strategy() -> impl Strategy<Value = ColorChoice> {
    prop_oneof![
        (0i16..=256).prop_map(ColorChoice::Indexed),
        any::<(u8, u8, u8)>().prop_map(|(r, g, b)| ColorChoice::True(r, g, b)),
        any::<(u8, u8, u8)>().prop_map(|(r, g, b)| ColorChoice::Book(r, g, b)),
    ]
}

fn transparency_strategy() -> impl Strategy<Value = Option<i16>> {
    prop::option::of(0i16..=90)
}

fn apply(entity: &mut dyn Entity, color: &ColorChoice, transparency: Option<i16>) {
    match *color {
        ColorChoice::Indexed(i) => entity.set_color(Color::from_index(i)),
        ColorChoice::True(r, g, b) => entity.set_color(Color::from_rgb(r, g, b)),
        ColorChoice::Book(r, g, b) => {
            entity.entity_mut().book_color = Some(BookColor::new("BOOK$ENTRY", r, g, b));
        }
    }
    if let Some(percent) = transparency {
        entity.set_transparency(Transparency::from_percent(percent));
    }
}

fn color_codes(tokens: &[DxfToken]) -> Vec<i32> {
    tokens
        .iter()
        .map(|t| t.code)
        .filter(|c| matches!(c, 62 | 420 | 430))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn handles_are_unique(
        version in version_strategy(),
        lines in 0usize..20,
        circles in 0usize..20,
        dictionaries in 0usize..10,
        with_xdictionary in any::<bool>(),
    ) {
        let mut doc = CadDocument::with_version(version);
        for i in 0..lines {
            let x = i as f64;
            doc.add_entity(Line::from_points(Vector3::new(x, 0.0, 0.0), Vector3::new(x, 1.0, 0.0)))
                .unwrap();
        }
        for i in 0..circles {
            let h = doc
                .add_entity(Circle::from_center_radius(Vector3::ZERO, 1.0 + i as f64))
                .unwrap();
            if with_xdictionary {
                doc.create_extension_dictionary(h).unwrap();
            }
        }
        for i in 0..dictionaries {
            doc.add_named_object(&format!("D{i}"), Dictionary::new(Handle::NULL)).unwrap();
        }

        let handles = emitted_handles(&write_tokens(&doc));
        let mut unique = handles.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), handles.len());
    }

    #[test]
    fn exactly_one_color_branch(color in color_strategy(), version in version_strategy()) {
        let mut doc = CadDocument::with_version(version);
        let h = doc.add_entity(Point::at(Vector3::ZERO)).unwrap();
        apply(doc.entity_mut(h).unwrap().as_entity_mut(), &color, None);

        let tokens = write_tokens(&doc);
        let codes = color_codes(record(&tokens, h));
        match color {
            ColorChoice::Indexed(_) => prop_assert_eq!(codes, vec![62]),
            ColorChoice::True(..) => prop_assert_eq!(codes, vec![420]),
            ColorChoice::Book(..) => prop_assert_eq!(codes, vec![62, 420, 430]),
        }
    }

    #[test]
    fn transparency_token_only_when_set(
        color in color_strategy(),
        transparency in transparency_strategy(),
    ) {
        let mut doc = CadDocument::new();
        let h = doc.add_entity(Line::new()).unwrap();
        apply(doc.entity_mut(h).unwrap().as_entity_mut(), &color, transparency);

        let tokens = write_tokens(&doc);
        let alpha: Vec<&DxfToken> = record(&tokens, h).iter().filter(|t| t.code == 440).collect();
        match transparency {
            None => prop_assert!(alpha.is_empty()),
            Some(percent) => {
                let expected = Transparency::from_percent(percent).to_alpha_value();
                prop_assert_eq!(alpha.len(), 1);
                prop_assert_eq!(&alpha[0].value, &DxfValue::Int32(expected));
            }
        }
    }
}
