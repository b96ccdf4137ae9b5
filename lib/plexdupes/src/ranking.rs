//! Ordering of the files backing one duplicate item.
//!
//! Variants are sorted by video codec (descending), then width (ascending),
//! then file size (ascending). The sort is stable, so variants equal on all
//! three keys keep the order the server listed them in.

use shared::library::{MediaItem, Variant};
use std::cmp::Ordering;

/// Compares two numeric attributes carried as text.
///
/// Values that are not unsigned integers (including empty ones) sort before
/// every number and are compared lexically among themselves.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<u64>(), b.trim().parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Err(_), Ok(_)) => Ordering::Less,
        (Ok(_), Err(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

pub fn compare(a: &Variant, b: &Variant) -> Ordering {
    b.video_codec
        .cmp(&a.video_codec)
        .then_with(|| compare_numeric(&a.width, &b.width))
        .then_with(|| compare_numeric(&a.size, &b.size))
}

pub fn rank(mut variants: Vec<Variant>) -> Vec<Variant> {
    variants.sort_by(compare);
    variants
}

/// Ranks the variants of `item` in place and hands it back.
pub fn rank_item(mut item: MediaItem) -> MediaItem {
    item.variants.sort_by(compare);
    item
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn variant(id: &str, codec: &str, width: &str, size: &str) -> Variant {
        Variant {
            id: id.to_string(),
            size: size.to_string(),
            width: width.to_string(),
            height: String::new(),
            video_codec: codec.to_string(),
            video_resolution: String::new(),
            bitrate: String::new(),
            container: String::new(),
            file: format!("/media/{id}.mkv"),
        }
    }

    fn ids(variants: &[Variant]) -> Vec<&str> {
        variants.iter().map(|v| v.id.as_str()).collect()
    }

    #[test]
    fn greater_codec_sorts_first() {
        let ranked = rank(vec![
            variant("A", "h264", "1920", "5000000000"),
            variant("B", "hevc", "1920", "3000000000"),
        ]);
        assert_eq!(ids(&ranked), ["B", "A"]);
    }

    #[test]
    fn narrower_width_then_smaller_size() {
        let ranked = rank(vec![
            variant("wide", "h264", "3840", "100"),
            variant("big", "h264", "1920", "900"),
            variant("small", "h264", "1920", "800"),
        ]);
        assert_eq!(ids(&ranked), ["small", "big", "wide"]);
    }

    #[test]
    fn sizes_compare_as_numbers() {
        let ranked = rank(vec![
            variant("ten", "h264", "1920", "1000"),
            variant("nine", "h264", "1920", "900"),
        ]);
        assert_eq!(ids(&ranked), ["nine", "ten"]);

        let ranked = rank(vec![
            variant("wide", "h264", "1000", "1"),
            variant("narrow", "h264", "720", "1"),
        ]);
        assert_eq!(ids(&ranked), ["narrow", "wide"]);
    }

    #[test]
    fn missing_numbers_sort_before_numbers() {
        let ranked = rank(vec![
            variant("known", "h264", "1920", "10"),
            variant("unknown", "h264", "1920", ""),
        ]);
        assert_eq!(ids(&ranked), ["unknown", "known"]);
    }

    #[test]
    fn full_ties_keep_server_order() {
        let ranked = rank(vec![
            variant("first", "h264", "1920", "10"),
            variant("second", "h264", "1920", "10"),
        ]);
        assert_eq!(ids(&ranked), ["first", "second"]);
    }

    #[test]
    fn degenerate_lists() {
        assert!(rank(vec![]).is_empty());
        assert_eq!(ids(&rank(vec![variant("only", "", "", "")])), ["only"]);
    }

    #[test]
    fn every_input_order_ranks_the_same() {
        let variants = vec![
            variant("a", "vc1", "1920", "7"),
            variant("b", "mpeg4", "720", "2"),
            variant("c", "hevc", "3840", "9"),
            variant("d", "hevc", "1920", "8"),
            variant("e", "hevc", "1920", "3"),
        ];
        let expected = ["a", "b", "e", "d", "c"];

        for permutation in variants.iter().cloned().permutations(variants.len()) {
            let ranked = rank(permutation);
            assert_eq!(ids(&ranked), expected);
            assert!(ranked
                .iter()
                .tuple_windows()
                .all(|(x, y)| compare(x, y) != Ordering::Greater));
        }
    }

    #[test]
    fn ranking_is_idempotent() {
        let once = rank(vec![
            variant("a", "h264", "1920", "5"),
            variant("b", "hevc", "1280", "4"),
            variant("c", "hevc", "1280", "3"),
        ]);
        let twice = rank(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn rank_item_orders_variants() {
        let item = MediaItem {
            title: "Heat".to_string(),
            key: "/library/metadata/42".to_string(),
            rating_key: "42".to_string(),
            kind: shared::library::MediaKind::Movie,
            year: "1995".to_string(),
            show_title: String::new(),
            season: String::new(),
            episode: String::new(),
            variants: vec![
                variant("A", "h264", "1920", "5000000000"),
                variant("B", "hevc", "1920", "3000000000"),
            ],
        };
        assert_eq!(ids(&rank_item(item).variants), ["B", "A"]);
    }
}
