//! Page geometry: trim size and per-page margins.

use folio_style::{PageSize, ResolvedTemplate};
use folio_types::{Margins, Size};

/// Dimensions in points for a template page size key; unknown keys fall back
/// to letter.
pub fn page_dimensions(page_size_key: &str) -> Size {
    PageSize::from_key(page_size_key)
        .unwrap_or_else(|| {
            log::warn!("Unknown page size '{}'; using letter", page_size_key);
            PageSize::Letter
        })
        .dimensions_pt()
}

/// Margins for the 1-based `page_number`.
///
/// With mirrored margins odd (right-hand) pages have the inside margin on the
/// left and even pages have it on the right.
pub fn margins_for_page(template: &ResolvedTemplate, page_number: usize) -> Margins {
    let m = &template.margins;
    let (left, right) = if !template.mirror_margins {
        (m.left, m.right)
    } else if page_number % 2 == 1 {
        (m.inside, m.outside)
    } else {
        (m.outside, m.inside)
    };
    Margins {
        top: m.top,
        right,
        bottom: m.bottom,
        left,
    }
}

pub fn is_left_hand(page_number: usize) -> bool {
    page_number % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_style::Template;

    fn template(json: &str) -> ResolvedTemplate {
        Template::from_json(json).unwrap().resolve()
    }

    #[test]
    fn mirrored_margins_alternate() {
        let t = template(r#"{ "mirrorMargins": true, "pageMargins": { "inside": 1.25, "outside": 1 } }"#);
        assert_eq!(margins_for_page(&t, 1).left, 1.25 * 72.0);
        assert_eq!(margins_for_page(&t, 1).right, 72.0);
        assert_eq!(margins_for_page(&t, 2).left, 72.0);
        assert_eq!(margins_for_page(&t, 2).right, 90.0);
        assert_eq!(margins_for_page(&t, 3), margins_for_page(&t, 1));
    }

    #[test]
    fn uniform_margins_ignore_parity() {
        let t = template(r#"{ "pageMargins": { "left": 0.5, "right": 0.75, "top": 1, "bottom": 1 } }"#);
        assert_eq!(margins_for_page(&t, 1), margins_for_page(&t, 2));
        assert_eq!(margins_for_page(&t, 2).left, 36.0);
        assert_eq!(margins_for_page(&t, 2).right, 54.0);
    }

    #[test]
    fn uniform_margins_fall_back_to_inside_outside() {
        let t = template(r#"{ "pageMargins": { "inside": 2, "outside": 0.5 } }"#);
        let m = margins_for_page(&t, 4);
        assert_eq!((m.left, m.right), (144.0, 36.0));
    }

    #[test]
    fn content_width_is_parity_independent() {
        let t = template(r#"{ "mirrorMargins": true, "pageSize": "trade" }"#);
        let width = t.page_dimensions().width;
        assert_eq!(
            margins_for_page(&t, 1).content_width(width),
            margins_for_page(&t, 2).content_width(width)
        );
    }

    #[test]
    fn page_dimensions_by_key() {
        assert_eq!(page_dimensions("digest"), Size::new(396.0, 612.0));
        assert_eq!(page_dimensions("nonsense"), Size::new(612.0, 792.0));
    }
}
