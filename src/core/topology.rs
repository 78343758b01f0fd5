//! Verkettung der Segmente: welches Segment hängt an Vorgänger bzw. Nachfolger?
//!
//! Die Flags werden bei jedem Zugriff aus der Geometrie neu berechnet und nie
//! gespeichert, damit sie nach einer Bearbeitung nicht veralten können.

use super::curve::BezierCurve;
use super::error::CurveError;
use super::point::{is_same_point, LinkTolerance};

/// Verkettungszustand eines Segments.
///
/// Die vier Kategorien `is_head`, `is_linked_to_prev`, `is_tail` und `is_isolated`
/// werden aus den beiden Booleans abgeleitet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SegmentLinks {
    /// P0 fällt mit P3 des Vorgängers zusammen
    pub linked_to_prev: bool,
    /// P3 fällt mit P0 des Nachfolgers zusammen
    pub linked_to_next: bool,
}

impl SegmentLinks {
    /// Kettenanfang: kein Vorgänger-Link, aber Nachfolger-Link.
    pub fn is_head(&self) -> bool {
        !self.linked_to_prev && self.linked_to_next
    }

    /// Hängt am Vorgänger (Mitte oder Ende einer Kette).
    pub fn is_linked_to_prev(&self) -> bool {
        self.linked_to_prev
    }

    /// Kettenende: Vorgänger-Link, kein Nachfolger-Link.
    pub fn is_tail(&self) -> bool {
        self.linked_to_prev && !self.linked_to_next
    }

    /// Weder mit Vorgänger noch mit Nachfolger verbunden.
    pub fn is_isolated(&self) -> bool {
        !self.linked_to_prev && !self.linked_to_next
    }
}

/// Berechnet die Verkettung von Segment `index`.
pub fn classify_segment(
    curve: &BezierCurve,
    index: usize,
    tolerance: LinkTolerance,
) -> Result<SegmentLinks, CurveError> {
    let current = curve.segment(index)?;
    let segments = curve.segments();

    let linked_to_prev = index
        .checked_sub(1)
        .and_then(|prev| segments.get(prev))
        .is_some_and(|prev| is_same_point(current.start(), prev.end(), tolerance));
    let linked_to_next = segments
        .get(index + 1)
        .is_some_and(|next| is_same_point(current.end(), next.start(), tolerance));

    Ok(SegmentLinks {
        linked_to_prev,
        linked_to_next,
    })
}

/// Verkettung aller Segmente in Reihenfolge.
pub fn segment_links_all(curve: &BezierCurve, tolerance: LinkTolerance) -> Vec<SegmentLinks> {
    let segments = curve.segments();
    segments
        .iter()
        .enumerate()
        .map(|(i, seg)| SegmentLinks {
            linked_to_prev: i > 0 && is_same_point(seg.start(), segments[i - 1].end(), tolerance),
            linked_to_next: segments
                .get(i + 1)
                .is_some_and(|next| is_same_point(seg.end(), next.start(), tolerance)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BezierSegment;
    use glam::DVec2;

    fn seg(x0: f64, x3: f64) -> BezierSegment {
        BezierSegment::new(
            DVec2::new(x0, 0.0),
            DVec2::new(x0, 1.0),
            DVec2::new(x3, 1.0),
            DVec2::new(x3, 0.0),
        )
    }

    #[test]
    fn test_single_segment_is_isolated() {
        let curve = BezierCurve::single(seg(0.0, 1.0)).expect("gültiges Segment");
        let links = classify_segment(&curve, 0, LinkTolerance::default()).expect("Index gültig");
        assert!(links.is_isolated());
        assert!(!links.is_head());
        assert!(!links.is_tail());
        assert!(!links.is_linked_to_prev());
    }

    #[test]
    fn test_chain_head_middle_tail() {
        let curve =
            BezierCurve::new(vec![seg(0.0, 1.0), seg(1.0, 2.0), seg(2.0, 3.0)]).expect("gültig");
        let links = segment_links_all(&curve, LinkTolerance::default());
        assert!(links[0].is_head());
        assert!(links[1].is_linked_to_prev() && links[1].linked_to_next);
        assert!(!links[1].is_head() && !links[1].is_tail());
        assert!(links[2].is_tail());
    }

    #[test]
    fn test_gap_breaks_chain() {
        let curve = BezierCurve::new(vec![seg(0.0, 1.0), seg(1.5, 2.0)]).expect("gültig");
        let links = segment_links_all(&curve, LinkTolerance::default());
        assert!(links.iter().all(SegmentLinks::is_isolated));
    }

    #[test]
    fn test_tolerance_controls_linkage() {
        let curve = BezierCurve::new(vec![seg(0.0, 1.0), seg(1.004, 2.0)]).expect("gültig");
        let loose = classify_segment(&curve, 1, LinkTolerance::per_axis(0.01)).expect("gültig");
        let strict = classify_segment(&curve, 1, LinkTolerance::per_axis(0.001)).expect("gültig");
        assert!(loose.is_tail());
        assert!(strict.is_isolated());
    }

    #[test]
    fn test_classify_matches_all() {
        let curve =
            BezierCurve::new(vec![seg(0.0, 1.0), seg(1.0, 2.0), seg(5.0, 6.0)]).expect("gültig");
        let all = segment_links_all(&curve, LinkTolerance::default());
        for (i, expected) in all.iter().enumerate() {
            let single = classify_segment(&curve, i, LinkTolerance::default()).expect("gültig");
            assert_eq!(&single, expected);
        }
    }

    #[test]
    fn test_classify_out_of_range() {
        let curve = BezierCurve::single(seg(0.0, 1.0)).expect("gültiges Segment");
        assert_eq!(
            classify_segment(&curve, 3, LinkTolerance::default()),
            Err(CurveError::SegmentIndexOutOfRange { index: 3, len: 1 })
        );
    }
}
