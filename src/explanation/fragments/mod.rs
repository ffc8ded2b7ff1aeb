//! Per-metric detail rendering.
//!
//! Every scored line starts with its signed points and the marker word of the
//! language, e.g. `+8 팀워크: ...` or `-3 Caution: ...`. Lines worth zero carry
//! neither. Pairs are written `a/b`; a bare `-` only ever means a penalty.

pub mod m1_fragment;
pub mod m2_fragment;
pub mod m3_fragment;

pub use m1_fragment::generate_m1_fragment;
pub use m2_fragment::generate_m2_fragment;
pub use m3_fragment::generate_m3_fragment;

use crate::explanation::types::{Detail, RelationTag, Tone};
use crate::utils::Language;

/// Build a detail line with the sign and marker prefix for `points`.
pub(crate) fn marked_detail(
    points: i32,
    body: String,
    tag: Option<RelationTag>,
    language: Language,
) -> Detail {
    let markers = language.markers();
    let tone = Tone::from_points(points);
    let text = match tone {
        Tone::Positive => format!("+{} {}: {}", points, markers.positive, body),
        Tone::Negative => format!("-{} {}: {}", points.unsigned_abs(), markers.negative, body),
        Tone::Neutral => body,
    };
    Detail { text, tone, points, tag }
}
