//! Reference-vs-subject classification of the two candidate regions.

use footsize_core::BoundingBox;
use serde::{Deserialize, Serialize};

// Width over height of an A4 sheet photographed upright.
const A4_PORTRAIT_ASPECT: f64 = 21.0 / 29.7;

/// A ranked contour reduced to its discriminating measurements.
#[derive(Clone, Copy, Debug)]
pub struct RegionCandidate {
    /// Enclosed area of the contour, in square pixels.
    pub area: f64,
    /// Axis-aligned bounding box of the contour.
    pub bbox: BoundingBox,
}

/// Rule assigning the reference and subject roles to the two candidates.
///
/// A single discriminating measurement decides; stronger shape priors can
/// be substituted without touching the rest of the pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassifierRule {
    /// The candidate with the strictly wider bounding box is the reference
    /// sheet. Equal widths favor the first candidate, i.e. the one with the
    /// larger enclosed area; the tie-break is part of the contract rather
    /// than a sort-stability accident.
    #[default]
    BoxWidth,
    /// The candidate whose box aspect ratio (width over height) is nearer
    /// the upright A4 ratio 21:29.7 is the reference sheet. Ties favor the
    /// first candidate.
    AspectRatio,
    /// The candidate with the larger enclosed area is the reference sheet.
    /// Ties favor the first candidate.
    Area,
}

/// Classified pair of regions.
#[derive(Clone, Copy, Debug)]
pub struct ClassifiedRegions {
    pub reference: RegionCandidate,
    pub subject: RegionCandidate,
}

/// Assign roles to the two largest candidates. `first` is the larger-area
/// candidate; the rules are symmetric apart from the documented tie-breaks.
pub fn classify(
    first: RegionCandidate,
    second: RegionCandidate,
    rule: ClassifierRule,
) -> ClassifiedRegions {
    let second_wins = match rule {
        ClassifierRule::BoxWidth => second.bbox.width > first.bbox.width,
        ClassifierRule::AspectRatio => {
            let d1 = (first.bbox.aspect_ratio() - A4_PORTRAIT_ASPECT).abs();
            let d2 = (second.bbox.aspect_ratio() - A4_PORTRAIT_ASPECT).abs();
            d2 < d1
        }
        ClassifierRule::Area => second.area > first.area,
    };
    if second_wins {
        ClassifiedRegions {
            reference: second,
            subject: first,
        }
    } else {
        ClassifiedRegions {
            reference: first,
            subject: second,
        }
    }
}
