use crate::models::{Creator, MatchResult};

pub const DIVERSIFICATION_REASON: &str = "Promoted for diversification";

/// Slot a diverse creator is promoted into (third place)
const PROMOTION_SLOT: usize = 2;

/// Break up a top three that shares one primary vertical
///
/// When the first three creators have the same primary vertical, the first
/// creator further down with a different one is tagged and swapped with the
/// third. Only one swap is made. Returns the original index of the promoted
/// creator.
pub fn diversify(ranked: &mut [MatchResult<Creator>]) -> Option<usize> {
    if ranked.len() <= PROMOTION_SLOT {
        return None;
    }

    let lead = ranked[0].candidate.primary_vertical();
    let monotone = ranked[1..=PROMOTION_SLOT]
        .iter()
        .all(|result| result.candidate.primary_vertical() == lead);
    if !monotone {
        return None;
    }

    let offset = ranked[PROMOTION_SLOT + 1..]
        .iter()
        .position(|result| result.candidate.primary_vertical() != lead)?;
    let index = PROMOTION_SLOT + 1 + offset;

    ranked[index].reasons.push(DIVERSIFICATION_REASON.to_string());
    ranked.swap(PROMOTION_SLOT, index);

    Some(index)
}
