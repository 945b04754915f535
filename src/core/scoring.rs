use crate::models::MatchResult;
use std::collections::BTreeMap;

/// Maximum number of reasons attached to a match
pub const MAX_REASONS: usize = 3;

/// One named sub-score in 0..=100 with its human-readable justification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentScore {
    pub score: u8,
    pub reason: String,
}

impl ComponentScore {
    /// Round a raw score and clamp it into 0..=100
    pub fn new(raw: f64, reason: impl Into<String>) -> Self {
        Self {
            score: clamp_score(raw),
            reason: reason.into(),
        }
    }
}

/// Round to the nearest integer and clamp into 0..=100
///
/// Non-finite input scores 0.
#[inline]
pub fn clamp_score(raw: f64) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u8
}

/// Scores one candidate against the request for a single factor
pub type ScoreFn<R, C> = fn(&R, &C) -> ComponentScore;

/// A pluggable factor with its declared weight
pub struct Component<R, C> {
    pub name: &'static str,
    pub weight: f64,
    pub score: ScoreFn<R, C>,
}

impl<R, C> Clone for Component<R, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, C> Copy for Component<R, C> {}

impl<R, C> std::fmt::Debug for Component<R, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Component")
            .field("name", &self.name)
            .field("weight", &self.weight)
            .finish()
    }
}

/// Per-candidate outcome of a [`WeightedScorer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub match_score: u8,
    pub reasons: Vec<String>,
    pub breakdown: BTreeMap<String, u8>,
}

/// Weighted multi-factor scorer shared by both matching pipelines
///
/// `R` is the per-request context (the brief plus anything derived from the
/// eligible pool), `C` is the candidate type.
///
/// # Scoring rules
/// - `match_score = round(Σ weight · component)`, clamped to 0..=100
/// - reasons: components scoring above 0, highest first, at most
///   [`MAX_REASONS`]; ties keep declaration order
#[derive(Debug, Clone)]
pub struct WeightedScorer<R, C> {
    components: Vec<Component<R, C>>,
}

impl<R, C> WeightedScorer<R, C> {
    pub fn new(components: Vec<Component<R, C>>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[Component<R, C>] {
        &self.components
    }

    /// Score a single candidate
    pub fn evaluate(&self, request: &R, candidate: &C) -> Evaluation {
        let scored: Vec<(&'static str, f64, ComponentScore)> = self
            .components
            .iter()
            .map(|component| {
                (
                    component.name,
                    component.weight,
                    (component.score)(request, candidate),
                )
            })
            .collect();

        let total: f64 = scored
            .iter()
            .map(|(_, weight, component)| weight * component.score as f64)
            .sum();

        let breakdown = scored
            .iter()
            .map(|(name, _, component)| (name.to_string(), component.score))
            .collect();

        let reasons = top_reasons(scored.into_iter().map(|(_, _, component)| component));

        Evaluation {
            match_score: clamp_score(total),
            reasons,
            breakdown,
        }
    }

    /// Score every candidate and sort by `match_score` descending
    ///
    /// The sort is stable so equal scores keep their input order.
    pub fn rank<'c, I>(&self, request: &R, candidates: I) -> Vec<MatchResult<C>>
    where
        C: Clone + 'c,
        I: IntoIterator<Item = &'c C>,
    {
        let mut results: Vec<MatchResult<C>> = candidates
            .into_iter()
            .map(|candidate| {
                let evaluation = self.evaluate(request, candidate);
                MatchResult {
                    candidate: candidate.clone(),
                    match_score: evaluation.match_score,
                    reasons: evaluation.reasons,
                    breakdown: evaluation.breakdown,
                }
            })
            .collect();

        results.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        results
    }
}

/// Reasons of the non-zero components, highest score first, capped at [`MAX_REASONS`]
pub fn top_reasons<I>(components: I) -> Vec<String>
where
    I: IntoIterator<Item = ComponentScore>,
{
    let mut kept: Vec<ComponentScore> = components
        .into_iter()
        .filter(|component| component.score > 0)
        .collect();

    kept.sort_by(|a, b| b.score.cmp(&a.score));

    kept.into_iter()
        .take(MAX_REASONS)
        .map(|component| component.reason)
        .collect()
}

/// Group an amount with thousands separators, e.g. 550000 → "550,000"
pub fn group_thousands(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{}", rounded.abs() as u64);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Request {
        bonus: f64,
    }

    fn fixed_high(_: &Request, _: &u32) -> ComponentScore {
        ComponentScore::new(90.0, "high")
    }

    fn fixed_zero(_: &Request, _: &u32) -> ComponentScore {
        ComponentScore::new(0.0, "zero")
    }

    fn from_candidate(request: &Request, candidate: &u32) -> ComponentScore {
        ComponentScore::new(*candidate as f64 + request.bonus, "candidate")
    }

    fn scorer() -> WeightedScorer<Request, u32> {
        WeightedScorer::new(vec![
            Component { name: "high", weight: 0.5, score: fixed_high },
            Component { name: "zero", weight: 0.2, score: fixed_zero },
            Component { name: "candidate", weight: 0.3, score: from_candidate },
        ])
    }

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(49.5), 50);
        assert_eq!(clamp_score(-3.0), 0);
        assert_eq!(clamp_score(140.0), 100);
        assert_eq!(clamp_score(f64::NAN), 0);
        assert_eq!(clamp_score(f64::INFINITY), 0);
    }

    #[test]
    fn test_evaluate_weighted_total() {
        let request = Request { bonus: 0.0 };
        let evaluation = scorer().evaluate(&request, &50);

        // 0.5*90 + 0.2*0 + 0.3*50 = 60
        assert_eq!(evaluation.match_score, 60);
        assert_eq!(evaluation.breakdown["high"], 90);
        assert_eq!(evaluation.breakdown["zero"], 0);
        assert_eq!(evaluation.breakdown["candidate"], 50);
        assert_eq!(evaluation.reasons, vec!["high", "candidate"]);
    }

    #[test]
    fn test_component_scores_are_clamped() {
        let request = Request { bonus: 500.0 };
        let evaluation = scorer().evaluate(&request, &10);

        assert_eq!(evaluation.breakdown["candidate"], 100);
        assert!(evaluation.match_score <= 100);
        assert_eq!(evaluation.reasons[0], "candidate");
    }

    #[test]
    fn test_top_reasons_cap_and_order() {
        let reasons = top_reasons(vec![
            ComponentScore::new(40.0, "d"),
            ComponentScore::new(100.0, "a"),
            ComponentScore::new(0.0, "never"),
            ComponentScore::new(70.0, "b"),
            ComponentScore::new(70.0, "c"),
        ]);

        assert_eq!(reasons, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_rank_sorts_descending_and_is_stable() {
        let request = Request { bonus: 0.0 };
        let candidates = vec![10u32, 80, 10, 40];
        let ranked = scorer().rank(&request, &candidates);

        let order: Vec<u32> = ranked.iter().map(|m| m.candidate).collect();
        assert_eq!(order, vec![80, 40, 10, 10]);
        for pair in ranked.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(550000.0), "550,000");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(1234567.4), "1,234,567");
    }
}
