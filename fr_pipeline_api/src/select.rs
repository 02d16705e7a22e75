use crate::{MutualCount, UserId};
use derive_new::new;

/// Maximum number of candidates kept per user.
pub const RANKED_LIMIT: usize = 10;

/// Default candidate-set size above which ranking switches from a full sort
/// to bounded linear scans.
pub const DEFAULT_SCAN_THRESHOLD: usize = 1024;

/// Tuning knob for [`select_top_candidates`]: candidate sets of at most
/// `scan_threshold` entries are fully sorted, larger sets take the
/// partial-selection path.
#[derive(Clone, Copy, Debug, Eq, PartialEq, new)]
pub struct SelectorConfig {
    pub scan_threshold: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self { scan_threshold: DEFAULT_SCAN_THRESHOLD }
    }
}

/// Reduces one user's unordered candidate set to the ids of its (at most)
/// [`RANKED_LIMIT`] highest-count entries, in descending count order.
///
/// Small sets are sorted outright. Sets larger than the configured threshold
/// are first reduced by repeated linear scans, each scan picking the
/// highest-count element not yet selected, so the total work stays bounded
/// by `RANKED_LIMIT * n` instead of `n log n` where it matters. With
/// strictly distinct counts both paths return the identical list; ties are
/// kept in whatever order the path at hand yields.
///
/// # Examples
/// ```
/// use fr_pipeline_api::{select_top_candidates, SelectorConfig};
///
/// let candidates = vec![(7, 3), (9, 1), (4, 5)];
/// let ranked = select_top_candidates(candidates, &SelectorConfig::default());
/// assert_eq!(ranked, vec![4, 7, 9]);
/// ```
pub fn select_top_candidates(
    mut candidates: Vec<(UserId, MutualCount)>,
    config: &SelectorConfig,
) -> Vec<UserId> {
    if candidates.len() > config.scan_threshold {
        candidates = scan_select(&candidates);
    }
    candidates.sort_unstable_by(|left, right| right.1.cmp(&left.1));
    candidates.truncate(RANKED_LIMIT);
    candidates.into_iter().map(|(candidate, _)| candidate).collect()
}

/// One pass per kept entry: scan for the highest count among positions not
/// selected by an earlier pass, then hand the selected entries back for the
/// final small sort. Membership checks stay cheap because at most
/// [`RANKED_LIMIT`] positions are ever recorded.
fn scan_select(candidates: &[(UserId, MutualCount)]) -> Vec<(UserId, MutualCount)> {
    let mut selected = Vec::with_capacity(RANKED_LIMIT);
    for _ in 0..RANKED_LIMIT {
        let mut best = None;
        for (index, &(_, count)) in candidates.iter().enumerate() {
            if selected.contains(&index) {
                continue;
            }
            if best.map_or(true, |best_index: usize| count > candidates[best_index].1) {
                best = Some(index);
            }
        }
        match best {
            Some(index) => selected.push(index),
            None => break,
        }
    }
    selected.into_iter().map(|index| candidates[index]).collect()
}
