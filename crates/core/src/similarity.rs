//! Ratcliff/Obershelp string similarity.
//!
//! `ratio` is `2 * M / T`, where `T` is the combined length of both inputs
//! and `M` is the number of characters covered by matching blocks. Blocks are
//! found by taking the longest common substring, then recursing on the pieces
//! to its left and right. Lengths are counted in `char`s, not bytes.

/// Similarity of `a` and `b` on a 0..=1 scale. Two empty strings score 1.0.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a = a.chars().collect::<Vec<_>>();
    let b = b.chars().collect::<Vec<_>>();
    char_ratio(&a, &b)
}

/// Closest candidate to `token` scoring at least `cutoff`.
///
/// Each candidate is compared as `ratio(candidate, token)`. Equal scores
/// resolve to the lexicographically greatest candidate, so the result does
/// not depend on candidate order.
pub fn best_match<'a, I>(token: &str, candidates: I, cutoff: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    if token.is_empty() {
        return None;
    }

    let token = token.chars().collect::<Vec<_>>();
    let mut best: Option<(f64, &'a str)> = None;
    for candidate in candidates {
        let chars = candidate.chars().collect::<Vec<_>>();
        if length_bound(chars.len(), token.len()) < cutoff {
            continue;
        }

        let score = char_ratio(&chars, &token);
        if score < cutoff {
            continue;
        }

        let replace = match best {
            None => true,
            Some((best_score, best_candidate)) => {
                score > best_score || (score == best_score && candidate > best_candidate)
            }
        };
        if replace {
            best = Some((score, candidate));
        }
    }

    best.map(|(_, candidate)| candidate)
}

fn char_ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matching_chars(a, b) as f64 / total as f64
}

/// Upper bound on `ratio` from lengths alone: at most the shorter input matches.
fn length_bound(a_len: usize, b_len: usize) -> f64 {
    let total = a_len + b_len;
    if total == 0 {
        return 1.0;
    }

    2.0 * a_len.min(b_len) as f64 / total as f64
}

fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((a_lo, a_hi, b_lo, b_hi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, (a_lo, a_hi), (b_lo, b_hi));
        if size == 0 {
            continue;
        }

        matched += size;
        if a_lo < i && b_lo < j {
            pending.push((a_lo, i, b_lo, j));
        }
        if i + size < a_hi && j + size < b_hi {
            pending.push((i + size, a_hi, j + size, b_hi));
        }
    }

    matched
}

/// Longest common run inside `a[a_lo..a_hi]` and `b[b_lo..b_hi]`, as
/// `(start_in_a, start_in_b, len)`. Ties keep the earliest start in `a`,
/// then the earliest start in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    (a_lo, a_hi): (usize, usize),
    (b_lo, b_hi): (usize, usize),
) -> (usize, usize, usize) {
    let width = b_hi - b_lo;
    let mut best = (a_lo, b_lo, 0);
    let mut previous = vec![0usize; width + 1];
    let mut current = vec![0usize; width + 1];

    for i in a_lo..a_hi {
        for j in b_lo..b_hi {
            let slot = j - b_lo + 1;
            if a[i] == b[j] {
                let run = previous[slot - 1] + 1;
                current[slot] = run;
                if run > best.2 {
                    best = (i + 1 - run, j + 1 - run, run);
                }
            } else {
                current[slot] = 0;
            }
        }
        std::mem::swap(&mut previous, &mut current);
    }

    best
}
