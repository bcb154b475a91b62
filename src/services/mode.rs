// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Most-frequent-label search for the "favorite" report fields.

/// Return the most frequent present label.
///
/// For each index `i` the matches in `labels[i..]` are counted; a label only
/// wins by strictly beating the best count so far, which starts at 1. So a
/// label has to occur at least twice, and on ties the label whose first
/// occurrence comes earliest is kept. Absent entries never match anything,
/// not even another absent entry.
///
/// Quadratic in the number of labels, which is bounded by the size of one
/// athlete's activity history.
pub fn find_mode<T: PartialEq + Clone>(labels: &[Option<T>]) -> Option<T> {
    let mut best_count = 1;
    let mut mode = None;

    for (i, label) in labels.iter().enumerate() {
        let Some(value) = label else {
            continue;
        };

        let count = labels[i..]
            .iter()
            .filter(|other| other.as_ref() == Some(value))
            .count();

        if best_count < count {
            best_count = count;
            mode = Some(value.clone());
        }
    }

    mode
}
