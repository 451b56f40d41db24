//! Sequence-order descriptors computed from per-residue scale values.
//!
//! All functions take a sequence already encoded by a scale, one slice of `arity`
//! values per residue.

use crate::core::utils::wheel::vector_sum_magnitude;
use crate::engine::config::Modality;

pub fn autocorrelation_columns(scale: &str, window: usize, arity: usize) -> Vec<String> {
    correlation_columns(&format!("AC_{scale}"), window, arity)
}

pub fn cross_correlation_columns(
    first: &str,
    second: &str,
    window: usize,
    arity: usize,
) -> Vec<String> {
    correlation_columns(&format!("CC_{first}_{second}"), window, arity)
}

pub fn moment_columns(scale: &str, arity: usize) -> Vec<String> {
    if arity == 1 {
        vec![format!("moment_{scale}")]
    } else {
        (1..=arity).map(|dim| format!("moment_{scale}_{dim}")).collect()
    }
}

fn correlation_columns(prefix: &str, window: usize, arity: usize) -> Vec<String> {
    let mut columns = Vec::with_capacity(window * arity);
    for lag in 1..=window {
        if arity == 1 {
            columns.push(format!("{prefix}_{lag}"));
        } else {
            columns.extend((1..=arity).map(|dim| format!("{prefix}_{lag}_{dim}")));
        }
    }
    columns
}

/// Centred cross-correlation of two encodings for lags `1..=window`.
///
/// Each encoding is centred on its scale mean. The value for lag `d` and dimension `k`
/// is the average of `(a_i[k] - mean_a[k]) * (b_{i+d}[k] - mean_b[k])`. Values are laid
/// out lag-major, matching [`autocorrelation_columns`]. Every value is undefined when
/// the sequence is not longer than `window`.
pub fn cross_correlation(
    first: &[&[f64]],
    first_mean: &[f64],
    second: &[&[f64]],
    second_mean: &[f64],
    window: usize,
) -> Vec<Option<f64>> {
    let arity = first_mean.len();
    let length = first.len();
    if length <= window {
        return vec![None; window * arity];
    }

    let mut values = Vec::with_capacity(window * arity);
    for lag in 1..=window {
        let pairs = length - lag;
        for dim in 0..arity {
            let sum: f64 = (0..pairs)
                .map(|i| {
                    (first[i][dim] - first_mean[dim]) * (second[i + lag][dim] - second_mean[dim])
                })
                .sum();
            values.push(Some(sum / pairs as f64));
        }
    }
    values
}

pub fn autocorrelation(encoded: &[&[f64]], mean: &[f64], window: usize) -> Vec<Option<f64>> {
    cross_correlation(encoded, mean, encoded, mean, window)
}

/// Hydrophobic moment per scale dimension.
///
/// For each window the magnitude of the vector sum at `angle` degrees per residue is
/// divided by the window length; `modality` then reduces over windows. A `window` of
/// `None` treats the whole sequence as one window. Sequences shorter than the window,
/// and empty sequences, yield undefined values.
pub fn moment(
    encoded: &[&[f64]],
    arity: usize,
    angle: f64,
    window: Option<usize>,
    modality: Modality,
) -> Vec<Option<f64>> {
    let length = encoded.len();
    let window = window.unwrap_or(length);
    if length == 0 || window == 0 || length < window {
        return vec![None; arity];
    }

    (0..arity)
        .map(|dim| {
            let column: Vec<f64> = encoded.iter().map(|v| v[dim]).collect();
            let moments = column
                .windows(window)
                .map(|w| vector_sum_magnitude(w, angle) / window as f64);
            let value = match modality {
                Modality::Max => moments.fold(f64::NEG_INFINITY, f64::max),
                Modality::Mean => {
                    let count = length - window + 1;
                    moments.sum::<f64>() / count as f64
                }
            };
            Some(value)
        })
        .collect()
}

/// Mean scale value of every window of `window` residues, stride 1.
///
/// Returns `None` for sequences shorter than the window.
pub fn sliding_profile(values: &[f64], window: usize) -> Option<Vec<f64>> {
    if window == 0 || values.len() < window {
        return None;
    }
    Some(
        values
            .windows(window)
            .map(|w| w.iter().sum::<f64>() / window as f64)
            .collect(),
    )
}
