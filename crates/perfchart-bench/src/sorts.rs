//! The benchmarked sorting algorithms.

use perfchart_common::Algorithm;

/// Signature shared by every benchmarked sort.
pub type SortFn = fn(&mut [i32]);

/// The implementation measured for `algorithm`.
pub fn sort_fn(algorithm: Algorithm) -> SortFn {
    match algorithm {
        Algorithm::InsertionSort => insertion_sort,
        Algorithm::MergeSort => merge_sort,
        Algorithm::QuickSort => quick_sort,
    }
}

/// Straight insertion sort.
pub fn insertion_sort(data: &mut [i32]) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 && data[j - 1] > key {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = key;
    }
}

/// Top-down merge sort sharing one scratch buffer across the recursion.
pub fn merge_sort(data: &mut [i32]) {
    if data.len() < 2 {
        return;
    }
    let mut scratch = data.to_vec();
    merge_sort_into(data, &mut scratch);
}

fn merge_sort_into(data: &mut [i32], scratch: &mut [i32]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    // Left half gets the middle element, as in (lo + hi) / 2 splitting.
    let mid = (len - 1) / 2 + 1;
    {
        let (left, right) = data.split_at_mut(mid);
        let (left_scratch, right_scratch) = scratch.split_at_mut(mid);
        merge_sort_into(left, left_scratch);
        merge_sort_into(right, right_scratch);
    }
    merge(data, mid, scratch);
}

fn merge(data: &mut [i32], mid: usize, scratch: &mut [i32]) {
    let (mut i, mut j, mut k) = (0, mid, 0);

    while i < mid && j < data.len() {
        if data[i] <= data[j] {
            scratch[k] = data[i];
            i += 1;
        } else {
            scratch[k] = data[j];
            j += 1;
        }
        k += 1;
    }

    let left_rest = mid - i;
    scratch[k..k + left_rest].copy_from_slice(&data[i..mid]);
    k += left_rest;
    scratch[k..].copy_from_slice(&data[j..]);

    data.copy_from_slice(scratch);
}

/// Quick sort with a last-element pivot (Lomuto partition).
///
/// Sorted input is its worst case. Only the smaller side is recursed into,
/// so stack depth stays logarithmic even then.
pub fn quick_sort(data: &mut [i32]) {
    let mut rest = data;

    while rest.len() > 1 {
        let pivot = partition(rest);
        let (left, right) = std::mem::take(&mut rest).split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort(left);
            rest = right;
        } else {
            quick_sort(right);
            rest = left;
        }
    }
}

fn partition(data: &mut [i32]) -> usize {
    let last = data.len() - 1;
    let pivot = data[last];
    let mut store = 0;

    for j in 0..last {
        if data[j] < pivot {
            data.swap(store, j);
            store += 1;
        }
    }
    data.swap(store, last);
    store
}
