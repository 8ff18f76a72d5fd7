//! C FFI bindings for the resonant lowpass filter
//!
//! Exposes `ResonantLowpassFilter` to C/C++/Swift hosts through an opaque
//! pointer. Every function treats a null filter pointer as a no-op.

use crate::filters::ResonantLowpassFilter;
use std::slice;

// =============================================================================
// Lifecycle
// =============================================================================

/// Create a new filter
///
/// # Arguments
/// * `sample_rate_hz` - Audio sample rate (e.g., 44100.0 or 48000.0)
///
/// # Returns
/// Pointer to a new filter. Must be freed with `reslp_filter_free`.
#[no_mangle]
pub extern "C" fn reslp_filter_new(sample_rate_hz: f64) -> *mut ResonantLowpassFilter {
    Box::into_raw(Box::new(ResonantLowpassFilter::new(sample_rate_hz)))
}

/// Free a filter
///
/// # Safety
/// `filter` must be a valid pointer returned by `reslp_filter_new`, or null.
/// After calling this function, the pointer is invalid and must not be used.
#[no_mangle]
pub unsafe extern "C" fn reslp_filter_free(filter: *mut ResonantLowpassFilter) {
    if !filter.is_null() {
        drop(Box::from_raw(filter));
    }
}

/// Re-initialize the filter for a new sample rate, clearing its history
///
/// # Safety
/// `filter` must be a valid pointer returned by `reslp_filter_new`
#[no_mangle]
pub unsafe extern "C" fn reslp_filter_init(filter: *mut ResonantLowpassFilter, sample_rate_hz: f64) {
    if let Some(filter) = filter.as_mut() {
        filter.init(sample_rate_hz);
    }
}

// =============================================================================
// Parameters
// =============================================================================

/// Set cutoff (Hz) and resonance (dB)
///
/// Cheap to call once per render block: unchanged values skip the
/// coefficient update.
///
/// # Safety
/// `filter` must be a valid pointer returned by `reslp_filter_new`
#[no_mangle]
pub unsafe extern "C" fn reslp_filter_set_params(
    filter: *mut ResonantLowpassFilter,
    cutoff_hz: f64,
    resonance_db: f64,
) {
    if let Some(filter) = filter.as_mut() {
        filter.set_params(cutoff_hz, resonance_db);
    }
}

// =============================================================================
// Audio processing
// =============================================================================

/// Filter a single sample
///
/// Returns 0.0 if `filter` is null.
///
/// # Safety
/// `filter` must be a valid pointer returned by `reslp_filter_new`
#[no_mangle]
pub unsafe extern "C" fn reslp_filter_process_sample(
    filter: *mut ResonantLowpassFilter,
    sample: f32,
) -> f32 {
    match filter.as_mut() {
        Some(filter) => filter.process(sample),
        None => 0.0,
    }
}

/// Filter `frames` samples from `source` into `dest`
///
/// `source` and `dest` may point to the same buffer.
///
/// # Safety
/// - `filter` must be a valid pointer returned by `reslp_filter_new`
/// - `source` and `dest` must each point to at least `frames` floats
/// - if the buffers differ they must not overlap
#[no_mangle]
pub unsafe extern "C" fn reslp_filter_process(
    filter: *mut ResonantLowpassFilter,
    source: *const f32,
    dest: *mut f32,
    frames: u32,
) {
    if filter.is_null() || source.is_null() || dest.is_null() {
        return;
    }

    let filter = &mut *filter;
    if std::ptr::eq(source, dest) {
        let buffer = slice::from_raw_parts_mut(dest, frames as usize);
        filter.process_in_place(buffer);
    } else {
        let source = slice::from_raw_parts(source, frames as usize);
        let dest = slice::from_raw_parts_mut(dest, frames as usize);
        filter.process_block(source, dest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_pointers_are_ignored() {
        unsafe {
            reslp_filter_init(std::ptr::null_mut(), 48000.0);
            reslp_filter_set_params(std::ptr::null_mut(), 1000.0, 0.0);
            assert_eq!(reslp_filter_process_sample(std::ptr::null_mut(), 1.0), 0.0);
            reslp_filter_free(std::ptr::null_mut());
        }
    }

    #[test]
    fn test_process_in_place_through_ffi() {
        let input: Vec<f32> = (0..64).map(|i| (i as f32 * 0.2).sin()).collect();

        let mut reference = ResonantLowpassFilter::new(48000.0);
        reference.set_params(1500.0, 6.0);
        let mut expected = vec![0.0; input.len()];
        reference.process_block(&input, &mut expected);

        let mut buffer = input.clone();
        unsafe {
            let filter = reslp_filter_new(48000.0);
            reslp_filter_set_params(filter, 1500.0, 6.0);
            reslp_filter_process(filter, buffer.as_ptr(), buffer.as_mut_ptr(), buffer.len() as u32);
            reslp_filter_free(filter);
        }

        assert_eq!(buffer, expected);
    }
}
