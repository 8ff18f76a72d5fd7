// Integration tests for the C ABI

use reslp::ffi::*;
use reslp::filters::ResonantLowpassFilter;

#[test]
fn test_ffi_matches_rust_api() {
    let input: Vec<f32> = (0..300).map(|i| ((i * 7) % 13) as f32 / 13.0 - 0.5).collect();

    let mut reference = ResonantLowpassFilter::new(44100.0);
    reference.set_params(2000.0, 3.0);
    let mut expected = vec![0.0; input.len()];
    reference.process_block(&input, &mut expected);

    let mut output = vec![0.0; input.len()];
    unsafe {
        let filter = reslp_filter_new(44100.0);
        reslp_filter_set_params(filter, 2000.0, 3.0);
        // Two calls to check history carries over
        reslp_filter_process(filter, input.as_ptr(), output.as_mut_ptr(), 100);
        reslp_filter_process(filter, input[100..].as_ptr(), output[100..].as_mut_ptr(), 200);
        reslp_filter_free(filter);
    }

    assert_eq!(output, expected);
}

#[test]
fn test_ffi_init_clears_history() {
    unsafe {
        let filter = reslp_filter_new(48000.0);
        reslp_filter_set_params(filter, 500.0, 0.0);
        let first = reslp_filter_process_sample(filter, 1.0);
        for _ in 0..10 {
            reslp_filter_process_sample(filter, 1.0);
        }

        reslp_filter_init(filter, 48000.0);
        reslp_filter_set_params(filter, 500.0, 0.0);
        assert_eq!(reslp_filter_process_sample(filter, 1.0), first);
        reslp_filter_free(filter);
    }
}

#[test]
fn test_ffi_null_buffers_are_ignored() {
    unsafe {
        let filter = reslp_filter_new(44100.0);
        reslp_filter_set_params(filter, 1000.0, 0.0);
        reslp_filter_process(filter, std::ptr::null(), std::ptr::null_mut(), 64);
        reslp_filter_process(std::ptr::null_mut(), std::ptr::null(), std::ptr::null_mut(), 64);
        assert_eq!(reslp_filter_process_sample(filter, 0.0), 0.0);
        reslp_filter_free(filter);
    }
}
