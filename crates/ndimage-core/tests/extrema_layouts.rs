mod common;

use common::{edge_case_shapes, padded_layout, random_f32, random_u16};
use ndimage_core::{min_max, Extrema, MaskWindows, Region, StridedImage};
use proptest::prelude::*;

fn reference_min_max<T: Copy + PartialOrd>(values: &[T]) -> Option<(T, T)> {
    let mut iter = values.iter().copied();
    let first = iter.next()?;
    Some(iter.fold((first, first), |(lo, hi), v| {
        (if v < lo { v } else { lo }, if v > hi { v } else { hi })
    }))
}

#[test]
fn test_edge_case_shapes_match_reference() {
    for (rows, cols) in edge_case_shapes() {
        let values = random_u16(rows * cols, 42);
        let image = StridedImage::from_slice(&values, rows, cols).unwrap();
        let got = min_max(&image, &Region::Full)
            .unwrap()
            .map(|e| (e.min, e.max));
        assert_eq!(got, reference_min_max(&values), "shape {rows}x{cols}");
    }
}

#[test]
fn test_padded_layout_matches_contiguous() {
    let (rows, cols) = (13, 9);
    let values = random_f32(rows * cols, 1000.0, 7);
    let (buffer, origin, strides) = padded_layout(&values, rows, cols, 3, 5);
    let strided = StridedImage::with_strides(&buffer, origin, (rows, cols), strides).unwrap();
    let contiguous = StridedImage::from_slice(&values, rows, cols).unwrap();
    assert_eq!(
        min_max(&strided, &Region::Full).unwrap(),
        min_max(&contiguous, &Region::Full).unwrap()
    );
}

#[test]
fn test_all_inclusive_windows_equal_unmasked() {
    let (rows, cols) = (6, 11);
    let values = random_u16(rows * cols, 3);
    let image = StridedImage::from_slice(&values, rows, cols).unwrap();
    let starts = vec![0; rows];
    let ends = vec![cols; rows];
    let region = Region::Windows(MaskWindows::new(&starts, &ends).unwrap());
    assert_eq!(
        min_max(&image, &region).unwrap(),
        min_max(&image, &Region::Full).unwrap()
    );
}

#[test]
fn test_all_ones_bitmap_equals_unmasked() {
    let (rows, cols) = (8, 8);
    let values = random_u16(rows * cols, 11);
    let image = StridedImage::from_slice(&values, rows, cols).unwrap();
    let bits = [1u8; 4];
    let bitmap = StridedImage::from_slice(&bits, 2, 2).unwrap();
    assert_eq!(
        min_max(&image, &Region::Bitmap(bitmap)).unwrap(),
        min_max(&image, &Region::Full).unwrap()
    );
}

proptest! {
    #[test]
    fn prop_extrema_bound_every_selected_value(
        values in prop::collection::vec(any::<u32>(), 1..200),
        cols in 1usize..20,
    ) {
        let rows = values.len() / cols;
        prop_assume!(rows > 0);
        let values = &values[..rows * cols];
        let image = StridedImage::from_slice(values, rows, cols).unwrap();
        let Extrema { min, max } = min_max(&image, &Region::Full).unwrap().unwrap();
        prop_assert!(values.iter().all(|&v| min <= v && v <= max));
        prop_assert!(values.contains(&min));
        prop_assert!(values.contains(&max));
    }

    #[test]
    fn prop_layout_independence(
        values in prop::collection::vec(-1e6f64..1e6, 1..120),
        cols in 1usize..12,
    ) {
        let rows = values.len() / cols;
        prop_assume!(rows > 0);
        let values = &values[..rows * cols];
        let image = StridedImage::from_slice(values, rows, cols).unwrap();
        let expected = min_max(&image, &Region::Full).unwrap();
        prop_assert_eq!(min_max(&image.transposed(), &Region::Full).unwrap(), expected);
        prop_assert_eq!(min_max(&image.flipped_rows(), &Region::Full).unwrap(), expected);
        prop_assert_eq!(
            min_max(&image.flipped_rows().transposed(), &Region::Full).unwrap(),
            expected
        );
    }

    #[test]
    fn prop_windows_match_filtered_reference(
        values in prop::collection::vec(any::<u8>(), 12..60),
        seeds in prop::collection::vec((0usize..6, 0usize..6), 12),
    ) {
        let cols = 6;
        let rows = (values.len() / cols).min(seeds.len());
        let values = &values[..rows * cols];
        let (starts, ends): (Vec<usize>, Vec<usize>) = seeds[..rows]
            .iter()
            .map(|&(a, b)| (a.min(b), a.max(b)))
            .unzip();
        let image = StridedImage::from_slice(values, rows, cols).unwrap();
        let region = Region::Windows(MaskWindows::new(&starts, &ends).unwrap());

        let selected: Vec<u8> = (0..rows)
            .flat_map(|r| (starts[r]..ends[r]).map(move |c| values[r * cols + c]))
            .collect();
        let got = min_max(&image, &region).unwrap().map(|e| (e.min, e.max));
        prop_assert_eq!(got, reference_min_max(&selected));
    }
}
