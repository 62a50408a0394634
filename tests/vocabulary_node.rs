//! Walks descriptors through the path a vocabulary node takes: extracted as a `u8`
//! matrix, averaged into a centroid, compared, and saved as text.

use nalgebra::DMatrix;
use r2d2_descriptors::{
    cast_matrix, distance, from_string, mean_value, pack_sequence, to_string, unpack_rows,
    Descriptor, DescriptorError, L,
};

fn unit(indices: &[usize]) -> Descriptor {
    let mut values = [0.0; L];
    for &i in indices {
        values[i] = 1.0;
    }
    Descriptor::from(values)
}

#[test]
fn three_descriptor_scenario() {
    let a = unit(&[0]);
    let b = unit(&[1]);
    let c = unit(&[0, 1]);

    let mean = mean_value(&[&a, &b, &c]).unwrap();
    assert!((mean[0] - 2.0 / 3.0).abs() < 1e-6);
    assert!((mean[1] - 2.0 / 3.0).abs() < 1e-6);
    assert!(mean.iter().skip(2).all(|&v| v == 0.0));

    assert_eq!(distance(&a, &b), 2.0);
    assert_eq!(distance(&a, &c), 1.0);
    assert_eq!(distance(&b, &c), 1.0);
}

#[test]
fn extracted_matrix_to_persisted_centroid() {
    let extracted = DMatrix::<u8>::from_fn(4, L, |i, j| ((i * 31 + j * 7) % 256) as u8);
    let matrix = cast_matrix(&extracted).unwrap();
    let descriptors = unpack_rows(&matrix);
    assert_eq!(descriptors.len(), 4);
    assert_eq!(pack_sequence(&descriptors), matrix);

    let refs: Vec<&Descriptor> = descriptors.iter().collect();
    let centroid = mean_value(&refs).unwrap();
    for j in 0..L {
        let expected: f32 = (0..4).map(|i| f32::from(extracted[(i, j)])).sum::<f32>() / 4.0;
        assert!((centroid[j] - expected).abs() < 1e-4);
    }

    let saved = to_string(&centroid);
    let loaded = from_string(&saved).unwrap();
    assert_eq!(loaded, centroid);
    assert_eq!(distance(&loaded, &centroid), 0.0);
}

#[test]
fn truncated_node_is_rejected() {
    let saved = to_string(&unit(&[3]));
    let truncated: Vec<&str> = saved.split(' ').take(L - 1).collect();

    assert!(matches!(
        from_string(&truncated.join(" ")),
        Err(DescriptorError::MissingTokens { found, .. }) if found == L - 1
    ));
}
