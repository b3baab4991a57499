pub(crate) use super::*;

#[test]
fn test_from_vec() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.shape(), (2, 3));
    assert!((m.get(0, 0) - 1.0).abs() < 1e-6);
    assert!((m.get(1, 2) - 6.0).abs() < 1e-6);
}

#[test]
fn test_from_vec_error() {
    let result = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0]);
    assert!(result.is_err());
}

#[test]
fn test_dims() {
    let m = Matrix::from_vec(4, 2, vec![0.0_f32; 8]).expect("4*2=8 elements");
    assert_eq!(m.n_rows(), 4);
    assert_eq!(m.n_cols(), 2);
}

#[test]
fn test_row_major_layout() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert!((m.get(1, 0) - 4.0).abs() < 1e-6);
    assert_eq!(m.as_slice().len(), 6);
}

#[test]
fn test_row() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let row = m.row(1);
    assert_eq!(row.len(), 3);
    assert!((row[0] - 4.0).abs() < 1e-6);
    assert!((row[2] - 6.0).abs() < 1e-6);
}

#[test]
fn test_empty_matrix_zero_by_zero() {
    let m = Matrix::from_vec(0, 0, Vec::<f32>::new()).expect("0*0=0 elements");
    assert_eq!(m.shape(), (0, 0));
    assert!(m.as_slice().is_empty());
}
