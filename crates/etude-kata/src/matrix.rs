//! Matrix multiplication.

/// [Product](https://en.wikipedia.org/wiki/Matrix_multiplication) of two
/// row-major matrices.
///
/// Returns `None` when the shapes do not compose (the column count of `m1`
/// must equal the row count of `m2`) or when either operand is empty. Rows
/// are assumed rectangular.
///
/// ```
/// use etude_kata::matrix::product;
///
/// let row = vec![vec![1.0, 2.0, 3.0]];
/// let col = vec![vec![4.0], vec![5.0], vec![6.0]];
/// let result = product(&row, &col).unwrap();
/// assert_eq!(result.len(), 1);
/// assert!((result[0][0] - 32.0).abs() < 1e-9);
/// ```
///
/// # Panics
///
/// Panics if a row of `m2` is shorter than its first row (ragged input).
#[must_use]
pub fn product(m1: &[Vec<f64>], m2: &[Vec<f64>]) -> Option<Vec<Vec<f64>>> {
    let inner = m1.first()?.len();
    if inner == 0 || m2.len() != inner {
        return None;
    }
    let cols = m2.first()?.len();
    if cols == 0 {
        return None;
    }

    Some(
        m1.iter()
            .map(|row| {
                (0..cols)
                    .map(|k| row.iter().zip(m2).map(|(a, m2_row)| a * m2_row[k]).sum())
                    .collect()
            })
            .collect(),
    )
}
