use crate::error::GeometryError;

/// Transpose a sample matrix so that `transposed[j][i] == matrix[i][j]`
/// The matrix must be rectangular: every row has the same number of columns.
///
/// # Example
/// ```
/// use rebar_curves::prelude::*;
///
/// let matrix = vec![vec![1, 2, 3], vec![4, 5, 6]];
/// let transposed = try_transpose(&matrix).unwrap();
/// assert_eq!(transposed, vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
/// assert_eq!(try_transpose(&transposed).unwrap(), matrix);
/// ```
pub fn try_transpose<P: Clone>(matrix: &[Vec<P>]) -> anyhow::Result<Vec<Vec<P>>> {
    let columns = match matrix.first() {
        Some(row) => row.len(),
        None => return Ok(vec![]),
    };

    if let Some((index, row)) = matrix
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != columns)
    {
        return Err(GeometryError::RaggedMatrix {
            row: index,
            expected: columns,
            actual: row.len(),
        }
        .into());
    }

    let mut transposed = vec![Vec::with_capacity(matrix.len()); columns];
    matrix.iter().for_each(|row| {
        row.iter().enumerate().for_each(|(j, p)| {
            transposed[j].push(p.clone());
        })
    });
    Ok(transposed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transpose_twice_restores_matrix() {
        let matrix = vec![
            vec![0.0, 0.1, 0.2, 0.3],
            vec![1.0, 1.1, 1.2, 1.3],
            vec![2.0, 2.1, 2.2, 2.3],
        ];
        let transposed = try_transpose(&matrix).unwrap();
        assert_eq!(transposed.len(), 4);
        assert!(transposed.iter().all(|column| column.len() == 3));
        assert_eq!(transposed[2], vec![0.2, 1.2, 2.2]);
        assert_eq!(try_transpose(&transposed).unwrap(), matrix);
    }

    #[test]
    fn square_matrix() {
        let matrix = vec![vec![1, 2], vec![3, 4]];
        assert_eq!(try_transpose(&matrix).unwrap(), vec![vec![1, 3], vec![2, 4]]);
    }

    #[test]
    fn ragged_matrix_is_rejected() {
        let matrix = vec![vec![1, 2, 3], vec![4, 5]];
        let err = try_transpose(&matrix).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GeometryError>(),
            Some(&GeometryError::RaggedMatrix {
                row: 1,
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn empty_matrix() {
        let matrix: Vec<Vec<u8>> = vec![];
        assert!(try_transpose(&matrix).unwrap().is_empty());
    }
}
